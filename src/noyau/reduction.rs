// src/noyau/reduction.rs
//
// Réduction par priorité sur deux suites parallèles :
//   operandes  : [o0, o1, ..., on]
//   operateurs : [ p0, ...,  pn-1]      (invariant : |operandes| == |operateurs| + 1)
//
// Pour chaque opérateur dans l’ordre ^ / * - + :
//   tant qu’il apparaît encore, on prend sa PREMIÈRE occurrence (la plus à gauche),
//   on combine o[k] op o[k+1], on remplace la paire par le résultat.
//
// Ce n’est pas un shunting-yard : "/" passe avant "*" et "-" avant "+".
// Équivalent pour ces 5 opérateurs, associativité gauche à priorité égale.

use num_traits::Zero;

use super::complexe::Complexe;
use super::erreur::{ErreurEval, Resultat};
use super::eval::Demarche;
use super::jetons::SYMBOLES_TERMINAUX;

/// Applique un opérateur binaire (trace "Evaluating : a op b" si démarche active).
pub fn calcule(
    a: Complexe,
    b: Complexe,
    op: char,
    demarche: &mut Demarche,
) -> Resultat<Complexe> {
    demarche.push_with(|| format!("Evaluating : {a} {op} {b}"));

    match op {
        '+' => Ok(a.add(b)),
        '-' => Ok(a.subtract(b)),
        '*' => Ok(a.multiply(b)),
        '/' => {
            if b.is_zero() {
                return Err(ErreurEval::DivisionParZero);
            }
            Ok(a.divide(b))
        }
        '^' => Ok(a.powc(b)),
        _ => Err(ErreurEval::OperateurInvalide(op)),
    }
}

/// Réduit les suites jusqu’à un seul opérande.
pub fn reduit(
    mut operandes: Vec<Complexe>,
    mut operateurs: Vec<char>,
    demarche: &mut Demarche,
) -> Resultat<Complexe> {
    if operandes.len() != operateurs.len() + 1 {
        return Err(ErreurEval::syntaxe("équation invalide"));
    }

    for op in SYMBOLES_TERMINAUX {
        while let Some(k) = operateurs.iter().position(|&o| o == op) {
            let b = operandes.remove(k + 1);
            operandes[k] = calcule(operandes[k], b, op, demarche)?;
            operateurs.remove(k);
        }
    }

    // Reste un opérateur hors de l’ensemble fixe : défense en profondeur.
    if let Some(&op) = operateurs.first() {
        return Err(ErreurEval::OperateurInvalide(op));
    }

    operandes
        .pop()
        .ok_or_else(|| ErreurEval::syntaxe("équation invalide"))
}
