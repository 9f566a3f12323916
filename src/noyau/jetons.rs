// src/noyau/jetons.rs
//
// Symboles terminaux + résolution d’un opérande texte en Complexe.
//
// Ordre de résolution (déterministe, constantes AVANT l’environnement) :
//   ""            => 0
//   "pi" / "e"    => π / e
//   "...i"        => imaginaire ("i", "pii", "ei", "2.5i")
//   littéral réel => re + 0i
//   variable liée => sa valeur
//   sinon         => SymboleInconnu

use std::collections::HashMap;
use std::f64::consts::{E, PI};

use super::complexe::Complexe;
use super::erreur::{ErreurEval, Resultat};

/// Symboles terminaux, par priorité DÉCROISSANTE.
/// L’ordre est aussi celui des passes de réduction.
pub const SYMBOLES_TERMINAUX: [char; 5] = ['^', '/', '*', '-', '+'];

pub fn est_terminal(c: char) -> bool {
    SYMBOLES_TERMINAUX.contains(&c)
}

/// Constantes nommées (hors suffixe i).
fn constante(nom: &str) -> Option<f64> {
    match nom {
        "pi" => Some(PI),
        "e" => Some(E),
        _ => None,
    }
}

/// Réel littéral au sens décimal : `12`, `.5`, `2.5e-3`.
/// `parse::<f64>` accepte aussi `inf` / `nan` / `infinity` : ces noms restent des variables.
fn lire_reel(s: &str) -> Option<f64> {
    let corps = s.strip_prefix(['+', '-']).unwrap_or(s);
    match corps.chars().next() {
        Some(c) if c.is_ascii_digit() || c == '.' => s.parse::<f64>().ok(),
        _ => None,
    }
}

/// Résout un jeton (déjà `trim`é) en Complexe.
pub fn resoudre_operande(
    token: &str,
    variables: &HashMap<String, Complexe>,
) -> Resultat<Complexe> {
    if token.is_empty() {
        return Ok(Complexe::ZERO);
    }

    if let Some(v) = constante(token) {
        return Ok(Complexe::reel(v));
    }

    // Imaginaires : suffixe 'i'
    if let Some(reste) = token.strip_suffix('i') {
        if reste.is_empty() {
            return Ok(Complexe::I);
        }
        if let Some(v) = constante(reste) {
            return Ok(Complexe::imaginaire(v));
        }
        if let Some(v) = lire_reel(reste) {
            return Ok(Complexe::imaginaire(v));
        }
        // "phi", "xi"... : ce n’est pas un littéral, on tente la variable plus bas
    }

    if let Some(v) = lire_reel(token) {
        return Ok(Complexe::reel(v));
    }

    variables
        .get(token)
        .copied()
        .ok_or_else(|| ErreurEval::symbole_inconnu(token))
}
