//! Noyau — évaluation (pipeline réel)
//!
//! texte -> balayage gauche→droite (tampon + moins unaire)
//!       -> sous-expressions / fonctions (récursif, une profondeur par parenthèse)
//!       -> suites opérandes / opérateurs -> réduction par priorité -> Complexe -> texte
//!
//! Aucune représentation intermédiaire conservée entre deux appels (pas d’AST, pas de cache).

use std::collections::HashMap;

use tracing::{debug, info};

use super::complexe::Complexe;
use super::erreur::{ErreurEval, Resultat};
use super::format::format_complexe;
use super::jetons::{est_terminal, resoudre_operande};
use super::reduction::reduit;

/// Garde-fou : profondeur maximale d’imbrication des parenthèses.
pub const PROFONDEUR_MAX: usize = 200;

/// Démarche (mode verbeux) : une ligne par sous-équation, fonction ou opération.
///
/// Inactive => rien n’est formaté ni stocké.
#[derive(Clone, Debug, Default)]
pub struct Demarche {
    active: bool,
    lignes: Vec<String>,
}

impl Demarche {
    pub fn active() -> Self {
        Self {
            active: true,
            lignes: Vec::new(),
        }
    }

    pub fn inactive() -> Self {
        Self::default()
    }

    pub fn new(verbose: bool) -> Self {
        if verbose {
            Self::active()
        } else {
            Self::inactive()
        }
    }

    pub fn est_active(&self) -> bool {
        self.active
    }

    /// Ajoute une ligne (formatée seulement si la démarche est active).
    pub fn push_with(&mut self, ligne: impl FnOnce() -> String) {
        if !self.active {
            return;
        }
        let ligne = ligne();
        info!(target: "demarche", "{ligne}");
        self.lignes.push(ligne);
    }

    pub fn lignes(&self) -> &[String] {
        &self.lignes
    }

    /// Texte multi-ligne (affichage).
    pub fn texte(&self) -> String {
        self.lignes.join("\n")
    }
}

/// Évaluateur d’expressions complexes.
///
/// Possède son environnement de variables (pas de singleton) :
/// deux évaluateurs ne partagent rien.
#[derive(Clone, Debug, Default)]
pub struct Evaluateur {
    variables: HashMap<String, Complexe>,
}

impl Evaluateur {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn avec_variables(variables: HashMap<String, Complexe>) -> Self {
        Self { variables }
    }

    /* ------------------------ Environnement ------------------------ */

    /// Upsert. Aucun contrôle des noms réservés (pi, e, i) : les constantes gagnent toujours.
    pub fn set_variable(&mut self, nom: impl Into<String>, valeur: Complexe) {
        self.variables.insert(nom.into(), valeur);
    }

    /// Variante réelle (partie imaginaire nulle).
    pub fn set_variable_reel(&mut self, nom: impl Into<String>, valeur: f64) {
        self.set_variable(nom, Complexe::reel(valeur));
    }

    /// Remplace tout l’environnement.
    pub fn set_variables(&mut self, variables: HashMap<String, Complexe>) {
        self.variables = variables;
    }

    pub fn get_variable(&self, nom: &str) -> Option<Complexe> {
        self.variables.get(nom).copied()
    }

    /// Sans effet si absente.
    pub fn remove_variable(&mut self, nom: &str) {
        self.variables.remove(nom);
    }

    /// Variables triées par nom (affichage stable).
    pub fn variables(&self) -> Vec<(String, Complexe)> {
        let mut v: Vec<(String, Complexe)> = self
            .variables
            .iter()
            .map(|(k, z)| (k.clone(), *z))
            .collect();
        v.sort_by(|a, b| a.0.cmp(&b.0));
        v
    }

    /* ------------------------ API publique ------------------------ */

    /// Point d’entrée : évalue et formate à `precision` décimales.
    /// En mode verbeux, la démarche est journalisée (cible `demarche`).
    pub fn evaluate(&self, expression: &str, precision: usize, verbose: bool) -> Resultat<String> {
        self.evaluate_detaille(expression, precision, verbose)
            .map(|(texte, _)| texte)
    }

    /// Comme `evaluate`, mais rend aussi la démarche collectée.
    pub fn evaluate_detaille(
        &self,
        expression: &str,
        precision: usize,
        verbose: bool,
    ) -> Resultat<(String, Demarche)> {
        let mut demarche = Demarche::new(verbose);
        let res = self
            .reduire(expression, 0, &mut demarche)
            .map(|z| format_complexe(z, precision));

        match &res {
            Ok(texte) => debug!(expression, precision, resultat = %texte, "évaluation"),
            Err(e) => debug!(expression, precision, erreur = %e, "évaluation échouée"),
        }

        res.map(|texte| (texte, demarche))
    }

    /// Valeur brute (sans formatage ni démarche).
    pub fn evaluate_complexe(&self, expression: &str) -> Resultat<Complexe> {
        self.reduire(expression, 0, &mut Demarche::inactive())
    }

    /* ------------------------ Balayage récursif ------------------------ */

    fn operande(&self, token: &str, negatif: bool) -> Resultat<Complexe> {
        let z = resoudre_operande(token, &self.variables)?;
        Ok(if negatif { z.scale(-1.0) } else { z })
    }

    fn reduire(
        &self,
        expression: &str,
        profondeur: usize,
        demarche: &mut Demarche,
    ) -> Resultat<Complexe> {
        if profondeur > PROFONDEUR_MAX {
            return Err(ErreurEval::syntaxe(format!(
                "imbrication trop profonde (max {PROFONDEUR_MAX})"
            )));
        }

        let chars: Vec<char> = expression.chars().collect();

        let mut operandes: Vec<Complexe> = Vec::new();
        let mut operateurs: Vec<char> = Vec::new();
        let mut tampon = String::new();
        let mut negatif = false;

        let mut i: usize = 0;
        while i < chars.len() {
            let c = chars[i];

            // Opérateur terminal : ferme l’opérande en cours
            if est_terminal(c) {
                let token = tampon.trim();
                if !token.is_empty() {
                    operandes.push(self.operande(token, negatif)?);
                    operateurs.push(c);
                    tampon.clear();
                    negatif = false;
                } else if c == '-' {
                    // moins unaire : pas d’opérateur émis
                    negatif = true;
                } else {
                    return Err(ErreurEval::syntaxe(format!(
                        "équation invalide : '{c}' sans opérande à gauche"
                    )));
                }
                i += 1;
                continue;
            }

            // Groupe ou appel de fonction : le tampon est le nom (vide = groupe simple)
            if c == '(' {
                let fonction = tampon.trim().to_string();
                let fin = parenthese_fermante(&chars, i)?;
                let sous: String = chars[i + 1..fin].iter().collect();

                demarche.push_with(|| format!("SubEquation: {sous}"));

                let mut valeur = self.reduire(&sous, profondeur + 1, demarche)?;
                if negatif {
                    valeur = valeur.scale(-1.0);
                }
                operandes.push(applique_fonction(&fonction, valeur, demarche)?);

                // Le caractère suivant ')' (espaces ignorés) est l’opérateur suivant.
                let mut k = fin + 1;
                while k < chars.len() && chars[k].is_whitespace() {
                    k += 1;
                }
                if k < chars.len() {
                    let op = chars[k];
                    if !est_terminal(op) {
                        return Err(ErreurEval::syntaxe(format!(
                            "opérateur attendu après ')', trouvé '{op}'"
                        )));
                    }
                    operateurs.push(op);
                    k += 1;
                }

                tampon.clear();
                negatif = false;
                i = k;
                continue;
            }

            if c == ')' {
                return Err(ErreurEval::syntaxe("séquence de parenthèses invalide"));
            }

            tampon.push(c);
            i += 1;
        }

        // Dernier opérande
        let token = tampon.trim();
        if !token.is_empty() {
            operandes.push(self.operande(token, negatif)?);
        }

        reduit(operandes, operateurs, demarche)
    }
}

/// Index de la ')' qui ferme la '(' en `ouvrante`.
/// Pas de fermante => séquence invalide (jamais de balayage hors borne).
fn parenthese_fermante(chars: &[char], ouvrante: usize) -> Resultat<usize> {
    let mut niveau: usize = 0;
    for (j, &c) in chars.iter().enumerate().skip(ouvrante + 1) {
        match c {
            '(' => niveau += 1,
            ')' if niveau == 0 => return Ok(j),
            ')' => niveau -= 1,
            _ => {}
        }
    }
    Err(ErreurEval::syntaxe("séquence de parenthèses invalide"))
}

/// Dispatch sur le nom de fonction placé devant la parenthèse.
fn applique_fonction(nom: &str, x: Complexe, demarche: &mut Demarche) -> Resultat<Complexe> {
    if nom.is_empty() {
        return Ok(x);
    }

    // trace posée avant le calcul : elle reste visible si la fonction échoue
    demarche.push_with(|| format!("Evaluating : {nom}({x})"));

    let y = match nom {
        "sin" => x.sin(),
        "cos" => x.cos(),
        "tan" => {
            let c = x.cos();
            // cos(re)·cosh(im) ne s’annule jamais exactement pour re fini :
            // garde atteinte seulement via un cos() de plateforme qui arrondirait à 0.
            if c == Complexe::ZERO {
                return Err(ErreurEval::DivisionParZero);
            }
            x.sin().divide(c)
        }
        "log" => x.log(std::f64::consts::E),
        _ => return Err(ErreurEval::fonction_non_supportee(nom)),
    };

    Ok(y)
}
