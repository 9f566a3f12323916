//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, précision, démarche,
//! saisie de variable) et l’évaluateur qui possède l’environnement de variables.
//!
//! Contrats :
//! - Aucune logique de parsing ici : tout passe par le noyau.
//! - Actions déterministes, sans effet de bord caché.
//! - Défense en profondeur : bornes sur la précision.

use calculatrice_complexe::noyau::{Complexe, Evaluateur};

/// Précision d’affichage par défaut (décimales).
const PRECISION_UI_DEFAUT: usize = 4;

/// Garde-fou : au-delà, les décimales f64 n’ont plus de sens.
const PRECISION_MAX: usize = 15;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,
    pub erreur: String,

    // --- démarche (mode verbeux) ---
    pub demarche: String,

    // --- paramètres ---
    pub precision: usize,
    pub verbose: bool,

    // --- variables ---
    pub evaluateur: Evaluateur,
    pub var_nom: String,
    pub var_re: String,
    pub var_im: String,

    // --- UX ---
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: String::new(),
            precision: PRECISION_UI_DEFAUT,
            verbose: false,
            evaluateur: Evaluateur::new(),
            var_nom: String::new(),
            var_re: String::new(),
            var_im: String::new(),
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + précision). Les variables restent.
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.precision = PRECISION_UI_DEFAUT;
        self.verbose = false;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche.
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche.clear();
        self.focus_entree = true;
    }

    /// Erreur : on CONSERVE le dernier résultat, on coupe la démarche (non fiable).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche.clear();
        self.focus_entree = true;
    }

    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: String) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    pub fn set_precision(&mut self, precision: usize) {
        self.precision = precision.min(PRECISION_MAX);
        self.focus_entree = true;
    }

    /* ------------------------ Variables ------------------------ */

    /// Définit la variable saisie (nom + parties réelle / imaginaire, vides = 0).
    pub fn definir_variable(&mut self) {
        let nom = self.var_nom.trim().to_string();
        if nom.is_empty() {
            self.set_erreur("nom de variable vide");
            return;
        }

        let lire = |s: &str, quoi: &str| -> Result<f64, String> {
            let s = s.trim();
            if s.is_empty() {
                return Ok(0.0);
            }
            s.parse::<f64>()
                .map_err(|_| format!("partie {quoi} invalide : {s:?}"))
        };

        let valeur = lire(&self.var_re, "réelle")
            .and_then(|re| lire(&self.var_im, "imaginaire").map(|im| Complexe::new(re, im)));

        match valeur {
            Ok(z) => {
                tracing::debug!(nom = %nom, valeur = %z, "variable définie");
                self.evaluateur.set_variable(nom, z);
                self.var_nom.clear();
                self.var_re.clear();
                self.var_im.clear();
                self.erreur.clear();
            }
            Err(msg) => self.set_erreur(msg),
        }
    }

    pub fn supprimer_variable(&mut self, nom: &str) {
        self.evaluateur.remove_variable(nom);
        tracing::debug!(nom, "variable supprimée");
    }
}
