//! Noyau complexe
//!
//! Organisation interne :
//! - complexe.rs  : type Complexe (a + bi) + opérations algébriques / transcendantes
//! - format.rs    : affichage à N décimales (règles re / im / coefficient 1)
//! - erreur.rs    : erreurs typées (syntaxe, symbole, fonction, division, opérateur)
//! - jetons.rs    : symboles terminaux + résolution d’opérande (constantes, i, variables)
//! - reduction.rs : calcul binaire + réduction par priorité ^ / * - +
//! - eval.rs      : Evaluateur (variables, balayage récursif, démarche)

pub mod complexe;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod reduction;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use complexe::Complexe;
pub use erreur::{ErreurEval, Resultat};
pub use eval::{Demarche, Evaluateur};
pub use format::format_complexe;
