//! Erreurs du noyau.
//!
//! Toutes définitives pour une entrée donnée : l’évaluation s’arrête à la première,
//! sans résultat partiel.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ErreurEval {
    /// Opérateur mal placé, parenthèses déséquilibrées, compte opérandes/opérateurs faux.
    #[error("erreur de syntaxe : {0}")]
    Syntaxe(String),

    /// Ni littéral, ni constante, ni variable liée.
    #[error("symbole introuvable : {0}")]
    SymboleInconnu(String),

    #[error("fonction non supportée : {0}")]
    FonctionNonSupportee(String),

    /// Diviseur exactement 0 + 0i (division directe ou tan).
    #[error("division par zéro")]
    DivisionParZero,

    #[error("opérateur invalide : '{0}'")]
    OperateurInvalide(char),
}

impl ErreurEval {
    pub fn syntaxe(msg: impl Into<String>) -> Self {
        Self::Syntaxe(msg.into())
    }

    pub fn symbole_inconnu(token: impl Into<String>) -> Self {
        Self::SymboleInconnu(token.into())
    }

    pub fn fonction_non_supportee(nom: impl Into<String>) -> Self {
        Self::FonctionNonSupportee(nom.into())
    }
}

pub type Resultat<T> = std::result::Result<T, ErreurEval>;
