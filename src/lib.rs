//! Calculatrice complexe : noyau d’évaluation d’expressions sur ℂ.
//!
//! ```
//! use calculatrice_complexe::noyau::Evaluateur;
//!
//! let ev = Evaluateur::new();
//! assert_eq!(ev.evaluate("3^-1+2^-2", 4, false).unwrap(), "0.5833");
//! ```

pub mod journal;
pub mod noyau;
