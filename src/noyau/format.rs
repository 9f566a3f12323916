// src/noyau/format.rs
//
// Affichage d’un Complexe à `precision` décimales.
//
// Règles (dans cet ordre) :
// - re et im arrondis séparément à `precision` décimales
// - les deux nuls         => "0.00"          (zéro réel, `precision` décimales)
// - réel nul              => "<im>i"
// - imaginaire nul        => "<re>"
// - imaginaire == 1       => "(<re> + i)"
// - sinon                 => "(<re> + <|im|>i)" ou "(<re> - <|im|>i)"

use std::fmt;

use super::complexe::Complexe;

/// Précision par défaut (traces "Evaluating : ..." et `{}`).
pub const PRECISION_DEFAUT: usize = 2;

/// Borne haute des décimales : le plus petit f64 sous-normal s’écrit en 1074 décimales,
/// au-delà tout n’est que zéros (et `{:.*}` refuse une précision > u16::MAX).
pub const PRECISION_MAX_NOYAU: usize = 1100;

/// Arrondi décimal à `precision` chiffres, via le rendu texte.
/// Évite le débordement de x·10^p pour les grandes précisions.
fn arrondi(x: f64, precision: usize) -> f64 {
    format!("{:.*}", precision, x).parse::<f64>().unwrap_or(x)
}

pub fn format_complexe(z: Complexe, precision: usize) -> String {
    let precision = precision.min(PRECISION_MAX_NOYAU);
    let re = arrondi(z.re, precision);
    let im = arrondi(z.im, precision);

    if re == 0.0 && im == 0.0 {
        return format!("{:.*}", precision, 0.0);
    }
    if re == 0.0 {
        return format!("{:.*}i", precision, im);
    }
    if im == 0.0 {
        return format!("{:.*}", precision, re);
    }
    if im == 1.0 {
        return format!("({:.*} + i)", precision, re);
    }

    // signe replié dans l’opérateur, module imprimé
    let op = if im < 0.0 { '-' } else { '+' };
    format!("({:.*} {op} {:.*}i)", precision, re, precision, im.abs())
}

/// `{}` => 2 décimales ; `{:.4}` => 4 décimales.
impl fmt::Display for Complexe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(PRECISION_DEFAUT);
        f.write_str(&format_complexe(*self, p))
    }
}
