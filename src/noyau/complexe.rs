// src/noyau/complexe.rs
//
// Nombre complexe a + bi (flottants f64), valeur immuable.
// - Chaque opération retourne un NOUVEAU Complexe (aucune mutation).
// - Égalité structurelle (les deux composantes), donc NaN != NaN.
// - Branche principale partout : arg() ∈ (-π, π], log/pow en héritent.

use std::f64::consts::E;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complexe {
    pub re: f64,
    pub im: f64,
}

impl Complexe {
    pub const ZERO: Complexe = Complexe { re: 0.0, im: 0.0 };
    pub const UN: Complexe = Complexe { re: 1.0, im: 0.0 };
    pub const I: Complexe = Complexe { re: 0.0, im: 1.0 };

    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Réel pur (partie imaginaire nulle).
    pub const fn reel(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Imaginaire pur.
    pub const fn imaginaire(im: f64) -> Self {
        Self { re: 0.0, im }
    }

    /* ------------------------ Algèbre ------------------------ */

    pub fn add(self, w: Complexe) -> Complexe {
        Complexe::new(self.re + w.re, self.im + w.im)
    }

    pub fn subtract(self, w: Complexe) -> Complexe {
        Complexe::new(self.re - w.re, self.im - w.im)
    }

    /// (ac - bd) + (ad + bc)i
    pub fn multiply(self, w: Complexe) -> Complexe {
        Complexe::new(
            self.re * w.re - self.im * w.im,
            self.re * w.im + self.im * w.re,
        )
    }

    /// Produit par un scalaire réel.
    pub fn scale(self, s: f64) -> Complexe {
        Complexe::new(self.re * s, self.im * s)
    }

    /// ((ac + bd) + (bc - ad)i) / (c² + d²)
    ///
    /// Pas de garde ici : l’évaluateur refuse un diviseur exactement nul AVANT l’appel.
    /// Un diviseur nul donne NaN/inf (IEEE).
    pub fn divide(self, w: Complexe) -> Complexe {
        let d = w.re * w.re + w.im * w.im;
        Complexe::new(
            (self.re * w.re + self.im * w.im) / d,
            (self.im * w.re - self.re * w.im) / d,
        )
    }

    /// |z| = √(a² + b²), toujours >= 0 (ou NaN).
    pub fn modulus(self) -> f64 {
        (self.re * self.re + self.im * self.im).sqrt()
    }

    /// atan2(b, a), dans (-π, π].
    pub fn argument(self) -> f64 {
        self.im.atan2(self.re)
    }

    pub fn conjugate(self) -> Complexe {
        Complexe::new(self.re, -self.im)
    }

    /// (a - bi) / (a² + b²) ; indéfini (NaN/inf) pour z = 0.
    pub fn reciprocal(self) -> Complexe {
        let d = self.re * self.re + self.im * self.im;
        Complexe::new(self.re / d, -self.im / d)
    }

    /* ------------------------ Puissances ------------------------ */

    /// z^p, p réel, forme polaire : |z|^p ∠ (p·arg z).
    /// Sert pour TOUS les exposants réels (négatifs, fractionnaires compris).
    pub fn powf(self, p: f64) -> Complexe {
        let module = self.modulus().powf(p);
        let angle = p * self.argument();
        Complexe::new(module * angle.cos(), module * angle.sin())
    }

    /// z^w, w complexe :
    /// - w = 0            => 1
    /// - w réel           => powf(w.re)
    /// - sinon            => exp(ln(z) · w)
    pub fn powc(self, w: Complexe) -> Complexe {
        if w.re == 0.0 && w.im == 0.0 {
            return Complexe::UN;
        }
        if w.im == 0.0 {
            return self.powf(w.re);
        }
        self.log(E).multiply(w).exp()
    }

    /* ------------------------ Transcendantes ------------------------ */

    /// e^a · (cos b + i sin b)
    pub fn exp(self) -> Complexe {
        let ea = self.re.exp();
        Complexe::new(ea * self.im.cos(), ea * self.im.sin())
    }

    /// sin(a)cosh(b) + i cos(a)sinh(b)
    pub fn sin(self) -> Complexe {
        Complexe::new(
            self.re.sin() * self.im.cosh(),
            self.re.cos() * self.im.sinh(),
        )
    }

    /// cos(a)cosh(b) - i sin(a)sinh(b)
    pub fn cos(self) -> Complexe {
        Complexe::new(
            self.re.cos() * self.im.cosh(),
            -self.re.sin() * self.im.sinh(),
        )
    }

    /// log_base(z) = ln|z|/ln(base) + i·arg(z)/ln(base)
    /// Coupure le long de l’axe réel négatif (celle de arg).
    pub fn log(self, base: f64) -> Complexe {
        let ln_base = base.ln();
        Complexe::new(self.modulus().ln() / ln_base, self.argument() / ln_base)
    }
}

/* ------------------------ Opérateurs (sucre) ------------------------ */

impl Add for Complexe {
    type Output = Complexe;
    fn add(self, w: Complexe) -> Complexe {
        Complexe::add(self, w)
    }
}

impl Sub for Complexe {
    type Output = Complexe;
    fn sub(self, w: Complexe) -> Complexe {
        self.subtract(w)
    }
}

impl Mul for Complexe {
    type Output = Complexe;
    fn mul(self, w: Complexe) -> Complexe {
        self.multiply(w)
    }
}

impl Mul<f64> for Complexe {
    type Output = Complexe;
    fn mul(self, s: f64) -> Complexe {
        self.scale(s)
    }
}

impl Div for Complexe {
    type Output = Complexe;
    fn div(self, w: Complexe) -> Complexe {
        self.divide(w)
    }
}

impl Neg for Complexe {
    type Output = Complexe;
    fn neg(self) -> Complexe {
        self.scale(-1.0)
    }
}

impl Zero for Complexe {
    fn zero() -> Self {
        Complexe::ZERO
    }

    /// Zéro EXACT (structurel) : c’est le test du diviseur nul.
    fn is_zero(&self) -> bool {
        *self == Complexe::ZERO
    }
}

impl One for Complexe {
    fn one() -> Self {
        Complexe::UN
    }
}

impl From<f64> for Complexe {
    fn from(re: f64) -> Self {
        Complexe::reel(re)
    }
}
