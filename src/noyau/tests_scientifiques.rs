//! Tests scientifiques (campagne) : invariants algébriques + régressions + limites contrôlées.
//!
//! But : vérifier les propriétés du type Complexe sur un échantillon fixe,
//! puis les cas de référence de l’évaluateur (racine 5e de l’unité, démarches complètes).
//! - tolérance flottante explicite
//! - budget temps global sur le stress

use std::collections::HashMap;
use std::f64::consts::PI;
use std::time::{Duration, Instant};

use num_traits::Zero;

use super::complexe::Complexe;
use super::erreur::ErreurEval;
use super::eval::Evaluateur;
use super::format::format_complexe;
use super::jetons::resoudre_operande;

const EPS: f64 = 1e-9;

fn proche(a: Complexe, b: Complexe) -> bool {
    let echelle = 1.0 + b.modulus();
    (a.re - b.re).abs() < EPS * echelle && (a.im - b.im).abs() < EPS * echelle
}

fn assert_proche(a: Complexe, b: Complexe, ctx: &str) {
    assert!(proche(a, b), "{ctx}: attendu {b:?}, obtenu {a:?}");
}

fn echantillon() -> Vec<Complexe> {
    vec![
        Complexe::new(1.0, 0.0),
        Complexe::new(0.0, 1.0),
        Complexe::new(-2.5, 0.75),
        Complexe::new(3.0, -4.0),
        Complexe::new(-0.3, -0.9),
        Complexe::new(1e-3, 7.0),
        Complexe::new(12.0, 0.5),
    ]
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/// x = racine 5e de l’unité (cas de référence historique).
fn evaluateur_racine_cinquieme() -> Evaluateur {
    let x = Complexe::new((2.0 * PI / 5.0).cos(), (2.0 * PI / 5.0).sin());
    Evaluateur::avec_variables(HashMap::from([("x".to_string(), x)]))
}

/* ------------------------ Invariants algébriques ------------------------ */

#[test]
fn sci_addition_soustraction_inverse() {
    for z in echantillon() {
        for w in echantillon() {
            assert_proche(z.add(w).subtract(w), z, "z + w - w");
        }
    }
}

#[test]
fn sci_multiplication_division_inverse() {
    for z in echantillon() {
        for w in echantillon() {
            assert!(!w.is_zero());
            assert_proche(z.multiply(w).divide(w), z, "z * w / w");
        }
    }
}

#[test]
fn sci_puissances_triviales() {
    for z in echantillon() {
        assert_proche(z.powf(1.0), z, "z^1");
        assert_eq!(z.powf(0.0), Complexe::UN, "z^0 pour z = {z:?}");
        assert_eq!(z.powc(Complexe::ZERO), Complexe::UN);
        assert_eq!(z.conjugate().conjugate(), z);
    }
}

#[test]
fn sci_module_multiplicatif() {
    for z in echantillon() {
        assert!(z.modulus() >= 0.0);
        for w in echantillon() {
            let gauche = z.multiply(w).modulus();
            let droite = z.modulus() * w.modulus();
            assert!((gauche - droite).abs() < EPS * (1.0 + droite));
        }
    }
}

#[test]
fn sci_exp_log_inverse() {
    for z in echantillon() {
        assert_proche(z.log(std::f64::consts::E).exp(), z, "exp(ln z)");
    }
}

#[test]
fn sci_argument_branche_principale() {
    for z in echantillon() {
        let a = z.argument();
        assert!(a > -PI && a <= PI);
    }
    // axe réel négatif : +π, pas -π
    assert_eq!(Complexe::reel(-3.0).argument(), PI);
}

/* ------------------------ Aller-retour format -> opérande ------------------------ */

#[test]
fn sci_aller_retour_reel_et_imaginaire() {
    let vide = HashMap::new();
    for (z, p) in [
        (Complexe::reel(0.583333), 4),
        (Complexe::reel(-12.5), 2),
        (Complexe::imaginaire(3.14159), 3),
        (Complexe::imaginaire(-0.5), 2),
    ] {
        let texte = format_complexe(z, p);
        let relu = resoudre_operande(&texte, &vide)
            .unwrap_or_else(|e| panic!("relecture de {texte:?}: {e}"));
        let tol = 0.5 * 10f64.powi(-(p as i32)) + EPS;
        assert!((relu.re - z.re).abs() <= tol, "{texte:?}");
        assert!((relu.im - z.im).abs() <= tol, "{texte:?}");
    }
}

/* ------------------------ Régressions évaluateur ------------------------ */

#[test]
fn sci_cas_de_reference_sans_demarche() {
    let ev = evaluateur_racine_cinquieme();
    let cas = [
        ("-1.3+e^(2.3-1.2)-sin(pi)", 4, "1.7042"),
        ("3^-1+2^-2", 4, "0.5833"),
        ("(1+i)^(2-i)+2^-i", 4, "(2.2593 + 3.4868i)"),
        ("1.2+(4.5-2.2/0.5+(3.45-2.22))+3.5-2.1", 2, "3.93"),
        ("1.2+(4.5-2.2/0.5+(3.45-2.22))+3.5-2.1", 4, "3.9300"),
    ];
    for (expr, precision, attendu) in cas {
        assert_eq!(
            ev.evaluate(expr, precision, false).as_deref(),
            Ok(attendu),
            "expr={expr:?}"
        );
    }
}

#[test]
fn sci_somme_racines_unite() {
    // 1 + x + x² + x³ + x⁴ = 0
    let ev = evaluateur_racine_cinquieme();
    let (texte, d) = ev.evaluate_detaille("x^4+x^3+x^2+x+1", 2, true).unwrap();
    assert_eq!(texte, "0.00");
    assert_eq!(
        d.lignes(),
        [
            "Evaluating : (0.31 + 0.95i) ^ 4.00",
            "Evaluating : (0.31 + 0.95i) ^ 3.00",
            "Evaluating : (0.31 + 0.95i) ^ 2.00",
            "Evaluating : (0.31 - 0.95i) + (-0.81 - 0.59i)",
            "Evaluating : (-0.50 - 1.54i) + (-0.81 + 0.59i)",
            "Evaluating : (-1.31 - 0.95i) + (0.31 + 0.95i)",
            "Evaluating : -1.00 + 1.00",
        ]
    );
}

#[test]
fn sci_sinus_angle_double() {
    // sin(2x) - 2 sin(x) cos(x) = 0
    let ev = evaluateur_racine_cinquieme();
    let (texte, d) = ev
        .evaluate_detaille("sin(2*x)-2*sin(x)*cos(x)", 2, true)
        .unwrap();
    assert_eq!(texte, "0.00");
    assert_eq!(
        d.lignes(),
        [
            "SubEquation: 2*x",
            "Evaluating : 2.00 * (0.31 + 0.95i)",
            "Evaluating : sin((0.62 + 1.90i))",
            "SubEquation: x",
            "Evaluating : sin((0.31 + 0.95i))",
            "SubEquation: x",
            "Evaluating : cos((0.31 + 0.95i))",
            "Evaluating : 2.00 * (0.45 + 1.05i)",
            "Evaluating : (0.90 + 2.10i) * (1.42 - 0.33i)",
            "Evaluating : (1.98 + 2.67i) - (1.98 + 2.67i)",
        ]
    );
}

#[test]
fn sci_fonctions_imbriquees() {
    let ev = evaluateur_racine_cinquieme();
    let (texte, d) = ev
        .evaluate_detaille("sin(cos(x+tan(x)))+cos(sin(x)-tan(x))", 4, true)
        .unwrap();
    assert_eq!(texte, "(1.8834 + 1.1667i)");
    assert_eq!(
        d.lignes(),
        [
            "SubEquation: cos(x+tan(x))",
            "SubEquation: x+tan(x)",
            "SubEquation: x",
            "Evaluating : tan((0.31 + 0.95i))",
            "Evaluating : (0.31 + 0.95i) + (0.14 + 0.77i)",
            "Evaluating : cos((0.45 + 1.72i))",
            "Evaluating : sin((2.61 - 1.17i))",
            "SubEquation: sin(x)-tan(x)",
            "SubEquation: x",
            "Evaluating : sin((0.31 + 0.95i))",
            "SubEquation: x",
            "Evaluating : tan((0.31 + 0.95i))",
            "Evaluating : (0.45 + 1.05i) - (0.14 + 0.77i)",
            "Evaluating : cos((0.32 + 0.28i))",
            "Evaluating : (0.90 + 1.25i) + (0.99 - 0.09i)",
        ]
    );
}

#[test]
fn sci_variable_issue_d_un_calcul() {
    // x = 2 + log4(5/3)  =>  4^(x+1) - 4^(x-1) = 4^x · 15/4 = 100
    let mut ev = evaluateur_racine_cinquieme();
    let x = ev
        .evaluate_complexe("2 + (  log(5) -   log(3)  )    /  log(4)")
        .unwrap();
    ev.set_variable("x", x);
    assert_eq!(ev.evaluate("4^(x+1) - 4^(x-1)", 2, false).as_deref(), Ok("100.00"));

    // même chose en repassant par le texte (précision 5), comme un utilisateur le ferait
    let texte = ev
        .evaluate("2 + (log(5) - log(3)) / log(4)", 5, false)
        .unwrap();
    ev.set_variable_reel("x", texte.parse::<f64>().unwrap());
    let v: f64 = ev.evaluate("4^(x+1) - 4^(x-1)", 2, false).unwrap().parse().unwrap();
    assert!((v - 100.0).abs() < 0.01);
}

#[test]
fn sci_parenthese_non_fermee() {
    let ev = evaluateur_racine_cinquieme();
    match ev.evaluate("(2+3", 0, false) {
        Err(ErreurEval::Syntaxe(msg)) => assert_eq!(msg, "séquence de parenthèses invalide"),
        autre => panic!("attendu erreur de syntaxe, obtenu {autre:?}"),
    }
}

#[test]
fn sci_tan_pole_exact() {
    // cos(z) exactement nul est quasi impossible en flottant ; tan(pi/2) reste fini
    let ev = Evaluateur::new();
    assert!(ev.evaluate("tan(pi/2)", 2, false).is_ok());
    // division directe par un zéro exact : toujours refusée
    assert_eq!(ev.evaluate("1/(i-i)", 2, false), Err(ErreurEval::DivisionParZero));
}

#[test]
fn sci_ombre_des_constantes() {
    // constantes résolues AVANT l’environnement
    let mut ev = Evaluateur::new();
    ev.set_variable_reel("pi", 3.0);
    ev.set_variable_reel("e", 2.0);
    ev.set_variable_reel("i", 5.0);
    assert_eq!(ev.evaluate("pi", 5, false).as_deref(), Ok("3.14159"));
    assert_eq!(ev.evaluate("e", 3, false).as_deref(), Ok("2.718"));
    assert_eq!(ev.evaluate("i", 0, false).as_deref(), Ok("1i"));
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    // 1+1+...+1 (2000 termes)
    let expr = vec!["1"; 2000].join("+");
    let ev = Evaluateur::new();
    assert_eq!(ev.evaluate(&expr, 0, false).as_deref(), Ok("2000"));
    budget(t0, max);

    // imbrication profonde mais sous le garde-fou
    let expr = format!("{}i{}", "(".repeat(150), ")".repeat(150));
    assert_eq!(ev.evaluate(&expr, 1, false).as_deref(), Ok("1.0i"));
    budget(t0, max);
}
