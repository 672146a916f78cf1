// src/noyau/calcul.rs
//
// Arithmétique flottante (f64) du moteur.
// NaN est l’unique sentinelle d’erreur : aucune fonction ici ne panique ni ne renvoie Result.

use super::touches::{Fonction, Operateur};

/// gauche `op` droite. Division par zéro exact -> NaN.
/// Puissance : NaN absorbant (même NaN^0) et (±1)^±∞ indéfini, contrairement à `powf`.
pub fn appliquer_operateur(op: Operateur, gauche: f64, droite: f64) -> f64 {
    match op {
        Operateur::Plus => gauche + droite,
        Operateur::Moins => gauche - droite,
        Operateur::Fois => gauche * droite,
        Operateur::Divise => {
            if droite == 0.0 {
                f64::NAN
            } else {
                gauche / droite
            }
        }
        Operateur::Puissance => puissance(gauche, droite),
    }
}

fn puissance(base: f64, exposant: f64) -> f64 {
    if base.is_nan() || exposant.is_nan() {
        return f64::NAN;
    }
    if exposant.is_infinite() && base.abs() == 1.0 {
        return f64::NAN;
    }
    base.powf(exposant)
}

/// f(x), trigonométrie en radians. 1/0 -> NaN.
pub fn appliquer_fonction(f: Fonction, x: f64) -> f64 {
    match f {
        Fonction::Sin => x.sin(),
        Fonction::Cos => x.cos(),
        Fonction::Tan => x.tan(),
        Fonction::Racine => x.sqrt(),
        Fonction::Log10 => x.log10(),
        Fonction::Ln => x.ln(),
        Fonction::Exp => x.exp(),
        Fonction::Inverse => {
            if x == 0.0 {
                f64::NAN
            } else {
                1.0 / x
            }
        }
        Fonction::Carre => x * x,
        Fonction::ValeurAbsolue => x.abs(),
    }
}
