//! Noyau de la calculatrice à saisie directe
//!
//! Organisation interne :
//! - touches.rs : touches du pavé (types fermés) + lecture des libellés
//! - calcul.rs  : arithmétique f64 (NaN = seule erreur)
//! - lecture.rs : texte d’opérande -> f64
//! - format.rs  : f64 -> texte d’opérande ("Error" si NaN)
//! - moteur.rs  : machine à états (saisie, expression en attente, écran, historique)

pub mod calcul;
pub mod format;
pub mod lecture;
pub mod moteur;
pub mod touches;

#[cfg(test)]
mod tests_scenarios;


// API publique minimale
pub use moteur::Moteur;
pub use touches::{Mode, Touche};
