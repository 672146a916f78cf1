//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l’unique moteur de la session et lui transmettre les événements boutons.
//!
//! Contrats :
//! - Aucune arithmétique ici (tout passe par `Moteur`).
//! - Un clic = un appel, exécuté jusqu’au bout avant le clic suivant.
//! - La vue ne lit que : écran, historique, mode.

use tracing::debug;

use crate::noyau::touches::Operateur;
use crate::noyau::{Mode, Moteur, Touche};

#[derive(Clone, Debug)]
pub struct AppCalc {
    moteur: Moteur,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            moteur: Moteur::new(),
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    pub fn appuyer(&mut self, touche: Touche) {
        self.moteur.appuyer(touche);
    }

    pub fn definir_mode(&mut self, mode: Mode) {
        if mode != self.moteur.mode() {
            debug!(mode = mode.libelle(), "changement de mode");
        }
        self.moteur.definir_mode(mode);
    }

    /* ------------------------ Lecture (vue) ------------------------ */

    pub fn ecran(&self) -> String {
        self.moteur.texte_affichage()
    }

    pub fn operande_courant(&self) -> &str {
        self.moteur.courant()
    }

    /// Opérateur à surligner : choisi, mais opérande droit pas encore commencé.
    pub fn operateur_actif(&self) -> Option<Operateur> {
        match self.moteur.en_attente() {
            Some(e) if self.moteur.attend_nouvel_operande() => Some(e.op),
            _ => None,
        }
    }

    pub fn historique(&self) -> &str {
        self.moteur.texte_historique()
    }

    pub fn mode(&self) -> Mode {
        self.moteur.mode()
    }
}
