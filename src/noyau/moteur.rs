//! src/noyau/moteur.rs
//!
//! Moteur de la calculatrice : machine à états de saisie + évaluation.
//!
//! Deux macro-états, portés par `attend_nouvel_operande` :
//! - saisie en cours (false) : chiffres et point prolongent `courant`
//! - attente d’opérande (true) : le prochain chiffre/point remplace `courant`
//!
//! Orthogonalement, `en_attente` porte l’expression binaire en cours (gauche + opérateur).
//!
//! Contrats :
//! - `courant` n’est jamais vide ("0" = zéro canonique), au plus un '.'
//! - gauche et opérateur sont présents ensemble ou absents ensemble (un seul Option)
//! - enchaînement strictement de gauche à droite, sans priorité : 2 + 3 × 4 = 20
//! - aucune erreur levée : un NaN devient le texte "Error" (absorbant)

use tracing::{debug, trace};

use super::calcul;
use super::format::{formater_nombre, formater_resultat, ERREUR};
use super::lecture::lire_nombre;
use super::touches::{Chiffre, Constante, Fonction, Mode, Operateur, Touche};

/// Zéro canonique de l’opérande courant.
pub const ZERO: &str = "0";

/// Expression binaire capturée à l’appui d’un opérateur.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpressionEnAttente {
    pub gauche: String,
    pub op: Operateur,
}

#[derive(Clone, Debug)]
pub struct Moteur {
    courant: String,
    en_attente: Option<ExpressionEnAttente>,
    attend_nouvel_operande: bool,
    mode: Mode,
    historique: String,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            courant: ZERO.to_string(),
            en_attente: None,
            attend_nouvel_operande: false,
            mode: Mode::default(),
            historique: String::new(),
        }
    }
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture de l’état ------------------------ */

    pub fn courant(&self) -> &str {
        &self.courant
    }

    pub fn en_attente(&self) -> Option<&ExpressionEnAttente> {
        self.en_attente.as_ref()
    }

    pub fn attend_nouvel_operande(&self) -> bool {
        self.attend_nouvel_operande
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Écran : "gauche op courant" si une expression est en cours, sinon "courant".
    /// Projection pure de l’état, recalculée à chaque lecture.
    pub fn texte_affichage(&self) -> String {
        match &self.en_attente {
            Some(e) => format!("{}{}{}", e.gauche, e.op.symbole(), self.courant),
            None => self.courant.clone(),
        }
    }

    pub fn texte_historique(&self) -> &str {
        &self.historique
    }

    /* ------------------------ Commandes ------------------------ */

    /// Point d’entrée unique de la vue : un bouton = une commande.
    pub fn appuyer(&mut self, touche: Touche) {
        trace!(%touche, "touche");
        match touche {
            Touche::Chiffre(c) => self.saisir_chiffre(c),
            Touche::Virgule => self.saisir_virgule(),
            Touche::Operateur(op) => self.appliquer_operateur(op),
            Touche::Egal => self.egal(),
            Touche::Fonction(f) => self.appliquer_fonction(f),
            Touche::ChangerSigne => self.changer_signe(),
            Touche::Constante(c) => self.inserer_constante(c),
            Touche::Effacement => self.effacer_dernier(),
            Touche::Remise => self.remise_a_zero(),
        }
    }

    pub fn saisir_chiffre(&mut self, chiffre: Chiffre) {
        let c = chiffre.symbole();
        self.historique.push(c);

        if self.attend_nouvel_operande {
            self.courant = c.to_string();
            self.attend_nouvel_operande = false;
        } else if self.courant == ZERO {
            self.courant = c.to_string();
        } else {
            self.courant.push(c);
        }
    }

    pub fn saisir_virgule(&mut self) {
        self.historique.push('.');

        if self.attend_nouvel_operande {
            self.courant = "0.".to_string();
            self.attend_nouvel_operande = false;
        } else if !self.courant.contains('.') {
            self.courant.push('.');
        }
    }

    pub fn appliquer_operateur(&mut self, op: Operateur) {
        self.historique.push_str(op.symbole());

        // Un nouvel opérande droit a été tapé : on résout d’abord (gauche à droite).
        if self.en_attente.is_some() && !self.attend_nouvel_operande {
            self.resoudre();
        }

        self.en_attente = Some(ExpressionEnAttente {
            gauche: self.courant.clone(),
            op,
        });
        self.attend_nouvel_operande = true;
    }

    /// "=" : sans expression en cours, seul l’historique bouge.
    pub fn egal(&mut self) {
        self.historique.push('=');
        self.resoudre();
    }

    /// Ne touche pas à l’expression en cours : on peut transformer l’opérande droit.
    pub fn appliquer_fonction(&mut self, f: Fonction) {
        self.historique.push_str(f.libelle());

        let x = lire_nombre(&self.courant);
        let y = calcul::appliquer_fonction(f, x);
        self.courant = formater_resultat(y);
        self.attend_nouvel_operande = true;

        debug!(fonction = f.libelle(), x, resultat = %self.courant, "fonction");
    }

    /// -0 s’affiche "0" : changer le signe de "0" laisse "0".
    pub fn changer_signe(&mut self) {
        self.historique.push('±');
        self.courant = formater_resultat(-lire_nombre(&self.courant));
    }

    pub fn inserer_constante(&mut self, c: Constante) {
        self.historique.push_str(c.symbole());
        self.courant = formater_nombre(c.valeur());
        self.attend_nouvel_operande = true;
    }

    /// ⌫ : n’édite que l’opérande courant (opérateur en attente et drapeau conservés).
    pub fn effacer_dernier(&mut self) {
        self.historique.push('⌫');

        if self.courant == ERREUR {
            return;
        }

        if self.courant.chars().count() <= 1 {
            self.courant = ZERO.to_string();
            return;
        }

        self.courant.pop();
        if self.courant == "-" {
            self.courant = ZERO.to_string();
        }
    }

    /// C : retour à l’état initial, mode conservé.
    pub fn remise_a_zero(&mut self) {
        let mode = self.mode;
        *self = Self {
            mode,
            ..Self::default()
        };
    }

    pub fn definir_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /* ------------------------ Interne ------------------------ */

    /// Résout l’expression en cours dans `courant` (sans écrire dans l’historique).
    fn resoudre(&mut self) {
        let Some(ExpressionEnAttente { gauche, op }) = self.en_attente.take() else {
            return;
        };

        let a = lire_nombre(&gauche);
        let b = lire_nombre(&self.courant);
        let r = calcul::appliquer_operateur(op, a, b);

        self.courant = formater_resultat(r);
        self.attend_nouvel_operande = true;

        debug!(%gauche, op = op.symbole(), droite = b, resultat = %self.courant, "expression résolue");
    }
}
