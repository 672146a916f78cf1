// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - En-tête : bascule Basic / Scientific
// - Écran : texte d’affichage du moteur (+ historique des touches)
// - Pavé 4 colonnes : décrit par libellés, converti une fois en `Touche`
//
// Pas de clavier physique : seuls les clics pilotent le moteur.

use std::sync::OnceLock;

use eframe::egui;
use tracing::warn;

use super::etat::AppCalc;
use crate::noyau::{Mode, Touche};

/// Taille d’un bouton du pavé.
const TAILLE_BOUTON: [f32; 2] = [72.0, 44.0];

/// Taille du texte de l’écran.
const TAILLE_ECRAN: f32 = 34.0;

/// Lignes propres au mode basique (au-dessus du pavé commun).
const LIGNES_BASIQUES: &[&[&str]] = &[&["C", "⌫", "±"]];

/// Lignes propres au mode scientifique (au-dessus du pavé commun).
const LIGNES_SCIENTIFIQUES: &[&[&str]] = &[
    &["sin", "cos", "tan", "x^y"],
    &["√", "x²", "1/x", "|x|"],
    &["log", "ln", "exp", "π"],
    &["e", "±", "⌫", "C"],
];

/// Pavé commun aux deux modes.
const LIGNES_COMMUNES: &[&[&str]] = &[
    &["7", "8", "9", "÷"],
    &["4", "5", "6", "×"],
    &["1", "2", "3", "−"],
    &["0", ".", "=", "+"],
];

type Ligne = Vec<(&'static str, Touche)>;

struct Pave {
    basique: Vec<Ligne>,
    scientifique: Vec<Ligne>,
}

impl Pave {
    fn lignes(&self, mode: Mode) -> &[Ligne] {
        match mode {
            Mode::Basique => &self.basique,
            Mode::Scientifique => &self.scientifique,
        }
    }
}

/// Libellés -> touches. Un libellé inconnu est journalisé puis ignoré (bouton absent).
fn convertir(lignes: &[&[&'static str]]) -> Vec<Ligne> {
    lignes
        .iter()
        .map(|ligne| {
            ligne
                .iter()
                .filter_map(|&libelle| match libelle.parse::<Touche>() {
                    Ok(t) => Some((libelle, t)),
                    Err(e) => {
                        warn!(%e, "bouton ignoré");
                        None
                    }
                })
                .collect()
        })
        .collect()
}

fn pave() -> &'static Pave {
    static PAVE: OnceLock<Pave> = OnceLock::new();
    PAVE.get_or_init(|| {
        let commun = convertir(LIGNES_COMMUNES);
        let mut basique = convertir(LIGNES_BASIQUES);
        let mut scientifique = convertir(LIGNES_SCIENTIFIQUES);
        basique.extend(commun.iter().cloned());
        scientifique.extend(commun);
        Pave {
            basique,
            scientifique,
        }
    })
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_modes(ui);
        ui.add_space(8.0);

        self.ui_ecran(ui);
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_modes(&mut self, ui: &mut egui::Ui) {
        let mut mode = self.mode();
        ui.horizontal(|ui| {
            for m in [Mode::Basique, Mode::Scientifique] {
                ui.selectable_value(&mut mode, m, m.libelle());
            }
        });
        self.definir_mode(mode);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // historique : petit, discret
                    ui.label(egui::RichText::new(self.historique()).monospace().weak());

                    ui.label(
                        egui::RichText::new(self.ecran())
                            .monospace()
                            .size(TAILLE_ECRAN),
                    )
                    .on_hover_text(format!("Opérande : {}", self.operande_courant()));
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let actif = self.operateur_actif();

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in pave().lignes(self.mode()) {
                    for &(libelle, touche) in ligne {
                        let selectionne = matches!(
                            (touche, actif),
                            (Touche::Operateur(op), Some(a)) if op == a
                        );
                        self.bouton(ui, libelle, touche, selectionne);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, libelle: &str, touche: Touche, selectionne: bool) {
        let texte = egui::RichText::new(libelle).size(18.0);
        let resp = ui.add_sized(
            TAILLE_BOUTON,
            egui::Button::new(texte).selected(selectionne),
        );
        if resp.clicked() {
            self.appuyer(touche);
        }
    }
}

/// Touches d’un mode, dans l’ordre du pavé.
#[cfg(test)]
fn touches(mode: Mode) -> Vec<Touche> {
    pave()
        .lignes(mode)
        .iter()
        .flatten()
        .map(|&(_, t)| t)
        .collect()
}
