//! Tests scénarios : séquences de touches complètes, telles que tapées sur le pavé.
//!
//! Chaque scénario est écrit avec les libellés des boutons ("7", "×", "√", "=", ...)
//! et rejoué via `Moteur::appuyer`, comme le fait la vue.

use super::format::ERREUR;
use super::moteur::Moteur;
use super::touches::Touche;

fn jouer(sequence: &str) -> Moteur {
    let mut m = Moteur::new();
    rejouer(&mut m, sequence);
    m
}

fn rejouer(m: &mut Moteur, sequence: &str) {
    for libelle in sequence.split_whitespace() {
        let touche: Touche = libelle
            .parse()
            .unwrap_or_else(|e| panic!("sequence={sequence:?} err={e}"));
        m.appuyer(touche);
    }
}

fn assert_affiche(sequence: &str, attendu: &str) {
    let m = jouer(sequence);
    assert_eq!(m.texte_affichage(), attendu, "sequence={sequence:?}");
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn scn_zeros_de_tete() {
    assert_affiche("0 0 5", "5");
    assert_affiche("0 0 0", "0");
    assert_affiche("1 0 0", "100");
}

#[test]
fn scn_point_idempotent() {
    assert_affiche(". .", "0.");
    assert_affiche("3 . . 1 .", "3.1");
    assert_affiche("1 . 5", "1.5");
}

/* ------------------------ Enchaînement gauche -> droite ------------------------ */

#[test]
fn scn_sans_priorite() {
    assert_affiche("2 + 3 × 4 =", "20");
    assert_affiche("2 × 3 + 4 =", "10");
    assert_affiche("1 0 − 4 ÷ 2 =", "3");
}

#[test]
fn scn_resultat_intermediaire_visible() {
    // Le second opérateur résout 2+3 et devient l’opérande gauche.
    assert_affiche("2 + 3 ×", "5×5");
}

#[test]
fn scn_puissance() {
    assert_affiche("2 x^y 1 0 =", "1024");
    assert_affiche("9 ^ . 5 =", "3");
}

#[test]
fn scn_continuer_apres_egal() {
    // Résultat réutilisé comme opérande gauche.
    assert_affiche("6 × 7 = − 2 =", "40");
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn scn_division_par_zero() {
    assert_affiche("5 ÷ 0 =", ERREUR);
    assert_affiche("5 ÷ 0 . 0 =", ERREUR);
}

#[test]
fn scn_inverse_de_zero() {
    assert_affiche("1/x", ERREUR);
    assert_affiche("4 1/x", "0.25");
}

#[test]
fn scn_erreur_absorbee_par_puissance() {
    assert_affiche("1 x^y 0 1/x =", ERREUR);
    assert_affiche("1 ± x^y 0 ln ± =", ERREUR);
    assert_affiche("0 1/x x^y 0 =", ERREUR);
}

#[test]
fn scn_reprise_apres_erreur() {
    let mut m = jouer("5 ÷ 0 =");
    rejouer(&mut m, "8 + 1 =");
    assert_eq!(m.texte_affichage(), "9");
}

/* ------------------------ Signe ------------------------ */

#[test]
fn scn_signe_de_zero() {
    // Convention : -0 s’affiche "0".
    assert_affiche("±", "0");
    assert_affiche("± ±", "0");
    assert_affiche("0 . ±", "0");
}

#[test]
fn scn_double_negation_apres_calcul() {
    // a op b = puis ± ± : même valeur.
    let cas = [
        ("1 . 5 + 2 . 2 5 =", "3.75"),
        ("7 − 1 0 =", "-3"),
        ("0 . 1 + 0 . 2 =", "0.30000000000000004"),
        ("1 2 × 0 . 5 =", "6"),
        ("3 . 3 × 3 =", "9.899999999999999"),
    ];
    for (sequence, attendu) in cas {
        let mut m = jouer(sequence);
        assert_eq!(m.courant(), attendu, "sequence={sequence:?}");
        rejouer(&mut m, "± ±");
        assert_eq!(m.courant(), attendu, "sequence={sequence:?}");
    }
}

/* ------------------------ Effacement / remise ------------------------ */

#[test]
fn scn_effacement_jamais_vide() {
    assert_affiche("7 ⌫", "0");
    assert_affiche("⌫", "0");
    assert_affiche("4 2 ⌫ ⌫ ⌫", "0");
    assert_affiche("1 . ⌫", "1");
}

#[test]
fn scn_remise_totale() {
    for sequence in ["1 2 + 3", "5 ÷ 0 =", "π cos", "9 . 9 × 2 = ± ⌫", "2 + 3 ×"] {
        let m = jouer(&format!("{sequence} C"));
        assert_eq!(m.texte_affichage(), "0", "sequence={sequence:?}");
        assert_eq!(m.texte_historique(), "", "sequence={sequence:?}");
    }
}

/* ------------------------ Fonctions scientifiques ------------------------ */

#[test]
fn scn_fonctions() {
    assert_affiche("9 √", "3");
    assert_affiche("sin", "0");
    assert_affiche("π cos", "-1");
    assert_affiche("1 0 0 log", "2");
    assert_affiche("1 ln", "0");
    assert_affiche("0 exp", "1");
    assert_affiche("1 2 x²", "144");
    assert_affiche("5 ± |x|", "5");
}

#[test]
fn scn_fonctions_hors_domaine() {
    assert_affiche("4 ± √", ERREUR);
    assert_affiche("0 ln", "-Infinity");
}

#[test]
fn scn_constantes() {
    assert_affiche("π", "3.141592653589793");
    assert_affiche("e", "2.718281828459045");
    // la constante remplace l’opérande droit
    assert_affiche("2 × π", "2×3.141592653589793");
}

/* ------------------------ Historique ------------------------ */

#[test]
fn scn_historique() {
    let m = jouer("1 2 + 3 . 5 =");
    assert_eq!(m.texte_historique(), "12+3.5=");
    assert_eq!(m.texte_affichage(), "15.5");

    let m = jouer("2 x^y 3 ± =");
    assert_eq!(m.texte_historique(), "2^3±=");
    assert_eq!(m.texte_affichage(), "0.125");
}
