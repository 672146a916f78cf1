// src/noyau/format.rs
//
// Rendu d’un f64 en texte d’opérande
// ----------------------------------
// - plus courte écriture décimale relisant exactement la même valeur
// - décimal simple pour 1e-6 <= |x| < 1e21, exponentielle sinon (1e+21, 5e-7)
// - -0 s’écrit "0" ; ±∞ s’écrit "Infinity" / "-Infinity"
// - NaN s’écrit "Error" (seule erreur du moteur)

/// Sentinelle affichée quand un calcul produit NaN.
pub const ERREUR: &str = "Error";

/// Mantisse (chiffres significatifs, sans point) + exposant décimal `n`
/// tel que la valeur vaut 0.d1d2…dk × 10^n.
fn chiffres_et_exposant(x: f64) -> (String, i32) {
    // `{:e}` donne déjà la plus courte écriture exacte : "1.2345e-7", "5e0".
    let sci = format!("{:e}", x);
    let (mantisse, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    let chiffres: String = mantisse.chars().filter(char::is_ascii_digit).collect();
    (chiffres, exp + 1)
}

/// Rendu d’un nombre fini ou infini (NaN exclu, voir `formater_resultat`).
pub fn formater_nombre(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string(); // couvre aussi -0
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let signe = if x < 0.0 { "-" } else { "" };
    let (d, n) = chiffres_et_exposant(x.abs());
    let k = d.len() as i32;

    let corps = if k <= n && n <= 21 {
        // entier : chiffres + zéros
        format!("{d}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        // point à l’intérieur
        let (ent, frac) = d.split_at(n as usize);
        format!("{ent}.{frac}")
    } else if -6 < n && n <= 0 {
        // 0.000ddd
        format!("0.{}{d}", "0".repeat((-n) as usize))
    } else {
        // exponentielle : d[.ddd]e±m
        let m = n - 1;
        let signe_exp = if m >= 0 { "+" } else { "-" };
        let (tete, queue) = d.split_at(1);
        if queue.is_empty() {
            format!("{tete}e{signe_exp}{}", m.abs())
        } else {
            format!("{tete}.{queue}e{signe_exp}{}", m.abs())
        }
    };

    format!("{signe}{corps}")
}

/// Résultat d’un calcul : "Error" si NaN, sinon `formater_nombre`.
pub fn formater_resultat(x: f64) -> String {
    if x.is_nan() {
        ERREUR.to_string()
    } else {
        formater_nombre(x)
    }
}
