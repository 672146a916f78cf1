// src/noyau/lecture.rs
//
// Lecture d’un opérande texte -> f64
// ----------------------------------
// Contrat :
// - lecture tolérante d’un préfixe numérique ("5." -> 5, "1e+" -> 1, "-" -> NaN)
// - tout ce qui n’est pas lisible (ex: "Error") -> NaN
// - "Infinity" / "-Infinity" relus tels quels (rendu de format.rs)

/// Alphabet d’un opérande saisi ou rendu en notation décimale/exponentielle.
fn est_numerique(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')
}

/// Lit l’opérande courant comme un flottant. Ne panique jamais : NaN si illisible.
pub fn lire_nombre(texte: &str) -> f64 {
    let s = texte.trim();

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // Hors alphabet numérique ("Error", "NaN", "inf"...) : rien à lire.
    if s.is_empty() || !s.chars().all(est_numerique) {
        return f64::NAN;
    }

    // Plus long préfixe lisible (l’alphabet est ASCII : découpe octet = caractère).
    (1..=s.len())
        .rev()
        .find_map(|n| s[..n].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}
