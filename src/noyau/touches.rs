// src/noyau/touches.rs
//
// Touches de la calculatrice (types fermés)
// -----------------------------------------
// - Chiffre : 0..=9 garanti à la construction
// - Operateur / Fonction / Constante : plus de chaînes libres ('+', 'sin', ...)
// - Touche : un événement bouton = une commande du moteur
// - FromStr : les pavés de la vue sont décrits par leurs libellés

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurTouche {
    #[error("chiffre hors bornes : {0} (attendu 0..=9)")]
    ChiffreHorsBornes(u8),

    #[error("touche inconnue : {0:?}")]
    Inconnue(String),
}

/* ------------------------ Chiffre ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chiffre(u8);

impl Chiffre {
    pub fn new(n: u8) -> Result<Self, ErreurTouche> {
        if n <= 9 {
            Ok(Self(n))
        } else {
            Err(ErreurTouche::ChiffreHorsBornes(n))
        }
    }

    pub fn symbole(self) -> char {
        char::from(b'0' + self.0)
    }
}

/* ------------------------ Opérateurs binaires ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance, // x^y
}

impl Operateur {
    /// Symbole affiché (écran + historique).
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "−",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
            Operateur::Puissance => "^",
        }
    }
}

/* ------------------------ Fonctions unaires ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Racine,
    Log10,
    Ln,
    Exp,
    Inverse, // 1/x
    Carre,   // x²
    ValeurAbsolue,
}

impl Fonction {
    pub fn libelle(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Racine => "√",
            Fonction::Log10 => "log",
            Fonction::Ln => "ln",
            Fonction::Exp => "exp",
            Fonction::Inverse => "1/x",
            Fonction::Carre => "x²",
            Fonction::ValeurAbsolue => "|x|",
        }
    }
}

/* ------------------------ Constantes ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn symbole(self) -> &'static str {
        match self {
            Constante::Pi => "π",
            Constante::E => "e",
        }
    }

    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => std::f64::consts::PI,
            Constante::E => std::f64::consts::E,
        }
    }
}

/* ------------------------ Mode (présentation seulement) ------------------------ */

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Basique,
    Scientifique,
}

impl Mode {
    pub fn libelle(self) -> &'static str {
        match self {
            Mode::Basique => "Basic",
            Mode::Scientifique => "Scientific",
        }
    }
}

/* ------------------------ Touche ------------------------ */

/// Un événement bouton. Chaque variante correspond à exactement une commande du moteur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(Chiffre),
    Virgule,
    Operateur(Operateur),
    Egal,
    Fonction(Fonction),
    ChangerSigne,
    Constante(Constante),
    Effacement, // ⌫
    Remise,     // C
}

impl Touche {
    /// Libellé canonique (celui des boutons de la vue).
    pub fn libelle(self) -> String {
        match self {
            Touche::Chiffre(c) => c.symbole().to_string(),
            Touche::Virgule => ".".into(),
            Touche::Operateur(Operateur::Puissance) => "x^y".into(),
            Touche::Operateur(op) => op.symbole().into(),
            Touche::Egal => "=".into(),
            Touche::Fonction(f) => f.libelle().into(),
            Touche::ChangerSigne => "±".into(),
            Touche::Constante(c) => c.symbole().into(),
            Touche::Effacement => "⌫".into(),
            Touche::Remise => "C".into(),
        }
    }
}

impl fmt::Display for Touche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.libelle())
    }
}

/// Accepte les libellés des boutons et leurs variantes ASCII ("*", "sqrt", "pi", ...).
impl FromStr for Touche {
    type Err = ErreurTouche;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let [b] = s.as_bytes() {
            if b.is_ascii_digit() {
                return Ok(Touche::Chiffre(Chiffre::new(b - b'0')?));
            }
        }

        let touche = match s {
            "." | "," => Touche::Virgule,

            "+" => Touche::Operateur(Operateur::Plus),
            "-" | "−" => Touche::Operateur(Operateur::Moins),
            "*" | "×" => Touche::Operateur(Operateur::Fois),
            "/" | "÷" => Touche::Operateur(Operateur::Divise),
            "^" | "x^y" => Touche::Operateur(Operateur::Puissance),

            "=" => Touche::Egal,

            "sin" => Touche::Fonction(Fonction::Sin),
            "cos" => Touche::Fonction(Fonction::Cos),
            "tan" => Touche::Fonction(Fonction::Tan),
            "√" | "sqrt" => Touche::Fonction(Fonction::Racine),
            "log" | "log10" => Touche::Fonction(Fonction::Log10),
            "ln" => Touche::Fonction(Fonction::Ln),
            "exp" => Touche::Fonction(Fonction::Exp),
            "1/x" => Touche::Fonction(Fonction::Inverse),
            "x²" | "x^2" => Touche::Fonction(Fonction::Carre),
            "|x|" | "abs" => Touche::Fonction(Fonction::ValeurAbsolue),

            "π" | "pi" => Touche::Constante(Constante::Pi),
            "e" => Touche::Constante(Constante::E),

            "±" | "+/-" => Touche::ChangerSigne,
            "⌫" | "DEL" => Touche::Effacement,
            "C" => Touche::Remise,

            autre => return Err(ErreurTouche::Inconnue(autre.to_string())),
        };

        Ok(touche)
    }
}
