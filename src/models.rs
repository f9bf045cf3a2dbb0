// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

/// Shortest password the engine will produce.
pub const MIN_PASSWORD_LENGTH: usize = 1;
/// Longest password the engine will produce.
pub const MAX_PASSWORD_LENGTH: usize = 1024;

/// A selectable category of password characters.
///
/// Each class owns a fixed symbol set; the four sets are pairwise
/// disjoint, so any generated byte belongs to exactly one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Canonical ordering, used for alphabet layout and for deciding
    /// which classes win when the length cannot cover all of them.
    pub const CANONICAL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// The fixed symbol set owned by this class.
    pub fn symbols(self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Lowercase => b"abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Digit => b"0123456789",
            CharacterClass::Symbol => b"!@#$%^&*()-_=+[]{}|;:,.<>?",
        }
    }

    pub fn contains(self, byte: u8) -> bool {
        self.symbols().contains(&byte)
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharacterClass::Uppercase => write!(f, "uppercase"),
            CharacterClass::Lowercase => write!(f, "lowercase"),
            CharacterClass::Digit => write!(f, "digit"),
            CharacterClass::Symbol => write!(f, "symbol"),
        }
    }
}

/// A single password generation request.
///
/// `classes` is kept deduplicated and in canonical order; build one with
/// [`GenerationRequest::from_flags`] rather than by hand.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: Vec<CharacterClass>,
}

impl GenerationRequest {
    /// Build a request from the four wire-level toggles.
    pub fn from_flags(
        length: usize,
        include_uppercase: bool,
        include_lowercase: bool,
        include_numbers: bool,
        include_symbols: bool,
    ) -> Self {
        let mut classes = Vec::with_capacity(4);
        if include_uppercase {
            classes.push(CharacterClass::Uppercase);
        }
        if include_lowercase {
            classes.push(CharacterClass::Lowercase);
        }
        if include_numbers {
            classes.push(CharacterClass::Digit);
        }
        if include_symbols {
            classes.push(CharacterClass::Symbol);
        }
        Self { length, classes }
    }
}
