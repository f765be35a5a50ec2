//! Field grammars.
//!
//! Both classifiers are total: every string maps to exactly one
//! [`ValidationState`]. No trimming and no case folding happen before
//! matching.
//!
//! "Word character" means ASCII letter, ASCII digit, or underscore. The
//! regex crate's `\w` is Unicode-aware, so the classes are spelled out.

use std::sync::OnceLock;

use regex::Regex;

use gatekeep_types::{FieldKind, ValidationState};

/// The fixed special-character set a strong password must draw from.
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*?";

/// Minimum password length, in characters.
pub const PASSWORD_MIN_LEN: usize = 6;

struct Grammars {
    email: Regex,
    password_alphabet: Regex,
}

impl Grammars {
    fn new() -> Self {
        Self {
            email: Regex::new(r"^[A-Za-z0-9_]+@[A-Za-z0-9_]+\.[A-Za-z0-9_]+$")
                .expect("valid email regex"),
            // The regex crate has no lookahead, so the per-class requirements
            // are checked separately; this only pins length and alphabet.
            password_alphabet: Regex::new(r"^[A-Za-z0-9!@#$%^&*?]{6,}$")
                .expect("valid password alphabet regex"),
        }
    }
}

fn grammars() -> &'static Grammars {
    static GRAMMARS: OnceLock<Grammars> = OnceLock::new();
    GRAMMARS.get_or_init(Grammars::new)
}

#[must_use]
pub fn classify_email(raw: &str) -> ValidationState {
    if raw.is_empty() {
        ValidationState::Empty
    } else if grammars().email.is_match(raw) {
        ValidationState::Valid
    } else {
        ValidationState::Invalid
    }
}

#[must_use]
pub fn classify_password(raw: &str) -> ValidationState {
    if raw.is_empty() {
        return ValidationState::Empty;
    }

    let strong = grammars().password_alphabet.is_match(raw)
        && raw.chars().any(|c| c.is_ascii_uppercase())
        && raw.chars().any(|c| c.is_ascii_lowercase())
        && raw.chars().any(|c| c.is_ascii_digit())
        && raw.chars().any(|c| PASSWORD_SPECIALS.contains(c));

    if strong {
        ValidationState::Valid
    } else {
        ValidationState::Invalid
    }
}

#[must_use]
pub fn classify(kind: FieldKind, raw: &str) -> ValidationState {
    match kind {
        FieldKind::Email => classify_email(raw),
        FieldKind::Password => classify_password(raw),
    }
}
