// src/validation.rs
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// The browser's `\s`: includes U+FEFF and excludes U+0085, unlike the
// Unicode White_Space set behind the regex crate's `\s`.
const BROWSER_SPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^{}@]+", BROWSER_SPACE);
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is valid")
});

/// Validation failures. The display text is what the visitor sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Por favor, preencha todos os campos.")]
    MissingFields,
    #[error("Por favor, insira um e-mail válido.")]
    InvalidEmail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
