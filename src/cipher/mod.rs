// src/cipher/mod.rs
//! The three substitution ciphers behind one trait
//!
//! Every cipher builds its substitution map once in its constructor and
//! never mutates it afterwards. Each call to `encrypt` / `decrypt` builds
//! its output in a fresh local `String`, so one instance can be reused
//! for any number of messages.

pub mod atbash;
pub mod keyword;
pub mod polybius;

pub use atbash::AtbashCipher;
pub use keyword::KeywordCipher;
pub use polybius::PolybiusSquareCipher;

use tracing::debug;

use crate::consts::ALPHABET;
use crate::enums::{CipherKind, Operation};
use crate::error::CipherError;

pub type Result<T> = std::result::Result<T, CipherError>;

/// A reversible text transform
pub trait Cipher {
    fn kind(&self) -> CipherKind;

    fn encrypt(&self, text: &str) -> Result<String>;

    fn decrypt(&self, text: &str) -> Result<String>;

    /// Dispatch on `op`
    fn apply(&self, op: Operation, text: &str) -> Result<String> {
        debug!(cipher = %self.kind(), %op, len = text.len(), "applying cipher");
        match op {
            Operation::Encrypt => self.encrypt(text),
            Operation::Decrypt => self.decrypt(text),
        }
    }
}

/// Construct the cipher for `kind`. Only Keyword reads `keyword`; a missing
/// keyword means the identity alphabet.
pub fn build(kind: CipherKind, keyword: Option<&str>) -> Box<dyn Cipher> {
    match kind {
        CipherKind::Atbash => Box::new(AtbashCipher::new()),
        CipherKind::Keyword => Box::new(KeywordCipher::new(keyword.unwrap_or_default())),
        CipherKind::PolybiusSquare => Box::new(PolybiusSquareCipher::new()),
    }
}

/// One-shot convenience: build, then apply
pub fn transform(
    kind: CipherKind,
    op: Operation,
    keyword: Option<&str>,
    text: &str,
) -> Result<String> {
    build(kind, keyword).apply(op, text)
}

/// Index of `c` in [`ALPHABET`], ignoring ASCII case
#[inline]
pub(crate) fn alphabet_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_lowercase() as u8 - b'a') as usize)
    } else {
        None
    }
}

#[inline]
pub(crate) fn letter_at(index: usize) -> char {
    ALPHABET[index]
}
