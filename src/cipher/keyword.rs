// src/cipher/keyword.rs
//! Keyword cipher: a substitution alphabet led by the keyword's letters

use tracing::debug;

use super::{alphabet_index, letter_at, Cipher, Result};
use crate::consts::{ALPHABET, ALPHABET_LEN};
use crate::enums::CipherKind;
use crate::error::CipherError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCipher {
    /// plain index -> cipher letter
    permuted: [char; ALPHABET_LEN],
    /// cipher letter index -> plain index
    inverse: [usize; ALPHABET_LEN],
}

impl KeywordCipher {
    /// Build from `keyword`. Case, repeated letters and non-letters are
    /// ignored, so `"Zebra!"`, `"zzebra"` and `"zebra"` are equivalent.
    pub fn new(keyword: &str) -> Self {
        let mut placed = [false; ALPHABET_LEN];
        let mut order = Vec::with_capacity(ALPHABET_LEN);

        let leading = keyword.chars().filter_map(alphabet_index);
        for i in leading.chain(0..ALPHABET_LEN) {
            if !placed[i] {
                placed[i] = true;
                order.push(i);
            }
        }

        let mut permuted = ALPHABET;
        let mut inverse = [0; ALPHABET_LEN];
        for (plain, &letter) in order.iter().enumerate() {
            permuted[plain] = letter_at(letter);
            inverse[letter] = plain;
        }

        debug!(
            alphabet = %permuted.iter().collect::<String>(),
            "built keyword alphabet"
        );
        Self { permuted, inverse }
    }

    /// The permuted alphabet, in plain-alphabet order
    pub fn alphabet(&self) -> String {
        self.permuted.iter().collect()
    }

    fn substitute(&self, text: &str, map: impl Fn(usize) -> char) -> Result<String> {
        let mut out = String::with_capacity(text.len());
        for (position, c) in text.chars().enumerate() {
            if c == ' ' {
                out.push(' ');
                continue;
            }
            let index = alphabet_index(c).ok_or(CipherError::InvalidCharacter {
                cipher: CipherKind::Keyword,
                character: c,
                position,
            })?;
            out.push(map(index));
        }
        Ok(out)
    }
}

impl Cipher for KeywordCipher {
    fn kind(&self) -> CipherKind {
        CipherKind::Keyword
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        self.substitute(text, |i| self.permuted[i])
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        self.substitute(text, |i| letter_at(self.inverse[i]))
    }
}
