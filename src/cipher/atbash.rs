// src/cipher/atbash.rs
//! Atbash: the alphabet mapped onto itself reversed

use super::{alphabet_index, Cipher, Result};
use crate::consts::ALPHABET_LEN;
use crate::enums::CipherKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtbashCipher {
    reversed: [char; ALPHABET_LEN],
}

impl AtbashCipher {
    pub fn new() -> Self {
        let mut reversed = crate::consts::ALPHABET;
        reversed.reverse();
        Self { reversed }
    }

    /// ASCII letters become their lowercase mirror; everything else is kept.
    fn mirror(&self, text: &str) -> String {
        text.chars()
            .map(|c| match alphabet_index(c) {
                Some(i) => self.reversed[i],
                None => c,
            })
            .collect()
    }
}

impl Default for AtbashCipher {
    fn default() -> Self {
        Self::new()
    }
}

impl Cipher for AtbashCipher {
    fn kind(&self) -> CipherKind {
        CipherKind::Atbash
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        Ok(self.mirror(text))
    }

    // Involution: decrypting is encrypting.
    fn decrypt(&self, text: &str) -> Result<String> {
        Ok(self.mirror(text))
    }
}
