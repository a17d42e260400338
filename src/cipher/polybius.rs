// src/cipher/polybius.rs
//! Polybius square: letters <-> two-digit grid coordinates
//!
//! ```text
//!      1  2  3  4      5
//!   1  a  b  c  d      e
//!   2  f  g  h  (i/j)  k
//!   3  l  m  n  o      p
//!   4  q  r  s  t      u
//!   5  v  w  x  y      z
//! ```
//!
//! Encryption drops spaces and joins coordinates with single spaces.
//! Decryption turns every valid coordinate into its cell symbol and copies
//! any other token verbatim, concatenating everything without separators.
//! `i` and `j` share a cell, so both decrypt to the merged symbol.

use tracing::debug;

use super::{alphabet_index, Cipher, Result};
use crate::consts::{
    ALPHABET, ALPHABET_LEN, POLYBIUS_MERGED_CELL, POLYBIUS_MERGED_SYMBOL, POLYBIUS_SIZE,
};
use crate::enums::CipherKind;
use crate::error::CipherError;

const CELLS: usize = POLYBIUS_SIZE * POLYBIUS_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolybiusSquareCipher {
    /// letter index -> "rc"
    coordinates: Vec<String>,
    /// row-major cell -> symbol
    cells: Vec<String>,
}

impl PolybiusSquareCipher {
    pub fn new() -> Self {
        let mut cells: Vec<String> = ALPHABET
            .iter()
            .filter(|&&c| c != 'i' && c != 'j')
            .map(|c| c.to_string())
            .collect();
        cells.insert(POLYBIUS_MERGED_CELL, POLYBIUS_MERGED_SYMBOL.to_owned());
        debug_assert_eq!(cells.len(), CELLS);

        let coordinates = (0..ALPHABET_LEN)
            .map(|letter| coordinate_of(cell_of(letter)))
            .collect();

        debug!(cells = cells.len(), "built polybius square");
        Self { coordinates, cells }
    }

    /// Coordinate for `letter`, if it is an ASCII letter
    pub fn coordinate(&self, letter: char) -> Option<&str> {
        alphabet_index(letter).map(|i| self.coordinates[i].as_str())
    }

    /// Cell symbol for `token`, if it is a valid coordinate
    pub fn symbol(&self, token: &str) -> Option<&str> {
        parse_coordinate(token).map(|cell| self.cells[cell].as_str())
    }
}

impl Default for PolybiusSquareCipher {
    fn default() -> Self {
        Self::new()
    }
}

impl Cipher for PolybiusSquareCipher {
    fn kind(&self) -> CipherKind {
        CipherKind::PolybiusSquare
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        let mut tokens = Vec::with_capacity(text.len());
        for (position, c) in text.chars().enumerate() {
            if c == ' ' {
                continue;
            }
            let coordinate = self.coordinate(c).ok_or(CipherError::InvalidCharacter {
                cipher: CipherKind::PolybiusSquare,
                character: c,
                position,
            })?;
            tokens.push(coordinate);
        }
        Ok(tokens.join(" "))
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        Ok(text
            .split_whitespace()
            .map(|token| self.symbol(token).unwrap_or(token))
            .collect())
    }
}

/// Grid cell for a plain-alphabet index; `i` and `j` share one.
fn cell_of(letter: usize) -> usize {
    match letter {
        l if l < POLYBIUS_MERGED_CELL => l,
        l if l <= POLYBIUS_MERGED_CELL + 1 => POLYBIUS_MERGED_CELL,
        l => l - 1,
    }
}

fn coordinate_of(cell: usize) -> String {
    format!("{}{}", cell / POLYBIUS_SIZE + 1, cell % POLYBIUS_SIZE + 1)
}

/// `"rc"` with both digits in `1..=5` -> row-major cell
fn parse_coordinate(token: &str) -> Option<usize> {
    let max = b'0' + POLYBIUS_SIZE as u8;
    match token.as_bytes() {
        &[r, c] if (b'1'..=max).contains(&r) && (b'1'..=max).contains(&c) => {
            Some((r - b'1') as usize * POLYBIUS_SIZE + (c - b'1') as usize)
        }
        _ => None,
    }
}
