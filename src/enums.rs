// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices: which cipher to run
//! and whether to encrypt or decrypt.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CipherError;

/// Supported ciphers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CipherKind {
    Atbash,
    Keyword,
    PolybiusSquare,
}

impl CipherKind {
    pub const ALL: [CipherKind; 3] = [
        CipherKind::Atbash,
        CipherKind::Keyword,
        CipherKind::PolybiusSquare,
    ];

    /// Human-readable name, as shown in the menu
    pub fn name(self) -> &'static str {
        match self {
            CipherKind::Atbash => "Atbash",
            CipherKind::Keyword => "Keyword",
            CipherKind::PolybiusSquare => "Polybius Square",
        }
    }

    pub fn needs_keyword(self) -> bool {
        matches!(self, CipherKind::Keyword)
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherKind {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "atbash" => Ok(CipherKind::Atbash),
            "keyword" => Ok(CipherKind::Keyword),
            "polybius square" | "polybiussquare" => Ok(CipherKind::PolybiusSquare),
            _ => Err(CipherError::UnknownCipher(s.trim().to_owned())),
        }
    }
}

/// Direction of a transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Encrypt,
    Decrypt,
}

impl Operation {
    /// `"encrypted"` / `"decrypted"`, used in the result line
    pub fn past_tense(self) -> &'static str {
        match self {
            Operation::Encrypt => "encrypted",
            Operation::Decrypt => "decrypted",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Encrypt => "encrypt",
            Operation::Decrypt => "decrypt",
        })
    }
}

impl FromStr for Operation {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "encrypt" => Ok(Operation::Encrypt),
            "decrypt" => Ok(Operation::Decrypt),
            _ => Err(CipherError::UnknownOperation(s.trim().to_owned())),
        }
    }
}
