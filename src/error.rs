// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

use crate::enums::CipherKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("{cipher} cipher cannot handle {character:?} at position {position}")]
    InvalidCharacter {
        cipher: CipherKind,
        character: char,
        position: usize,
    },

    #[error("unknown cipher: {0:?}")]
    UnknownCipher(String),

    #[error("unknown operation: {0:?} (expected 'encrypt' or 'decrypt')")]
    UnknownOperation(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Failure of an interactive session: terminal I/O or the cipher itself
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Cipher(#[from] CipherError),
}
