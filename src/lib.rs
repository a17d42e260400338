// src/lib.rs
//! classic-ciphers: textbook substitution ciphers with an interactive menu
//!
//! Features:
//! - Atbash, Keyword and Polybius Square ciphers behind one `Cipher` trait
//! - Substitution maps built once per instance, fresh output per call
//! - Scriptable menu driver (any `BufRead` + `Write`)
//! - TOML config with built-in defaults
//!
//! None of these ciphers offer any security; they are for teaching and fun.

pub mod cipher;
pub mod config;
pub mod consts;
pub mod enums;
pub mod error;
pub mod menu;

// Re-export everything users need at the crate root
pub use cipher::{
    build, transform, AtbashCipher, Cipher, KeywordCipher, PolybiusSquareCipher,
    Result as CipherResult,
};
pub use config::load as load_config;
pub use enums::{CipherKind, Operation};
pub use error::{CipherError, ConfigError, SessionError};
pub use menu::{run_session, Menu, Request};
