// src/consts.rs
//! Shared constants: alphabet, grid layout and menu vocabulary

/// The plain alphabet every cipher maps from
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Number of letters in [`ALPHABET`]
pub const ALPHABET_LEN: usize = ALPHABET.len();

/// Rows and columns of the Polybius square
pub const POLYBIUS_SIZE: usize = 5;

/// Cell index (row-major, 0-based) holding the merged i/j symbol
pub const POLYBIUS_MERGED_CELL: usize = 8;

/// Symbol emitted when decrypting the shared i/j cell
pub const POLYBIUS_MERGED_SYMBOL: &str = "(i/j)";

/// Coordinate of the shared i/j cell
pub const POLYBIUS_MERGED_COORDINATE: &str = "24";

/// Words that end the session at the cipher prompt
pub const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

/// Environment variable naming the TOML config file
pub const CONFIG_ENV_VAR: &str = "CIPHERS_CONFIG";

/// Config file used when [`CONFIG_ENV_VAR`] is unset
pub const DEFAULT_CONFIG_PATH: &str = "ciphers.toml";

/// When set, never clear the terminal
pub const NO_CLEAR_ENV_VAR: &str = "CIPHERS_NO_CLEAR";

/// ANSI sequence: clear screen, cursor home
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";
