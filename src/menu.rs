// src/menu.rs
//! Interactive menu: operation, cipher, keyword, message, result
//!
//! Generic over its reader and writer so the whole dialogue can be driven
//! from a script in tests. End of input at any prompt ends the session the
//! same way a quit word does.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::cipher::transform;
use crate::config::Config;
use crate::consts::{CLEAR_SCREEN, QUIT_WORDS};
use crate::enums::{CipherKind, Operation};
use crate::error::{CipherError, SessionError};

/// Everything collected from the user for one transform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub operation: Operation,
    pub cipher: CipherKind,
    pub keyword: Option<String>,
    pub message: String,
}

impl Request {
    pub fn execute(&self) -> Result<String, CipherError> {
        transform(
            self.cipher,
            self.operation,
            self.keyword.as_deref(),
            &self.message,
        )
    }
}

pub struct Menu<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
    default_keyword: String,
    default_operation: Option<Operation>,
    default_cipher: Option<CipherKind>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// A menu that never clears the screen and has an empty default keyword
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
            default_keyword: String::new(),
            default_operation: None,
            default_cipher: None,
        }
    }

    pub fn with_config(input: R, output: W, config: &Config) -> Self {
        Self {
            input,
            output,
            clear_screen: config.screen.clear_screen,
            default_keyword: config.keyword.default.clone(),
            default_operation: config.menu.default_operation,
            default_cipher: config.menu.default_cipher,
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Collect a full request. `Ok(None)` means the user quit.
    pub fn prompt(&mut self) -> io::Result<Option<Request>> {
        let Some(operation) = self.choose_operation()? else {
            return Ok(None);
        };
        let Some(cipher) = self.choose_cipher()? else {
            return Ok(None);
        };
        let keyword = if cipher.needs_keyword() {
            match self.read_keyword()? {
                Some(k) => Some(k),
                None => return Ok(None),
            }
        } else {
            None
        };
        let Some(message) = self.read_message(operation, cipher)? else {
            return Ok(None);
        };

        Ok(Some(Request {
            operation,
            cipher,
            keyword,
            message,
        }))
    }

    /// An empty answer selects the configured default operation, if any.
    pub fn choose_operation(&mut self) -> io::Result<Option<Operation>> {
        self.screen("Welcome!\nWould you like to encrypt or decrypt a message?")?;
        loop {
            let Some(answer) = self.read_line()? else {
                return Ok(None);
            };
            if answer.trim().is_empty() && self.default_operation.is_some() {
                return Ok(self.default_operation);
            }
            match answer.parse() {
                Ok(op) => return Ok(Some(op)),
                Err(_) => {
                    self.screen("Welcome!\nPlease enter either 'encrypt' or 'decrypt'.")?
                }
            }
        }
    }

    /// An empty answer selects the configured default cipher, if any.
    pub fn choose_cipher(&mut self) -> io::Result<Option<CipherKind>> {
        let list = cipher_list();
        self.screen(&format!(
            "{list}\nPlease enter the name of the cipher you wish to use."
        ))?;
        loop {
            let Some(answer) = self.read_line()? else {
                return Ok(None);
            };
            let answer = answer.trim().to_lowercase();
            if answer.is_empty() && self.default_cipher.is_some() {
                return Ok(self.default_cipher);
            }
            if QUIT_WORDS.contains(&answer.as_str()) {
                info!("user quit at cipher selection");
                return Ok(None);
            }
            match answer.parse() {
                Ok(kind) => return Ok(Some(kind)),
                Err(_) => self.screen(&format!(
                    "{list}\nSorry, I am not able to use the '{}' cipher. \
                     Please enter the name of a cipher from the list above.",
                    title_case(&answer)
                ))?,
            }
        }
    }

    /// An empty answer selects the configured default keyword.
    pub fn read_keyword(&mut self) -> io::Result<Option<String>> {
        self.write_lines(
            "Please enter the keyword you wish to use\n\
             (Repeated letters and non-letter characters will be ignored)",
        )?;
        Ok(self.read_line()?.map(|keyword| {
            if keyword.trim().is_empty() {
                self.default_keyword.clone()
            } else {
                keyword.to_lowercase()
            }
        }))
    }

    pub fn read_message(
        &mut self,
        operation: Operation,
        cipher: CipherKind,
    ) -> io::Result<Option<String>> {
        let question = format!("What would you like to {operation}?");
        self.screen(&question)?;

        // Polybius ciphertext is free-form: unknown tokens are kept as-is.
        if operation == Operation::Decrypt && cipher == CipherKind::PolybiusSquare {
            self.write_lines(
                "(Only valid number pairs will be decrypted, \
                 other characters will be part of the decrypted message)",
            )?;
            return self.read_line();
        }

        loop {
            let Some(message) = self.read_line()? else {
                return Ok(None);
            };
            if accepts_message(cipher, &message) {
                return Ok(Some(message));
            }
            debug!("rejected message with non-letter characters");
            self.screen("Please enter a message that consists of only letters and spaces.")?;
        }
    }

    pub fn report(&mut self, operation: Operation, result: &str) -> io::Result<()> {
        self.clear()?;
        writeln!(
            self.output,
            "The {} message is '{result}'",
            operation.past_tense()
        )?;
        self.output.flush()
    }

    fn screen(&mut self, text: &str) -> io::Result<()> {
        self.clear()?;
        self.write_lines(text)
    }

    fn write_lines(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            write!(self.output, "{CLEAR_SCREEN}")?;
        }
        Ok(())
    }

    /// Show the `> ` prompt and read one line without its terminator.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Run one full dialogue. Returns the printed result, or `None` on quit.
pub fn run_session<R: BufRead, W: Write>(
    menu: &mut Menu<R, W>,
) -> Result<Option<String>, SessionError> {
    let Some(request) = menu.prompt()? else {
        return Ok(None);
    };
    info!(
        cipher = %request.cipher,
        operation = %request.operation,
        "running cipher"
    );
    let result = request.execute()?;
    menu.report(request.operation, &result)?;
    Ok(Some(result))
}

fn cipher_list() -> String {
    let mut list = String::from("The available ciphers are:\n");
    for kind in CipherKind::ALL {
        list.push_str("- ");
        list.push_str(kind.name());
        list.push('\n');
    }
    list
}

/// Whether `cipher` can take `message` without failing. Atbash takes
/// letters and whitespace; the others only ASCII letters and `' '`.
/// The empty message is always allowed.
fn accepts_message(cipher: CipherKind, message: &str) -> bool {
    match cipher {
        CipherKind::Atbash => message
            .chars()
            .all(|c| c.is_alphabetic() || c.is_whitespace()),
        CipherKind::Keyword | CipherKind::PolybiusSquare => message
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == ' '),
    }
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !c.is_alphabetic();
    }
    out
}
