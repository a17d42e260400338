// tests/menu_tests.rs
//! Scripted sessions through the interactive menu

use std::io::Cursor;

use classic_ciphers::config::Config;
use classic_ciphers::consts::CLEAR_SCREEN;
use classic_ciphers::{run_session, CipherKind, Menu, Operation, Request};

mod common;

/// Run one session over `script`; returns the result and everything printed
fn session(script: &str) -> (Option<String>, String) {
    let mut menu = Menu::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let result = run_session(&mut menu).expect("session should succeed");
    let (_, output) = menu.into_inner();
    (result, String::from_utf8(output).expect("utf-8 output"))
}

#[test]
fn test_atbash_encrypt_session() {
    common::setup();
    let (result, output) = session("encrypt\natbash\nhello\n");
    assert_eq!(result.as_deref(), Some("svool"));
    assert!(output.contains("The encrypted message is 'svool'"));
    assert!(!output.contains(CLEAR_SCREEN));
}

#[test]
fn test_keyword_decrypt_session() {
    common::setup();
    let (result, output) = session("decrypt\nKeyword\nzebra\nz\n");
    assert_eq!(result.as_deref(), Some("a"));
    assert!(output.contains("Please enter the keyword you wish to use"));
    assert!(output.contains("The decrypted message is 'a'"));
}

#[test]
fn test_polybius_sessions() {
    common::setup();
    let (result, _) = session("encrypt\npolybiussquare\nHi there\n");
    assert_eq!(result.as_deref(), Some("23 24 44 23 15 42 15"));

    let (result, output) = session("decrypt\npolybius square\n11 xy 24\n");
    assert_eq!(result.as_deref(), Some("axy(i/j)"));
    assert!(output.contains("Only valid number pairs will be decrypted"));
}

#[test]
fn test_quit_words_end_the_session() {
    common::setup();
    for word in ["q", "quit", "EXIT"] {
        let (result, output) = session(&format!("encrypt\n{word}\nhello\n"));
        assert_eq!(result, None, "{word}");
        assert!(!output.contains("message is"));
    }
}

#[test]
fn test_end_of_input_is_a_quit() {
    common::setup();
    assert_eq!(session("").0, None);
    assert_eq!(session("decrypt\nkeyword\n").0, None);
}

#[test]
fn test_invalid_answers_are_reprompted() {
    common::setup();
    let (result, output) =
        session("scramble\nEncrypt\ncaesar shift\nAtbash\nhi there!\nhi there\r\n");
    assert_eq!(result.as_deref(), Some("sr gsviv"));
    assert!(output.contains("Please enter either 'encrypt' or 'decrypt'."));
    assert!(output.contains("not able to use the 'Caesar Shift' cipher"));
    assert!(output.contains("only letters and spaces"));
}

#[test]
fn test_config_controls_clearing_and_default_keyword() {
    common::setup();
    let mut config = Config::default();
    config.keyword.default = "zebra".into();

    let input = Cursor::new(b"encrypt\nkeyword\n\nab\n".to_vec());
    let mut menu = Menu::with_config(input, Vec::new(), &config);
    let result = run_session(&mut menu).unwrap();
    assert_eq!(result.as_deref(), Some("ze"));

    let (_, output) = menu.into_inner();
    assert!(String::from_utf8(output).unwrap().contains(CLEAR_SCREEN));
}

#[test]
fn test_messages_the_cipher_cannot_take_are_reprompted() {
    common::setup();
    let (result, output) = session("encrypt\nkeyword\nkey\nhello\tworld\nhello world\n");
    assert_eq!(result.as_deref(), Some("fbjjn vnqja"));
    assert!(output.contains("only letters and spaces"));

    let (result, output) = session("encrypt\npolybius square\nnaïve\nnaive\n");
    assert_eq!(result.as_deref(), Some("33 11 24 51 15"));
    assert!(output.contains("only letters and spaces"));
}

#[test]
fn test_atbash_keeps_letters_it_cannot_map() {
    common::setup();
    let (result, output) = session("encrypt\natbash\nnaïve\n");
    assert_eq!(result.as_deref(), Some("mzïev"));
    assert!(!output.contains("only letters and spaces"));
}

#[test]
fn test_empty_answers_use_configured_defaults() {
    common::setup();
    let mut config = Config::default();
    config.screen.clear_screen = false;
    config.menu.default_operation = Some(Operation::Decrypt);
    config.menu.default_cipher = Some(CipherKind::PolybiusSquare);

    let input = Cursor::new(b"\n\n23 15 31 31 34\n".to_vec());
    let mut menu = Menu::with_config(input, Vec::new(), &config);
    assert_eq!(run_session(&mut menu).unwrap().as_deref(), Some("hello"));
}

#[test]
fn test_empty_answers_without_defaults_are_reprompted() {
    common::setup();
    let (result, output) = session("\nencrypt\n\natbash\nabc\n");
    assert_eq!(result.as_deref(), Some("zyx"));
    assert!(output.contains("Please enter either 'encrypt' or 'decrypt'."));
    assert!(output.contains("not able to use the '' cipher"));
}

#[test]
fn test_prompt_collects_request() {
    common::setup();
    let mut menu = Menu::new(
        Cursor::new(b"decrypt\natbash\nsvool\n".to_vec()),
        Vec::new(),
    );
    let request = menu.prompt().unwrap().unwrap();
    assert_eq!(
        request,
        Request {
            operation: Operation::Decrypt,
            cipher: CipherKind::Atbash,
            keyword: None,
            message: "svool".into(),
        }
    );
    assert_eq!(request.execute().unwrap(), "hello");
}
