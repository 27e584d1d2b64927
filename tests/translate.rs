use config_lang::compiler::lexer::{LexerError, TokenPos};
use config_lang::{describe_panic, translate, Error};

fn assert_translates(source: &str, expected: &str) {
    match translate(source) {
        Ok(toml) => assert_eq!(expected, toml, "source: {}", source),
        Err(e) => panic!("Failed to translate {:?}:\n{}", source, e),
    }
}

#[test]
fn hex_literals_are_decimal() {
    assert_translates("0x0", "value = 0\n");
    assert_translates("0XdeadBEEF", "value = 3735928559\n");
    assert_translates("0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF", "value = 340282366920938463463374607431768211455\n");
}

#[test]
fn arrays() {
    assert_translates("array(0x1, 0x2, 0x3)", "value = [1, 2, 3]\n");
    assert_translates("array()", "value = []\n");
    assert_translates("array({ a = 0x1; })", "value = [{ a = 1 }]\n");
}

#[test]
fn root_map_keeps_key_order() {
    assert_translates("{ a = 0x1; b = 0x2; }", "a = 1\nb = 2\n");
    assert_translates("{ zeta = 0x1; alpha = 0x2; }", "zeta = 1\nalpha = 2\n");
}

#[test]
fn duplicate_map_keys() {
    assert_translates("{ a = 0x1; a = 0x2; }", "a = 2\n");
}

#[test]
fn nested_maps_are_inline() {
    assert_translates(
        "var limits = { max = 0x10; min = 0x1; }\n{ server = { limits = ?[limits]; ports = array(0x50, 0x1bb); }; }",
        "server = { limits = { max = 16, min = 1 }, ports = [80, 443] }\n",
    );
}

#[test]
fn constants() {
    assert_translates("var x = 0x10; ?[x]", "value = 16\n");
    assert_translates("var x = 0x10 var y = array(?[x], ?[x]) { y = ?[y]; }", "y = [16, 16]\n");
}

#[test]
fn empty_root_map() {
    assert_translates("{}", "");
    assert_translates("var unused = 0x1 { }", "");
}

#[test]
fn error_kinds() {
    match translate("{ a = 0xg; }") {
        Err(Error::Lexer(err)) => assert_eq!(LexerError::MissingHexDigits { pos: TokenPos::new(1, 7), prefix: String::from("0x") }, err),
        other => panic!("Expected lexer error, got {:?}", other),
    }

    assert!(matches!(translate("{ a = 0x1 }"), Err(Error::Parser(_))));
    assert!(matches!(translate("0x1 0x2"), Err(Error::Parser(_))));

    match translate("var x = 0x1; var x = 0x2; ?[x]") {
        Err(Error::Eval(err)) => assert_eq!("x", err.name()),
        other => panic!("Expected evaluation error, got {:?}", other),
    }

    match translate("?[z]") {
        Err(Error::Eval(err)) => assert_eq!("z", err.name()),
        other => panic!("Expected evaluation error, got {:?}", other),
    }
}

#[test]
fn lexer_errors_win_over_parse_errors() {
    assert!(matches!(translate("{ a = 0x1 } $"), Err(Error::Lexer(LexerError::UnexpectedCharacter(_, '$')))));
}

#[test]
fn exit_codes() {
    assert_eq!(1, translate("0x").unwrap_err().exit_code());
    assert_eq!(1, translate("array(").unwrap_err().exit_code());
    assert_eq!(1, translate("?[a]").unwrap_err().exit_code());
    assert_eq!(3, Error::Internal(String::from("boom")).exit_code());
}

#[test]
fn deep_nesting_is_an_error() {
    let source = format!("{}0x1{}", "{ a = ".repeat(100_000), "; }".repeat(100_000));

    assert!(matches!(translate(&source), Err(Error::Parser(_))));
    assert_eq!(1, translate(&source).unwrap_err().exit_code());
}

#[test]
fn panic_messages() {
    let payload = std::panic::catch_unwind(|| panic!("static message")).unwrap_err();
    assert_eq!("static message", describe_panic(payload.as_ref()));

    let payload = std::panic::catch_unwind(|| panic!("formatted {}", 3)).unwrap_err();
    assert_eq!("formatted 3", describe_panic(payload.as_ref()));

    let payload = std::panic::catch_unwind(|| std::panic::panic_any(7_u8)).unwrap_err();
    assert_eq!("translation panicked", describe_panic(payload.as_ref()));
}
