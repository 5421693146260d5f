use pony_lex::syntax::lexer::Lexer;
use pony_lex::syntax::token_id::{
    KEYWORDS, SYMBOLS, TEST_KEYWORDS, TokenId, abstract_keyword_id, lookup_keyword,
};

/// Kinds whose spelling scans as a different kind when it opens a line.
fn newline_form(id: TokenId) -> TokenId {
    match id {
        TokenId::LParen => TokenId::LParenNew,
        TokenId::LSquare => TokenId::LSquareNew,
        TokenId::Minus => TokenId::MinusNew,
        other => other,
    }
}

#[test]
fn keyword_spellings_round_trip_through_the_lexer() {
    for (text, id) in KEYWORDS {
        let mut lexer = Lexer::from_text(*text);
        let token = lexer.next_token();
        assert_eq!(token.id, *id, "keyword {:?}", text);
        assert_eq!(lexer.next_token().id, TokenId::Eof);
        assert!(lexer.diagnostics().is_empty());
    }
}

#[test]
fn symbol_spellings_round_trip_through_the_lexer() {
    for (text, id) in SYMBOLS {
        let first = SYMBOLS
            .iter()
            .position(|(spelling, _)| spelling == text)
            .unwrap();
        if SYMBOLS[first].1 != *id {
            // Printer-only duplicate spelling; the matcher can never
            // produce this kind.
            continue;
        }

        let mut lexer = Lexer::from_text(*text);
        let token = lexer.next_token();
        // A lone symbol opens its line, so the three line-sensitive kinds
        // scan as their newline forms.
        assert_eq!(token.id, newline_form(*id), "symbol {:?}", text);
        assert_eq!(lexer.next_token().id, TokenId::Eof);
        assert!(lexer.diagnostics().is_empty());
    }
}

#[test]
fn test_keyword_spellings_round_trip_through_the_lexer() {
    for (text, id) in TEST_KEYWORDS {
        let mut lexer = Lexer::from_text(*text);
        let token = lexer.next_token();
        assert_eq!(token.id, *id, "test keyword {:?}", text);
        assert_eq!(lexer.next_token().id, TokenId::Eof);
        assert!(lexer.diagnostics().is_empty());
    }
}

#[test]
fn canonical_text_is_defined_for_every_table_entry() {
    for (_, id) in KEYWORDS.iter().chain(SYMBOLS).chain(TEST_KEYWORDS) {
        assert!(id.canonical_text().is_some(), "{:?}", id);
    }
}

#[test]
fn payload_kinds_have_no_canonical_text() {
    for id in [
        TokenId::Ident,
        TokenId::Int,
        TokenId::Float,
        TokenId::String,
        TokenId::Eof,
        TokenId::LexError,
    ] {
        assert_eq!(id.canonical_text(), None);
    }
}

#[test]
fn abstract_kinds_print_but_never_lex() {
    assert_eq!(TokenId::Program.canonical_text(), Some("program"));
    assert_eq!(TokenId::NewLine.canonical_text(), Some("\n"));

    // `program` from source is just an identifier.
    let mut lexer = Lexer::from_text("program");
    assert_eq!(lexer.next_token().id, TokenId::Ident);
}

#[test]
fn capability_spellings_are_shared_between_tables() {
    for id in [
        TokenId::IsoBind,
        TokenId::TrnBind,
        TokenId::RefBind,
        TokenId::ValBind,
        TokenId::BoxBind,
        TokenId::TagBind,
    ] {
        let text = id.canonical_text().unwrap();
        // The same spelling names the keyword kind when lexed, and the
        // binder kind when resolved as an abstract keyword.
        let keyword = lookup_keyword(text).unwrap();
        assert_ne!(keyword, id);
        assert_eq!(abstract_keyword_id(text), id);
    }
}

#[test]
fn abstract_lookup_uses_the_lex_error_sentinel() {
    assert_eq!(abstract_keyword_id("uniontype"), TokenId::UnionType);
    assert_eq!(abstract_keyword_id("no_such_node"), TokenId::LexError);
}

#[test]
fn display_uses_canonical_text_with_a_debug_fallback() {
    assert_eq!(TokenId::Plus.to_string(), "+");
    assert_eq!(TokenId::Fun.to_string(), "fun");
    assert_eq!(TokenId::Eof.to_string(), "Eof");
}
