use std::rc::Rc;

use pony_lex::diagnostics::Position;
use pony_lex::syntax::interner::StringTable;
use pony_lex::syntax::source::Source;
use pony_lex::syntax::token::{Token, TokenValue};
use pony_lex::syntax::token_id::TokenId;

fn source() -> Rc<Source> {
    Rc::new(Source::new("main.pony", "let x = 1"))
}

#[test]
fn plain_tokens_have_no_payload() {
    let token = Token::new(TokenId::Let, source(), Position::new(1, 1));

    assert_eq!(token.id, TokenId::Let);
    assert_eq!(token.value, TokenValue::None);
    assert_eq!(token.symbol(), None);
    assert_eq!(token.int_value(), None);
    assert_eq!(token.float_value(), None);
}

#[test]
fn int_tokens_hold_full_width_values() {
    let token = Token::with_int(TokenId::Int, u128::MAX, source(), Position::new(1, 9));
    assert_eq!(token.int_value(), Some(u128::MAX));
}

#[test]
fn float_tokens_hold_doubles() {
    let token = Token::with_float(TokenId::Float, 0.0314, source(), Position::new(1, 9));
    assert_eq!(token.float_value(), Some(0.0314));
}

#[test]
fn symbol_tokens_resolve_through_a_table() {
    let mut strings = StringTable::new();
    let symbol = strings.intern("x");
    let token = Token::with_symbol(TokenId::Ident, symbol, source(), Position::new(1, 5));

    assert_eq!(token.symbol(), Some(symbol));
    assert_eq!(token.token_text(&strings), Some("x"));
}

#[test]
fn tokens_remember_their_source() {
    let src = source();
    let token = Token::new(TokenId::Assign, Rc::clone(&src), Position::new(1, 7));
    assert_eq!(token.source.origin(), "main.pony");
    assert_eq!((token.position.line, token.position.column), (1, 7));
}

#[test]
fn display_shows_kind_payload_and_position() {
    let token = Token::with_int(TokenId::Int, 42, source(), Position::new(2, 3));
    assert_eq!(token.to_string(), "Token(Int, 42, 2:3)");

    let plain = Token::new(TokenId::DblArrow, source(), Position::new(1, 1));
    assert_eq!(plain.to_string(), "Token(DblArrow, 1:1)");
}
