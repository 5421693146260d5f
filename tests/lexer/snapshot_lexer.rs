use insta::{assert_snapshot, assert_yaml_snapshot};
use pony_lex::diagnostics::render_diagnostics;
use pony_lex::syntax::lexer::Lexer;
use pony_lex::syntax::token::{Token, TokenValue};
use pony_lex::syntax::token_id::TokenId;

fn describe(token: &Token, lexer: &Lexer) -> String {
    match token.value {
        TokenValue::None => format!("{:?}", token.id),
        TokenValue::Int(value) => format!("Int({})", value),
        TokenValue::Float(value) => format!("Float({})", value),
        TokenValue::String(symbol) => {
            format!("{:?}({:?})", token.id, lexer.resolve_symbol(symbol))
        }
    }
}

fn tokenize_to_string(input: &str) -> String {
    let mut lexer = Lexer::from_text(input);
    let tokens = lexer.tokenize();

    tokens
        .iter()
        .map(|token| {
            format!(
                "{}:{} {}",
                token.position.line,
                token.position.column,
                describe(token, &lexer)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn snapshot_simple_binding() {
    let output = tokenize_to_string("let x = 0xFF");
    assert_snapshot!(output, @r#"
    1:1 Let
    1:5 Ident("x")
    1:7 Assign
    1:9 Int(255)
    1:13 Eof
    "#);
}

#[test]
fn snapshot_method_with_comment() {
    let input = "class Counter\n  // simple\n  fun apply(): U64 => 1\n";
    let output = tokenize_to_string(input);
    assert_snapshot!(output, @r#"
    1:1 Class
    1:7 Ident("Counter")
    3:3 Fun
    3:7 Ident("apply")
    3:12 LParen
    3:13 RParen
    3:14 Colon
    3:16 Ident("U64")
    3:20 DblArrow
    3:23 Int(1)
    4:1 Eof
    "#);
}

#[test]
fn snapshot_token_id_stream() {
    let mut lexer = Lexer::from_text("actor Main\n  be go() => this");
    let ids: Vec<TokenId> = lexer.tokenize().iter().map(|t| t.id).collect();

    assert_yaml_snapshot!(ids, @r"
    ---
    - Actor
    - Ident
    - Be
    - Ident
    - LParen
    - RParen
    - DblArrow
    - This
    - Eof
    ");
}

#[test]
fn snapshot_rendered_diagnostics() {
    let mut lexer = Lexer::from_text("\"oops");
    lexer.tokenize();

    let rendered = render_diagnostics(lexer.diagnostics());
    assert_snapshot!(rendered, @"<text>:1:1: error: Literal doesn't terminate");
}
