/// End-to-end tests for the front end
/// Demonstrates: Lexer → Parser working together
use tiny_lisp_front::{
    parse, parse_source, parse_with_config, tokenize, Error, Expected, LexError, Node,
    ParseError, ParserConfig, Program, TokenKind,
};

#[test]
fn test_e2e_simple_call() {
    let source = "(add 2 3)";

    // Lex
    let tokens = tokenize(source).unwrap();
    let summary: Vec<(TokenKind, &str)> =
        tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();
    assert_eq!(
        summary,
        vec![
            (TokenKind::Paren, "("),
            (TokenKind::Name, "add"),
            (TokenKind::Number, "2"),
            (TokenKind::Number, "3"),
            (TokenKind::Paren, ")"),
        ]
    );

    // Parse
    let program = parse(tokens).unwrap();
    assert_eq!(
        program,
        Program::new(vec![Node::call(
            "add",
            vec![Node::number("2"), Node::number("3")]
        )])
    );
}

#[test]
fn test_e2e_nested_call() {
    let program = parse_source("(add 2 (subtract 4 2))").unwrap();

    assert_eq!(
        program,
        Program::new(vec![Node::call(
            "add",
            vec![
                Node::number("2"),
                Node::call("subtract", vec![Node::number("4"), Node::number("2")]),
            ]
        )])
    );
}

#[test]
fn test_e2e_string_params() {
    let program = parse_source(r#"(concat "foo" "bar")"#).unwrap();

    assert_eq!(
        program,
        Program::new(vec![Node::call(
            "concat",
            vec![Node::string("foo"), Node::string("bar")]
        )])
    );
}

#[test]
fn test_e2e_unexpected_character() {
    let err = tokenize("(add 2 @)").unwrap_err();
    assert!(matches!(
        err,
        LexError::UnexpectedCharacter {
            character: '@',
            position: 7,
            ..
        }
    ));
}

#[test]
fn test_e2e_unterminated_call() {
    let tokens = tokenize("(add 2").unwrap();
    let len = tokens.len();
    let err = parse(tokens).unwrap_err();

    assert_eq!(
        err,
        ParseError::UnexpectedEof {
            expected: Expected::ClosingParen,
            position: len,
        }
    );
}

#[test]
fn test_e2e_zero_argument_call() {
    let program = parse_source("(add)").unwrap();
    assert_eq!(program.body, vec![Node::call("add", vec![])]);
}

#[test]
fn test_e2e_json_output() {
    let program = parse_source("(add 100 (subtract 200 3000))").unwrap();

    let json = program.to_json().unwrap();
    assert_eq!(
        json,
        concat!(
            r#"{"type":"Program","body":[{"type":"CallExpression","name":"add","params":["#,
            r#"{"type":"NumberLiteral","value":"100"},"#,
            r#"{"type":"CallExpression","name":"subtract","params":["#,
            r#"{"type":"NumberLiteral","value":"200"},"#,
            r#"{"type":"NumberLiteral","value":"3000"}]}]}]}"#
        )
    );
}

#[test]
fn test_e2e_json_round_trip() {
    let program = parse_source(r#"(print (concat "a" "b") 7) (noop)"#).unwrap();
    let json = program.to_json().unwrap();
    let back: Program = serde_json::from_str(&json).unwrap();
    assert_eq!(back, program);
}

#[test]
fn test_e2e_token_json() {
    let tokens = tokenize("(add 2)").unwrap();
    let json = serde_json::to_value(&tokens).unwrap();
    assert_eq!(json[0]["type"], "paren");
    assert_eq!(json[1]["type"], "name");
    assert_eq!(json[1]["value"], "add");
    assert_eq!(json[2]["type"], "number");
}

#[test]
fn test_e2e_error_propagation() {
    let err = parse_source("(add 2").unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::UnexpectedEof { .. })));
    assert!(err.to_string().contains("end of input"));

    let err = parse_source("(concat \"foo").unwrap_err();
    assert!(matches!(
        err,
        Error::Lex(LexError::UnterminatedString { position: 8, .. })
    ));
    assert_eq!(err.position(), 8);
}

#[test]
fn test_e2e_nesting_limit() {
    let source = format!("{}{}", "(f ".repeat(10), ")".repeat(10));
    let config = ParserConfig::new().with_max_depth(5);

    let err = parse_with_config(tokenize(&source).unwrap(), &config).unwrap_err();
    assert!(matches!(err, ParseError::NestingTooDeep { limit: 5, .. }));

    let program = parse_source(&source).unwrap();
    assert_eq!(program.depth(), 10);
}

#[test]
fn test_e2e_parallel_invocations() {
    let sources = ["(add 1 2)", "(concat \"x\" \"y\")", "(a (b (c 3)))", "(add 2"];

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = sources
            .iter()
            .map(|source| scope.spawn(move || parse_source(source)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (source, result) in sources.iter().zip(&results) {
        assert_eq!(result, &parse_source(source));
    }
    assert!(results[3].is_err());
}

#[test]
fn test_e2e_display_round_trip() {
    let source = "(add   2\n  (subtract 4 2))\n\"s\"  10";
    let program = parse_source(source).unwrap();
    let rendered = program.to_string();

    assert_eq!(rendered, "(add 2 (subtract 4 2)) \"s\" 10");
    assert_eq!(parse_source(&rendered).unwrap(), program);
}
