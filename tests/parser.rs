use dotted_json::parse;

#[test]
fn parse_basics() {
    let data = r#"
    {
        "hello": "wolrd",
        "vec": [
            {
        "num1": 1,
        "num2": 1.20,
        "num4": -12
    }
        ],
    "is": false,
    "is_not": true,
    "empty": null
    }
    "#;

    let (document, errors) = parse(data);

    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(
        document.to_string(),
        r#"{"hello": "wolrd", "vec": [{"num1": 1, "num2": 1.20, "num4": -12}], "is": false, "is_not": true, "empty": null}"#
    );
}

mod scalar {
    use dotted_json::{ast::Expression, parse};

    fn root(input: &str) -> Expression {
        let (document, errors) = parse(input);

        assert!(errors.is_empty(), "{:?}", errors);

        document.into_root().unwrap()
    }

    #[test]
    fn booleans() {
        for (input, expected) in [("true", true), ("false", false)] {
            match root(input) {
                Expression::Boolean { value, .. } => assert_eq!(value, expected),
                other => panic!("not a boolean: {:?}", other),
            }
        }
    }

    #[test]
    fn null() {
        assert!(matches!(root("null"), Expression::Null { .. }));
    }

    #[test]
    fn integer() {
        match root("42") {
            Expression::Integer { value, .. } => assert_eq!(value, 42),
            other => panic!("not an integer: {:?}", other),
        }
    }

    #[test]
    fn float_keeps_its_text() {
        match root("2.7182") {
            Expression::Float { value, .. } => assert_eq!(value, "2.7182"),
            other => panic!("not a float: {:?}", other),
        }
    }

    #[test]
    fn string() {
        match root(r#""Hello world!""#) {
            Expression::String { value, .. } => assert_eq!(value, "Hello world!"),
            other => panic!("not a string: {:?}", other),
        }
    }

    #[test]
    fn prefix() {
        for (input, literal) in [("-273", "273"), ("-3.14", "3.14")] {
            match root(input) {
                Expression::Prefix {
                    operator, right, ..
                } => {
                    assert_eq!(operator, "-");
                    assert_eq!(right.token_literal(), literal);
                }
                other => panic!("not a prefix expression: {:?}", other),
            }
        }
    }

    #[test]
    fn stringify_reproduces_scalars() {
        for input in [
            "true",
            "false",
            "null",
            "0",
            "123",
            "3.1400",
            "-7",
            r#""plain""#,
            r#""with \"quotes\"""#,
            r#""back\slash""#,
        ] {
            let (document, errors) = parse(input);

            assert!(errors.is_empty(), "{}: {:?}", input, errors);
            assert_eq!(document.to_string(), input);
        }
    }
}

mod collections {
    use dotted_json::{ast::Expression, parse};

    #[test]
    fn empty_object() {
        let (document, errors) = parse("{}");

        assert!(errors.is_empty());
        match document.root() {
            Some(Expression::Object { pairs, .. }) => assert!(pairs.is_empty()),
            other => panic!("not an object: {:?}", other),
        }
    }

    #[test]
    fn object_pairs() {
        let (document, errors) = parse(r#"{"one": 1, "two": 2, "three": 3}"#);

        assert!(errors.is_empty());

        let root = document.root().unwrap();
        for (key, expected) in [("one", "1"), ("two", "2"), ("three", "3")] {
            assert_eq!(root.get(key).unwrap().token_literal(), expected);
        }
        assert_eq!(document.to_string(), r#"{"one": 1, "two": 2, "three": 3}"#);
    }

    #[test]
    fn duplicate_key_overwrites_in_place() {
        let (document, errors) = parse(r#"{"a": 1, "b": 2, "a": 3}"#);

        assert!(errors.is_empty());
        assert_eq!(document.to_string(), r#"{"a": 3, "b": 2}"#);
    }

    #[test]
    fn empty_array() {
        let (document, errors) = parse("[]");

        assert!(errors.is_empty());
        assert_eq!(document.to_string(), "[]");
    }

    #[test]
    fn array_keeps_order() {
        let (document, errors) = parse("[1,2,3]");

        assert!(errors.is_empty());
        assert_eq!(document.to_string(), "[1, 2, 3]");
    }

    #[test]
    fn unterminated_string_ending_in_backslash_does_not_round_trip() {
        let (document, errors) = parse(r#""abc\"#);

        assert!(errors.is_empty());
        assert_eq!(document.to_string(), r#""abc\""#);

        let (reparsed, _) = parse(&document.to_string());
        assert_eq!(reparsed.get("").unwrap().as_str(), Some(r#"abc""#));
        assert_eq!(document.get("").unwrap().as_str(), Some(r#"abc\"#));
    }

    #[test]
    fn reparsing_output_is_stable() {
        for input in [
            "[1,2,3]",
            "[[], [true, false], null, -1, 2.50]",
            r#"["a", "b \"c\""]"#,
            r#"{"k": [1, {"x": "y"}]}"#,
        ] {
            let (first, errors) = parse(input);
            assert!(errors.is_empty(), "{}: {:?}", input, errors);

            let printed = first.to_string();
            let (second, errors) = parse(&printed);

            assert!(errors.is_empty(), "{}: {:?}", printed, errors);
            assert_eq!(second.to_string(), printed);
        }
    }

    #[test]
    fn trailing_comma_in_object_is_accepted() {
        let (document, errors) = parse(r#"{"a": 1,}"#);

        assert!(errors.is_empty());
        assert_eq!(document.to_string(), r#"{"a": 1}"#);
    }
}

mod errors {
    use dotted_json::{
        error::Kind,
        lexer::Lexer,
        parse,
        parser::Parser,
        token::TokenKind,
        value::Position,
    };

    fn messages(input: &str) -> Vec<String> {
        let (_, errors) = parse(input);

        errors.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn illegal_token() {
        assert_eq!(messages("$"), vec!["no parse function for ILLEGAL found."]);
        assert_eq!(messages("!"), vec!["no parse function for ILLEGAL found."]);
    }

    #[test]
    fn unclosed_object() {
        assert_eq!(
            messages("{"),
            vec!["expected next token to be STRING, got EOF instead."]
        );
    }

    #[test]
    fn keys_must_be_strings() {
        assert_eq!(
            messages("{1: 1}"),
            vec!["expected next token to be STRING, got INT instead."]
        );
    }

    #[test]
    fn missing_colon() {
        assert_eq!(
            messages(r#"{"a" 1}"#),
            vec!["expected next token to be COLON, got INT instead."]
        );
    }

    #[test]
    fn missing_comma_between_pairs() {
        assert_eq!(
            messages(r#"{"a": 1 "b": 2}"#),
            vec!["expected next token to be COMMA, got STRING instead."]
        );
    }

    #[test]
    fn wrong_bracket() {
        assert_eq!(
            messages(r#"["foo": "bar"]"#),
            vec!["expected next token to be ], got COLON instead."]
        );
    }

    #[test]
    fn unclosed_array() {
        assert_eq!(
            messages("[1, 2"),
            vec!["expected next token to be ], got EOF instead."]
        );
    }

    #[test]
    fn integer_out_of_range() {
        assert_eq!(
            messages("99999999999999999999"),
            vec![r#"could not parse "99999999999999999999" as integer."#]
        );
    }

    #[test]
    fn failure_discards_the_root() {
        let (document, errors) = parse(r#"{"a": [1, $]}"#);

        assert!(document.is_empty());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, Kind::NoParseFunction(TokenKind::Illegal));
    }

    #[test]
    fn tokens_after_the_root_are_ignored() {
        for (input, expected) in [("1 2", "1"), ("[1] ]", "[1]"), (r#"{"a": 1} $"#, r#"{"a": 1}"#)] {
            let (document, errors) = parse(input);

            assert!(errors.is_empty(), "{}: {:?}", input, errors);
            assert_eq!(document.to_string(), expected);
        }
    }

    #[test]
    fn errors_carry_positions() {
        let (_, errors) = parse("[\n  1,\n  @\n]");

        assert_eq!(errors[0].start, Position { line: 3, col: 3 });
        assert_eq!(errors[0].end, Position { line: 3, col: 4 });
    }

    #[test]
    fn depth_limit() {
        let deep = format!("{}{}", "[".repeat(10), "]".repeat(10));

        let mut parser = Parser::with_max_depth(Lexer::new(&deep), 5);
        let document = parser.parse();

        assert!(document.is_empty());
        assert_eq!(
            parser.errors()[0].to_string(),
            "maximum nesting depth of 5 exceeded."
        );

        let mut parser = Parser::with_max_depth(Lexer::new(&deep), 10);
        parser.parse();

        assert!(parser.errors().is_empty());
    }

    #[test]
    fn default_depth_limit_stops_runaway_nesting() {
        let deep = "[".repeat(100_000);

        let (document, errors) = parse(&deep);

        assert!(document.is_empty());
        assert_eq!(errors[0].kind, Kind::DepthLimitExceeded(128));
    }

    #[test]
    fn strict_parse() {
        let err = "{1: 1}".parse::<dotted_json::ast::Document>().unwrap_err();

        assert_eq!(err.to_string(), "expected next token to be STRING, got INT instead.");
        assert_eq!(err.messages().len(), 1);

        let document: dotted_json::ast::Document = "1 2".parse().unwrap();
        assert_eq!(document.to_string(), "1");
    }
}
