use listlang::utils::{Expected, Symbol, SyntaxErrorKind};
use listlang::{parse, scan, ListParser, Scanner, TokenCode};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const MAX_INPUT_CHARS: usize = 200;

const ASCII_ALPHABET: &[char] = &[
    'a', 'Z', '7', '.', '=', '[', ']', ',', ';', '"', '+', '-', ' ', '\n', '_', '#',
];

const MIXED_ALPHABET: &[char] = &[
    'a', 'Z', '7', '.', '=', '[', ']', ',', ';', '"', '+', '-', ' ', '\n', '_', '#', 'ж',
];

fn text_from(alphabet: &'static [char]) -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(alphabet), 0..=MAX_INPUT_CHARS)
        .prop_map(|chars| chars.into_iter().collect())
}

fn list_like_text() -> impl Strategy<Value = String> {
    text_from(MIXED_ALPHABET)
}

proptest! {
    #[test]
    fn scan_accounts_for_every_non_whitespace_char(input in "\\PC{0,200}") {
        let tokens = scan(&input);
        let covered: usize = tokens.iter().map(|t| t.lexeme.chars().count()).sum();
        let expected = input.chars().filter(|c| !c.is_whitespace()).count();
        prop_assert_eq!(covered, expected);
    }

    #[test]
    fn scan_spans_cover_every_non_whitespace_char(input in text_from(ASCII_ALPHABET)) {
        // Without inline identifier errors, token spans never overlap.
        let tokens = scan(&input);
        let covered: usize = tokens
            .iter()
            .map(|t| t.span.end_column + 1 - t.span.start_column)
            .sum();
        let expected = input.chars().filter(|c| !c.is_whitespace()).count();
        prop_assert_eq!(covered, expected);
        for t in &tokens {
            prop_assert_eq!(t.span.end_column + 1 - t.span.start_column, t.lexeme.chars().count());
        }
    }

    #[test]
    fn scan_tokens_are_ordered_by_position(input in list_like_text()) {
        let tokens = scan(&input);
        for pair in tokens.windows(2) {
            let (a, b) = (pair[0].span, pair[1].span);
            prop_assert!((a.line, a.start_column) < (b.line, b.start_column));
        }
    }

    #[test]
    fn parse_terminates_with_bounded_errors(input in list_like_text()) {
        let len = input.chars().count();
        let errors = parse(&input);
        // Six fixed grammar points report at most once each; element errors
        // need a comma or the first element, digit errors consume a digit.
        prop_assert!(errors.len() <= len + 7);
        for pair in errors.windows(2) {
            prop_assert!(pair[0].position <= pair[1].position);
        }
        for e in &errors {
            prop_assert!(e.position <= len);
            prop_assert_eq!(e.symbol == Symbol::EndOfInput, e.position == len);
        }
    }

    #[test]
    fn fresh_instances_agree(input in list_like_text()) {
        prop_assert_eq!(Scanner::default().scan(&input), Scanner::default().scan(&input));
        prop_assert_eq!(ListParser::new().parse(&input), ListParser::new().parse(&input));
    }

    #[test]
    fn valid_lists_are_accepted(
        name in "[a-zA-Z][a-zA-Z]{0,8}",
        elems in proptest::collection::vec(
            prop_oneof![
                "[+-]?[0-9]{1,4}(\\.[0-9]{1,3})?",
                "\"[^\"]{0,6}\"",
            ],
            0..6,
        ),
        trailing_comma in any::<bool>(),
    ) {
        let mut body = elems.join(", ");
        if trailing_comma && !elems.is_empty() {
            body.push(',');
        }
        let src = format!("{name} = [{body}];");
        prop_assert!(parse(&src).is_empty(), "{:?}", src);
    }
}

#[test]
fn keyword_list_scans_into_eight_tokens() {
    let tokens = scan("List=[1,2];");
    let codes: Vec<_> = tokens.iter().map(|t| t.code).collect();
    assert_eq!(
        codes,
        vec![
            TokenCode::Keyword,
            TokenCode::AssignOp,
            TokenCode::LBracket,
            TokenCode::Integer,
            TokenCode::Comma,
            TokenCode::Integer,
            TokenCode::RBracket,
            TokenCode::Semicolon,
        ]
    );
    assert!(tokens.iter().all(|t| !t.is_error()));
}

#[test]
fn empty_input() {
    assert!(scan("").is_empty());
    let errors = parse("");
    assert_eq!(
        errors.iter().map(|e| e.kind).collect::<Vec<_>>(),
        vec![
            SyntaxErrorKind::InvalidIdentifierStart,
            SyntaxErrorKind::MissingSymbol(Expected::Assign),
            SyntaxErrorKind::MissingSymbol(Expected::LBracket),
            SyntaxErrorKind::MissingSymbol(Expected::RBracket),
            SyntaxErrorKind::MissingSymbol(Expected::Semicolon),
        ]
    );
    assert!(errors.iter().all(|e| e.symbol == Symbol::EndOfInput));
}

#[test]
fn single_error_programs() {
    assert!(parse("abc=[1,2,3];").is_empty());

    let missing_semicolon = SyntaxErrorKind::MissingSymbol(Expected::Semicolon);
    let cases = [
        ("abc=[1,2,3]", missing_semicolon, Symbol::EndOfInput, 11),
        ("2bc=[1];", SyntaxErrorKind::InvalidIdentifierStart, Symbol::Char('2'), 0),
        ("abc=[,];", SyntaxErrorKind::MissingElement, Symbol::Char(','), 5),
    ];
    for (src, kind, symbol, position) in cases {
        let errors = parse(src);
        assert_eq!(errors.len(), 1, "{src:?}");
        let got = (errors[0].kind, errors[0].symbol, errors[0].position);
        assert_eq!(got, (kind, symbol, position));
    }
}
