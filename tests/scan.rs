use {
    imagelex::{tokenize, Kind, LexErrorKind, Scanner, SourceLocation},
    pretty_assertions::assert_eq,
    proptest::prelude::*,
};

const PROGRAM: &str = "\
void fill(image img, pixel p) <:
    ## paint every pixel
    do img[x,y] -> img[x,y] = p; od;
    if width(img) >= 256 && !FALSE -> write \"wide\"; fi;
    ^ RED ** 2 % Z
:>
";

#[test]
fn scans_a_program() {
    let tokens = tokenize(PROGRAM).unwrap();
    let summary: Vec<_> = tokens.iter().map(|t| (t.kind, t.text())).collect();
    assert_eq!(
        summary,
        vec![
            (Kind::KwVoid, "void"),
            (Kind::Ident, "fill"),
            (Kind::LParen, "("),
            (Kind::KwImage, "image"),
            (Kind::Ident, "img"),
            (Kind::Comma, ","),
            (Kind::KwPixel, "pixel"),
            (Kind::Ident, "p"),
            (Kind::RParen, ")"),
            (Kind::BlockOpen, "<:"),
            (Kind::KwDo, "do"),
            (Kind::Ident, "img"),
            (Kind::LSquare, "["),
            (Kind::Ident, "x"),
            (Kind::Comma, ","),
            (Kind::Ident, "y"),
            (Kind::RSquare, "]"),
            (Kind::RArrow, "->"),
            (Kind::Ident, "img"),
            (Kind::LSquare, "["),
            (Kind::Ident, "x"),
            (Kind::Comma, ","),
            (Kind::Ident, "y"),
            (Kind::RSquare, "]"),
            (Kind::Assign, "="),
            (Kind::Ident, "p"),
            (Kind::Semi, ";"),
            (Kind::KwOd, "od"),
            (Kind::Semi, ";"),
            (Kind::KwIf, "if"),
            (Kind::KwWidth, "width"),
            (Kind::LParen, "("),
            (Kind::Ident, "img"),
            (Kind::RParen, ")"),
            (Kind::Ge, ">="),
            (Kind::NumLit, "256"),
            (Kind::And, "&&"),
            (Kind::Bang, "!"),
            (Kind::BooleanLit, "FALSE"),
            (Kind::RArrow, "->"),
            (Kind::KwWrite, "write"),
            (Kind::StringLit, "\"wide\""),
            (Kind::Semi, ";"),
            (Kind::KwFi, "fi"),
            (Kind::Semi, ";"),
            (Kind::Return, "^"),
            (Kind::Const, "RED"),
            (Kind::Exp, "**"),
            (Kind::NumLit, "2"),
            (Kind::Mod, "%"),
            (Kind::Const, "Z"),
            (Kind::BlockClose, ":>"),
            (Kind::Eof, ""),
        ]
    );
    assert_eq!(tokens[10].location, SourceLocation::new(3, 5));
    assert_eq!(tokens.last().unwrap().location, SourceLocation::new(7, 1));
}

#[test]
fn box_token() {
    let tokens = tokenize("image[] a;").unwrap();
    assert_eq!(tokens[1].kind, Kind::Box);
    assert_eq!(tokens[1].text(), "[]");
    assert_eq!(tokens[1].len, 2);
}

#[test]
fn error_in_the_middle_stops_scanning() {
    let mut scanner = Scanner::new("a\n  b $ c");
    assert_eq!(scanner.next_token().unwrap().text(), "a");
    assert_eq!(scanner.next_token().unwrap().text(), "b");
    let error = scanner.next_token().unwrap_err();
    assert_eq!(error.kind, LexErrorKind::UnexpectedCharacter('$'));
    assert_eq!(error.location, SourceLocation::new(2, 5));
}

fn piece() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,8}",
        "0|[1-9][0-9]{0,8}",
        "\"[ !#-~]{0,10}\"",
        "##[ -~]{0,10}\n",
        "[ \t\r\n]{1,3}",
        prop::sample::select(vec![
            ",", "%", "+", "]", "/", "?", "!", ";", ")", "(", "^", "[", "[]", "&", "&&", "|",
            "||", "<", "<=", "<:", ">", ">=", "=", "==", "-", "->", ":", ":>", "*", "**",
        ])
        .prop_map(String::from),
        prop::sample::select(vec!["if", "od", "RED", "TRUE", "Z", "width"]).prop_map(String::from),
    ]
}

fn program() -> impl Strategy<Value = String> {
    prop::collection::vec(piece(), 0..24).prop_map(|pieces| pieces.join(" "))
}

proptest! {
    #[test]
    fn tokens_and_gaps_rebuild_the_source(source in program()) {
        let tokens = tokenize(&source).unwrap();
        let mut rebuilt = String::new();
        let mut end = 0;
        for token in &tokens {
            prop_assert!(token.offset >= end);
            let gap = &source[end..token.offset];
            // Skipped text holds nothing but whitespace and comments.
            let gap_kinds: Vec<_> = tokenize(gap).unwrap().iter().map(|t| t.kind).collect();
            prop_assert_eq!(gap_kinds, vec![Kind::Eof]);
            rebuilt.push_str(gap);
            rebuilt.push_str(token.text());
            end = token.offset + token.len;
        }
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(Kind::Eof));
        prop_assert_eq!(end, source.len());
        prop_assert_eq!(rebuilt, source);
    }

    #[test]
    fn scanning_is_deterministic(source in program()) {
        prop_assert_eq!(tokenize(&source).unwrap(), tokenize(&source).unwrap());
    }

    #[test]
    fn locations_match_offsets(source in program()) {
        for token in tokenize(&source).unwrap() {
            let before = &source[..token.offset];
            let line = 1 + before.matches('\n').count();
            let column = 1 + before.len() - before.rfind('\n').map_or(0, |i| i + 1);
            prop_assert_eq!(token.location, SourceLocation::new(line, column));
        }
    }
}
