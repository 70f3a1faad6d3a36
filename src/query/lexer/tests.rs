use super::*;

use pretty_assertions::assert_eq;

fn check_src(src: &str, expected: Vec<Symbol>) {
    let symbols = extract_symbols(src);
    assert_eq!(expected, symbols);
}

fn ops(src: &str) -> Vec<Operator> {
    scan(src)
        .filter_map(|symbol| match symbol.get_kind() {
            SKind::Op(op) => Some(*op),
            _ => None,
        })
        .collect()
}

#[test]
fn empty() {
    check_src("", vec![]);
}

#[test]
fn single_literal() {
    check_src("{bold}", vec![
        Symbol::new(SKind::Literal("{bold}"), 1, 6),
    ]);
}

#[test]
fn symbols_and_literals() {
    let src = "!({bold} & {serif}) | {mono}";
    let expected = vec![
        Symbol::new(SKind::Op(Op::Not), 1, 1),
        Symbol::new(SKind::GroupOpen, 2, 1),
        Symbol::new(SKind::Literal("{bold}"), 3, 6),
        Symbol::new(SKind::Op(Op::And), 10, 1),
        Symbol::new(SKind::Literal("{serif}"), 12, 7),
        Symbol::new(SKind::GroupClose, 19, 1),
        Symbol::new(SKind::Op(Op::Or), 21, 1),
        Symbol::new(SKind::Literal("{mono}"), 23, 6),
    ];
    check_src(src, expected);
}

#[test]
fn word_spellings() {
    let src = "not {a} and {b} or {c}";
    let expected = vec![
        Symbol::new(SKind::Op(Op::Not), 1, 3),
        Symbol::new(SKind::Literal("{a}"), 5, 3),
        Symbol::new(SKind::Op(Op::And), 9, 3),
        Symbol::new(SKind::Literal("{b}"), 13, 3),
        Symbol::new(SKind::Op(Op::Or), 17, 2),
        Symbol::new(SKind::Literal("{c}"), 20, 3),
    ];
    check_src(src, expected);
}

#[test]
fn word_spellings_ignore_case() {
    assert_eq!(ops("NOT And oR"), vec![Op::Not, Op::And, Op::Or]);
}

#[test]
fn overlapping_keywords() {
    let symbols = extract_symbols("oror");
    assert_eq!(symbols, vec![
        Symbol::new(SKind::Op(Op::Or), 1, 2),
        Symbol::new(SKind::Op(Op::Or), 3, 2),
    ]);
}

#[test]
fn keywords_inside_words() {
    assert_eq!(ops("color"), vec![Op::Or]);
    assert_eq!(ops("android"), vec![Op::And]);
    assert_eq!(ops("north"), vec![Op::Or]);
    assert_eq!(ops("cannot"), vec![Op::Not]);
}

#[test]
fn braces_make_content_inert() {
    check_src("{not (a) | b & c}", vec![
        Symbol::new(SKind::Literal("{not (a) | b & c}"), 1, 17),
    ]);
}

#[test]
fn nested_open_brace_is_literal_text() {
    check_src("{{All Fonts}}", vec![
        Symbol::new(SKind::Literal("{{All Fonts}"), 1, 12),
    ]);
}

#[test]
fn stray_close_brace_ignored() {
    check_src("}{a}}", vec![
        Symbol::new(SKind::Literal("{a}"), 2, 3),
    ]);
}

#[test]
fn unterminated_literal() {
    let mut scanner = scan("{a} & {bo");
    let symbols: Vec<_> = scanner.by_ref().collect();

    assert_eq!(symbols, vec![
        Symbol::new(SKind::Literal("{a}"), 1, 3),
        Symbol::new(SKind::Op(Op::And), 5, 1),
    ]);
    assert_eq!(scanner.pending_literal(), Some(7));
}

#[test]
fn columns_count_characters() {
    check_src("{é} | {ß}", vec![
        Symbol::new(SKind::Literal("{é}"), 1, 3),
        Symbol::new(SKind::Op(Op::Or), 5, 1),
        Symbol::new(SKind::Literal("{ß}"), 7, 3),
    ]);
}

#[test]
fn multibyte_text_outside_braces() {
    assert_eq!(ops("ñor ü"), vec![Op::Or]);
    assert!(ops("日本").is_empty());
}
