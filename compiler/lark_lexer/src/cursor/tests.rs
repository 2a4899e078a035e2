use super::*;

#[test]
fn advance_walks_chars_by_byte_offset() {
    let mut cursor = Cursor::new("aé!");
    assert_eq!(cursor.advance(), Some('a'));
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.advance(), Some('é'));
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.current(), '!');
    assert_eq!(cursor.advance(), Some('!'));
    assert!(cursor.is_eof());
    assert_eq!(cursor.advance(), None);
    assert_eq!(cursor.current(), '\0');
}

#[test]
fn peek_looks_one_past_current() {
    let cursor = Cursor::new("12");
    assert_eq!(cursor.current(), '1');
    assert_eq!(cursor.peek(), '2');
    assert_eq!(Cursor::new("1").peek(), '\0');
}

#[test]
fn eat_only_matches_expected() {
    let mut cursor = Cursor::new("=>");
    assert!(!cursor.eat('>'));
    assert!(cursor.eat('='));
    assert!(cursor.eat('>'));
    assert!(!cursor.eat('>'));
}

#[test]
fn eat_until_newline_stops_before_it() {
    let mut cursor = Cursor::new("// note\nnext");
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 7);
    assert_eq!(cursor.current(), '\n');

    let mut cursor = Cursor::new("// trailing");
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

#[test]
fn eat_until_quote_counts_newlines() {
    let mut cursor = Cursor::new("a\nb\nc\" tail");
    assert_eq!(cursor.eat_until_quote(), (2, true));
    assert_eq!(cursor.current(), '"');
    assert_eq!(cursor.slice_from(0), "a\nb\nc");

    let mut cursor = Cursor::new("open\n");
    assert_eq!(cursor.eat_until_quote(), (1, false));
    assert!(cursor.is_eof());
}

#[test]
fn eat_while_and_slice() {
    let mut cursor = Cursor::new("123.5x");
    cursor.eat_while(|c| c.is_ascii_digit());
    assert_eq!(cursor.slice_from(0), "123");
}
