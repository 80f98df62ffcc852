use sqlpretty_lib_core::dialects::{DialectKind, DialectSpec};
use sqlpretty_lib_core::helpers::Config;
use sqlpretty_lib_core::lexer::{Cursor, Matcher};
use sqlpretty_lib_core::tokens::TokenKind;

use super::sql_keywords::{
    SQL_RESERVED_KEYWORDS, SQL_RESERVED_NEWLINE_KEYWORDS, SQL_RESERVED_TOP_LEVEL_KEYWORDS,
    SQL_RESERVED_TOP_LEVEL_NO_INDENT_KEYWORDS,
};
use super::{keyword_list, sigil_key};

/// Standard SQL. Every other dialect starts from this spec and patches it.
pub fn spec() -> DialectSpec {
    DialectSpec::new(DialectKind::Sql).config(|this| this.set_lexer_matchers(lexer_matchers()))
}

/// The canonical matcher order: comments, strings, quoted identifiers,
/// parens, placeholders, numbers, the keyword tables, words, operators, and
/// a single-character fallback. First match wins.
fn lexer_matchers() -> Vec<Matcher> {
    vec![
        Matcher::regex("line_comment", r"(?:--|#)[^\n\r]*", TokenKind::LineComment),
        Matcher::native("block_comment", block_comment, TokenKind::BlockComment),
        Matcher::regex("single_quote", r"'(?:[^'\\]|\\.|'')*'", TokenKind::String),
        Matcher::regex(
            "national_string",
            r"[Nn]'(?:[^'\\]|\\.|'')*'",
            TokenKind::String,
        ),
        Matcher::regex("double_quote", r#""(?:[^"\\]|\\.|"")*""#, TokenKind::Word),
        Matcher::regex("back_quote", r"`[^`]*`", TokenKind::Word),
        Matcher::keywords("open_paren", &["(", "CASE"], TokenKind::OpenParen),
        Matcher::keywords("close_paren", &[")", "END"], TokenKind::CloseParen),
        Matcher::regex(
            "quoted_placeholder",
            r#":(?:'(?:[^'\\]|\\.)*'|"(?:[^"\\]|\\.)*")"#,
            TokenKind::Placeholder,
        )
        .key(super::quoted_sigil_key),
        Matcher::regex(
            "named_placeholder",
            r":[\p{L}\p{N}_$]+",
            TokenKind::Placeholder,
        )
        .key(sigil_key),
        Matcher::string("indexed_placeholder", "?", TokenKind::Placeholder),
        Matcher::regex(
            "number",
            r"(?:0x[0-9a-fA-F]+|0b[01]+|(?:-\s*)?[0-9]+(?:\.[0-9]+)?(?:[eE]-?[0-9]+)?)\b",
            TokenKind::Number,
        ),
        Matcher::keywords(
            "reserved_top_level",
            &keyword_list(SQL_RESERVED_TOP_LEVEL_KEYWORDS),
            TokenKind::ReservedTopLevel,
        ),
        Matcher::keywords(
            "reserved_top_level_no_indent",
            &keyword_list(SQL_RESERVED_TOP_LEVEL_NO_INDENT_KEYWORDS),
            TokenKind::ReservedTopLevelNoIndent,
        ),
        Matcher::keywords(
            "reserved_newline",
            &keyword_list(SQL_RESERVED_NEWLINE_KEYWORDS),
            TokenKind::ReservedNewline,
        ),
        Matcher::keywords(
            "reserved",
            &keyword_list(SQL_RESERVED_KEYWORDS),
            TokenKind::Reserved,
        ),
        Matcher::regex("word", r"[\p{L}\p{N}_]+", TokenKind::Word),
        Matcher::operators(
            "operator",
            &[
                "<>", "<=", ">=", "!=", "||", "=", "<", ">", "+", "-", "*", "/", "%",
            ],
            TokenKind::Operator,
        ),
        Matcher::native("punctuation", punctuation, TokenKind::Punctuation),
    ]
}

/// `/* ... */`, tolerant of a missing terminator. Nesting is dialect-specific
/// and handled by [`nested_block_comment`].
pub(crate) fn block_comment(cursor: &mut Cursor) -> bool {
    if cursor.shift() != '/' {
        return false;
    }
    if cursor.shift() != '*' {
        return false;
    }

    loop {
        match cursor.shift() {
            Cursor::EOF => break true,
            '*' if cursor.peek() == '/' => {
                cursor.shift();
                break true;
            }
            _ => {}
        }
    }
}

/// `/* ... /* ... */ ... */` with depth counting.
pub(crate) fn nested_block_comment(cursor: &mut Cursor) -> bool {
    if cursor.shift() != '/' {
        return false;
    }
    if cursor.shift() != '*' {
        return false;
    }

    let mut depth = 1usize;

    loop {
        match cursor.shift() {
            Cursor::EOF => break true,
            '/' if cursor.peek() == '*' => {
                cursor.shift();
                depth += 1;
            }
            '*' if cursor.peek() == '/' => {
                cursor.shift();
                depth -= 1;
                if depth == 0 {
                    break true;
                }
            }
            _ => {}
        }
    }
}

/// Catch-all: consume exactly one character.
pub(crate) fn punctuation(cursor: &mut Cursor) -> bool {
    cursor.shift() != Cursor::EOF
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sqlpretty_lib_core::lexer::Tokenizer;
    use sqlpretty_lib_core::tokens::TokenKind;

    use super::*;

    fn tokenize(input: &str) -> Vec<(TokenKind, String)> {
        let spec = spec();
        Tokenizer::new(&spec)
            .tokenize(input)
            .unwrap()
            .into_iter()
            .map(|token| (token.kind, token.raw().to_string()))
            .collect()
    }

    #[test]
    fn classifies_clause_keywords() {
        let tokens = tokenize("SELECT a FROM t GROUP BY a UNION ALL SELECT b");

        assert_eq!(tokens[0], (TokenKind::ReservedTopLevel, "SELECT".into()));
        assert_eq!(tokens[4], (TokenKind::ReservedTopLevel, "GROUP BY".into()));
        assert_eq!(
            tokens[6],
            (TokenKind::ReservedTopLevelNoIndent, "UNION ALL".into())
        );
    }

    #[test]
    fn multi_word_join_is_one_token() {
        let tokens = tokenize("a LEFT OUTER JOIN b");
        assert_eq!(
            tokens[1],
            (TokenKind::ReservedNewline, "LEFT OUTER JOIN".into())
        );
    }

    #[test]
    fn strings_swallow_doubled_quotes_and_escapes() {
        let tokens = tokenize(r"'it''s' 'a\'b' N'text'");
        assert_eq!(tokens[0], (TokenKind::String, "'it''s'".into()));
        assert_eq!(tokens[1], (TokenKind::String, r"'a\'b'".into()));
        assert_eq!(tokens[2], (TokenKind::String, "N'text'".into()));
    }

    #[test]
    fn quoted_identifiers_are_words() {
        let tokens = tokenize(r#""col name" `other`"#);
        assert_eq!(tokens[0], (TokenKind::Word, "\"col name\"".into()));
        assert_eq!(tokens[1], (TokenKind::Word, "`other`".into()));
    }

    #[test]
    fn block_comment_spans_lines() {
        let tokens = tokenize("/* a\n b */ x /* unterminated");
        assert_eq!(tokens[0], (TokenKind::BlockComment, "/* a\n b */".into()));
        assert_eq!(
            tokens[2],
            (TokenKind::BlockComment, "/* unterminated".into())
        );
    }

    #[test]
    fn placeholders_and_numbers() {
        let tokens = tokenize("? :name :'quoted' 0x1F 1.5e-3");
        assert_eq!(tokens[0], (TokenKind::Placeholder, "?".into()));
        assert_eq!(tokens[1], (TokenKind::Placeholder, ":name".into()));
        assert_eq!(tokens[2], (TokenKind::Placeholder, ":'quoted'".into()));
        assert_eq!(tokens[3], (TokenKind::Number, "0x1F".into()));
        assert_eq!(tokens[4], (TokenKind::Number, "1.5e-3".into()));
    }

    #[test]
    fn reserved_is_not_matched_inside_identifiers() {
        let tokens = tokenize("selection fromage");
        assert_eq!(tokens[0], (TokenKind::Word, "selection".into()));
        assert_eq!(tokens[1], (TokenKind::Word, "fromage".into()));
    }
}
