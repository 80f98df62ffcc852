use sqlpretty_lib_core::dialects::{DialectKind, DialectSpec};
use sqlpretty_lib_core::helpers::Config;
use sqlpretty_lib_core::lexer::Matcher;
use sqlpretty_lib_core::tokens::TokenKind;

use super::keyword_list;
use super::mysql_keywords::{
    MYSQL_RESERVED_KEYWORDS, MYSQL_RESERVED_NEWLINE_KEYWORDS, MYSQL_RESERVED_TOP_LEVEL_KEYWORDS,
    MYSQL_RESERVED_TOP_LEVEL_NO_INDENT_KEYWORDS,
};

pub fn spec() -> DialectSpec {
    raw_spec().config(|this| this.name = DialectKind::Mysql)
}

/// MySQL: double quotes are strings, `?` is the only placeholder style, and
/// `@` / `@@` variables lex as words.
pub(crate) fn raw_spec() -> DialectSpec {
    let mut mysql_spec = super::sql::spec();

    mysql_spec.patch_lexer_matchers(vec![
        Matcher::regex(
            "double_quote",
            r#""(?:[^"\\]|\\.|"")*""#,
            TokenKind::String,
        ),
        Matcher::regex("word", r"[\p{L}\p{N}_$@]+", TokenKind::Word),
        Matcher::keywords(
            "reserved_top_level",
            &keyword_list(MYSQL_RESERVED_TOP_LEVEL_KEYWORDS),
            TokenKind::ReservedTopLevel,
        ),
        Matcher::keywords(
            "reserved_top_level_no_indent",
            &keyword_list(MYSQL_RESERVED_TOP_LEVEL_NO_INDENT_KEYWORDS),
            TokenKind::ReservedTopLevelNoIndent,
        ),
        Matcher::keywords(
            "reserved_newline",
            &keyword_list(MYSQL_RESERVED_NEWLINE_KEYWORDS),
            TokenKind::ReservedNewline,
        ),
        Matcher::keywords(
            "reserved",
            &keyword_list(MYSQL_RESERVED_KEYWORDS),
            TokenKind::Reserved,
        ),
        Matcher::operators(
            "operator",
            &[
                ":=", "<<", ">>", "<=>", "&&", "||", "<>", "<=", ">=", "!=", "=", "<", ">", "+",
                "-", "*", "/", "%", "&", "|", "^", "~",
            ],
            TokenKind::Operator,
        ),
    ]);

    mysql_spec.remove_lexer_matcher("quoted_placeholder");
    mysql_spec.remove_lexer_matcher("named_placeholder");

    mysql_spec
}
