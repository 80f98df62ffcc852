use sqlpretty_lib_core::dialects::{DialectKind, DialectSpec};
use sqlpretty_lib_core::helpers::Config;
use sqlpretty_lib_core::lexer::Matcher;
use sqlpretty_lib_core::tokens::TokenKind;

use super::postgresql_keywords::{
    POSTGRESQL_RESERVED_KEYWORDS, POSTGRESQL_RESERVED_NEWLINE_KEYWORDS,
    POSTGRESQL_RESERVED_TOP_LEVEL_KEYWORDS, POSTGRESQL_RESERVED_TOP_LEVEL_NO_INDENT_KEYWORDS,
};
use super::{keyword_list, sigil_key};

pub fn spec() -> DialectSpec {
    raw_spec().config(|this| this.name = DialectKind::Postgresql)
}

/// PostgreSQL: dollar-quoted and `E''` strings, nested block comments,
/// `$1`-style placeholders, and the rich operator set (`::`, `->>`, `~~`…).
pub(crate) fn raw_spec() -> DialectSpec {
    let mut postgres_spec = super::sql::spec();

    postgres_spec.patch_lexer_matchers(vec![
        Matcher::regex("line_comment", r"--[^\n\r]*", TokenKind::LineComment),
        Matcher::native(
            "block_comment",
            super::sql::nested_block_comment,
            TokenKind::BlockComment,
        ),
        Matcher::operators(
            "operator",
            &[
                "!~~*", "!~~", "~~*", "~~", "!~*", "!~", "~*", "->>", "->", "#>>", "#>", "||/",
                "|/", "::", "<<", ">>", "&&", "||", "<>", "<=", ">=", "!=", "!!", "=", "<", ">",
                "+", "-", "*", "/", "%", "&", "|", "^", "#", "~", "!",
            ],
            TokenKind::Operator,
        ),
    ]);

    postgres_spec.insert_lexer_matchers(
        vec![
            Matcher::regex(
                "dollar_quote",
                r"\$(\w*)\$[\s\S]*?\$\1\$",
                TokenKind::String,
            ),
            Matcher::regex(
                "escape_string",
                r"[Ee]'(?:[^'\\]|\\.|'')*'",
                TokenKind::String,
            ),
            Matcher::regex("bit_string", r"[BbXx]'[^']*'", TokenKind::String),
        ],
        "single_quote",
    );

    postgres_spec.insert_lexer_matchers(
        vec![
            Matcher::regex("dollar_placeholder", r"\$[0-9]+", TokenKind::Placeholder)
                .key(sigil_key),
        ],
        "indexed_placeholder",
    );

    postgres_spec.patch_lexer_matchers(vec![
        Matcher::keywords(
            "reserved_top_level",
            &keyword_list(POSTGRESQL_RESERVED_TOP_LEVEL_KEYWORDS),
            TokenKind::ReservedTopLevel,
        ),
        Matcher::keywords(
            "reserved_top_level_no_indent",
            &keyword_list(POSTGRESQL_RESERVED_TOP_LEVEL_NO_INDENT_KEYWORDS),
            TokenKind::ReservedTopLevelNoIndent,
        ),
        Matcher::keywords(
            "reserved_newline",
            &keyword_list(POSTGRESQL_RESERVED_NEWLINE_KEYWORDS),
            TokenKind::ReservedNewline,
        ),
        Matcher::keywords(
            "reserved",
            &keyword_list(POSTGRESQL_RESERVED_KEYWORDS),
            TokenKind::Reserved,
        ),
    ]);

    postgres_spec
}
