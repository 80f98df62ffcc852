use sqlpretty_lib_core::dialects::{DialectKind, DialectSpec};
use sqlpretty_lib_core::lexer::Matcher;
use sqlpretty_lib_core::tokens::TokenKind;

use super::plsql_keywords::{
    PLSQL_RESERVED_KEYWORDS, PLSQL_RESERVED_NEWLINE_KEYWORDS, PLSQL_RESERVED_TOP_LEVEL_KEYWORDS,
};
use super::keyword_list;

/// Oracle PL/SQL: `:bind` variables, `q'[...]'` literals, and the block
/// keywords (`BEGIN`, `DECLARE`, `LOOP`) as clause anchors.
pub fn spec() -> DialectSpec {
    let mut plsql_spec = super::sql::spec();
    plsql_spec.name = DialectKind::Plsql;

    plsql_spec.patch_lexer_matchers(vec![
        Matcher::regex("line_comment", r"--[^\n\r]*", TokenKind::LineComment),
        Matcher::operators(
            "operator",
            &[
                "**", ":=", "~=", "^=", "=>", "||", "<>", "<=", ">=", "!=", "=", "<", ">", "+",
                "-", "*", "/", "%",
            ],
            TokenKind::Operator,
        ),
        Matcher::keywords(
            "reserved_top_level",
            &keyword_list(PLSQL_RESERVED_TOP_LEVEL_KEYWORDS),
            TokenKind::ReservedTopLevel,
        ),
        Matcher::keywords(
            "reserved_newline",
            &keyword_list(PLSQL_RESERVED_NEWLINE_KEYWORDS),
            TokenKind::ReservedNewline,
        ),
        Matcher::keywords(
            "reserved",
            &keyword_list(PLSQL_RESERVED_KEYWORDS),
            TokenKind::Reserved,
        ),
    ]);

    plsql_spec.insert_lexer_matchers(
        vec![Matcher::regex(
            "q_quote",
            r"[Qq]'(?:\[[\s\S]*?\]|\{[\s\S]*?\}|\([\s\S]*?\)|<[\s\S]*?>)'",
            TokenKind::String,
        )],
        "single_quote",
    );

    plsql_spec
}
