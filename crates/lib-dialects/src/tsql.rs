use sqlpretty_lib_core::dialects::{DialectKind, DialectSpec};
use sqlpretty_lib_core::helpers::Config;
use sqlpretty_lib_core::lexer::Matcher;
use sqlpretty_lib_core::tokens::TokenKind;

use super::tsql_keywords::{
    TSQL_RESERVED_KEYWORDS, TSQL_RESERVED_NEWLINE_KEYWORDS, TSQL_RESERVED_TOP_LEVEL_KEYWORDS,
    TSQL_RESERVED_TOP_LEVEL_NO_INDENT_KEYWORDS,
};
use super::{keyword_list, quoted_sigil_key, sigil_key};

/// Transact-SQL: `[bracketed]` identifiers, `@variable` placeholders, `#`
/// temp-table names, and the compound assignment operators.
pub fn spec() -> DialectSpec {
    let mut tsql_spec = super::sql::spec();
    tsql_spec.name = DialectKind::Tsql;

    tsql_spec.patch_lexer_matchers(vec![
        Matcher::regex("line_comment", r"--[^\n\r]*", TokenKind::LineComment),
        Matcher::regex(
            "quoted_placeholder",
            r#"@(?:'(?:[^'\\]|\\.)*'|"(?:[^"\\]|\\.)*"|\[[^\]]*\])"#,
            TokenKind::Placeholder,
        )
        .key(quoted_sigil_key),
        Matcher::regex(
            "named_placeholder",
            r"@[\p{L}\p{N}_$@#]+",
            TokenKind::Placeholder,
        )
        .key(sigil_key),
        Matcher::regex("word", r"[\p{L}\p{N}_#$]+", TokenKind::Word),
        Matcher::operators(
            "operator",
            &[
                "+=", "-=", "*=", "/=", "%=", "|=", "&=", "^=", "!<", "!>", "::", "<>", "<=",
                ">=", "!=", "=", "<", ">", "+", "-", "*", "/", "%", "&", "|", "^", "~",
            ],
            TokenKind::Operator,
        ),
        Matcher::keywords(
            "reserved_top_level",
            &keyword_list(TSQL_RESERVED_TOP_LEVEL_KEYWORDS),
            TokenKind::ReservedTopLevel,
        ),
        Matcher::keywords(
            "reserved_top_level_no_indent",
            &keyword_list(TSQL_RESERVED_TOP_LEVEL_NO_INDENT_KEYWORDS),
            TokenKind::ReservedTopLevelNoIndent,
        ),
        Matcher::keywords(
            "reserved_newline",
            &keyword_list(TSQL_RESERVED_NEWLINE_KEYWORDS),
            TokenKind::ReservedNewline,
        ),
        Matcher::keywords(
            "reserved",
            &keyword_list(TSQL_RESERVED_KEYWORDS),
            TokenKind::Reserved,
        ),
    ]);

    tsql_spec.insert_lexer_matchers(
        vec![Matcher::regex(
            "bracket_quote",
            r"\[[^\]]*\]",
            TokenKind::Word,
        )],
        "open_paren",
    );

    tsql_spec.config(|this| {
        this.remove_lexer_matcher("back_quote");
        this.remove_lexer_matcher("indexed_placeholder");
    })
}
