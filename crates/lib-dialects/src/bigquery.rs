use sqlpretty_lib_core::dialects::{DialectKind, DialectSpec};
use sqlpretty_lib_core::helpers::Config;
use sqlpretty_lib_core::lexer::Matcher;
use sqlpretty_lib_core::tokens::TokenKind;

use super::bigquery_keywords::{
    BIGQUERY_RESERVED_KEYWORDS, BIGQUERY_RESERVED_NEWLINE_KEYWORDS,
    BIGQUERY_RESERVED_TOP_LEVEL_KEYWORDS, BIGQUERY_RESERVED_TOP_LEVEL_NO_INDENT_KEYWORDS,
};
use super::{keyword_list, quoted_sigil_key, sigil_key};

/// BigQuery: triple-quoted and raw strings, `@param` placeholders, and
/// dashes as identifier characters for hyphenated project names.
pub fn spec() -> DialectSpec {
    let mut bigquery_spec = super::sql::spec();
    bigquery_spec.name = DialectKind::Bigquery;

    bigquery_spec.insert_lexer_matchers(
        vec![
            Matcher::regex("triple_single_quote", r"'''[\s\S]*?'''", TokenKind::String),
            Matcher::regex(
                "triple_double_quote",
                r#""""[\s\S]*?""""#,
                TokenKind::String,
            ),
            Matcher::regex(
                "raw_string",
                r#"[Rr]('[^']*'|"[^"]*")"#,
                TokenKind::String,
            ),
            Matcher::regex(
                "byte_string",
                r#"[Bb]('[^']*'|"[^"]*")"#,
                TokenKind::String,
            ),
        ],
        "single_quote",
    );

    bigquery_spec.patch_lexer_matchers(vec![
        Matcher::regex(
            "double_quote",
            r#""(?:[^"\\]|\\.|"")*""#,
            TokenKind::String,
        ),
        Matcher::regex(
            "quoted_placeholder",
            r#"@(?:'(?:[^'\\]|\\.)*'|"(?:[^"\\]|\\.)*"|`[^`]*`)"#,
            TokenKind::Placeholder,
        )
        .key(quoted_sigil_key),
        Matcher::regex(
            "named_placeholder",
            r"@[\p{L}\p{N}_$]+",
            TokenKind::Placeholder,
        )
        .key(sigil_key),
        Matcher::regex("word", r"[\p{L}\p{N}_-]+", TokenKind::Word),
        Matcher::operators(
            "operator",
            &[
                "<<", ">>", "=>", "<>", "<=", ">=", "!=", "||", "=", "<", ">", "+", "-", "*", "/",
                "%", "&", "|", "^", "~",
            ],
            TokenKind::Operator,
        ),
        Matcher::keywords(
            "reserved_top_level",
            &keyword_list(BIGQUERY_RESERVED_TOP_LEVEL_KEYWORDS),
            TokenKind::ReservedTopLevel,
        ),
        Matcher::keywords(
            "reserved_top_level_no_indent",
            &keyword_list(BIGQUERY_RESERVED_TOP_LEVEL_NO_INDENT_KEYWORDS),
            TokenKind::ReservedTopLevelNoIndent,
        ),
        Matcher::keywords(
            "reserved_newline",
            &keyword_list(BIGQUERY_RESERVED_NEWLINE_KEYWORDS),
            TokenKind::ReservedNewline,
        ),
        Matcher::keywords(
            "reserved",
            &keyword_list(BIGQUERY_RESERVED_KEYWORDS),
            TokenKind::Reserved,
        ),
    ]);

    bigquery_spec.config(|this| this.remove_lexer_matcher("national_string"))
}
