use sqlpretty_lib_core::dialects::{DialectKind, DialectSpec};
use sqlpretty_lib_core::helpers::Config;
use sqlpretty_lib_core::lexer::Matcher;
use sqlpretty_lib_core::tokens::{Token, TokenKind};

use super::spark_keywords::{
    SPARK_RESERVED_KEYWORDS, SPARK_RESERVED_NEWLINE_KEYWORDS, SPARK_RESERVED_TOP_LEVEL_KEYWORDS,
};
use super::keyword_list;

/// Spark SQL builds on the Hive surface: `${var}`-style `$` placeholders,
/// the extra join flavors, and the `WINDOW` function-call quirk.
pub fn spec() -> DialectSpec {
    let mut spark_spec = super::hive::raw_spec();
    spark_spec.name = DialectKind::Spark;

    spark_spec.patch_lexer_matchers(vec![
        Matcher::operators(
            "operator",
            &[
                "<=>", "==", "&&", "||", "<>", "<=", ">=", "!=", "=", "<", ">", "+", "-", "*",
                "/", "%", "&", "|", "^", "~",
            ],
            TokenKind::Operator,
        ),
        Matcher::keywords(
            "reserved_top_level",
            &keyword_list(SPARK_RESERVED_TOP_LEVEL_KEYWORDS),
            TokenKind::ReservedTopLevel,
        ),
        Matcher::keywords(
            "reserved_newline",
            &keyword_list(SPARK_RESERVED_NEWLINE_KEYWORDS),
            TokenKind::ReservedNewline,
        ),
        Matcher::keywords(
            "reserved",
            &keyword_list(SPARK_RESERVED_KEYWORDS),
            TokenKind::Reserved,
        ),
    ]);

    spark_spec.insert_lexer_matchers(
        vec![
            Matcher::regex(
                "named_placeholder",
                r"\$(?:\{[\p{L}\p{N}_]+\}|[\p{L}\p{N}_]+)",
                TokenKind::Placeholder,
            )
            .key(spark_key),
        ],
        "indexed_placeholder",
    );

    spark_spec.config(|this| this.set_token_override(window_override))
}

fn spark_key(raw: &str) -> smol_str::SmolStr {
    let key = &raw[1..];
    let key = key.strip_prefix('{').unwrap_or(key);
    let key = key.strip_suffix('}').unwrap_or(key);
    key.into()
}

/// `WINDOW` directly before `(` is the analytic function, not the clause.
fn window_override(token: &Token, next_token: Option<&Token>) -> Option<Token> {
    if token.kind == TokenKind::ReservedTopLevel
        && token.raw_eq_ignore_case("WINDOW")
        && next_token.is_some_and(|next| next.raw() == "(")
    {
        return Some(Token::new(
            TokenKind::Reserved,
            token.raw(),
            token.whitespace_before(),
            token.offset(),
        ));
    }
    None
}
