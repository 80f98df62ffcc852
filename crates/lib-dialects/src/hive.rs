use sqlpretty_lib_core::dialects::{DialectKind, DialectSpec};
use sqlpretty_lib_core::helpers::Config;
use sqlpretty_lib_core::lexer::Matcher;
use sqlpretty_lib_core::tokens::TokenKind;

use super::hive_keywords::{
    HIVE_RESERVED_KEYWORDS, HIVE_RESERVED_NEWLINE_KEYWORDS, HIVE_RESERVED_TOP_LEVEL_KEYWORDS,
};
use super::keyword_list;

pub fn spec() -> DialectSpec {
    raw_spec().config(|this| this.name = DialectKind::Hive)
}

/// HiveQL: `?` is the only placeholder style and `<=>` / `==` join the
/// operators. Spark builds on this surface.
pub(crate) fn raw_spec() -> DialectSpec {
    let mut hive_spec = super::sql::spec();

    hive_spec.patch_lexer_matchers(vec![
        Matcher::regex("line_comment", r"--[^\n\r]*", TokenKind::LineComment),
        Matcher::operators(
            "operator",
            &[
                "<=>", "==", "||", "<>", "<=", ">=", "!=", "=", "<", ">", "+", "-", "*", "/", "%",
                "&", "|", "^", "~",
            ],
            TokenKind::Operator,
        ),
        Matcher::keywords(
            "reserved_top_level",
            &keyword_list(HIVE_RESERVED_TOP_LEVEL_KEYWORDS),
            TokenKind::ReservedTopLevel,
        ),
        Matcher::keywords(
            "reserved_newline",
            &keyword_list(HIVE_RESERVED_NEWLINE_KEYWORDS),
            TokenKind::ReservedNewline,
        ),
        Matcher::keywords(
            "reserved",
            &keyword_list(HIVE_RESERVED_KEYWORDS),
            TokenKind::Reserved,
        ),
    ]);

    hive_spec.remove_lexer_matcher("quoted_placeholder");
    hive_spec.remove_lexer_matcher("named_placeholder");
    hive_spec.remove_lexer_matcher("national_string");

    hive_spec
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sqlpretty_lib_core::lexer::Tokenizer;
    use sqlpretty_lib_core::tokens::TokenKind;

    use super::*;

    #[test]
    fn lateral_view_breaks_the_line() {
        let spec = spec();
        let tokens = Tokenizer::new(&spec)
            .tokenize("SELECT a FROM t LATERAL VIEW explode(x) e")
            .unwrap();

        assert_eq!(tokens[4].kind, TokenKind::ReservedNewline);
        assert_eq!(tokens[4].raw(), "LATERAL VIEW");
    }

    #[test]
    fn null_safe_equality_is_one_token() {
        let spec = spec();
        let tokens = Tokenizer::new(&spec).tokenize("a <=> b").unwrap();

        assert_eq!(tokens[1].kind, TokenKind::Operator);
        assert_eq!(tokens[1].raw(), "<=>");
    }
}
