use sqlpretty_lib_core::dialects::{DialectKind, DialectSpec};
use sqlpretty_lib_core::helpers::Config;
use sqlpretty_lib_core::lexer::Matcher;
use sqlpretty_lib_core::tokens::TokenKind;

use super::n1ql_keywords::{
    N1QL_RESERVED_KEYWORDS, N1QL_RESERVED_NEWLINE_KEYWORDS, N1QL_RESERVED_TOP_LEVEL_KEYWORDS,
};
use super::{keyword_list, sigil_key};

/// Couchbase N1QL: `$`-prefixed named parameters and the NEST/UNNEST
/// clause keywords.
pub fn spec() -> DialectSpec {
    let mut n1ql_spec = super::sql::spec();
    n1ql_spec.name = DialectKind::N1ql;

    n1ql_spec.patch_lexer_matchers(vec![
        Matcher::regex(
            "named_placeholder",
            r"\$[\p{L}\p{N}_]+",
            TokenKind::Placeholder,
        )
        .key(sigil_key),
        Matcher::operators(
            "operator",
            &[
                "==", "||", "<>", "<=", ">=", "!=", "=", "<", ">", "+", "-", "*", "/", "%",
            ],
            TokenKind::Operator,
        ),
        Matcher::keywords(
            "reserved_top_level",
            &keyword_list(N1QL_RESERVED_TOP_LEVEL_KEYWORDS),
            TokenKind::ReservedTopLevel,
        ),
        Matcher::keywords(
            "reserved_newline",
            &keyword_list(N1QL_RESERVED_NEWLINE_KEYWORDS),
            TokenKind::ReservedNewline,
        ),
        Matcher::keywords(
            "reserved",
            &keyword_list(N1QL_RESERVED_KEYWORDS),
            TokenKind::Reserved,
        ),
    ]);

    n1ql_spec.config(|this| {
        this.remove_lexer_matcher("quoted_placeholder");
        this.remove_lexer_matcher("national_string");
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sqlpretty_lib_core::lexer::Tokenizer;
    use sqlpretty_lib_core::tokens::TokenKind;

    use super::*;

    #[test]
    fn dollar_parameters_carry_keys() {
        let spec = spec();
        let tokens = Tokenizer::new(&spec).tokenize("SELECT $name").unwrap();

        assert_eq!(tokens[1].kind, TokenKind::Placeholder);
        assert_eq!(tokens[1].key(), Some("name"));
    }

    #[test]
    fn unnest_is_top_level() {
        let spec = spec();
        let tokens = Tokenizer::new(&spec)
            .tokenize("SELECT a FROM t UNNEST t.tags")
            .unwrap();

        assert_eq!(tokens[4].kind, TokenKind::ReservedTopLevel);
    }
}
