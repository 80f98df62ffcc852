use sqlpretty_lib_core::dialects::{DialectKind, DialectSpec};
use sqlpretty_lib_core::helpers::Config;
use sqlpretty_lib_core::lexer::Matcher;
use sqlpretty_lib_core::tokens::TokenKind;

use super::redshift_keywords::{
    REDSHIFT_RESERVED_KEYWORDS, REDSHIFT_RESERVED_TOP_LEVEL_KEYWORDS,
};
use super::{keyword_list, sigil_key};

/// Redshift starts from the PostgreSQL surface and widens the placeholder
/// sigils to `@`, `#` and `$` alongside the Postgres keyword diffs.
pub fn spec() -> DialectSpec {
    let mut redshift_spec = super::postgresql::raw_spec();
    redshift_spec.name = DialectKind::Redshift;

    redshift_spec.patch_lexer_matchers(vec![
        Matcher::regex(
            "named_placeholder",
            r"[@#$][\p{L}\p{N}_$]+",
            TokenKind::Placeholder,
        )
        .key(sigil_key),
        Matcher::keywords(
            "reserved_top_level",
            &keyword_list(REDSHIFT_RESERVED_TOP_LEVEL_KEYWORDS),
            TokenKind::ReservedTopLevel,
        ),
        Matcher::keywords(
            "reserved",
            &keyword_list(REDSHIFT_RESERVED_KEYWORDS),
            TokenKind::Reserved,
        ),
    ]);

    redshift_spec.config(|this| this.remove_lexer_matcher("quoted_placeholder"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sqlpretty_lib_core::lexer::Tokenizer;
    use sqlpretty_lib_core::tokens::TokenKind;

    use super::*;

    #[test]
    fn sigil_placeholders_carry_keys() {
        let spec = spec();
        let tokens = Tokenizer::new(&spec)
            .tokenize("SELECT @name, #temp, $var")
            .unwrap();

        assert_eq!(tokens[1].kind, TokenKind::Placeholder);
        assert_eq!(tokens[1].key(), Some("name"));
        assert_eq!(tokens[3].key(), Some("temp"));
        assert_eq!(tokens[5].key(), Some("var"));
    }

    #[test]
    fn numeric_dollar_placeholder_stays_indexed() {
        let spec = spec();
        let tokens = Tokenizer::new(&spec).tokenize("SELECT $2").unwrap();

        assert_eq!(tokens[1].kind, TokenKind::Placeholder);
        assert_eq!(tokens[1].key(), Some("2"));
    }

    #[test]
    fn distkey_is_reserved() {
        let spec = spec();
        let tokens = Tokenizer::new(&spec).tokenize("DISTKEY (id)").unwrap();

        assert_eq!(tokens[0].kind, TokenKind::Reserved);
    }
}
