use sqlpretty_lib_core::dialects::{DialectKind, DialectSpec};
use sqlpretty_lib_core::helpers::Config;
use sqlpretty_lib_core::lexer::Matcher;
use sqlpretty_lib_core::tokens::TokenKind;

use super::db2_keywords::{DB2_RESERVED_KEYWORDS, DB2_RESERVED_TOP_LEVEL_KEYWORDS};
use super::keyword_list;

/// Db2: `--` comments only and the `**` / `¬=` style operator set.
pub fn spec() -> DialectSpec {
    let mut db2_spec = super::sql::spec();
    db2_spec.name = DialectKind::Db2;

    db2_spec.patch_lexer_matchers(vec![
        Matcher::regex("line_comment", r"--[^\n\r]*", TokenKind::LineComment),
        Matcher::operators(
            "operator",
            &[
                "**", "!=", "!>", "!<", "||", "<>", "<=", ">=", "¬=", "¬>", "¬<", "=", "<", ">",
                "+", "-", "*", "/", "%", "&", "|", "^",
            ],
            TokenKind::Operator,
        ),
        Matcher::keywords(
            "reserved_top_level",
            &keyword_list(DB2_RESERVED_TOP_LEVEL_KEYWORDS),
            TokenKind::ReservedTopLevel,
        ),
        Matcher::keywords(
            "reserved",
            &keyword_list(DB2_RESERVED_KEYWORDS),
            TokenKind::Reserved,
        ),
    ]);

    db2_spec.config(|this| this.remove_lexer_matcher("back_quote"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sqlpretty_lib_core::lexer::Tokenizer;
    use sqlpretty_lib_core::tokens::TokenKind;

    use super::*;

    #[test]
    fn fetch_first_is_top_level() {
        let spec = spec();
        let tokens = Tokenizer::new(&spec)
            .tokenize("SELECT a FROM t FETCH FIRST 10 ROWS ONLY")
            .unwrap();

        assert_eq!(tokens[4].kind, TokenKind::ReservedTopLevel);
        assert_eq!(tokens[4].raw(), "FETCH FIRST");
    }

    #[test]
    fn hash_is_not_a_comment() {
        let spec = spec();
        let tokens = Tokenizer::new(&spec).tokenize("#tag").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Punctuation);
    }
}
