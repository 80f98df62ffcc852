use ahash::AHashMap;
use strum_macros::AsRefStr;

use crate::lexer::Matcher;
use crate::tokens::Token;

/// The SQL variants the formatter understands.
#[derive(
    strum_macros::EnumString,
    strum_macros::EnumIter,
    AsRefStr,
    Debug,
    Clone,
    Copy,
    Default,
    Ord,
    PartialOrd,
    Eq,
    PartialEq,
    Hash,
)]
#[strum(serialize_all = "snake_case")]
pub enum DialectKind {
    Bigquery,
    Db2,
    Hive,
    Mariadb,
    Mysql,
    N1ql,
    Plsql,
    Postgresql,
    Redshift,
    Spark,
    #[default]
    Sql,
    Tsql,
}

impl DialectKind {
    /// Returns the configuration name of the dialect.
    pub fn name(&self) -> &'static str {
        match self {
            DialectKind::Bigquery => "bigquery",
            DialectKind::Db2 => "db2",
            DialectKind::Hive => "hive",
            DialectKind::Mariadb => "mariadb",
            DialectKind::Mysql => "mysql",
            DialectKind::N1ql => "n1ql",
            DialectKind::Plsql => "plsql",
            DialectKind::Postgresql => "postgresql",
            DialectKind::Redshift => "redshift",
            DialectKind::Spark => "spark",
            DialectKind::Sql => "sql",
            DialectKind::Tsql => "tsql",
        }
    }
}

/// Reclassifies a token before dispatch, given the token that follows it.
/// Returning `None` keeps the token as lexed.
pub type TokenOverride = fn(token: &Token, next_token: Option<&Token>) -> Option<Token>;

/// Passive per-dialect data: the ordered lexer table plus an optional
/// per-token override hook. Specs carry no formatting logic.
#[derive(Debug, Clone, Default)]
pub struct DialectSpec {
    pub name: DialectKind,
    lexer_matchers: Option<Vec<Matcher>>,
    token_override: Option<TokenOverride>,
}

impl DialectSpec {
    pub fn new(name: DialectKind) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    pub fn name(&self) -> DialectKind {
        self.name
    }

    pub fn lexer_matchers(&self) -> &[Matcher] {
        match &self.lexer_matchers {
            Some(lexer_matchers) => lexer_matchers,
            None => panic!("Lexer table has not been set for dialect {self:?}"),
        }
    }

    pub fn set_lexer_matchers(&mut self, lexer_matchers: Vec<Matcher>) {
        self.lexer_matchers = lexer_matchers.into();
    }

    /// Insert matchers directly before the named one, preserving order.
    pub fn insert_lexer_matchers(&mut self, lexer_patch: Vec<Matcher>, before: &str) {
        let mut buff = Vec::new();
        let mut found = false;

        if self.lexer_matchers.is_none() {
            panic!("Lexer table must be defined before it can be patched!");
        }

        for elem in self.lexer_matchers.take().unwrap() {
            if elem.name() == before {
                found = true;
                for patch in lexer_patch.clone() {
                    buff.push(patch);
                }
                buff.push(elem);
            } else {
                buff.push(elem);
            }
        }

        if !found {
            panic!("Lexer table insert before '{before}' failed because tag never found.");
        }

        self.lexer_matchers = Some(buff);
    }

    /// Replace same-named matchers in place.
    pub fn patch_lexer_matchers(&mut self, lexer_patch: Vec<Matcher>) {
        let mut buff = Vec::with_capacity(self.lexer_matchers.as_ref().map_or(0, Vec::len));
        if self.lexer_matchers.is_none() {
            panic!("Lexer table must be defined before it can be patched!");
        }

        let patch_dict: AHashMap<&'static str, Matcher> = lexer_patch
            .into_iter()
            .map(|elem| (elem.name(), elem))
            .collect();

        for elem in self.lexer_matchers.take().unwrap() {
            if let Some(patch) = patch_dict.get(elem.name()) {
                buff.push(patch.clone());
            } else {
                buff.push(elem);
            }
        }

        self.lexer_matchers = Some(buff);
    }

    /// Drop the named matcher, for dialects without the construct.
    pub fn remove_lexer_matcher(&mut self, name: &str) {
        if self.lexer_matchers.is_none() {
            panic!("Lexer table must be defined before it can be patched!");
        }

        let matchers = self.lexer_matchers.as_mut().unwrap();
        matchers.retain(|elem| elem.name() != name);
    }

    pub fn set_token_override(&mut self, token_override: TokenOverride) {
        self.token_override = Some(token_override);
    }

    pub fn token_override(&self) -> Option<TokenOverride> {
        self.token_override
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::lexer::Matcher;
    use crate::tokens::TokenKind;

    #[test]
    fn dialect_kind_from_str() {
        assert_eq!(DialectKind::from_str("postgresql"), Ok(DialectKind::Postgresql));
        assert_eq!(DialectKind::from_str("sql"), Ok(DialectKind::Sql));
        assert!(DialectKind::from_str("oracle").is_err());
    }

    #[test]
    fn patch_replaces_in_place() {
        let mut spec = DialectSpec::new(DialectKind::Sql);
        spec.set_lexer_matchers(vec![
            Matcher::string("comma", ",", TokenKind::Punctuation),
            Matcher::string("dot", ".", TokenKind::Punctuation),
        ]);

        spec.patch_lexer_matchers(vec![Matcher::string("dot", "!", TokenKind::Operator)]);

        let names: Vec<_> = spec.lexer_matchers().iter().map(Matcher::name).collect();
        assert_eq!(names, vec!["comma", "dot"]);
        assert_eq!(spec.lexer_matchers()[1].token_kind(), TokenKind::Operator);
    }

    #[test]
    fn insert_puts_matchers_before_anchor() {
        let mut spec = DialectSpec::new(DialectKind::Sql);
        spec.set_lexer_matchers(vec![
            Matcher::string("comma", ",", TokenKind::Punctuation),
            Matcher::string("dot", ".", TokenKind::Punctuation),
        ]);

        spec.insert_lexer_matchers(
            vec![Matcher::string("colon", ":", TokenKind::Punctuation)],
            "dot",
        );

        let names: Vec<_> = spec.lexer_matchers().iter().map(Matcher::name).collect();
        assert_eq!(names, vec!["comma", "colon", "dot"]);
    }
}
