use std::sync::LazyLock;

use smol_str::SmolStr;
use sqlpretty_lib_core::dialects::{DialectKind, DialectSpec};

pub mod bigquery;
mod bigquery_keywords;
pub mod db2;
mod db2_keywords;
pub mod hive;
mod hive_keywords;
pub mod mariadb;
pub mod mysql;
mod mysql_keywords;
pub mod n1ql;
mod n1ql_keywords;
pub mod plsql;
mod plsql_keywords;
pub mod postgresql;
mod postgresql_keywords;
pub mod redshift;
mod redshift_keywords;
pub mod spark;
mod spark_keywords;
pub mod sql;
mod sql_keywords;
pub mod tsql;
mod tsql_keywords;

/// Resolve a dialect to its spec. Specs are built once per process and
/// shared by reference, so the keyword alternations compile only on first
/// use of each dialect.
pub fn kind_to_spec(kind: DialectKind) -> &'static DialectSpec {
    static BIGQUERY: LazyLock<DialectSpec> = LazyLock::new(bigquery::spec);
    static DB2: LazyLock<DialectSpec> = LazyLock::new(db2::spec);
    static HIVE: LazyLock<DialectSpec> = LazyLock::new(hive::spec);
    static MARIADB: LazyLock<DialectSpec> = LazyLock::new(mariadb::spec);
    static MYSQL: LazyLock<DialectSpec> = LazyLock::new(mysql::spec);
    static N1QL: LazyLock<DialectSpec> = LazyLock::new(n1ql::spec);
    static PLSQL: LazyLock<DialectSpec> = LazyLock::new(plsql::spec);
    static POSTGRESQL: LazyLock<DialectSpec> = LazyLock::new(postgresql::spec);
    static REDSHIFT: LazyLock<DialectSpec> = LazyLock::new(redshift::spec);
    static SPARK: LazyLock<DialectSpec> = LazyLock::new(spark::spec);
    static SQL: LazyLock<DialectSpec> = LazyLock::new(sql::spec);
    static TSQL: LazyLock<DialectSpec> = LazyLock::new(tsql::spec);

    match kind {
        DialectKind::Bigquery => &BIGQUERY,
        DialectKind::Db2 => &DB2,
        DialectKind::Hive => &HIVE,
        DialectKind::Mariadb => &MARIADB,
        DialectKind::Mysql => &MYSQL,
        DialectKind::N1ql => &N1QL,
        DialectKind::Plsql => &PLSQL,
        DialectKind::Postgresql => &POSTGRESQL,
        DialectKind::Redshift => &REDSHIFT,
        DialectKind::Spark => &SPARK,
        DialectKind::Sql => &SQL,
        DialectKind::Tsql => &TSQL,
    }
}

/// One keyword phrase per line, as the `*_keywords` tables are written.
pub(crate) fn keyword_list(keywords: &'static str) -> Vec<&'static str> {
    keywords
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Key of a sigil-prefixed placeholder: `:name` -> `name`.
pub(crate) fn sigil_key(raw: &str) -> SmolStr {
    raw[1..].into()
}

/// Key of a sigil-prefixed quoted placeholder: `@"name"` -> `name`.
pub(crate) fn quoted_sigil_key(raw: &str) -> SmolStr {
    raw[2..raw.len() - 1].into()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sqlpretty_lib_core::lexer::Tokenizer;
    use sqlpretty_lib_core::tokens::TokenKind;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_dialect_builds_and_tokenizes() {
        for kind in DialectKind::iter() {
            let spec = kind_to_spec(kind);
            assert_eq!(spec.name(), kind);

            let tokens = Tokenizer::new(spec)
                .tokenize("SELECT a, 1 FROM t WHERE x = 'y'")
                .unwrap_or_else(|err| panic!("{kind:?}: {err}"));
            assert_eq!(tokens[0].kind, TokenKind::ReservedTopLevel, "{kind:?}");
        }
    }

    #[test]
    fn every_dialect_survives_arbitrary_punctuation() {
        for kind in DialectKind::iter() {
            let spec = kind_to_spec(kind);
            Tokenizer::new(spec)
                .tokenize("§ ¶ ° \u{1F600} {} ~!^")
                .unwrap_or_else(|err| panic!("{kind:?}: {err}"));
        }
    }

    #[test]
    fn sigil_keys() {
        assert_eq!(sigil_key(":name"), "name");
        assert_eq!(quoted_sigil_key("@\"first name\""), "first name");
    }
}
