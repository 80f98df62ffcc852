use sqlpretty_lib_core::dialects::{DialectKind, DialectSpec};
use sqlpretty_lib_core::helpers::Config;

/// MariaDB speaks the MySQL surface for everything the formatter cares
/// about, so it shares the MySQL tables wholesale.
pub fn spec() -> DialectSpec {
    super::mysql::raw_spec().config(|this| this.name = DialectKind::Mariadb)
}
