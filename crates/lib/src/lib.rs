//! A multi-dialect SQL pretty-printer: whitespace-normalized, indented,
//! dialect-aware rendering that preserves every token of the input.
//!
//! ```
//! use sqlpretty_lib::{FormatConfig, format};
//!
//! let formatted = format("SELECT a FROM b", &FormatConfig::default()).unwrap();
//! assert_eq!(formatted, "SELECT\n  a\nFROM\n  b");
//! ```

pub mod config;

pub use config::FormatConfig;
pub use sqlpretty_lib_core::dialects::DialectKind;
pub use sqlpretty_lib_core::errors::{FormatError, ParamError, TokenizeError};

use sqlpretty_lib_core::formatter::Formatter;
use sqlpretty_lib_dialects::kind_to_spec;

/// Format a SQL string. Fails fast on configuration, tokenizer, or
/// parameter errors; malformed SQL otherwise formats best-effort.
pub fn format(query: &str, config: &FormatConfig) -> Result<String, FormatError> {
    let dialect = config.dialect()?;
    let options = config.to_options()?;

    Formatter::new(kind_to_spec(dialect), &options).format(query)
}
