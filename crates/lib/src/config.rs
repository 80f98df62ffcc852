use std::str::FromStr;

use serde::Deserialize;
use sqlpretty_lib_core::dialects::DialectKind;
use sqlpretty_lib_core::errors::FormatError;
use sqlpretty_lib_core::helpers::IndexMap;
use sqlpretty_lib_core::options::{DEFAULT_LINE_WIDTH, FormatOptions, NewlineMode, ParenOptions};
use sqlpretty_lib_core::params::Params;

/// User-facing configuration. Every field is optional in the serialized
/// form; missing fields take the documented defaults, and `parenOptions`
/// merges one level deep.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FormatConfig {
    /// Dialect name; unknown values fail with `UnsupportedDialect`.
    pub language: String,
    /// The indent unit.
    pub indent: String,
    /// Re-case reserved words and paren words on emission.
    pub uppercase: bool,
    /// `tenSpaceLeft`/`tenSpaceRight` force a ten-space indent unit. The
    /// alignment itself is accepted but not rendered.
    pub keyword_position: KeywordPosition,
    /// `always`, `never`, `lineWidth`, or an item-count threshold.
    pub newline: NewlineConfig,
    pub break_before_boolean_operator: bool,
    /// Accepted but not rendered.
    pub alias_as: AliasAs,
    /// Accepted but not rendered.
    pub tabulate_alias: bool,
    /// `before` and `tabular` are accepted but not rendered.
    pub comma_position: CommaPosition,
    pub paren_options: ParenConfig,
    /// Non-positive values fall back to the default with a warning.
    pub line_width: i64,
    /// Number of `\n` characters emitted after each `;`.
    pub lines_between_queries: usize,
    pub dense_operators: bool,
    pub semicolon_newline: bool,
    /// Positional list or named map of placeholder substitutions.
    pub params: Option<ParamsConfig>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            language: "sql".to_string(),
            indent: "  ".to_string(),
            uppercase: true,
            keyword_position: KeywordPosition::default(),
            newline: NewlineConfig::default(),
            break_before_boolean_operator: true,
            alias_as: AliasAs::default(),
            tabulate_alias: false,
            comma_position: CommaPosition::default(),
            paren_options: ParenConfig::default(),
            line_width: DEFAULT_LINE_WIDTH as i64,
            lines_between_queries: 1,
            dense_operators: false,
            semicolon_newline: false,
            params: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeywordPosition {
    #[default]
    Standard,
    TenSpaceLeft,
    TenSpaceRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AliasAs {
    Always,
    Never,
    #[default]
    Select,
    Explicit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommaPosition {
    #[default]
    After,
    Before,
    Tabular,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParenConfig {
    pub open_paren_newline: bool,
    pub close_paren_newline: bool,
}

impl Default for ParenConfig {
    fn default() -> Self {
        Self {
            open_paren_newline: true,
            close_paren_newline: true,
        }
    }
}

/// `newline` accepts either a mode keyword or an item-count number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NewlineConfig {
    Count(i64),
    Mode(NewlineKeyword),
}

impl Default for NewlineConfig {
    fn default() -> Self {
        NewlineConfig::Mode(NewlineKeyword::Always)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NewlineKeyword {
    Always,
    Never,
    LineWidth,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParamsConfig {
    Positional(Vec<String>),
    Named(IndexMap<String, String>),
}

impl FormatConfig {
    pub fn dialect(&self) -> Result<DialectKind, FormatError> {
        DialectKind::from_str(&self.language)
            .map_err(|_| FormatError::UnsupportedDialect(self.language.clone()))
    }

    /// Validate and lower into the engine-level options.
    pub fn to_options(&self) -> Result<FormatOptions, FormatError> {
        let newline = match &self.newline {
            NewlineConfig::Mode(NewlineKeyword::Always) => NewlineMode::Always,
            NewlineConfig::Mode(NewlineKeyword::Never) => NewlineMode::Never,
            NewlineConfig::Mode(NewlineKeyword::LineWidth) => NewlineMode::LineWidth,
            NewlineConfig::Count(count) if *count < 0 => {
                return Err(FormatError::InvalidNewline(*count));
            }
            NewlineConfig::Count(0) => NewlineMode::Always,
            NewlineConfig::Count(count) => NewlineMode::ItemCount(*count as usize),
        };

        let line_width = if self.line_width <= 0 {
            log::warn!(
                "lineWidth must be positive, got {}; using the default of {DEFAULT_LINE_WIDTH}",
                self.line_width
            );
            DEFAULT_LINE_WIDTH
        } else {
            self.line_width as usize
        };

        let indent = match self.keyword_position {
            KeywordPosition::Standard => self.indent.clone(),
            KeywordPosition::TenSpaceLeft | KeywordPosition::TenSpaceRight => " ".repeat(10),
        };

        let params = match &self.params {
            None => Params::None,
            Some(ParamsConfig::Positional(values)) => Params::Positional(values.clone()),
            Some(ParamsConfig::Named(values)) => Params::Named(values.clone()),
        };

        Ok(FormatOptions {
            indent,
            uppercase: self.uppercase,
            newline,
            break_before_boolean_operator: self.break_before_boolean_operator,
            paren_options: ParenOptions {
                open_paren_newline: self.paren_options.open_paren_newline,
                close_paren_newline: self.paren_options.close_paren_newline,
            },
            line_width,
            lines_between_queries: self.lines_between_queries,
            dense_operators: self.dense_operators,
            semicolon_newline: self.semicolon_newline,
            params,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let config = FormatConfig::default();

        assert_eq!(config.language, "sql");
        assert_eq!(config.indent, "  ");
        assert!(config.uppercase);
        assert_eq!(config.line_width, 50);
        assert_eq!(config.lines_between_queries, 1);
        assert!(config.paren_options.open_paren_newline);
        assert!(config.paren_options.close_paren_newline);

        let opts = config.to_options().unwrap();
        assert_eq!(opts, FormatOptions::default());
    }

    #[test]
    fn unknown_language_is_rejected() {
        let mut config = FormatConfig::default();
        config.language = "oracle".to_string();

        assert_eq!(
            config.dialect(),
            Err(FormatError::UnsupportedDialect("oracle".to_string()))
        );
    }

    #[test]
    fn negative_newline_is_rejected() {
        let mut config = FormatConfig::default();
        config.newline = NewlineConfig::Count(-1);

        assert_eq!(config.to_options(), Err(FormatError::InvalidNewline(-1)));
    }

    #[test]
    fn zero_newline_normalizes_to_always() {
        let mut config = FormatConfig::default();
        config.newline = NewlineConfig::Count(0);

        assert_eq!(config.to_options().unwrap().newline, NewlineMode::Always);
    }

    #[test]
    fn non_positive_line_width_falls_back_to_default() {
        let mut config = FormatConfig::default();
        config.line_width = 0;

        assert_eq!(config.to_options().unwrap().line_width, DEFAULT_LINE_WIDTH);
    }

    #[test]
    fn ten_space_keyword_position_forces_the_indent() {
        let mut config = FormatConfig::default();
        config.keyword_position = KeywordPosition::TenSpaceRight;

        assert_eq!(config.to_options().unwrap().indent, " ".repeat(10));
    }

    #[test]
    fn deserializes_from_partial_json() {
        let config: FormatConfig = serde_json::from_str(
            r#"{
                "language": "postgresql",
                "newline": 3,
                "parenOptions": {"closeParenNewline": false},
                "params": {"name": "'alice'"}
            }"#,
        )
        .unwrap();

        assert_eq!(config.language, "postgresql");
        assert_eq!(config.newline, NewlineConfig::Count(3));
        assert!(config.paren_options.open_paren_newline);
        assert!(!config.paren_options.close_paren_newline);
        assert_eq!(config.indent, "  ");

        let opts = config.to_options().unwrap();
        assert_eq!(opts.newline, NewlineMode::ItemCount(3));
        match opts.params {
            Params::Named(values) => assert_eq!(values.get("name").unwrap(), "'alice'"),
            other => panic!("expected named params, got {other:?}"),
        }
    }

    #[test]
    fn deserializes_positional_params_and_modes() {
        let config: FormatConfig = serde_json::from_str(
            r#"{"newline": "lineWidth", "params": ["1", "2"]}"#,
        )
        .unwrap();

        assert_eq!(config.newline, NewlineConfig::Mode(NewlineKeyword::LineWidth));
        assert_eq!(
            config.params,
            Some(ParamsConfig::Positional(vec!["1".into(), "2".into()]))
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_str::<FormatConfig>(r#"{"identCase": "upper"}"#);
        assert!(result.is_err());
    }
}
