use crate::params::Params;

pub const DEFAULT_INDENT: &str = "  ";
pub const DEFAULT_LINE_WIDTH: usize = 50;

/// When the items of a top-level clause move onto their own lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewlineMode {
    /// One item per line.
    #[default]
    Always,
    /// Items stay on the keyword's line.
    Never,
    /// Break once the clause would exceed the configured line width.
    LineWidth,
    /// Break once the clause holds more than this many items.
    ItemCount(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParenOptions {
    pub open_paren_newline: bool,
    pub close_paren_newline: bool,
}

impl Default for ParenOptions {
    fn default() -> Self {
        Self {
            open_paren_newline: true,
            close_paren_newline: true,
        }
    }
}

/// Engine-level rendering options. The user-facing configuration layer
/// validates and lowers into this.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOptions {
    pub indent: String,
    pub uppercase: bool,
    pub newline: NewlineMode,
    pub break_before_boolean_operator: bool,
    pub paren_options: ParenOptions,
    pub line_width: usize,
    pub lines_between_queries: usize,
    pub dense_operators: bool,
    pub semicolon_newline: bool,
    pub params: Params,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            uppercase: true,
            newline: NewlineMode::default(),
            break_before_boolean_operator: true,
            paren_options: ParenOptions::default(),
            line_width: DEFAULT_LINE_WIDTH,
            lines_between_queries: 1,
            dense_operators: false,
            semicolon_newline: false,
            params: Params::None,
        }
    }
}
