use std::borrow::Cow;

use crate::dialects::DialectSpec;
use crate::errors::FormatError;
use crate::helpers::{equalize_whitespace, truncate_spaces_end};
use crate::indentation::Indentation;
use crate::inline_block::InlineBlock;
use crate::lexer::Tokenizer;
use crate::options::{FormatOptions, NewlineMode};
use crate::params::ParamPool;
use crate::tokens::{Token, TokenKind};

/// Token kinds whose preceding whitespace survives in front of an opening
/// paren even when the source had none.
const PRESERVE_WHITESPACE_FOR: [TokenKind; 3] = [
    TokenKind::OpenParen,
    TokenKind::LineComment,
    TokenKind::Operator,
];

/// The single-pass token-stream state machine. One instance per call; no
/// state survives `format`.
pub struct Formatter<'a> {
    opts: &'a FormatOptions,
    spec: &'a DialectSpec,
    tokens: Vec<Token>,
    index: usize,
    indentation: Indentation,
    inline_block: InlineBlock,
    params: ParamPool<'a>,
    previous_reserved: Option<Token>,
    /// Whether the current clause puts items on their own lines; one entry
    /// per open block scope, so a subquery's decision cannot leak into the
    /// clause that contains it.
    clause_breaks: Vec<bool>,
}

impl<'a> Formatter<'a> {
    pub fn new(spec: &'a DialectSpec, opts: &'a FormatOptions) -> Self {
        Self {
            opts,
            spec,
            tokens: Vec::new(),
            index: 0,
            indentation: Indentation::new(opts.indent.clone()),
            inline_block: InlineBlock::new(opts.line_width),
            params: ParamPool::new(&opts.params),
            previous_reserved: None,
            clause_breaks: vec![true],
        }
    }

    /// Tokenize the query and walk the stream once, dispatching each token on
    /// its kind, then its value.
    pub fn format(mut self, query: &str) -> Result<String, FormatError> {
        self.tokens = Tokenizer::new(self.spec).tokenize(query)?;
        log::debug!(
            "formatting {} tokens as {:?}",
            self.tokens.len(),
            self.spec.name()
        );

        let mut output = String::new();
        for index in 0..self.tokens.len() {
            self.index = index;
            let token = self.apply_override(index);

            match token.kind {
                TokenKind::LineComment => self.format_line_comment(&token, &mut output),
                TokenKind::BlockComment => self.format_block_comment(&token, &mut output),
                TokenKind::ReservedTopLevel => {
                    self.format_top_level_reserved(&token, &mut output);
                    self.previous_reserved = Some(token);
                }
                TokenKind::ReservedTopLevelNoIndent => {
                    self.format_top_level_reserved_no_indent(&token, &mut output);
                    self.previous_reserved = Some(token);
                }
                TokenKind::ReservedNewline => {
                    self.format_newline_reserved(&token, &mut output);
                    self.previous_reserved = Some(token);
                }
                TokenKind::Reserved => {
                    self.format_with_spaces(&token, &mut output);
                    self.previous_reserved = Some(token);
                }
                TokenKind::OpenParen => self.format_open_paren(&token, &mut output),
                TokenKind::CloseParen => self.format_close_paren(&token, &mut output),
                TokenKind::Placeholder => self.format_placeholder(&token, &mut output)?,
                _ => match token.raw() {
                    "," => self.format_comma(&token, &mut output),
                    ":" => self.format_with_space_after(&token, &mut output),
                    "." => self.format_without_spaces(&token, &mut output),
                    ";" => self.format_query_separator(&token, &mut output),
                    "[" => self.format_with_space_before(&token, &mut output),
                    "]" => self.format_with_space_after(&token, &mut output),
                    _ if token.kind == TokenKind::Operator && self.opts.dense_operators => {
                        self.format_without_spaces(&token, &mut output)
                    }
                    _ => self.format_with_spaces(&token, &mut output),
                },
            }
        }

        Ok(output.trim().to_string())
    }

    fn apply_override(&self, index: usize) -> Token {
        let token = self.tokens[index].clone();
        match self.spec.token_override() {
            Some(hook) => hook(&token, self.tokens.get(index + 1)).unwrap_or(token),
            None => token,
        }
    }

    fn format_line_comment(&mut self, token: &Token, output: &mut String) {
        output.push_str(&self.show(token));
        self.add_newline(output);
    }

    fn format_block_comment(&mut self, token: &Token, output: &mut String) {
        self.add_newline(output);
        output.push_str(&self.indent_comment(token.raw()));
        self.add_newline(output);
    }

    /// Re-anchor the comment's inner lines to the current indent, one space
    /// past the `/*`.
    fn indent_comment(&self, comment: &str) -> String {
        let indent = self.indentation.get_indent();
        let mut result = String::with_capacity(comment.len());
        let mut lines = comment.split('\n');

        if let Some(first) = lines.next() {
            result.push_str(first);
        }
        for line in lines {
            result.push('\n');
            result.push_str(&indent);
            result.push(' ');
            result.push_str(line.trim_start_matches([' ', '\t']));
        }

        result
    }

    fn format_top_level_reserved(&mut self, token: &Token, output: &mut String) {
        self.indentation.decrease_top_level();
        self.add_newline(output);
        self.indentation.increase_top_level();
        output.push_str(&equalize_whitespace(&self.show(token)));
        let breaks = self.clause_breaks_at(self.index);
        if let Some(current) = self.clause_breaks.last_mut() {
            *current = breaks;
        }
        if breaks {
            self.add_newline(output);
        } else {
            output.push(' ');
        }
    }

    fn format_top_level_reserved_no_indent(&mut self, token: &Token, output: &mut String) {
        self.indentation.decrease_top_level();
        self.add_newline(output);
        output.push_str(&equalize_whitespace(&self.show(token)));
        self.add_newline(output);
    }

    fn format_newline_reserved(&mut self, token: &Token, output: &mut String) {
        if self.is_between_and(token) {
            // BETWEEN x AND y stays on one line
            return self.format_with_spaces(token, output);
        }

        if !self.opts.break_before_boolean_operator && is_boolean_operator(token) {
            truncate_spaces_end(output);
            output.push(' ');
            output.push_str(&equalize_whitespace(&self.show(token)));
            self.add_newline(output);
            return;
        }

        self.add_newline(output);
        output.push_str(&equalize_whitespace(&self.show(token)));
        output.push(' ');
    }

    fn is_between_and(&self, token: &Token) -> bool {
        token.raw_eq_ignore_case("AND")
            && self
                .token_behind(2)
                .is_some_and(|behind| behind.raw_eq_ignore_case("BETWEEN"))
    }

    fn format_open_paren(&mut self, token: &Token, output: &mut String) {
        let preserve = self
            .token_behind(1)
            .is_some_and(|behind| PRESERVE_WHITESPACE_FOR.contains(&behind.kind));
        if token.whitespace_before().is_empty() && !preserve {
            truncate_spaces_end(output);
        }
        output.push_str(&self.show(token));

        self.inline_block.begin_if_possible(&self.tokens, self.index);
        if !self.inline_block.is_active() {
            self.indentation.increase_block_level();
            self.clause_breaks.push(true);
            if self.opts.paren_options.open_paren_newline {
                self.add_newline(output);
            }
        }
    }

    fn format_close_paren(&mut self, token: &Token, output: &mut String) {
        if self.inline_block.is_active() {
            self.inline_block.end();
            self.format_with_space_after(token, output);
        } else {
            self.indentation.decrease_block_level();
            if self.clause_breaks.len() > 1 {
                self.clause_breaks.pop();
            }
            if self.opts.paren_options.close_paren_newline {
                self.add_newline(output);
            }
            self.format_with_spaces(token, output);
        }
    }

    fn format_placeholder(&mut self, token: &Token, output: &mut String) -> Result<(), FormatError> {
        let value = self.params.get(token)?;
        output.push_str(&value);
        output.push(' ');
        Ok(())
    }

    fn format_comma(&mut self, token: &Token, output: &mut String) {
        truncate_spaces_end(output);
        output.push_str(&self.show(token));
        output.push(' ');

        if self.inline_block.is_active() {
            return;
        }
        if self
            .previous_reserved
            .as_ref()
            .is_some_and(|reserved| reserved.raw_eq_ignore_case("LIMIT"))
        {
            // LIMIT 10, 20 keeps its offset on the same line
            return;
        }
        if !self.current_clause_breaks() {
            return;
        }
        self.add_newline(output);
    }

    fn current_clause_breaks(&self) -> bool {
        self.clause_breaks.last().copied().unwrap_or(true)
    }

    fn format_query_separator(&mut self, token: &Token, output: &mut String) {
        self.indentation.reset_indentation();
        self.clause_breaks.clear();
        self.clause_breaks.push(true);
        truncate_spaces_end(output);
        if self.opts.semicolon_newline {
            self.add_newline(output);
        }
        output.push_str(&self.show(token));
        for _ in 0..self.opts.lines_between_queries {
            output.push('\n');
        }
    }

    fn format_with_spaces(&mut self, token: &Token, output: &mut String) {
        output.push_str(&self.show(token));
        output.push(' ');
    }

    fn format_with_space_before(&mut self, token: &Token, output: &mut String) {
        output.push_str(&self.show(token));
    }

    fn format_with_space_after(&mut self, token: &Token, output: &mut String) {
        truncate_spaces_end(output);
        output.push_str(&self.show(token));
        output.push(' ');
    }

    fn format_without_spaces(&mut self, token: &Token, output: &mut String) {
        truncate_spaces_end(output);
        output.push_str(&self.show(token));
    }

    /// Reserved words and paren words are re-cased on emission; everything
    /// else is emitted verbatim.
    fn show<'t>(&self, token: &'t Token) -> Cow<'t, str> {
        let recase = self.opts.uppercase
            && (token.kind.is_reserved()
                || matches!(token.kind, TokenKind::OpenParen | TokenKind::CloseParen));
        if recase {
            Cow::Owned(token.raw().to_uppercase())
        } else {
            Cow::Borrowed(token.raw())
        }
    }

    /// Trim trailing spaces, break the line unless already broken, indent.
    /// Idempotent.
    fn add_newline(&self, output: &mut String) {
        truncate_spaces_end(output);
        if !output.ends_with('\n') {
            output.push('\n');
        }
        output.push_str(&self.indentation.get_indent());
    }

    fn token_behind(&self, n: usize) -> Option<&Token> {
        self.index.checked_sub(n).and_then(|i| self.tokens.get(i))
    }

    /// Decide whether the clause opened by the top-level keyword at `index`
    /// puts its items on their own lines, per the configured newline mode.
    fn clause_breaks_at(&self, index: usize) -> bool {
        let mode = self.opts.newline;
        if mode == NewlineMode::Always {
            return true;
        }
        if mode == NewlineMode::Never {
            return false;
        }

        let mut depth = 0usize;
        let mut items = 1usize;
        let mut width = 0usize;

        for token in &self.tokens[index + 1..] {
            match token.kind {
                TokenKind::OpenParen => depth += 1,
                // a close paren matched within the scan just ends one item;
                // only an unmatched one closes the enclosing block
                TokenKind::CloseParen if depth > 0 => depth -= 1,
                TokenKind::CloseParen => break,
                TokenKind::ReservedTopLevel | TokenKind::ReservedTopLevelNoIndent
                    if depth == 0 =>
                {
                    break;
                }
                _ => {}
            }
            if depth == 0 {
                if token.raw() == ";" {
                    break;
                }
                if token.raw() == "," {
                    items += 1;
                }
            }
            width += token.raw().len() + 1;
        }

        match mode {
            NewlineMode::ItemCount(count) => items > count,
            NewlineMode::LineWidth => width > self.opts.line_width,
            NewlineMode::Always | NewlineMode::Never => unreachable!(),
        }
    }
}

fn is_boolean_operator(token: &Token) -> bool {
    token.raw_eq_ignore_case("AND")
        || token.raw_eq_ignore_case("OR")
        || token.raw_eq_ignore_case("XOR")
}
