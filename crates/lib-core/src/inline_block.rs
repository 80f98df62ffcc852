use crate::tokens::{Token, TokenKind};

/// Decides at each opening paren whether the group is short enough to stay on
/// one line, and tracks nesting while such a group is open.
#[derive(Debug)]
pub struct InlineBlock {
    level: usize,
    line_width: usize,
}

impl InlineBlock {
    pub fn new(line_width: usize) -> Self {
        Self {
            level: 0,
            line_width,
        }
    }

    /// Called at every opening paren. Activates when the look-ahead finds the
    /// matching close paren within budget; while active, nested parens only
    /// bump the level.
    pub fn begin_if_possible(&mut self, tokens: &[Token], index: usize) {
        if self.level == 0 && self.is_inline_block(tokens, index) {
            self.level = 1;
        } else if self.level > 0 {
            self.level += 1;
        } else {
            self.level = 0;
        }
    }

    pub fn end(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    pub fn is_active(&self) -> bool {
        self.level > 0
    }

    fn is_inline_block(&self, tokens: &[Token], index: usize) -> bool {
        let budget = self.line_width.saturating_sub(2);
        let mut length = 0;
        let mut level = 0usize;

        for token in &tokens[index..] {
            length += token.raw().len();
            if length > budget {
                return false;
            }

            match token.kind {
                TokenKind::OpenParen => level += 1,
                TokenKind::CloseParen => {
                    level = level.saturating_sub(1);
                    if level == 0 {
                        return true;
                    }
                }
                _ => {}
            }

            if Self::is_forbidden(token) {
                return false;
            }
        }

        false
    }

    /// Tokens that force a multi-line rendering no matter how short the
    /// group: clause keywords, newline keywords, comments, and `;`.
    fn is_forbidden(token: &Token) -> bool {
        matches!(
            token.kind,
            TokenKind::ReservedTopLevel
                | TokenKind::ReservedTopLevelNoIndent
                | TokenKind::ReservedNewline
                | TokenKind::LineComment
                | TokenKind::BlockComment
        ) || token.raw() == ";"
    }
}
