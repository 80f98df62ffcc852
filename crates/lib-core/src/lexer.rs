use std::cmp::Reverse;
use std::str::Chars;

use fancy_regex::Regex;
use itertools::Itertools;
use smol_str::SmolStr;

use crate::dialects::DialectSpec;
use crate::errors::TokenizeError;
use crate::tokens::{Token, TokenKind};

/// Extracts the substitution key from a placeholder lexeme.
pub type KeyExtractor = fn(&str) -> SmolStr;

/// One entry in a dialect's ordered lexer table.
#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: Pattern,
    key_extractor: Option<KeyExtractor>,
}

impl Matcher {
    pub const fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            key_extractor: None,
        }
    }

    pub const fn string(
        name: &'static str,
        pattern: &'static str,
        token_kind: TokenKind,
    ) -> Self {
        Self::new(Pattern::string(name, pattern, token_kind))
    }

    #[track_caller]
    pub fn regex(name: &'static str, pattern: &str, token_kind: TokenKind) -> Self {
        Self::new(Pattern::regex(name, pattern, token_kind))
    }

    pub fn native(name: &'static str, f: fn(&mut Cursor) -> bool, token_kind: TokenKind) -> Self {
        Self::new(Pattern::native(name, f, token_kind))
    }

    /// Whole-word, case-insensitive, longest-match-first keyword alternation.
    #[track_caller]
    pub fn keywords(name: &'static str, words: &[&str], token_kind: TokenKind) -> Self {
        Self::new(Pattern::keywords(name, words, token_kind))
    }

    /// Literal operator alternation, longest first.
    #[track_caller]
    pub fn operators(name: &'static str, operators: &[&str], token_kind: TokenKind) -> Self {
        Self::new(Pattern::operators(name, operators, token_kind))
    }

    pub fn key(mut self, key_extractor: KeyExtractor) -> Self {
        self.key_extractor = Some(key_extractor);
        self
    }

    pub fn name(&self) -> &'static str {
        self.pattern.name
    }

    pub fn token_kind(&self) -> TokenKind {
        self.pattern.token_kind
    }

    /// Keyword-table matchers are skipped right after a `.`, so members of a
    /// qualified name (`t.from`) stay plain words.
    pub fn is_keyword(&self) -> bool {
        matches!(self.pattern.kind, SearchPatternKind::Keywords(_))
    }

    pub fn matches<'a>(&self, forward_string: &'a str) -> Option<&'a str> {
        self.pattern.matches(forward_string)
    }

    pub fn extract_key(&self, text: &str) -> Option<SmolStr> {
        self.key_extractor.map(|f| f(text))
    }
}

#[derive(Debug, Clone)]
pub struct Pattern {
    name: &'static str,
    token_kind: TokenKind,
    kind: SearchPatternKind,
}

#[derive(Debug, Clone)]
pub enum SearchPatternKind {
    String(&'static str),
    Regex(Regex),
    Keywords(Regex),
    Native(fn(&mut Cursor) -> bool),
}

impl Pattern {
    pub const fn string(
        name: &'static str,
        template: &'static str,
        token_kind: TokenKind,
    ) -> Self {
        Self {
            name,
            token_kind,
            kind: SearchPatternKind::String(template),
        }
    }

    #[track_caller]
    pub fn regex(name: &'static str, regex: &str, token_kind: TokenKind) -> Self {
        let regex = format!("^(?:{regex})");
        Self {
            name,
            token_kind,
            kind: SearchPatternKind::Regex(Regex::new(&regex).unwrap()),
        }
    }

    pub fn native(name: &'static str, f: fn(&mut Cursor) -> bool, token_kind: TokenKind) -> Self {
        Self {
            name,
            token_kind,
            kind: SearchPatternKind::Native(f),
        }
    }

    #[track_caller]
    pub fn keywords(name: &'static str, words: &[&str], token_kind: TokenKind) -> Self {
        let alternation = words
            .iter()
            .sorted_by_key(|word| Reverse(word.len()))
            .map(|word| keyword_term(word))
            .join("|");
        let regex = format!("(?i)^(?:{alternation})");
        Self {
            name,
            token_kind,
            kind: SearchPatternKind::Keywords(Regex::new(&regex).unwrap()),
        }
    }

    #[track_caller]
    pub fn operators(name: &'static str, operators: &[&str], token_kind: TokenKind) -> Self {
        let alternation = operators
            .iter()
            .sorted_by_key(|op| Reverse(op.len()))
            .map(|op| fancy_regex::escape(op))
            .join("|");
        let regex = format!("^(?:{alternation})");
        Self {
            name,
            token_kind,
            kind: SearchPatternKind::Regex(Regex::new(&regex).unwrap()),
        }
    }

    fn matches<'a>(&self, forward_string: &'a str) -> Option<&'a str> {
        match &self.kind {
            SearchPatternKind::String(template) => forward_string
                .starts_with(template)
                .then_some(&forward_string[..template.len()]),
            SearchPatternKind::Regex(regex) | SearchPatternKind::Keywords(regex) => {
                if let Ok(Some(matched)) = regex.find(forward_string)
                    && matched.start() == 0
                {
                    return Some(matched.as_str());
                }
                None
            }
            SearchPatternKind::Native(f) => {
                let mut cursor = Cursor::new(forward_string);
                f(&mut cursor).then(|| cursor.lexed())
            }
        }
    }
}

/// A keyword phrase as an anchored alternation term: internal whitespace
/// matches any run, and phrases ending in a word character require a word
/// boundary so `SELECT` never matches inside `SELECTED`.
fn keyword_term(word: &str) -> String {
    let mut term = word
        .split_whitespace()
        .map(fancy_regex::escape)
        .join(r"\s+");
    let boundary = word
        .chars()
        .next_back()
        .is_some_and(|c| c.is_alphanumeric() || c == '_');
    if boundary {
        term.push_str(r"\b");
    }
    term
}

pub struct Cursor<'text> {
    text: &'text str,
    chars: Chars<'text>,
}

impl<'text> Cursor<'text> {
    pub const EOF: char = '\0';

    pub fn new(text: &'text str) -> Self {
        Self {
            text,
            chars: text.chars(),
        }
    }

    pub fn peek(&self) -> char {
        self.chars.clone().next().unwrap_or(Self::EOF)
    }

    pub fn shift(&mut self) -> char {
        self.chars.next().unwrap_or(Self::EOF)
    }

    pub fn shift_while(&mut self, f: impl Fn(char) -> bool + Copy) {
        while self.peek() != Self::EOF && f(self.peek()) {
            self.shift();
        }
    }

    fn lexed(&self) -> &'text str {
        let len = self.text.len() - self.chars.as_str().len();
        &self.text[..len]
    }
}

/// Splits raw SQL into classified tokens by trying a dialect's matchers in
/// order at each position. First match wins; leading whitespace is absorbed
/// into the following token.
#[derive(Debug)]
pub struct Tokenizer<'spec> {
    matchers: &'spec [Matcher],
}

impl<'spec> Tokenizer<'spec> {
    pub fn new(spec: &'spec DialectSpec) -> Self {
        Self {
            matchers: spec.lexer_matchers(),
        }
    }

    pub fn from_matchers(matchers: &'spec [Matcher]) -> Self {
        Self { matchers }
    }

    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>, TokenizeError> {
        let mut tokens: Vec<Token> = Vec::new();
        let mut rest = input;
        let mut offset = 0;

        while !rest.is_empty() {
            let ws_len = rest.len() - rest.trim_start().len();
            let whitespace = &rest[..ws_len];
            rest = &rest[ws_len..];
            offset += ws_len;

            if rest.is_empty() {
                break;
            }

            let after_dot = tokens.last().is_some_and(|token| token.raw() == ".");
            let matched = self.matchers.iter().find_map(|matcher| {
                if after_dot && matcher.is_keyword() {
                    return None;
                }
                matcher.matches(rest).map(|text| (matcher, text))
            });

            let Some((matcher, text)) = matched else {
                return Err(TokenizeError { offset });
            };
            if text.is_empty() {
                return Err(TokenizeError { offset });
            }

            let key = matcher.extract_key(text);
            tokens.push(Token::new(matcher.token_kind(), text, whitespace, offset).with_key(key));
            offset += text.len();
            rest = &rest[text.len()..];
        }

        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Assert that a matcher does or doesn't consume the given prefix.
    fn assert_matches(in_string: &str, matcher: &Matcher, match_string: Option<&str>) {
        assert_eq!(matcher.matches(in_string), match_string);
    }

    #[test]
    fn string_matcher() {
        let matcher = Matcher::string("dot", ".", TokenKind::Punctuation);

        assert_matches(".fsaljk", &matcher, Some("."));
        assert_matches("fsaljk", &matcher, None);
    }

    #[test]
    fn regex_matcher_anchors_at_start() {
        let matcher = Matcher::regex("word", r"[\p{L}\p{N}_]+", TokenKind::Word);

        assert_matches("foo bar", &matcher, Some("foo"));
        assert_matches(" foo", &matcher, None);
    }

    #[test]
    fn keyword_matcher_requires_word_boundary() {
        let matcher = Matcher::keywords(
            "reserved_top_level",
            &["SELECT", "GROUP BY"],
            TokenKind::ReservedTopLevel,
        );

        assert_matches("SELECT *", &matcher, Some("SELECT"));
        assert_matches("select *", &matcher, Some("select"));
        assert_matches("SELECTED", &matcher, None);
        assert_matches("GROUP   BY x", &matcher, Some("GROUP   BY"));
        assert_matches("GROUPBY", &matcher, None);
    }

    #[test]
    fn keyword_matcher_prefers_longest_phrase() {
        let matcher = Matcher::keywords(
            "reserved_newline",
            &["JOIN", "LEFT JOIN", "LEFT OUTER JOIN"],
            TokenKind::ReservedNewline,
        );

        assert_matches("LEFT OUTER JOIN b", &matcher, Some("LEFT OUTER JOIN"));
        assert_matches("LEFT JOIN b", &matcher, Some("LEFT JOIN"));
    }

    #[test]
    fn keyword_matcher_handles_paren_words() {
        let matcher = Matcher::keywords("open_paren", &["(", "CASE"], TokenKind::OpenParen);

        assert_matches("((", &matcher, Some("("));
        assert_matches("case when", &matcher, Some("case"));
        assert_matches("casex", &matcher, None);
    }

    #[test]
    fn operator_matcher_prefers_longest() {
        let matcher = Matcher::operators("operator", &["<", "<=", "<>"], TokenKind::Operator);

        assert_matches("<= 1", &matcher, Some("<="));
        assert_matches("<> 1", &matcher, Some("<>"));
        assert_matches("< 1", &matcher, Some("<"));
    }

    fn test_matchers() -> Vec<Matcher> {
        vec![
            Matcher::regex("line_comment", r"(?:--|#)[^\n\r]*", TokenKind::LineComment),
            Matcher::regex(
                "single_quote",
                r"'(?:[^'\\]|\\.|'')*'",
                TokenKind::String,
            ),
            Matcher::keywords("open_paren", &["("], TokenKind::OpenParen),
            Matcher::keywords("close_paren", &[")"], TokenKind::CloseParen),
            Matcher::regex("named_placeholder", r":[\p{L}\p{N}_]+", TokenKind::Placeholder)
                .key(|raw| raw[1..].into()),
            Matcher::keywords(
                "reserved_top_level",
                &["SELECT", "FROM", "WHERE"],
                TokenKind::ReservedTopLevel,
            ),
            Matcher::keywords("reserved_newline", &["AND"], TokenKind::ReservedNewline),
            Matcher::regex("word", r"[\p{L}\p{N}_]+", TokenKind::Word),
            Matcher::operators("operator", &["=", "<>", "<="], TokenKind::Operator),
            Matcher::native("punctuation", |cursor| cursor.shift() != Cursor::EOF, TokenKind::Punctuation),
        ]
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|token| token.kind).collect()
    }

    #[test]
    fn tokenize_simple_select() {
        let matchers = test_matchers();
        let tokens = Tokenizer::from_matchers(&matchers)
            .tokenize("SELECT a FROM b WHERE x = 1")
            .unwrap();

        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::ReservedTopLevel,
                TokenKind::Word,
                TokenKind::ReservedTopLevel,
                TokenKind::Word,
                TokenKind::ReservedTopLevel,
                TokenKind::Word,
                TokenKind::Operator,
                TokenKind::Word,
            ]
        );
    }

    #[test]
    fn tokenize_absorbs_whitespace() {
        let matchers = test_matchers();
        let tokens = Tokenizer::from_matchers(&matchers)
            .tokenize("  SELECT \t\n a")
            .unwrap();

        assert_eq!(tokens[0].whitespace_before(), "  ");
        assert_eq!(tokens[0].raw(), "SELECT");
        assert_eq!(tokens[0].offset(), 2);
        assert_eq!(tokens[1].whitespace_before(), " \t\n ");
        assert_eq!(tokens[1].offset(), 11);
    }

    #[test]
    fn tokenize_preserves_every_lexeme() {
        let matchers = test_matchers();
        let input = "SELECT 'a''b' FROM (x) AND :name";
        let tokens = Tokenizer::from_matchers(&matchers).tokenize(input).unwrap();

        let rebuilt: String = tokens
            .iter()
            .map(|token| format!("{}{}", token.whitespace_before(), token.raw()))
            .collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn tokenize_extracts_placeholder_key() {
        let matchers = test_matchers();
        let tokens = Tokenizer::from_matchers(&matchers).tokenize(":name").unwrap();

        assert_eq!(tokens[0].kind, TokenKind::Placeholder);
        assert_eq!(tokens[0].key(), Some("name"));
    }

    #[test]
    fn tokenize_skips_reserved_after_dot() {
        let matchers = test_matchers();
        let tokens = Tokenizer::from_matchers(&matchers).tokenize("t.from").unwrap();

        assert_eq!(tokens[2].kind, TokenKind::Word);
        assert_eq!(tokens[2].raw(), "from");
    }

    #[test]
    fn tokenize_stuck_reports_offset() {
        let matchers: Vec<Matcher> = Vec::new();
        let err = Tokenizer::from_matchers(&matchers)
            .tokenize("  x")
            .unwrap_err();

        assert_eq!(err, TokenizeError { offset: 2 });
    }
}
