use crate::errors::ParamError;
use crate::helpers::IndexMap;
use crate::tokens::Token;

/// Caller-supplied substitution values for placeholder tokens: an ordered
/// list consumed left to right, or a map keyed by placeholder name.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Params {
    #[default]
    None,
    Positional(Vec<String>),
    Named(IndexMap<String, String>),
}

impl Params {
    pub fn is_none(&self) -> bool {
        matches!(self, Params::None)
    }
}

/// Per-call view over [`Params`] holding the positional cursor.
#[derive(Debug)]
pub(crate) struct ParamPool<'a> {
    params: &'a Params,
    index: usize,
}

impl<'a> ParamPool<'a> {
    pub(crate) fn new(params: &'a Params) -> Self {
        Self { params, index: 0 }
    }

    /// Resolve a placeholder token. With no params configured the original
    /// lexeme passes through unchanged. A keyed token over positional params
    /// resolves the key as an index.
    pub(crate) fn get(&mut self, token: &Token) -> Result<String, ParamError> {
        match (self.params, token.key()) {
            (Params::None, _) => Ok(token.raw().to_string()),
            (Params::Named(values), Some(key)) => values
                .get(key)
                .cloned()
                .ok_or_else(|| ParamError::MissingKey(key.to_string())),
            (Params::Positional(values), Some(key)) => {
                let index: usize = key
                    .parse()
                    .map_err(|_| ParamError::MissingKey(key.to_string()))?;
                values
                    .get(index)
                    .cloned()
                    .ok_or(ParamError::MissingIndex(index))
            }
            (Params::Positional(values), None) => {
                let index = self.index;
                self.index += 1;
                values
                    .get(index)
                    .cloned()
                    .ok_or(ParamError::MissingIndex(index))
            }
            (Params::Named(_), None) => Err(ParamError::MissingIndex(self.index)),
        }
    }
}
