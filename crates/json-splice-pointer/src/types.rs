//! Type definitions for JSON Pointer.

use std::fmt;
use std::str::FromStr;

use crate::util::{escape_component, is_valid_index, unescape_component};
use crate::validate::validate_json_pointer;
use crate::PointerError;

/// A single decoded reference token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A non-negative array index (`/0`, `/12`).
    Index(usize),
    /// The `-` token: one past the end of an array.
    Append,
    /// An object key, already unescaped.
    Key(String),
}

impl Token {
    /// Classify a raw (still escaped) reference token.
    ///
    /// Unescaping is only applied to key tokens. Digit strings that overflow
    /// `usize` or carry a leading zero stay keys.
    pub fn parse(raw: &str) -> Token {
        if raw == "-" {
            return Token::Append;
        }
        if is_valid_index(raw) {
            if let Ok(idx) = raw.parse() {
                return Token::Index(idx);
            }
        }
        Token::Key(unescape_component(raw))
    }

    /// Build a key token from an unescaped object key.
    pub fn key(key: impl Into<String>) -> Token {
        Token::Key(key.into())
    }

    /// The encoded form of this token, as it appears in a pointer string.
    pub fn encoded(&self) -> String {
        match self {
            Token::Index(idx) => idx.to_string(),
            Token::Append => "-".to_string(),
            Token::Key(key) => escape_component(key),
        }
    }
}

impl From<usize> for Token {
    fn from(idx: usize) -> Self {
        Token::Index(idx)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded())
    }
}

/// Format a token slice back into an RFC 6901 pointer string.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push('/');
        out.push_str(&token.encoded());
    }
    out
}

/// A parsed JSON Pointer.
///
/// Holds decoded tokens so parent computation is a slice operation and
/// escaped keys are never re-split.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pointer {
    tokens: Vec<Token>,
}

impl Pointer {
    /// The root pointer (`""`).
    pub fn root() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Parse an RFC 6901 pointer string.
    ///
    /// # Errors
    ///
    /// [`PointerError::Invalid`] when the string is not a syntactically
    /// valid pointer.
    ///
    /// # Example
    ///
    /// ```
    /// use json_splice_pointer::{Pointer, Token};
    ///
    /// let ptr = Pointer::parse("/a~1b/0/-").unwrap();
    /// assert_eq!(
    ///     ptr.tokens(),
    ///     &[Token::key("a/b"), Token::Index(0), Token::Append]
    /// );
    /// assert_eq!(ptr.to_string(), "/a~1b/0/-");
    /// ```
    pub fn parse(pointer: &str) -> Result<Self, PointerError> {
        validate_json_pointer(pointer)?;
        if pointer.is_empty() {
            return Ok(Self::root());
        }
        Ok(Self {
            tokens: pointer[1..].split('/').map(Token::parse).collect(),
        })
    }

    pub fn from_tokens(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Borrowed view of the parent tokens and the last token.
    pub fn split_last(&self) -> Option<(&[Token], &Token)> {
        self.tokens
            .split_last()
            .map(|(last, parent)| (parent, last))
    }

    /// The pointer with its last token removed.
    ///
    /// # Errors
    ///
    /// [`PointerError::NoParent`] for the root pointer.
    pub fn parent(&self) -> Result<Pointer, PointerError> {
        match self.split_last() {
            Some((parent, _)) => Ok(Pointer::from_tokens(parent.iter().cloned())),
            None => Err(PointerError::NoParent),
        }
    }

    /// A new pointer one level below this one.
    pub fn child(&self, token: impl Into<Token>) -> Pointer {
        let mut out = self.clone();
        out.push(token.into());
        out
    }

    /// A pointer sharing this pointer's parent but ending in `token`.
    ///
    /// # Errors
    ///
    /// [`PointerError::NoParent`] for the root pointer.
    pub fn sibling(&self, token: impl Into<Token>) -> Result<Pointer, PointerError> {
        let mut out = self.parent()?;
        out.push(token.into());
        Ok(out)
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn pop(&mut self) -> Option<Token> {
        self.tokens.pop()
    }

    /// Returns `true` if `self` is a proper prefix of `other`.
    pub fn is_prefix_of(&self, other: &Pointer) -> bool {
        self.tokens.len() < other.tokens.len()
            && other.tokens[..self.tokens.len()] == self.tokens[..]
    }
}

impl FromStr for Pointer {
    type Err = PointerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pointer::parse(s)
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_tokens(&self.tokens))
    }
}

impl FromIterator<Token> for Pointer {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Pointer::from_tokens(iter)
    }
}
