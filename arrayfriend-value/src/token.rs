use std::rc::Rc;

/// A unique token.
///
/// A token has no content to compare or copy: it is equal only to itself
/// (and its clones). Minting always produces a distinct token, even with
/// the same description.
#[derive(Clone, Default)]
pub struct Token(Rc<TokenData>);

#[derive(Default)]
struct TokenData {
    description: Option<String>,
}

impl Token {
    /// Mint a new token without a description.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(description: impl Into<String>) -> Self {
        Self(Rc::new(TokenData {
            description: Some(description.into()),
        }))
    }

    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    /// Whether both tokens are the same token.
    pub fn ptr_eq(&self, other: &Token) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn address(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique() {
        let a = Token::with_description("a");
        let b = Token::with_description("a");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::with_description("id").to_string(), "Symbol(id)");
        assert_eq!(Token::new().to_string(), "Symbol()");
    }
}
