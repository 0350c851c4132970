//! Schläfli symbols: parsing, construction, and derived quantities.
//!
//! A symbol `{p1,...,pL}` is an immutable ordered tuple of non-negative
//! integers with derived dimension `d = L + 1`. Validity as a regular
//! polytope is a separate question (see `validate`); this module only
//! enforces the structural limits of the notation.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Largest accepted component value. The grammar allows any decimal integer
/// up to this bound; regularity constraints come later.
pub const MAX_COMPONENT: u32 = 1_000_000;

/// Ordered component tuple `{p1,...,pL}`, `L >= 1`. Immutable after
/// construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SchlafliSymbol {
    components: Vec<u32>,
}

impl SchlafliSymbol {
    /// Build a symbol from an explicit component sequence.
    pub fn new(components: Vec<u32>) -> Result<Self, Error> {
        if components.is_empty() {
            return Err(Error::EmptySymbol);
        }
        for &c in &components {
            if c > MAX_COMPONENT {
                return Err(Error::too_large(
                    "component",
                    u64::from(c),
                    u64::from(MAX_COMPONENT),
                ));
            }
        }
        Ok(Self { components })
    }

    /// Parse `{p1,p2,...}` with optional whitespace around separators.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let trimmed = text.trim();
        let inner = trimmed
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or_else(|| Error::bad_syntax("expected '{...}'"))?;
        let mut components = Vec::new();
        for part in inner.split(',') {
            let token = part.trim();
            if token.is_empty() {
                return Err(Error::bad_syntax("empty component"));
            }
            // Reject signs and non-digits outright; `u64::from_str` would
            // accept a leading '+'.
            if !token.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::bad_syntax(format!("non-numeric component '{token}'")));
            }
            let value: u64 = token
                .parse()
                .map_err(|_| Error::too_large("component", u64::MAX, u64::from(MAX_COMPONENT)))?;
            if value > u64::from(MAX_COMPONENT) {
                return Err(Error::too_large("component", value, u64::from(MAX_COMPONENT)));
            }
            components.push(value as u32);
        }
        Self::new(components)
    }

    #[inline]
    pub fn components(&self) -> &[u32] {
        &self.components
    }

    /// Number of components `L`.
    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false // structurally impossible; constructors reject empty tuples
    }

    /// Derived dimension `d = L + 1`.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.components.len() + 1
    }

    /// Component reversal; the dual polytope's symbol.
    pub fn dual(&self) -> Self {
        let mut components = self.components.clone();
        components.reverse();
        Self { components }
    }

    /// Palindromic tuples are their own dual.
    pub fn is_palindrome(&self) -> bool {
        let n = self.components.len();
        (0..n / 2).all(|i| self.components[i] == self.components[n - 1 - i])
    }
}

impl fmt::Display for SchlafliSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "}}")
    }
}

impl FromStr for SchlafliSymbol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trip() {
        let s = SchlafliSymbol::parse("{3,3,5}").unwrap();
        assert_eq!(s.components(), &[3, 3, 5]);
        assert_eq!(s.dimension(), 4);
        assert_eq!(s.to_string(), "{3,3,5}");
    }

    #[test]
    fn parse_tolerates_whitespace() {
        let s = SchlafliSymbol::parse("  { 4 , 3 , 3 } ").unwrap();
        assert_eq!(s.components(), &[4, 3, 3]);
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["", "{}", "{3,}", "{,3}", "3,3", "{3;3}", "{3,-4}", "{a}"] {
            assert!(
                matches!(
                    SchlafliSymbol::parse(bad),
                    Err(Error::BadSyntax { .. } | Error::EmptySymbol)
                ),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_overflow() {
        assert!(matches!(
            SchlafliSymbol::parse("{1000001}"),
            Err(Error::TooLarge { .. })
        ));
        assert!(matches!(
            SchlafliSymbol::parse("{99999999999999999999}"),
            Err(Error::TooLarge { .. })
        ));
    }

    #[test]
    fn new_rejects_empty() {
        assert_eq!(SchlafliSymbol::new(vec![]), Err(Error::EmptySymbol));
    }

    #[test]
    fn dual_and_palindrome() {
        let s = SchlafliSymbol::new(vec![5, 3, 3]).unwrap();
        assert_eq!(s.dual().components(), &[3, 3, 5]);
        assert!(!s.is_palindrome());
        assert!(SchlafliSymbol::new(vec![3, 4, 3]).unwrap().is_palindrome());
        assert!(SchlafliSymbol::new(vec![3]).unwrap().is_palindrome());
    }
}
