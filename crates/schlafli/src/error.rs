//! Error type shared across the engine.
//!
//! One enum, reason payloads, helper constructors. Recoverable failures are
//! returned upward with `?`; `LatticeInvariant` marks an internal bug and is
//! additionally guarded by debug assertions at the places that raise it.

use std::fmt;

/// Failure kinds surfaced by the public API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Malformed symbol text or an empty component sequence.
    BadSyntax { reason: String },
    /// A component or dimension exceeds the supported limits.
    TooLarge { what: &'static str, value: u64, limit: u64 },
    /// Empty component sequence passed to a constructor.
    EmptySymbol,
    /// Dimension outside the supported range for an operation.
    BadDimension { dimension: usize },
    /// The symbol is not in any supported family.
    UnsupportedFamily { symbol: String },
    /// Incidence construction produced a structure failing Euler or subset
    /// checks. Callers should treat this as fatal.
    LatticeInvariant { reason: String },
}

impl Error {
    pub(crate) fn bad_syntax(reason: impl Into<String>) -> Self {
        Self::BadSyntax {
            reason: reason.into(),
        }
    }

    pub(crate) fn too_large(what: &'static str, value: u64, limit: u64) -> Self {
        Self::TooLarge { what, value, limit }
    }

    pub(crate) fn unsupported(symbol: impl fmt::Display) -> Self {
        Self::UnsupportedFamily {
            symbol: symbol.to_string(),
        }
    }

    pub(crate) fn lattice(reason: impl Into<String>) -> Self {
        Self::LatticeInvariant {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadSyntax { reason } => write!(f, "malformed Schläfli symbol: {reason}"),
            Self::TooLarge { what, value, limit } => {
                write!(f, "{what} {value} exceeds supported limit {limit}")
            }
            Self::EmptySymbol => write!(f, "empty component sequence"),
            Self::BadDimension { dimension } => {
                write!(f, "dimension {dimension} outside supported range")
            }
            Self::UnsupportedFamily { symbol } => {
                write!(f, "symbol {symbol} is not in a supported family")
            }
            Self::LatticeInvariant { reason } => {
                write!(f, "face lattice invariant violated: {reason}")
            }
        }
    }
}

impl std::error::Error for Error {}
