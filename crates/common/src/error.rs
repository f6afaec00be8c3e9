//! Errors for decoding primitive numbers.

use thiserror::Error;

/// A primitive number with no assigned primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown primitive number {0}")]
pub struct UnknownPrimitive(pub u16);
