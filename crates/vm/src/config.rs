//! VM configuration.
//!
//! Configuration specifies limits only; the stack and primitives enforce
//! them.

use minitalk_common::{SmallIntegerRange, SMALL_INTEGER_BITS};

use crate::error::ConfigError;

/// Default evaluation stack depth limit, in slots.
pub const DEFAULT_MAX_STACK_DEPTH: usize = 4096;

/// Limits for one interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VmConfig {
    /// SmallInteger width in bits.
    pub small_integer_bits: u32,
    /// Maximum evaluation stack depth.
    pub max_stack_depth: usize,
}

impl Default for VmConfig {
    fn default() -> Self {
        VmConfig {
            small_integer_bits: SMALL_INTEGER_BITS,
            max_stack_depth: DEFAULT_MAX_STACK_DEPTH,
        }
    }
}

impl VmConfig {
    /// Create a configuration with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the SmallInteger width.
    pub fn with_small_integer_bits(mut self, bits: u32) -> Self {
        self.small_integer_bits = bits;
        self
    }

    /// Override the stack depth limit.
    pub fn with_max_stack_depth(mut self, depth: usize) -> Self {
        self.max_stack_depth = depth;
        self
    }

    /// The SmallInteger range for the configured width.
    pub fn range(&self) -> Result<SmallIntegerRange, ConfigError> {
        SmallIntegerRange::with_bits(self.small_integer_bits).ok_or(
            ConfigError::UnsupportedWidth {
                bits: self.small_integer_bits,
                min: SmallIntegerRange::MIN_BITS,
                max: SmallIntegerRange::MAX_BITS,
            },
        )
    }

    /// Check every limit, returning the SmallInteger range on success.
    ///
    /// A binary primitive needs two operand slots, so shallower stacks are
    /// rejected.
    pub fn validate(&self) -> Result<SmallIntegerRange, ConfigError> {
        if self.max_stack_depth < 2 {
            return Err(ConfigError::StackTooShallow);
        }
        self.range()
    }
}
