//! Typed configuration for the built-in validators.
//!
//! Each validator takes its own options struct. Every struct is `Default`
//! and carries an optional `message` that replaces the validator's default
//! failure text.

/// Options for [`Any`](super::Any).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnyOptions {
    /// Replaces "value must satisfy at least one alternative".
    pub message: Option<String>,
}

/// Options for [`Not`](super::Not).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NotOptions {
    /// Replaces "value must not satisfy the negated validator".
    pub message: Option<String>,
}

/// Options for [`Each`](super::Each).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EachOptions {
    /// Replaces every per-element message with this single message.
    pub message: Option<String>,
}

/// Options for [`Required`](super::Required).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequiredOptions {
    /// Replaces "is required".
    pub message: Option<String>,
}

/// Bounds for [`Range`](super::Range). At least one bound must be set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeOptions<T> {
    /// Inclusive lower bound.
    pub min: Option<T>,
    /// Inclusive upper bound.
    pub max: Option<T>,
    /// Replaces the generated bound message.
    pub message: Option<String>,
}

impl<T> Default for RangeOptions<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            message: None,
        }
    }
}

/// Options for [`MinLength`](super::MinLength) and
/// [`MaxLength`](super::MaxLength).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LengthOptions {
    /// Replaces the generated length message.
    pub message: Option<String>,
}

/// Options for [`Equal`](super::Equal).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EqualOptions<T> {
    /// The value the input must equal.
    pub expected: T,
    /// Replaces "must be equal to {expected}".
    pub message: Option<String>,
}

impl<T> EqualOptions<T> {
    /// Options expecting `expected` with the default message.
    pub const fn new(expected: T) -> Self {
        Self {
            expected,
            message: None,
        }
    }
}

/// Options for [`Satisfies`](super::Satisfies).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PredicateOptions {
    /// Replaces "is invalid".
    pub message: Option<String>,
}

/// Picks the caller's message over a default.
pub(crate) fn message_or(message: Option<&String>, default: impl FnOnce() -> String) -> String {
    message.cloned().unwrap_or_else(default)
}
