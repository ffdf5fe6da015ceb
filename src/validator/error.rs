//! The accumulating validation failure.

use thiserror::Error;

use crate::typeclass::{Monoid, Semigroup};

/// An ordered list of human-readable validation messages.
///
/// Merging keeps order: the left error's messages come first. This is the
/// [`Semigroup`] that error-accumulating traversals use to fold several
/// failures into one.
///
/// # Examples
///
/// ```rust
/// use opticore::typeclass::Semigroup;
/// use opticore::validator::ValidationError;
///
/// let error = ValidationError::new("too short").combine(ValidationError::new("no digits"));
/// assert_eq!(error.messages(), ["too short", "no digits"]);
/// assert_eq!(error.to_string(), "too short, no digits");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{}", messages.join(", "))]
pub struct ValidationError {
    messages: Vec<String>,
}

impl ValidationError {
    /// A failure with a single message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }

    /// A failure carrying every message in order.
    pub fn from_messages<I, M>(messages: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<String>,
    {
        Self {
            messages: messages.into_iter().map(Into::into).collect(),
        }
    }

    /// A failure with no messages, the merge identity.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// The messages, in order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Takes the messages out.
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    /// Returns `true` when there are no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Appends `other`'s messages after this error's.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.messages.extend(other.messages);
        self
    }

    /// Rewrites every message, keeping the order.
    #[must_use]
    pub fn map_messages<F>(self, function: F) -> Self
    where
        F: FnMut(String) -> String,
    {
        Self {
            messages: self.messages.into_iter().map(function).collect(),
        }
    }
}

impl Semigroup for ValidationError {
    fn combine(self, other: Self) -> Self {
        self.merge(other)
    }
}

impl Monoid for ValidationError {
    fn empty() -> Self {
        Self::empty()
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<Vec<String>> for ValidationError {
    fn from(messages: Vec<String>) -> Self {
        Self { messages }
    }
}
