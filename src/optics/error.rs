//! Contract violations raised by optics over [`Value`](super::Value).
//!
//! These are programmer errors, not domain failures: a lens is total, so
//! pointing one at data without the focused field is a bug in the caller.
//! Total operations panic with the error's message; the `try_*` helpers on
//! [`KeyLens`](super::lens::KeyLens) return it instead.

use thiserror::Error;

/// A lens was applied to data that does not satisfy its precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpticError {
    /// The map or record has no field with this key.
    #[error("missing key `{key}`")]
    MissingKey {
        /// The key the lens focuses on.
        key: String,
    },
    /// The value is not a map or record, so it has no fields at all.
    #[error("cannot focus key `{key}` on a {found} value")]
    NotARecord {
        /// The key the lens focuses on.
        key: String,
        /// The shape that was found instead.
        found: String,
    },
}
