//! Error types for typed dispatch.
//!
//! Two failure categories exist, and they are deliberately distinct:
//!
//! - [`DispatchError::UnsupportedType`]: a name or value category the
//!   library defines no type tag for at all (tag-resolver level).
//! - [`DispatchError::NoMatchingSignature`]: the tags were resolved, but
//!   the operation registered no signature covering that tag tuple
//!   (dispatcher level).
//!
//! The core performs no recovery or retry; every error surfaces
//! synchronously to the caller of the top-level operation.

use thiserror::Error;

use crate::types::TypeTag;

/// Format a tag tuple as `::Tag, ::Tag` for MethodError-style messages.
fn fmt_tags(tags: &[TypeTag]) -> String {
    tags.iter()
        .map(|t| format!("::{}", t))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error type for the dispatch/mapping core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// A value category or tag name the library defines no tag for.
    #[error("TypeError: unknown type \"{type_name}\"")]
    UnsupportedType {
        /// The unrecognized type name
        type_name: String,
    },

    /// Recognized tags, but no registered signature covers the tuple.
    #[error("MethodError: no method matching {}({})", .name, fmt_tags(.arg_tags))]
    NoMatchingSignature {
        /// Operation name
        name: String,
        /// The rejected tag tuple
        arg_tags: Vec<TypeTag>,
    },
}

impl DispatchError {
    /// Create an unsupported-type error
    pub fn unsupported_type<S: Into<String>>(type_name: S) -> Self {
        DispatchError::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    /// Create a no-matching-signature error
    pub fn no_matching_signature<S: Into<String>>(name: S, arg_tags: Vec<TypeTag>) -> Self {
        DispatchError::NoMatchingSignature {
            name: name.into(),
            arg_tags,
        }
    }
}

/// Result type alias for dispatch operations
pub type DispatchResult<T> = Result<T, DispatchError>;
