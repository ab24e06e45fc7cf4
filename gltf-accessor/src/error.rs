//! Accessor encoding errors

use crate::types::{ComponentType, Shape};

/// Reasons an append is rejected. Nothing is written when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessorError {
    /// Input elements do not have the shape the accessor was bound to
    #[error("element shape {found} does not match accessor type {expected}")]
    TypeMismatch { expected: Shape, found: Shape },

    /// Sparse indices must use an unsigned integer component type
    #[error("{0:?} cannot encode sparse indices (must be U8, U16 or U32)")]
    InvalidIndexType(ComponentType),

    /// Element count does not fit the count field or the index type
    #[error("{count} elements exceed the addressable maximum of {max}")]
    CountOverflow { count: usize, max: u64 },
}

pub type Result<T> = std::result::Result<T, AccessorError>;
