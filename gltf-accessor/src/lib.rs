//! glTF accessor encoding
//!
//! Packs typed element arrays into a caller-owned binary buffer and produces
//! the matching glTF accessor records:
//! - AccessorData: dense accessor, every element stored
//! - SparseAccessorData: only non-zero elements stored, with their indices
//! - Accessors: append-only accessor list addressed by AccessorId
//!
//! Buffer views are allocated by the caller and referenced by BufferViewId.
//! Offsets within those views are the caller's to record.
//!
//! # Example
//!
//! ```
//! use gltf_accessor::{AccessorData, AccessorError, Accessors, BufferViewId, GlType, SparseAccessorData};
//!
//! let mut buffer = Vec::new();
//!
//! let mut positions = AccessorData::with_buffer_view(BufferViewId(0), GlType::VEC3_FLOAT);
//! positions.append(&[[0.0f32, 0.0, 0.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.0]], &mut buffer)?;
//!
//! let idx_offset = buffer.len();
//! let mut morph = SparseAccessorData::with_buffer_views(
//!     BufferViewId(1),
//!     BufferViewId(2),
//!     GlType::UNSIGNED_SHORT,
//!     GlType::VEC3_FLOAT,
//! );
//! morph.append(&[[0.0f32, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.25, 0.0]], &mut buffer)?;
//! assert_eq!(morph.sparse_count(), 1);
//! assert_eq!(buffer.len(), idx_offset + 2 + 2 + 12);
//!
//! let mut accessors = Accessors::new();
//! accessors.push(positions);
//! accessors.push(morph);
//! let records = accessors.serialize();
//! assert_eq!(records[1]["sparse"]["count"], 1);
//! # Ok::<(), AccessorError>(())
//! ```

pub mod accessor;
pub mod arena;
pub mod error;
pub mod sparse;
pub mod types;
pub mod utils;
pub mod zero;

pub use accessor::AccessorData;
pub use arena::{Accessor, AccessorId, Accessors, BufferViewId};
pub use error::{AccessorError, Result};
pub use sparse::SparseAccessorData;
pub use types::{ComponentType, Element, GlType, Shape};
pub use utils::align_buffer;
pub use zero::ZERO_EPSILON;

// Re-export commonly used gltf-json types
pub use gltf_json as json;
