//! Sparse accessors: only non-zero elements stored, addressed by index
//!
//! Appending writes two blocks into the shared output buffer:
//!
//! ```text
//! [indices: sparse_count × idx stride][zero padding to 4][values: sparse_count × val stride]
//! ```
//!
//! The padding is computed from the total length of the output buffer, so it
//! keeps the value block 4-byte aligned relative to the start of the buffer
//! even when no indices were written.

use crate::arena::BufferViewId;
use crate::error::{AccessorError, Result};
use crate::types::{Element, GlType, Shape};
use crate::utils::{align_buffer, bounds_value, checked_count, push_encoded};
use gltf_json as json;
use gltf_json::validation::Checked::Valid;
use serde_json::json;

/// A sparse accessor over an implicit all-zero base array
#[derive(Debug, Clone, PartialEq)]
pub struct SparseAccessorData {
    idx_buffer_view: Option<BufferViewId>,
    val_buffer_view: Option<BufferViewId>,
    idx_type: GlType,
    val_type: GlType,
    count: u32,
    sparse_count: u32,
    appended: bool,

    pub idx_byte_offset: u32,
    pub val_byte_offset: u32,
    pub min: Vec<f32>,
    pub max: Vec<f32>,
}

impl SparseAccessorData {
    pub fn new(idx_type: GlType, val_type: GlType) -> Self {
        Self {
            idx_buffer_view: None,
            val_buffer_view: None,
            idx_type,
            val_type,
            count: 0,
            sparse_count: 0,
            appended: false,
            idx_byte_offset: 0,
            val_byte_offset: 0,
            min: Vec::new(),
            max: Vec::new(),
        }
    }

    pub fn with_buffer_views(
        idx_buffer_view: BufferViewId,
        val_buffer_view: BufferViewId,
        idx_type: GlType,
        val_type: GlType,
    ) -> Self {
        Self {
            idx_buffer_view: Some(idx_buffer_view),
            val_buffer_view: Some(val_buffer_view),
            ..Self::new(idx_type, val_type)
        }
    }

    pub fn idx_buffer_view(&self) -> Option<BufferViewId> {
        self.idx_buffer_view
    }

    pub fn val_buffer_view(&self) -> Option<BufferViewId> {
        self.val_buffer_view
    }

    pub fn idx_type(&self) -> GlType {
        self.idx_type
    }

    pub fn val_type(&self) -> GlType {
        self.val_type
    }

    /// Length of the conceptual dense array
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Number of stored (non-zero) elements
    pub fn sparse_count(&self) -> u32 {
        self.sparse_count
    }

    pub fn idx_byte_length(&self) -> usize {
        self.idx_type.stride() * self.sparse_count as usize
    }

    pub fn val_byte_length(&self) -> usize {
        self.val_type.stride() * self.sparse_count as usize
    }

    /// Encode the non-zero entries of `elements` onto the end of `out`.
    ///
    /// Indices are written in ascending order, followed by zero padding up to
    /// the next multiple of 4 of `out.len()`, followed by the values in the
    /// same order. The padding step always runs, even for an empty selection.
    pub fn append<T: Element>(&mut self, elements: &[T], out: &mut Vec<u8>) -> Result<()> {
        if T::SHAPE != self.val_type.shape {
            return Err(AccessorError::TypeMismatch {
                expected: self.val_type.shape,
                found: T::SHAPE,
            });
        }
        if self.idx_type.shape != Shape::Scalar {
            return Err(AccessorError::TypeMismatch {
                expected: self.idx_type.shape,
                found: Shape::Scalar,
            });
        }
        if !self.idx_type.component.is_unsigned_int() {
            return Err(AccessorError::InvalidIndexType(self.idx_type.component));
        }
        let count = checked_count(elements.len())?;
        let max_index = self.idx_type.component.max_integer();

        // Select into scratch buffers so a rejected input leaves `out` untouched
        let mut idx_out = Vec::new();
        let mut val_out = Vec::new();
        let mut sparse_count = 0u32;
        for (ii, value) in elements.iter().enumerate() {
            if value.is_zero() {
                continue;
            }
            // `ii < count <= u32::MAX` so the cast is lossless
            let index = ii as u32;
            if u64::from(index) > max_index {
                return Err(AccessorError::CountOverflow {
                    count: elements.len(),
                    max: max_index + 1,
                });
            }
            push_encoded(&self.val_type, &mut val_out, value);
            push_encoded(&self.idx_type, &mut idx_out, &index);
            sparse_count += 1;
        }

        if self.appended {
            tracing::warn!(
                "Sparse accessor already holds {}/{} elements, overwriting with {}/{}",
                self.sparse_count,
                self.count,
                sparse_count,
                count
            );
        }

        let start = out.len();
        out.extend_from_slice(&idx_out);
        let padding = align_buffer(out);
        if padding > 0 {
            tracing::trace!("Aligned sparse values with {} padding bytes", padding);
        }
        out.extend_from_slice(&val_out);

        self.count = count;
        self.sparse_count = sparse_count;
        self.appended = true;

        tracing::debug!(
            "Packed {} / {} sparse {} elements ({} bytes) at buffer offset {}",
            sparse_count,
            count,
            self.val_type.shape,
            out.len() - start,
            start
        );
        Ok(())
    }

    /// Accessor record for the glTF `accessors` array.
    ///
    /// The declared element type is the value type.
    pub fn serialize(&self) -> json::Value {
        let mut result = json!({
            "componentType": self.val_type.component.gl_code(),
            "type": self.val_type.shape.tag(),
            "count": self.count,
            "sparse": { "count": self.sparse_count },
        });
        if let Some(view) = self.idx_buffer_view {
            result["sparse"]["indices"] = json!({
                "bufferView": view.0,
                "byteOffset": self.idx_byte_offset,
                "componentType": self.idx_type.component.gl_code(),
            });
        }
        if let Some(view) = self.val_buffer_view {
            result["sparse"]["values"] = json!({
                "bufferView": view.0,
                "byteOffset": self.val_byte_offset,
                "componentType": self.val_type.component.gl_code(),
            });
        }
        if let Some(min) = bounds_value(&self.min) {
            result["min"] = min;
        }
        if let Some(max) = bounds_value(&self.max) {
            result["max"] = max;
        }
        result
    }

    /// Typed `gltf_json` form, available once both buffer views are bound
    pub fn to_gltf_accessor(&self) -> Option<json::Accessor> {
        let idx_view = self.idx_buffer_view?;
        let val_view = self.val_buffer_view?;

        let sparse = json::accessor::sparse::Sparse {
            count: u64::from(self.sparse_count).into(),
            indices: json::accessor::sparse::Indices {
                buffer_view: idx_view.as_json_index(),
                byte_offset: u64::from(self.idx_byte_offset).into(),
                component_type: Valid(json::accessor::IndexComponentType(
                    self.idx_type.component.into(),
                )),
                extensions: Default::default(),
                extras: Default::default(),
            },
            values: json::accessor::sparse::Values {
                buffer_view: val_view.as_json_index(),
                byte_offset: u64::from(self.val_byte_offset).into(),
                extensions: Default::default(),
                extras: Default::default(),
            },
            extensions: Default::default(),
            extras: Default::default(),
        };

        Some(json::Accessor {
            buffer_view: None,
            byte_offset: None,
            count: u64::from(self.count).into(),
            component_type: Valid(json::accessor::GenericComponentType(
                self.val_type.component.into(),
            )),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(self.val_type.shape.into()),
            min: bounds_value(&self.min),
            max: bounds_value(&self.max),
            name: None,
            normalized: false,
            sparse: Some(sparse),
        })
    }
}
