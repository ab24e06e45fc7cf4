//! Dense accessors: every element stored back to back

use crate::arena::BufferViewId;
use crate::error::{AccessorError, Result};
use crate::types::{Element, GlType};
use crate::utils::{bounds_value, checked_count};
use gltf_json as json;
use gltf_json::validation::Checked::Valid;
use serde_json::json;

/// A dense accessor and its encoding state
#[derive(Debug, Clone, PartialEq)]
pub struct AccessorData {
    buffer_view: Option<BufferViewId>,
    gl_type: GlType,
    count: u32,
    appended: bool,

    /// Offset of the first element within the buffer view, set by the caller
    pub byte_offset: u32,
    pub min: Vec<f32>,
    pub max: Vec<f32>,
}

impl AccessorData {
    /// Accessor not bound to any buffer view
    pub fn new(gl_type: GlType) -> Self {
        Self {
            buffer_view: None,
            gl_type,
            count: 0,
            appended: false,
            byte_offset: 0,
            min: Vec::new(),
            max: Vec::new(),
        }
    }

    /// Accessor reading from `buffer_view`
    pub fn with_buffer_view(buffer_view: BufferViewId, gl_type: GlType) -> Self {
        Self {
            buffer_view: Some(buffer_view),
            ..Self::new(gl_type)
        }
    }

    pub fn buffer_view(&self) -> Option<BufferViewId> {
        self.buffer_view
    }

    pub fn gl_type(&self) -> GlType {
        self.gl_type
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Bytes written by the last append
    pub fn byte_length(&self) -> usize {
        self.gl_type.stride() * self.count as usize
    }

    /// Encode `elements` onto the end of `out`.
    ///
    /// `out` grows by exactly `elements.len() * stride` bytes; bytes already
    /// in it are left alone. Callers record `out.len()` beforehand if they
    /// need the block's offset.
    pub fn append<T: Element>(&mut self, elements: &[T], out: &mut Vec<u8>) -> Result<()> {
        if T::SHAPE != self.gl_type.shape {
            return Err(AccessorError::TypeMismatch {
                expected: self.gl_type.shape,
                found: T::SHAPE,
            });
        }
        let count = checked_count(elements.len())?;

        if self.appended {
            tracing::warn!(
                "Accessor already holds {} elements, overwriting with {}",
                self.count,
                count
            );
        }

        let stride = self.gl_type.stride();
        let offset = out.len();
        out.resize(offset + elements.len() * stride, 0);
        for (dest, value) in out[offset..].chunks_exact_mut(stride).zip(elements) {
            self.gl_type.write(dest, value);
        }

        self.count = count;
        self.appended = true;

        tracing::debug!(
            "Packed {} {} elements ({} bytes) at buffer offset {}",
            count,
            self.gl_type.shape,
            out.len() - offset,
            offset
        );
        Ok(())
    }

    /// Accessor record for the glTF `accessors` array
    pub fn serialize(&self) -> json::Value {
        let mut result = json!({
            "componentType": self.gl_type.component.gl_code(),
            "type": self.gl_type.shape.tag(),
            "count": self.count,
        });
        if let Some(view) = self.buffer_view {
            result["bufferView"] = json!(view.0);
            result["byteOffset"] = json!(self.byte_offset);
        }
        if let Some(min) = bounds_value(&self.min) {
            result["min"] = min;
        }
        if let Some(max) = bounds_value(&self.max) {
            result["max"] = max;
        }
        result
    }

    /// Typed `gltf_json` form of [`serialize`](Self::serialize)
    pub fn to_gltf_accessor(&self) -> json::Accessor {
        json::Accessor {
            buffer_view: self.buffer_view.map(|view| view.as_json_index()),
            byte_offset: self
                .buffer_view
                .map(|_| u64::from(self.byte_offset).into()),
            count: u64::from(self.count).into(),
            component_type: Valid(json::accessor::GenericComponentType(
                self.gl_type.component.into(),
            )),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(self.gl_type.shape.into()),
            min: bounds_value(&self.min),
            max: bounds_value(&self.max),
            name: None,
            normalized: false,
            sparse: None,
        }
    }
}
