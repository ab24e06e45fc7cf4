//! Helpers shared by the dense and sparse encoders

use crate::error::{AccessorError, Result};
use crate::types::{Element, GlType};
use gltf_json as json;

/// Pad `buffer` with zeros until its total length is a multiple of 4.
///
/// Returns the number of bytes added.
pub fn align_buffer(buffer: &mut Vec<u8>) -> usize {
    let padding = (4 - buffer.len() % 4) % 4;
    buffer.resize(buffer.len() + padding, 0);
    padding
}

/// Append one element encoded as `ty` to the end of `buffer`
pub(crate) fn push_encoded<T: Element>(ty: &GlType, buffer: &mut Vec<u8>, value: &T) {
    let offset = buffer.len();
    buffer.resize(offset + ty.stride(), 0);
    ty.write(&mut buffer[offset..], value);
}

/// Narrow an element count to the u32 count field
pub(crate) fn checked_count(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| AccessorError::CountOverflow {
        count: len,
        max: u64::from(u32::MAX),
    })
}

/// `min`/`max` as a JSON array, or `None` when unset
pub(crate) fn bounds_value(bounds: &[f32]) -> Option<json::Value> {
    if bounds.is_empty() {
        None
    } else {
        Some(json::Value::Array(
            bounds.iter().map(|&b| json::Value::from(b)).collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_buffer() {
        let mut buffer = vec![1, 2, 3];
        assert_eq!(align_buffer(&mut buffer), 1);
        assert_eq!(buffer, vec![1, 2, 3, 0]);

        let mut buffer2 = vec![1, 2, 3, 4];
        assert_eq!(align_buffer(&mut buffer2), 0);
        assert_eq!(buffer2.len(), 4);

        let mut empty = Vec::new();
        assert_eq!(align_buffer(&mut empty), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_push_encoded_appends_stride_bytes() {
        let mut buffer = vec![9u8];
        push_encoded(&GlType::UNSIGNED_SHORT, &mut buffer, &7u32);
        assert_eq!(buffer, vec![9, 7, 0]);
    }

    #[test]
    fn test_bounds_value() {
        assert!(bounds_value(&[]).is_none());
        let value = bounds_value(&[1.0, -2.5]).unwrap();
        assert_eq!(value, serde_json::json!([1.0, -2.5]));
    }
}
