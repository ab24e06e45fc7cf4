//! GLB assembly around encoded accessors for integration tests.

#![allow(dead_code)]

use gltf_accessor::json;

/// Route crate logging to the test harness output
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .with_test_writer()
        .try_init();
}

/// Buffer view over `byte_length` bytes of buffer 0 starting at `offset`
pub fn view(offset: usize, byte_length: usize) -> json::buffer::View {
    json::buffer::View {
        buffer: json::Index::new(0),
        byte_length: byte_length.into(),
        byte_offset: Some(offset.into()),
        byte_stride: None,
        extensions: Default::default(),
        extras: Default::default(),
        name: None,
        target: None,
    }
}

/// Minimal document holding one binary buffer, its views and the accessors
pub fn build_root(
    buffer_data: &[u8],
    views: Vec<json::buffer::View>,
    accessors: Vec<json::Accessor>,
) -> json::Root {
    json::Root {
        accessors,
        asset: json::Asset {
            copyright: None,
            extensions: Default::default(),
            extras: Default::default(),
            generator: Some("gltf-accessor tests".to_string()),
            min_version: None,
            version: "2.0".to_string(),
        },
        buffers: vec![json::Buffer {
            byte_length: buffer_data.len().into(),
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            uri: None,
        }],
        buffer_views: views,
        ..Default::default()
    }
}

/// Assemble the final GLB binary
pub fn assemble_glb(root: &json::Root, buffer_data: &[u8]) -> Vec<u8> {
    let json_string = json::serialize::to_string(root).expect("Failed to serialize JSON");
    let json_bytes = json_string.as_bytes();

    let json_padding = (4 - (json_bytes.len() % 4)) % 4;
    let json_chunk_length = json_bytes.len() + json_padding;

    let buffer_padding = (4 - (buffer_data.len() % 4)) % 4;
    let buffer_chunk_length = buffer_data.len() + buffer_padding;

    let total_length = 12 + 8 + json_chunk_length + 8 + buffer_chunk_length;
    let mut glb = Vec::with_capacity(total_length);

    // Header
    glb.extend_from_slice(b"glTF");
    glb.extend_from_slice(&2u32.to_le_bytes());
    glb.extend_from_slice(&(total_length as u32).to_le_bytes());

    // JSON chunk
    glb.extend_from_slice(&(json_chunk_length as u32).to_le_bytes());
    glb.extend_from_slice(&0x4E4F534Au32.to_le_bytes());
    glb.extend_from_slice(json_bytes);
    glb.extend(std::iter::repeat_n(0x20u8, json_padding));

    // BIN chunk
    glb.extend_from_slice(&(buffer_chunk_length as u32).to_le_bytes());
    glb.extend_from_slice(&0x004E4942u32.to_le_bytes());
    glb.extend_from_slice(buffer_data);
    glb.extend(std::iter::repeat_n(0u8, buffer_padding));

    glb
}

/// Little-endian f32 values starting at `offset`
pub fn read_f32s(bytes: &[u8], offset: usize, count: usize) -> Vec<f32> {
    (0..count)
        .map(|i| {
            let at = offset + i * 4;
            bytemuck::pod_read_unaligned::<f32>(&bytes[at..at + 4])
        })
        .collect()
}

/// Little-endian u16 values starting at `offset`
pub fn read_u16s(bytes: &[u8], offset: usize, count: usize) -> Vec<u16> {
    (0..count)
        .map(|i| {
            let at = offset + i * 2;
            bytemuck::pod_read_unaligned::<u16>(&bytes[at..at + 2])
        })
        .collect()
}
