//! glTF element type descriptors
//!
//! A [`GlType`] pairs a component encoding with an element shape and knows
//! how wide one element is and how to write it. [`Element`] is implemented
//! by the Rust values that can be fed into an accessor.

use crate::zero::{scalar_is_zero, vector_is_zero};
use gltf_json as json;
use std::fmt;

/// Primitive encoding of a single component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentType {
    I8,
    U8,
    I16,
    U16,
    U32,
    F32,
}

impl ComponentType {
    /// OpenGL enum value written as `componentType`
    pub const fn gl_code(self) -> u32 {
        match self {
            ComponentType::I8 => 5120,
            ComponentType::U8 => 5121,
            ComponentType::I16 => 5122,
            ComponentType::U16 => 5123,
            ComponentType::U32 => 5125,
            ComponentType::F32 => 5126,
        }
    }

    /// Size of one component in bytes
    pub const fn size(self) -> usize {
        match self {
            ComponentType::I8 | ComponentType::U8 => 1,
            ComponentType::I16 | ComponentType::U16 => 2,
            ComponentType::U32 | ComponentType::F32 => 4,
        }
    }

    /// Whether this type may encode sparse indices
    pub const fn is_unsigned_int(self) -> bool {
        matches!(
            self,
            ComponentType::U8 | ComponentType::U16 | ComponentType::U32
        )
    }

    /// Largest integral value the component can hold exactly
    pub const fn max_integer(self) -> u64 {
        match self {
            ComponentType::I8 => i8::MAX as u64,
            ComponentType::U8 => u8::MAX as u64,
            ComponentType::I16 => i16::MAX as u64,
            ComponentType::U16 => u16::MAX as u64,
            ComponentType::U32 => u32::MAX as u64,
            // f32 mantissa
            ComponentType::F32 => 1 << 24,
        }
    }

    /// Little-endian encode `value` into `dest` (exactly `size()` bytes)
    fn write(self, dest: &mut [u8], value: f64) {
        match self {
            ComponentType::I8 => dest.copy_from_slice(&(value as i8).to_le_bytes()),
            ComponentType::U8 => dest.copy_from_slice(&(value as u8).to_le_bytes()),
            ComponentType::I16 => dest.copy_from_slice(&(value as i16).to_le_bytes()),
            ComponentType::U16 => dest.copy_from_slice(&(value as u16).to_le_bytes()),
            ComponentType::U32 => dest.copy_from_slice(&(value as u32).to_le_bytes()),
            ComponentType::F32 => dest.copy_from_slice(&(value as f32).to_le_bytes()),
        }
    }
}

impl From<ComponentType> for json::accessor::ComponentType {
    fn from(component: ComponentType) -> Self {
        match component {
            ComponentType::I8 => json::accessor::ComponentType::I8,
            ComponentType::U8 => json::accessor::ComponentType::U8,
            ComponentType::I16 => json::accessor::ComponentType::I16,
            ComponentType::U16 => json::accessor::ComponentType::U16,
            ComponentType::U32 => json::accessor::ComponentType::U32,
            ComponentType::F32 => json::accessor::ComponentType::F32,
        }
    }
}

/// Element arity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Scalar,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    Mat3,
    Mat4,
}

impl Shape {
    /// Tag written as the accessor `type`
    pub const fn tag(self) -> &'static str {
        match self {
            Shape::Scalar => "SCALAR",
            Shape::Vec2 => "VEC2",
            Shape::Vec3 => "VEC3",
            Shape::Vec4 => "VEC4",
            Shape::Mat2 => "MAT2",
            Shape::Mat3 => "MAT3",
            Shape::Mat4 => "MAT4",
        }
    }

    pub const fn component_count(self) -> usize {
        match self {
            Shape::Scalar => 1,
            Shape::Vec2 => 2,
            Shape::Vec3 => 3,
            Shape::Vec4 | Shape::Mat2 => 4,
            Shape::Mat3 => 9,
            Shape::Mat4 => 16,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<Shape> for json::accessor::Type {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Scalar => json::accessor::Type::Scalar,
            Shape::Vec2 => json::accessor::Type::Vec2,
            Shape::Vec3 => json::accessor::Type::Vec3,
            Shape::Vec4 => json::accessor::Type::Vec4,
            Shape::Mat2 => json::accessor::Type::Mat2,
            Shape::Mat3 => json::accessor::Type::Mat3,
            Shape::Mat4 => json::accessor::Type::Mat4,
        }
    }
}

/// Component type plus shape of one accessor element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlType {
    pub component: ComponentType,
    pub shape: Shape,
}

impl GlType {
    pub const FLOAT: GlType = GlType::new(ComponentType::F32, Shape::Scalar);
    pub const VEC2_FLOAT: GlType = GlType::new(ComponentType::F32, Shape::Vec2);
    pub const VEC3_FLOAT: GlType = GlType::new(ComponentType::F32, Shape::Vec3);
    pub const VEC4_FLOAT: GlType = GlType::new(ComponentType::F32, Shape::Vec4);
    pub const MAT4_FLOAT: GlType = GlType::new(ComponentType::F32, Shape::Mat4);
    pub const UNSIGNED_BYTE: GlType = GlType::new(ComponentType::U8, Shape::Scalar);
    pub const UNSIGNED_SHORT: GlType = GlType::new(ComponentType::U16, Shape::Scalar);
    pub const UNSIGNED_INT: GlType = GlType::new(ComponentType::U32, Shape::Scalar);
    pub const VEC4_UNSIGNED_BYTE: GlType = GlType::new(ComponentType::U8, Shape::Vec4);
    pub const VEC4_UNSIGNED_SHORT: GlType = GlType::new(ComponentType::U16, Shape::Vec4);

    pub const fn new(component: ComponentType, shape: Shape) -> Self {
        Self { component, shape }
    }

    /// Bytes occupied by one encoded element
    pub const fn stride(&self) -> usize {
        self.component.size() * self.shape.component_count()
    }

    /// Encode `value` into `dest`, which must be exactly `stride()` bytes.
    ///
    /// Components are converted numerically to the component type; integer
    /// targets saturate.
    pub fn write<T: Element>(&self, dest: &mut [u8], value: &T) {
        debug_assert_eq!(T::SHAPE, self.shape);
        debug_assert_eq!(dest.len(), self.stride());

        let size = self.component.size();
        for (i, chunk) in dest.chunks_exact_mut(size).enumerate() {
            self.component.write(chunk, value.component(i));
        }
    }
}

/// A value that can be stored as one accessor element
pub trait Element: Copy {
    /// Shape the value is encoded as
    const SHAPE: Shape;

    /// Component `i` widened to f64 (`i < SHAPE.component_count()`)
    fn component(&self, i: usize) -> f64;

    /// Whether this element is omitted from sparse encodings
    fn is_zero(&self) -> bool {
        match Self::SHAPE {
            Shape::Scalar => scalar_is_zero(self.component(0)),
            shape => vector_is_zero((0..shape.component_count()).map(|i| self.component(i))),
        }
    }
}

macro_rules! impl_scalar_element {
    ($($t:ty),*) => {$(
        impl Element for $t {
            const SHAPE: Shape = Shape::Scalar;

            #[inline]
            fn component(&self, _i: usize) -> f64 {
                f64::from(*self)
            }
        }
    )*};
}

impl_scalar_element!(f32, u8, u16, u32);

macro_rules! impl_array_element {
    ($($t:ty, $n:literal => $shape:ident;)*) => {$(
        impl Element for [$t; $n] {
            const SHAPE: Shape = Shape::$shape;

            #[inline]
            fn component(&self, i: usize) -> f64 {
                f64::from(self[i])
            }
        }
    )*};
}

impl_array_element! {
    f32, 2 => Vec2;
    f32, 3 => Vec3;
    f32, 4 => Vec4;
    f32, 9 => Mat3;
    f32, 16 => Mat4;
    u8, 4 => Vec4;
    u16, 4 => Vec4;
}

#[cfg(feature = "glam")]
mod glam_impls {
    use super::{Element, Shape};

    macro_rules! impl_glam_element {
        ($($t:ty => $shape:ident;)*) => {$(
            impl Element for $t {
                const SHAPE: Shape = Shape::$shape;

                #[inline]
                fn component(&self, i: usize) -> f64 {
                    f64::from(self.to_array()[i])
                }
            }
        )*};
    }

    impl_glam_element! {
        glam::Vec2 => Vec2;
        glam::Vec3 => Vec3;
        glam::Vec4 => Vec4;
        glam::Quat => Vec4;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strides() {
        assert_eq!(GlType::FLOAT.stride(), 4);
        assert_eq!(GlType::VEC3_FLOAT.stride(), 12);
        assert_eq!(GlType::VEC4_UNSIGNED_BYTE.stride(), 4);
        assert_eq!(GlType::UNSIGNED_SHORT.stride(), 2);
        assert_eq!(GlType::MAT4_FLOAT.stride(), 64);
    }

    #[test]
    fn test_gl_codes_and_tags() {
        assert_eq!(ComponentType::F32.gl_code(), 5126);
        assert_eq!(ComponentType::U32.gl_code(), 5125);
        assert_eq!(ComponentType::U16.gl_code(), 5123);
        assert_eq!(Shape::Vec3.tag(), "VEC3");
        assert_eq!(Shape::Scalar.to_string(), "SCALAR");
    }

    #[test]
    fn test_write_float_vec3() {
        let mut dest = [0u8; 12];
        GlType::VEC3_FLOAT.write(&mut dest, &[1.0f32, -2.0, 0.5]);

        let mut expected = Vec::new();
        expected.extend_from_slice(&1.0f32.to_le_bytes());
        expected.extend_from_slice(&(-2.0f32).to_le_bytes());
        expected.extend_from_slice(&0.5f32.to_le_bytes());
        assert_eq!(dest.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_write_converts_component_type() {
        let mut dest = [0u8; 2];
        GlType::UNSIGNED_SHORT.write(&mut dest, &300u32);
        assert_eq!(dest, 300u16.to_le_bytes());

        let mut dest = [0u8; 1];
        GlType::UNSIGNED_BYTE.write(&mut dest, &300u32);
        assert_eq!(dest, [255]);
    }

    #[test]
    fn test_element_zero_rules() {
        assert!(0.00005f32.is_zero());
        assert!(!0.5f32.is_zero());
        assert!(0u32.is_zero());
        assert!(!1u32.is_zero());
        assert!([1e-5f32, -1e-5, 0.0].is_zero());
        assert!(![0.0f32, 0.0, 0.0, 0.01].is_zero());
        assert!([0u8; 4].is_zero());
    }

    #[cfg(feature = "glam")]
    #[test]
    fn test_glam_elements() {
        let mut dest = [0u8; 12];
        GlType::VEC3_FLOAT.write(&mut dest, &glam::Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(&dest[8..12], &3.0f32.to_le_bytes());

        assert!(glam::Vec3::ZERO.is_zero());
        assert!(!glam::Quat::IDENTITY.is_zero());
    }
}
