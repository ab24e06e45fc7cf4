//! Index-addressed accessor storage
//!
//! Accessors and buffer views never hold references to each other. A buffer
//! view is named by its [`BufferViewId`]; an accessor pushed into
//! [`Accessors`] is named by the [`AccessorId`] it gets back.

use crate::accessor::AccessorData;
use crate::sparse::SparseAccessorData;
use gltf_json as json;

/// Index of a buffer view allocated elsewhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferViewId(pub u32);

impl BufferViewId {
    pub fn as_json_index(&self) -> json::Index<json::buffer::View> {
        json::Index::new(self.0)
    }
}

/// Accessor index returned by [`Accessors::push`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccessorId(pub u32);

impl AccessorId {
    pub fn as_json_index(&self) -> json::Index<json::Accessor> {
        json::Index::new(self.0)
    }
}

/// Either kind of accessor
#[derive(Debug, Clone, PartialEq)]
pub enum Accessor {
    Dense(AccessorData),
    Sparse(SparseAccessorData),
}

impl Accessor {
    pub fn serialize(&self) -> json::Value {
        match self {
            Accessor::Dense(dense) => dense.serialize(),
            Accessor::Sparse(sparse) => sparse.serialize(),
        }
    }

    /// `None` for a sparse accessor missing either buffer view
    pub fn to_gltf_accessor(&self) -> Option<json::Accessor> {
        match self {
            Accessor::Dense(dense) => Some(dense.to_gltf_accessor()),
            Accessor::Sparse(sparse) => sparse.to_gltf_accessor(),
        }
    }
}

impl From<AccessorData> for Accessor {
    fn from(accessor: AccessorData) -> Self {
        Accessor::Dense(accessor)
    }
}

impl From<SparseAccessorData> for Accessor {
    fn from(accessor: SparseAccessorData) -> Self {
        Accessor::Sparse(accessor)
    }
}

/// Append-only accessor list, in glTF `accessors` order
#[derive(Debug, Clone, Default)]
pub struct Accessors {
    items: Vec<Accessor>,
}

impl Accessors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `accessor` and return its index
    pub fn push(&mut self, accessor: impl Into<Accessor>) -> AccessorId {
        let id = AccessorId(self.items.len() as u32);
        self.items.push(accessor.into());
        id
    }

    /// Index the next pushed accessor will get
    pub fn next_id(&self) -> AccessorId {
        AccessorId(self.items.len() as u32)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: AccessorId) -> Option<&Accessor> {
        self.items.get(id.0 as usize)
    }

    pub fn dense_mut(&mut self, id: AccessorId) -> Option<&mut AccessorData> {
        match self.items.get_mut(id.0 as usize) {
            Some(Accessor::Dense(dense)) => Some(dense),
            _ => None,
        }
    }

    pub fn sparse_mut(&mut self, id: AccessorId) -> Option<&mut SparseAccessorData> {
        match self.items.get_mut(id.0 as usize) {
            Some(Accessor::Sparse(sparse)) => Some(sparse),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (AccessorId, &Accessor)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, accessor)| (AccessorId(i as u32), accessor))
    }

    /// The whole glTF `accessors` array
    pub fn serialize(&self) -> json::Value {
        json::Value::Array(self.items.iter().map(Accessor::serialize).collect())
    }

    /// Typed records for a `gltf_json::Root`, or `None` if any sparse
    /// accessor is missing a buffer view
    pub fn to_gltf_accessors(&self) -> Option<Vec<json::Accessor>> {
        self.items.iter().map(Accessor::to_gltf_accessor).collect()
    }
}
