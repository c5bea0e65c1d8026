use slotmap::SlotMap;

use crate::error::StoreError;
use crate::geometry::Shape;

slotmap::new_key_type! {
    /// Generational handle to a shape in the [`ShapeStore`].
    pub struct ShapeId;
}

/// Central arena that owns every shape.
///
/// Animations and trajectories refer to shapes by [`ShapeId`]. A removed
/// shape's id never resolves again, which is how dangling trajectories are
/// detected.
#[derive(Debug, Default)]
pub struct ShapeStore {
    shapes: SlotMap<ShapeId, Shape>,
}

impl ShapeStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a shape and returns its id.
    pub fn insert(&mut self, shape: impl Into<Shape>) -> ShapeId {
        self.shapes.insert(shape.into())
    }

    /// Removes a shape, returning it if it was still alive.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        self.shapes.remove(id)
    }

    #[must_use]
    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains_key(id)
    }

    /// Returns the shape if it is still alive.
    #[must_use]
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    /// Returns a reference to the shape, or an error if it was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not found in the store.
    pub fn shape(&self, id: ShapeId) -> Result<&Shape, StoreError> {
        self.shape_as(id, "shape")
    }

    /// Like [`ShapeStore::shape`], naming the missing shape by `role` in the error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShapeNotFound`] carrying `role`.
    pub fn shape_as(&self, id: ShapeId, role: &'static str) -> Result<&Shape, StoreError> {
        self.shapes.get(id).ok_or(StoreError::ShapeNotFound(role))
    }

    /// Returns a mutable reference to the shape, or an error if it was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is not found in the store.
    pub fn shape_mut(&mut self, id: ShapeId) -> Result<&mut Shape, StoreError> {
        self.shape_mut_as(id, "shape")
    }

    /// Like [`ShapeStore::shape_mut`], naming the missing shape by `role`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShapeNotFound`] carrying `role`.
    pub fn shape_mut_as(
        &mut self,
        id: ShapeId,
        role: &'static str,
    ) -> Result<&mut Shape, StoreError> {
        self.shapes.get_mut(id).ok_or(StoreError::ShapeNotFound(role))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterates all live shapes.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Shape)> {
        self.shapes.iter()
    }
}
