use tracing::debug;

use crate::error::Result;
use crate::render::{Color, Renderer};
use crate::store::ShapeStore;

use super::PolygonAnimation;

/// Animations updated in root-to-dependent order.
///
/// An animation whose trajectory is another animation's output must come
/// after it, otherwise it reads last frame's outline and lags one frame.
#[derive(Debug, Default)]
pub struct AnimationChain {
    animations: Vec<PolygonAnimation>,
}

impl AnimationChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an animation and returns its index.
    pub fn push(&mut self, animation: PolygonAnimation) -> usize {
        self.animations.push(animation);
        if !self.is_ordered() {
            debug!(
                index = self.animations.len() - 1,
                "animation chain reads an output that updates later in the frame"
            );
        }
        self.animations.len() - 1
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PolygonAnimation> {
        self.animations.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut PolygonAnimation> {
        self.animations.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PolygonAnimation> {
        self.animations.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PolygonAnimation> {
        self.animations.iter_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Whether no animation reads the output of an animation after it.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.animations.iter().enumerate().all(|(i, anim)| {
            anim.trajectory().shape_id().is_none_or(|id| {
                self.animations[i + 1..]
                    .iter()
                    .all(|later| later.animated() != id)
            })
        })
    }

    /// Updates every animation, roots first.
    ///
    /// # Errors
    ///
    /// Returns an error if an animated copy was removed from the store.
    pub fn update(&mut self, store: &mut ShapeStore, dt: f32) -> Result<()> {
        for animation in &mut self.animations {
            animation.update(store, dt)?;
        }
        Ok(())
    }

    /// Updates every animation in reverse order, dependents first.
    ///
    /// Dependents then trail their roots by one frame.
    ///
    /// # Errors
    ///
    /// Returns an error if an animated copy was removed from the store.
    pub fn update_reversed(&mut self, store: &mut ShapeStore, dt: f32) -> Result<()> {
        for animation in self.animations.iter_mut().rev() {
            animation.update(store, dt)?;
        }
        Ok(())
    }

    /// Resets every animation from its template.
    ///
    /// # Errors
    ///
    /// Returns an error if a template or animated copy was removed.
    pub fn reset_all(&mut self, store: &mut ShapeStore) -> Result<()> {
        for animation in &mut self.animations {
            animation.reset(store)?;
        }
        Ok(())
    }

    /// Removes an animation and its animated copy. Dependents fall back to
    /// the origin.
    pub fn remove(&mut self, index: usize, store: &mut ShapeStore) -> bool {
        if index >= self.animations.len() {
            return false;
        }
        self.animations.remove(index).release(store);
        true
    }

    /// Removes every animation and releases its animated copy, leaving only
    /// the templates in the store.
    pub fn clear(&mut self, store: &mut ShapeStore) {
        debug!(count = self.animations.len(), "releasing animation chain");
        for animation in self.animations.drain(..) {
            animation.release(store);
        }
    }

    /// Draws every animated copy still in the store.
    pub fn draw<R: Renderer + ?Sized>(
        &self,
        store: &ShapeStore,
        renderer: &mut R,
        line: Color,
        point: Color,
    ) {
        for animation in &self.animations {
            if let Some(shape) = store.get(animation.animated()) {
                shape.draw(renderer, line, point);
            }
        }
    }
}
