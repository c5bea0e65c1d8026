use std::f32::consts::TAU;

use crate::config::AnimationParams;
use crate::error::Result;
use crate::math::Point;
use crate::store::{ShapeId, ShapeStore};

use super::{PathCursor, Trajectory};

const TEMPLATE: &str = "template";
const ANIMATED: &str = "animated copy";

/// Moves and spins a working copy of a template shape.
///
/// The animated copy lives in the [`ShapeStore`] so other animations can use
/// it as their trajectory. This animation is its only writer.
///
/// Dropping an animation leaves its copy in the store, where dependents keep
/// following a frozen outline. Call [`PolygonAnimation::release`] (or
/// [`super::AnimationChain::clear`]) when it is no longer needed.
#[must_use = "the animated copy stays in the store until `release` is called"]
#[derive(Debug, Clone)]
pub struct PolygonAnimation {
    template: ShapeId,
    animated: ShapeId,
    /// Fixed-point trajectory restored on reset, or the trajectory's first
    /// vertex at construction for shape trajectories.
    anchor: Point,
    trajectory: Trajectory,
    cursor: PathCursor,
    /// Total applied rotation modulo a full turn.
    accumulated_rotation: f32,
    /// Trajectory speed in `speed_scale` units per second.
    pub moving_speed: f32,
    /// Angular velocity in radians per second.
    pub rotation_speed: f32,
    pub speed_scale: f32,
}

impl PolygonAnimation {
    /// Animates a copy of `template` that stays at the template's centre.
    ///
    /// # Errors
    ///
    /// Returns an error if `template` is not in the store.
    pub fn new(store: &mut ShapeStore, template: ShapeId) -> Result<Self> {
        let shape = store.shape_as(template, TEMPLATE)?.clone();
        let anchor = shape.center();
        let animated = store.insert(shape);
        Ok(Self::from_parts(template, animated, anchor, Trajectory::Point(anchor)))
    }

    /// Animates a copy of `template` whose centre walks along the outline of
    /// `trajectory`.
    ///
    /// # Errors
    ///
    /// Returns an error if `template` is not in the store.
    pub fn with_trajectory(
        store: &mut ShapeStore,
        template: ShapeId,
        trajectory: ShapeId,
    ) -> Result<Self> {
        let shape = store.shape_as(template, TEMPLATE)?.clone();
        let anchor = store
            .get(trajectory)
            .map_or_else(Point::origin, |t| t.point(0));
        let animated = store.insert(shape);
        Ok(Self::from_parts(template, animated, anchor, Trajectory::Shape(trajectory)))
    }

    fn from_parts(
        template: ShapeId,
        animated: ShapeId,
        anchor: Point,
        trajectory: Trajectory,
    ) -> Self {
        Self {
            template,
            animated,
            anchor,
            trajectory,
            cursor: PathCursor::new(),
            accumulated_rotation: 0.0,
            moving_speed: 0.0,
            rotation_speed: 0.0,
            speed_scale: AnimationParams::default().speed_scale,
        }
    }

    /// Sets both speeds.
    pub fn with_speeds(mut self, moving_speed: f32, rotation_speed: f32) -> Self {
        self.moving_speed = moving_speed;
        self.rotation_speed = rotation_speed;
        self
    }

    /// Applies construction parameters.
    pub fn with_params(mut self, params: &AnimationParams) -> Self {
        self.speed_scale = params.speed_scale;
        self
    }

    /// The template this animation copies on reset.
    #[must_use]
    pub fn template(&self) -> ShapeId {
        self.template
    }

    /// The working copy, usable as another animation's trajectory.
    #[must_use]
    pub fn animated(&self) -> ShapeId {
        self.animated
    }

    #[must_use]
    pub fn trajectory(&self) -> Trajectory {
        self.trajectory
    }

    /// Replaces the trajectory and rewinds the cursor.
    pub fn set_trajectory(&mut self, trajectory: impl Into<Trajectory>) {
        self.trajectory = trajectory.into();
        self.cursor.reset();
    }

    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    #[must_use]
    pub fn cursor(&self) -> PathCursor {
        self.cursor
    }

    #[must_use]
    pub fn accumulated_rotation(&self) -> f32 {
        self.accumulated_rotation
    }

    /// Advances along the trajectory by `moving_speed * speed_scale * dt` and
    /// returns the new centre.
    ///
    /// A removed trajectory shape yields the origin.
    pub fn interpolator_step(&mut self, store: &ShapeStore, dt: f32) -> Point {
        let speed = self.moving_speed * self.speed_scale * dt;
        self.trajectory.advance(store, &mut self.cursor, speed)
    }

    /// Advances one frame: recentres the animated copy on the trajectory, then
    /// rotates it by `rotation_speed * dt`.
    ///
    /// When this animation's trajectory is another animation's output, that
    /// animation must be updated first in the same frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the animated copy was removed from the store.
    pub fn update(&mut self, store: &mut ShapeStore, dt: f32) -> Result<()> {
        store.shape_as(self.animated, ANIMATED)?;

        let center = self.interpolator_step(store, dt);
        let angle = self.rotation_speed * dt;

        let shape = store.shape_mut_as(self.animated, ANIMATED)?;
        shape.set_center(center);
        shape.rotate(angle);

        self.accumulated_rotation = (self.accumulated_rotation + angle) % TAU;
        Ok(())
    }

    /// Restores the animated copy from the template's current state.
    ///
    /// A fixed-point trajectory returns to its anchor and the cursor rewinds.
    /// This copies rather than undoes, so no rotation error survives.
    ///
    /// # Errors
    ///
    /// Returns an error if the template or the animated copy was removed.
    pub fn reset(&mut self, store: &mut ShapeStore) -> Result<()> {
        let restored = store.shape_as(self.template, TEMPLATE)?.clone();
        *store.shape_mut_as(self.animated, ANIMATED)? = restored;
        self.rewind();
        Ok(())
    }

    /// Restores the animated copy by rotating back by the accumulated angle
    /// and recentring on the anchor.
    ///
    /// Unlike [`PolygonAnimation::reset`] this ignores the template and
    /// inherits the floating-point error of every applied rotation, so the
    /// outline only approximately matches its initial orientation.
    ///
    /// # Errors
    ///
    /// Returns an error if the animated copy was removed.
    pub fn reset_by_rotation_counter(&mut self, store: &mut ShapeStore) -> Result<()> {
        let shape = store.shape_mut_as(self.animated, ANIMATED)?;
        shape.rotate(-self.accumulated_rotation);
        shape.set_center(self.anchor);
        self.rewind();
        Ok(())
    }

    fn rewind(&mut self) {
        if let Trajectory::Point(p) = &mut self.trajectory {
            *p = self.anchor;
        }
        self.cursor.reset();
        self.accumulated_rotation = 0.0;
    }

    /// Removes the animated copy from the store. Animations that use it as
    /// their trajectory fall back to the origin.
    pub fn release(self, store: &mut ShapeStore) {
        store.remove(self.animated);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::{PlanarError, StoreError};
    use crate::geometry::{Ellipse, Polygon, Shape};
    use crate::math::point_2d::distance;

    const DT: f32 = 1.0 / 60.0;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    fn square_at(x: f32, y: f32, side: f32) -> Polygon {
        Polygon::from_points([
            p(x, y),
            p(x + side, y),
            p(x + side, y + side),
            p(x, y + side),
        ])
    }

    #[test]
    fn fixed_point_animation_spins_in_place() {
        let mut store = ShapeStore::new();
        let template = store.insert(square_at(0.0, 0.0, 10.0));
        let mut anim = PolygonAnimation::new(&mut store, template)
            .unwrap()
            .with_speeds(3.0, 1.0);
        assert_eq!(anim.anchor(), p(5.0, 5.0));
        assert_ne!(anim.animated(), template);

        for _ in 0..30 {
            anim.update(&mut store, DT).unwrap();
        }

        let animated = store.shape(anim.animated()).unwrap();
        assert_abs_diff_eq!(animated.center().x, 5.0, epsilon = 1e-4);
        assert_abs_diff_eq!(animated.center().y, 5.0, epsilon = 1e-4);
        assert!(distance(animated.point(0), p(0.0, 0.0)) > 1.0);
        // The template is untouched.
        assert_eq!(store.shape(template).unwrap().point(0), p(0.0, 0.0));
        assert_abs_diff_eq!(anim.accumulated_rotation(), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn walks_trajectory_at_scaled_speed() {
        let mut store = ShapeStore::new();
        let path = store.insert(square_at(0.0, 0.0, 100.0));
        let template = store.insert(square_at(-1.0, -1.0, 2.0));
        let mut anim = PolygonAnimation::with_trajectory(&mut store, template, path)
            .unwrap()
            .with_speeds(1.0, 0.0);
        assert_eq!(anim.anchor(), p(0.0, 0.0));

        // 1 * 100 * 0.25 = 25 units along the first edge.
        anim.update(&mut store, 0.25).unwrap();
        let c = store.shape(anim.animated()).unwrap().center();
        assert_abs_diff_eq!(c.x, 25.0, epsilon = 1e-4);
        assert_abs_diff_eq!(c.y, 0.0, epsilon = 1e-4);
        assert_eq!(anim.cursor().edge_index(), 0);
    }

    #[test]
    fn custom_speed_scale() {
        let mut store = ShapeStore::new();
        let path = store.insert(square_at(0.0, 0.0, 100.0));
        let template = store.insert(square_at(0.0, 0.0, 2.0));
        let params = AnimationParams {
            speed_scale: 10.0,
            ..AnimationParams::default()
        };
        let mut anim = PolygonAnimation::with_trajectory(&mut store, template, path)
            .unwrap()
            .with_params(&params)
            .with_speeds(2.0, 0.0);
        let q = anim.interpolator_step(&store, 1.0);
        assert_abs_diff_eq!(q.x, 20.0, epsilon = 1e-4);
        assert_abs_diff_eq!(q.y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn dangling_trajectory_returns_origin() {
        let mut store = ShapeStore::new();
        let path = store.insert(square_at(50.0, 50.0, 100.0));
        let template = store.insert(square_at(0.0, 0.0, 2.0));
        let mut anim = PolygonAnimation::with_trajectory(&mut store, template, path)
            .unwrap()
            .with_speeds(1.0, 0.5);

        anim.update(&mut store, DT).unwrap();
        store.remove(path);

        assert!(anim.trajectory().is_dangling(&store));
        assert_eq!(anim.interpolator_step(&store, DT), Point::origin());
        anim.update(&mut store, DT).unwrap();
        let c = store.shape(anim.animated()).unwrap().center();
        assert_abs_diff_eq!(c.x, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(c.y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn removed_animated_copy_is_an_error() {
        let mut store = ShapeStore::new();
        let template = store.insert(square_at(0.0, 0.0, 2.0));
        let mut anim = PolygonAnimation::new(&mut store, template).unwrap();
        store.remove(anim.animated());
        for err in [
            anim.update(&mut store, DT).unwrap_err(),
            anim.reset(&mut store).unwrap_err(),
            anim.reset_by_rotation_counter(&mut store).unwrap_err(),
        ] {
            assert!(matches!(
                err,
                PlanarError::Store(StoreError::ShapeNotFound("animated copy"))
            ));
        }
    }

    #[test]
    fn reset_names_missing_template() {
        let mut store = ShapeStore::new();
        let template = store.insert(square_at(0.0, 0.0, 2.0));
        let mut anim = PolygonAnimation::new(&mut store, template).unwrap();
        store.remove(template);
        let err = anim.reset(&mut store).unwrap_err();
        assert_eq!(err.to_string(), "shape not found: template");
        anim.release(&mut store);
    }

    #[test]
    fn missing_template_is_an_error() {
        let mut store = ShapeStore::new();
        let template = store.insert(Polygon::new());
        store.remove(template);
        assert!(PolygonAnimation::new(&mut store, template).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn reset_restores_template_and_fixed_point() {
        let mut store = ShapeStore::new();
        let template = store.insert(square_at(0.0, 0.0, 10.0));
        let mut anim = PolygonAnimation::new(&mut store, template)
            .unwrap()
            .with_speeds(1.0, 2.0);

        anim.set_trajectory(p(300.0, 300.0));
        for _ in 0..45 {
            anim.update(&mut store, DT).unwrap();
        }
        let c = store.shape(anim.animated()).unwrap().center();
        assert_abs_diff_eq!(c.x, 300.0, epsilon = 1e-3);
        assert_abs_diff_eq!(c.y, 300.0, epsilon = 1e-3);

        anim.reset(&mut store).unwrap();
        assert_eq!(store.shape(anim.animated()).unwrap(), store.shape(template).unwrap());
        assert_eq!(anim.trajectory(), Trajectory::Point(p(5.0, 5.0)));
        assert_eq!(anim.cursor(), PathCursor::new());
        assert_eq!(anim.accumulated_rotation(), 0.0);
    }

    #[test]
    fn reset_follows_current_template() {
        let mut store = ShapeStore::new();
        let template = store.insert(square_at(0.0, 0.0, 10.0));
        let mut anim = PolygonAnimation::new(&mut store, template).unwrap();

        store
            .shape_mut(template)
            .unwrap()
            .shift(crate::math::Vector::new(40.0, 0.0));
        anim.reset(&mut store).unwrap();

        assert_eq!(
            store.shape(anim.animated()).unwrap().point(0),
            p(40.0, 0.0)
        );
    }

    #[test]
    fn reset_rewinds_trajectory_cursor() {
        let mut store = ShapeStore::new();
        let path = store.insert(square_at(0.0, 0.0, 100.0));
        let template = store.insert(square_at(0.0, 0.0, 2.0));
        let mut anim = PolygonAnimation::with_trajectory(&mut store, template, path)
            .unwrap()
            .with_speeds(2.0, 0.0);
        for _ in 0..20 {
            anim.update(&mut store, DT).unwrap();
        }
        assert_ne!(anim.cursor(), PathCursor::new());
        anim.reset(&mut store).unwrap();
        assert_eq!(anim.cursor(), PathCursor::new());
        assert_eq!(anim.trajectory(), Trajectory::Shape(path));
    }

    #[test]
    fn rotation_counter_reset_only_approximates_snapshot() {
        let mut store = ShapeStore::new();
        let template: Shape = Ellipse::new(p(400.0, 300.0), 200.0, 100.0, 40).unwrap().into();
        let template = store.insert(template);

        let mut by_snapshot = PolygonAnimation::new(&mut store, template)
            .unwrap()
            .with_speeds(0.0, 1.7);
        let mut by_counter = PolygonAnimation::new(&mut store, template)
            .unwrap()
            .with_speeds(0.0, 1.7);

        for _ in 0..600 {
            by_snapshot.update(&mut store, DT).unwrap();
            by_counter.update(&mut store, DT).unwrap();
        }

        by_snapshot.reset(&mut store).unwrap();
        by_counter.reset_by_rotation_counter(&mut store).unwrap();

        let initial = store.shape(template).unwrap().clone();
        let snap = store.shape(by_snapshot.animated()).unwrap();
        let counted = store.shape(by_counter.animated()).unwrap();

        // The snapshot reset is exact.
        assert_eq!(snap, &initial);

        // The counter reset carries accumulated rotation error.
        let worst = initial
            .outline()
            .vertices()
            .iter()
            .zip(counted.outline().vertices())
            .map(|(a, b)| distance(*a, *b))
            .fold(0.0_f32, f32::max);
        assert_ne!(counted, &initial);
        assert!(worst > 0.0);
        assert!(worst < 0.5, "counter reset drifted {worst}");
        assert!(distance(counted.center(), initial.center()) < 1e-3);
    }
}
