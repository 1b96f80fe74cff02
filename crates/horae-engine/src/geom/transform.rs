use crate::coords::Vec2;

/// Local coordinate frame for a drawn shape: a rotation about the origin
/// followed by a translation.
///
/// Transforms are passed by value alongside the geometry they place, so
/// nothing has to save and restore shared graphics-context state between
/// shapes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    /// Rotation in radians. Positive values rotate clockwise in the y-down
    /// screen coordinate system.
    pub rotation: f32,
    pub translation: Vec2,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        rotation: 0.0,
        translation: Vec2::zero(),
    };

    #[inline]
    pub const fn new(rotation: f32, translation: Vec2) -> Self {
        Self { rotation, translation }
    }

    /// Maps a point from the local frame into the parent frame.
    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        let (sin, cos) = self.rotation.sin_cos();
        Vec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos) + self.translation
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
