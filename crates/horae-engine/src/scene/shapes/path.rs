use crate::geom::{Path, Transform};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled closed-path draw payload.
///
/// `transform` is the shape's local coordinate frame, applied at raster
/// time; the path itself stays in local coordinates. This keeps rotated
/// shapes (clock hands) free of any shared transform state.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCmd {
    pub path: Path,
    pub transform: Transform,
    pub color: Color,
}

impl DrawList {
    /// Records a filled path placed by `transform`.
    #[inline]
    pub fn push_path(&mut self, z: ZIndex, path: Path, transform: Transform, color: Color) {
        self.push(z, DrawCmd::Path(PathCmd { path, transform, color }));
    }
}
