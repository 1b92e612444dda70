//! Caller-side level-of-detail control for interactive tessellation.

use crate::error::MeshError;
use crate::sphere::{SphereMesh, tessellate_sphere};

/// Highest level offered interactively; level 8 already yields 262 144 faces.
pub const DEFAULT_MAX_LEVEL: u32 = 8;

/// A subdivision level clamped to `0..=max`.
///
/// The tessellator itself accepts any non-negative level; this type keeps
/// increment/decrement controls inside an interactive range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelOfDetail {
    level: u32,
    max: u32,
}

impl LevelOfDetail {
    /// Create a level, clamping `level` to `0..=max`.
    pub fn new(level: i32, max: u32) -> Self {
        let level = level.clamp(0, max.min(i32::MAX as u32) as i32) as u32;
        Self { level, max }
    }

    /// Current level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Upper bound.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Step up one level. Returns `true` if the level changed.
    pub fn increment(&mut self) -> bool {
        if self.level < self.max {
            self.level += 1;
            true
        } else {
            false
        }
    }

    /// Step down one level. Returns `true` if the level changed.
    pub fn decrement(&mut self) -> bool {
        if self.level > 0 {
            self.level -= 1;
            true
        } else {
            false
        }
    }

    /// Tessellate the sphere at the current level.
    pub fn tessellate(&self) -> Result<SphereMesh, MeshError> {
        tessellate_sphere(self.level as i32)
    }
}

impl Default for LevelOfDetail {
    fn default() -> Self {
        Self::new(0, DEFAULT_MAX_LEVEL)
    }
}
