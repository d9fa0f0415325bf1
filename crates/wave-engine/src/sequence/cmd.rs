use glam::Mat4;

use crate::geometry::Geometry;

/// Primitive assembly for a draw.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Primitive {
    LineStrip,
}

/// A single draw: transform + geometry table + primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCmd {
    pub transform: Mat4,
    pub geometry: &'static Geometry,
    pub primitive: Primitive,
}

impl DrawCmd {
    #[inline]
    pub fn line_strip(transform: Mat4, geometry: &'static Geometry) -> Self {
        Self {
            transform,
            geometry,
            primitive: Primitive::LineStrip,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.geometry.vertex_count()
    }
}

/// Recorded draw stream for a frame, in submission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, DrawCmd> {
        self.cmds.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[DrawCmd] {
        &self.cmds
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCmd;
    type IntoIter = std::slice::Iter<'a, DrawCmd>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
