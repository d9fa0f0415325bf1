//! Fixed line-strip geometry.
//!
//! Positions are in model space (x right, y up) and are placed in front of
//! the camera by the sequencer's transforms. Colors are straight RGB.

const RED: [f32; 3] = [1.0, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];

/// An immutable vertex table paired 1:1 with per-vertex colors.
#[derive(Debug, PartialEq)]
pub struct Geometry {
    pub name: &'static str,
    pub positions: &'static [[f32; 2]],
    pub colors: &'static [[f32; 3]],
}

impl Geometry {
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.positions.len() as u32
    }
}

/// The "pipe": a wide W shape with a flat bottom.
pub static PIPE: Geometry = Geometry {
    name: "pipe",
    positions: &[
        [0.0, 0.0],
        [-1.0, 0.0],
        [-1.0, 1.0],
        [-0.5, 1.0],
        [0.0, 0.0],
        [0.5, 1.0],
        [1.0, 1.0],
        [1.0, 0.0],
        [0.0, 0.0],
    ],
    colors: &[RED; 9],
};

/// The "torch": a small cap with a vertical stem.
pub static TORCH: Geometry = Geometry {
    name: "torch",
    positions: &[
        [0.0, 0.0],
        [-0.05, 0.0],
        [-0.025, 0.05],
        [0.0, 0.05],
        [0.025, 0.05],
        [0.05, 0.0],
        [0.0, 0.0],
        [0.0, 0.5],
    ],
    colors: &[GREEN; 8],
};
