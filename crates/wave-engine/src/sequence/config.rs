/// Projection parameters for the two draws of a frame.
///
/// The pipe and torch carry separate aspect ratios. The standalone window
/// projects both with 4:3, while the embedded item projects the pipe with
/// 3:4 and the torch with 4:3. Both layouts are kept as presets.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SequencerConfig {
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub pipe_aspect: f32,
    pub torch_aspect: f32,
}

impl SequencerConfig {
    /// Standalone window layout (4:3 for both draws).
    pub const fn window() -> Self {
        Self {
            fov_y_degrees: 60.0,
            near: 0.1,
            far: 100.0,
            pipe_aspect: 4.0 / 3.0,
            torch_aspect: 4.0 / 3.0,
        }
    }

    /// Embedded item layout (3:4 pipe, 4:3 torch).
    pub const fn item() -> Self {
        Self {
            pipe_aspect: 3.0 / 4.0,
            ..Self::window()
        }
    }
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self::window()
    }
}
