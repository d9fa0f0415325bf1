use glam::{Mat4, Vec3};

use crate::anim::{self, FrameState};
use crate::geometry::{PIPE, TORCH};

use super::{DrawCmd, DrawList, SequencerConfig};

/// Camera distance shared by both shapes.
const DEPTH: f32 = -2.0;

/// Vertical lift applied to the torch so it sits above the pipe.
const TORCH_LIFT: f32 = 0.5;

/// Builds the two draws of a frame.
#[derive(Debug, Clone, Default)]
pub struct DrawSequencer {
    config: SequencerConfig,
}

impl DrawSequencer {
    pub fn new(config: SequencerConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> SequencerConfig {
        self.config
    }

    /// Sequences one frame and returns the draw stream with the next state.
    pub fn frame(&self, state: FrameState) -> (DrawList, FrameState) {
        let mut list = DrawList::new();
        let next = self.record(state, &mut list);
        (list, next)
    }

    /// Like [`frame`](Self::frame) but records into a reused list.
    ///
    /// The pipe is recorded before the animation advances; the torch uses the
    /// offset derived from the incoming state.
    pub fn record(&self, state: FrameState, list: &mut DrawList) -> FrameState {
        list.clear();

        list.push(DrawCmd::line_strip(self.pipe_transform(), &PIPE));

        let (offset, next) = anim::advance(state);
        list.push(DrawCmd::line_strip(self.torch_transform(offset), &TORCH));

        next
    }

    pub fn pipe_transform(&self) -> Mat4 {
        self.projection(self.config.pipe_aspect) * Mat4::from_translation(Vec3::new(0.0, 0.0, DEPTH))
    }

    pub fn torch_transform(&self, offset_x: f32) -> Mat4 {
        self.projection(self.config.torch_aspect)
            * Mat4::from_translation(Vec3::new(offset_x, TORCH_LIFT, DEPTH))
    }

    fn projection(&self, aspect: f32) -> Mat4 {
        // wgpu clip space: depth in [0, 1].
        Mat4::perspective_rh(
            self.config.fov_y_degrees.to_radians(),
            aspect,
            self.config.near,
            self.config.far,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::Direction;
    use crate::sequence::Primitive;
    use approx::assert_abs_diff_eq;
    use glam::Vec4;

    fn project(m: Mat4, x: f32, y: f32) -> Vec3 {
        let clip = m * Vec4::new(x, y, 0.0, 1.0);
        clip.truncate() / clip.w
    }

    #[test]
    fn pipe_draws_before_torch() {
        let seq = DrawSequencer::default();
        let mut state = FrameState::new();
        for _ in 0..450 {
            let (list, next) = seq.frame(state);
            assert_eq!(list.len(), 2);
            assert_eq!(list.as_slice()[0].geometry.name, "pipe");
            assert_eq!(list.as_slice()[1].geometry.name, "torch");
            state = next;
        }
    }

    #[test]
    fn draws_are_line_strips_with_fixed_counts() {
        let (list, _) = DrawSequencer::default().frame(FrameState::new());
        let counts: Vec<u32> = list.iter().map(DrawCmd::vertex_count).collect();
        assert_eq!(counts, vec![9, 8]);
        assert!(list.iter().all(|c| c.primitive == Primitive::LineStrip));
    }

    #[test]
    fn frame_advances_state_once() {
        let seq = DrawSequencer::default();
        let state = FrameState { frame_index: 199, direction: Direction::Right };
        let (_, next) = seq.frame(state);
        assert_eq!(next, FrameState { frame_index: 200, direction: Direction::Left });
    }

    #[test]
    fn torch_uses_offset_of_incoming_state() {
        let seq = DrawSequencer::default();
        let (list, _) = seq.frame(FrameState::new());
        assert_eq!(list.as_slice()[1].transform, seq.torch_transform(-0.2));

        let left = FrameState { frame_index: 200, direction: Direction::Left };
        let (list, _) = seq.frame(left);
        assert_eq!(list.as_slice()[1].transform, seq.torch_transform(0.2));
    }

    #[test]
    fn pipe_transform_is_static() {
        let seq = DrawSequencer::default();
        let (a, next) = seq.frame(FrameState::new());
        let (b, _) = seq.frame(next);
        assert_eq!(a.as_slice()[0].transform, b.as_slice()[0].transform);
    }

    #[test]
    fn origin_projects_to_center() {
        let seq = DrawSequencer::default();
        let p = project(seq.pipe_transform(), 0.0, 0.0);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-6);
        assert!((0.0..=1.0).contains(&p.z));
    }

    #[test]
    fn window_layout_projects_unit_x_by_aspect() {
        // At depth 2 with a 60 degree fov, one unit spans 1 / (2 tan 30) of the half-height.
        let seq = DrawSequencer::new(SequencerConfig::window());
        let f = 1.0 / (30f32.to_radians().tan());
        let p = project(seq.pipe_transform(), 1.0, 1.0);
        assert_abs_diff_eq!(p.x, f / (4.0 / 3.0) / 2.0, epsilon = 1e-5);
        assert_abs_diff_eq!(p.y, f / 2.0, epsilon = 1e-5);
    }

    #[test]
    fn item_layout_keeps_mismatched_aspects() {
        let window = DrawSequencer::new(SequencerConfig::window());
        let item = DrawSequencer::new(SequencerConfig::item());

        assert_ne!(window.pipe_transform(), item.pipe_transform());
        assert_eq!(window.torch_transform(0.1), item.torch_transform(0.1));

        let wx = project(window.pipe_transform(), 1.0, 0.0).x;
        let ix = project(item.pipe_transform(), 1.0, 0.0).x;
        assert_abs_diff_eq!(ix / wx, (4.0 / 3.0) / (3.0 / 4.0), epsilon = 1e-4);
    }

    #[test]
    fn torch_is_lifted_and_shifted() {
        let seq = DrawSequencer::default();
        let base = project(seq.torch_transform(0.0), 0.0, 0.0);
        let shifted = project(seq.torch_transform(0.2), 0.0, 0.0);
        assert!(base.y > 0.0);
        assert!(shifted.x > base.x);
        assert_abs_diff_eq!(shifted.y, base.y, epsilon = 1e-6);
    }

    #[test]
    fn record_reuses_list() {
        let seq = DrawSequencer::default();
        let mut list = DrawList::new();
        let next = seq.record(FrameState::new(), &mut list);
        let next = seq.record(next, &mut list);
        assert_eq!(list.len(), 2);
        assert_eq!(next.frame_index, 2);
    }
}
