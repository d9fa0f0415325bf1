/// Frames per leg of the oscillation.
pub const PERIOD: u64 = 200;

/// Offset bound on either side of the origin.
pub const AMPLITUDE: f32 = 0.2;

/// Offset change per frame.
pub const STEP: f32 = 0.002;

/// Direction of travel for the current leg.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Direction {
    #[default]
    Right,
    Left,
}

impl Direction {
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
        }
    }
}

/// Animation state carried between frames.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct FrameState {
    pub frame_index: u64,
    pub direction: Direction,
}

impl FrameState {
    /// Initial state: frame 0, moving right.
    #[inline]
    pub const fn new() -> Self {
        Self {
            frame_index: 0,
            direction: Direction::Right,
        }
    }

    /// Position within the current leg, always in `0..PERIOD`.
    #[inline]
    pub fn phase(self) -> u64 {
        self.frame_index % PERIOD
    }
}

/// Computes the offset for `state` and returns it with the next state.
///
/// The offset is derived from the state *before* the frame counter advances.
/// The direction flips on the last phase of each leg.
pub fn advance(state: FrameState) -> (f32, FrameState) {
    let phase = state.phase();
    let last_phase = phase == PERIOD - 1;

    let offset = match state.direction {
        Direction::Right => -AMPLITUDE + STEP * phase as f32,
        Direction::Left => AMPLITUDE - STEP * phase as f32,
    };

    let direction = if last_phase {
        state.direction.flipped()
    } else {
        state.direction
    };

    let next = FrameState {
        frame_index: state.frame_index.wrapping_add(1),
        direction,
    };

    (offset, next)
}

/// Owns a [`FrameState`] and advances it one frame per [`tick`](Self::tick).
#[derive(Debug, Clone, Default)]
pub struct FrameAnimator {
    state: FrameState,
}

impl FrameAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: FrameState) -> Self {
        Self { state }
    }

    #[inline]
    pub fn state(&self) -> FrameState {
        self.state
    }

    /// Returns this frame's offset and moves to the next frame.
    pub fn tick(&mut self) -> f32 {
        let (offset, next) = advance(self.state);
        self.state = next;
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPS: f32 = 1e-5;

    fn run(frames: usize) -> Vec<(f32, FrameState)> {
        let mut state = FrameState::new();
        let mut out = Vec::with_capacity(frames);
        for _ in 0..frames {
            let (offset, next) = advance(state);
            out.push((offset, state));
            state = next;
        }
        out
    }

    #[test]
    fn first_frame_starts_at_left_bound() {
        let (offset, next) = advance(FrameState::new());
        assert_abs_diff_eq!(offset, -0.2, epsilon = EPS);
        assert_eq!(next, FrameState { frame_index: 1, direction: Direction::Right });
    }

    #[test]
    fn last_phase_of_first_leg_flips_left() {
        let state = FrameState { frame_index: 199, direction: Direction::Right };
        let (offset, next) = advance(state);
        assert_abs_diff_eq!(offset, 0.198, epsilon = EPS);
        assert_eq!(next, FrameState { frame_index: 200, direction: Direction::Left });
    }

    #[test]
    fn second_leg_starts_at_right_bound() {
        let state = FrameState { frame_index: 200, direction: Direction::Left };
        let (offset, next) = advance(state);
        assert_abs_diff_eq!(offset, 0.2, epsilon = EPS);
        assert_eq!(next.direction, Direction::Left);
    }

    #[test]
    fn two_hundred_ticks_reach_the_flip() {
        let mut anim = FrameAnimator::new();
        for _ in 0..199 {
            anim.tick();
        }
        assert_eq!(anim.state(), FrameState { frame_index: 199, direction: Direction::Right });
        let offset = anim.tick();
        assert_abs_diff_eq!(offset, 0.198, epsilon = EPS);
        assert_eq!(anim.state(), FrameState { frame_index: 200, direction: Direction::Left });
    }

    #[test]
    fn phase_stays_in_range() {
        for (_, state) in run(1000) {
            assert!(state.phase() < PERIOD);
        }
        let far = FrameState { frame_index: u64::MAX, direction: Direction::Left };
        assert!(far.phase() < PERIOD);
    }

    #[test]
    fn offset_is_bounded_and_moves_one_step_per_frame() {
        let frames = run(1000);
        for (offset, _) in &frames {
            assert!((-AMPLITUDE - EPS..=AMPLITUDE + EPS).contains(offset));
        }
        for pair in frames.windows(2) {
            assert_abs_diff_eq!((pair[1].0 - pair[0].0).abs(), STEP, epsilon = EPS);
        }
    }

    #[test]
    fn direction_flips_only_on_last_phase() {
        let mut state = FrameState::new();
        for _ in 0..1000 {
            let (_, next) = advance(state);
            if next.direction != state.direction {
                assert_eq!(state.phase(), PERIOD - 1);
            } else {
                assert_ne!(state.phase(), PERIOD - 1);
            }
            state = next;
        }
    }

    #[test]
    fn offset_rises_while_moving_right_and_falls_while_moving_left() {
        let frames = run(600);
        for pair in frames.windows(2) {
            let (a, sa) = pair[0];
            let (b, sb) = pair[1];
            if sa.direction != sb.direction {
                continue;
            }
            match sa.direction {
                Direction::Right => assert!(b > a),
                Direction::Left => assert!(b < a),
            }
        }
    }

    #[test]
    fn advance_is_deterministic() {
        let state = FrameState { frame_index: 4242, direction: Direction::Left };
        assert_eq!(advance(state), advance(state));
    }
}
