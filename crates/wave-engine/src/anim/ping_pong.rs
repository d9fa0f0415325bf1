/// Looping `0 → 1 → 0` value driven by frame deltas.
///
/// The rising leg eases in (quadratic), the falling leg eases out, so the
/// value lingers near 0 and accelerates toward 1.
#[derive(Debug, Clone)]
pub struct PingPong {
    leg_secs: f32,
    time: f32,
}

impl PingPong {
    /// `leg_secs` is the duration of one leg; non-positive values are treated as 1 s.
    pub fn new(leg_secs: f32) -> Self {
        let leg_secs = if leg_secs > 0.0 { leg_secs } else { 1.0 };
        Self { leg_secs, time: 0.0 }
    }

    /// Advances by `dt` seconds and returns the new value in `[0, 1]`.
    pub fn update(&mut self, dt: f32) -> f32 {
        self.time = (self.time + dt.max(0.0)) % (2.0 * self.leg_secs);
        self.value()
    }

    pub fn value(&self) -> f32 {
        let p = self.time / self.leg_secs;
        if p < 1.0 {
            p * p
        } else {
            let q = p - 1.0;
            // OutQuad from 1 down to 0.
            1.0 - q * (2.0 - q)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn rises_then_falls() {
        let mut p = PingPong::new(2.5);
        assert_eq!(p.value(), 0.0);
        assert_abs_diff_eq!(p.update(1.25), 0.25, epsilon = 1e-5);
        assert_abs_diff_eq!(p.update(1.25), 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(p.update(1.25), 0.25, epsilon = 1e-5);
        assert_abs_diff_eq!(p.update(1.25), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn stays_in_unit_range() {
        let mut p = PingPong::new(0.5);
        for _ in 0..500 {
            let v = p.update(0.013);
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn ignores_negative_time() {
        let mut p = PingPong::new(1.0);
        p.update(0.5);
        assert_abs_diff_eq!(p.update(-3.0), 0.25, epsilon = 1e-6);
    }
}
