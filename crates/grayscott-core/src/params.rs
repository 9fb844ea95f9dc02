//! Gray-Scott simulation parameters.

/// The four scalars of the Gray-Scott model.
///
/// Values are used verbatim by the reaction kernel: no range checks are
/// applied, and parameter sets that drive the explicit integration
/// unstable produce diverging (eventually non-finite) grids rather than
/// errors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimParams {
    /// Diffusion rate of `u` (`D_a`).
    pub d_a: f32,
    /// Diffusion rate of `v` (`D_b`).
    pub d_b: f32,
    /// Kill rate (`k`).
    pub kill: f32,
    /// Feed rate (`f`).
    pub feed: f32,
}

impl SimParams {
    /// Default `D_a`.
    pub const DEFAULT_D_A: f32 = 0.189;
    /// Default `D_b`.
    pub const DEFAULT_D_B: f32 = 0.080;
    /// Default kill rate.
    pub const DEFAULT_KILL: f32 = 0.062;
    /// Default feed rate.
    pub const DEFAULT_FEED: f32 = 0.0425;

    /// Create a parameter set.
    pub const fn new(d_a: f32, d_b: f32, kill: f32, feed: f32) -> Self {
        Self {
            d_a,
            d_b,
            kill,
            feed,
        }
    }

    /// Homogeneous steady states `(u*, v*)` of the reaction term.
    ///
    /// Solutions of `f(1 - u) = u v²` and `(f + k) v = u v²`. The trivial
    /// state `(1, 0)` always exists and is returned first; the two
    /// non-trivial states exist only when `f² >= 4 f (f + k)²`.
    ///
    /// ```
    /// use grayscott_core::SimParams;
    ///
    /// // The default parameters only admit the trivial state.
    /// assert_eq!(SimParams::default().homogeneous_steady_states(), vec![(1.0, 0.0)]);
    /// ```
    pub fn homogeneous_steady_states(&self) -> Vec<(f32, f32)> {
        let f = self.feed as f64;
        let fk = (self.feed + self.kill) as f64;
        let mut states = vec![(1.0, 0.0)];
        if f <= 0.0 || fk <= 0.0 {
            return states;
        }
        let disc = f * f - 4.0 * f * fk * fk;
        if disc < 0.0 {
            return states;
        }
        let root = disc.sqrt();
        for v in [(f + root) / (2.0 * fk), (f - root) / (2.0 * fk)] {
            if v > 0.0 {
                states.push(((fk / v) as f32, v as f32));
            }
        }
        states
    }
}

impl Default for SimParams {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_D_A,
            Self::DEFAULT_D_B,
            Self::DEFAULT_KILL,
            Self::DEFAULT_FEED,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference() {
        let p = SimParams::default();
        assert_eq!(p.d_a, 0.189);
        assert_eq!(p.d_b, 0.080);
        assert_eq!(p.kill, 0.062);
        assert_eq!(p.feed, 0.0425);
    }

    #[test]
    fn non_trivial_states_satisfy_both_equations() {
        let p = SimParams::new(0.2, 0.1, 0.0, 0.1);
        let states = p.homogeneous_steady_states();
        assert_eq!(states.len(), 3);
        let (f, k) = (p.feed as f64, p.kill as f64);
        for &(u, v) in &states[1..] {
            let (u, v) = (u as f64, v as f64);
            let uvv = u * v * v;
            assert!((f * (1.0 - u) - uvv).abs() < 1e-5, "feed balance at ({u},{v})");
            assert!(((f + k) * v - uvv).abs() < 1e-5, "kill balance at ({u},{v})");
        }
    }

    #[test]
    fn zero_feed_has_only_trivial_state() {
        let p = SimParams::new(0.2, 0.1, 0.06, 0.0);
        assert_eq!(p.homogeneous_steady_states(), vec![(1.0, 0.0)]);
    }
}
