//! Threshold step tracks
//!
//! A [`StepTrack`] partitions the progress range `[0, 1]` into ordered
//! sub-ranges, one per discrete UI state. The active step at progress `t` is
//! the one with the greatest threshold `<= t`, so a whole scripted animation
//! is a single table evaluated against one progress value instead of a chain
//! of one-shot timers.

/// A single `(threshold, state)` pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step<T> {
    pub at: f64,
    pub state: T,
}

impl<T> Step<T> {
    pub const fn new(at: f64, state: T) -> Self {
        Self { at, state }
    }
}

/// Ordered list of steps, thresholds ascending
#[derive(Debug, Clone, Copy)]
pub struct StepTrack<T: 'static> {
    steps: &'static [Step<T>],
}

impl<T: Copy> StepTrack<T> {
    /// Wrap a step table. Tables are `static` data; the thresholds must be
    /// ascending and the first one should be `0.0`.
    pub const fn new(steps: &'static [Step<T>]) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Position of the active step, or `None` when `t` precedes the first
    /// threshold (or the track is empty).
    pub fn index_at(&self, t: f64) -> Option<usize> {
        let t = clamp_progress(t);
        // Ascending thresholds: everything before the partition point is <= t
        let passed = self.steps.partition_point(|step| step.at <= t);
        passed.checked_sub(1)
    }

    /// The state of the active step
    pub fn state_at(&self, t: f64) -> Option<T> {
        self.index_at(t).map(|i| self.steps[i].state)
    }

    /// Like [`StepTrack::state_at`] with a fallback for the leading gap
    pub fn state_or(&self, t: f64, fallback: T) -> T {
        self.state_at(t).unwrap_or(fallback)
    }

    /// Progress inside the active step's sub-range, in `[0, 1]`.
    /// Useful for eased motion between two discrete states.
    pub fn local_progress(&self, t: f64) -> f64 {
        let t = clamp_progress(t);
        let Some(index) = self.index_at(t) else {
            return 0.0;
        };

        let start = self.steps[index].at;
        let end = self.steps.get(index + 1).map_or(1.0, |next| next.at);
        if end <= start {
            return 1.0;
        }
        ((t - start) / (end - start)).clamp(0.0, 1.0)
    }
}

/// Clamp a progress fraction into `[0, 1]`; NaN reads as 0
pub fn clamp_progress(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Whether `t` lies strictly inside `(from, to)`
pub fn within(t: f64, from: f64, to: f64) -> bool {
    let t = clamp_progress(t);
    t > from && t < to
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Phase {
        Idle,
        Hover,
        Open,
        Done,
    }

    static PHASES: [Step<Phase>; 4] = [
        Step::new(0.0, Phase::Idle),
        Step::new(0.2, Phase::Hover),
        Step::new(0.5, Phase::Open),
        Step::new(0.9, Phase::Done),
    ];

    static TRACK: StepTrack<Phase> = StepTrack::new(&PHASES);

    #[test]
    fn test_greatest_threshold_wins() {
        assert_eq!(TRACK.state_at(0.0), Some(Phase::Idle));
        assert_eq!(TRACK.state_at(0.19), Some(Phase::Idle));
        assert_eq!(TRACK.state_at(0.2), Some(Phase::Hover));
        assert_eq!(TRACK.state_at(0.49), Some(Phase::Hover));
        assert_eq!(TRACK.state_at(0.5), Some(Phase::Open));
        assert_eq!(TRACK.state_at(0.95), Some(Phase::Done));
        assert_eq!(TRACK.state_at(1.0), Some(Phase::Done));
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        assert_eq!(TRACK.state_at(-3.0), Some(Phase::Idle));
        assert_eq!(TRACK.state_at(42.0), Some(Phase::Done));
        assert_eq!(TRACK.state_at(f64::NAN), Some(Phase::Idle));
    }

    #[test]
    fn test_leading_gap_and_empty_track() {
        static LATE: [Step<u8>; 2] = [Step::new(0.3, 1), Step::new(0.6, 2)];
        let late = StepTrack::new(&LATE);
        assert_eq!(late.index_at(0.1), None);
        assert_eq!(late.state_or(0.1, 0), 0);
        assert_eq!(late.state_or(0.7, 0), 2);

        static NONE: [Step<u8>; 0] = [];
        let empty = StepTrack::new(&NONE);
        assert!(empty.is_empty());
        assert_eq!(empty.state_at(0.5), None);
        assert_eq!(empty.local_progress(0.5), 0.0);
    }

    #[test]
    fn test_local_progress_inside_step() {
        assert!((TRACK.local_progress(0.35) - 0.5).abs() < 1e-9);
        assert!((TRACK.local_progress(0.95) - 0.5).abs() < 1e-9);
        assert_eq!(TRACK.local_progress(0.2), 0.0);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        for i in 0..=100 {
            let t = i as f64 / 100.0;
            assert_eq!(TRACK.state_at(t), TRACK.state_at(t));
        }
    }

    #[test]
    fn test_within_is_exclusive() {
        assert!(within(0.5, 0.2, 0.8));
        assert!(!within(0.2, 0.2, 0.8));
        assert!(!within(0.8, 0.2, 0.8));
        assert!(!within(1.5, 0.2, 0.8));
    }
}
