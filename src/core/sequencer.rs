//! Scene sequencer
//!
//! Advances a pointer through an ordered, fixed list of [`Scene`]s and reports
//! the fractional progress within the active one. Two drivers are provided:
//!
//! - [`TimedSequencer`] accrues wall-clock time fed in by an animation loop
//! - [`ScrollSequencer`] maps a normalized scroll position onto the list
//!
//! Both are plain state machines with no knowledge of the DOM, so the
//! rendering layer owns the loop or listener and only forwards numbers.

/// One named step of a scripted animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    /// Stable identifier used to pick the renderer
    pub name: &'static str,
    /// How long the scene plays when time-driven, in milliseconds.
    /// Ignored by the scroll driver.
    pub duration_ms: f64,
    /// Short hint shown next to the animation while the scene is active
    pub display_text: &'static str,
}

impl Scene {
    pub const fn new(name: &'static str, duration_ms: f64, display_text: &'static str) -> Self {
        Self {
            name,
            duration_ms,
            display_text,
        }
    }

    /// A scene that only ever advances by scroll position
    pub const fn scrolled(name: &'static str, display_text: &'static str) -> Self {
        Self::new(name, 0.0, display_text)
    }
}

/// Snapshot of where a sequencer currently is
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SequencerState {
    /// Always in `[0, scene_count)`
    pub current_scene_index: usize,
    /// Always in `[0, 1]`
    pub progress_within_scene: f64,
}

impl SequencerState {
    /// Progress across the whole scene list, in `[0, 1]`
    pub fn overall_progress(&self, scene_count: usize) -> f64 {
        if scene_count == 0 {
            return 0.0;
        }
        ((self.current_scene_index as f64 + self.progress_within_scene) / scene_count as f64)
            .clamp(0.0, 1.0)
    }
}

/// What happens once the last scene completes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndBehavior {
    /// Start over from the first scene
    #[default]
    Wrap,
    /// Stay on the last scene with its progress pinned at 1
    Clamp,
}

/// Platform motion preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    Full,
    /// `prefers-reduced-motion: reduce`; sequencers freeze on the first scene
    Reduced,
}

/// Sequencer construction errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequencerError {
    #[error("a sequencer needs at least one scene")]
    NoScenes,
}

/// Time-driven sequencer
///
/// Call [`TimedSequencer::tick`] once per animation frame with the time
/// elapsed since the previous frame.
#[derive(Debug, Clone)]
pub struct TimedSequencer {
    scenes: &'static [Scene],
    state: SequencerState,
    /// Time spent in the current scene
    elapsed_ms: f64,
    end: EndBehavior,
    motion: MotionPreference,
    paused: bool,
    enabled: bool,
    finished: bool,
}

impl TimedSequencer {
    pub fn new(scenes: &'static [Scene], end: EndBehavior) -> Result<Self, SequencerError> {
        if scenes.is_empty() {
            return Err(SequencerError::NoScenes);
        }

        Ok(Self {
            scenes,
            state: SequencerState::default(),
            elapsed_ms: 0.0,
            end,
            motion: MotionPreference::Full,
            paused: false,
            enabled: true,
            finished: false,
        })
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// The active scene
    pub fn scene(&self) -> &'static Scene {
        &self.scenes[self.state.current_scene_index]
    }

    pub fn scenes(&self) -> &'static [Scene] {
        self.scenes
    }

    pub fn overall_progress(&self) -> f64 {
        self.state.overall_progress(self.scenes.len())
    }

    /// Whether a clamped sequencer has played its last scene to the end
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether calls to `tick` currently move the sequencer
    pub fn is_running(&self) -> bool {
        self.enabled && !self.paused && self.motion == MotionPreference::Full && !self.finished
    }

    /// Suspend time accrual (pointer hover)
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Continue accruing from where `pause` left off
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Disable the sequencer entirely, e.g. on narrow viewports.
    /// A disabled sequencer keeps its position but never ticks.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Apply the platform motion preference. Switching to reduced motion
    /// rewinds to the first scene and freezes there.
    pub fn set_motion_preference(&mut self, motion: MotionPreference) {
        self.motion = motion;
        if motion == MotionPreference::Reduced {
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        self.state = SequencerState::default();
        self.elapsed_ms = 0.0;
        self.finished = false;
    }

    /// Accrue `delta_ms` of elapsed time and return the new state.
    ///
    /// Non-finite or negative deltas are ignored.
    pub fn tick(&mut self, delta_ms: f64) -> SequencerState {
        if !self.is_running() || !delta_ms.is_finite() || delta_ms <= 0.0 {
            return self.state;
        }

        self.elapsed_ms += delta_ms;
        self.settle();
        self.state
    }

    /// Carry accumulated time across scene boundaries and recompute progress
    fn settle(&mut self) {
        let count = self.scenes.len();
        let mut index = self.state.current_scene_index;

        if self.end == EndBehavior::Wrap {
            // A full cycle lands back on the same scene, so whole cycles can
            // be dropped before walking the list.
            let cycle: f64 = self.scenes.iter().map(|s| s.duration_ms.max(0.0)).sum();
            if cycle > 0.0 && self.elapsed_ms >= cycle {
                self.elapsed_ms %= cycle;
            }
        }

        // Bounded walk: at most one pass over the list per tick, which also
        // keeps all-zero durations from spinning.
        for _ in 0..=count {
            let duration = self.scenes[index].duration_ms;
            if self.elapsed_ms < duration {
                break;
            }

            if self.end == EndBehavior::Clamp && index == count - 1 {
                self.elapsed_ms = duration.max(0.0);
                self.finished = true;
                break;
            }

            // Non-positive durations advance immediately without consuming time
            self.elapsed_ms -= duration.max(0.0);
            index = (index + 1) % count;
        }

        let duration = self.scenes[index].duration_ms;
        let progress = if self.finished {
            1.0
        } else if duration > 0.0 {
            (self.elapsed_ms / duration).clamp(0.0, 1.0)
        } else {
            0.0
        };

        self.state = SequencerState {
            current_scene_index: index,
            progress_within_scene: progress,
        };
    }
}

/// Scroll-driven sequencer
///
/// Feed it the normalized scroll position of the pinned section.
#[derive(Debug, Clone)]
pub struct ScrollSequencer {
    scenes: &'static [Scene],
    state: SequencerState,
    motion: MotionPreference,
    enabled: bool,
}

impl ScrollSequencer {
    pub fn new(scenes: &'static [Scene]) -> Result<Self, SequencerError> {
        if scenes.is_empty() {
            return Err(SequencerError::NoScenes);
        }

        Ok(Self {
            scenes,
            state: SequencerState::default(),
            motion: MotionPreference::Full,
            enabled: true,
        })
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn scene(&self) -> &'static Scene {
        &self.scenes[self.state.current_scene_index]
    }

    pub fn scenes(&self) -> &'static [Scene] {
        self.scenes
    }

    pub fn overall_progress(&self) -> f64 {
        self.state.overall_progress(self.scenes.len())
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_motion_preference(&mut self, motion: MotionPreference) {
        self.motion = motion;
        if motion == MotionPreference::Reduced {
            self.state = SequencerState::default();
        }
    }

    /// Recompute the state from global scroll progress `p`.
    ///
    /// `p` is clamped into `[0, 1]`; NaN counts as 0.
    pub fn update(&mut self, p: f64) -> SequencerState {
        if !self.enabled || self.motion == MotionPreference::Reduced {
            return self.state;
        }

        self.state = scroll_state(p, self.scenes.len());
        self.state
    }
}

/// Map global progress onto `count` equally sized scenes.
///
/// The index is `floor(p * count)` clamped to `count - 1`. Within-scene
/// progress is `p * count - index`, which equals `(p * count) mod 1` below
/// the very end and reads 1 on the last scene at `p = 1`.
pub fn scroll_state(p: f64, count: usize) -> SequencerState {
    if count == 0 {
        return SequencerState::default();
    }

    let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
    let scaled = p * count as f64;
    let index = (scaled.floor() as usize).min(count - 1);

    SequencerState {
        current_scene_index: index,
        progress_within_scene: (scaled - index as f64).clamp(0.0, 1.0),
    }
}
