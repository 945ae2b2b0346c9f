//! Scene renderers
//!
//! Pure mappings from (scene, progress) to a visual-state descriptor. Every
//! renderer clamps its progress input and has no state of its own, so the
//! rendering layer can call it on every frame.

pub mod journey;
pub mod mockup;

pub use journey::{JOURNEY_SCENES, JourneyFrame, JourneyScene};
pub use mockup::{MOCKUP_SCENES, MockupFrame, MockupScene};

/// Position of the fake pointer drawn over a mockup, in mockup pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorPose {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl CursorPose {
    pub const fn at(x: f64, y: f64) -> Self {
        Self { x, y, scale: 1.0 }
    }

    /// The pointer mid-click
    pub const fn pressed(self) -> Self {
        Self { scale: 0.9, ..self }
    }

    /// CSS transform placing the pointer
    pub fn transform(&self) -> String {
        format!(
            "transform: translate({:.1}px, {:.1}px) scale({:.2});",
            self.x, self.y, self.scale
        )
    }
}

/// Linear interpolation, `t` clamped into `[0, 1]`
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * crate::core::steps::clamp_progress(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressed_cursor_keeps_position() {
        let pose = CursorPose::at(10.0, 20.0).pressed();
        assert_eq!(pose.x, 10.0);
        assert_eq!(pose.y, 20.0);
        assert_eq!(pose.scale, 0.9);
    }

    #[test]
    fn test_cursor_transform() {
        assert_eq!(
            CursorPose::at(280.0, 100.0).transform(),
            "transform: translate(280.0px, 100.0px) scale(1.00);"
        );
    }

    #[test]
    fn test_lerp_clamps() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 2.0), 10.0);
        assert_eq!(lerp(0.0, 10.0, -1.0), 0.0);
    }
}
