//! Core logic of the landing site: scene sequencing, scene rendering and the
//! waitlist form, plus the server-side routes

pub mod scenes;
pub mod seo;
pub mod sequencer;
pub mod steps;
pub mod waitlist;

#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod og;

#[cfg(test)]
mod tests;

pub use scenes::{JourneyFrame, JourneyScene, MockupFrame, MockupScene};
pub use sequencer::{
    EndBehavior, MotionPreference, Scene, ScrollSequencer, SequencerError, SequencerState,
    TimedSequencer,
};
pub use waitlist::{
    Field, FieldErrors, SubmissionStatus, SubmitError, ValidationError, WaitlistEntry,
    WaitlistForm, WaitlistTransport,
};
