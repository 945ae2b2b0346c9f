pub mod common;
pub mod icon;
pub mod journey;
pub mod mockup;
pub mod motion;
pub mod pages;
pub mod sections;
pub mod waitlist;

pub use icon::{Icon, icons};
pub use journey::ProjectJourney;
pub use mockup::AnimatedMockup;
pub use waitlist::{WaitlistContext, WaitlistModal, provide_waitlist_context, use_waitlist};
