//! Common reusable UI components
//!
//! Building blocks shared by the landing sections and the waitlist modal.

pub mod form;
pub mod message;
pub mod modal;
pub mod spinner;

pub use form::FormField;
pub use message::{ErrorMessage, SuccessMessage};
pub use modal::BaseModal;
pub use spinner::InlineSpinner;
