//! Application pages
//!
//! - Landing page (home)
//! - 404 page

mod landing;
mod not_found;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
