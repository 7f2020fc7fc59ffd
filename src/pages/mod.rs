//! Page components for the clinic landing.

mod landing;

pub use landing::Landing;
