// Travel wishlist shared type definitions
// Each submodule defines types used across the application.

pub mod destination;
pub mod errors;
pub mod settings;
