// ABOUTME: Validated domain types shared across the crate.
// ABOUTME: Type-safe IDs and image references.

mod id;
mod image_ref;

pub use id::{ContainerId, ExecId, Id};
pub use image_ref::{ImageRef, ParseImageRefError};
