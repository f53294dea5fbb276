//! Element model and default construction
//!
//! Every element is a plain value: a shared identifier and `hiddenFor` set
//! plus one [`ElementBody`] variant per primitive kind. Once handed to the
//! host it is never touched again by this crate.

mod builder;
mod id;
mod types;

pub use builder::{build, build_media, build_named};
pub use id::{ElementId, IdGenerator};
pub use types::{Element, ElementBody, ImageElement, TextAlign, TextStyle};
