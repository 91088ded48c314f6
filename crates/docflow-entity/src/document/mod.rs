//! Document domain entities.

pub mod model;
pub mod tags;

pub use model::{CreateDocument, Document, UpdateDocument};
pub use tags::parse_tags;
