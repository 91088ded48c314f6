//! Document registry: upload, metadata CRUD, search, and download.

pub mod search;
pub mod service;

pub use search::DocumentQuery;
pub use service::{DocumentService, Download, NewDocument, Upload};
