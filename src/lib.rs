pub mod documents;
pub mod loader;
pub mod logging;
pub mod picker;
pub mod schema;
pub mod widget;

mod status;
pub use status::Status;

mod tracing;
pub use crate::tracing::Tracing;
