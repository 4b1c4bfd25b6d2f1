//! User export: serialization of user records to blank-stripped, ordered
//! JSON and delivery to a file or standard output.

pub mod serialize;
pub mod service;
pub mod writer;

pub use serialize::{serialize_user, strip_blanks};
pub use service::ExportService;
pub use writer::{ExportDestination, render_json};
