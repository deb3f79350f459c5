/// State management module
///
/// This module handles all application state:
/// - Shared data structures (data.rs)
/// - The session state machine driving the upload → edit → display flow (session.rs)

pub mod data;
pub mod session;

pub use data::UploadedImage;
pub use session::{EditJob, EditOutcome, Phase, Session};
