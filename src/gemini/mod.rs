/// Edit request client
///
/// The only I/O boundary of the application: one outbound call to the
/// Gemini image model per accepted submission.
///
/// Architecture:
/// - `client.rs` - request building, the HTTP call, and response scanning
/// - `types.rs` - serde types for the response

pub mod client;
pub mod types;

pub use client::GeminiClient;
