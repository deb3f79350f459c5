/// Display surfaces
///
/// Pure rendering of the session:
/// - `surface.rs` - what to show, derived from `Session`
/// - `header.rs`, `uploader.rs`, `display.rs`, `editor.rs` - the iced widgets
/// - `theme.rs` - shared colors and container styles

pub mod display;
pub mod editor;
pub mod header;
pub mod surface;
pub mod theme;
pub mod uploader;

pub use surface::Surface;
