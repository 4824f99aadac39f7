//! Display surfaces implementing [`Render`](crate::render::Render).
//!
//! - [`html`] - Askama-rendered HTML document with addressable regions
//! - [`text`] - Plain text for terminals
//! - [`recording`] - Records every call, for tests

pub mod html;
pub mod recording;
pub mod text;

pub use html::HtmlSurface;
pub use recording::{RecordingSurface, SurfaceCall};
pub use text::TextSurface;
