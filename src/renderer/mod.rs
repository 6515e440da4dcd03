//! Terminal renderer for code fields.
//!
//! - [`FrameBuffer`] - grid of terminal cells the field is drawn into
//! - [`write_frame`] - crossterm output of a buffer

mod buffer;
mod output;

pub use buffer::FrameBuffer;
pub use output::write_frame;
