//! UI Primitives - the code field component.
//!
//! Components follow one pattern:
//! 1. Take props (configuration plus callbacks)
//! 2. Wire host events to the controller
//! 3. Expose the current state for rendering
//!
//! [`code_field`] mounts a segmented code input; [`CodeField::cell_views`]
//! gives hosts one value/style pair per cell.

mod code_field;
mod types;

pub use code_field::{code_field, CodeField};
pub use types::*;
