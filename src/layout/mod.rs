//! Layout Module - cell placement for code fields.
//!
//! Uses [Taffy](https://github.com/DioxusLabs/taffy) for flexbox computation:
//! the field is a single row, the layout position selects how free space is
//! distributed, and every cell is a fixed `size × size` leaf.
//!
//! # Example
//!
//! ```
//! use spark_code_field::config::CodeFieldConfig;
//! use spark_code_field::layout::place_cells;
//!
//! let config = CodeFieldConfig { code_length: 4, size: 3, space: 2, ..Default::default() };
//! let layout = place_cells(&config, 40).unwrap();
//! assert_eq!(layout.cells.len(), 4);
//! ```

mod taffy_bridge;
mod types;

pub use taffy_bridge::place_cells;
pub use types::*;
