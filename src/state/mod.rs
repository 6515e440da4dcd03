//! State Module - the code field's interaction state
//!
//! - **Entry** - cursor state machine (`Entering` / `Complete`), events, effects
//! - **Store** - the machine published through reactive signals
//! - **Focus** - index-to-handle table for host focus requests
//! - **Keyboard** - key events, per-cell host events, crossterm bridge

mod entry;
mod focus;
mod keyboard;
mod store;

pub use entry::*;
pub use focus::*;
pub use keyboard::*;
pub use store::*;
