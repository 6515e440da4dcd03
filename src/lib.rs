//! # spark-code-field
//!
//! Segmented one-time-code / PIN entry field for terminal UIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! reactive state and [taffy](https://github.com/DioxusLabs/taffy) for cell
//! placement.
//!
//! ## Architecture
//!
//! One logical code of fixed length is entered through a row of
//! single-character cells. Host events flow one way:
//! ```text
//! CellEvent → controller → CodeState::step → Effects → focus handles / callbacks
//!                                        └→ signals → cell views → FrameBuffer
//! ```
//!
//! The entry state machine is pure; everything that touches the host (focus
//! requests, callbacks) happens after a transition, from its returned effects.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rgba, Cell, Spacing, border flags)
//! - [`config`] - Field configuration, JSON loading, diagnostics
//! - [`state`] - Entry state machine, store, focus handles, keyboard bridge
//! - [`controller`] - Host event routing and effect execution
//! - [`theme`] - Cell variants and per-cell style resolution
//! - [`layout`] - Taffy placement of the cell row
//! - [`renderer`] - FrameBuffer drawing and terminal output
//! - [`primitives`] - The mounted `code_field` component

pub mod config;
pub mod controller;
pub mod layout;
pub mod primitives;
pub mod renderer;
pub mod state;
pub mod theme;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::{CodeFieldConfig, ConfigDiagnostic, ConfigError, LayoutPosition, StyleOverrides};

pub use controller::{CodeChangeCallback, CodeFieldController, FieldCallbacks, FulfillCallback};

pub use layout::{place_cells, CellRect, FieldLayout, LayoutError};

pub use renderer::{write_frame, FrameBuffer};

pub use primitives::{code_field, CellView, CodeField, CodeFieldProps};

pub use state::{
    // Entry
    CodeState, Effect, EntryState, FieldEvent, Fulfillment, Matcher,
    // Store
    CodeStore,
    // Focus
    tracked_focus, FocusHandle, FocusTable, SignalFocus,
    // Keyboard
    cell_event_for_key, convert_key_event, CellEvent, KeyState, KeyboardEvent, Modifiers,
};

pub use theme::{cell_style, CellBorder, CellStyle, CellVariant};
