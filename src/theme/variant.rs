//! Cell variants - the border treatments a code cell can take.
//!
//! Each variant carries only the border attributes it needs. Mapping a variant
//! to visual attributes is an exhaustive `match`; the only place an unknown
//! variant can appear is [`CellVariant::from_name`], at the parsing boundary.
//!
//! # Example
//!
//! ```
//! use spark_code_field::theme::CellVariant;
//! use spark_code_field::types::Sides;
//!
//! let variant = CellVariant::from_name("border-b").unwrap();
//! assert_eq!(variant.sides(), Sides::BOTTOM);
//! ```

use crate::config::ConfigDiagnostic;
use crate::types::{BorderStyle, Sides};

/// Corner radius used by [`CellVariant::BorderedBox`] unless specified.
pub const DEFAULT_BOX_RADIUS: u16 = 4;

// =============================================================================
// CellVariant
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellVariant {
    /// Full border with rounded corners.
    BorderedBox { radius: u16 },
    /// Full border, radius of half the cell size.
    BorderedCircle,
    /// Underline only.
    BorderBottom,
    BorderTopBottom,
    BorderLeftRight,
    /// No border at all.
    NoBorder,
}

impl Default for CellVariant {
    fn default() -> Self {
        Self::BorderedBox { radius: DEFAULT_BOX_RADIUS }
    }
}

impl CellVariant {
    /// Parse a variant name (case-insensitive).
    ///
    /// Accepts both descriptive names (`bordered-box`) and the short class
    /// names (`border-box`, `border-b-t`, `clear`).
    pub fn from_name(name: &str) -> Result<Self, ConfigDiagnostic> {
        match name.trim().to_ascii_lowercase().as_str() {
            "border-box" | "bordered-box" | "box" => Ok(Self::default()),
            "border-circle" | "bordered-circle" | "circle" => Ok(Self::BorderedCircle),
            "border-b" | "border-bottom" => Ok(Self::BorderBottom),
            "border-b-t" | "border-top-bottom" => Ok(Self::BorderTopBottom),
            "border-l-r" | "border-left-right" => Ok(Self::BorderLeftRight),
            "clear" | "none" | "no-border" => Ok(Self::NoBorder),
            _ => Err(ConfigDiagnostic::UnknownVariant(name.to_string())),
        }
    }

    /// Canonical name of the variant.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BorderedBox { .. } => "bordered-box",
            Self::BorderedCircle => "bordered-circle",
            Self::BorderBottom => "border-bottom",
            Self::BorderTopBottom => "border-top-bottom",
            Self::BorderLeftRight => "border-left-right",
            Self::NoBorder => "none",
        }
    }

    /// Edges that carry a border.
    pub const fn sides(&self) -> Sides {
        match self {
            Self::BorderedBox { .. } | Self::BorderedCircle => Sides::all(),
            Self::BorderBottom => Sides::BOTTOM,
            Self::BorderTopBottom => Sides::VERTICAL,
            Self::BorderLeftRight => Sides::HORIZONTAL,
            Self::NoBorder => Sides::empty(),
        }
    }

    /// Corner radius for a cell of edge `size`.
    pub fn radius(&self, size: u16) -> u16 {
        match self {
            Self::BorderedBox { radius } => (*radius).min(size / 2),
            Self::BorderedCircle => size / 2,
            Self::BorderBottom
            | Self::BorderTopBottom
            | Self::BorderLeftRight
            | Self::NoBorder => 0,
        }
    }

    /// Line set a terminal host draws this variant with.
    pub const fn terminal_line(&self) -> BorderStyle {
        match self {
            Self::BorderedBox { .. } | Self::BorderedCircle => BorderStyle::Rounded,
            Self::BorderBottom | Self::BorderTopBottom | Self::BorderLeftRight => {
                BorderStyle::Single
            }
            Self::NoBorder => BorderStyle::None,
        }
    }

    pub const fn all() -> &'static [CellVariant] {
        &[
            Self::BorderedBox { radius: DEFAULT_BOX_RADIUS },
            Self::BorderedCircle,
            Self::BorderBottom,
            Self::BorderTopBottom,
            Self::BorderLeftRight,
            Self::NoBorder,
        ]
    }
}
