//! Presentation mapper for code cells.
//!
//! [`cell_style`] is a pure function from the field configuration and a
//! cell's active flag to the visual attributes a host draws:
//!
//! - border edges, width and radius come from the [`CellVariant`]
//! - border color is the active color on the cell awaiting input, the
//!   inactive color everywhere else
//! - horizontal margins come from the [`LayoutPosition`]
//! - [`StyleOverrides`](crate::config::StyleOverrides) are layered last
//!
//! # Example
//!
//! ```
//! use spark_code_field::config::CodeFieldConfig;
//! use spark_code_field::theme::cell_style;
//!
//! let config = CodeFieldConfig::default();
//! let active = cell_style(&config, true);
//! let idle = cell_style(&config, false);
//! assert_ne!(active.border.unwrap().color, idle.border.unwrap().color);
//! ```

pub mod variant;

pub use variant::{CellVariant, DEFAULT_BOX_RADIUS};

use crate::config::{CodeFieldConfig, LayoutPosition};
use crate::types::{Attr, BorderStyle, Rgba, Sides, Spacing};

// =============================================================================
// CellStyle
// =============================================================================

/// Border attributes of a cell. Absent for [`CellVariant::NoBorder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBorder {
    pub sides: Sides,
    pub width: u16,
    pub radius: u16,
    pub color: Rgba,
    /// Line set for terminal hosts.
    pub line: BorderStyle,
}

/// Resolved visual attributes of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub width: u16,
    pub height: u16,
    /// Glyph size for hosts with scalable text (half the cell edge).
    pub font_size: u16,
    pub fg: Rgba,
    pub bg: Rgba,
    pub attrs: Attr,
    pub border: Option<CellBorder>,
    pub margin: Spacing,
}

// =============================================================================
// Mapping
// =============================================================================

/// Margins around each cell for a layout position.
///
/// Full-width rows get no margin; the container distributes the free space.
pub fn position_margin(position: LayoutPosition, space: u16) -> Spacing {
    match position {
        LayoutPosition::Left => Spacing::horizontal(0, space),
        LayoutPosition::Right => Spacing::horizontal(space, 0),
        LayoutPosition::Center => Spacing::horizontal(space / 2, space / 2),
        LayoutPosition::FullWidth => Spacing::ZERO,
    }
}

/// Border of a variant in the given color.
pub fn variant_border(variant: CellVariant, width: u16, size: u16, color: Rgba) -> Option<CellBorder> {
    let sides = variant.sides();
    if sides.is_empty() || width == 0 {
        return None;
    }
    Some(CellBorder {
        sides,
        width,
        radius: variant.radius(size),
        color,
        line: variant.terminal_line(),
    })
}

/// Compute the style of a cell.
///
/// `is_active` marks the cell that will receive the next character.
pub fn cell_style(config: &CodeFieldConfig, is_active: bool) -> CellStyle {
    let border_color = if is_active {
        config.active_color
    } else {
        config.inactive_color
    };
    let overrides = &config.overrides.cell;

    CellStyle {
        width: config.size,
        height: config.size,
        font_size: config.size / 2,
        fg: overrides.color.unwrap_or(config.active_color),
        bg: overrides.background.unwrap_or(Rgba::TERMINAL_DEFAULT),
        attrs: overrides.attrs,
        border: variant_border(config.variant, config.border_width, config.size, border_color),
        margin: position_margin(config.position, config.space),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CellOverrides;

    fn config_with(variant: CellVariant, position: LayoutPosition) -> CodeFieldConfig {
        CodeFieldConfig {
            variant,
            position,
            size: 10,
            space: 6,
            border_width: 2,
            active_color: Rgba::GREEN,
            inactive_color: Rgba::GRAY,
            ..Default::default()
        }
    }

    #[test]
    fn test_border_color_follows_active_flag() {
        for variant in CellVariant::all() {
            if *variant == CellVariant::NoBorder {
                continue;
            }
            let config = config_with(*variant, LayoutPosition::Center);
            assert_eq!(cell_style(&config, true).border.unwrap().color, Rgba::GREEN);
            assert_eq!(cell_style(&config, false).border.unwrap().color, Rgba::GRAY);
        }
    }

    #[test]
    fn test_no_border_variant_has_no_border() {
        let config = config_with(CellVariant::NoBorder, LayoutPosition::Center);
        assert!(cell_style(&config, true).border.is_none());
        assert!(cell_style(&config, false).border.is_none());
    }

    #[test]
    fn test_zero_border_width_draws_nothing() {
        let config = CodeFieldConfig { border_width: 0, ..Default::default() };
        assert!(cell_style(&config, true).border.is_none());
    }

    #[test]
    fn test_circle_radius_is_half_size() {
        let config = config_with(CellVariant::BorderedCircle, LayoutPosition::Center);
        let border = cell_style(&config, false).border.unwrap();
        assert_eq!(border.radius, 5);
        assert_eq!(border.width, 2);
        assert_eq!(border.sides, Sides::all());
    }

    #[test]
    fn test_margins_per_position() {
        assert_eq!(position_margin(LayoutPosition::Left, 6), Spacing::horizontal(0, 6));
        assert_eq!(position_margin(LayoutPosition::Right, 6), Spacing::horizontal(6, 0));
        assert_eq!(position_margin(LayoutPosition::Center, 6), Spacing::horizontal(3, 3));
        assert_eq!(position_margin(LayoutPosition::FullWidth, 6), Spacing::ZERO);
    }

    #[test]
    fn test_text_uses_active_color_and_overrides() {
        let mut config = config_with(CellVariant::BorderBottom, LayoutPosition::Left);
        let style = cell_style(&config, false);
        assert_eq!(style.fg, Rgba::GREEN);
        assert_eq!(style.font_size, 5);
        assert_eq!((style.width, style.height), (10, 10));

        config.overrides.cell = CellOverrides {
            color: Some(Rgba::RED),
            background: Some(Rgba::BLACK),
            attrs: Attr::BOLD,
        };
        let style = cell_style(&config, false);
        assert_eq!(style.fg, Rgba::RED);
        assert_eq!(style.bg, Rgba::BLACK);
        assert_eq!(style.attrs, Attr::BOLD);
        // Overrides never touch the border color.
        assert_eq!(style.border.unwrap().color, Rgba::GRAY);
    }
}
