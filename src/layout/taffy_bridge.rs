//! Taffy Bridge - cell placement with the Taffy flexbox engine
//!
//! The field is one row container holding `code_length` fixed-size leaves.
//! The layout position picks the container's `justify_content`; each cell
//! carries the margins of [`position_margin`].

use taffy::{
    AlignItems, AvailableSpace, Dimension, Display, FlexDirection, JustifyContent,
    LengthPercentage, LengthPercentageAuto, NodeId, Rect, Size, Style, TaffyTree,
};

use crate::config::{CodeFieldConfig, LayoutPosition};
use crate::theme::position_margin;
use crate::types::Spacing;

use super::types::{CellRect, FieldLayout, LayoutError};

fn to_taffy_justify(position: LayoutPosition) -> JustifyContent {
    match position {
        LayoutPosition::Left => JustifyContent::FlexStart,
        LayoutPosition::Right => JustifyContent::FlexEnd,
        LayoutPosition::Center => JustifyContent::Center,
        LayoutPosition::FullWidth => JustifyContent::SpaceBetween,
    }
}

fn to_taffy_margin(margin: Spacing) -> Rect<LengthPercentageAuto> {
    Rect {
        top: LengthPercentageAuto::Length(margin.top as f32),
        right: LengthPercentageAuto::Length(margin.right as f32),
        bottom: LengthPercentageAuto::Length(margin.bottom as f32),
        left: LengthPercentageAuto::Length(margin.left as f32),
    }
}

fn to_taffy_padding(padding: Spacing) -> Rect<LengthPercentage> {
    Rect {
        top: LengthPercentage::Length(padding.top as f32),
        right: LengthPercentage::Length(padding.right as f32),
        bottom: LengthPercentage::Length(padding.bottom as f32),
        left: LengthPercentage::Length(padding.left as f32),
    }
}

fn cell_style(config: &CodeFieldConfig) -> Style {
    let size = config.size as f32;
    Style {
        size: Size {
            width: Dimension::Length(size),
            height: Dimension::Length(size),
        },
        flex_shrink: 0.0,
        margin: to_taffy_margin(position_margin(config.position, config.space)),
        ..Default::default()
    }
}

fn container_style(config: &CodeFieldConfig, width: u16) -> Style {
    Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Row,
        justify_content: Some(to_taffy_justify(config.position)),
        align_items: Some(AlignItems::Center),
        size: Size {
            width: Dimension::Length(width as f32),
            height: Dimension::Auto,
        },
        padding: to_taffy_padding(config.overrides.container.padding),
        ..Default::default()
    }
}

/// Place every cell of a field inside a container `available_width` wide.
///
/// Coordinates are relative to the container's top-left corner.
pub fn place_cells(config: &CodeFieldConfig, available_width: u16) -> Result<FieldLayout, LayoutError> {
    let mut tree: TaffyTree<()> = TaffyTree::new();

    let leaves: Vec<NodeId> = (0..config.cell_count())
        .map(|_| tree.new_leaf(cell_style(config)))
        .collect::<Result<_, _>>()?;
    let root = tree.new_with_children(container_style(config, available_width), &leaves)?;

    let available = Size {
        width: AvailableSpace::Definite(available_width as f32),
        height: AvailableSpace::MaxContent,
    };
    tree.compute_layout(root, available)?;

    let container = tree.layout(root)?;
    let mut cells = Vec::with_capacity(leaves.len());
    for &leaf in &leaves {
        let layout = tree.layout(leaf)?;
        cells.push(CellRect {
            x: layout.location.x.round() as u16,
            y: layout.location.y.round() as u16,
            width: layout.size.width.round() as u16,
            height: layout.size.height.round() as u16,
        });
    }

    Ok(FieldLayout {
        width: container.size.width.round() as u16,
        height: container.size.height.round() as u16,
        cells,
    })
}
