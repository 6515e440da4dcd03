//! Layout result types.

/// Position and size of one cell, relative to the field's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl CellRect {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

/// Computed layout of a whole field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldLayout {
    pub width: u16,
    pub height: u16,
    pub cells: Vec<CellRect>,
}

impl FieldLayout {
    /// Index of the cell under a point, if any.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<usize> {
        self.cells.iter().position(|cell| cell.contains(x, y))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("layout engine error: {0}")]
    Taffy(#[from] taffy::TaffyError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test() {
        let layout = FieldLayout {
            width: 10,
            height: 3,
            cells: vec![
                CellRect { x: 0, y: 0, width: 3, height: 3 },
                CellRect { x: 5, y: 0, width: 3, height: 3 },
            ],
        };
        assert_eq!(layout.hit_test(1, 1), Some(0));
        assert_eq!(layout.hit_test(7, 2), Some(1));
        assert_eq!(layout.hit_test(4, 1), None);
        assert_eq!(layout.hit_test(1, 3), None);
    }

    #[test]
    fn test_contains_at_coordinate_limit() {
        let rect = CellRect { x: u16::MAX - 1, y: u16::MAX - 1, width: 3, height: 3 };
        assert!(rect.contains(u16::MAX - 1, u16::MAX - 1));
        assert!(!rect.contains(0, 0));
    }
}
