//! Blob descriptor types

/// Axis-aligned box in pixel coordinates; `width` and `height` count pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundingBox {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl BoundingBox {
    /// Exclusive right edge.
    pub fn x_end(&self) -> usize {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn y_end(&self) -> usize {
        self.y + self.height
    }
}

/// One connected region of a labeled image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    /// Label value of the region's pixels in the labeled image (1..=254)
    pub label: u8,
    pub bbox: BoundingBox,
    /// Number of member pixels
    pub area: usize,
    /// Member pixels with at least one 4-neighbour carrying another label
    pub perimeter: usize,
    /// Mean member coordinate, truncated; (0, 0) for an empty blob
    pub centroid: (usize, usize),
}

impl Blob {
    pub fn new(label: u8) -> Self {
        Self {
            label,
            bbox: BoundingBox::default(),
            area: 0,
            perimeter: 0,
            centroid: (0, 0),
        }
    }
}
