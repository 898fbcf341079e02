//! Raw touch-point samples
//!
//! A sample is the full set of touches currently on the surface. Ordering
//! is not guaranteed stable across samples, and touches may appear or
//! disappear without a paired start/end event.

/// One active touch point in surface pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Platform-assigned identifier, stable for the lifetime of the touch
    pub id: u64,
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub fn new(id: u64, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }

    /// Euclidean distance to another touch point
    pub fn distance_to(&self, other: &TouchPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
