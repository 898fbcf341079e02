//! Transform snapshots and paint colors
//!
//! Every asset carries its own [`TransformSnapshot`]; switching the active
//! asset never carries scale or rotation over from the previous one.

/// RGB paint color applied to an asset's paintable parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_hex(0x000000);
    pub const BLUE: Color = Color::from_hex(0x0000ff);
    pub const ORANGE: Color = Color::from_hex(0xffa500);
    pub const SILVER: Color = Color::from_hex(0xc0c0c0);

    /// Creates a color from a 0xRRGGBB value
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

/// Current manipulation state of a single asset
///
/// Scale is uniform and multiplicative under pinch gestures; rotation is a
/// yaw angle in radians, additive under drag gestures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformSnapshot {
    /// Uniform scale factor
    pub scale: f32,
    /// Yaw rotation in radians
    pub rotation_y: f32,
    /// Last applied paint color, if any
    pub color: Option<Color>,
}

impl TransformSnapshot {
    /// Multiplies the scale by a gesture factor, clamped to the given range
    pub fn scale_by(&mut self, factor: f32, min: f32, max: f32) {
        self.scale = (self.scale * factor).clamp(min, max);
    }

    /// Adds a yaw delta in radians
    pub fn rotate_by(&mut self, delta_angle: f32) {
        self.rotation_y += delta_angle;
    }
}

impl Default for TransformSnapshot {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation_y: 0.0,
            color: None,
        }
    }
}
