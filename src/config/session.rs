use std::time::Duration;

/// Session-wide tunables with sanitized bounds
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// One-finger drag sensitivity, in radians of yaw per pixel
    pub rotation_sensitivity: f32,
    /// How long animation clips play after an asset is activated
    pub animation_auto_stop: Duration,
    /// Lower clamp for an asset's uniform scale
    pub min_scale: f32,
    /// Upper clamp for an asset's uniform scale
    pub max_scale: f32,
}

impl SessionConfig {
    pub const DEFAULT_ROTATION_SENSITIVITY: f32 = 0.01;
    pub const DEFAULT_AUTO_STOP_MS: u64 = 9_999;
    pub const MIN_SCALE_LIMIT: f32 = 0.001;
    pub const MAX_SCALE_LIMIT: f32 = 1_000.0;
    pub const MIN_SENSITIVITY: f32 = 0.0001;
    pub const MAX_SENSITIVITY: f32 = 1.0;

    /// Clamps a requested sensitivity into the supported range
    pub fn sanitize_sensitivity(value: f32) -> f32 {
        value.clamp(Self::MIN_SENSITIVITY, Self::MAX_SENSITIVITY)
    }

    /// Clamps a requested scale into the supported range
    pub fn sanitize_scale(value: f32) -> f32 {
        value.clamp(Self::MIN_SCALE_LIMIT, Self::MAX_SCALE_LIMIT)
    }

    /// Builds a config with a custom sensitivity, keeping other defaults
    pub fn with_sensitivity(rotation_sensitivity: f32) -> Self {
        Self {
            rotation_sensitivity: Self::sanitize_sensitivity(rotation_sensitivity),
            ..Self::default()
        }
    }

    /// Auto-stop duration as tick-time seconds
    pub fn auto_stop_secs(&self) -> f32 {
        self.animation_auto_stop.as_secs_f32()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rotation_sensitivity: Self::DEFAULT_ROTATION_SENSITIVITY,
            animation_auto_stop: Duration::from_millis(Self::DEFAULT_AUTO_STOP_MS),
            min_scale: Self::MIN_SCALE_LIMIT,
            max_scale: Self::MAX_SCALE_LIMIT,
        }
    }
}
