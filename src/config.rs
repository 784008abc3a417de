/// Viewport width (px) below which the mobile layout applies.
pub const MOBILE_MAX_WIDTH: f64 = 768.0;

/// Viewport width (px) below which the super-mobile layout applies.
/// Always narrower than the mobile threshold.
pub const SUPER_MOBILE_MAX_WIDTH: f64 = 360.0;
