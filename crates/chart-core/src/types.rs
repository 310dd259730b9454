// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (grid shape, panel size, margins).

/// Panels per grid row.
pub const COLUMNS: usize = 3;
/// Outer height of every panel in pixels, independent of the data.
pub const PANEL_HEIGHT: f64 = 300.0;
/// Requested tick count on the time (bottom) axis.
pub const TIME_TICKS: usize = 3;
/// Requested tick count on the amount (left) axis.
pub const AMOUNT_TICKS: usize = 1;

/// Margins around a panel's plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(50, 20, 20, 30)
    }
}
