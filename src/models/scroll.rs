//! Scroll event models
//!
//! Deltas are in pixels. A positive `y` moves content down, revealing earlier
//! content (scrolling toward the start of a list).

use std::ops::{Add, AddAssign, Sub};

/// 2D pixel delta
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// A purely vertical delta
    pub fn vertical(y: f32) -> Self {
        Self { x: 0.0, y }
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Offset {
    fn add_assign(&mut self, rhs: Offset) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Where a scroll delta came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollSource {
    /// Pointer drag
    Drag,
    /// Mouse wheel
    Wheel,
    /// Arrow and page keys
    Keyboard,
    /// Momentum after a gesture ends
    Fling,
    /// Programmatic scroll (jump to top/bottom)
    Program,
}

/// A single scroll event travelling through the nested scroll chain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSignal {
    pub available: Offset,
    pub source: ScrollSource,
}

impl ScrollSignal {
    pub fn new(available: Offset, source: ScrollSource) -> Self {
        Self { available, source }
    }
}
