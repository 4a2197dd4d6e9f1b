//! Rectangle and circle value types.

use crate::JsonObject;
use core::f64::consts::PI;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width times height.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl JsonObject for Rectangle {}

/// A circle described by its radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub const fn new(radius: f64) -> Self {
        Self { radius }
    }

    #[inline]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

impl JsonObject for Circle {}
