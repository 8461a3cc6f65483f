// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The scalar value type and the free arithmetic functions.
//!
//! Everything here uses plain IEEE-754 single precision arithmetic, so every operation is total:
//! NaN and infinities propagate by the usual rules and nothing can fail.

use serde::Serialize;

/// An immutable wrapper around a single `f32`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[must_use]
pub struct ScalarValue {
    value: f32,
}

impl ScalarValue {
    pub fn new(value: f32) -> Self {
        Self { value }
    }

    /// Get the wrapped number.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Add `b` to the wrapped number.
    pub fn add(&self, b: f32) -> f32 {
        self.value + b
    }

    /// Multiply the wrapped number by `b`.
    pub fn mul(&self, b: f32) -> f32 {
        self.value * b
    }
}

impl From<f32> for ScalarValue {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

/// Create a new `ScalarValue` holding `a`.
///
/// This is the exported factory; any bit pattern is accepted.
pub fn create(a: f32) -> ScalarValue {
    ScalarValue::new(a)
}

/// Subtract `b` from `a`.
pub fn subtract(a: f32, b: f32) -> f32 {
    a - b
}
