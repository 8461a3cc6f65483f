// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

pub mod dispatch;
pub mod error;
pub mod exportcall;
pub mod manifest;
pub mod primitive;
pub mod scalar;
pub mod schema;
pub mod util;

pub use scalar::{create, subtract, ScalarValue};

#[cfg(test)]
pub mod test_util;
