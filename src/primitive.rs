// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Definitions relating to the primitive values passed across the export boundary.

use std::fmt;
use std::result::Result as StdResult;

use serde::{Serialize, Serializer};
use thiserror::Error as ThisError;

use crate::scalar::ScalarValue;
use crate::util::{TryAs, TryAsRef};

/// The kind of a primitive value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PrimitiveKind {
    F32,
    Scalar,
}

impl PrimitiveKind {
    /// Get the name of the kind of primitive value.
    ///
    /// This is the name a host sees in the export manifest.
    pub fn name(&self) -> &'static str {
        match self {
            Self::F32 => "f32",
            Self::Scalar => "ScalarValue",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for PrimitiveKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A primitive value.
///
/// This type is used for export call arguments, receivers and return values.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Primitive {
    F32(f32),
    Scalar(ScalarValue),
}

/// Error returned when a `Primitive::try_as*` method fails.
#[derive(Debug, ThisError)]
pub enum PrimitiveTryAsError {
    #[error("Cannot convert primitive of type {kind} to {target}")]
    TypeMismatch {
        kind: PrimitiveKind,
        target: PrimitiveKind,
    },
}

impl PrimitiveTryAsError {
    pub fn type_mismatch(value: &Primitive, target: PrimitiveKind) -> Self {
        Self::TypeMismatch {
            kind: value.kind(),
            target,
        }
    }
}

impl Primitive {
    /// Get the name of the kind of the primitive value.
    pub fn kind_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Get the kind of the primitive value.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::F32(_) => PrimitiveKind::F32,
            Self::Scalar(_) => PrimitiveKind::Scalar,
        }
    }
}

impl TryAs<f32> for Primitive {
    type Error = PrimitiveTryAsError;
    fn try_as(&self) -> StdResult<f32, Self::Error> {
        match self {
            Self::F32(v) => Ok(*v),
            _ => Err(PrimitiveTryAsError::type_mismatch(self, PrimitiveKind::F32)),
        }
    }
}

impl TryAsRef<ScalarValue> for Primitive {
    type Error = PrimitiveTryAsError;
    fn try_as_ref(&self) -> StdResult<&ScalarValue, Self::Error> {
        match self {
            Self::Scalar(v) => Ok(v),
            _ => Err(PrimitiveTryAsError::type_mismatch(
                self,
                PrimitiveKind::Scalar,
            )),
        }
    }
}

impl From<f32> for Primitive {
    fn from(v: f32) -> Self {
        Self::F32(v)
    }
}

impl From<ScalarValue> for Primitive {
    fn from(v: ScalarValue) -> Self {
        Self::Scalar(v)
    }
}
