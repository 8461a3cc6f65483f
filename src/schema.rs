// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Provides access to the export table.
//!
//! The export table is the explicit list of symbols that make up the public boundary consumed by
//! an external host, together with their signatures.

use std::fmt;
use std::result::Result as StdResult;

use phf::phf_ordered_map;
use serde::{Serialize, Serializer};

use crate::primitive::PrimitiveKind;

type ExportMap = phf::OrderedMap<&'static str, ExportSchema>;
type ParamMap = phf::OrderedMap<&'static str, ParamSchema>;

/// The kind of an exported symbol.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExportKind {
    /// A factory that produces a new value for use as a method receiver.
    Init,
    /// An operation called on a receiver.
    Method,
    /// A free function.
    Function,
}

impl ExportKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Method => "method",
            Self::Function => "function",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for ExportKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Schema of an exported symbol.
#[derive(Debug)]
pub struct ExportSchema {
    name: &'static str,
    doc: &'static str,
    kind: ExportKind,
    receiver: Option<PrimitiveKind>,
    params: ParamMap,
    return_kind: PrimitiveKind,
}

impl ExportSchema {
    /// Get the name of the export.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the documentation for the export.
    pub fn doc(&self) -> &'static str {
        self.doc
    }

    pub fn kind(&self) -> ExportKind {
        self.kind
    }

    /// Get the kind of receiver the export must be called on.
    ///
    /// # Returns
    /// - `Some(kind)` for methods.
    /// - `None` for inits and free functions.
    pub fn receiver(&self) -> Option<PrimitiveKind> {
        self.receiver
    }

    /// Get an iterator over the schemas of the export's parameters, in positional order.
    pub fn params(&self) -> phf::ordered_map::Values<'_, &'static str, ParamSchema> {
        self.params.values()
    }

    /// Get the schema of a parameter of the export.
    ///
    /// # Parameters
    /// - `name`: the name of the parameter to get the schema for.
    ///
    /// # Return
    /// - The parameter's schema if `name` is valid parameter name.
    /// - `None` if `name` is not a valid parameter name.
    pub fn param_by_name(&self, name: &str) -> Option<&ParamSchema> {
        self.params.get(name)
    }

    /// Get the kind of primitive value the export returns.
    pub fn return_kind(&self) -> PrimitiveKind {
        self.return_kind
    }
}

/// Schema of a parameter of an exported symbol.
#[derive(Debug)]
pub struct ParamSchema {
    index: usize,
    name: &'static str,
    doc: &'static str,
    ty: PrimitiveKind,
}

impl ParamSchema {
    /// Get the index of the parameter.
    ///
    /// This is the position in an arg pack that the arg for the parameter must take when not
    /// named.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the name of the parameter.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the documentation for the parameter.
    pub fn doc(&self) -> &'static str {
        self.doc
    }

    /// Get the kind of primitive value the parameter accepts.
    pub fn ty(&self) -> PrimitiveKind {
        self.ty
    }
}

/// Get an export's schema.
///
/// # Parameters
/// - name: the name of the exported symbol.
///
/// # Return
/// - The export's schema if `name` is exported.
/// - `None` otherwise.
pub fn get_export(name: &str) -> Option<&'static ExportSchema> {
    EXPORTS.get(name)
}

/// Get an iterator over all export schemas, in declaration order.
pub fn exports() -> phf::ordered_map::Values<'static, &'static str, ExportSchema> {
    EXPORTS.values()
}

/// Get the names of all exports, in declaration order.
pub fn export_names() -> Vec<&'static str> {
    EXPORTS.keys().copied().collect()
}

static EXPORTS: ExportMap = phf_ordered_map! {
    "create" => ExportSchema {
        name: "create",
        doc: "Create a new ScalarValue holding the given number.",
        kind: ExportKind::Init,
        receiver: None,
        params: phf_ordered_map! {
            "a" => ParamSchema {
                index: 0,
                name: "a",
                doc: "The number to wrap.",
                ty: PrimitiveKind::F32,
            },
        },
        return_kind: PrimitiveKind::Scalar,
    },
    "add" => ExportSchema {
        name: "add",
        doc: "Add a number to the receiver's value.",
        kind: ExportKind::Method,
        receiver: Some(PrimitiveKind::Scalar),
        params: phf_ordered_map! {
            "b" => ParamSchema {
                index: 0,
                name: "b",
                doc: "The number to add.",
                ty: PrimitiveKind::F32,
            },
        },
        return_kind: PrimitiveKind::F32,
    },
    "mul" => ExportSchema {
        name: "mul",
        doc: "Multiply the receiver's value by a number.",
        kind: ExportKind::Method,
        receiver: Some(PrimitiveKind::Scalar),
        params: phf_ordered_map! {
            "b" => ParamSchema {
                index: 0,
                name: "b",
                doc: "The number to multiply by.",
                ty: PrimitiveKind::F32,
            },
        },
        return_kind: PrimitiveKind::F32,
    },
    "subtract" => ExportSchema {
        name: "subtract",
        doc: "Subtract one number from another.",
        kind: ExportKind::Function,
        receiver: None,
        params: phf_ordered_map! {
            "a" => ParamSchema {
                index: 0,
                name: "a",
                doc: "The number to subtract from.",
                ty: PrimitiveKind::F32,
            },
            "b" => ParamSchema {
                index: 1,
                name: "b",
                doc: "The number to subtract.",
                ty: PrimitiveKind::F32,
            },
        },
        return_kind: PrimitiveKind::F32,
    },
};
