// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Error types.
use miette::Diagnostic;
use thiserror::Error as ThisError;

use crate::primitive::PrimitiveKind;
use crate::schema::ExportKind;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    UnknownExport,
    TooManyArgs,
    ArgMissing,
    ArgTypeMismatch,
    RepeatedNamedArg,
    InvalidArgName,
    ReceiverMissing,
    ReceiverTypeMismatch,
    UnexpectedReceiver,
    Serialize,
}

/// Type of error returned when calling through the export table.
///
/// The arithmetic itself never fails; every variant here describes a malformed call or a failure
/// to produce the export manifest.
#[derive(Debug, Diagnostic, ThisError)]
#[must_use]
pub enum Error {
    /// An error when the requested symbol is not in the export table.
    #[error("unknown export {name:?}, expecting one of {}", itertools::join(known.iter(), ", "))]
    #[diagnostic(code(scalar_export::unknown_export))]
    UnknownExport {
        name: String,
        known: Vec<&'static str>,
    },

    /// An error when more arguments are given than the export has parameters.
    ///
    /// E.g. `add(1.0, 2.0)`.
    #[error("too many args for {export_name}: expecting at most {max} got {got}")]
    #[diagnostic()]
    TooManyArgs {
        export_name: String,
        max: usize,
        got: usize,
    },

    /// An error when no argument is given for a parameter.
    #[error("missing parameter {param_name:?} for {export_name}")]
    #[diagnostic()]
    ArgMissing {
        export_name: String,
        param_name: String,
    },

    /// An error when an argument's type is incorrect.
    ///
    /// E.g. passing a `ScalarValue` as the `b` argument of `add`.
    #[error("type mismatch for {export_name} param {param_name:?}: expecting {expecting} got {got}")]
    #[diagnostic()]
    ArgTypeMismatch {
        export_name: String,
        param_name: String,
        expecting: PrimitiveKind,
        got: PrimitiveKind,
    },

    /// An error when a named argument is given more than once, or is given by name as well as by
    /// position.
    #[error("arg {name} given more than once for {export_name}")]
    #[diagnostic()]
    RepeatedNamedArg { export_name: String, name: String },

    /// An error when a named argument doesn't match any parameter.
    #[error("{export_name} has no parameter named {name:?}")]
    #[diagnostic()]
    InvalidArgName { export_name: String, name: String },

    /// An error when a method is called without a receiver.
    #[error("method {export_name} requires a {receiver} receiver")]
    #[diagnostic(help("pass the value returned by an init export as the receiver"))]
    ReceiverMissing {
        export_name: String,
        receiver: PrimitiveKind,
    },

    /// An error when a method is called on a receiver of the wrong type.
    #[error("receiver type mismatch for {export_name}: expecting {expecting} got {got}")]
    #[diagnostic()]
    ReceiverTypeMismatch {
        export_name: String,
        expecting: PrimitiveKind,
        got: PrimitiveKind,
    },

    /// An error when a receiver is given for an export that isn't a method.
    #[error("{kind} export {export_name} does not take a receiver")]
    #[diagnostic()]
    UnexpectedReceiver {
        export_name: String,
        kind: ExportKind,
    },

    /// An error when the manifest serializer fails.
    #[error("internal error: failed to serialize export manifest: {msg}")]
    #[diagnostic()]
    Serialize { msg: String },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnknownExport { .. } => ErrorKind::UnknownExport,
            Error::TooManyArgs { .. } => ErrorKind::TooManyArgs,
            Error::ArgMissing { .. } => ErrorKind::ArgMissing,
            Error::ArgTypeMismatch { .. } => ErrorKind::ArgTypeMismatch,
            Error::RepeatedNamedArg { .. } => ErrorKind::RepeatedNamedArg,
            Error::InvalidArgName { .. } => ErrorKind::InvalidArgName,
            Error::ReceiverMissing { .. } => ErrorKind::ReceiverMissing,
            Error::ReceiverTypeMismatch { .. } => ErrorKind::ReceiverTypeMismatch,
            Error::UnexpectedReceiver { .. } => ErrorKind::UnexpectedReceiver,
            Error::Serialize { .. } => ErrorKind::Serialize,
        }
    }
}

/// A value or an `Error`
pub type Result<T> = std::result::Result<T, Box<Error>>;
