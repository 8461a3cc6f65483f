// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Types related to export calls.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::primitive::{Primitive, PrimitiveKind, PrimitiveTryAsError};
use crate::schema::ExportSchema;
use crate::scalar::ScalarValue;
use crate::util::{TryAs, TryAsRef};

/// A named argument in an `ArgPack`.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedArg {
    pub name: String,
    pub value: Primitive,
}

/// The arguments given to an export call.
///
/// Positional args fill parameters in order; named args fill the parameter with the same name.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArgPack {
    pub pos_args: Vec<Primitive>,
    pub named_args: Vec<NamedArg>,
}

impl ArgPack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn pos(mut self, value: impl Into<Primitive>) -> Self {
        self.pos_args.push(value.into());
        self
    }

    /// Append a named argument.
    pub fn named(mut self, name: &str, value: impl Into<Primitive>) -> Self {
        self.named_args.push(NamedArg {
            name: name.to_owned(),
            value: value.into(),
        });
        self
    }

    /// Get the total number of arguments.
    pub fn len(&self) -> usize {
        self.pos_args.len() + self.named_args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A validated call of an exported symbol.
///
/// # Lifetimes
/// * `'a`: the lifetime of the receiver and arguments that an `ExportCall` references.
#[must_use]
#[derive(Clone, Debug)]
pub struct ExportCall<'a> {
    schema: &'static ExportSchema,
    receiver: Option<&'a Primitive>,
    args: &'a ArgPack,
}

impl<'a> ExportCall<'a> {
    /// Create a new `ExportCall` object.
    ///
    /// # Parameters
    /// - `schema`: the schema for the export being called.
    /// - `receiver`: the value a method is called on, `None` for inits and functions.
    /// - `args`: the arguments for the call.
    ///
    /// # Returns
    /// - The call if the receiver and arguments match the export's signature.
    /// - The first signature violation found otherwise.
    pub fn new(
        schema: &'static ExportSchema,
        receiver: Option<&'a Primitive>,
        args: &'a ArgPack,
    ) -> Result<Self> {
        let ret = Self {
            schema,
            receiver,
            args,
        };
        ret.validate_receiver()?;
        ret.validate_args()?;

        Ok(ret)
    }

    /// Get the schema of the export being called.
    pub fn schema(&self) -> &'static ExportSchema {
        self.schema
    }

    /// Get the name of the export being called.
    pub fn export_name(&self) -> &'static str {
        self.schema.name()
    }

    /// Check that a receiver is given if and only if the export is a method, and that it has the
    /// right type.
    pub fn validate_receiver(&self) -> Result<()> {
        match (self.schema.receiver(), self.receiver) {
            (Some(expecting), None) => Err(Box::new(Error::ReceiverMissing {
                export_name: self.export_name().to_owned(),
                receiver: expecting,
            })),
            (Some(expecting), Some(receiver)) if receiver.kind() != expecting => {
                Err(Box::new(Error::ReceiverTypeMismatch {
                    export_name: self.export_name().to_owned(),
                    expecting,
                    got: receiver.kind(),
                }))
            }
            (None, Some(_)) => Err(Box::new(Error::UnexpectedReceiver {
                export_name: self.export_name().to_owned(),
                kind: self.schema.kind(),
            })),
            _ => Ok(()),
        }
    }

    /// Check that the call's arguments are valid and complete.
    pub fn validate_args(&self) -> Result<()> {
        let num_args = self.args.len();
        let num_params = self.schema.params().len();
        if num_args > num_params {
            return Err(Box::new(Error::TooManyArgs {
                export_name: self.export_name().to_owned(),
                max: num_params,
                got: num_args,
            }));
        }

        let mut seen_named: HashSet<&str> = HashSet::new();
        for named_arg in &self.args.named_args {
            let name = named_arg.name.as_str();

            if !seen_named.insert(name) {
                return Err(self.repeated_arg_error(name));
            }

            let Some(param) = self.schema.param_by_name(name) else {
                return Err(Box::new(Error::InvalidArgName {
                    export_name: self.export_name().to_owned(),
                    name: name.to_owned(),
                }));
            };

            if param.index() < self.args.pos_args.len() {
                return Err(self.repeated_arg_error(name));
            }
        }

        for param in self.schema.params() {
            match param.ty() {
                PrimitiveKind::F32 => {
                    self.arg::<f32>(param.index(), param.name())?;
                }
                PrimitiveKind::Scalar => {
                    self.arg_ref::<ScalarValue>(param.index(), param.name())?;
                }
            }
        }

        Ok(())
    }

    fn opt_arg_value(&self, index: usize, name: &str) -> Option<&'a Primitive> {
        if let Some(value) = self.args.pos_args.get(index) {
            return Some(value);
        }

        self.args
            .named_args
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| &arg.value)
    }

    fn arg_value(&self, index: usize, name: &str) -> Result<&'a Primitive> {
        self.opt_arg_value(index, name).ok_or_else(|| {
            Box::new(Error::ArgMissing {
                export_name: self.export_name().to_owned(),
                param_name: name.to_owned(),
            })
        })
    }

    /// Get a copy of an argument passed to the export call.
    ///
    /// # Parameters
    /// - `index`: the zero-based index of the parameter for which an argument is requested.
    /// - `name`: the name of the parameter for which an argument is requested.
    ///
    /// # Returns
    /// - A copy of the value of the argument if it was given.
    /// - `Error::ArgMissing`: if the argument was not given.
    /// - `Error::ArgTypeMismatch`: if the type of the argument does not match `T`.
    pub fn arg<T>(&self, index: usize, name: &str) -> Result<T>
    where
        Primitive: TryAs<T, Error = PrimitiveTryAsError>,
    {
        let value = self.arg_value(index, name)?;
        value
            .try_as()
            .map_err(|e| self.arg_type_mismatch_error(name, e))
    }

    /// Get a reference to an argument passed to the export call.
    ///
    /// Like `arg` but for types that are borrowed out of the `Primitive`.
    pub fn arg_ref<T: ?Sized>(&self, index: usize, name: &str) -> Result<&'a T>
    where
        Primitive: TryAsRef<T, Error = PrimitiveTryAsError>,
    {
        let value = self.arg_value(index, name)?;
        value
            .try_as_ref()
            .map_err(|e| self.arg_type_mismatch_error(name, e))
    }

    /// Get the receiver of a method call.
    ///
    /// # Returns
    /// - The receiver, borrowed as a `T`.
    /// - `Error::UnexpectedReceiver`: if the export is not a method.
    /// - `Error::ReceiverMissing`: if no receiver was given.
    /// - `Error::ReceiverTypeMismatch`: if the receiver is not a `T`.
    pub fn receiver<T: ?Sized>(&self) -> Result<&'a T>
    where
        Primitive: TryAsRef<T, Error = PrimitiveTryAsError>,
    {
        let Some(expecting) = self.schema.receiver() else {
            return Err(Box::new(Error::UnexpectedReceiver {
                export_name: self.export_name().to_owned(),
                kind: self.schema.kind(),
            }));
        };
        let Some(receiver) = self.receiver else {
            return Err(Box::new(Error::ReceiverMissing {
                export_name: self.export_name().to_owned(),
                receiver: expecting,
            }));
        };
        receiver.try_as_ref().map_err(|e| match e {
            PrimitiveTryAsError::TypeMismatch { kind, target } => {
                Box::new(Error::ReceiverTypeMismatch {
                    export_name: self.export_name().to_owned(),
                    expecting: target,
                    got: kind,
                })
            }
        })
    }

    fn arg_type_mismatch_error(&self, name: &str, e: PrimitiveTryAsError) -> Box<Error> {
        match e {
            PrimitiveTryAsError::TypeMismatch { kind, target } => {
                Box::new(Error::ArgTypeMismatch {
                    export_name: self.export_name().to_owned(),
                    param_name: name.to_owned(),
                    expecting: target,
                    got: kind,
                })
            }
        }
    }

    fn repeated_arg_error(&self, name: &str) -> Box<Error> {
        Box::new(Error::RepeatedNamedArg {
            export_name: self.export_name().to_owned(),
            name: name.to_owned(),
        })
    }
}
