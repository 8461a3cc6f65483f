// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Dispatch calls of exported symbols by name.
//!
//! This is the surface a binding host drives: it names an export, optionally passes a receiver,
//! and passes dynamically-typed arguments. Calls are checked against the export table before the
//! concrete Rust function runs.

use crate::error::{Error, Result};
use crate::exportcall::{ArgPack, ExportCall};
use crate::primitive::Primitive;
use crate::scalar::{self, ScalarValue};
use crate::schema;

/// Call an exported symbol.
///
/// # Parameters
/// - `name`: the name of the export to call.
/// - `receiver`: the value to call a method on, `None` for inits and free functions.
/// - `args`: the arguments for the call.
///
/// # Returns
/// - The export's return value.
/// - `Error::UnknownExport`: if `name` is not exported.
/// - Any error from `ExportCall::new` if the receiver or args don't fit the export's signature.
pub fn call(name: &str, receiver: Option<&Primitive>, args: &ArgPack) -> Result<Primitive> {
    tracing::debug!(export = name, num_args = args.len(), "dispatching export call");

    let result = schema::get_export(name)
        .ok_or_else(|| {
            Box::new(Error::UnknownExport {
                name: name.to_owned(),
                known: schema::export_names(),
            })
        })
        .and_then(|schema| ExportCall::new(schema, receiver, args))
        .and_then(|call| invoke(&call));

    match &result {
        Ok(value) => tracing::trace!(export = name, result = ?value, "export call returned"),
        Err(e) => tracing::debug!(export = name, kind = ?e.kind(), "export call rejected: {e}"),
    }

    result
}

/// Run the Rust implementation of a validated call.
fn invoke(call: &ExportCall) -> Result<Primitive> {
    match call.export_name() {
        "create" => Ok(scalar::create(call.arg::<f32>(0, "a")?).into()),
        "add" => Ok(call.receiver::<ScalarValue>()?.add(call.arg::<f32>(0, "b")?).into()),
        "mul" => Ok(call.receiver::<ScalarValue>()?.mul(call.arg::<f32>(0, "b")?).into()),
        "subtract" => {
            let a = call.arg::<f32>(0, "a")?;
            let b = call.arg::<f32>(1, "b")?;
            Ok(scalar::subtract(a, b).into())
        }
        other => panic!("export {other} is in the export table but has no implementation"),
    }
}
