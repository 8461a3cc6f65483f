// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

use pretty_assertions::assert_eq;

use scalar_export::dispatch;
use scalar_export::error::{ErrorKind, Result};
use scalar_export::exportcall::ArgPack;
use scalar_export::primitive::Primitive;

/// Call an export, first creating a receiver through the `create` export if `receiver` is given.
pub fn run_call(name: &str, receiver: Option<f32>, args: &ArgPack) -> Result<Primitive> {
    let receiver = receiver
        .map(|r| dispatch::call("create", None, &ArgPack::new().pos(r)))
        .transpose()?;
    dispatch::call(name, receiver.as_ref(), args)
}

// Rust doesn't seem to see that this function is actually used.
#[allow(dead_code)]
pub fn test_call_ok(name: &str, receiver: Option<f32>, args: &ArgPack, expected: Primitive) {
    assert_eq!(run_call(name, receiver, args).unwrap(), expected);
}

// Rust doesn't seem to see that this macro is actually used.
#[allow(unused_macros)]
macro_rules! test_simple_call_ok {
    ($name:ident, $($case_name:ident, $export:expr, $receiver:expr, $args:expr, $expected:expr;)*) => {
        // Put the test function in a new module to avoid "use" statements polluting the caller's
        // namespace
        mod $name {
            use rstest::rstest;
            use scalar_export::exportcall::ArgPack;
            use scalar_export::primitive::Primitive;
            #[rstest]
            $(#[case::$case_name($export, $receiver, $args, $expected)])*
            fn test_call_ok(
                #[case] export: &str,
                #[case] receiver: Option<f32>,
                #[case] args: ArgPack,
                #[case] expected: Primitive,
            ) {
                $crate::integration_test_util::test_call_ok(export, receiver, &args, expected);
            }
        }
    }
}
#[allow(unused_imports)]
pub(crate) use test_simple_call_ok;

// Rust doesn't seem to see that this function is actually used.
#[allow(dead_code)]
pub fn test_call_err(name: &str, receiver: Option<f32>, args: &ArgPack, kind: ErrorKind) {
    assert_eq!(run_call(name, receiver, args).unwrap_err().kind(), kind);
}

// Rust doesn't seem to see that this macro is actually used.
#[allow(unused_macros)]
macro_rules! test_simple_call_err {
    ($name:ident, $($case_name:ident, $export:expr, $receiver:expr, $args:expr, $expected:ident;)*) => {
        // Put the test function in a new module to avoid "use" statements polluting the caller's
        // namespace
        mod $name {
            use rstest::rstest;
            use scalar_export::error::ErrorKind;
            use scalar_export::exportcall::ArgPack;
            #[rstest]
            $(#[case::$case_name($export, $receiver, $args, ErrorKind::$expected)])*
            fn test_call_err(
                #[case] export: &str,
                #[case] receiver: Option<f32>,
                #[case] args: ArgPack,
                #[case] expected: ErrorKind,
            ) {
                $crate::integration_test_util::test_call_err(export, receiver, &args, expected);
            }
        }
    }
}
#[allow(unused_imports)]
pub(crate) use test_simple_call_err;
