// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

use pretty_assertions::assert_eq;
use serde_json::{json, Value as JsonValue};

use scalar_export::manifest;

#[test]
fn test_manifest_json() {
    let manifest: JsonValue = serde_json::from_str(&manifest::manifest_json().unwrap()).unwrap();
    assert_eq!(
        manifest,
        json!([
            {
                "name": "create",
                "doc": "Create a new ScalarValue holding the given number.",
                "kind": "init",
                "receiver": null,
                "params": [
                    {"index": 0, "name": "a", "doc": "The number to wrap.", "type": "f32"}
                ],
                "returns": "ScalarValue"
            },
            {
                "name": "add",
                "doc": "Add a number to the receiver's value.",
                "kind": "method",
                "receiver": "ScalarValue",
                "params": [
                    {"index": 0, "name": "b", "doc": "The number to add.", "type": "f32"}
                ],
                "returns": "f32"
            },
            {
                "name": "mul",
                "doc": "Multiply the receiver's value by a number.",
                "kind": "method",
                "receiver": "ScalarValue",
                "params": [
                    {"index": 0, "name": "b", "doc": "The number to multiply by.", "type": "f32"}
                ],
                "returns": "f32"
            },
            {
                "name": "subtract",
                "doc": "Subtract one number from another.",
                "kind": "function",
                "receiver": null,
                "params": [
                    {"index": 0, "name": "a", "doc": "The number to subtract from.", "type": "f32"},
                    {"index": 1, "name": "b", "doc": "The number to subtract.", "type": "f32"}
                ],
                "returns": "f32"
            }
        ])
    );
}
