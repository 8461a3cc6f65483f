// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Functions to generate the export manifest.
//!
//! The manifest is a serialized form of the export table, for consumption by a binding generator
//! outside this crate.

use serde::ser::{Serialize, SerializeSeq, SerializeStruct, Serializer};

use crate::error::{Error, Result};
use crate::schema::{self, ExportSchema, ParamSchema};

type StdResult<T, E> = std::result::Result<T, E>;

/// Serializable view of an `ExportSchema`.
struct ExportEntry(&'static ExportSchema);

impl Serialize for ExportEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        let export = self.0;
        let mut st = serializer.serialize_struct("Export", 6)?;
        st.serialize_field("name", export.name())?;
        st.serialize_field("doc", export.doc())?;
        st.serialize_field("kind", &export.kind())?;
        st.serialize_field("receiver", &export.receiver())?;
        st.serialize_field("params", &ParamEntries(export))?;
        st.serialize_field("returns", &export.return_kind())?;
        st.end()
    }
}

/// Serializable view of the parameters of an `ExportSchema`.
struct ParamEntries(&'static ExportSchema);

impl Serialize for ParamEntries {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.params().len()))?;
        for param in self.0.params() {
            seq.serialize_element(&ParamEntry(param))?;
        }
        seq.end()
    }
}

/// Serializable view of a `ParamSchema`.
struct ParamEntry(&'static ParamSchema);

impl Serialize for ParamEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        let param = self.0;
        let mut st = serializer.serialize_struct("Param", 4)?;
        st.serialize_field("index", &param.index())?;
        st.serialize_field("name", param.name())?;
        st.serialize_field("doc", param.doc())?;
        st.serialize_field("type", &param.ty())?;
        st.end()
    }
}

/// Serialize the export table, in declaration order.
///
/// # Parameters
/// - `serializer`: the serializer to write the manifest with.
///
/// # Returns
/// - The serializer's output.
/// - `Error::Serialize`: if the serializer fails.
pub fn generate_manifest<S: Serializer>(serializer: S) -> Result<S::Ok> {
    let exports = schema::exports();
    let mut seq = serializer
        .serialize_seq(Some(exports.len()))
        .map_err(serialize_error)?;
    for export in exports {
        seq.serialize_element(&ExportEntry(export))
            .map_err(serialize_error)?;
    }
    seq.end().map_err(serialize_error)
}

/// Render the export manifest as pretty-printed JSON.
pub fn manifest_json() -> Result<String> {
    let mut serializer = serde_json::Serializer::pretty(Vec::new());
    generate_manifest(&mut serializer)?;
    String::from_utf8(serializer.into_inner()).map_err(serialize_error)
}

fn serialize_error<E: std::fmt::Display>(e: E) -> Box<Error> {
    Box::new(Error::Serialize { msg: e.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value as JsonValue};
    use std::io;

    /// A writer that fails every write.
    struct FullDisk;

    impl io::Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_manifest_serializer_failure() {
        let mut serializer = serde_json::Serializer::new(FullDisk);
        let err = generate_manifest(&mut serializer).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Serialize);
        assert!(err.to_string().contains("disk full"), "{err}");
    }

    #[test]
    fn test_manifest_round_trips_through_json() {
        let manifest: JsonValue = serde_json::from_str(&manifest_json().unwrap()).unwrap();
        let names: Vec<&str> = manifest
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["create", "add", "mul", "subtract"]);
    }

    #[test]
    fn test_manifest_entry() {
        let manifest = generate_manifest(serde_json::value::Serializer).unwrap();
        assert_eq!(
            manifest[0],
            json!({
                "name": "create",
                "doc": "Create a new ScalarValue holding the given number.",
                "kind": "init",
                "receiver": null,
                "params": [
                    {"index": 0, "name": "a", "doc": "The number to wrap.", "type": "f32"},
                ],
                "returns": "ScalarValue",
            })
        );
    }
}
