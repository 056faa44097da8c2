//! Serialized definition vectors.
//!
//! Each vector is a JSON document with the outcome deserialization must
//! produce, so any reader of the serialized form can be checked against the
//! same cases.

use thing_type_core::{ChannelDefinition, InvalidArgument};

/// A serialized channel definition and its expected outcome.
#[derive(Debug, Clone)]
pub struct SerializedVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// The JSON document.
    pub json: &'static str,
    /// `Ok(property count)` if accepted, otherwise the rejection reason.
    pub expected: Result<usize, InvalidArgument>,
}

/// Get all serialized vectors.
pub fn all_vectors() -> Vec<SerializedVector> {
    vec![
        SerializedVector {
            name: "power switch without properties",
            json: r#"{"id":"power","type":{"uid":"system:power","item_type":"Switch","label":"Power"}}"#,
            expected: Ok(0),
        },
        SerializedVector {
            name: "dimmer with range properties",
            json: r#"{"id":"brightness","type":{"uid":"system:brightness","item_type":"Dimmer","label":"Brightness","category":"DimmableLight"},"properties":{"min":"0","max":"100"}}"#,
            expected: Ok(2),
        },
        SerializedVector {
            name: "null properties",
            json: r#"{"id":"power","type":{"uid":"system:power","item_type":"Switch","label":"Power"},"properties":null}"#,
            expected: Ok(0),
        },
        SerializedVector {
            name: "whitespace-only ID",
            json: r#"{"id":" ","type":{"uid":"system:power","item_type":"Switch","label":"Power"}}"#,
            expected: Ok(0),
        },
        SerializedVector {
            name: "empty ID",
            json: r#"{"id":"","type":{"uid":"system:power","item_type":"Switch","label":"Power"}}"#,
            expected: Err(InvalidArgument::EmptyId),
        },
        SerializedVector {
            name: "null ID",
            json: r#"{"id":null,"type":{"uid":"system:power","item_type":"Switch","label":"Power"}}"#,
            expected: Err(InvalidArgument::EmptyId),
        },
        SerializedVector {
            name: "missing ID",
            json: r#"{"type":{"uid":"system:power","item_type":"Switch","label":"Power"}}"#,
            expected: Err(InvalidArgument::EmptyId),
        },
        SerializedVector {
            name: "null type",
            json: r#"{"id":"power","type":null}"#,
            expected: Err(InvalidArgument::MissingChannelType),
        },
        SerializedVector {
            name: "missing type",
            json: r#"{"id":"power","properties":{"min":"0"}}"#,
            expected: Err(InvalidArgument::MissingChannelType),
        },
        SerializedVector {
            name: "empty ID and missing type",
            json: r#"{"id":""}"#,
            expected: Err(InvalidArgument::EmptyId),
        },
    ]
}

/// Deserialize a vector's document.
pub fn parse_vector(vector: &SerializedVector) -> serde_json::Result<ChannelDefinition> {
    serde_json::from_str(vector.json)
}

/// Check every vector against its expected outcome.
///
/// Returns `(name, matched)` for each vector.
pub fn verify_all_vectors() -> Vec<(String, bool)> {
    all_vectors()
        .iter()
        .map(|v| {
            let matched = match (parse_vector(v), v.expected) {
                (Ok(def), Ok(count)) => def.properties().len() == count,
                (Err(err), Err(reason)) => err.to_string().contains(&reason.to_string()),
                _ => false,
            };
            (v.name.to_string(), matched)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_match() {
        for (name, matched) in verify_all_vectors() {
            assert!(matched, "Vector '{}' did not produce its expected outcome", name);
        }
    }

    #[test]
    fn test_accepted_vectors_reserialize() {
        for vector in all_vectors().iter().filter(|v| v.expected.is_ok()) {
            let def = parse_vector(vector).unwrap();
            let json = serde_json::to_string(&def).unwrap();
            let again: ChannelDefinition = serde_json::from_str(&json).unwrap();
            assert_eq!(def, again, "Vector '{}' changed on reserialization", vector.name);
        }
    }
}
