//! JSON-serializable schema document shapes.
//!
//! These types mirror the core model and pin down the wire format of the
//! emitted document: a single object keyed by field name, the field kind
//! tagged `"sel"`/`"num"` inside each entry, option maps keyed by the decimal
//! string form of the option code, the parameter flag as `0`/`1`, and
//! conditions as single-key operator objects.
//!
//! Convert with `From` in either direction; conversions cannot fail.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Serializable form of a whole [crate::schema::Schema], keyed by field name
/// in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaDoc {
    pub fields: IndexMap<String, FieldDef>,
}

/// One field entry as it appears in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Localization path of the field's display label.
    pub localization: String,
    /// 1 when the field is a runtime-settable parameter, 0 otherwise.
    #[serde(with = "flag")]
    pub parameter: bool,
    /// Bit offset of the field within the packed word.
    pub position: u32,
    /// Width of the field in bits.
    pub size: u32,
    /// Applicability predicate; omitted entirely when the field always applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<ConditionDef>,
    /// Field kind, tagged `"type": "sel" | "num"` at the top level of the entry.
    #[serde(flatten)]
    pub kind: FieldKindDef,
}

/// Kind of field in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FieldKindDef {
    /// Enumerated options, keyed by the string form of the option code.
    #[serde(rename = "sel")]
    Selection {
        #[serde(with = "codes")]
        options: BTreeMap<u32, String>,
    },
    /// Plain integer, optionally bounded.
    #[serde(rename = "num")]
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
    },
}

/// A condition node: one key naming the operator, the value holding either
/// the child list (`and`/`or`) or a `[field, value]` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionDef {
    And(Vec<ConditionDef>),
    Or(Vec<ConditionDef>),
    Eq(String, i64),
    Ne(String, i64),
    Lt(String, i64),
    Gt(String, i64),
}

/// Serializes the parameter flag as the integers 0 and 1.
mod flag {
    use serde::de::{self, Deserialize, Deserializer};
    use serde::ser::Serializer;

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(de::Error::custom(format_args!(
                "parameter flag must be 0 or 1, got {other}"
            ))),
        }
    }
}

/// Serializes option maps with the code as a decimal string key.
mod codes {
    use std::collections::BTreeMap;

    use serde::de::{self, Deserialize, Deserializer};
    use serde::ser::{SerializeMap, Serializer};

    pub fn serialize<S: Serializer>(
        map: &BTreeMap<u32, String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_map(Some(map.len()))?;
        for (code, label) in map {
            out.serialize_entry(&code.to_string(), label)?;
        }
        out.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<u32, String>, D::Error> {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(code, label)| {
                let code = code
                    .parse::<u32>()
                    .map_err(|_| de::Error::custom(format_args!("invalid option code `{code}`")))?;
                Ok((code, label))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog;
    use crate::condition::Condition;
    use crate::generate;
    use crate::schema::Schema;

    use super::*;

    #[test]
    fn condition_wire_format_is_single_key_operator_objects() {
        let condition = Condition::and(vec![
            Condition::eq("sclass", 1),
            Condition::eq("sid1", 6),
        ]);

        let json = serde_json::to_value(ConditionDef::from(&condition)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "and": [
                    { "eq": ["sclass", 1] },
                    { "eq": ["sid1", 6] },
                ]
            })
        );
    }

    #[test]
    fn comparison_operators_serialize_as_field_value_pairs() {
        for (condition, expected) in [
            (Condition::ne("size", 0), serde_json::json!({ "ne": ["size", 0] })),
            (Condition::lt("sid0", 26), serde_json::json!({ "lt": ["sid0", 26] })),
            (Condition::gt("sid1", 4), serde_json::json!({ "gt": ["sid1", 4] })),
        ] {
            let json = serde_json::to_value(ConditionDef::from(&condition)).unwrap();
            assert_eq!(json, expected);
        }
    }

    #[test]
    fn selection_entry_carries_tag_flag_and_string_coded_options() {
        let field = generate::subselection_field(1, 6, 3);
        let json = serde_json::to_value(FieldDef::from(&field)).unwrap();

        assert_eq!(json["type"], serde_json::json!("sel"));
        assert_eq!(json["parameter"], serde_json::json!(1));
        assert_eq!(json["position"], serde_json::json!(0));
        assert_eq!(json["size"], serde_json::json!(31));
        assert_eq!(
            json["options"]["0"],
            serde_json::json!("K45::WE_ARMBRP.adrOptions[sid1.6.0]")
        );
        assert_eq!(
            json["condition"],
            serde_json::json!({
                "and": [
                    { "eq": ["sclass", 1] },
                    { "eq": ["sid1", 6] },
                ]
            })
        );
    }

    #[test]
    fn number_bounds_are_omitted_when_absent() {
        let field = generate::number_subfield(0, 37);
        let json = serde_json::to_value(FieldDef::from(&field)).unwrap();

        assert_eq!(json["type"], serde_json::json!("num"));
        assert!(json.get("min").is_none());
        assert!(json.get("max").is_none());
    }

    #[test]
    fn unconditional_entry_omits_the_condition_key() {
        let schema = catalog::address_schema();
        let json = serde_json::to_value(FieldDef::from(schema.get("size").unwrap())).unwrap();

        assert!(json.get("condition").is_none());
        assert_eq!(json["parameter"], serde_json::json!(0));
    }

    #[test]
    fn document_round_trips_through_json() {
        let schema = catalog::address_schema();
        let doc = SchemaDoc::from(&schema);

        let json = serde_json::to_string(&doc).unwrap();
        let decoded: SchemaDoc = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, doc);

        let rebuilt = Schema::from(decoded);
        assert_eq!(rebuilt, schema);
    }

    #[test]
    fn document_keys_follow_insertion_order() {
        let doc = SchemaDoc::from(&catalog::address_schema());
        let head: Vec<&str> = doc.fields.keys().take(3).map(String::as_str).collect();

        assert_eq!(head, ["size", "sclass", "sid1"]);
    }

    #[test]
    fn malformed_option_code_is_rejected() {
        let json = r#"{
            "localization": "x",
            "parameter": 0,
            "position": 0,
            "size": 1,
            "type": "sel",
            "options": { "one": "label" }
        }"#;

        assert!(serde_json::from_str::<FieldDef>(json).is_err());
    }

    #[test]
    fn parameter_flag_outside_zero_or_one_is_rejected() {
        let json = r#"{
            "localization": "x",
            "parameter": 2,
            "position": 0,
            "size": 1,
            "type": "num"
        }"#;

        assert!(serde_json::from_str::<FieldDef>(json).is_err());
    }
}
