//! Declarative schema for the extraction response.
//!
//! The same `SchemaNode` tree is sent to the content service as its
//! `responseSchema` and checked against the parsed reply before the value is
//! deserialized, so a reply is only trusted once it matches what was asked for.

use crate::utils::error::{Result, SiteError};
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    String,
    Array(Box<SchemaNode>),
    Object {
        properties: Vec<(&'static str, SchemaNode)>,
        required: Vec<&'static str>,
    },
}

impl SchemaNode {
    fn array_of(item: SchemaNode) -> Self {
        Self::Array(Box::new(item))
    }

    fn object(properties: Vec<(&'static str, SchemaNode)>, required: &[&'static str]) -> Self {
        Self::Object {
            properties,
            required: required.to_vec(),
        }
    }

    /// Renders the node in the `responseSchema` dialect of `generateContent`.
    pub fn to_response_schema(&self) -> Value {
        match self {
            Self::String => json!({ "type": "STRING" }),
            Self::Array(item) => json!({
                "type": "ARRAY",
                "items": item.to_response_schema(),
            }),
            Self::Object {
                properties,
                required,
            } => {
                let props: Map<String, Value> = properties
                    .iter()
                    .map(|(name, node)| (name.to_string(), node.to_response_schema()))
                    .collect();
                json!({
                    "type": "OBJECT",
                    "properties": props,
                    "required": required,
                })
            }
        }
    }

    pub fn validate(&self, value: &Value) -> Result<()> {
        self.validate_at("$", value)
    }

    fn validate_at(&self, path: &str, value: &Value) -> Result<()> {
        match (self, value) {
            (Self::String, Value::String(_)) => Ok(()),
            (Self::Array(item), Value::Array(elements)) => {
                for (idx, element) in elements.iter().enumerate() {
                    item.validate_at(&format!("{}[{}]", path, idx), element)?;
                }
                Ok(())
            }
            (
                Self::Object {
                    properties,
                    required,
                },
                Value::Object(map),
            ) => {
                for key in required {
                    if !map.contains_key(*key) {
                        return Err(SiteError::schema(
                            format!("{}.{}", path, key),
                            "required field is missing",
                        ));
                    }
                }
                // 未宣告的欄位直接忽略；有宣告的不論是否必填都要型別正確
                for (key, node) in properties {
                    if let Some(child) = map.get(*key) {
                        node.validate_at(&format!("{}.{}", path, key), child)?;
                    }
                }
                Ok(())
            }
            (expected, found) => Err(SiteError::schema(
                path,
                format!("expected {}, found {}", expected.type_name(), json_type(found)),
            )),
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Array(_) => "array",
            Self::Object { .. } => "object",
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Schema of a `BusinessProfile` as requested from the extraction service.
pub fn business_profile_schema() -> SchemaNode {
    use SchemaNode as S;

    let history = S::object(
        vec![("founded", S::String), ("description", S::String)],
        &["founded", "description"],
    );
    let service = S::object(
        vec![
            ("title", S::String),
            ("description", S::String),
            ("items", S::array_of(S::String)),
        ],
        &["title", "description", "items"],
    );
    let contact = S::object(
        vec![
            ("address", S::String),
            ("phone", S::String),
            ("email", S::String),
            ("hours", S::String),
        ],
        &["address", "phone", "email"],
    );

    S::object(
        vec![
            ("history", history),
            ("services", S::array_of(service)),
            ("certifications", S::array_of(S::String)),
            ("values", S::array_of(S::String)),
            ("contact", contact),
        ],
        &["history", "services", "certifications", "values", "contact"],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> Value {
        json!({
            "history": { "founded": "1950", "description": "Atelier" },
            "services": [
                { "title": "Escaliers", "description": "Sur mesure", "items": ["Chêne"] }
            ],
            "certifications": ["RGE"],
            "values": ["Qualité"],
            "contact": { "address": "1 rue, Lyon", "phone": "04", "email": "a@b.fr" }
        })
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(business_profile_schema().validate(&valid_payload()).is_ok());
    }

    #[test]
    fn test_missing_nested_required_field_reports_path() {
        let mut payload = valid_payload();
        payload["contact"].as_object_mut().unwrap().remove("email");

        let err = business_profile_schema().validate(&payload).unwrap_err();
        match err {
            SiteError::SchemaValidation { path, .. } => assert_eq!(path, "$.contact.email"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_null_string_is_rejected() {
        let mut payload = valid_payload();
        payload["history"]["founded"] = Value::Null;
        assert!(business_profile_schema().validate(&payload).is_err());
    }

    #[test]
    fn test_wrong_item_type_in_array_reports_index() {
        let mut payload = valid_payload();
        payload["services"][0]["items"] = json!(["ok", 3]);

        let err = business_profile_schema().validate(&payload).unwrap_err();
        match err {
            SiteError::SchemaValidation { path, reason } => {
                assert_eq!(path, "$.services[0].items[1]");
                assert!(reason.contains("number"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_optional_hours_must_still_be_a_string() {
        let mut payload = valid_payload();
        payload["contact"]["hours"] = json!(8);
        assert!(business_profile_schema().validate(&payload).is_err());

        payload["contact"]["hours"] = json!("8h-18h");
        assert!(business_profile_schema().validate(&payload).is_ok());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let mut payload = valid_payload();
        payload["sources"] = json!(["https://example.com"]);
        assert!(business_profile_schema().validate(&payload).is_ok());
    }

    #[test]
    fn test_response_schema_dialect() {
        let schema = business_profile_schema().to_response_schema();

        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(
            schema["required"],
            json!(["history", "services", "certifications", "values", "contact"])
        );
        assert_eq!(schema["properties"]["services"]["type"], "ARRAY");
        assert_eq!(
            schema["properties"]["services"]["items"]["properties"]["items"]["items"]["type"],
            "STRING"
        );
        assert_eq!(
            schema["properties"]["contact"]["required"],
            json!(["address", "phone", "email"])
        );
    }
}
