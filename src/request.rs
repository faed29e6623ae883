//! Wire form of a search request and its translation into a [`Query`].

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::data::filter::Query;
use crate::error::{LookupError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    General,
    Specific,
}

/// Body of `POST /api/search`.
///
/// ```json
/// { "mode": "general", "caseSensitive": false, "searchTerm": "c556" }
/// { "mode": "specific", "caseSensitive": true, "state": "CA", "status": "ACTIVE" }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub mode: SearchMode,
    #[serde(default)]
    pub case_sensitive: bool,
    /// Only read in general mode; specific mode ignores it whatever its type.
    #[serde(default)]
    pub search_term: Option<Value>,
    /// Every other top-level key: the per-field filters of a specific search.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl SearchRequest {
    /// Decode a raw JSON body. Any decoding failure is a malformed query.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| LookupError::MalformedQuery(e.to_string()))
    }

    pub fn into_query(self) -> Result<Query> {
        match self.mode {
            SearchMode::General => {
                let term = match self.search_term {
                    Some(Value::String(term)) => term,
                    Some(_) => {
                        return Err(LookupError::MalformedQuery(
                            "'searchTerm' must be a string".into(),
                        ))
                    }
                    None => {
                        return Err(LookupError::MalformedQuery(
                            "general search requires 'searchTerm'".into(),
                        ))
                    }
                };
                Ok(Query::General {
                    term,
                    case_sensitive: self.case_sensitive,
                })
            }
            SearchMode::Specific => {
                let mut fields = BTreeMap::new();
                for (key, value) in self.fields {
                    if let Some(text) = field_text(&key, value)? {
                        fields.insert(key, text);
                    }
                }
                Ok(Query::Specific {
                    fields,
                    case_sensitive: self.case_sensitive,
                })
            }
        }
    }
}

/// Text form of a field filter value. `None` means no constraint.
fn field_text(key: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::String(s) => Ok(Some(s)),
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Bool(true) => Ok(Some("true".into())),
        Value::Number(n) => Ok(Some(number_text(&n))),
        Value::Array(_) | Value::Object(_) => Err(LookupError::MalformedQuery(format!(
            "field '{key}' must be a string"
        ))),
    }
}

/// Integral floats print without a fraction (`1.0` → `"1"`), as a browser would.
fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else if let Some(f) = n.as_f64() {
        f.to_string()
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: Value) -> Result<Query> {
        SearchRequest::from_slice(value.to_string().as_bytes())?.into_query()
    }

    #[test]
    fn general_request_becomes_general_query() {
        let q = decode(json!({"mode": "general", "caseSensitive": true, "searchTerm": "C556"}))
            .unwrap();
        assert_eq!(
            q,
            Query::General {
                term: "C556".into(),
                case_sensitive: true
            }
        );
    }

    #[test]
    fn case_sensitive_defaults_to_false() {
        let q = decode(json!({"mode": "general", "searchTerm": "x"})).unwrap();
        assert!(!q.case_sensitive());
    }

    #[test]
    fn specific_request_collects_field_keys() {
        let q = decode(json!({
            "mode": "specific",
            "caseSensitive": false,
            "firmCode": "",
            "state": "ca",
            "zip": 93650,
            "country": null,
            "status": false
        }))
        .unwrap();
        match q {
            Query::Specific { fields, case_sensitive } => {
                assert!(!case_sensitive);
                assert_eq!(fields.get("state").map(String::as_str), Some("ca"));
                assert_eq!(fields.get("zip").map(String::as_str), Some("93650"));
                assert_eq!(fields.get("firmCode").map(String::as_str), Some(""));
                assert!(!fields.contains_key("country"));
                assert!(!fields.contains_key("status"));
                assert!(!fields.contains_key("mode"));
                assert!(!fields.contains_key("caseSensitive"));
            }
            other => panic!("expected specific query, got {other:?}"),
        }
    }

    #[test]
    fn missing_mode_is_malformed() {
        assert!(matches!(
            decode(json!({"searchTerm": "x"})),
            Err(LookupError::MalformedQuery(_))
        ));
    }

    #[test]
    fn unknown_mode_is_malformed() {
        assert!(matches!(
            decode(json!({"mode": "fuzzy", "searchTerm": "x"})),
            Err(LookupError::MalformedQuery(_))
        ));
    }

    #[test]
    fn general_without_term_is_malformed() {
        assert!(matches!(
            decode(json!({"mode": "general"})),
            Err(LookupError::MalformedQuery(_))
        ));
    }

    #[test]
    fn nested_field_values_are_malformed() {
        assert!(matches!(
            decode(json!({"mode": "specific", "city": ["Fresno"]})),
            Err(LookupError::MalformedQuery(_))
        ));
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert!(matches!(
            SearchRequest::from_slice(b"{not json"),
            Err(LookupError::MalformedQuery(_))
        ));
    }

    #[test]
    fn specific_mode_ignores_non_string_search_term() {
        let q = decode(json!({"mode": "specific", "searchTerm": 5, "state": "CA"})).unwrap();
        match q {
            Query::Specific { fields, .. } => {
                assert_eq!(fields.len(), 1);
                assert_eq!(fields.get("state").map(String::as_str), Some("CA"));
            }
            other => panic!("expected specific query, got {other:?}"),
        }
    }

    #[test]
    fn general_mode_rejects_non_string_search_term() {
        assert!(matches!(
            decode(json!({"mode": "general", "searchTerm": 5})),
            Err(LookupError::MalformedQuery(_))
        ));
        assert!(matches!(
            decode(json!({"mode": "general", "searchTerm": null})),
            Err(LookupError::MalformedQuery(_))
        ));
    }

    #[test]
    fn integral_float_fields_drop_the_fraction() {
        let q = decode(json!({"mode": "specific", "zip": 1.0, "address": 2.5, "city": -3}))
            .unwrap();
        match q {
            Query::Specific { fields, .. } => {
                assert_eq!(fields.get("zip").map(String::as_str), Some("1"));
                assert_eq!(fields.get("address").map(String::as_str), Some("2.5"));
                assert_eq!(fields.get("city").map(String::as_str), Some("-3"));
            }
            other => panic!("expected specific query, got {other:?}"),
        }
    }
}
