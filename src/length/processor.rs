use crate::config::NormalizeConfig;
use crate::length::detector::looks_like_distance;
use crate::length::error::ParseError;
use crate::length::parser::parse_distance;
use log::warn;
use std::collections::HashMap;
use toml::{map::Map, Value};

/// Process TOML values to parse distance strings and normalize them to
/// nanometers
#[derive(Debug, Clone, Copy)]
pub struct DistanceProcessor {
    keep_original: bool,
    strict: bool,
}

impl Default for DistanceProcessor {
    fn default() -> Self {
        Self::new(&NormalizeConfig::default())
    }
}

impl DistanceProcessor {
    pub fn new(config: &NormalizeConfig) -> Self {
        Self {
            keep_original: config.keep_original,
            strict: config.strict,
        }
    }

    /// Process a TOML Value, parsing any distance strings found.
    /// Returns a new Value with distances as float nanometer counts
    /// (original strings preserved under `_<key>_original` in tables).
    pub fn process_value(&self, value: &Value) -> Result<Value, ParseError> {
        match value {
            Value::String(s) => self.process_string(s),
            Value::Array(arr) => {
                let processed: Result<Vec<Value>, ParseError> =
                    arr.iter().map(|v| self.process_value(v)).collect();
                Ok(Value::Array(processed?))
            }
            Value::Table(table) => {
                let mut processed = Map::new();
                for (key, val) in table {
                    let processed_val = self.process_value(val)?;
                    if let Some(original) = self.original_of(val, &processed_val) {
                        processed.insert(format!("_{}_original", key), original);
                    }
                    processed.insert(key.clone(), processed_val);
                }
                Ok(Value::Table(processed))
            }
            _ => Ok(value.clone()),
        }
    }

    /// Process a flat map of TOML values, e.g. the top-level keys of a file
    pub fn process_hashmap(
        &self,
        values: &HashMap<String, Value>,
    ) -> Result<HashMap<String, Value>, ParseError> {
        let mut processed = HashMap::new();

        for (key, value) in values {
            let processed_value = self.process_value(value)?;
            if let Some(original) = self.original_of(value, &processed_value) {
                processed.insert(format!("_{}_original", key), original);
            }
            processed.insert(key.clone(), processed_value);
        }

        Ok(processed)
    }

    fn process_string(&self, s: &str) -> Result<Value, ParseError> {
        if !looks_like_distance(s) {
            return Ok(Value::String(s.to_string()));
        }

        match parse_distance(s.trim()) {
            Ok(distance) => Ok(Value::Float(distance.as_nanometers())),
            Err(e) if self.strict => Err(e),
            Err(e) => {
                warn!("keeping unparsed distance string '{}': {}", s, e);
                Ok(Value::String(s.to_string()))
            }
        }
    }

    // A string that turned into a float was a distance
    fn original_of(&self, before: &Value, after: &Value) -> Option<Value> {
        match (before, after) {
            (Value::String(s), Value::Float(_)) if self.keep_original => {
                Some(Value::String(s.clone()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::error::ParseErrorKind;
    use crate::length::units::{FOOT, INCH, METER};

    fn strict() -> DistanceProcessor {
        DistanceProcessor::new(&NormalizeConfig {
            keep_original: true,
            strict: true,
        })
    }

    #[test]
    fn test_process_distance_string() {
        let processor = DistanceProcessor::default();
        let value = Value::String("5ft11in".to_string());

        let result = processor.process_value(&value).unwrap();
        assert_eq!(
            result,
            Value::Float((5.0 * FOOT + 11.0 * INCH).as_nanometers())
        );
    }

    #[test]
    fn test_process_non_distance_string() {
        let processor = DistanceProcessor::default();
        let value = Value::String("not a distance".to_string());

        let result = processor.process_value(&value).unwrap();
        assert!(matches!(result, Value::String(s) if s == "not a distance"));
    }

    #[test]
    fn test_process_unknown_unit() {
        let value = Value::String("10ms".to_string());

        let lenient = DistanceProcessor::default().process_value(&value).unwrap();
        assert_eq!(lenient, value);

        let err = strict().process_value(&value).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::UnknownUnit);
    }

    #[test]
    fn test_process_array() {
        let processor = DistanceProcessor::default();
        let value = Value::Array(vec![
            Value::String("2m".to_string()),
            Value::String("not a distance".to_string()),
            Value::Integer(42),
        ]);

        let result = processor.process_value(&value).unwrap();
        assert_eq!(
            result,
            Value::Array(vec![
                Value::Float(2e9),
                Value::String("not a distance".to_string()),
                Value::Integer(42),
            ])
        );
    }

    #[test]
    fn test_process_table() {
        let processor = DistanceProcessor::default();
        let table: toml::Table = toml::from_str(
            r#"
name = "track"
lap = "400m"

[lane]
width = "1.22m"
"#,
        )
        .unwrap();

        let result = processor.process_value(&Value::Table(table)).unwrap();
        let table = result.as_table().expect("Expected Table");
        assert_eq!(table["lap"], Value::Float((400.0 * METER).as_nanometers()));
        assert_eq!(table["_lap_original"], Value::String("400m".to_string()));
        assert_eq!(table["name"], Value::String("track".to_string()));
        assert!(!table.contains_key("_name_original"));

        let lane = table["lane"].as_table().expect("Expected nested Table");
        assert_eq!(lane["width"], Value::Float(1.22e9));
        assert!(lane.contains_key("_width_original"));
    }

    #[test]
    fn test_process_without_originals() {
        let processor = DistanceProcessor::new(&NormalizeConfig {
            keep_original: false,
            strict: false,
        });
        let mut values = HashMap::new();
        values.insert("height".to_string(), Value::String("6ft".to_string()));

        let result = processor.process_hashmap(&values).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result["height"], Value::Float((6.0 * FOOT).as_nanometers()));
    }

    #[test]
    fn test_process_hashmap_keeps_originals() {
        let processor = DistanceProcessor::default();
        let mut values = HashMap::new();
        values.insert("height".to_string(), Value::String("6ft".to_string()));
        values.insert("count".to_string(), Value::Integer(3));

        let result = processor.process_hashmap(&values).unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result["_height_original"], Value::String("6ft".to_string()));
        assert_eq!(result["count"], Value::Integer(3));
    }
}
