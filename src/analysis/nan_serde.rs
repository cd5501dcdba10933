//! Deserializers for metric fields that may hold non-finite values
//!
//! `serde_json` writes NaN and infinities as `null`. These read `null` back
//! as NaN so a stored record with a degenerate metric still loads.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

pub fn f64_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

pub fn vec_or_nan<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Vec::<Option<f64>>::deserialize(deserializer)?
        .into_iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect())
}

pub fn map_or_nan<'de, D>(deserializer: D) -> Result<BTreeMap<usize, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(BTreeMap::<usize, Option<f64>>::deserialize(deserializer)?
        .into_iter()
        .map(|(k, v)| (k, v.unwrap_or(f64::NAN)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Serialize, Deserialize)]
    struct Record {
        #[serde(deserialize_with = "f64_or_nan")]
        value: f64,
        #[serde(deserialize_with = "vec_or_nan")]
        values: Vec<f64>,
        #[serde(deserialize_with = "map_or_nan")]
        by_index: BTreeMap<usize, f64>,
    }

    #[test]
    fn test_null_reads_as_nan() {
        let record = Record {
            value: f64::INFINITY,
            values: vec![1.0, f64::NAN],
            by_index: BTreeMap::from([(0, f64::NAN), (2, 3.5)]),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("null"));

        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert!(parsed.value.is_nan());
        assert_eq!(parsed.values[0], 1.0);
        assert!(parsed.values[1].is_nan());
        assert!(parsed.by_index[&0].is_nan());
        assert_eq!(parsed.by_index[&2], 3.5);
    }

    #[test]
    fn test_finite_values_unchanged() {
        let parsed: Record =
            serde_json::from_str(r#"{"value": 0.25, "values": [], "by_index": {"1": 90.0}}"#)
                .unwrap();
        assert_eq!(parsed.value, 0.25);
        assert!(parsed.values.is_empty());
        assert_eq!(parsed.by_index[&1], 90.0);
    }
}
