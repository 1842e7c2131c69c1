//! JSON run records keyed by instance name.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::alns::AlnsResult;
use crate::error::{Result, RoutingError};

/// Outcome of solving one benchmark instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub name: String,
    /// Best-known cost from the reference solution.
    pub optimal: f64,
    pub cost: f64,
    /// Solve time in seconds.
    pub time: f64,
    pub routes: Vec<Vec<usize>>,
}

impl RunRecord {
    /// Builds a record from a finished run and the best-known cost.
    pub fn from_result(name: impl Into<String>, optimal: f64, result: &AlnsResult) -> Self {
        Self {
            name: name.into(),
            optimal,
            cost: result.best_cost,
            time: result.elapsed.as_secs_f64(),
            routes: result.best.route_sequences(),
        }
    }

    /// Relative deviation from the best-known cost, in percent.
    ///
    /// `None` when the best-known cost is not a positive finite number.
    pub fn gap_percent(&self) -> Option<f64> {
        if !self.optimal.is_finite() || self.optimal <= 0.0 {
            return None;
        }
        Some((self.optimal - self.cost).abs() / self.optimal * 100.0)
    }
}

/// Writes records as pretty-printed JSON.
pub fn write_records(
    path: impl AsRef<Path>,
    records: &BTreeMap<String, RunRecord>,
) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Reads records written by [`write_records`].
pub fn read_records(path: impl AsRef<Path>) -> Result<BTreeMap<String, RunRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(RoutingError::NotFound(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, optimal: f64, cost: f64) -> RunRecord {
        RunRecord {
            name: name.to_string(),
            optimal,
            cost,
            time: 0.25,
            routes: vec![vec![1, 2], vec![3]],
        }
    }

    #[test]
    fn test_gap_percent() {
        let gap = record("a", 200.0, 210.0).gap_percent().expect("positive optimal");
        assert!((gap - 5.0).abs() < 1e-10);
        let gap = record("a", 200.0, 190.0).gap_percent().expect("positive optimal");
        assert!((gap - 5.0).abs() < 1e-10);
        assert_eq!(record("a", 100.0, 100.0).gap_percent(), Some(0.0));
    }

    #[test]
    fn test_gap_percent_without_reference() {
        assert_eq!(record("a", 0.0, 10.0).gap_percent(), None);
        assert_eq!(record("a", f64::INFINITY, 10.0).gap_percent(), None);
        assert_eq!(record("a", f64::NAN, 10.0).gap_percent(), None);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(record("A-n32-k5", 784.0, 790.0)).expect("serializable");
        assert_eq!(json["name"], "A-n32-k5");
        assert_eq!(json["optimal"], 784.0);
        assert_eq!(json["routes"][1][0], 3);
    }

    #[test]
    fn test_write_then_read() {
        let path = std::env::temp_dir()
            .join(format!("cvrp_alns_records_{}.json", std::process::id()));
        let mut records = BTreeMap::new();
        records.insert("A-n32-k5".to_string(), record("A-n32-k5", 784.0, 790.0));
        records.insert("B-n31-k5".to_string(), record("B-n31-k5", 672.0, 672.0));

        write_records(&path, &records).expect("writable");
        let text = std::fs::read_to_string(&path).expect("readable");
        assert!(text.contains("\n  \"A-n32-k5\": {"));
        let loaded = read_records(&path).expect("valid json");
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, records);
    }

    #[test]
    fn test_read_missing_file() {
        assert!(matches!(
            read_records("/nonexistent/records.json"),
            Err(RoutingError::NotFound(_))
        ));
    }
}
