//! Reference solution reader (CVRPLIB `.sol`).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// A best-known solution: customer sequences (depot omitted) and its cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSolution {
    pub routes: Vec<Vec<usize>>,
    pub cost: f64,
}

/// Reads and parses a `.sol` file.
pub fn read_solution(path: impl AsRef<Path>) -> Result<ReferenceSolution> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(RoutingError::NotFound(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path)?;
    parse_solution(&text)
}

/// Parses `.sol` text of the form
///
/// ```text
/// Route #1: 21 31 19 17
/// Route #2: 6 3 2
/// Cost 784
/// ```
///
/// Lines that are neither routes nor the cost line are ignored. A file
/// without a `Cost` line is rejected.
pub fn parse_solution(text: &str) -> Result<ReferenceSolution> {
    if text.trim().is_empty() {
        return Err(RoutingError::format(0, "empty solution"));
    }

    let mut routes = Vec::new();
    let mut cost = None;

    for (i, line) in text.lines().enumerate() {
        let lineno = i + 1;
        let line = line.trim();

        if line.starts_with("Route") {
            let Some((_, body)) = line.split_once(':') else {
                return Err(RoutingError::format(lineno, "route line without ':'"));
            };
            let route = body
                .split_whitespace()
                .map(|token| {
                    token.parse::<usize>().map_err(|_| {
                        RoutingError::format(lineno, format!("invalid customer: {token}"))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            routes.push(route);
        } else if let Some(value) = line.strip_prefix("Cost") {
            let value = value.trim();
            let parsed: f64 = value
                .parse()
                .map_err(|_| RoutingError::format(lineno, format!("invalid cost: {value}")))?;
            cost = Some(parsed);
        }
    }

    let cost = cost.ok_or_else(|| RoutingError::format(0, "missing Cost line"))?;
    Ok(ReferenceSolution { routes, cost })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_solution() {
        let text = "Route #1: 21 31 19\nRoute #2: 6 3\nCost 784\n";
        let sol = parse_solution(text).expect("valid");
        assert_eq!(sol.routes, vec![vec![21, 31, 19], vec![6, 3]]);
        assert_eq!(sol.cost, 784.0);
    }

    #[test]
    fn test_fractional_cost_and_noise() {
        let text = "Solution for toy\n\nRoute #1: 1 2\nCost 12.5\n";
        let sol = parse_solution(text).expect("valid");
        assert_eq!(sol.routes.len(), 1);
        assert!((sol.cost - 12.5).abs() < 1e-10);
    }

    #[test]
    fn test_empty_is_format_error() {
        assert!(matches!(parse_solution(""), Err(RoutingError::Format { .. })));
    }

    #[test]
    fn test_missing_cost() {
        assert!(parse_solution("Route #1: 1 2\n").is_err());
    }

    #[test]
    fn test_bad_customer() {
        let err = parse_solution("Route #1: 1 x\nCost 3\n").expect_err("invalid");
        assert!(matches!(err, RoutingError::Format { line: 1, .. }));
    }

    #[test]
    fn test_read_missing_file() {
        assert!(matches!(
            read_solution("/nonexistent/instance.sol"),
            Err(RoutingError::NotFound(_))
        ));
    }
}
