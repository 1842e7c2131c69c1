//! CVRPLIB instance reader (`.vrp`, `EUC_2D`).

use std::path::Path;

use tracing::debug;

use crate::distance::DistanceMatrix;
use crate::error::{Result, RoutingError};
use crate::models::ProblemInstance;

/// A parsed CVRPLIB instance, in file order (node `k` at index `k - 1`).
#[derive(Debug, Clone, PartialEq)]
pub struct CvrpInstance {
    pub name: String,
    pub comment: Option<String>,
    pub dimension: usize,
    pub capacity: i32,
    pub coords: Vec<(f64, f64)>,
    pub demands: Vec<i32>,
    /// 0-based index of the first listed depot.
    pub depot: usize,
    /// Vehicle count from a `-kN` name suffix, e.g. `A-n32-k5`.
    pub vehicles: Option<usize>,
}

impl CvrpInstance {
    /// Builds a [`ProblemInstance`] with unrounded Euclidean distances.
    ///
    /// The depot is moved to index 0; the other nodes keep their file order,
    /// so for the usual depot-first files node `k + 1` becomes customer `k`.
    pub fn to_problem(&self) -> Result<ProblemInstance> {
        if self.coords.len() != self.dimension || self.demands.len() != self.dimension {
            return Err(RoutingError::InvalidInstance(format!(
                "dimension {} but {} coordinates and {} demands",
                self.dimension,
                self.coords.len(),
                self.demands.len()
            )));
        }
        if self.depot >= self.dimension {
            return Err(RoutingError::InvalidInstance(format!(
                "depot index {} out of range for dimension {}",
                self.depot, self.dimension
            )));
        }

        let order: Vec<usize> = std::iter::once(self.depot)
            .chain((0..self.dimension).filter(|&i| i != self.depot))
            .collect();

        let coords: Vec<(f64, f64)> = order.iter().map(|&i| self.coords[i]).collect();
        let demands: Vec<i32> = order.iter().map(|&i| self.demands[i]).collect();

        let distances = DistanceMatrix::from_coords(&coords);
        let instance = ProblemInstance::new(distances, demands, self.capacity)?;
        Ok(instance.with_name(self.name.clone()))
    }
}

/// Reads and parses a `.vrp` file.
pub fn read_instance(path: impl AsRef<Path>) -> Result<CvrpInstance> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(RoutingError::NotFound(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path)?;
    parse_instance(&text)
}

fn vehicles_from_name(name: &str) -> Option<usize> {
    let (_, suffix) = name.rsplit_once('-')?;
    suffix.strip_prefix('k')?.parse().ok()
}

fn parse_number<T: std::str::FromStr>(token: &str, line: usize, what: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| RoutingError::format(line, format!("invalid {what}: {token}")))
}

/// Parses CVRPLIB text.
///
/// Recognized keys are `NAME`, `COMMENT`, `DIMENSION`, `CAPACITY` and
/// `EDGE_WEIGHT_TYPE` (only `EUC_2D`); other keys are ignored. The coordinate
/// and demand sections must list every node exactly once.
///
/// # Examples
///
/// ```
/// use cvrp_alns::io::parse_instance;
///
/// let text = "\
/// NAME : toy-n3-k1
/// DIMENSION : 3
/// CAPACITY : 10
/// EDGE_WEIGHT_TYPE : EUC_2D
/// NODE_COORD_SECTION
/// 1 0 0
/// 2 3 4
/// 3 6 8
/// DEMAND_SECTION
/// 1 0
/// 2 4
/// 3 5
/// DEPOT_SECTION
/// 1
/// -1
/// EOF
/// ";
/// let vrp = parse_instance(text).unwrap();
/// assert_eq!(vrp.vehicles, Some(1));
/// let problem = vrp.to_problem().unwrap();
/// assert_eq!(problem.distance(0, 1), 5.0);
/// ```
pub fn parse_instance(text: &str) -> Result<CvrpInstance> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .collect();
    if lines.iter().all(|(_, l)| l.is_empty()) {
        return Err(RoutingError::format(0, "empty instance"));
    }

    let mut name = String::new();
    let mut comment = None;
    let mut dimension: Option<usize> = None;
    let mut capacity: Option<i32> = None;
    let mut coords: Option<Vec<(f64, f64)>> = None;
    let mut demands: Option<Vec<i32>> = None;
    let mut depot: Option<usize> = None;

    let is_section_end = |l: &str| l.contains("SECTION") || l == "EOF";

    let mut i = 0;
    while i < lines.len() {
        let (lineno, line) = lines[i];
        i += 1;

        if line.is_empty() || line == "EOF" {
            continue;
        }

        if line.starts_with("NODE_COORD_SECTION") || line.starts_with("DEMAND_SECTION") {
            let Some(dim) = dimension else {
                return Err(RoutingError::format(lineno, "section before DIMENSION"));
            };

            let mut entries: Vec<(usize, usize, Vec<&str>)> = Vec::new();
            while i < lines.len() && !is_section_end(lines[i].1) {
                let (row_line, row) = lines[i];
                i += 1;
                if row.is_empty() {
                    continue;
                }
                let parts: Vec<&str> = row.split_whitespace().collect();
                let id: usize = parse_number(parts[0], row_line, "node id")?;
                if id == 0 || id > dim {
                    return Err(RoutingError::format(
                        row_line,
                        format!("node id {id} out of range"),
                    ));
                }
                entries.push((row_line, id, parts[1..].to_vec()));
            }
            if entries.len() != dim {
                let message = format!("section lists {} nodes, expected {dim}", entries.len());
                return Err(RoutingError::format(lineno, message));
            }

            // Bounded by the row count checked above
            let mut rows: Vec<Option<(usize, Vec<&str>)>> = vec![None; dim];
            for (row_line, id, values) in entries {
                if rows[id - 1].is_some() {
                    return Err(RoutingError::format(row_line, format!("duplicate node id {id}")));
                }
                rows[id - 1] = Some((row_line, values));
            }

            if line.starts_with("NODE_COORD_SECTION") {
                let mut parsed = Vec::with_capacity(dim);
                for (idx, row) in rows.into_iter().enumerate() {
                    let Some((row_line, values)) = row else {
                        let message = format!("missing coordinates for node {}", idx + 1);
                        return Err(RoutingError::format(lineno, message));
                    };
                    if values.len() < 2 {
                        return Err(RoutingError::format(row_line, "expected `id x y`"));
                    }
                    let x: f64 = parse_number(values[0], row_line, "x coordinate")?;
                    let y: f64 = parse_number(values[1], row_line, "y coordinate")?;
                    parsed.push((x, y));
                }
                coords = Some(parsed);
            } else {
                let mut parsed = Vec::with_capacity(dim);
                for (idx, row) in rows.into_iter().enumerate() {
                    let Some((row_line, values)) = row else {
                        let message = format!("missing demand for node {}", idx + 1);
                        return Err(RoutingError::format(lineno, message));
                    };
                    let Some(&value) = values.first() else {
                        return Err(RoutingError::format(row_line, "expected `id demand`"));
                    };
                    parsed.push(parse_number(value, row_line, "demand")?);
                }
                demands = Some(parsed);
            }
            continue;
        }

        if line.starts_with("DEPOT_SECTION") {
            let mut first = None;
            while i < lines.len() && !is_section_end(lines[i].1) {
                let (row_line, row) = lines[i];
                i += 1;
                for token in row.split_whitespace() {
                    let idx: i64 = parse_number(token, row_line, "depot index")?;
                    if idx == -1 {
                        break;
                    }
                    if idx < 1 {
                        let message = format!("invalid depot index: {idx}");
                        return Err(RoutingError::format(row_line, message));
                    }
                    if first.is_none() {
                        first = Some(idx as usize - 1);
                    }
                }
            }
            depot = first;
            continue;
        }

        if let Some((key, value)) = line.split_once(':') {
            let value = value.trim();
            match key.trim().to_uppercase().as_str() {
                "NAME" => name = value.to_string(),
                "COMMENT" => comment = Some(value.to_string()),
                "DIMENSION" => {
                    let dim: usize = parse_number(value, lineno, "dimension")?;
                    if dim == 0 {
                        return Err(RoutingError::format(lineno, "dimension must be positive"));
                    }
                    dimension = Some(dim);
                }
                "CAPACITY" => capacity = Some(parse_number(value, lineno, "capacity")?),
                "EDGE_WEIGHT_TYPE" if value != "EUC_2D" => {
                    let message = format!("unsupported edge weight type: {value}");
                    return Err(RoutingError::format(lineno, message));
                }
                _ => {}
            }
        }
    }

    let dimension = dimension.ok_or_else(|| RoutingError::format(0, "missing DIMENSION"))?;
    let capacity = capacity.ok_or_else(|| RoutingError::format(0, "missing CAPACITY"))?;
    let coords = coords.ok_or_else(|| RoutingError::format(0, "missing NODE_COORD_SECTION"))?;
    let demands = demands.ok_or_else(|| RoutingError::format(0, "missing DEMAND_SECTION"))?;
    let depot = depot.unwrap_or(0);
    if depot >= dimension {
        return Err(RoutingError::format(0, format!("depot {} out of range", depot + 1)));
    }

    let vehicles = vehicles_from_name(&name);
    debug!(name = %name, dimension, capacity, ?vehicles, "parsed CVRPLIB instance");

    Ok(CvrpInstance {
        name,
        comment,
        dimension,
        capacity,
        coords,
        demands,
        depot,
        vehicles,
    })
}
