//! Benchmark file formats.
//!
//! - [`parse_instance`] / [`read_instance`]: CVRPLIB `.vrp` instances
//! - [`parse_solution`] / [`read_solution`]: best-known `.sol` solutions
//! - [`RunRecord`], [`write_records`], [`read_records`]: JSON run results

mod cvrplib;
mod record;
mod solution;

pub use cvrplib::{parse_instance, read_instance, CvrpInstance};
pub use record::{read_records, write_records, RunRecord};
pub use solution::{parse_solution, read_solution, ReferenceSolution};
