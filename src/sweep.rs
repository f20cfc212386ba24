//! Expand comma-separated parameter lists into the jobs of a sweep

/// Parameter lists and their Cartesian product
pub mod params;

/// Job names derived from a parameter tuple
pub mod name;

use serde::Serialize;

use crate::sweep::name::JobName;
use crate::sweep::params::ParameterTuple;

/// One point of the sweep: a parameter tuple and the name derived from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
    pub name: JobName,
    pub params: ParameterTuple,
}
