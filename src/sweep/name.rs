use std::fmt;

use anyhow::{Context, Result};
use serde::Serialize;
use tinytemplate::{format_unescaped, TinyTemplate};

use crate::sweep::params::ParameterTuple;

/// Fixed concatenation of every axis, dim first
static NAME_TEMPLATE: &str = "dim{dim}_h{h}_j{j}_t{t}_s{sigma}_m{mc_steps}_dep{depth}";

/// Job identity, e.g. `dim2_h1_j2_t0.1_s3_m1000_dep4`
///
/// Unique as long as the parameter tuples are unique. Nothing checks this.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JobName(String);

impl JobName {
    /// Render the job name from a parameter tuple using TinyTemplate
    pub fn derive(params: &ParameterTuple) -> Result<JobName> {
        let mut tt = TinyTemplate::new();
        // parameter values are written verbatim, never HTML escaped
        tt.set_default_formatter(&format_unescaped);
        tt.add_template("name", NAME_TEMPLATE).context("Job name template")?;
        let name = tt.render("name", params).context("Rendered job name")?;
        Ok(JobName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Filename stem: schedulers don't like dots in job identifiers
    pub fn stem(&self) -> String {
        self.0.replace('.', "p")
    }
}

impl fmt::Display for JobName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
