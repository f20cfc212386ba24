use std::path::Path;
use std::process::Command;

use anyhow::{anyhow, Context, Result};
use log::info;

/// What the scheduler reported back for a submitted descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    /// HTCondor cluster id, when the submit command printed one
    pub cluster: Option<String>,
}

/// Hands a rendered descriptor to a batch scheduler
pub trait Submitter {
    /// Submit `descriptor` (a file name relative to `workdir`) with `workdir` as the working directory
    fn submit(&mut self, workdir: &Path, descriptor: &str) -> Result<SubmitReceipt>;
}

/// Runs `condor_submit <descriptor>` (or a configured replacement) once per job
#[derive(Debug, Clone)]
pub struct CondorSubmit {
    program: String,
}

impl CondorSubmit {
    pub fn new(program: &str) -> CondorSubmit {
        CondorSubmit { program: program.to_string() }
    }
}

impl Submitter for CondorSubmit {
    fn submit(&mut self, workdir: &Path, descriptor: &str) -> Result<SubmitReceipt> {
        let mut cmd = Command::new(&self.program);
        cmd.arg(descriptor).current_dir(workdir);
        info!("Running {:?} in {}", &cmd, workdir.display());

        let output = cmd
            .output()
            .with_context(|| format!("Failed to execute {}", self.program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!("{} exited with {}: {}", self.program, output.status, stderr.trim()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(SubmitReceipt { cluster: parse_cluster(&stdout) })
    }
}

/// Find the cluster id in `1 job(s) submitted to cluster 4242.`
fn parse_cluster(stdout: &str) -> Option<String> {
    let (_, rest) = stdout.split_once("submitted to cluster ")?;
    let cluster: String = rest.chars().take_while(char::is_ascii_digit).collect();
    match cluster.is_empty() {
        true => None,
        false => Some(cluster),
    }
}
