//! Record of what a sweep staged and submitted, written as `sweep.json` in the output directory

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use log::info;
use serde::Serialize;

use crate::condor::job::JobFiles;
use crate::config::SweepConfig;
use crate::sweep::name::JobName;
use crate::sweep::params::ParameterTuple;
use crate::sweep::Job;

pub static MANIFEST_FILE: &str = "sweep.json";

/// Where a job got to in this run
///
/// Staged: rendered files written to disk. Submitted: the submit command exited 0.
/// Failed: the submit command failed, the job's files are left in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Staged,
    Submitted,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobRecord {
    pub name: JobName,
    pub descriptor: PathBuf,
    pub launcher: PathBuf,
    pub params: ParameterTuple,
    pub state: JobState,
    pub cluster: Option<String>,
    pub error: Option<String>,
}

impl JobRecord {
    pub fn staged(job: &Job, files: &JobFiles) -> JobRecord {
        JobRecord {
            name: job.name.clone(),
            descriptor: files.descriptor.clone(),
            launcher: files.launcher.clone(),
            params: job.params.clone(),
            state: JobState::Staged,
            cluster: None,
            error: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SweepManifest {
    pub created: String,
    pub indir: PathBuf,
    pub outdir: PathBuf,
    pub install_base: String,
    pub submit_command: String,
    pub dry_run: bool,
    pub jobs: Vec<JobRecord>,
}

impl SweepManifest {
    pub fn new(config: &SweepConfig, outdir: &Path, jobs: Vec<JobRecord>) -> SweepManifest {
        SweepManifest {
            created: Utc::now().to_rfc3339(),
            indir: config.indir.clone(),
            outdir: outdir.to_path_buf(),
            install_base: config.install_base.clone(),
            submit_command: config.submit_command.clone(),
            dry_run: config.dry_run,
            jobs,
        }
    }

    pub fn count(&self, state: JobState) -> usize {
        self.jobs.iter().filter(|job| job.state == state).count()
    }

    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(MANIFEST_FILE);
        info!("Writing sweep manifest to {}", path.display());
        let json = serde_json::to_string_pretty(self).context("Serialised manifest")?;
        fs::write(&path, json).with_context(|| format!("Can't write {}", path.display()))?;
        Ok(path)
    }
}
