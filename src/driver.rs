//! Sweep control flow: render every job, then submit every job
//!
//! The sweep is expanded once into an ordered list and walked twice. All rendered files are on
//! disk before the first submit command runs.

use anyhow::{anyhow, Result};
use log::{error, info};

use crate::condor::job::{JobFiles, JobTemplates};
use crate::condor::submit::Submitter;
use crate::condor::template::RenderContext;
use crate::config::SweepConfig;
use crate::manifest::{JobRecord, JobState, SweepManifest};
use crate::sweep::Job;

/// Run a whole sweep and return its manifest
///
/// Template and filesystem errors abort the sweep. A failed submission is logged with the job
/// name and the remaining jobs are still submitted; the manifest records which ones failed.
pub fn run(config: &SweepConfig, submitter: &mut dyn Submitter) -> Result<SweepManifest> {
    let outdir = config.outdir.prepare()?;
    let templates = JobTemplates::load(&config.template_dir)?;
    let jobs: Vec<Job> = config.lists.expand()?;

    let ctx = RenderContext {
        install_base: config.install_base.clone(),
        indir: config.indir.clone(),
        outdir: outdir.path.clone(),
    };

    let mut records = Vec::with_capacity(jobs.len());
    for job in &jobs {
        let files = JobFiles::write(&outdir.path, job, &templates, &ctx)?;
        let record = JobRecord::staged(job, &files);
        records.push((files, record));
    }
    info!("Staged {} jobs in {}", records.len(), outdir.path.display());

    if config.dry_run {
        info!("--dry-run set, not submitting");
    } else {
        for (files, record) in records.iter_mut() {
            info!("Submitting {}", record.name);
            match submitter.submit(&outdir.path, files.descriptor_file_name()) {
                Ok(receipt) => {
                    if let Some(cluster) = &receipt.cluster {
                        info!("{} submitted to cluster {cluster}", record.name);
                    }
                    record.state = JobState::Submitted;
                    record.cluster = receipt.cluster;
                }
                Err(err) => {
                    error!("Submitting {} failed: {err:#}", record.name);
                    record.state = JobState::Failed;
                    record.error = Some(format!("{err:#}"));
                }
            }
        }
    }

    let records = records.into_iter().map(|(_, record)| record).collect();
    let manifest = SweepManifest::new(config, &outdir.path, records);
    manifest.write(&outdir.path)?;
    Ok(manifest)
}

/// Turn failed submissions into an error naming every failed job
pub fn check(manifest: &SweepManifest) -> Result<()> {
    let failed: Vec<String> = manifest
        .jobs
        .iter()
        .filter(|job| job.state == JobState::Failed)
        .map(|job| job.name.to_string())
        .collect();
    match failed.is_empty() {
        true => Ok(()),
        false => Err(anyhow!("{} of {} jobs failed to submit: {}", failed.len(), manifest.jobs.len(), failed.join(", "))),
    }
}
