use anyhow::Result;
use clap::Parser;
use log::info;

use condor_sweep::condor::submit::CondorSubmit;
use condor_sweep::config::{Args, SweepConfig};
use condor_sweep::driver;
use condor_sweep::manifest::JobState;

fn main() -> Result<()> {
    env_logger::init();
    info!("terve! starting up :)");

    let config = SweepConfig::try_from(Args::parse())?;
    let mut submitter = CondorSubmit::new(&config.submit_command);
    let manifest = driver::run(&config, &mut submitter)?;

    info!(
        "{} staged, {} submitted, {} failed",
        manifest.jobs.len(),
        manifest.count(JobState::Submitted),
        manifest.count(JobState::Failed)
    );
    driver::check(&manifest)
}
