//! Command line options and the configuration handed to the sweep driver

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{info, warn};

use crate::sweep::params::ParameterLists;

/// Render and submit a Cartesian-product sweep of HTCondor jobs
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Input sample directory, substituted for INDIR
    #[arg(long, env = "PWD")]
    pub indir: Option<PathBuf>,

    /// Location of output directory, created with a stdout/ subdirectory if absent
    #[arg(long, env = "PWD")]
    pub outdir: Option<PathBuf>,

    /// List of config h fields
    #[arg(long = "hList", default_value = "")]
    pub h: String,

    /// List of config J fields
    #[arg(long = "jList", default_value = "")]
    pub j: String,

    /// List of config temps
    #[arg(long = "tList", default_value = "")]
    pub t: String,

    /// List of config sigmas
    #[arg(long = "sigList", default_value = "")]
    pub sigma: String,

    /// List of config # MC steps
    #[arg(long = "mcStepsList", default_value = "")]
    pub mc_steps: String,

    /// List of config dimensions
    #[arg(long = "dimList", default_value = "")]
    pub dim: String,

    /// List of config depths
    #[arg(long = "depthList", default_value = "")]
    pub depth: String,

    /// Installation base path, substituted for CMSSWBASE
    #[arg(long, env = "CMSSW_BASE")]
    pub cmssw_base: Option<String>,

    /// Directory holding CondorConf.tmpl.condor and CondorShel.tmpl.sh
    #[arg(long, default_value = "../condor")]
    pub template_dir: PathBuf,

    /// Scheduler submit command, called once per job with the descriptor file name
    #[arg(long, default_value = "condor_submit")]
    pub submit_command: String,

    /// Render every job but don't submit anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Everything the sweep needs, resolved once from the command line and environment
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub install_base: String,
    pub indir: PathBuf,
    pub outdir: OutputDirectory,
    pub template_dir: PathBuf,
    pub submit_command: String,
    pub dry_run: bool,
    pub lists: ParameterLists,
}

impl TryFrom<Args> for SweepConfig {
    type Error = anyhow::Error;

    /// Configuration errors are reported here, before anything touches the filesystem
    fn try_from(args: Args) -> Result<SweepConfig> {
        let indir = match args.indir {
            Some(indir) if !indir.as_os_str().is_empty() => indir,
            _ => return Err(anyhow!("no --indir specified")),
        };
        if !indir.is_dir() {
            warn!("Input directory {} is not visible from here", indir.display());
        }

        let install_base = args
            .cmssw_base
            .ok_or_else(|| anyhow!("no --cmssw-base specified and CMSSW_BASE is not set"))?;

        let outdir = match args.outdir {
            Some(outdir) if !outdir.as_os_str().is_empty() => outdir,
            _ => env::current_dir().context("Working directory")?,
        };

        Ok(SweepConfig {
            install_base,
            indir,
            outdir: OutputDirectory { path: outdir },
            template_dir: args.template_dir,
            submit_command: args.submit_command,
            dry_run: args.dry_run,
            lists: ParameterLists {
                h: args.h,
                j: args.j,
                t: args.t,
                sigma: args.sigma,
                mc_steps: args.mc_steps,
                dim: args.dim,
                depth: args.depth,
            },
        })
    }
}

/// Directory that receives rendered job files, the scheduler logs and the sweep manifest
#[derive(Debug, Clone)]
pub struct OutputDirectory {
    pub path: PathBuf,
}

impl OutputDirectory {
    /// Create the directory and its `stdout/` subdirectory, then make the path absolute
    pub fn prepare(&self) -> Result<OutputDirectory> {
        let stdout = self.path.join("stdout");
        if !stdout.exists() {
            info!("Creating output directory {}", stdout.display());
        }
        fs::create_dir_all(&stdout)
            .with_context(|| format!("Can't create output directory {}", stdout.display()))?;
        let path = fs::canonicalize(&self.path)
            .with_context(|| format!("Can't resolve {}", self.path.display()))?;
        Ok(OutputDirectory { path })
    }
}
