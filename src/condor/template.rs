use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::sweep::Job;

/// The two templates every job is rendered from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// condor_submit descriptor
    Descriptor,
    /// shell script run by the scheduler
    Launcher,
}

impl TemplateKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateKind::Descriptor => "CondorConf.tmpl.condor",
            TemplateKind::Launcher => "CondorShel.tmpl.sh",
        }
    }

    /// Extension of the rendered file
    pub fn extension(&self) -> &'static str {
        match self {
            TemplateKind::Descriptor => "condor",
            TemplateKind::Launcher => "sh",
        }
    }
}

/// Bare tokens recognised inside a template
///
/// Substitution happens in the order of [`Placeholder::ALL`]. A value that contains the literal
/// name of a placeholder later in the order is substituted again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    CmsswBase,
    OutDir,
    OutputPath,
    InDir,
    ParamH,
    ParamJ,
    ParamT,
    ParamSig,
    ParamMcSteps,
    ParamDim,
    ParamDepth,
    Name,
}

impl Placeholder {
    pub const ALL: [Placeholder; 12] = [
        Placeholder::CmsswBase,
        Placeholder::OutDir,
        Placeholder::OutputPath,
        Placeholder::InDir,
        Placeholder::ParamH,
        Placeholder::ParamJ,
        Placeholder::ParamT,
        Placeholder::ParamSig,
        Placeholder::ParamMcSteps,
        Placeholder::ParamDim,
        Placeholder::ParamDepth,
        Placeholder::Name,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::CmsswBase => "CMSSWBASE",
            Placeholder::OutDir => "OUTDIR",
            Placeholder::OutputPath => "OUTPUT_PATH",
            Placeholder::InDir => "INDIR",
            Placeholder::ParamH => "PARAM_H",
            Placeholder::ParamJ => "PARAM_J",
            Placeholder::ParamT => "PARAM_T",
            Placeholder::ParamSig => "PARAM_SIG",
            Placeholder::ParamMcSteps => "PARAM_MCSTEPS",
            Placeholder::ParamDim => "PARAM_DIM",
            Placeholder::ParamDepth => "PARAM_DEPTH",
            Placeholder::Name => "NAME",
        }
    }
}

/// Values shared by every job of a sweep
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Installation base path (CMSSW_BASE)
    pub install_base: String,
    pub indir: PathBuf,
    /// Absolute output directory
    pub outdir: PathBuf,
}

impl RenderContext {
    /// Value substituted for a placeholder when rendering `job`
    pub fn value(&self, placeholder: Placeholder, job: &Job) -> String {
        let params = &job.params;
        match placeholder {
            Placeholder::CmsswBase => self.install_base.clone(),
            Placeholder::OutDir => self.outdir.display().to_string(),
            Placeholder::OutputPath => format!("{}/stdout/", self.outdir.display()),
            Placeholder::InDir => format!("{}/", self.indir.display()),
            Placeholder::ParamH => params.h.clone(),
            Placeholder::ParamJ => params.j.clone(),
            Placeholder::ParamT => params.t.clone(),
            Placeholder::ParamSig => params.sigma.clone(),
            Placeholder::ParamMcSteps => params.mc_steps.clone(),
            Placeholder::ParamDim => params.dim.clone(),
            Placeholder::ParamDepth => params.depth.clone(),
            Placeholder::Name => job.name.to_string(),
        }
    }
}

/// A template read from disk, rendered once per job
#[derive(Debug, Clone)]
pub struct JobTemplate {
    pub kind: TemplateKind,
    text: String,
}

impl JobTemplate {
    /// Read a template from `dir`. A missing template aborts the sweep.
    pub fn load(dir: &Path, kind: TemplateKind) -> Result<JobTemplate> {
        let path = dir.join(kind.file_name());
        info!("Reading template {}", path.display());
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Can't read template {}", path.display()))?;
        Ok(JobTemplate { kind, text })
    }

    pub fn from_text(kind: TemplateKind, text: &str) -> JobTemplate {
        JobTemplate { kind, text: text.to_string() }
    }

    /// Replace every occurrence of every placeholder, one placeholder at a time
    ///
    /// Plain substring replacement, no escaping. Unknown tokens are left alone.
    pub fn render(&self, job: &Job, ctx: &RenderContext) -> String {
        Placeholder::ALL.iter().fold(self.text.clone(), |text, placeholder| {
            let token = placeholder.token();
            if text.contains(token) {
                text.replace(token, &ctx.value(*placeholder, job))
            } else {
                text
            }
        })
    }
}
