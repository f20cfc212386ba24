use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::condor::template::{JobTemplate, RenderContext, TemplateKind};
use crate::sweep::Job;

/// Descriptor and launcher templates, loaded once before any job is rendered
#[derive(Debug, Clone)]
pub struct JobTemplates {
    pub descriptor: JobTemplate,
    pub launcher: JobTemplate,
}

impl JobTemplates {
    pub fn load(dir: &Path) -> Result<JobTemplates> {
        Ok(JobTemplates {
            descriptor: JobTemplate::load(dir, TemplateKind::Descriptor)?,
            launcher: JobTemplate::load(dir, TemplateKind::Launcher)?,
        })
    }
}

/// Rendered files of a staged job
///
/// The descriptor is what gets submitted; it expects the launcher in the same directory.
#[derive(Debug, Clone)]
pub struct JobFiles {
    pub descriptor: PathBuf,
    pub launcher: PathBuf,
}

impl JobFiles {
    /// Render both templates for `job` and write them to `dir` as `<stem>.condor` and `<stem>.sh`
    pub fn write(dir: &Path, job: &Job, templates: &JobTemplates, ctx: &RenderContext) -> Result<JobFiles> {
        info!("Staging job {} in {}", job.name, dir.display());
        let descriptor = write_rendered(dir, job, &templates.descriptor, ctx)?;
        let launcher = write_rendered(dir, job, &templates.launcher, ctx)?;
        Ok(JobFiles { descriptor, launcher })
    }

    /// File name handed to the submit command, relative to the output directory
    pub fn descriptor_file_name(&self) -> &str {
        self.descriptor
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
    }
}

fn write_rendered(dir: &Path, job: &Job, template: &JobTemplate, ctx: &RenderContext) -> Result<PathBuf> {
    let path = dir.join(format!("{}.{}", job.name.stem(), template.kind.extension()));
    if path.exists() {
        warn!("{} already exists and will be overwritten", path.display());
    }
    let content = template.render(job, ctx);
    create_file(&path, template.kind)
        .and_then(|mut file| file.write_all(content.as_bytes()))
        .with_context(|| format!("Can't write {}", path.display()))?;
    Ok(path)
}

#[cfg(unix)]
fn create_file(path: &Path, kind: TemplateKind) -> io::Result<std::fs::File> {
    use std::os::unix::fs::OpenOptionsExt;

    let mode = match kind {
        TemplateKind::Launcher => 0o755,
        TemplateKind::Descriptor => 0o644,
    };
    OpenOptions::new().write(true).create(true).truncate(true).mode(mode).open(path)
}

#[cfg(not(unix))]
fn create_file(path: &Path, _kind: TemplateKind) -> io::Result<std::fs::File> {
    OpenOptions::new().write(true).create(true).truncate(true).open(path)
}
