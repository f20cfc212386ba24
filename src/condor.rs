//! Render HTCondor job files from templates and submit them

/// Load descriptor and launcher templates and substitute placeholders
pub mod template;

/// Write the rendered descriptor and launcher for a job
pub mod job;

/// Run the scheduler's submit command
pub mod submit;
