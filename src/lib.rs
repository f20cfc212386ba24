//! Generate and submit a Cartesian-product sweep of HTCondor jobs
//!
//! Seven comma-separated parameter lists are expanded into every combination. Each combination
//! gets a descriptor (`.condor`) and a launcher (`.sh`) rendered from templates, and each
//! descriptor is then handed to `condor_submit`.

pub mod config;
pub mod sweep;
pub mod condor;
pub mod driver;
pub mod manifest;
