use std::path::PathBuf;

use crate::bundle;
use crate::config::Config;
use crate::dist::{self, Confirm};
use crate::error::BuildError;
use crate::fsio;
use crate::version::{Version, VersionFile};

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub previous: Version,
    pub version: Version,
    pub dist_file: PathBuf,
    pub copied_to: Option<PathBuf>,
}

/// One full build, strictly sequential: bump the version counter, render
/// the bundle, write both outputs, then offer the live copy. The version
/// file is rewritten before the artifacts are read; a failure after that
/// point leaves the bump in place (the run is not transactional).
pub fn run(config: &Config, confirm: &mut dyn Confirm) -> Result<BuildOutcome, BuildError> {
    let store = VersionFile::new(&config.version_file);
    let previous = store.current()?;
    let version = previous.bump_patch();
    store.set(&version)?;
    println!("Version bumped from {previous} to {version}");

    let stylesheet = fsio::read_file(&config.stylesheet)?;
    let script = fsio::read_file(&config.script)?;
    let template = fsio::read_file(&config.template)?;
    let output = bundle::render(&template, &version, &stylesheet, &script);

    let dist_file = dist::write_outputs(config, &version, &output)?;
    println!("Build completed successfully! Output: {}", dist_file.display());

    let copied_to = if confirm.confirm("Copy to live directory? (y/n): ")? {
        let dest = dist::copy_to_live(&dist_file, &config.live_dir)?;
        println!("Copied to {}", dest.display());
        Some(dest)
    } else {
        None
    };

    Ok(BuildOutcome {
        previous,
        version,
        dist_file,
        copied_to,
    })
}
