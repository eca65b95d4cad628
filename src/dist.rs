use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};

use crate::config::Config;
use crate::error::BuildError;
use crate::fsio;
use crate::version::Version;

pub fn artifact_name(product: &str, version: &Version, extension: &str) -> String {
    format!("{product}-v{version}.{extension}")
}

/// Write the rendered bundle to its two destinations: the version-stamped
/// file under the distribution directory (created on demand) and the fixed
/// test file (overwritten). Returns the distribution path. The test file's
/// parent directory is deliberately not created; the project tree is
/// expected to already have it.
pub fn write_outputs(
    config: &Config,
    version: &Version,
    content: &str,
) -> Result<PathBuf, BuildError> {
    fs::create_dir_all(&config.dist_dir)
        .map_err(|err| BuildError::from_io(err, &config.dist_dir))?;

    let dist_file = config
        .dist_dir
        .join(artifact_name(&config.product, version, &config.extension));
    fsio::write_file(&dist_file, content)?;
    fsio::write_file(&config.test_file, content)?;
    Ok(dist_file)
}

/// Copy a finished artifact into the live deployment directory (created on
/// demand), keeping the file's timestamps and permissions. Returns the
/// destination path.
pub fn copy_to_live(source: &Path, live_dir: &Path) -> Result<PathBuf, BuildError> {
    fs::create_dir_all(live_dir).map_err(|err| BuildError::from_io(err, live_dir))?;

    let name = source
        .file_name()
        .ok_or_else(|| BuildError::Other(anyhow!("{}: not a file path", source.display())))?;
    let dest = live_dir.join(name);
    fsio::copy_preserving_times(source, &dest)?;
    Ok(dest)
}

/// A single yes/no decision asked of the operator. The pipeline depends on
/// this seam rather than on the terminal so runs can be driven
/// non-interactively.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Interactive [`Confirm`] over a reader/writer pair. Accepts `y`/`n` in
/// any case, re-prompts on anything else, and treats end of input as a
/// failure.
pub struct PromptConfirm<R, W> {
    input: R,
    output: W,
}

impl PromptConfirm<io::BufReader<io::Stdin>, io::Stdout> {
    pub fn stdio() -> Self {
        PromptConfirm::new(io::BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirm<R, W> {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(anyhow!("end of input while waiting for confirmation"));
            }
            match line.trim().to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => writeln!(self.output, "Please enter 'y' or 'n'")?,
            }
        }
    }
}
