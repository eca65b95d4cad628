use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;

const DEFAULT_PRODUCT: &str = "voicefaster-extension";
const DEFAULT_EXTENSION: &str = "js";

#[derive(Debug, Parser)]
#[command(
    name = "voicefaster-build",
    version,
    about = "Assemble the VoiceFaster extension bundle, bumping its patch version."
)]
pub struct Cli {
    /// Declaration file holding the `version: "X.Y.Z"` field to bump.
    #[arg(long, env = "VOICEFASTER_VERSION_FILE", default_value = "config/version.js")]
    pub version_file: PathBuf,

    /// Stylesheet injected into the template.
    #[arg(long, env = "VOICEFASTER_STYLESHEET", default_value = "src/voicefaster.css")]
    pub stylesheet: PathBuf,

    /// Script body injected into the template.
    #[arg(long, env = "VOICEFASTER_SCRIPT", default_value = "src/voicefaster.js")]
    pub script: PathBuf,

    /// Template containing the placeholder tokens.
    #[arg(long, env = "VOICEFASTER_TEMPLATE", default_value = "src/template.js")]
    pub template: PathBuf,

    /// Directory receiving the version-stamped bundle. Created if absent.
    #[arg(long, env = "VOICEFASTER_DIST_DIR", default_value = "dist")]
    pub dist_dir: PathBuf,

    /// Fixed-path copy of the bundle, overwritten every run.
    #[arg(
        long,
        env = "VOICEFASTER_TEST_FILE",
        default_value = "test/voicefaster-test.js"
    )]
    pub test_file: PathBuf,

    /// Deployment directory offered at the end of the run.
    #[arg(long, env = "VOICEFASTER_LIVE_DIR", default_value = "../../live")]
    pub live_dir: PathBuf,

    /// Product name used in the output filename.
    #[arg(long, env = "VOICEFASTER_PRODUCT", default_value = DEFAULT_PRODUCT)]
    pub product: String,

    /// Output filename extension (without the dot).
    #[arg(long, env = "VOICEFASTER_EXTENSION", default_value = DEFAULT_EXTENSION)]
    pub extension: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub version_file: PathBuf,
    pub stylesheet: PathBuf,
    pub script: PathBuf,
    pub template: PathBuf,
    pub dist_dir: PathBuf,
    pub test_file: PathBuf,
    pub live_dir: PathBuf,
    pub product: String,
    pub extension: String,
}

impl Config {
    pub fn from_cli() -> Result<Self> {
        Config::from_parts(Cli::parse())
    }

    fn from_parts(cli: Cli) -> Result<Self> {
        if cli.product.is_empty() {
            return Err(anyhow!("product name must not be empty"));
        }

        if cli.extension.is_empty() || cli.extension.starts_with('.') {
            return Err(anyhow!("extension must be a bare suffix like \"js\""));
        }

        Ok(Self {
            version_file: cli.version_file,
            stylesheet: cli.stylesheet,
            script: cli.script,
            template: cli.template,
            dist_dir: cli.dist_dir,
            test_file: cli.test_file,
            live_dir: cli.live_dir,
            product: cli.product,
            extension: cli.extension,
        })
    }
}
