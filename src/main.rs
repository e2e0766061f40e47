use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use tag_release::cli::{resolve_tag, run_release_workflow};
use tag_release::config::{self, keys, EnvInputs, LayeredInputs, ReleaseConfig};
use tag_release::git::LazyGit2TagSource;
use tag_release::outputs::ActionOutputs;
use tag_release::publish::ManifestPublisher;
use tag_release::ui;

#[derive(clap::Parser)]
#[command(
    name = "tag-release",
    about = "Compute the next release tag and prepare the release"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, default_value = ".", help = "Repository to read tags from")]
    repo: PathBuf,

    #[arg(long, help = "Use this tag instead of computing one")]
    tag_name: Option<String>,

    #[arg(long, help = "Versioning scheme: continuous or semantic")]
    tag_schema: Option<String>,

    #[arg(long, help = "Bump type: major, minor, patch, premajor or prerelease")]
    increment_type: Option<String>,

    #[arg(long, help = "Mark the release as a prerelease")]
    prerelease: bool,

    #[arg(long, help = "Prerelease name, e.g. beta or rc")]
    prerelease_suffix: Option<String>,

    #[arg(long, help = "Release title (defaults to the tag)")]
    release_name: Option<String>,

    #[arg(long, help = "Release notes")]
    body: Option<String>,

    #[arg(long, help = "Create the release as a draft")]
    draft: bool,

    #[arg(long, help = "File receiving action outputs (defaults to $GITHUB_OUTPUT)")]
    output: Option<PathBuf>,

    #[arg(long, help = "File receiving the release request (defaults to stdout)")]
    manifest: Option<PathBuf>,

    #[arg(long, help = "Only resolve and print the tag")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

impl Args {
    /// Options given on the command line, keyed like every other input layer
    fn inputs(&self) -> HashMap<String, String> {
        let mut inputs = HashMap::new();
        let values = [
            (keys::TAG_NAME, self.tag_name.clone()),
            (keys::TAG_SCHEMA, self.tag_schema.clone()),
            (keys::AUTO_INCREMENT_TYPE, self.increment_type.clone()),
            (keys::PRERELEASE_SUFFIX, self.prerelease_suffix.clone()),
            (keys::RELEASE_NAME, self.release_name.clone()),
            (keys::BODY, self.body.clone()),
            (keys::PRERELEASE, self.prerelease.then(|| "true".to_string())),
            (keys::DRAFT, self.draft.then(|| "true".to_string())),
        ];
        for (key, value) in values {
            if let Some(value) = value {
                inputs.insert(key.to_string(), value);
            }
        }
        inputs
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("tag-release {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };
    let cli_inputs = args.inputs();
    let env_inputs = EnvInputs;
    let inputs = LayeredInputs::new()
        .with(&cli_inputs)
        .with(&env_inputs)
        .with(&file_config);

    // Validate everything before touching the repository
    let release_config = match ReleaseConfig::resolve(&inputs) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    // Not opened at all when an explicit tag name is configured
    let source = LazyGit2TagSource::new(&args.repo);

    let output_path = args
        .output
        .clone()
        .or_else(|| std::env::var_os("GITHUB_OUTPUT").map(PathBuf::from));
    let mut outputs = ActionOutputs::new();

    if args.dry_run {
        ui::display_status("Dry run: the release will not be prepared");
        for warning in &release_config.warnings {
            ui::display_boundary_warning(warning);
        }
        match resolve_tag(&release_config, &source, &mut outputs) {
            Ok(resolved) => println!("{}", resolved.tag),
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let publisher = ManifestPublisher::new(args.manifest.clone());
    let result = run_release_workflow(&release_config, &source, &publisher, &mut outputs);

    // previous_tag is reported even when a later step fails
    outputs.persist(output_path.as_deref())?;

    if let Err(e) = result {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
