use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_changelog::cli::{self, RunArgs};
use git_changelog::error::exit_codes;
use git_changelog::{config, ui, ChangelogError};

#[derive(clap::Parser)]
#[command(
    name = "git-changelog",
    version,
    about = "Generate a changelog release from ticket-tagged commit messages"
)]
struct Args {
    #[arg(help = "Path to the existing changelog file")]
    changelog: PathBuf,

    #[arg(short, long, help = "Write the new changelog to this path")]
    output: Option<PathBuf>,

    #[arg(long, conflicts_with = "output", help = "Overwrite the existing changelog")]
    in_place: bool,

    #[arg(short, long, help = "Overwrite without asking")]
    force: bool,

    #[arg(long, help = "Print the generated release without writing anything")]
    dry_run: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(
        short = 'C',
        long,
        help = "Directory to start searching for the repository from [default: current directory]"
    )]
    directory: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            println!("Please provide a path to the desired changelog file");
            println!("{}", e.render());
            std::process::exit(exit_codes::USAGE);
        }
    };

    init_tracing(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => exit_with(&e),
    };

    let start_dir = match args.directory {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let mut run_args = RunArgs::new(args.changelog, start_dir);
    run_args.output = args.output;
    run_args.in_place = args.in_place;
    run_args.dry_run = args.dry_run;

    let force = args.force;
    ui::display_status("Scanning reflog for new commits...");
    let summary = match cli::run_with_confirmation(&run_args, &config, |path| {
        force || confirm_overwrite(path)
    }) {
        Ok(summary) => summary,
        Err(e) => exit_with(&e),
    };

    for warning in &summary.warnings {
        ui::display_boundary_warning(warning);
    }
    if run_args.dry_run {
        ui::display_section(&summary.section);
    }
    ui::display_summary(&summary);

    Ok(())
}

/// Asks before an in-place run replaces `path`. Unreadable input counts as "no".
fn confirm_overwrite(path: &Path) -> bool {
    let prompt = format!("Overwrite {} with the new release?", path.display());
    ui::confirm_action(&prompt).unwrap_or_else(|e| {
        tracing::warn!("Could not read confirmation: {}", e);
        false
    })
}

fn exit_with(error: &ChangelogError) -> ! {
    ui::display_error(&error.to_string());
    std::process::exit(error.exit_code());
}

/// Console logging to stderr, controlled by RUST_LOG (default: warn).
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
