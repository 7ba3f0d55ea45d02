//! CLI entry point for list-files

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use list_files::{Options, PathSink, PathWriter, WalkError};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "list-files")]
#[command(about = "List files breadth first")]
#[command(version)]
struct Args {
    /// The directory to list files from
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Only output files, not directories
    #[arg(short = 'f', long = "files")]
    files: bool,

    /// Skip files and folders ignored by git
    #[arg(short = 'g', long = "gitignore")]
    gitignore: bool,
}

impl From<Args> for Options {
    fn from(args: Args) -> Self {
        Options {
            root: args.directory,
            files_only: args.files,
            use_gitignore: args.gitignore,
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging();

    let options = Options::from(args);
    let stdout = io::stdout();
    let mut writer = PathWriter::new(BufWriter::new(stdout.lock()));

    match list_files::run(&options, &mut writer) {
        Ok(stats) => {
            tracing::debug!(?stats, "done");
        }
        // Downstream closed the pipe (e.g. `| head`); nothing left to report.
        Err(WalkError::Output(e)) if e.kind() == io::ErrorKind::BrokenPipe => {}
        Err(e) => {
            let _ = writer.finish();
            eprintln!("list-files: {}", e);
            process::exit(1);
        }
    }
}
