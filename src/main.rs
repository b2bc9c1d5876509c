use clap::Parser;
use remeta_engine::Renamer;
use remeta_extract::ExtensionRouter;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Rename batches of media files from a naming scheme and their metadata.
///
/// The scheme is a flat sequence of tokens given with repeated `--scheme`
/// flags: plain text is kept verbatim, `:name` resolves to the metadata key
/// `name` extracted per file (EXIF for images, tags for audio). Files whose
/// metadata cannot satisfy the scheme are skipped, never fatal.
#[derive(Debug, Parser)]
#[command(name = "remeta", version)]
struct Cli {
    /// Scheme token: literal text, or `:key` referencing a metadata key.
    /// Repeat in order, e.g. `-s Test- -s :date_time`.
    #[arg(short = 's', long = "scheme", value_name = "TOKEN", required = true)]
    scheme: Vec<String>,

    /// Replacement for filesystem-illegal characters in generated names.
    #[arg(short = 'r', long, value_name = "CHAR", default_value_t = remeta_engine::DEFAULT_SUBSTITUTION)]
    replacement: char,

    /// Perform the renames. Without this flag only the plan is printed.
    #[arg(long)]
    apply: bool,

    /// Files to rename.
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut renamer = Renamer::new(ExtensionRouter::new());
    if let Err(e) = renamer.set_substitution(cli.replacement) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    renamer.set_scheme(cli.scheme);

    let total = cli.paths.len();
    let plan = renamer.plan(&cli.paths);
    for (old, new) in plan.iter() {
        println!("{} -> {}", old.display(), new);
    }
    // Skipped files only show up as a count; details go to the log.
    let skipped = total - plan.len();
    if skipped > 0 {
        eprintln!("skipped {skipped} of {total} file(s)");
    }

    if cli.apply {
        renamer.execute(&plan);
    }
    ExitCode::SUCCESS
}
