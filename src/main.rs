use clap::Parser;
use std::path::PathBuf;

use fontswap::log_status;
use fontswap::rewrite;

mod output;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Source tree rewritten when no root is given.
const DEFAULT_ROOT: &str = "lumina_lanka/lib";

#[derive(Parser)]
#[command(name = "fontswap")]
#[command(version = VERSION)]
#[command(about = "Replace google_fonts usage in Dart sources with a bundled font family")]
struct Cli {
    /// Directory to rewrite recursively (files ending in .dart)
    #[arg(default_value = DEFAULT_ROOT)]
    root: PathBuf,
}

fn run(cli: Cli) -> fontswap::Result<rewrite::RewriteSummary> {
    log_status!("rewrite", "Scanning {}", cli.root.display());

    let summary = rewrite::rewrite_tree(&cli.root, |outcome| {
        output::print_updated(&outcome.path)?;
        log_status!(
            "rewrite",
            "{}: {}",
            outcome.path.display(),
            output::replacement_counts(&outcome.replacements)
        );
        Ok(())
    })?;

    log_status!(
        "rewrite",
        "{} of {} files updated",
        summary.files_updated.len(),
        summary.files_scanned
    );
    Ok(summary)
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&err);
            std::process::ExitCode::from(output::exit_code_for_error(err.code))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn root_defaults_to_app_lib() {
        let cli = Cli::try_parse_from(["fontswap"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("lumina_lanka/lib"));
    }

    #[test]
    fn root_can_be_overridden() {
        let cli = Cli::try_parse_from(["fontswap", "app/lib"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("app/lib"));
    }
}
