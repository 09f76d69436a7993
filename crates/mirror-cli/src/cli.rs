use std::path::PathBuf;

use clap::Parser;

/// One-way directory mirror
///
/// Copies folders and files missing from the destination, or with --clean
/// deletes the ones absent from the source
#[derive(Parser, Debug)]
#[command(name = "mirror")]
#[command(about, long_about = None, version)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Folder to mirror from
    #[arg(long, value_name = "DIR")]
    pub src: PathBuf,

    /// Folder to mirror into
    #[arg(long, value_name = "DIR")]
    pub dst: PathBuf,

    /// Delete destination entries absent from the source instead of copying
    #[arg(short, long)]
    pub clean: bool,

    /// Answer yes to every confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Preview changes without executing (dry-run)
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Use specific config file
    #[arg(long, value_name = "PATH", conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Ignore all config files
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Write the log of touched paths here (default: ./log)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Skip directories with this name (default: dont_mirror)
    #[arg(long, value_name = "NAME")]
    pub ignore_name: Option<String>,

    /// Report progress every N percent (default: 10)
    #[arg(long, value_name = "PERCENT", value_parser = clap::value_parser!(u8).range(1..=100))]
    pub progress_step: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_clean_flags() {
        let cli = Cli::try_parse_from(["mirror", "--src", "a", "--dst", "b", "-c", "-y"]).unwrap();

        assert!(cli.clean);
        assert!(cli.yes);
        assert!(!cli.dry_run);
        assert_eq!(cli.src, PathBuf::from("a"));
    }

    #[test]
    fn test_progress_step_range() {
        let parse = |step: &str| {
            Cli::try_parse_from(["mirror", "--src", "a", "--dst", "b", "--progress-step", step])
        };

        assert_eq!(parse("25").unwrap().progress_step, Some(25));
        assert!(parse("0").is_err());
        assert!(parse("101").is_err());
    }
}
