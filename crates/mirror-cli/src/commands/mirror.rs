use anyhow::Context;
use mirror_core::config::Config;
use mirror_core::scanner::validate_roots;
use mirror_core::sync::{MirrorEngine, MirrorMode, MirrorReporter};

use super::RunOptions;
use crate::interactive::InteractivePrompter;

const ARE_YOU_SURE: &str = "Do you want to continue?";

pub struct Mirror;

impl Mirror {
    pub fn execute(mode: MirrorMode, options: &RunOptions) -> anyhow::Result<()> {
        let config = options.build_config()?;
        let (source, destination) =
            validate_roots(options.src, options.dst).context("Invalid source or destination")?;
        let prompter = InteractivePrompter::new(config.assume_yes());

        let intro = match mode {
            MirrorMode::Copy => format!(
                "files from {:?} will be copied to {:?}.",
                source.display().to_string(),
                destination.display().to_string()
            ),
            MirrorMode::Clean => format!(
                "files may be deleted in the {:?} folder.",
                destination.display().to_string()
            ),
        };
        if !prompter.confirm(&format!("{intro} {ARE_YOU_SURE}"))? {
            println!("canceling");
            return Ok(());
        }

        let engine = MirrorEngine::new(config).context("Failed to initialize mirror engine")?;
        let plan = engine
            .plan(&source, &destination, mode)
            .context("Failed to gather info about files")?;

        if plan.is_empty() {
            println!("there is nothing to do");
            return Ok(());
        }

        let question = format!(
            "{}{} {ARE_YOU_SURE}",
            plan.summary(),
            Self::log_notice(engine.config())
        );
        if !prompter.confirm(&question)? {
            println!("canceling");
            return Ok(());
        }

        let report = engine
            .apply(&plan, &source, &destination)
            .with_context(|| format!("Failed to {mode} files"))?;

        println!("{}", MirrorReporter::generate_summary(&report));
        println!("the program finished successfully");

        Ok(())
    }

    fn log_notice(config: &Config) -> String {
        if config.dry_run() {
            String::new()
        } else {
            format!(
                " Also a log file named '{}' will be generated.",
                config.log_file().display()
            )
        }
    }
}
