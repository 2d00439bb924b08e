use anyhow::Result;
use clap::Parser;
use susmeter::cli::{Cli, Commands};
use susmeter::commands::analyze::{handle_analyze, AnalyzeConfig};
use susmeter::commands::check::check_survey;
use susmeter::formatting::FormattingConfig;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            file,
            format,
            output,
            strict,
            plain,
        } => {
            let config = AnalyzeConfig {
                file,
                format: format.into(),
                output,
                strict,
                formatting: create_formatting_config(plain),
            };
            handle_analyze(config)
        }
        Commands::Check { file } => check_survey(&file),
    }
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
