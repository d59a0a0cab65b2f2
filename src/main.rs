//! Resume profiler: skill extraction and role scoring for resume documents

mod cli;
mod config;
mod error;
mod input;
mod output;
mod processing;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::{Config, OutputFormat};
use error::{Result, ResumeProfilerError};
use input::manager::InputManager;
use log::{error, info};
use output::formatter::{self, ConsoleFormatter, JsonFormatter, OutputFormatter};
use processing::analyzer::AnalysisEngine;
use processing::catalog::SkillCatalog;
use processing::profiles::RoleProfileTable;
use processing::tokenizer::Tokenizer;
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            file,
            output,
            save,
            detailed,
        } => {
            info!("Starting resume analysis");

            cli::validate_file_extension(&file, &["pdf", "docx", "txt", "md"])
                .map_err(|e| ResumeProfilerError::InvalidInput(format!("Resume file: {}", e)))?;

            let output_format = match output {
                Some(requested) => {
                    cli::parse_output_format(&requested).map_err(ResumeProfilerError::InvalidInput)?
                }
                None => config.output.format.clone(),
            };

            let mut input_manager =
                InputManager::new().with_cache(config.processing.enable_caching);
            let resume_text = input_manager.extract_text(&file).await?;
            info!(
                "Extracted {} characters from {}",
                resume_text.len(),
                file.display()
            );

            let tokens = Tokenizer::new().tokenize(&resume_text);
            let engine = AnalysisEngine::new()?;
            let report = engine.analyze(&resume_text, &tokens);

            let detailed = detailed || config.output.detailed;
            let rendered = match output_format {
                OutputFormat::Console => ConsoleFormatter::new(config.output.color_output, detailed)
                    .format_report(&report)?,
                OutputFormat::Json => JsonFormatter::new(true).format_report(&report)?,
            };

            println!("{}", rendered);

            if let Some(save_path) = save {
                // a directory target gets a timestamped file name
                let target = if save_path.is_dir() {
                    save_path.join(formatter::default_save_filename(&output_format))
                } else {
                    save_path
                };
                formatter::write_report(&target, &rendered)?;
                println!("Report saved to {}", target.display());
            }
        }

        Commands::Skills => {
            let catalog = SkillCatalog::new();
            println!("Recognized skills ({}):", catalog.len());
            for term in catalog.terms() {
                println!("  {}", term);
            }
        }

        Commands::Roles => {
            let table = RoleProfileTable::new();
            println!("Role profiles ({}):", table.len());
            for profile in table.profiles() {
                println!("\n{}:", profile.name);
                for &(skill, weight) in profile.skills {
                    println!("  {:<20} {}", skill, weight);
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current configuration\n");
                println!("Output format: {:?}", config.output.format);
                println!("Detailed output: {}", config.output.detailed);
                println!("Color output: {}", config.output.color_output);
                println!("Extraction caching: {}", config.processing.enable_caching);
            }
            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}
