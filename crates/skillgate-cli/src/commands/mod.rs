use clap::{Parser, Subcommand};
use std::path::PathBuf;

use skillgate_config::{ConfigLoader, SkillgateConfig};
use skillgate_core::{Result, SkillgateError};
use skillgate_runtime::SkillSession;

use crate::memory_file;

mod skills;
mod turn;

/// skillgate: decide when a skill prompt has to ride along with a message
#[derive(Parser)]
#[command(name = "skillgate", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to skillgate.toml config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List skills that have a prompt in the catalog
    Skills {
        /// Only skills that take a programming language
        #[arg(long)]
        language: bool,
        /// Print the prompt for one skill instead
        #[arg(long)]
        show: Option<String>,
        /// Programming language to inject when showing a prompt
        #[arg(long, requires = "show")]
        with_language: Option<String>,
    },
    /// Show the canonical skill a name resolves to
    Normalize {
        /// Skill name or alias, e.g. "Data-Structures"
        name: String,
    },
    /// Build the request for a turn and print it as JSON
    Prepare {
        #[command(flatten)]
        turn: TurnArgs,
        /// Print the decision inputs instead of the request
        #[arg(long)]
        components: bool,
    },
    /// Append a completed turn to a memory file
    Record {
        #[command(flatten)]
        turn: TurnArgs,
        /// The model's reply
        #[arg(short, long)]
        response: Option<String>,
        /// Whether the instruction was sent (decided from memory when omitted)
        #[arg(long)]
        used_instruction: Option<bool>,
    },
    /// Run a full turn against a canned reply and record it
    Turn {
        #[command(flatten)]
        turn: TurnArgs,
        /// Reply the offline transport returns
        #[arg(short, long, default_value = "ok")]
        reply: String,
    },
    /// Explain whether a skill's instruction would be sent
    Inspect {
        /// Skill name or alias
        #[arg(short, long)]
        skill: String,
        /// Memory file (JSON array of entries)
        #[arg(short, long)]
        memory: Option<PathBuf>,
    },
    /// Show catalog and dispatch statistics
    Stats {
        /// Seed dispatch history from a memory file
        #[arg(short, long)]
        memory: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show current configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Inputs shared by every command that handles a turn.
#[derive(clap::Args)]
struct TurnArgs {
    /// Skill name or alias
    #[arg(short, long)]
    skill: String,
    /// The user's message
    #[arg(short = 'M', long)]
    message: String,
    /// Programming language for code answers
    #[arg(short = 'L', long)]
    language: Option<String>,
    /// Memory file (JSON array of entries); missing means a new conversation
    #[arg(short, long)]
    memory: Option<PathBuf>,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        // Load config first so we can use it for log format
        let config_loader = ConfigLoader::load(self.config.as_deref())?;
        let config = config_loader.get();

        // Resolve log level: --verbose > --quiet > --log-level > config
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            self.log_level.as_deref().unwrap_or(config.logging.level.as_str())
        };
        init_tracing(&config, log_level);
        // Validation ran before the subscriber existed
        for w in config_loader.warnings() {
            tracing::warn!("{}", w);
        }

        let session = SkillSession::from_config(&config);

        match self.command {
            Commands::Skills {
                language,
                show,
                with_language,
            } => skills::cmd_skills(&session, language, show.as_deref(), with_language.as_deref()),
            Commands::Normalize { name } => skills::cmd_normalize(&name),
            Commands::Prepare { turn: args, components } => turn::cmd_prepare(&session, &args, components),
            Commands::Record {
                turn: args,
                response,
                used_instruction,
            } => turn::cmd_record(&session, &args, response.as_deref(), used_instruction),
            Commands::Turn { turn: args, reply } => turn::cmd_turn(&session, &args, &reply).await,
            Commands::Inspect { skill, memory } => turn::cmd_inspect(&skill, memory.as_deref()),
            Commands::Stats { memory, json } => Self::cmd_stats(&session, memory, json),
            Commands::Config { json } => Self::cmd_config(&config, json),
        }
    }

    fn cmd_stats(session: &SkillSession, memory: Option<PathBuf>, json: bool) -> Result<()> {
        let memory = memory_file::load(memory.as_deref())?;
        session.resume(&memory);
        let stats = session.stats()?;

        if json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
            return Ok(());
        }

        println!("\x1b[1mCatalog:\x1b[0m {}", session.catalog().source_name());
        println!("  Prompts:            {}", stats.total_prompts);
        println!("  Skills dispatched:  {}", stats.skills_used_in_session);
        for skill in &stats.skills_used {
            println!("    \x1b[36m{skill}\x1b[0m");
        }
        let language: Vec<String> = stats
            .skills_requiring_programming_language
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("  Language-sensitive: {}", language.join(", "));
        Ok(())
    }

    fn cmd_config(config: &SkillgateConfig, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(config)?);
        } else {
            println!(
                "{}",
                toml::to_string_pretty(config).map_err(|e| SkillgateError::Config(e.to_string()))?
            );
        }
        Ok(())
    }
}

fn init_tracing(config: &SkillgateConfig, log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    // Logs go to stderr so command output stays pipeable
    if config.logging.format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_prepare_with_language() {
        let cli = Cli::try_parse_from([
            "skillgate", "prepare", "--skill", "dsa", "-M", "two sum", "-L", "python",
        ])
        .unwrap();
        match cli.command {
            Commands::Prepare { turn, components } => {
                assert_eq!(turn.skill, "dsa");
                assert_eq!(turn.language.as_deref(), Some("python"));
                assert!(turn.memory.is_none());
                assert!(!components);
            }
            _ => panic!("expected prepare"),
        }
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["skillgate", "-v", "-q", "stats"]).is_err());
    }

    #[test]
    fn record_used_instruction_is_optional() {
        let cli = Cli::try_parse_from([
            "skillgate", "record", "-s", "sales", "-M", "pitch", "-m", "mem.json",
            "--used-instruction", "true",
        ])
        .unwrap();
        match cli.command {
            Commands::Record { used_instruction, .. } => assert_eq!(used_instruction, Some(true)),
            _ => panic!("expected record"),
        }
    }
}
