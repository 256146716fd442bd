use clap::Parser;
use std::path::PathBuf;

use crate::error::SenseiError;

#[derive(Parser, Debug)]
#[command(name = "sensei")]
#[command(about = "CodeSENSEI - multi-faceted code explanations powered by LLMs")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Code file to analyze; reads the snippet from stdin when omitted
    pub file: Option<PathBuf>,

    /// LLM model to use for analysis
    #[arg(short = 'm', long, default_value = "gpt-5-mini")]
    pub model: String,

    /// Maximum time per analysis request in seconds (10-300)
    #[arg(short = 't', long, default_value = "60", value_parser = validate_timeout)]
    pub timeout: u64,

    /// Follow-up question to ask after the analysis (repeatable)
    #[arg(short = 'q', long = "question")]
    pub questions: Vec<String>,

    /// Print the analysis report as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,

    /// List saved analyses and exit
    #[arg(long)]
    pub history: bool,

    /// Delete all saved analyses and exit
    #[arg(long)]
    pub clear_history: bool,

    /// Path of the history file
    #[arg(long)]
    pub history_file: Option<PathBuf>,

    /// Skip saving this analysis to history
    #[arg(long)]
    pub no_history: bool,

    /// Enable verbose output to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Enable debug output including prompt sizes
    #[arg(short = 'd', long)]
    pub debug: bool,
}

impl Cli {
    pub fn parse_args() -> Result<Self, SenseiError> {
        let cli = Self::try_parse().map_err(|e| SenseiError::InvalidArguments(e.to_string()))?;

        cli.validate()?;

        Ok(cli)
    }

    pub fn validate(&self) -> Result<(), SenseiError> {
        if !(10..=300).contains(&self.timeout) {
            return Err(SenseiError::InvalidArguments(
                "Timeout must be between 10 and 300 seconds".to_string(),
            ));
        }

        if self.questions.iter().any(|q| q.trim().is_empty()) {
            return Err(SenseiError::InvalidArguments(
                "Follow-up questions cannot be empty".to_string(),
            ));
        }

        if self.history && self.clear_history {
            return Err(SenseiError::InvalidArguments(
                "--history and --clear-history are mutually exclusive".to_string(),
            ));
        }

        Ok(())
    }

    /// True when the invocation only maintains history and needs no snippet.
    pub fn is_history_maintenance(&self) -> bool {
        self.history || self.clear_history
    }

    pub fn get_llm_model(&self) -> String {
        std::env::var("SENSEI_MODEL").unwrap_or_else(|_| self.model.clone())
    }

    pub fn get_timeout_seconds(&self) -> u64 {
        if let Ok(timeout_str) = std::env::var("SENSEI_TIMEOUT") {
            if let Ok(timeout) = timeout_str.parse::<u64>() {
                if (10..=300).contains(&timeout) {
                    return timeout;
                }
            }
        }
        self.timeout
    }

    pub fn get_history_file(&self) -> Option<PathBuf> {
        if let Some(ref path) = self.history_file {
            return Some(path.clone());
        }
        std::env::var("SENSEI_HISTORY_FILE").ok().map(PathBuf::from)
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose || self.debug
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn should_use_color(&self) -> bool {
        std::env::var("NO_COLOR").is_err()
    }
}

fn validate_timeout(s: &str) -> Result<u64, String> {
    let timeout: u64 = s.parse().map_err(|_| "Timeout must be a number")?;

    if (10..=300).contains(&timeout) {
        Ok(timeout)
    } else {
        Err("Timeout must be between 10 and 300 seconds".to_string())
    }
}
