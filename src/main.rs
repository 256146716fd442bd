use sensei::{
    cli::{Cli, CliHandler},
    error::SenseiError,
};
use std::process;

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("❌ Argument parsing failed: {}", e);
            process::exit(2);
        }
    };

    // Create and run the CLI handler
    let handler = CliHandler::new(cli);

    let exit_code = match handler.run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {}", e);
            match e {
                SenseiError::InvalidInput(_)
                | SenseiError::NoInput
                | SenseiError::InvalidArguments(_)
                | SenseiError::TokenLimitExceeded => 2, // Bad input
                SenseiError::AnalysisTimeout { .. } => 4, // Analysis timed out
                SenseiError::LlmClientError(_)
                | SenseiError::AnalysisUnavailable(_) => 5, // LLM service error
                SenseiError::HistoryError(_) => 6,        // History store error
                _ => 1,                                   // General error
            }
        }
    };

    process::exit(exit_code);
}
