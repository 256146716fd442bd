pub mod args;
pub mod prompt;
pub mod reporter;

pub use args::Cli;
pub use prompt::FollowUpPrompter;
pub use reporter::ReportFormatter;

use std::fs;
use std::io::{self, Read};

use crate::analyzer::AnalysisOrchestrator;
use crate::error::SenseiError;
use crate::history::{FileHistoryStore, HistoryEntry, HistoryStore};
use crate::models::{Conversation, Snippet, SnippetSource};

pub struct CliHandler {
    cli: Cli,
}

impl CliHandler {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    pub async fn run(&self) -> Result<i32, SenseiError> {
        let formatter = ReportFormatter::new(self.cli.should_use_color(), self.cli.is_verbose());

        if self.cli.is_history_maintenance() {
            return self.run_history_maintenance(&formatter);
        }

        // Step 1: read the snippet
        let snippet = self.read_snippet()?;
        snippet.validate()?;

        if self.cli.is_verbose() {
            eprintln!(
                "📥 Read {} bytes ({} lines) from {}",
                snippet.size_bytes(),
                snippet.line_count(),
                snippet.source
            );
        }

        // Step 2: run the six analyses concurrently
        let orchestrator = AnalysisOrchestrator::new(
            &self.cli.get_llm_model(),
            None,
            self.cli.get_timeout_seconds(),
        )?;

        if self.cli.is_verbose() {
            eprintln!("🤖 {}", orchestrator.model_info());
        }
        if self.cli.is_debug() {
            eprintln!(
                "🔧 Dispatching 6 analysis prompts over a {}-byte snippet",
                snippet.size_bytes()
            );
        }

        let report = orchestrator.analyze(&snippet.content).await?;

        if self.cli.is_verbose() {
            eprintln!(
                "📊 Analysis complete - {}/6 slots populated in {}ms",
                report.slot_count(),
                report.analysis_duration_ms
            );
        }

        // Step 3: render
        if self.cli.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", formatter.format_analysis_report(&report));
        }

        // Step 4: follow-up questions
        let mut conversation = Conversation::new();
        let prompter = FollowUpPrompter::new(&formatter, self.cli.should_use_color());

        if !self.cli.questions.is_empty() {
            prompter
                .ask_batch(
                    &orchestrator,
                    &snippet.content,
                    &self.cli.questions,
                    &mut conversation,
                )
                .await?;
        } else if self.should_run_interactive(&snippet) {
            prompter
                .run_interactive(&orchestrator, &snippet.content, &mut conversation)
                .await?;
        }

        // Step 5: persist
        if !self.cli.no_history {
            self.save_history_entry(&snippet, report, conversation)?;
        }

        Ok(0)
    }

    fn run_history_maintenance(&self, formatter: &ReportFormatter) -> Result<i32, SenseiError> {
        let mut store = self.open_history_store()?;

        if self.cli.clear_history {
            store.clear()?;
            println!("History cleared.");
            return Ok(0);
        }

        let entries = store.list()?;
        println!("{}", formatter.format_history_list(&entries));
        Ok(0)
    }

    fn read_snippet(&self) -> Result<Snippet, SenseiError> {
        match &self.cli.file {
            Some(path) => {
                let content = fs::read_to_string(path)?;
                Ok(Snippet::new(content, SnippetSource::File(path.clone())))
            }
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                if buffer.trim().is_empty() {
                    return Err(SenseiError::NoInput);
                }
                Ok(Snippet::new(buffer, SnippetSource::Stdin))
            }
        }
    }

    /// The interactive loop needs stdin for questions, so it only runs when
    /// the snippet came from a file argument and no mode conflicts with it.
    fn should_run_interactive(&self, snippet: &Snippet) -> bool {
        matches!(snippet.source, SnippetSource::File(_)) && !self.cli.json
    }

    fn open_history_store(&self) -> Result<FileHistoryStore, SenseiError> {
        match self.cli.get_history_file() {
            Some(path) => Ok(FileHistoryStore::new(path)),
            None => FileHistoryStore::at_default_location(),
        }
    }

    fn save_history_entry(
        &self,
        snippet: &Snippet,
        report: crate::models::AnalysisReport,
        conversation: Conversation,
    ) -> Result<(), SenseiError> {
        let mut store = self.open_history_store()?;
        let entry = HistoryEntry::new(snippet.content.clone(), report, conversation);

        if self.cli.is_verbose() {
            eprintln!("💾 Saved analysis {} to {}", entry.id, store.path().display());
        }

        store.append(entry)
    }
}
