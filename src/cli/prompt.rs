use std::io::{self, BufRead, Write};

use crate::analyzer::AnalysisOrchestrator;
use crate::cli::reporter::ReportFormatter;
use crate::error::SenseiError;
use crate::models::{Conversation, FollowUpExchange};

/// Drives the follow-up question/answer exchange after an analysis. Each
/// question goes out with the original code only; the conversation log is
/// kept here, never re-sent.
pub struct FollowUpPrompter<'a> {
    formatter: &'a ReportFormatter,
    use_colors: bool,
}

impl<'a> FollowUpPrompter<'a> {
    pub fn new(formatter: &'a ReportFormatter, use_colors: bool) -> Self {
        Self {
            formatter,
            use_colors,
        }
    }

    /// Ask a fixed batch of questions (the `--question` flags). The first
    /// unavailable answer aborts the batch.
    pub async fn ask_batch(
        &self,
        orchestrator: &AnalysisOrchestrator,
        code: &str,
        questions: &[String],
        conversation: &mut Conversation,
    ) -> Result<(), SenseiError> {
        for question in questions {
            let answer = orchestrator.answer_follow_up(code, question).await?;
            println!("\n{}", self.formatter.format_answer(question, &answer));
            conversation.record(FollowUpExchange::new(question.clone(), answer));
        }
        Ok(())
    }

    /// Interactive loop reading questions from stdin until EOF, an empty
    /// line, or an explicit quit. A failed answer is reported and the loop
    /// continues; the failure is fatal only to that one exchange.
    pub async fn run_interactive(
        &self,
        orchestrator: &AnalysisOrchestrator,
        code: &str,
        conversation: &mut Conversation,
    ) -> Result<(), SenseiError> {
        println!();
        println!("Ask follow-up questions about this snippet (empty line or 'quit' to finish).");

        let stdin = io::stdin();
        loop {
            self.show_prompt()?;

            let mut line = String::new();
            let bytes = stdin.lock().read_line(&mut line)?;
            if bytes == 0 {
                break; // EOF
            }

            let question = line.trim();
            if question.is_empty() || question.eq_ignore_ascii_case("quit") {
                break;
            }

            match orchestrator.answer_follow_up(code, question).await {
                Ok(answer) => {
                    println!("\n{}\n", self.formatter.format_answer(question, &answer));
                    conversation.record(FollowUpExchange::new(question, answer));
                }
                Err(e) => {
                    eprintln!("{}", self.formatter.format_error(&e));
                }
            }
        }

        Ok(())
    }

    fn show_prompt(&self) -> Result<(), SenseiError> {
        if self.use_colors {
            print!("\x1b[1m\x1b[36msensei>\x1b[0m ");
        } else {
            print!("sensei> ");
        }
        io::stdout().flush()?;
        Ok(())
    }
}
