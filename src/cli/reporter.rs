use crate::history::HistoryEntry;
use crate::models::AnalysisReport;

pub struct ReportFormatter {
    use_colors: bool,
    verbose: bool,
}

impl ReportFormatter {
    pub fn new(use_colors: bool, verbose: bool) -> Self {
        Self {
            use_colors,
            verbose,
        }
    }

    pub fn format_analysis_report(&self, report: &AnalysisReport) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header(report));
        output.push_str("\n\n");

        if let Some(ref summary) = report.summary {
            output.push_str(&self.format_section("SUMMARY", &summary.summary));
            output.push_str("\n\n");
        }

        if let Some(ref topics) = report.topics {
            let labels = topics
                .topics
                .iter()
                .map(|t| format!("[{}]", t))
                .collect::<Vec<_>>()
                .join(" ");
            output.push_str(&self.format_section("TOPICS", &labels));
            output.push_str("\n\n");
        }

        if let Some(ref complexity) = report.complexity {
            let body = format!(
                "Time:  {}\nSpace: {}\n\n{}",
                complexity.time_complexity, complexity.space_complexity, complexity.justification
            );
            output.push_str(&self.format_section("COMPLEXITY", &body));
            output.push_str("\n\n");
        }

        if let Some(ref explanation) = report.explanation {
            let mut body = String::new();
            for (i, chunk) in explanation.explanation.iter().enumerate() {
                if i > 0 {
                    body.push_str("\n\n");
                }
                body.push_str(&format!("Lines {}:\n", chunk.lines));
                for line in chunk.code.lines() {
                    body.push_str(&format!("    {}\n", line));
                }
                body.push_str(&chunk.explanation);
            }
            output.push_str(&self.format_section("WALKTHROUGH", &body));
            output.push_str("\n\n");
        }

        if let Some(ref alternatives) = report.alternatives {
            let mut body = String::new();
            for (i, alt) in alternatives.alternatives.iter().enumerate() {
                if i > 0 {
                    body.push_str("\n\n");
                }
                body.push_str(&format!(
                    "{}. {} (time {}, space {})\n",
                    i + 1,
                    alt.approach,
                    alt.time_complexity,
                    alt.space_complexity
                ));
                body.push_str(&format!("{}\n", alt.explanation));
                body.push_str(&format!("Pros: {}\n", alt.pros));
                body.push_str(&format!("Cons: {}\n", alt.cons));
                for line in alt.code_snippet.lines() {
                    body.push_str(&format!("    {}\n", line));
                }
            }
            output.push_str(&self.format_section("ALTERNATIVE APPROACHES", body.trim_end()));
            output.push_str("\n\n");
        }

        if let Some(ref problems) = report.practice_problems {
            let body = problems
                .problems
                .iter()
                .enumerate()
                .map(|(i, p)| format!("{}. {} - {}", i + 1, p.title, p.link))
                .collect::<Vec<_>>()
                .join("\n");
            output.push_str(&self.format_section("PRACTICE PROBLEMS", &body));
            output.push_str("\n\n");
        }

        if report.is_empty_report() {
            output.push_str(&self.format_warning(
                "Every analysis failed; nothing to show. Re-run with --verbose for details.",
            ));
            output.push('\n');
        }

        if self.verbose && !report.failures.is_empty() {
            let body = report
                .failures
                .iter()
                .map(|f| format!("{}: {}", f.kind, f.reason))
                .collect::<Vec<_>>()
                .join("\n");
            output.push_str(&self.format_section("FAILED ANALYSES", &body));
            output.push('\n');
        }

        output.trim_end().to_string()
    }

    fn format_header(&self, report: &AnalysisReport) -> String {
        let info = format!(
            "Snippet: {} lines, {} bytes | Model: {} ({}ms)",
            report.snippet_lines,
            report.snippet_bytes,
            report.model_used,
            report.analysis_duration_ms
        );

        if self.use_colors {
            format!(
                "\x1b[1m\x1b[36m🥋 ═══ CODESENSEI ANALYSIS ═══\x1b[0m\n{}",
                info
            )
        } else {
            format!("🥋 === CODESENSEI ANALYSIS ===\n{}", info)
        }
    }

    fn format_section(&self, title: &str, content: &str) -> String {
        if self.use_colors {
            format!("\x1b[1m\x1b[37m{}\x1b[0m\n{}", title, content)
        } else {
            format!("{}\n{}\n{}", title, "─".repeat(title.len()), content)
        }
    }

    fn format_warning(&self, message: &str) -> String {
        if self.use_colors {
            format!("\x1b[1m\x1b[33m⚠️ {}\x1b[0m", message)
        } else {
            format!("⚠️ {}", message)
        }
    }

    pub fn format_answer(&self, question: &str, answer: &str) -> String {
        if self.use_colors {
            format!(
                "\x1b[1m\x1b[36m❓ {}\x1b[0m\n{}",
                question, answer
            )
        } else {
            format!("❓ {}\n{}", question, answer)
        }
    }

    pub fn format_history_list(&self, entries: &[HistoryEntry]) -> String {
        if entries.is_empty() {
            return "No saved analyses yet.".to_string();
        }

        let mut output = String::new();
        output.push_str(&self.format_section(
            "SAVED ANALYSES",
            &format!("{} entries, newest first", entries.len()),
        ));
        output.push('\n');

        for entry in entries {
            output.push_str(&format!(
                "  {} | {} | {} lines | {} follow-up(s)\n",
                &entry.id[..8.min(entry.id.len())],
                entry.title(),
                entry.report.snippet_lines,
                entry.conversation.len()
            ));
        }

        output.trim_end().to_string()
    }

    pub fn format_error(&self, error: &crate::error::SenseiError) -> String {
        if self.use_colors {
            format!("\x1b[1m\x1b[31m🥋 ❌ Analysis failed\x1b[0m\n\n{}", error)
        } else {
            format!("🥋 ❌ Analysis failed\n\n{}", error)
        }
    }
}
