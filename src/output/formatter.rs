//! Output formatters for analysis reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::processing::analyzer::AnalysisReport;
use crate::processing::profiles::RoleProfileTable;
use crate::processing::scorer::NO_ROLE_MATCH;
use colored::Colorize;
use std::path::Path;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and a confidence bar per role
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn paint(&self, text: &str, confidence: f64) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        let colored = if confidence >= 80.0 {
            text.green()
        } else if confidence >= 50.0 {
            text.yellow()
        } else {
            text.red()
        };
        colored.to_string()
    }

    fn confidence_bar(confidence: f64) -> String {
        let filled = (confidence / 10.0).round() as usize;
        let filled = filled.min(10);
        format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();

        out.push_str("Resume Analysis\n");
        out.push_str(&format!(
            "Generated: {}\n\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        ));

        out.push_str("Likely Roles:\n");
        for (rank, entry) in report.roles.iter().enumerate() {
            if entry.role == NO_ROLE_MATCH {
                out.push_str(&format!("  {}\n", self.paint(&entry.role, 0.0)));
                continue;
            }
            let line = format!(
                "  {}. {:<20} {:>5.1}%  {}",
                rank + 1,
                entry.role,
                entry.confidence,
                Self::confidence_bar(entry.confidence)
            );
            out.push_str(&self.paint(&line, entry.confidence));
            out.push('\n');
        }

        out.push_str(&format!("\nSkills Found ({}):\n", report.skills_found.len()));
        if report.skills_found.is_empty() {
            out.push_str("  (none)\n");
        } else {
            out.push_str(&format!("  {}\n", report.skills_found.join(", ")));
        }

        if self.detailed {
            let table = RoleProfileTable::new();
            out.push_str("\nRole Weight Tables:\n");
            for entry in &report.roles {
                if let Some(profile) = table.profiles().iter().find(|p| p.name == entry.role) {
                    out.push_str(&format!("  {}:\n", profile.name));
                    for &(skill, weight) in profile.skills {
                        out.push_str(&format!("    {:<20} {}\n", skill, weight));
                    }
                }
            }
        }

        out.push_str(&format!("\n{}\n", report.message));
        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

/// JSON formatter for structured consumers. The shape is the wire contract:
/// {"roles": [...], "skills_found": [...], "message": "..."}
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

/// Write a formatted report to disk.
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Default file name for saved reports.
pub fn default_save_filename(format: &OutputFormat) -> String {
    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
    };
    format!(
        "resume_analysis_{}.{}",
        chrono::Utc::now().format("%Y%m%d_%H%M%S"),
        extension
    )
}
