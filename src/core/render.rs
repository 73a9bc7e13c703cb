//! Renderer module
//!
//! Renders a run outcome to different output formats: text, json, jsonl

use serde::Serialize;
use serde_json::json;

use crate::core::model::{ErrorInfo, RunError, VowelReport};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Jsonl,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::Jsonl),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

#[derive(Serialize)]
struct WordLine<'a> {
    index: usize,
    word: &'a str,
}

/// Turns outcomes into the lines handed to a sink
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a successful report
    pub fn render_report(&self, report: &VowelReport) -> Vec<String> {
        match self.config.format {
            OutputFormat::Text => {
                let mut lines = Vec::with_capacity(report.words.len() + 3);
                lines.push("File Content:".to_string());
                lines.push(report.content.clone());
                lines.push("Filtered Words:".to_string());
                lines.extend(report.words.iter().cloned());
                lines
            }
            OutputFormat::Json => vec![self.to_json(report)],
            OutputFormat::Jsonl => report
                .words
                .iter()
                .enumerate()
                .map(|(index, word)| self.to_json(&WordLine { index, word }))
                .collect(),
        }
    }

    /// Render a failure as exactly one line
    pub fn render_error(&self, err: &RunError) -> String {
        match self.config.format {
            OutputFormat::Text => err.to_string(),
            OutputFormat::Json | OutputFormat::Jsonl => {
                self.to_json(&json!({ "error": ErrorInfo::from(err) }))
            }
        }
    }

    fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> String {
        let rendered = if self.config.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.unwrap_or_else(|_| "{}".to_string())
    }
}
