//! Runner - Read one file and report its vowel words
//!
//! A run is linear: existence check, read, tokenize, report. Every failure is
//! terminal for that run and becomes exactly one reported line. Nothing
//! escapes to the caller.

use std::path::Path;

use crate::core::file_reader::FileReader;
use crate::core::model::{RunError, VowelReport};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::sink::Sink;
use crate::core::tokenizer::analyze;
use crate::core::util::Diagnostics;

pub struct Runner<R> {
    reader: R,
    diag: Diagnostics,
}

impl<R: FileReader> Runner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            diag: Diagnostics::default(),
        }
    }

    pub fn with_diagnostics(mut self, diag: Diagnostics) -> Self {
        self.diag = diag;
        self
    }

    /// Check, read and tokenize `path`
    pub fn process(&self, path: &Path) -> Result<VowelReport, RunError> {
        let display = path.display().to_string();

        if !self.reader.exists(path) {
            self.diag.debug(format!("{} not found", display));
            return Err(RunError::MissingFile(display));
        }

        let content = self
            .reader
            .read_file(path)
            .map_err(RunError::from_reader)?;
        self.diag
            .debug(format!("read {} bytes from {}", content.len(), display));

        let (words, stats) = analyze(&content);
        self.diag.debug(format!(
            "{} tokens, {} cleaned, {} vowel words, {} unique",
            stats.tokens, stats.cleaned, stats.vowel_words, stats.unique
        ));

        Ok(VowelReport {
            path: display,
            content,
            words,
            stats,
        })
    }

    /// Report the plain-text outcome for `path`
    #[allow(dead_code)]
    pub fn run<S: Sink>(&self, path: &Path, sink: S) {
        self.run_with_config(path, RenderConfig::default(), sink)
    }

    /// Report the outcome for `path` in the configured format
    pub fn run_with_config<S: Sink>(&self, path: &Path, config: RenderConfig, mut sink: S) {
        let renderer = Renderer::with_config(config);

        match self.process(path) {
            Ok(report) => {
                for line in renderer.render_report(&report) {
                    sink.report(&line);
                }
            }
            Err(err) => sink.report(&renderer.render_error(&err)),
        }
    }
}
