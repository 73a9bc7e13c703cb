//! Output sink capability
//!
//! Everything the runner reports goes through [`Sink`], one line at a time.

use std::io::Write;

pub trait Sink {
    fn report(&mut self, line: &str);
}

/// Writes each reported line to standard output
#[derive(Debug, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn report(&mut self, line: &str) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        // A closed pipe has nowhere left to report to
        let _ = writeln!(handle, "{}", line);
    }
}

/// Collects lines in memory
impl Sink for Vec<String> {
    fn report(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn report(&mut self, line: &str) {
        (**self).report(line)
    }
}
