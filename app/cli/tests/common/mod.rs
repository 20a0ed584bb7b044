//! FILENAME: tests/common/mod.rs
//! Test harness for driving `calc_cli::run` with in-memory streams.

#![allow(dead_code)]

use calc_cli::{run, CliError, Config, InputSource, OutputFormat};

/// Captured result of one run.
pub struct RunOutput {
    pub accepted: bool,
    pub stdout: String,
    pub stderr: String,
}

pub struct TestHarness {
    pub config: Config,
    pub stdin: String,
}

impl TestHarness {
    /// Harness evaluating `expression` passed inline.
    pub fn inline(expression: &str) -> Self {
        TestHarness {
            config: Config::inline(expression),
            stdin: String::new(),
        }
    }

    /// Harness reading the expression from the given stdin text.
    pub fn stdin(text: &str) -> Self {
        TestHarness {
            config: Config {
                input: InputSource::Stdin,
                ..Config::default()
            },
            stdin: text.to_string(),
        }
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.config.format = format;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    pub fn try_run(&self) -> Result<RunOutput, CliError> {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let accepted = run(&self.config, self.stdin.as_bytes(), &mut stdout, &mut stderr)?;
        Ok(RunOutput {
            accepted,
            stdout: String::from_utf8(stdout).unwrap(),
            stderr: String::from_utf8(stderr).unwrap(),
        })
    }

    pub fn run(&self) -> RunOutput {
        self.try_run().unwrap()
    }
}
