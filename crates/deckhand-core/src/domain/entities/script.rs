use std::fmt;

use serde::{Serialize, Serializer};

/// A shell script body carried by a pipeline job.
///
/// Lines are kept as an ordered list and joined with a single `\n` only
/// when rendered. The external CI system substitutes `$VARIABLES` at run
/// time; nothing here interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellScript {
    lines: Vec<String>,
}

impl ShellScript {
    pub const SEPARATOR: &'static str = "\n";

    pub fn new() -> Self {
        Self::default()
    }

    /// Script starting with a bash shebang.
    pub fn bash() -> Self {
        Self::new().line("#!/bin/bash")
    }

    /// Append one line.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Append a `# comment` line.
    pub fn comment(self, text: impl AsRef<str>) -> Self {
        self.line(format!("# {}", text.as_ref()))
    }

    /// Append several lines in order.
    pub fn lines_from<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Index of the first line containing `needle`.
    pub fn position_of(&self, needle: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.contains(needle))
    }

    pub fn render(&self) -> String {
        self.lines.join(Self::SEPARATOR)
    }
}

impl fmt::Display for ShellScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Serialize for ShellScript {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render())
    }
}
