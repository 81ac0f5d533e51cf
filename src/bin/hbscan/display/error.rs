use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    let msg = err.to_string();
    for line in wrap(&msg, 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 59) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = HintCollector::collect(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn new() -> Self {
        Self {
            hints: Vec::new(),
            has_typed_hints: false,
        }
    }

    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::new();

        collector.collect_io_hints(err);
        collector.collect_scheme_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_io_hints(&mut self, err: &Error) {
        use hbscan::io::Error as IoError;

        let Some(io_err) = find_cause::<IoError>(err) else {
            return;
        };

        self.mark_typed();

        match io_err {
            IoError::Io { source } | IoError::Open { source, .. } => {
                self.collect_std_io_hints(source);
            }

            IoError::Csv(source) => {
                self.add(format!("CSV processing failed: {}", source));
                self.add("Check that the table is comma-separated with one header row");
                self.add("Rows must all have the same number of fields");
            }

            IoError::MissingColumns { expected, found } => {
                let missing: Vec<&str> = expected
                    .iter()
                    .filter(|e| !found.contains(*e))
                    .map(String::as_str)
                    .collect();
                self.add(format!("Missing: {}", missing.join(", ")));
                self.add("Column names are case-sensitive and must match exactly");
                self.add("The neighbor flag column follows --target, e.g. Is312Neighbor");
            }

            IoError::Chart { .. } => {
                self.add("Chart rendering failed after the tables were written");
                self.add("Check that the output directory is writable");
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling, or omit the option to be prompted");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check read access on inputs and write access on --out-dir");
            }

            ErrorKind::IsADirectory => {
                self.add("A directory was given where a file is expected");
            }

            ErrorKind::StorageFull | ErrorKind::WriteZero => {
                self.add("Failed to write data (disk full?)");
                self.add("Check available disk space");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file paths, permissions, and disk space");
            }
        }
    }

    fn collect_scheme_hints(&mut self, err: &Error) {
        use hbscan::env::SchemeError;

        let Some(scheme_err) = find_cause::<SchemeError>(err) else {
            return;
        };

        self.mark_typed();

        match scheme_err {
            SchemeError::Parse(_) => {
                self.add("Classification scheme has invalid TOML syntax");
                self.add("Each category is a [[category]] table with name and members");
            }

            SchemeError::Empty => {
                self.add("Declare at least one [[category]] in the scheme");
            }

            SchemeError::EmptyName => {
                self.add("Every category needs a non-blank name");
            }

            SchemeError::DuplicateCategory(name) => {
                self.add(format!("Merge the members of both '{}' entries", name));
                self.add("Residues are assigned to the first category that lists them");
            }

            SchemeError::FallbackClash(name) => {
                self.add(format!(
                    "Rename the fallback or the category called '{}'",
                    name
                ));
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("stdin is not a terminal") {
            self.add("Interactive file selection needs a terminal");
            self.add("Pass every input file as an option when scripting");
            return;
        }

        if msg.contains("no file selected") {
            self.add("Selection was cancelled with an empty answer or end of input");
            self.add("Re-run and enter a path, or pass the file as an option");
            return;
        }

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            self.add("Verify the file exists and is readable");
            return;
        }

        if msg.contains("permission denied") {
            self.add("Check file permissions with `ls -la`");
            self.add("Ensure you have the required access rights");
            return;
        }

        if msg.contains("empty") && !self.has_typed_hints {
            self.add("Input appears to be empty");
            self.add("Verify the report was exported with its H-bond listing");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    let mut text = String::new();

    text.push_str(&err.to_string());

    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    text.to_lowercase()
}

/// Finds the first error of type `E` anywhere in the chain.
fn find_cause<E: std::error::Error + 'static>(err: &Error) -> Option<&E> {
    err.chain().find_map(|cause| cause.downcast_ref::<E>())
}
