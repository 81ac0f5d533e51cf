use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use super::stdin_is_tty;

/// Outcome of asking the user for a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Chosen(PathBuf),
    Cancelled,
}

/// Asks for an existing file until one is given or the user gives up.
///
/// An empty answer or end of input cancels. Paths that do not name an
/// existing file are reported on `output` and asked for again.
pub fn prompt_for_file<R: BufRead, W: Write>(
    title: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<Selection> {
    loop {
        write!(output, "  {title}: ")?;
        output.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            writeln!(output)?;
            return Ok(Selection::Cancelled);
        }

        let answer = unquote(answer.trim());
        if answer.is_empty() {
            return Ok(Selection::Cancelled);
        }

        let path = PathBuf::from(answer);
        if path.is_file() {
            return Ok(Selection::Chosen(path));
        }
        writeln!(output, "  No such file: {}", path.display())?;
    }
}

/// Resolves a file argument, asking on the terminal when it was omitted.
pub fn pick_file(given: Option<&Path>, title: &str, option: &str) -> Result<PathBuf> {
    if let Some(path) = given {
        return Ok(path.to_path_buf());
    }

    if !stdin_is_tty() {
        bail!("No file given for {option} and stdin is not a terminal.\n\nPass {option} <FILE>.");
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stderr().lock();
    match prompt_for_file(title, &mut input, &mut output)? {
        Selection::Chosen(path) => Ok(path),
        Selection::Cancelled => bail!("No file selected for {option}; nothing to do."),
    }
}

fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(quote).and_then(|r| r.strip_suffix(quote)) {
            return inner;
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(answers: &str) -> (Selection, String) {
        let mut input = Cursor::new(answers.as_bytes().to_vec());
        let mut output = Vec::new();
        let selection = prompt_for_file("Select report", &mut input, &mut output).unwrap();
        (selection, String::from_utf8(output).unwrap())
    }

    #[test]
    fn empty_answer_cancels() {
        let (selection, shown) = ask("\n");
        assert_eq!(selection, Selection::Cancelled);
        assert!(shown.contains("Select report"));
    }

    #[test]
    fn end_of_input_cancels() {
        assert_eq!(ask("").0, Selection::Cancelled);
    }

    #[test]
    fn missing_path_is_asked_again() {
        let existing = env!("CARGO_MANIFEST_DIR").to_string() + "/Cargo.toml";
        let (selection, shown) = ask(&format!("/no/such/report.txt\n'{existing}'\n"));
        assert_eq!(selection, Selection::Chosen(PathBuf::from(existing)));
        assert!(shown.contains("No such file: /no/such/report.txt"));
        assert_eq!(shown.matches("Select report").count(), 2);
    }

    #[test]
    fn given_path_skips_the_prompt() {
        let path = pick_file(Some(Path::new("report.txt")), "Select", "--mutant").unwrap();
        assert_eq!(path, PathBuf::from("report.txt"));
    }

    #[test]
    fn unquote_strips_matching_quotes_only() {
        assert_eq!(unquote("\"a b.txt\""), "a b.txt");
        assert_eq!(unquote("'a.txt'"), "a.txt");
        assert_eq!(unquote("\"a.txt'"), "\"a.txt'");
    }
}
