//! Per-tool strategies for interpreting a process's standard output.

use std::io::{self, BufRead};

use josch_core::SUCCESS;

use crate::completion::Completion;

/// Reads a tool's output and decides how the run ended.
///
/// Detectors may stop reading early; the runner drains what is left.
pub trait CompletionDetector: Send + Sync {
    fn detect(&self, output: &mut dyn BufRead) -> Completion;
}

/// Next line of `output` without its terminator, or `None` at end of stream.
/// Bytes that are not UTF-8 are replaced rather than failing the read.
fn next_line(output: &mut dyn BufRead, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if output.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Reads lines until one contains `Done` or equals `Success.`.
///
/// Used for tools run through a package manager that prints its own
/// closing line after the script exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct UntilDone;

impl CompletionDetector for UntilDone {
    fn detect(&self, output: &mut dyn BufRead) -> Completion {
        let mut buf = Vec::new();
        loop {
            match next_line(output, &mut buf) {
                Ok(None) => return Completion::Unterminated,
                Ok(Some(line)) if line == SUCCESS => return Completion::Success,
                Ok(Some(line)) if line.contains("Done") => return Completion::Finished(line),
                Ok(Some(_)) => {}
                Err(error) => return Completion::Failed(error.to_string()),
            }
        }
    }
}

/// Reads exactly one line. `Success.` means success; any other line is the
/// tool's failure report.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleLine;

impl CompletionDetector for SingleLine {
    fn detect(&self, output: &mut dyn BufRead) -> Completion {
        match next_line(output, &mut Vec::new()) {
            Ok(None) => Completion::Unterminated,
            Ok(Some(line)) if line == SUCCESS => Completion::Success,
            Ok(Some(line)) => Completion::Failed(line),
            Err(error) => Completion::Failed(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    fn run(detector: &dyn CompletionDetector, output: &str) -> Completion {
        detector.detect(&mut Cursor::new(output.as_bytes()))
    }

    #[rstest]
    #[case("yarn run v1.22\n$ node index.js\nSuccess.\n", Completion::Success)]
    #[case("yarn run v1.22\nDone in 0.52s.\n", Completion::Finished("Done in 0.52s.".to_string()))]
    #[case("yarn run v1.22\nsomething else\n", Completion::Unterminated)]
    #[case("", Completion::Unterminated)]
    #[case("Success.\r\n", Completion::Success)]
    fn until_done(#[case] output: &str, #[case] expected: Completion) {
        assert_eq!(run(&UntilDone, output), expected);
    }

    #[rstest]
    #[case("Success.\nignored\n", Completion::Success)]
    #[case(
        "Traceback (most recent call last):\n",
        Completion::Failed("Traceback (most recent call last):".to_string())
    )]
    #[case("", Completion::Unterminated)]
    fn single_line(#[case] output: &str, #[case] expected: Completion) {
        assert_eq!(run(&SingleLine, output), expected);
    }

    #[rstest]
    #[case(b"warning: caf\xe9\nSuccess.\n".as_slice(), Completion::Success)]
    #[case(
        b"\xff\xfeDone in 1s.\n".as_slice(),
        Completion::Finished("\u{fffd}\u{fffd}Done in 1s.".to_string())
    )]
    fn until_done_reads_past_non_utf8_lines(
        #[case] output: &[u8],
        #[case] expected: Completion,
    ) {
        assert_eq!(UntilDone.detect(&mut Cursor::new(output)), expected);
    }

    #[test]
    fn single_line_reports_non_utf8_line_lossily() {
        let output = b"Fehler: ung\xfcltig\n".as_slice();
        let completion = SingleLine.detect(&mut Cursor::new(output));
        assert_eq!(completion, Completion::Failed("Fehler: ung\u{fffd}ltig".to_string()));
    }

    #[test]
    fn single_line_reads_only_the_first_line() {
        let mut cursor = Cursor::new("Success.\nrest\n".as_bytes());
        SingleLine.detect(&mut cursor);
        let mut rest = String::new();
        cursor.read_line(&mut rest).unwrap();
        assert_eq!(rest, "rest\n");
    }
}
