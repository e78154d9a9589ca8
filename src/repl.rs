use log::debug;
use scicalc_rs::{EvalResult, Evaluator};
use std::io::{self, BufRead, Write};

/// Counts for one interactive session, returned to the caller when the session ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub evaluated: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl SessionSummary {
    fn record(&mut self, result: &EvalResult) {
        self.evaluated += 1;
        if result.is_ok() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }
}

pub fn is_quit_command(line: &str) -> bool {
    let line = line.trim();
    line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit")
}

pub fn format_result(result: &EvalResult, precision: usize) -> String {
    if result.is_ok() {
        format!("{:.*}", precision, result.value)
    } else {
        format!("Error: {}", result.message)
    }
}

/// Reads expressions line by line until EOF or a quit command, printing one line per result.
pub fn run_session<R, W>(
    evaluator: &Evaluator,
    precision: usize,
    input: R,
    output: &mut W,
    prompt: Option<&str>,
) -> io::Result<SessionSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = SessionSummary::default();
    let mut lines = input.lines();

    loop {
        if let Some(prompt) = prompt {
            write!(output, "{}", prompt)?;
            output.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim_end_matches('\r');

        if is_quit_command(line) {
            debug!("Quit command received");
            break;
        }

        let result = evaluator.evaluate(line);
        writeln!(output, "{}", format_result(&result, precision))?;
        summary.record(&result);
    }

    Ok(summary)
}
