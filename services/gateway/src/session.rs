//! The read-parse-execute-print loop
//!
//! Drives the engine with one command per input line and writes each
//! outcome per the output contract: submit prints the trade cost, cancel
//! prints nothing, replace prints an empty line, and `END` prints the
//! drained book report and ends the session.

use std::io::{BufRead, Write};

use matching_engine::{MatchingEngine, Outcome};
use tracing::debug;

use crate::parser;

/// Run one session over `input`, writing outcomes to `output`
///
/// Returns after the `END` report or when the input is exhausted.
pub fn run<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<(), anyhow::Error> {
    let mut engine = MatchingEngine::new();

    for line in input.lines() {
        let line = line?;
        let command = parser::parse(&line)?;
        debug!(?command, "dispatching");

        match engine.execute(command) {
            Outcome::Executed(execution) => writeln!(output, "{}", execution.trade_cost)?,
            Outcome::Silent => {}
            Outcome::Replaced => writeln!(output)?,
            Outcome::Report(report) => {
                writeln!(output, "{}", report)?;
                output.flush()?;
                return Ok(());
            }
        }
    }

    output.flush()?;
    Ok(())
}
