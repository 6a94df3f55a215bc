//! G-Code text parser.
//!
//! Converts raw multi-line command text into an ordered [`Program`].
//! The parser is a pure function of its input: stateless, re-entrant,
//! and infallible. Malformed input degrades to inert data instead of
//! raising (unknown opcodes are retained, unparseable axis literals
//! become NaN), because playback is a best-effort visual tool, not a
//! validating compiler.

use tracing::debug;

use crate::command::{AxisParams, MotionCommand, Opcode, Program};

/// Parse raw G-Code text into a program.
///
/// One command per newline-delimited line. The whole input is trimmed
/// first, then lines that are empty after trimming are skipped, so
/// whitespace-only input yields an empty program. Within a line,
/// tokens are separated by single spaces: the first token is the
/// opcode, each remaining token is one axis letter followed by a
/// floating-point literal (e.g. `X19.1`).
pub fn parse(text: &str) -> Program {
    let commands: Vec<MotionCommand> = text
        .trim()
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect();

    debug!(commands = commands.len(), "parsed G-Code program");
    Program::from_commands(commands)
}

fn parse_line(line: &str) -> MotionCommand {
    let mut tokens = line.trim().split(' ').filter(|token| !token.is_empty());

    // filter above guarantees at least one non-empty token
    let opcode = Opcode::from_token(tokens.next().unwrap_or_default());

    let mut params = AxisParams::default();
    for token in tokens {
        if let Some((key, value)) = decode_axis_word(token) {
            params.set(key, value);
        }
    }

    MotionCommand::new(opcode, params)
}

/// Decode an axis word into its key letter and value.
///
/// A remainder that fails float decoding yields NaN for that axis;
/// this is a tolerated edge case, not an error. The playback engine
/// skips drawing for non-finite targets.
fn decode_axis_word(token: &str) -> Option<(char, f64)> {
    let mut chars = token.chars();
    let key = chars.next()?;
    let value = chars.as_str().parse::<f64>().unwrap_or(f64::NAN);
    Some((key, value))
}
