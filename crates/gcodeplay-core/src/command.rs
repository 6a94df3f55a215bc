//! Motion command types for toolpath playback.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Command-type token of a motion instruction.
///
/// Only rapid (`G0`) and linear (`G1`) moves have a drawing effect.
/// Any other opcode is preserved verbatim so the program keeps its
/// shape (and its timing slot during playback) but renders nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opcode {
    /// Rapid positioning (G0)
    RapidMove,
    /// Linear interpolation (G1)
    LinearMove,
    /// Any other command word, retained but inert during playback
    Unsupported(String),
}

impl Opcode {
    /// Classify a raw opcode token.
    pub fn from_token(token: &str) -> Self {
        match token {
            "G0" => Self::RapidMove,
            "G1" => Self::LinearMove,
            other => Self::Unsupported(other.to_string()),
        }
    }

    /// Whether this opcode moves the pen.
    pub fn is_motion(&self) -> bool {
        matches!(self, Self::RapidMove | Self::LinearMove)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RapidMove => write!(f, "G0"),
            Self::LinearMove => write!(f, "G1"),
            Self::Unsupported(token) => write!(f, "{}", token),
        }
    }
}

/// Axis parameters of a motion command.
///
/// `X` and `Y` are the only axes consumed by playback; every other
/// axis key lands in `extra` where it is retained but ignored.
/// Coordinates are absolute in logical space, measured from the
/// program's logical origin, not cumulative from the previous command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisParams {
    /// Absolute X offset from the logical origin, if given.
    pub x: Option<f64>,
    /// Absolute Y offset from the logical origin, if given.
    pub y: Option<f64>,
    /// Unrecognized axis keys, retained for forward compatibility.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<char, f64>,
}

impl AxisParams {
    /// Record a decoded axis word.
    pub fn set(&mut self, key: char, value: f64) {
        match key {
            'X' => self.x = Some(value),
            'Y' => self.y = Some(value),
            other => {
                self.extra.insert(other, value);
            }
        }
    }

    /// X offset to apply, defaulting to 0 when the axis is absent.
    pub fn x_offset(&self) -> f64 {
        self.x.unwrap_or(0.0)
    }

    /// Y offset to apply, defaulting to 0 when the axis is absent.
    pub fn y_offset(&self) -> f64 {
        self.y.unwrap_or(0.0)
    }
}

/// A single parsed motion instruction.
///
/// Immutable once parsed; owned exclusively by the [`Program`] that
/// contains it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionCommand {
    /// The command-type token.
    pub opcode: Opcode,
    /// Decoded axis words.
    pub params: AxisParams,
}

impl MotionCommand {
    /// Create a new motion command.
    pub fn new(opcode: Opcode, params: AxisParams) -> Self {
        Self { opcode, params }
    }
}

impl std::fmt::Display for MotionCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.opcode)?;
        if let Some(x) = self.params.x {
            write!(f, " X{}", x)?;
        }
        if let Some(y) = self.params.y {
            write!(f, " Y{}", y)?;
        }
        for (key, value) in &self.params.extra {
            write!(f, " {}{}", key, value)?;
        }
        Ok(())
    }
}

/// An ordered sequence of motion commands.
///
/// Insertion order is execution order. Produced fresh per parse; never
/// mutated after creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    commands: Vec<MotionCommand>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a program from an already-ordered command list.
    pub fn from_commands(commands: Vec<MotionCommand>) -> Self {
        Self { commands }
    }

    /// Number of commands in the program.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the program contains no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The commands in execution order.
    pub fn commands(&self) -> &[MotionCommand] {
        &self.commands
    }

    /// Consume the program, yielding its commands in execution order.
    pub fn into_commands(self) -> Vec<MotionCommand> {
        self.commands
    }

    /// Iterate over the commands in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, MotionCommand> {
        self.commands.iter()
    }
}

impl IntoIterator for Program {
    type Item = MotionCommand;
    type IntoIter = std::vec::IntoIter<MotionCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_classification() {
        assert_eq!(Opcode::from_token("G0"), Opcode::RapidMove);
        assert_eq!(Opcode::from_token("G1"), Opcode::LinearMove);
        assert_eq!(
            Opcode::from_token("M3"),
            Opcode::Unsupported("M3".to_string())
        );
        assert!(Opcode::RapidMove.is_motion());
        assert!(!Opcode::Unsupported("G2".to_string()).is_motion());
    }

    #[test]
    fn test_opcode_display_round_trips_tokens() {
        assert_eq!(Opcode::from_token("G1").to_string(), "G1");
        assert_eq!(Opcode::from_token("T6").to_string(), "T6");
    }

    #[test]
    fn test_axis_params_missing_axes_default_to_zero() {
        let mut params = AxisParams::default();
        params.set('X', 10.0);

        assert_eq!(params.x_offset(), 10.0);
        assert_eq!(params.y_offset(), 0.0);
        assert_eq!(params.y, None);
    }

    #[test]
    fn test_axis_params_unknown_keys_go_to_extra() {
        let mut params = AxisParams::default();
        params.set('Z', -2.5);
        params.set('F', 1200.0);

        assert_eq!(params.extra.get(&'Z'), Some(&-2.5));
        assert_eq!(params.extra.get(&'F'), Some(&1200.0));
        assert_eq!(params.x, None);
    }

    #[test]
    fn test_command_display() {
        let mut params = AxisParams::default();
        params.set('X', 19.1);
        params.set('Y', 15.45);
        let cmd = MotionCommand::new(Opcode::LinearMove, params);

        assert_eq!(cmd.to_string(), "G1 X19.1 Y15.45");
    }

    #[test]
    fn test_program_preserves_order() {
        let first = MotionCommand::new(Opcode::RapidMove, AxisParams::default());
        let second = MotionCommand::new(Opcode::LinearMove, AxisParams::default());
        let program = Program::from_commands(vec![first.clone(), second.clone()]);

        assert_eq!(program.len(), 2);
        assert_eq!(program.commands()[0], first);
        assert_eq!(program.commands()[1], second);
    }
}
