//! Protocol module - JSON message types for the headless runner
//!
//! Line-delimited JSON. Every message carries `type` and `seq`; messages the
//! runner writes also carry `ts` (milliseconds since the Unix epoch).

use serde::{Deserialize, Serialize};

use crate::core::{ControllerSnapshot, Outcome, PlayOutcome, ReserveOutcome, UseOutcome};
use crate::types::{Command, Piece, PieceKind};

// ============== Client -> Runner ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandType {
    #[serde(rename = "command")]
    Command,
}

impl Default for CommandType {
    fn default() -> Self {
        Self::Command
    }
}

/// `{"type":"command","seq":1,"action":"play"}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandMessage {
    #[serde(rename = "type")]
    #[serde(default)]
    pub msg_type: CommandType,
    pub seq: u64,
    pub action: String,
}

impl CommandMessage {
    pub fn new(seq: u64, command: Command) -> Self {
        Self {
            msg_type: CommandType::Command,
            seq,
            action: command.as_str().to_string(),
        }
    }

    /// The action as a [`Command`], if it names one.
    pub fn command(&self) -> Option<Command> {
        Command::from_str(&self.action)
    }
}

// ============== Runner -> Client ==============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKindUpper {
    #[serde(rename = "I")]
    I,
    #[serde(rename = "O")]
    O,
    #[serde(rename = "T")]
    T,
    #[serde(rename = "L")]
    L,
}

impl From<PieceKind> for PieceKindUpper {
    fn from(value: PieceKind) -> Self {
        match value {
            PieceKind::I => Self::I,
            PieceKind::O => Self::O,
            PieceKind::T => Self::T,
            PieceKind::L => Self::L,
        }
    }
}

impl From<PieceKindUpper> for PieceKind {
    fn from(value: PieceKindUpper) -> Self {
        match value {
            PieceKindUpper::I => Self::I,
            PieceKindUpper::O => Self::O,
            PieceKindUpper::T => Self::T,
            PieceKindUpper::L => Self::L,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceView {
    pub kind: PieceKindUpper,
    pub id: u64,
}

impl From<Piece> for PieceView {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind.into(),
            id: value.sequence_id,
        }
    }
}

impl From<PieceView> for Piece {
    fn from(value: PieceView) -> Self {
        Piece::new(value.kind.into(), value.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeResult {
    #[serde(rename = "played")]
    Played,
    #[serde(rename = "nothingToPlay")]
    NothingToPlay,
    #[serde(rename = "reserved")]
    Reserved,
    #[serde(rename = "reserveFull")]
    ReserveFull,
    #[serde(rename = "nothingToReserve")]
    NothingToReserve,
    #[serde(rename = "used")]
    Used,
    #[serde(rename = "nothingReserved")]
    NothingReserved,
    #[serde(rename = "unavailable")]
    Unavailable,
    #[serde(rename = "quit")]
    Quit,
}

/// What a command did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeView {
    pub action: String,
    pub result: OutcomeResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub piece: Option<PieceView>,
    pub message: String,
}

impl From<Outcome> for OutcomeView {
    fn from(value: Outcome) -> Self {
        let (action, result) = match value {
            Outcome::Play(PlayOutcome::Played(_)) => (Command::Play, OutcomeResult::Played),
            Outcome::Play(PlayOutcome::NothingToPlay) => {
                (Command::Play, OutcomeResult::NothingToPlay)
            }
            Outcome::Reserve(ReserveOutcome::Reserved(_)) => {
                (Command::Reserve, OutcomeResult::Reserved)
            }
            Outcome::Reserve(ReserveOutcome::ReserveFull) => {
                (Command::Reserve, OutcomeResult::ReserveFull)
            }
            Outcome::Reserve(ReserveOutcome::NothingToReserve) => {
                (Command::Reserve, OutcomeResult::NothingToReserve)
            }
            Outcome::Reserve(ReserveOutcome::Unavailable) => {
                (Command::Reserve, OutcomeResult::Unavailable)
            }
            Outcome::Use(UseOutcome::Used(_)) => (Command::UseReserved, OutcomeResult::Used),
            Outcome::Use(UseOutcome::NothingReserved) => {
                (Command::UseReserved, OutcomeResult::NothingReserved)
            }
            Outcome::Use(UseOutcome::Unavailable) => {
                (Command::UseReserved, OutcomeResult::Unavailable)
            }
            Outcome::Quit => (Command::Quit, OutcomeResult::Quit),
        };
        Self {
            action: action.as_str().to_string(),
            result,
            piece: value.piece().map(PieceView::from),
            message: value.message(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservationType {
    #[serde(rename = "observation")]
    Observation,
}

/// Controller state after a command (or at session start, with no outcome).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationMessage {
    #[serde(rename = "type")]
    pub msg_type: ObservationType,
    pub seq: u64,
    pub ts: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub outcome: Option<OutcomeView>,
    /// Head first.
    pub queue: Vec<PieceView>,
    /// Top first. Absent when the controller has no reserve stack.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub reserve: Option<Vec<PieceView>>,
    pub next_id: u64,
    pub transitions: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorType {
    #[serde(rename = "error")]
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    #[serde(rename = "bad_json")]
    BadJson,
    #[serde(rename = "invalid_command")]
    InvalidCommand,
    #[serde(rename = "out_of_order")]
    OutOfOrder,
}

/// Error message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(rename = "type")]
    pub msg_type: ErrorType,
    pub seq: u64,
    pub ts: u64,
    pub code: ErrorCode,
    pub message: String,
}

/// Parse one inbound line.
pub fn parse_command(line: &str) -> Result<CommandMessage, serde_json::Error> {
    serde_json::from_str(line)
}

/// Create an observation of `snap`, optionally describing the command that led to it.
pub fn create_observation(
    seq: u64,
    snap: &ControllerSnapshot,
    outcome: Option<Outcome>,
) -> ObservationMessage {
    ObservationMessage {
        msg_type: ObservationType::Observation,
        seq,
        ts: current_timestamp_ms(),
        outcome: outcome.map(OutcomeView::from),
        queue: snap.queue.iter().copied().map(PieceView::from).collect(),
        reserve: snap
            .has_reserve()
            .then(|| snap.reserve.iter().copied().map(PieceView::from).collect()),
        next_id: snap.next_id,
        transitions: snap.transitions,
    }
}

/// Create an error message
pub fn create_error(seq: u64, code: ErrorCode, message: &str) -> ErrorMessage {
    ErrorMessage {
        msg_type: ErrorType::Error,
        seq,
        ts: current_timestamp_ms(),
        code,
        message: message.to_string(),
    }
}

/// Get current timestamp in milliseconds
fn current_timestamp_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
