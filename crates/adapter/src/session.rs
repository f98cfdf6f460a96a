//! Synchronous JSON session: one command line in, one reply line out.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::Controller;
use crate::protocol::{create_error, create_observation, parse_command, ErrorCode};
use crate::types::Command;

/// Append-only transcript of every line read and written.
pub struct WireLog {
    file: File,
}

impl WireLog {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening wire log {}", path.display()))?;
        Ok(Self { file })
    }

    fn record(&mut self, line: &str) -> Result<()> {
        self.file.write_all(line.trim_end().as_bytes())?;
        self.file.write_all(b"\n")?;
        Ok(())
    }
}

/// Reply to one inbound line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub line: String,
    /// The client asked to quit; the caller should stop reading.
    pub quit: bool,
}

pub struct Session {
    controller: Controller,
    last_seq: Option<u64>,
    wire_log: Option<WireLog>,
}

impl Session {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            last_seq: None,
            wire_log: None,
        }
    }

    pub fn with_wire_log(mut self, log: WireLog) -> Self {
        self.wire_log = Some(log);
        self
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Observation of the starting state (seq 0, no outcome).
    pub fn greeting(&mut self) -> Result<String> {
        let obs = create_observation(0, &self.controller.snapshot(), None);
        let line = serde_json::to_string(&obs)?;
        self.log(&line)?;
        Ok(line)
    }

    /// Handle one inbound line. Blank lines are answered with nothing.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<Reply>> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        self.log(line)?;

        let reply = self.reply_to(line)?;
        self.log(&reply.line)?;
        Ok(Some(reply))
    }

    fn reply_to(&mut self, line: &str) -> Result<Reply> {
        let msg = match parse_command(line) {
            Ok(msg) => msg,
            Err(e) => return error_reply(0, ErrorCode::BadJson, &e.to_string()),
        };

        if let Some(prev) = self.last_seq {
            if msg.seq <= prev {
                let text = format!("seq {} must be greater than {}", msg.seq, prev);
                return error_reply(msg.seq, ErrorCode::OutOfOrder, &text);
            }
        }
        self.last_seq = Some(msg.seq);

        let Some(command) = msg.command() else {
            let text = format!("unknown action: {}", msg.action);
            return error_reply(msg.seq, ErrorCode::InvalidCommand, &text);
        };

        let outcome = self.controller.apply(command);
        let obs = create_observation(msg.seq, &self.controller.snapshot(), Some(outcome));
        Ok(Reply {
            line: serde_json::to_string(&obs)?,
            quit: command == Command::Quit,
        })
    }

    fn log(&mut self, line: &str) -> Result<()> {
        match self.wire_log.as_mut() {
            Some(log) => log.record(line),
            None => Ok(()),
        }
    }
}

fn error_reply(seq: u64, code: ErrorCode, message: &str) -> Result<Reply> {
    let err = create_error(seq, code, message);
    Ok(Reply {
        line: serde_json::to_string(&err)?,
        quit: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ControllerConfig;

    fn session() -> Session {
        Session::new(Controller::startup(ControllerConfig::intermediate(3)))
    }

    fn value(reply: &Reply) -> serde_json::Value {
        serde_json::from_str(&reply.line).unwrap()
    }

    #[test]
    fn greeting_shows_full_queue() {
        let mut s = session();
        let v: serde_json::Value = serde_json::from_str(&s.greeting().unwrap()).unwrap();
        assert_eq!(v["seq"], 0);
        assert_eq!(v["queue"].as_array().unwrap().len(), 5);
        assert_eq!(v["reserve"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn play_command_replies_with_observation() {
        let mut s = session();
        let reply = s
            .handle_line(r#"{"type":"command","seq":1,"action":"play"}"#)
            .unwrap()
            .unwrap();
        let v = value(&reply);
        assert!(!reply.quit);
        assert_eq!(v["type"], "observation");
        assert_eq!(v["seq"], 1);
        assert_eq!(v["outcome"]["result"], "played");
        assert_eq!(v["outcome"]["piece"]["id"], 0);
        assert_eq!(v["queue"][4]["id"], 5);
    }

    #[test]
    fn blank_line_is_ignored() {
        let mut s = session();
        assert_eq!(s.handle_line("   ").unwrap(), None);
    }

    #[test]
    fn bad_json_is_reported() {
        let mut s = session();
        let reply = s.handle_line("{oops").unwrap().unwrap();
        let v = value(&reply);
        assert_eq!(v["type"], "error");
        assert_eq!(v["code"], "bad_json");
    }

    #[test]
    fn seq_must_increase() {
        let mut s = session();
        s.handle_line(r#"{"seq":5,"action":"play"}"#).unwrap();
        let reply = s.handle_line(r#"{"seq":5,"action":"play"}"#).unwrap().unwrap();
        assert_eq!(value(&reply)["code"], "out_of_order");
        // The rejected command did not run.
        assert_eq!(s.controller().transitions(), 1);
    }

    #[test]
    fn unknown_action_is_invalid() {
        let mut s = session();
        let reply = s.handle_line(r#"{"seq":1,"action":"rotate"}"#).unwrap().unwrap();
        let v = value(&reply);
        assert_eq!(v["code"], "invalid_command");
        assert_eq!(s.controller().transitions(), 0);
    }

    #[test]
    fn quit_sets_flag() {
        let mut s = session();
        let reply = s.handle_line(r#"{"seq":1,"action":"quit"}"#).unwrap().unwrap();
        assert!(reply.quit);
        assert_eq!(value(&reply)["outcome"]["result"], "quit");
    }

    #[test]
    fn wire_log_records_both_directions() {
        let path = std::env::temp_dir().join(format!(
            "tetris-stack-wire-{}.log",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let mut s = session().with_wire_log(WireLog::open(&path).unwrap());
        s.handle_line(r#"{"seq":1,"action":"reserve"}"#).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"reserve\""));
        assert!(lines[1].contains("\"observation\""));
        let _ = std::fs::remove_file(&path);
    }
}
