//! Headless runner: drives the controller from stdin.
//!
//! By default it speaks the numbered console menu. With `--json` (see
//! `tetris_stack::adapter::protocol`) it reads one command per line and writes
//! one observation per line. Diagnostics go to stderr so stdout stays a clean
//! transcript.

use std::io;

use anyhow::Result;

use tetris_stack::adapter::{ConsoleSession, Session, WireLog};
use tetris_stack::core::Controller;
use tetris_stack::runner::{run_console, run_json};
use tetris_stack::AppConfig;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = AppConfig::from_env().apply_args(&args)?;

    let controller = Controller::startup(config.controller_config());
    eprintln!(
        "[headless] seed={} queue={} reserve={} mode={}",
        controller.seed(),
        controller.queue_capacity(),
        controller
            .reserve_capacity()
            .map_or_else(|| "off".to_string(), |c| c.to_string()),
        if config.json { "json" } else { "console" }
    );

    let stdin = io::stdin();
    let stdout = io::stdout();

    if config.json {
        let mut session = Session::new(controller);
        if let Some(path) = config.log_path.as_deref() {
            session = session.with_wire_log(WireLog::open(path)?);
            eprintln!("[headless] wire log: {}", path);
        }
        run_json(session, stdin.lock(), stdout.lock())?;
    } else {
        run_console(ConsoleSession::new(controller), stdin.lock(), stdout.lock())?;
    }

    eprintln!("[headless] done");
    Ok(())
}
