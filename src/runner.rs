//! Line-oriented command loops used by the `headless` binary.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::adapter::{ConsoleSession, Session};

/// Numbered-menu loop. Stops on `0` or end of input.
pub fn run_console(
    mut console: ConsoleSession,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    write!(out, "{}", console.banner())?;
    write!(out, "{}", console.prompt())?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let step = console.handle_line(&line);
        write!(out, "{}", step.output)?;
        if step.quit {
            out.flush()?;
            return Ok(());
        }
        write!(out, "{}", console.prompt())?;
        out.flush()?;
    }

    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// JSON loop: greeting observation, then one reply per command line.
///
/// Stops on a `quit` command or end of input.
pub fn run_json(mut session: Session, input: impl BufRead, mut out: impl Write) -> Result<()> {
    writeln!(out, "{}", session.greeting()?)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let Some(reply) = session.handle_line(&line)? else {
            continue;
        };
        writeln!(out, "{}", reply.line)?;
        out.flush()?;
        if reply.quit {
            break;
        }
    }
    Ok(())
}
