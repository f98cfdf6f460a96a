//! Terminal front end (default binary).
//!
//! Shows the upcoming-piece queue and the reserve stack, and applies one
//! command per key press. Uses crossterm for input and the framebuffer
//! renderer from `tetris_stack::term`.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tetris_stack::core::Controller;
use tetris_stack::input::{handle_key_event, key_help, should_quit};
use tetris_stack::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetris_stack::AppConfig;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = AppConfig::from_env().apply_args(&args)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut controller = Controller::startup(config.controller_config());
    let reserve_enabled = controller.has_reserve();

    let view = GameView::default().with_menu(key_help(reserve_enabled).iter().copied());
    let mut fb = FrameBuffer::new(0, 0);
    let mut status = String::from("Press 1 to play the next piece.");

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&controller.snapshot(), Some(&status), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(command) = handle_key_event(key, reserve_enabled) {
                    status = controller.apply(command).message();
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
