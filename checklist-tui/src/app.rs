//! The example host: a main screen that opens the checklist dialog.

use std::io;

use checklist::{ChecklistConfig, ChecklistDialog, DialogOutcome, ItemRef};
use crossterm::event::EventStream;
use futures::StreamExt;

use crate::config::load_dialog_config;
use crate::error::ShellError;
use crate::event::{Input, Key, convert_event};
use crate::frame::Frame;
use crate::greek::{GreekLetter, greek_letters, summary};
use crate::layout::{DialogLayout, HostLayout};
use crate::render::{render_dialog, render_host};
use crate::shell::ChecklistShell;
use crate::terminal::TerminalGuard;

const DIALOG_TITLE: &str = "Select Greek Letters";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    None,
    OpenDialog,
    Quit,
}

/// State of the host's main screen.
#[derive(Debug)]
pub struct HostApp {
    letters: Vec<ItemRef<GreekLetter>>,
    summary: String,
}

impl HostApp {
    pub fn new() -> Self {
        let letters = greek_letters();
        let summary = summary(&letters);
        Self { letters, summary }
    }

    pub fn letters(&self) -> &[ItemRef<GreekLetter>] {
        &self.letters
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn handle(&self, input: Input, layout: &HostLayout) -> HostAction {
        match input {
            Input::Key {
                key: Key::Enter | Key::Char(' '),
                ..
            } => HostAction::OpenDialog,
            Input::Key {
                key: Key::Char('c'),
                modifiers,
            } if modifiers.ctrl => HostAction::Quit,
            Input::Key {
                key: Key::Char('q') | Key::Escape,
                ..
            } => HostAction::Quit,
            Input::Click { x, y } if layout.button.contains(x, y) => HostAction::OpenDialog,
            _ => HostAction::None,
        }
    }

    /// Take over the dialog's list if it was confirmed.
    pub fn adopt(&mut self, outcome: DialogOutcome<GreekLetter>) {
        if outcome.is_confirmed() {
            self.letters = outcome.items;
            self.summary = summary(&self.letters);
        }
    }
}

impl Default for HostApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the host until the user quits.
pub async fn run() -> Result<(), ShellError> {
    let mut terminal = TerminalGuard::new()?;
    let mut events = EventStream::new();
    let mut app = HostApp::new();
    let config = load_dialog_config().title(DIALOG_TITLE);

    loop {
        let (width, height) = terminal.size()?;
        let layout = HostLayout::compute(width, height);
        let mut frame = Frame::new(width, height);
        render_host(app.summary(), &layout, &mut frame);
        terminal.draw(&frame)?;

        let Some(input) = next_input(&mut events).await? else {
            return Ok(());
        };
        match app.handle(input, &layout) {
            HostAction::Quit => return Ok(()),
            HostAction::OpenDialog => {
                let outcome = run_dialog(&mut terminal, &mut events, app.letters(), &config).await?;
                app.adopt(outcome);
            }
            HostAction::None => {}
        }
    }
}

/// Show the checklist over the host and wait until it closes.
async fn run_dialog(
    terminal: &mut TerminalGuard,
    events: &mut EventStream,
    letters: &[ItemRef<GreekLetter>],
    config: &ChecklistConfig,
) -> Result<DialogOutcome<GreekLetter>, ShellError> {
    let mut dialog = ChecklistDialog::new(letters, config.clone())?;
    dialog.on_close(|code| log::info!("[app] dialog closed with code {}", code.code()));
    let mut shell = ChecklistShell::new();

    while !dialog.is_closed() {
        let (width, height) = terminal.size()?;
        let view = dialog.control().view();
        let layout = DialogLayout::compute(width, height, view.region_height());
        let mut frame = Frame::new(width, height);
        render_dialog(&view, &shell, &layout, &mut frame);
        terminal.draw(&frame)?;

        let Some(input) = next_input(events).await? else {
            dialog.control_mut().cancel_pressed()?;
            break;
        };
        if let Err(e) = shell.handle(dialog.control_mut(), input, &layout) {
            log::warn!("[app] input {:?} rejected: {}", input, e);
        }
    }

    Ok(dialog.into_outcome()?)
}

/// Wait for the next input the shell cares about. `None` once the stream ends.
async fn next_input(events: &mut EventStream) -> io::Result<Option<Input>> {
    while let Some(event) = events.next().await {
        if let Some(input) = convert_event(event?) {
            return Ok(Some(input));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use checklist::{Item, ResultCode};

    use super::*;

    fn outcome(app: &HostApp, code: ResultCode) -> DialogOutcome<GreekLetter> {
        DialogOutcome {
            code,
            items: app.letters().to_vec(),
        }
    }

    #[test]
    fn test_keys_map_to_actions() {
        let app = HostApp::new();
        let layout = HostLayout::compute(60, 20);
        assert_eq!(
            app.handle(Input::key(Key::Enter), &layout),
            HostAction::OpenDialog
        );
        assert_eq!(app.handle(Input::key(Key::Char('q')), &layout), HostAction::Quit);
        assert_eq!(app.handle(Input::ctrl('c'), &layout), HostAction::Quit);
        assert_eq!(app.handle(Input::key(Key::Down), &layout), HostAction::None);
        let button = layout.button;
        assert_eq!(
            app.handle(Input::Click { x: button.x, y: button.y }, &layout),
            HostAction::OpenDialog
        );
    }

    #[test]
    fn test_confirm_refreshes_summary() {
        let mut app = HostApp::new();
        app.letters()[1].set_selected(true);
        assert_eq!(app.summary(), "Gamma was selected.");

        let confirmed = outcome(&app, ResultCode::Confirmed);
        app.adopt(confirmed);
        assert_eq!(app.summary(), "Beta and Gamma were selected.");
    }

    #[test]
    fn test_cancel_keeps_summary_but_not_flags() {
        let mut app = HostApp::new();
        app.letters()[0].set_selected(true);

        let cancelled = outcome(&app, ResultCode::Cancelled);
        app.adopt(cancelled);
        assert_eq!(app.summary(), "Gamma was selected.");
        // The toggle made before cancelling is still on the shared item.
        assert!(app.letters()[0].is_selected());
    }
}
