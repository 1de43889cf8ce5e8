//! Terminal front end: drives the controller from a path or from typed
//! commands and re-renders the form after each step.

use std::io::Write;
use std::path::{Path, PathBuf};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::error;

use crate::controller::UploadController;
use crate::error::{AppError, AppResult};
use crate::models::SelectedFile;
use crate::services::ExtractionService;
use crate::view;

pub const HELP: &str = "commands: open <path> | extract | show | clear | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `None` is a dismissed picker.
    Open(Option<PathBuf>),
    Extract,
    Show,
    Clear,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        match command {
            "" => Command::Empty,
            "open" if arg.is_empty() => Command::Open(None),
            "open" => Command::Open(Some(PathBuf::from(arg))),
            "extract" => Command::Extract,
            "show" => Command::Show,
            "clear" => Command::Clear,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// Reads the file and hands it to the controller. An unreadable path never
/// reaches the controller, like a picker that was never completed.
pub async fn select<S: ExtractionService>(
    controller: &UploadController<S>,
    path: &Path,
) -> AppResult<()> {
    let file = SelectedFile::from_path(path).await.map_err(|e| {
        let err = AppError::from(e);
        error!(path = %path.display(), error = %err, "Could not read file");
        err
    })?;
    controller.on_file_selected(Some(file))
}

/// Selects `path`, uploads it and renders the result. Any failure along the
/// way is returned after the form has been written.
pub async fn run_once<S, W>(
    controller: &UploadController<S>,
    path: &Path,
    out: &mut W,
) -> AppResult<()>
where
    S: ExtractionService,
    W: Write,
{
    let outcome = match select(controller, path).await {
        Ok(()) => controller.on_upload_requested().await,
        Err(e) => Err(e),
    };

    if let Err(AppError::Io { message }) = &outcome {
        writeln!(out, "could not read {}: {}", path.display(), message)?;
    }
    view::render(&controller.snapshot(), out)?;
    outcome
}

pub async fn run_interactive<S, R, W>(
    controller: &UploadController<S>,
    initial: Option<&Path>,
    input: R,
    out: &mut W,
) -> AppResult<()>
where
    S: ExtractionService,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if let Some(path) = initial {
        open(controller, path, out).await?;
    }
    show(controller, out)?;
    writeln!(out, "{}", HELP)?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match Command::parse(&line) {
            Command::Empty => continue,
            Command::Open(None) => {
                let _ = controller.on_file_selected(None);
            }
            Command::Open(Some(path)) => open(controller, &path, out).await?,
            Command::Extract => {
                let state = controller.snapshot();
                if !state.can_upload() {
                    let reason = if state.loading {
                        "an upload is already running"
                    } else {
                        "select a PDF file first"
                    };
                    writeln!(out, "{} is disabled: {}", view::trigger_label(&state), reason)?;
                    continue;
                }
                let _ = controller.on_upload_requested().await;
            }
            Command::Show => {}
            Command::Clear => write!(out, "\x1b[2J\x1b[H")?,
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Command::Quit => break,
            Command::Unknown(other) => {
                writeln!(out, "unknown command: {} (try `help`)", other)?;
                continue;
            }
        }
        show(controller, out)?;
    }
    Ok(())
}

/// Interactive selection: a failed read is reported and the session goes on.
async fn open<S, W>(controller: &UploadController<S>, path: &Path, out: &mut W) -> AppResult<()>
where
    S: ExtractionService,
    W: Write,
{
    if let Err(AppError::Io { message }) = select(controller, path).await {
        writeln!(out, "could not read {}: {}", path.display(), message)?;
    }
    Ok(())
}

fn show<S, W>(controller: &UploadController<S>, out: &mut W) -> AppResult<()>
where
    S: ExtractionService,
    W: Write,
{
    writeln!(out)?;
    view::render(&controller.snapshot(), out)?;
    Ok(())
}
