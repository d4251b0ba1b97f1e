use crate::app::screen::{OutputFormat, Reply, Screen};
use crate::utils::error::{CartError, Result};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: usize,
    pub rejected: usize,
}

/// Reads one command per line until `quit` or end of input, writing frames
/// and messages to `out`. Bad commands and unknown products are reported
/// inline and the session goes on; I/O failures end it.
///
/// In JSON mode every item written is a standalone JSON value followed by a
/// newline, so the output can be read as a stream.
pub fn run<R: BufRead, W: Write>(screen: &mut Screen, input: R, out: &mut W) -> Result<SessionSummary> {
    let format = screen.format();
    let mut summary = SessionSummary::default();

    write!(out, "{}", screen.draw()?)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        summary.commands += 1;

        match screen.handle_line(&line) {
            Ok(Reply::Redraw) => {
                if let Some(frame) = screen.take_frame() {
                    if format == OutputFormat::Text {
                        writeln!(out)?;
                    }
                    write!(out, "{}", frame)?;
                }
            }
            Ok(Reply::Frame(frame)) => write!(out, "{}", frame)?,
            Ok(Reply::Message(message)) => write_message(out, format, &message)?,
            Ok(Reply::Nothing) => {}
            Ok(Reply::Quit) => break,
            Err(e) if e.is_recoverable() => {
                summary.rejected += 1;
                tracing::warn!("Rejected input '{}': {}", line.trim(), e);
                write_rejection(out, format, &e)?;
            }
            Err(e) => return Err(e),
        }
        out.flush()?;
    }

    tracing::info!(
        commands = summary.commands,
        rejected = summary.rejected,
        items = screen.store().cart().total_quantity(),
        "Session finished"
    );
    Ok(summary)
}

fn write_message<W: Write>(out: &mut W, format: OutputFormat, message: &str) -> Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{}", message)?,
        OutputFormat::Json => {
            let value = serde_json::json!({ "message": message });
            writeln!(out, "{}", serde_json::to_string(&value)?)?;
        }
    }
    Ok(())
}

fn write_rejection<W: Write>(out: &mut W, format: OutputFormat, error: &CartError) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "! {} ({})", error, error.recovery_suggestion())?,
        OutputFormat::Json => {
            let value = serde_json::json!({
                "error": error.to_string(),
                "suggestion": error.recovery_suggestion(),
            });
            writeln!(out, "{}", serde_json::to_string(&value)?)?;
        }
    }
    Ok(())
}
