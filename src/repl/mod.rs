use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::commands::{self, Command, Flow, Session, render_help};
use crate::config::PROMPT;

/// Reads commands line by line until `exit` or end of input.
///
/// Command errors are reported to the user and the loop keeps going; only
/// failures to read input or write output end it early.
pub async fn run<R, W>(
    session: &mut Session,
    input: R,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        let words = line.split_whitespace().collect::<Vec<&str>>();
        let Some((name, args)) = words.split_first() else {
            continue;
        };

        let Some(command) = Command::parse(name) else {
            tracing::debug!("Unknown command: {}", name);
            render_help(out)?;
            continue;
        };

        match commands::execute(session, command, args, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(e) => {
                tracing::debug!("Command {} failed: {:?}", command.name(), e);
                writeln!(out, "Command error: {}", e)?;
                render_help(out)?;
            }
        }
    }

    Ok(())
}
