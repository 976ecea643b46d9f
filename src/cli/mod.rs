//! Console front end: command parsing, dispatch and the read-eval-print loop.

pub mod commands;
pub mod handlers;

pub use commands::Command;
pub use handlers::{CommandHandler, Reply};

use crate::repositories::RecordRepository;
use std::io::{self, BufRead, Write};

/// Run the console loop until an exit command or end of input.
///
/// `prompt` is written (and flushed) before every read; pass `""` for
/// scripted input.
pub fn run<R, I, O>(
    handler: &mut CommandHandler<R>,
    mut input: I,
    mut output: O,
    prompt: &str,
) -> io::Result<()>
where
    R: RecordRepository,
    I: BufRead,
    O: Write,
{
    let mut line = String::new();
    loop {
        if !prompt.is_empty() {
            write!(output, "{}", prompt)?;
            output.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            tracing::info!("End of input, leaving console");
            return Ok(());
        }

        match handler.respond(&line) {
            None => {}
            Some(Reply::Continue(message)) => writeln!(output, "{}", message)?,
            Some(Reply::Exit(message)) => {
                writeln!(output, "{}", message)?;
                tracing::info!("Exit requested");
                return Ok(());
            }
        }
    }
}
