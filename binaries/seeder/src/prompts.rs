use std::io::{self, BufRead, BufReader, IsTerminal, Stdin, Write};

use content_errors::ContentError;
use dialoguer::Input;
use seeders::{FixedAnswer, OverwriteGuard, is_affirmative};

use crate::cli::Cli;

const OVERWRITE_PROMPT: &str = "Delete and recreate? (y/n)";

/// Asks the operator on the terminal; anything but `y`/`Y` keeps the data.
pub struct TerminalPrompt;

impl OverwriteGuard for TerminalPrompt {
    fn confirm_overwrite(
        &mut self, _existing_posts: i64,
    ) -> Result<bool, ContentError> {
        let answer: String = Input::new()
            .with_prompt(OVERWRITE_PROMPT)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ContentError::Prompt(e.to_string()))?;

        Ok(is_affirmative(&answer))
    }
}

/// Reads the answer as one line from piped or redirected input.
///
/// End of input declines.
pub struct LinePrompt<R> {
    reader: R,
}

impl<R: BufRead + Send> LinePrompt<R> {
    pub fn new(reader: R) -> Self { Self { reader } }
}

impl LinePrompt<BufReader<Stdin>> {
    pub fn stdin() -> Self { Self::new(BufReader::new(io::stdin())) }
}

impl<R: BufRead + Send> OverwriteGuard for LinePrompt<R> {
    fn confirm_overwrite(
        &mut self, _existing_posts: i64,
    ) -> Result<bool, ContentError> {
        let mut stdout = io::stdout();
        write!(stdout, "{OVERWRITE_PROMPT}: ")
            .and_then(|()| stdout.flush())
            .map_err(|e| ContentError::Prompt(e.to_string()))?;

        let mut answer = String::new();
        let read = self
            .reader
            .read_line(&mut answer)
            .map_err(|e| ContentError::Prompt(e.to_string()))?;
        if read == 0 {
            println!();
            return Ok(false);
        }

        Ok(is_affirmative(&answer))
    }
}

/// `--overwrite` always answers yes; quiet mode without it always answers no.
/// Otherwise the operator is asked, on the terminal when there is one.
pub fn overwrite_guard(cli: &Cli) -> Box<dyn OverwriteGuard> {
    if cli.overwrite {
        Box::new(FixedAnswer(true))
    }
    else if cli.is_quiet() {
        Box::new(FixedAnswer(false))
    }
    else if io::stdin().is_terminal() {
        Box::new(TerminalPrompt)
    }
    else {
        Box::new(LinePrompt::stdin())
    }
}
