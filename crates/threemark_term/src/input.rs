//! Parses typed lines into session commands.

use anyhow::{Context, Result, anyhow, bail};
use threemark::Command;

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Forward to the session.
    Command(Command),
    /// Print the command list.
    Help,
    /// Leave the program.
    Quit,
}

/// Command summary shown by `help`.
pub const HELP: &str = "\
1-9                 place a mark (cells numbered left to right, top to bottom)
mode <m>            two-player | vs-computer
difficulty <d>      random | bounded | optimal
timer <minutes>     countdown per round, 0 to disable
theme <t>           light | dark
reset               start the round over
help                show this list
quit                leave";

/// Parses a line of input.
pub fn parse_line(line: &str) -> Result<Input> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        bail!("Type a cell number or 'help'");
    };
    let arg = words.next();

    if let Ok(cell) = head.parse::<usize>() {
        let index = cell
            .checked_sub(1)
            .ok_or_else(|| anyhow!("Cells are numbered 1-9"))?;
        return Ok(Input::Command(Command::PlayerAction(index)));
    }

    let input = match head.to_ascii_lowercase().as_str() {
        "mode" => Input::Command(Command::ModeChanged(parse_arg(arg, "mode")?)),
        "difficulty" => Input::Command(Command::DifficultyChanged(parse_arg(arg, "difficulty")?)),
        "timer" => Input::Command(Command::TimerConfigured(parse_arg(arg, "timer")?)),
        "theme" => Input::Command(Command::ThemeChanged(parse_arg(arg, "theme")?)),
        "reset" => Input::Command(Command::ResetRequested),
        "help" | "?" => Input::Help,
        "quit" | "q" | "exit" => Input::Quit,
        other => bail!("Unknown command '{}'; type 'help'", other),
    };
    Ok(input)
}

fn parse_arg<T>(arg: Option<&str>, name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let arg = arg.ok_or_else(|| anyhow!("'{}' needs a value", name))?;
    arg.parse()
        .with_context(|| format!("Invalid {} '{}'", name, arg))
}
