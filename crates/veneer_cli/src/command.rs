//! Driver commands
//!
//! One command per line, shared by the interactive loop and script files:
//!
//! ```text
//! click <widget> <element>
//! remount <widget>
//! mount <widget>
//! unmount <widget>
//! wait <millis>
//! render
//! help
//! quit
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub const HELP: &str = "\
commands:
  click <widget> <element>   click an element of a widget
  remount <widget>           unmount and mount a widget again
  mount <widget>             mount a widget from fresh state
  unmount <widget>           tear a widget down
  wait <millis>              let time pass
  render                     print every widget
  help                       show this help
  quit                       exit";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Click { widget: String, element: String },
    Remount { widget: String },
    Mount { widget: String },
    Unmount { widget: String },
    Wait(Duration),
    Render,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("invalid duration `{0}`, expected milliseconds")]
    InvalidDuration(String),
}

impl Command {
    /// Parse one line, skipping blanks and comments
    pub fn parse_line(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(CommandError::Empty);
        };
        let args: Vec<&str> = words.collect();

        match (verb, args.as_slice()) {
            ("click", [widget, element]) => Ok(Command::Click {
                widget: widget.to_string(),
                element: element.to_string(),
            }),
            ("click", _) => Err(CommandError::Usage("click <widget> <element>")),
            ("remount", [widget]) => Ok(Command::Remount {
                widget: widget.to_string(),
            }),
            ("remount", _) => Err(CommandError::Usage("remount <widget>")),
            ("mount", [widget]) => Ok(Command::Mount {
                widget: widget.to_string(),
            }),
            ("mount", _) => Err(CommandError::Usage("mount <widget>")),
            ("unmount", [widget]) => Ok(Command::Unmount {
                widget: widget.to_string(),
            }),
            ("unmount", _) => Err(CommandError::Usage("unmount <widget>")),
            ("wait", [millis]) => millis
                .parse::<u64>()
                .map(|ms| Command::Wait(Duration::from_millis(ms)))
                .map_err(|_| CommandError::InvalidDuration(millis.to_string())),
            ("wait", _) => Err(CommandError::Usage("wait <millis>")),
            ("render", []) => Ok(Command::Render),
            ("help", _) => Ok(Command::Help),
            ("quit" | "exit", []) => Ok(Command::Quit),
            (other, _) => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
