//! Resolving the command line that launches the game.
//!
//! The default layout matches the shipped demo: a `game/` directory next to
//! this crate holding the interpreter script and the story file, run under
//! `python3`. Two env vars override it, in the same spirit as the
//! interpreter's `DISPLAY_MODE` switch:
//! - `GAME_COMMAND` replaces the whole command line verbatim
//! - `GAME_DIR` relocates the `game/` directory

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::session::SessionError;

/// Fixed subdirectory holding the interpreter and the story file.
const GAME_SUBDIR: &str = "game";
/// Runtime that executes the interpreter script.
const RUNTIME: &str = "python3";
/// The interpreter script, as shipped.
const INTERPRETER: &str = "fic.py";
/// The story file the session is scripted against.
const STORY: &str = "zork1.z3";

/// How the game process is launched.
#[derive(Debug, Clone, PartialEq)]
pub enum GameLaunch {
    /// `python3 game/fic.py game/zork1.z3`, resolved relative to the crate.
    Bundled { game_dir: PathBuf },
    /// An explicit command line, taken verbatim from `GAME_COMMAND`.
    Command(String),
}

impl GameLaunch {
    /// Resolve the launch from the environment.
    pub fn from_env() -> Self {
        Self::resolve(env::var("GAME_COMMAND").ok(), env::var("GAME_DIR").ok())
    }

    /// Resolve the launch from optional overrides.
    pub fn resolve(command: Option<String>, game_dir: Option<String>) -> Self {
        if let Some(line) = command {
            let line = line.trim().to_string();
            if !line.is_empty() {
                debug!("using GAME_COMMAND override: {line:?}");
                return GameLaunch::Command(line);
            }
        }
        let game_dir = match game_dir {
            Some(dir) => PathBuf::from(dir),
            None => Path::new(env!("CARGO_MANIFEST_DIR")).join(GAME_SUBDIR),
        };
        GameLaunch::Bundled { game_dir }
    }

    /// Build the command to spawn.
    pub fn command(&self) -> Command {
        match self {
            GameLaunch::Bundled { game_dir } => {
                let mut cmd = Command::new(RUNTIME);
                cmd.arg(game_dir.join(INTERPRETER));
                cmd.arg(game_dir.join(STORY));
                cmd
            }
            GameLaunch::Command(line) => {
                // Whitespace-split, so paths with spaces are not supported
                // on this path.
                let mut parts = line.split_whitespace();
                let mut cmd = Command::new(parts.next().unwrap_or(""));
                cmd.args(parts);
                cmd
            }
        }
    }

    /// Verify the game stack exists before spawning anything.
    ///
    /// Reports with install guidance and must run before any spawn attempt;
    /// an explicit `GAME_COMMAND` is taken on trust.
    pub fn preflight(&self) -> Result<(), SessionError> {
        let game_dir = match self {
            GameLaunch::Command(line) => {
                debug!("skipping preflight for explicit command {line:?}");
                return Ok(());
            }
            GameLaunch::Bundled { game_dir } => game_dir,
        };

        let interpreter = game_dir.join(INTERPRETER);
        if !interpreter.is_file() {
            return Err(SessionError::Unavailable(format!(
                "game interpreter not found: {}\nPlace {INTERPRETER} and {STORY} under {}",
                interpreter.display(),
                game_dir.display(),
            )));
        }

        let story = game_dir.join(STORY);
        if !story.is_file() {
            return Err(SessionError::Unavailable(format!(
                "story file not found: {}\nPlace {STORY} under {}",
                story.display(),
                game_dir.display(),
            )));
        }

        if !runtime_on_path(RUNTIME) {
            return Err(SessionError::Unavailable(format!(
                "{RUNTIME} not found on PATH!\nInstall with: apt install {RUNTIME} (or your platform's equivalent)",
            )));
        }

        Ok(())
    }
}

impl fmt::Display for GameLaunch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameLaunch::Bundled { game_dir } => write!(
                f,
                "{RUNTIME} {} {}",
                game_dir.join(INTERPRETER).display(),
                game_dir.join(STORY).display(),
            ),
            GameLaunch::Command(line) => write!(f, "{line}"),
        }
    }
}

/// Whether `name` resolves to an executable file via PATH.
fn runtime_on_path(name: &str) -> bool {
    if name.contains(std::path::MAIN_SEPARATOR) {
        return Path::new(name).is_file();
    }
    match env::var_os("PATH") {
        Some(paths) => env::split_paths(&paths).any(|dir| dir.join(name).is_file()),
        None => false,
    }
}
