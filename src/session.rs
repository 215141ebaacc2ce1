//! Pty session handling for a spawned game interpreter.
//!
//! Wraps an `expectrl` session with the three waits the harness needs:
//! prompt, reply, and shutdown. Each wait is a single bounded attempt; a
//! missed bound surfaces as [`SessionError::Timeout`], never as a hang.

use std::fmt;
use std::process::Command;
use std::time::Duration;

use expectrl::session::OsSession;
use expectrl::{Any, Eof, Expect, Session};
use log::debug;

/// The prompt marker a ready game prints at the end of its output.
const PROMPT: &str = ">";

/// Text the game may print while shutting down after `quit`.
const QUIT_ACK: &str = "quit";

/// Session error type
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    /// The external game stack is not installed; message carries guidance.
    Unavailable(String),
    /// A bounded wait elapsed; payload names what was being awaited.
    Timeout(String),
    /// Any other spawn/read/write failure.
    Session(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Unavailable(msg) => write!(f, "{msg}"),
            SessionError::Timeout(what) => write!(f, "timed out waiting for {what}"),
            SessionError::Session(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<expectrl::Error> for SessionError {
    fn from(err: expectrl::Error) -> Self {
        match err {
            expectrl::Error::ExpectTimeout => {
                SessionError::Timeout("output from the game".to_string())
            }
            other => SessionError::Session(other.to_string()),
        }
    }
}

/// Rewrites a wait failure so the timeout names what was awaited.
fn wait_error(err: expectrl::Error, waiting_for: &str) -> SessionError {
    match err {
        expectrl::Error::ExpectTimeout => SessionError::Timeout(waiting_for.to_string()),
        other => SessionError::Session(other.to_string()),
    }
}

/// One spawned game process, attached to a pseudo-terminal.
///
/// The child is owned exclusively by this handle for its whole lifetime and
/// is released on every exit path: [`GameSession::close`] is best-effort and
/// idempotent, and `Drop` calls it again for the error paths.
pub struct GameSession {
    session: OsSession,
    closed: bool,
}

impl GameSession {
    /// Spawn the game under a pty with a default bound for stream reads.
    ///
    /// A spawn failure is not distinguished from a later read failure; both
    /// report through [`SessionError::Session`].
    pub fn spawn(cmd: Command, read_timeout: Duration) -> Result<Self, SessionError> {
        debug!("spawning game process: {cmd:?}");
        let mut session = Session::spawn(cmd)
            .map_err(|e| SessionError::Session(format!("failed to spawn game: {e}")))?;
        session.set_expect_timeout(Some(read_timeout));
        Ok(GameSession {
            session,
            closed: false,
        })
    }

    /// Block until the game prints its `>` prompt or `bound` elapses.
    ///
    /// Returns everything the game wrote before the prompt marker.
    pub fn expect_prompt(&mut self, bound: Duration) -> Result<String, SessionError> {
        debug!("waiting up to {bound:?} for the game prompt");
        self.session.set_expect_timeout(Some(bound));
        let caps = self
            .session
            .expect(PROMPT)
            .map_err(|e| wait_error(e, "the game prompt"))?;
        let before = String::from_utf8_lossy(caps.before()).into_owned();
        debug!("captured {} bytes before the prompt", before.len());
        Ok(before)
    }

    /// Write one line of input to the game, with a line terminator.
    ///
    /// No escaping, validation, or acknowledgement.
    pub fn send_command(&mut self, line: &str) -> Result<(), SessionError> {
        debug!("sending line: {line:?}");
        self.session.send_line(line)?;
        Ok(())
    }

    /// Block until the game acknowledges `quit` or its stream ends.
    ///
    /// Either outcome counts as a clean shutdown.
    pub fn expect_shutdown(&mut self, bound: Duration) -> Result<(), SessionError> {
        debug!("waiting up to {bound:?} for the game to shut down");
        self.session.set_expect_timeout(Some(bound));
        self.session
            .expect(Any::boxed(vec![Box::new(QUIT_ACK), Box::new(Eof)]))
            .map_err(|e| wait_error(e, "the game to shut down"))?;
        Ok(())
    }

    /// Best-effort release of the child process.
    ///
    /// Errors here are deliberately discarded so cleanup can never mask the
    /// primary failure. Closing twice, or closing after the child already
    /// exited, is a no-op.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Err(e) = self.session.get_process_mut().exit(false) {
            debug!("ignoring error while releasing the game process: {e}");
        }
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_display_names_the_wait() {
        let err = SessionError::Timeout("the game prompt".to_string());
        assert_eq!(err.to_string(), "timed out waiting for the game prompt");
    }

    #[test]
    fn unavailable_display_is_the_message_verbatim() {
        let err = SessionError::Unavailable("python3 not found on PATH!".to_string());
        assert_eq!(err.to_string(), "python3 not found on PATH!");
    }

    #[test]
    fn expect_timeout_converts_to_timeout() {
        let err = SessionError::from(expectrl::Error::ExpectTimeout);
        assert!(matches!(err, SessionError::Timeout(_)));
    }

    #[test]
    fn wait_error_keeps_the_wait_label() {
        let err = wait_error(expectrl::Error::ExpectTimeout, "the game to shut down");
        assert_eq!(err, SessionError::Timeout("the game to shut down".to_string()));
    }
}
