//! Scripted pty harness for Z-Machine interpreters.
//!
//! Spawns a game interpreter attached to a pseudo-terminal, waits for its
//! `>` prompt, sends a short fixed script, and prints everything the game
//! said along the way. The expect/timeout machinery is `expectrl`'s; this
//! crate only owns the launch plumbing, the script, and the reporting.

pub mod launch;
pub mod session;
pub mod walkthrough;
