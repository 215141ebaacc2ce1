//! A fake Z-Machine game for exercising the harness without a real
//! interpreter. Speaks just enough of a Zork-shaped protocol: an opening
//! that ends in the `>` prompt, a canned answer to `look`, and a silent
//! exit on `quit` so the stream simply ends.
//!
//! `MOCK_ZORK_MODE` selects a variant behavior:
//! - `silent` prints nothing at all, for driving the harness's timeout path.
//! - `confirm-quit` answers `quit` with a confirmation question and keeps
//!   running until it reads `y`, like the real game.

use std::io::{self, BufRead, Write};
use std::time::Duration;

const ROOM: &str = "West of House\n\
You are standing in an open field west of a white house, with a boarded front door.\n\
There is a small mailbox here.";

fn main() {
    let mode = std::env::var("MOCK_ZORK_MODE").unwrap_or_default();
    if mode == "silent" {
        // Outlive every bound the harness uses, without ever prompting.
        std::thread::sleep(Duration::from_secs(30));
        return;
    }
    let confirm_quit = mode == "confirm-quit";

    let mut out = io::stdout();
    writeln!(out, "ZORK I: The Great Underground Empire (mock)").ok();
    writeln!(out).ok();
    writeln!(out, "{ROOM}").ok();
    prompt(&mut out);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        // EOF or a read error both mean the other side is gone.
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        match line.trim() {
            "quit" if confirm_quit => {
                writeln!(out, "Do you really want to quit (Y is affirmative)?").ok();
            }
            "y" | "yes" if confirm_quit => break,
            "quit" => break,
            "look" => {
                writeln!(out, "{ROOM}").ok();
                prompt(&mut out);
            }
            "" => prompt(&mut out),
            word => {
                writeln!(out, "I don't know the word \"{word}\".").ok();
                prompt(&mut out);
            }
        }
    }
}

/// The prompt has no trailing newline, so it must be flushed explicitly.
fn prompt(out: &mut impl Write) {
    write!(out, "\n>").ok();
    out.flush().ok();
}
