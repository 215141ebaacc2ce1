//! The scripted session the harness drives, start to finish.
//!
//! spawn → wait for prompt → send each scripted command and wait again →
//! send `quit` → wait for shutdown → release. Every wait is one bounded
//! attempt; there is no retry anywhere.

use std::time::Duration;

use log::{debug, info};

use crate::launch::GameLaunch;
use crate::session::{GameSession, SessionError};

/// Bound for the first read after spawn, while the game boots.
pub const STARTUP_WAIT: Duration = Duration::from_secs(10);
/// Bound for reads once the game has shown it is responsive.
pub const REPLY_WAIT: Duration = Duration::from_secs(5);

/// Commands sent once the opening prompt has been seen. `quit` is not part
/// of the script; the shutdown step sends it.
pub const SCRIPTED_COMMANDS: &[&str] = &["look"];

/// Drive the full scripted session, printing the transcript as it goes.
pub fn run(launch: &GameLaunch) -> Result<(), SessionError> {
    launch.preflight()?;

    println!("🎮 Testing Zork I with expectrl...");
    println!("{}", separator());

    debug!("launching game: {launch}");
    let mut game = GameSession::spawn(launch.command(), STARTUP_WAIT)?;

    let outcome = script(&mut game);
    // Release runs on every path: explicitly here, via Drop on early returns.
    game.close();
    outcome
}

/// The exchange itself: everything between spawn and release.
fn script(game: &mut GameSession) -> Result<(), SessionError> {
    let opening = game.expect_prompt(STARTUP_WAIT)?;
    println!("{opening}");
    println!("\n✅ Game started successfully!");
    println!("\nUse this approach for your own game agent:");
    println!("  1. Spawn the game with GameSession::spawn");
    println!("  2. Send commands with send_command()");
    println!("  3. Wait for the prompt with expect_prompt()");
    println!("  4. The returned text is everything before the prompt");
    println!("\n{}", separator());

    for command in SCRIPTED_COMMANDS {
        println!("\n📝 Test: Sending '{command}' command...");
        game.send_command(command)?;
        let reply = game.expect_prompt(REPLY_WAIT)?;
        println!("{reply}");
    }

    println!("\n📝 Quitting...");
    game.send_command("quit")?;
    game.expect_shutdown(REPLY_WAIT)?;
    info!("game shut down cleanly");

    println!("\n✅ Test completed! Zork is ready for your agent.");
    Ok(())
}

fn separator() -> String {
    "=".repeat(60)
}
