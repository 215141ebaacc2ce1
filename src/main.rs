use gruetest::launch::GameLaunch;
use gruetest::session::SessionError;
use gruetest::walkthrough;
use std::process;

fn main() {
    // Initialize logging
    env_logger::init();

    let launch = GameLaunch::from_env();

    if let Err(e) = walkthrough::run(&launch) {
        match e {
            SessionError::Unavailable(_) => {
                eprintln!("❌ {e}");
            }
            SessionError::Timeout(_) => {
                eprintln!("\n❌ Timeout waiting for game ({e})");
            }
            SessionError::Session(_) => {
                eprintln!("\n❌ Error: {e}");
            }
        }
        process::exit(1);
    }
}
