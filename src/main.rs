use std::io;

use tracing::info;

use frontdesk::engine::Engine;
use frontdesk::repl;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut engine = Engine::new();
    info!("frontdesk ready; type `help` for commands");

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&mut engine, stdin.lock(), stdout.lock())?;
    Ok(())
}
