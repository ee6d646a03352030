use draughts::{
    protocol::{handle_command, parse_command, Status},
    Engine,
};
use std::io::{self, BufRead, Write};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    println!("Draughts - 10x10 checkers engine");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let input = line?;

        if let Some(cmd) = parse_command(&input) {
            match handle_command(&cmd, &mut engine, &mut stdout) {
                Ok(Status::Quit) => break,
                Ok(Status::Continue) => {}
                Err(err) => {
                    if engine.options.strict_mode {
                        return Err(err);
                    }
                    warn!(command = cmd.name, "rejected");
                    eprintln!("{:#}", err);
                }
            }
            stdout.flush()?;
        }
    }

    Ok(())
}
