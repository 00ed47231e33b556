use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use adventure::engine::{Output, OutputBlock};
use adventure::{GameConfig, Session, load_world_from_dir};
use tracing_subscriber::EnvFilter;

fn flush_output(out: Output) {
    let mut printed_anything = false;

    for block in out.blocks {
        match block {
            OutputBlock::Text(line) | OutputBlock::Refusal(line) => {
                println!("{}", line);
            }
            OutputBlock::Event(ev) => {
                if printed_anything {
                    println!(); // visual separation before an event
                }
                println!("{}", ev);
            }
        }
        printed_anything = true;
    }
    println!();
}

fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> io::Result<()> {
    let config_path: Option<PathBuf> = env::args().nth(1).map(PathBuf::from);

    let config = match GameConfig::resolve(config_path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config.log_filter);

    let world = match load_world_from_dir(&config.data_dir, &config.start_room) {
        Ok(w) => w,
        Err(e) => {
            eprintln!(
                "Failed to load game data from '{}': {e}",
                config.data_dir.display()
            );
            std::process::exit(1);
        }
    };

    let mut session = Session::new(world, config.field.clone());

    println!("Welcome, adventurer!");
    println!("Type 'help' for instructions, 'quit' to exit.\n");
    flush_output(session.initialize());

    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        let bytes_read = stdin.read_line(&mut input)?;
        if bytes_read == 0 {
            println!("\nThank you for playing!");
            break;
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (out, quit) = session.step(input);
        flush_output(out);

        if quit {
            break;
        }
    }

    Ok(())
}
