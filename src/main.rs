/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use clap::Parser;
use tracing_subscriber::EnvFilter;
use yalta::{Cli, Engine, EngineCommand};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut engine = match Engine::from_cli(&cli) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(1);
        }
    };

    for command in &cli.commands {
        match command.parse::<EngineCommand>() {
            Ok(cmd) => {
                if let Err(e) = engine.send_command(cmd) {
                    eprintln!("{e}");
                }
            }
            Err(e) => eprintln!("ERROR on input {command:?}:\n{e}"),
        }
    }

    if let Err(e) = engine.run() {
        eprintln!("{} encountered an error: {e}", env!("CARGO_PKG_NAME"));
    }
}
