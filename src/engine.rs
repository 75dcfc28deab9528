/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    fs, io,
    sync::mpsc::{channel, Receiver, Sender},
    thread,
};

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::{
    Cli, Destinations, EngineCommand, Game, Move, Player, Position, Rules, Square, TurnState,
};

/// The interactive front end: a [`Game`] driven by text commands.
#[derive(Debug)]
pub struct Engine {
    /// The game being played.
    ///
    /// Reset whenever the engine is told to start a new game.
    game: Game,

    /// One half of a channel, responsible for sending commands to the engine to execute.
    sender: Sender<EngineCommand>,

    /// One half of a channel, responsible for receiving commands for the engine to execute.
    receiver: Receiver<EngineCommand>,
}

impl Engine {
    /// Constructs a new [`Engine`] instance to be executed with [`Engine::run`].
    pub fn new(rules: Rules) -> Self {
        Self::with_game(Game::new(rules))
    }

    /// Constructs a new [`Engine`] around an existing game.
    pub fn with_game(game: Game) -> Self {
        let (sender, receiver) = channel();

        Self {
            game,
            sender,
            receiver,
        }
    }

    /// Constructs a new [`Engine`] configured by command-line arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut game = Game::new(cli.rules());
        if let Some(notation) = &cli.position {
            game.import(notation)
                .context("Invalid starting position")?;
        }

        info!(rules = ?cli.rules(), position = %game.export(), "starting");
        Ok(Self::with_game(game))
    }

    /// Returns a string of the engine's name and current version.
    pub fn name(&self) -> String {
        format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    #[inline(always)]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Sends an [`EngineCommand`] to the engine to be executed.
    pub fn send_command(&self, command: EngineCommand) -> Result<()> {
        self.sender
            .send(command)
            .context("Failed to send command to engine")
    }

    /// Execute the main event loop for the engine.
    ///
    /// This function spawns a thread to handle input from `stdin` and waits on received commands.
    pub fn run(&mut self) -> Result<()> {
        // Spawn a separate thread for handling user input
        let sender = self.sender.clone();
        thread::spawn(|| {
            if let Err(err) = input_handler(sender) {
                eprintln!("Input handler thread stopping after fatal error: {err}");
            }
        });

        // Loop on user input
        while let Ok(cmd) = self.receiver.recv() {
            if cmd == EngineCommand::Exit {
                break;
            }

            // Keep running, even on error
            if let Err(e) = self.execute(cmd) {
                eprintln!("Error: {e:#}");
            }
        }

        Ok(())
    }

    /// Executes a single [`EngineCommand`], other than [`EngineCommand::Exit`].
    pub fn execute(&mut self, cmd: EngineCommand) -> Result<()> {
        match cmd {
            EngineCommand::Select { square, debug } => {
                if debug {
                    self.game.select_square_debug(square);
                } else {
                    self.game.select_square(square);
                }
                println!("{}", self.describe_turn());
            }

            EngineCommand::Promote { kind } => {
                if self.game.pending_promotion().is_none() {
                    bail!("There is no pawn waiting to be promoted");
                }
                if !kind.is_promotion_target() {
                    bail!("A pawn cannot become a {}", kind.name());
                }
                self.game.promote(kind);
                println!("{}", self.describe_turn());
            }

            EngineCommand::Display => println!("{}", self.game.position()),

            EngineCommand::Status => self.status(),

            EngineCommand::Moves { square, sort } => {
                let mut moves = self.game.destinations_from(square);
                if sort {
                    moves.sort();
                }
                println!("{}", list(&moves));
            }

            EngineCommand::Play { moves } => {
                for mv in moves {
                    self.game.play_text(&mv)?;
                }
                println!("{}", self.describe_turn());
            }

            EngineCommand::History { json } => {
                if json {
                    println!("{}", serde_json::to_string(self.game.history())?);
                } else {
                    for (i, mv) in self.game.history().iter().enumerate() {
                        println!("{:>3}. {mv:?}", i + 1);
                    }
                }
            }

            EngineCommand::Export { json } => {
                if json {
                    println!("{}", self.game.position().to_json()?);
                } else {
                    println!("{}", self.game.export());
                }
            }

            EngineCommand::Import { position, json } => {
                let position = position.join(" ");
                if json {
                    let position = Position::from_json(&position)?;
                    self.game.reset(position);
                } else {
                    self.game.import(&position)?;
                }
                info!(position = %self.game.export(), "imported position");
            }

            EngineCommand::Replay { path } => {
                let json = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let moves: Vec<Move> =
                    serde_json::from_str(&json).context("Failed to parse move history")?;

                self.game = Game::replay(self.game.rules(), &moves)?;
                info!(moves = moves.len(), "replayed game");
                println!("{}", self.describe_turn());
            }

            EngineCommand::Undo => match self.game.undo() {
                Some(mv) => println!("Took back {mv}"),
                None => println!("Nothing to take back"),
            },

            EngineCommand::NewGame => {
                self.game = Game::new(self.game.rules());
                info!("new game");
            }

            EngineCommand::Exit => {}
        }

        Ok(())
    }

    /// Prints whose turn it is, the selection, and check or checkmate status.
    fn status(&self) {
        println!("{}", self.describe_turn());

        if let Some((from, to)) = self.game.last_move() {
            println!("Last move: {from} -> {to}");
        }
        if let Some(square) = self.game.state().debug_selection() {
            println!("Debug selection: {square}");
        }

        let checked = Player::all()
            .into_iter()
            .filter(|&player| self.game.in_check(player))
            .map(|player| player.to_string())
            .collect::<Vec<_>>();
        if !checked.is_empty() {
            println!("In check: {}", checked.join(", "));
        }

        let mated = Player::all()
            .into_iter()
            .filter(|&player| self.game.is_checkmate(player))
            .map(|player| player.to_string())
            .collect::<Vec<_>>();
        if !mated.is_empty() {
            println!("Checkmate: {}", mated.join(", "));
        }
    }

    /// One line describing where the selection protocol stands.
    fn describe_turn(&self) -> String {
        let player = self.game.current_player();
        let state = self.game.state();

        match state.turn() {
            TurnState::AwaitingPromotion(pending) => {
                format!("{} must promote the pawn on {}", pending.player, pending.to)
            }
            _ => match (state.selection(), state.destinations()) {
                (Some(square), Some(Destinations::Actionable(moves))) => {
                    format!("{player} to move; selected {square}: {}", list(moves))
                }
                (Some(square), Some(Destinations::Preview(moves))) => {
                    format!("{player} to move; previewing {square}: {}", list(moves))
                }
                _ => format!("{player} to move"),
            },
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

/// Joins squares by comma-space, or "(none)" if there are none.
fn list(squares: &[Square]) -> String {
    if squares.is_empty() {
        String::from("(none)")
    } else {
        squares
            .iter()
            .map(|square| square.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Loops endlessly to await input via `stdin`, sending all successfully-parsed commands through the supplied `sender`.
fn input_handler(sender: Sender<EngineCommand>) -> Result<()> {
    let mut buffer = String::with_capacity(256);

    loop {
        // Clear the buffer, read input, and trim the trailing newline
        buffer.clear();
        let bytes = io::stdin()
            .read_line(&mut buffer)
            .context("Failed to read line when parsing commands")?;

        // For ctrl + d
        if 0 == bytes {
            sender
                .send(EngineCommand::Exit)
                .context("Failed to send 'exit' command after receiving empty input")?;

            return Ok(());
        }

        // Trim any leading/trailing whitespace
        let buf = buffer.trim();

        // Ignore empty lines
        if buf.is_empty() {
            continue;
        }

        match buf.parse::<EngineCommand>() {
            Ok(cmd) => sender
                .send(cmd)
                .context("Failed to send command to engine")?,

            Err(err) => eprintln!("{err}"),
        }
    }
}
