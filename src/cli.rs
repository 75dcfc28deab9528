/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{path::PathBuf, str::FromStr};

use clap::{builder::PossibleValue, Parser, ValueEnum};

use crate::{KingCenterRule, PieceKind, Rules, Square};

/// Command-line arguments of the executable.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Whether kings may step along a file between the center squares of two sections.
    #[arg(long, value_enum, default_value = "open")]
    pub king_center: KingCenterRule,

    /// Start from this position instead of the initial layout.
    #[arg(short, long)]
    pub position: Option<String>,

    /// Commands to execute on startup, before reading from stdin.
    #[arg(short, long = "command")]
    pub commands: Vec<String>,
}

impl Cli {
    /// The rule set selected by these arguments.
    pub fn rules(&self) -> Rules {
        Rules {
            king_center: self.king_center,
        }
    }
}

/// A command to be sent to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    multicall = true,
    about,
    rename_all = "lower",
    override_usage("<COMMAND>")
)]
pub enum EngineCommand {
    /// Pick a square: select a piece, move the selected piece, or preview an opponent's piece.
    #[command(alias = "s")]
    Select {
        square: Square,

        /// If set, the square is picked in debug mode, which moves pieces without regard for the rules.
        #[arg(short, long, default_value = "false")]
        debug: bool,
    },

    /// Choose the piece a waiting pawn becomes.
    Promote { kind: PieceKind },

    /// Print a visual representation of the current board state.
    #[command(alias = "d")]
    Display,

    /// Print whose turn it is, the current selection, and whether anyone is in check.
    Status,

    /// Shows the destinations of the piece on a square.
    Moves {
        square: Square,

        /// If set, destinations will be sorted in square order.
        #[arg(short, long, default_value = "false")]
        sort: bool,
    },

    /// Apply the provided moves to the game, such as `E2E4` or `D7D8q`.
    ///
    /// Each move must be playable by the player whose turn it is.
    Play { moves: Vec<String> },

    /// Print every move played so far.
    History {
        /// If set, the history is printed as JSON.
        #[arg(short, long, default_value = "false")]
        json: bool,
    },

    /// Print the current position.
    Export {
        /// If set, the position is printed as JSON instead of text notation.
        #[arg(short, long, default_value = "false")]
        json: bool,
    },

    /// Replace the current position, discarding the history.
    Import {
        /// The position, in text notation or JSON.
        position: Vec<String>,

        /// If set, the position is parsed as JSON instead of text notation.
        #[arg(short, long, default_value = "false")]
        json: bool,
    },

    /// Rebuild the game from a JSON move history, as printed by `history --json`.
    Replay { path: PathBuf },

    /// Take back the last move.
    Undo,

    /// Start a new game from the initial layout.
    #[command(alias = "new")]
    NewGame,

    /// Quit the engine.
    #[command(aliases = ["quit", "q"])]
    Exit,
}

impl FromStr for EngineCommand {
    type Err = clap::Error;
    /// Attempt to parse an [`EngineCommand`] from a string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse_from(s.split_ascii_whitespace())
    }
}

impl ValueEnum for KingCenterRule {
    fn value_variants<'a>() -> &'a [Self] {
        &[KingCenterRule::Open, KingCenterRule::Blocked]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let value = match self {
            KingCenterRule::Open => PossibleValue::new("open"),
            KingCenterRule::Blocked => PossibleValue::new("blocked").alias("closed"),
        };

        Some(value)
    }
}
