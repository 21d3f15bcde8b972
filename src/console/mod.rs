//! Line-oriented console front-end.
//!
//! Reads commands from stdin, one per line, and drives a [`GameState`].
//! Board clicks arrive as pixel coordinates and go through the fixed window
//! [`layout`]; two clicks on different squares form a move.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{FenError, GameState, Move, MoveParseError, Square, SquareError};
use crate::config::{ConfigError, GameConfig, OptionAction};

pub mod command;
pub mod glyphs;
pub mod layout;
pub mod print;

use command::{parse_console_command, parse_setoption, ConsoleCommand};
use layout::BoardLayout;

/// Error type for console commands
#[derive(Debug)]
pub enum ConsoleError {
    /// Reading input or writing output failed
    Io(io::Error),
    /// Invalid FEN in a `position` command
    InvalidFen(FenError),
    /// Move text that could not be decoded
    InvalidMove(MoveParseError),
    /// Square text that could not be decoded
    InvalidSquare(SquareError),
    /// Bad `setoption` or configuration value
    Config(ConfigError),
    /// Command lacks required arguments
    MissingParts { command: String },
    /// `perft` asked for more plies than the console will search
    DepthTooLarge { depth: usize, max: usize },
    /// Command word not recognized
    UnknownCommand(String),
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::Io(e) => write!(f, "I/O error: {e}"),
            ConsoleError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            ConsoleError::InvalidMove(e) => write!(f, "{e}"),
            ConsoleError::InvalidSquare(e) => write!(f, "{e}"),
            ConsoleError::Config(e) => write!(f, "{e}"),
            ConsoleError::MissingParts { command } => {
                write!(f, "Missing required parts in {command} command")
            }
            ConsoleError::DepthTooLarge { depth, max } => {
                write!(f, "Perft depth {depth} too large (max {max})")
            }
            ConsoleError::UnknownCommand(line) => write!(f, "Unknown command '{line}'"),
        }
    }
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::Io(e) => Some(e),
            ConsoleError::InvalidFen(e) => Some(e),
            ConsoleError::InvalidMove(e) => Some(e),
            ConsoleError::InvalidSquare(e) => Some(e),
            ConsoleError::Config(e) => Some(e),
            ConsoleError::MissingParts { .. }
            | ConsoleError::DepthTooLarge { .. }
            | ConsoleError::UnknownCommand(_) => None,
        }
    }
}

impl From<io::Error> for ConsoleError {
    fn from(e: io::Error) -> Self {
        ConsoleError::Io(e)
    }
}

impl From<FenError> for ConsoleError {
    fn from(e: FenError) -> Self {
        ConsoleError::InvalidFen(e)
    }
}

impl From<MoveParseError> for ConsoleError {
    fn from(e: MoveParseError) -> Self {
        ConsoleError::InvalidMove(e)
    }
}

impl From<SquareError> for ConsoleError {
    fn from(e: SquareError) -> Self {
        ConsoleError::InvalidSquare(e)
    }
}

impl From<ConfigError> for ConsoleError {
    fn from(e: ConfigError) -> Self {
        ConsoleError::Config(e)
    }
}

/// Deepest `perft` the console runs.
pub const MAX_PERFT_DEPTH: usize = 6;

/// Whether the loop keeps reading after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

const HELP: &str = "\
commands:
  board | d                     show the board
  moves [square]                list candidate moves
  move <e2e4> | <e2e4>          play a move
  click <x> <y>                 click a pixel of the 512x512 board
  undo | z                      take back the last move
  position startpos|fen <fen> [moves ...]
  fen                           print the position as FEN
  perft <depth>                 count move-tree leaves (depth 0-6)
  setoption name <Rules|Glyphs> value <v>
  quit";

/// One interactive session: the game, its options and the click selection.
#[derive(Debug, Clone)]
pub struct Session {
    game: GameState,
    config: GameConfig,
    layout: BoardLayout,
    selected: Option<Square>,
}

impl Session {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Session {
            game: GameState::with_rules(config.rules),
            config,
            layout: BoardLayout::default(),
            selected: None,
        }
    }

    #[must_use]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The square picked by a first click, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Parse and run one input line.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow, ConsoleError> {
        match parse_console_command(line) {
            Some(cmd) => self.handle(cmd, out),
            None => Ok(Flow::Continue),
        }
    }

    pub fn handle<W: Write>(&mut self, cmd: ConsoleCommand, out: &mut W) -> Result<Flow, ConsoleError> {
        match cmd {
            ConsoleCommand::Board => {
                write!(out, "{}", print::render_position(&self.game, self.config.glyphs))?;
            }
            ConsoleCommand::Moves(from) => {
                let moves = match from {
                    Some(sq) => self.game.moves_from(sq.parse::<Square>()?),
                    None => self.game.valid_moves(),
                };
                if !moves.is_empty() {
                    writeln!(out, "{}", print::format_moves(&moves))?;
                }
                writeln!(out, "moves {}", moves.len())?;
            }
            ConsoleCommand::Move(text) => self.play_text(&text, out)?,
            ConsoleCommand::Click { x, y } => self.click(x, y, out)?,
            ConsoleCommand::Undo => {
                self.selected = None;
                match self.game.undo_move() {
                    Some(mv) => writeln!(out, "undone {}", mv.chess_notation())?,
                    None => writeln!(out, "nothing to undo")?,
                }
            }
            ConsoleCommand::Position(parts) => self.set_position(&parts)?,
            ConsoleCommand::Fen => writeln!(out, "{}", self.game.to_fen())?,
            ConsoleCommand::Perft(depth) => {
                if depth > MAX_PERFT_DEPTH {
                    return Err(ConsoleError::DepthTooLarge {
                        depth,
                        max: MAX_PERFT_DEPTH,
                    });
                }
                let nodes = self.game.perft(depth);
                writeln!(out, "perft {depth} nodes {nodes}")?;
            }
            ConsoleCommand::SetOption(parts) => {
                let (name, value) = parse_setoption(&parts).ok_or_else(|| ConsoleError::MissingParts {
                    command: "setoption".to_string(),
                })?;
                if let OptionAction::SwitchRules(rules) = self.config.apply_option(&name, value.as_deref())? {
                    self.game.set_rules(rules);
                }
            }
            ConsoleCommand::Help => writeln!(out, "{HELP}")?,
            ConsoleCommand::Quit => return Ok(Flow::Quit),
            ConsoleCommand::Unknown(line) => return Err(ConsoleError::UnknownCommand(line)),
        }
        Ok(Flow::Continue)
    }

    fn play_text<W: Write>(&mut self, text: &str, out: &mut W) -> Result<(), ConsoleError> {
        match self.game.parse_move(text) {
            Ok(mv) => self.play(mv, out),
            Err(MoveParseError::IllegalMove { notation }) => {
                writeln!(out, "illegal {notation}")?;
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn play<W: Write>(&mut self, mv: Move, out: &mut W) -> Result<(), ConsoleError> {
        self.selected = None;
        self.game.apply_move(mv);
        writeln!(out, "played {}", mv.chess_notation())?;
        Ok(())
    }

    /// First click selects, a second click on another square tries the move.
    /// Either way the selection is cleared after the second click.
    fn click<W: Write>(&mut self, x: i64, y: i64, out: &mut W) -> Result<(), ConsoleError> {
        let Some(sq) = self.layout.square_at(x, y) else {
            self.selected = None;
            writeln!(out, "off board")?;
            return Ok(());
        };

        match self.selected.take() {
            None => {
                self.selected = Some(sq);
                writeln!(out, "selected {sq}")?;
            }
            Some(prev) if prev == sq => writeln!(out, "deselected {sq}")?,
            Some(from) => {
                let candidate = self.game.move_between(from, sq);
                match self.game.valid_moves().find(&candidate) {
                    Some(mv) => self.play(mv, out)?,
                    None => writeln!(out, "illegal {}", candidate.chess_notation())?,
                }
            }
        }
        Ok(())
    }

    /// `position startpos|fen <fields...> [moves <m1> <m2> ...]`
    fn set_position(&mut self, parts: &[String]) -> Result<(), ConsoleError> {
        let missing = || ConsoleError::MissingParts {
            command: "position".to_string(),
        };
        let moves_at = parts.iter().position(|p| p == "moves").unwrap_or(parts.len());

        let mut game = match parts.get(1).map(String::as_str) {
            Some("startpos") => GameState::with_rules(self.config.rules),
            Some("fen") => {
                let fen = parts.get(2..moves_at).filter(|f| !f.is_empty()).ok_or_else(missing)?;
                GameState::try_from_fen_with_rules(&fen.join(" "), self.config.rules)?
            }
            _ => return Err(missing()),
        };

        for text in parts.iter().skip(moves_at + 1) {
            let mv = game.parse_move(text)?;
            game.apply_move(mv);
        }

        engine_log!(info, "position set: {}", game.to_fen());
        self.game = game;
        self.selected = None;
        Ok(())
    }
}

/// Run the console over stdin/stdout until `quit` or end of input.
pub fn run_console_loop(config: GameConfig) -> Result<(), ConsoleError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(config, stdin.lock(), &mut stdout.lock())
}

/// Drive a session from any line source.
///
/// Command failures are reported as `error: <message>` lines; only I/O
/// failures end the loop with an error.
pub fn run_with<R: BufRead, W: Write>(config: GameConfig, input: R, out: &mut W) -> Result<(), ConsoleError> {
    let mut session = Session::new(config);
    for line in input.lines() {
        let line = line?;
        match session.handle_line(&line, out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(ConsoleError::Io(e)) => return Err(ConsoleError::Io(e)),
            Err(e) => {
                engine_log!(debug, "command '{}' failed: {}", line.trim(), e);
                writeln!(out, "error: {e}")?;
            }
        }
        out.flush()?;
    }
    Ok(())
}
