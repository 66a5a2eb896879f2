use clap::Parser;

use crate::game::consts::*;
use crate::prelude::*;

#[derive(Clone, Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct ConsoleOptions
{
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    /// board width in cells
    pub board_size: usize,

    #[arg(short, long, default_value = "medium")]
    /// starting difficulty tier
    pub difficulty: String,

    #[arg(short, long, default_value = "info")]
    /// lowest log level to show
    pub log_level: String,

    #[arg(short, long)]
    /// fixed rng seed for reproducible games
    pub seed: Option<u64>,
}

/// The session object behind the console protocol.
///
/// The server owns everything the engine core refuses to: the current board,
/// the placement history, turn alternation, and the difficulty selection.
pub struct Server
{
    agent:      Agent,
    board:      Option<Board>,
    difficulty: Difficulty,
    history:    History,
    options:    ConsoleOptions,
}

impl Server
{
    /// Creates a new server with the given capabilities.
    pub fn new(options: ConsoleOptions) -> Self
    {
        let difficulty = options.difficulty.parse::<Difficulty>().unwrap_or_else(|err| {
            log::warn!("{}, falling back to {}", err, Difficulty::default());
            Difficulty::default()
        });

        Server {
            agent: Agent::new(options.seed),
            board: None,
            difficulty,
            history: History::default(),
            options,
        }
    }

    /// Runs the command loop until stdin closes.
    pub fn run(&mut self) -> Result<()>
    {
        loop
        {
            let mut cmdstr: String = String::new();
            if std::io::stdin().read_line(&mut cmdstr)? == 0
            {
                return Ok(());
            }

            let args: Vec<&str> = cmdstr.split_whitespace().filter(|s| !s.is_empty()).collect();
            let (cmd, rest) = match args.split_first()
            {
                | Some((cmd, rest)) => (*cmd, rest),
                | None => ("", &[][..]),
            };

            self.apply(cmd, rest)?;
        }
    }
}

impl Server
{
    /// Matches the command to the server's functionality.
    fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<()>
    {
        let result = match cmd
        {
            | "" => Ok(()),
            | "bestmove" => self.best_move(),
            | "difficulty" => self.set_difficulty(args),
            | "info" => self.info(),
            | "newgame" => self.new_game(args),
            | "play" => self.play_move(args),
            | "show" => self.show(),
            | "undo" => self.undo(args),
            | "validmoves" => self.valid_moves(),
            | _ => Err(Error::new(Kind::UnrecognizedCommand, cmd.into())),
        };

        match result
        {
            | Ok(_) =>
            {
                log::debug!("Command completed successfully: {cmd} {}", args.join(" "));
                self.ok()
            }
            | Err(err) => match err.fatal()
            {
                | true =>
                {
                    let _ = self.err(&err);
                    Err(err)
                }
                | false =>
                {
                    log::warn!("encountered recoverable error:\n{err}");
                    self.err(&err)
                }
            },
        }
    }

    /// Prints the engine's chosen move for the current position, without playing it.
    fn best_move(&mut self) -> Result<()>
    {
        let difficulty = self.difficulty;
        let Some(board) = self.board.as_mut()
        else
        {
            return Err(Error::empty(Kind::GameNotStarted));
        };

        let decided = matches!(board.state(), GameState::HumanWins | GameState::EngineWins);
        let choice = if decided { None } else { self.agent.best_move(board, difficulty) };

        match choice
        {
            | Some(cell) => println!("{}", cell),
            | None => println!("none"),
        }

        Ok(())
    }

    /// Ensures there is a board loaded on this server.
    fn ensure_started(&self) -> Result<&Board>
    {
        match self.board.as_ref()
        {
            | Some(b) => Ok(b),
            | None => Err(Error::empty(Kind::GameNotStarted)),
        }
    }

    /// Prints an error to the console stream.
    fn err(&self, err: &Error) -> Result<()>
    {
        println!("err\n{}", err);
        self.ok()
    }

    /// Prints the server's ID and session settings.
    fn info(&self) -> Result<()>
    {
        println!("id {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        println!("size {}; difficulty {}", self.options.board_size, self.difficulty);
        Ok(())
    }

    /// Creates a new game, on a custom board width if one is given.
    fn new_game(&mut self, args: &[&str]) -> Result<()>
    {
        let size = match args.first()
        {
            | Some(raw) => raw.parse::<usize>().map_err(|_| Error::for_parse::<usize>((*raw).into()))?,
            | None => self.options.board_size,
        };

        self.board = Some(Board::new(size)?);
        self.history = History::default();

        self.report()
    }

    /// Prints the ok footer to the console stream.
    fn ok(&self) -> Result<()>
    {
        println!("ok");
        Ok(())
    }

    /// Plays a cell for the side to move on the current board, if one exists.
    fn play_move(&mut self, args: &[&str]) -> Result<()>
    {
        if args.is_empty()
        {
            return Err(Error::new(Kind::ParseError, "You must provide a cell as row,col.".into()));
        }

        let cell = args
            .join("")
            .parse::<Cell>()
            .map_err(|err| err.chain(Error::new(Kind::ParseError, "Moves are given as row,col.".into())))?;
        let side = self.to_move();

        let Some(board) = self.board.as_mut()
        else
        {
            return Err(Error::empty(Kind::GameNotStarted));
        };

        if !matches!(board.state(), GameState::NotStarted | GameState::InProgress)
        {
            return Err(Error::new(Kind::InvalidMove, "The game is already decided.".into()));
        }

        let change = board.play(cell, side)?;
        log::debug!("{}", change);

        self.history.play(Entry { cell, side });
        self.report()
    }

    /// Prints the game state, and the winning line when the game is decided.
    fn report(&self) -> Result<()>
    {
        let board = self.ensure_started()?;
        let state = board.state();

        let line = match state
        {
            | GameState::HumanWins => board.winning_line(Side::Human),
            | GameState::EngineWins => board.winning_line(Side::Engine),
            | _ => None,
        };

        match line
        {
            | Some(line) => println!("{} {}", state, line),
            | None => println!("{}", state),
        }

        Ok(())
    }

    /// Switches the difficulty tier mid-session.
    fn set_difficulty(&mut self, args: &[&str]) -> Result<()>
    {
        let raw = args.first().ok_or_else(|| {
            Error::new(Kind::ParseError, "You must provide a difficulty (easy, medium or hard).".into())
        })?;

        self.difficulty = raw.parse::<Difficulty>()?;
        println!("{}", self.difficulty);
        Ok(())
    }

    /// Prints the board grid, as a debugging aid for frontends.
    fn show(&self) -> Result<()>
    {
        let board = self.ensure_started()?;
        println!("{}", board);
        Ok(())
    }

    /// The side whose turn it is; the human always opens.
    fn to_move(&self) -> Side
    {
        match self.history.prev()
        {
            | Some(entry) => entry.side.flip(),
            | None => Side::Human,
        }
    }

    /// Undoes the given number of placements on the current board.
    fn undo(&mut self, args: &[&str]) -> Result<()>
    {
        let mut n: usize = 1;
        if let Some(raw) = args.first()
        {
            let try_n = raw.parse::<usize>();
            if let Ok(num) = try_n
            {
                n = num;
            }
            else
            {
                return Err(Error::for_parse::<usize>((*raw).into()));
            }
        }

        let Some(board) = self.board.as_mut()
        else
        {
            return Err(Error::empty(Kind::GameNotStarted));
        };

        for _ in 0..n
        {
            let Some(entry) = self.history.undo()
            else
            {
                return Err(Error::new(Kind::TooManyUndos, "There are no placements left to undo.".into()));
            };

            let change = board.clear_unchecked(entry.cell);
            log::debug!("{}", change);
        }

        self.report()
    }

    /// Prints all of the open cells in this position.
    fn valid_moves(&self) -> Result<()>
    {
        let board = self.ensure_started()?;

        let movelist = board
            .legal_moves()
            .iter()
            .map(|cell| format!("{}", cell))
            .collect::<Vec<_>>()
            .join(";");
        let movelist = if movelist.is_empty() { "none".into() } else { movelist };

        println!("{}", movelist);
        Ok(())
    }
}
