use std::{
    fmt,
    io::{self, BufRead, Write},
};

use clap::{App, Arg};
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;

use seabattle::{Board, CellView, Coordinate, ShotOutcome};

mod logging;

/// Endpoint pairs of the fixed demo fleet: one four-deck ship, two
/// three-deck, three double-deck, and four single-deck ships, all spaced at
/// least one cell apart.
const FLEET: [((usize, usize), (usize, usize)); 10] = [
    ((0, 0), (0, 3)),
    ((2, 0), (2, 2)),
    ((2, 4), (2, 6)),
    ((4, 0), (4, 1)),
    ((4, 3), (4, 4)),
    ((4, 6), (4, 7)),
    ((6, 0), (6, 0)),
    ((6, 2), (6, 2)),
    ((6, 4), (6, 4)),
    ((6, 6), (6, 6)),
];

/// Shot sequence played by `--demo`: sink the four-decker, refire its cleared
/// bow, splash open water, then sink a single-deck ship.
const DEMO_SHOTS: [(usize, usize); 7] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (0, 3),
    (0, 0),
    (9, 9),
    (6, 0),
];

fn main() -> io::Result<()> {
    logging::init_logging();

    let matches = App::new("Seabattle")
        .version("1.0")
        .about("Single-player battleship on a fixed 10x10 board.")
        .arg(
            Arg::with_name("demo")
                .short("d")
                .long("demo")
                .help("run the scripted demo shot sequence instead of reading shots from stdin"),
        )
        .get_matches();

    let mut board = match Board::new(FLEET.iter().copied()) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("Invalid fleet layout: {}", err);
            std::process::exit(1);
        }
    };
    info!("fleet placed, {} ships", FLEET.len());

    if matches.is_present("demo") {
        run_demo(&mut board);
    } else {
        let stdin = io::stdin();
        let mut input = InputReader::new(stdin.lock());
        run_interactive(&mut board, &mut input)?;
    }
    Ok(())
}

/// Play the fixed demo shot sequence, printing each outcome and the final
/// board.
fn run_demo(board: &mut Board) {
    for &shot in DEMO_SHOTS.iter() {
        let outcome = board.fire(shot);
        debug!("shot at {:?} -> {}", shot, outcome);
        println!("fire {},{} -> {}", shot.0, shot.1, outcome);
    }
    println!();
    show_board(board);
}

/// Read and resolve shots from the player until the whole fleet is sunk.
fn run_interactive(board: &mut Board, input: &mut InputReader<impl BufRead>) -> io::Result<()> {
    enum Command {
        Fire(Coordinate),
        Show,
        Help,
        Quit,
    }

    static FIRE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:fire|shoot)\s+
        (?P<row>[0-9]+)(?:\s*,\s*|\s+)(?P<col>[0-9]+)$",
        )
        .unwrap()
    });

    println!("Fire at the hidden fleet. Type help or ? for commands.");
    println!();
    show_board(board);
    loop {
        let cmd = input.read_input_lower("> ", |input| match input {
            "?" | "help" | "h" => Some(Command::Help),
            "board" | "show" => Some(Command::Show),
            "quit" | "exit" | "q" => Some(Command::Quit),
            other => {
                if let Some(captures) = FIRE.captures(other) {
                    // The regex only matches digit runs, so parse can only
                    // fail on overflow.
                    let row = match captures.name("row").unwrap().as_str().parse() {
                        Ok(row) => row,
                        Err(_) => {
                            println!("row out of range");
                            return None;
                        }
                    };
                    let col = match captures.name("col").unwrap().as_str().parse() {
                        Ok(col) => col,
                        Err(_) => {
                            println!("col out of range");
                            return None;
                        }
                    };
                    Some(Command::Fire(Coordinate::new(row, col)))
                } else {
                    println!("Invalid command \"{}\". Use '?' for help", other);
                    None
                }
            }
        })?;

        match cmd {
            Command::Fire(coord) => {
                let outcome = board.fire(coord);
                debug!("shot at {} -> {}", coord, outcome);
                println!("{}", outcome);
                if outcome == ShotOutcome::Sunk && board.defeated() {
                    println!();
                    show_board(board);
                    println!("The whole fleet is sunk. You win!");
                    break;
                }
            }
            Command::Show => show_board(board),
            Command::Help => {
                println!(
                    "Available Commands:
    fire <row>,<col>    fire a shot at the given cell, rows and columns 0-9.
    board               show the board.
    quit                leave the game."
                );
            }
            Command::Quit => break,
        }
    }
    Ok(())
}

/// Display helper for a single rendered cell.
struct CellSymbol(CellView);

impl fmt::Display for CellSymbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self.0 {
            CellView::Water => "~",
            CellView::Ship => "\u{25A1}",
            CellView::Hit => "*",
            CellView::Cleared => "x",
        })
    }
}

/// Print the board grid, one space-joined row per line.
fn show_board(board: &Board) {
    for row in board.render().iter() {
        let mut line = String::new();
        for &cell in row.iter() {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&CellSymbol(cell).to_string());
        }
        println!("{}", line);
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`.
    /// Converts to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}
