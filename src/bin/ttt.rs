use std::cell::Cell;
use std::error::Error;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use ttt_engine::ai::difficulty::{Difficulty, DifficultyBot};
use ttt_engine::board::{Board, Outcome, PlaceError, Player};
use ttt_engine::config::{GameConfig, Mode};
use ttt_engine::coord::Coord;
use ttt_engine::game::{MoveSource, Round, Seat};
use ttt_engine::util::bot_game;
use ttt_engine::util::scoreboard::Scoreboard;
use ttt_engine::wdl::POV;

/// Tic Tac Toe against a friend or the computer.
#[derive(Parser, Debug)]
#[command(name = "ttt", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play rounds on the terminal, cells are entered as 1-9.
    Play {
        /// single (against the computer) or multi (two humans)
        #[arg(long, default_value = "single")]
        mode: Mode,

        /// easy, medium or hard
        #[arg(short, long, default_value = "hard")]
        difficulty: Difficulty,

        /// Let the computer make the first move.
        #[arg(long)]
        human_second: bool,

        /// Seed for the computer, random if not given.
        #[arg(long)]
        seed: Option<u64>,

        /// Stop after this many rounds instead of asking.
        #[arg(long)]
        rounds: Option<u32>,
    },

    /// Let two computer players play a series against each other.
    Match {
        #[arg(long)]
        left: Difficulty,

        #[arg(long)]
        right: Difficulty,

        /// Games per side, each side plays first this many times.
        #[arg(short, long, default_value = "100")]
        games: u32,

        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            difficulty,
            human_second,
            seed,
            rounds,
        } => {
            let config = GameConfig {
                mode,
                difficulty,
                human: if human_second { Player::B } else { Player::A },
            };
            play(config, rng_from(seed), rounds)
        }
        Command::Match {
            left,
            right,
            games,
            seed,
        } => {
            // every game gets fresh bots, give each of them a different seed
            let next_seed = Cell::new(seed.unwrap_or_else(rand::random));
            let next_rng = || {
                let seed = next_seed.get();
                next_seed.set(seed.wrapping_add(1));
                SmallRng::seed_from_u64(seed)
            };

            let result = bot_game::run(
                || DifficultyBot::new(left, next_rng()),
                || DifficultyBot::new(right, next_rng()),
                games,
                true,
                |_, _| {},
            );
            println!("{:?}", result);
            Ok(())
        }
    }
}

fn rng_from(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    }
}

fn play(mut config: GameConfig, mut rng: SmallRng, rounds: Option<u32>) -> Result<(), Box<dyn Error>> {
    let mut human = StdinSource;
    let mut computer = computer_for(config.difficulty, &mut rng)?;
    let mut scoreboard = Scoreboard::new();
    let mut played = 0;

    loop {
        let mut round = Round::new();
        let outcome = match config.computer() {
            None => round.play(Seat::Human(&mut StdinSource), Seat::Human(&mut human)),
            Some(Player::A) => round.play(Seat::Computer(&mut computer), Seat::Human(&mut human)),
            Some(Player::B) => round.play(Seat::Human(&mut human), Seat::Computer(&mut computer)),
        };

        println!("{}", round.board());
        match outcome {
            Outcome::WonBy(player) => println!("{} wins!", describe(&config, player)),
            Outcome::Draw => println!("It's a draw!"),
            Outcome::InProgress => unreachable!("round finished in progress"),
        }

        if config.mode == Mode::Single {
            if let Some(wdl) = outcome.pov(config.human) {
                scoreboard.record(computer.difficulty(), wdl);
            }
            println!();
            println!("{}", scoreboard);
        }

        played += 1;
        let again = match rounds {
            Some(rounds) => played < rounds,
            None => ask("Play again? (y/n): ")?.starts_with('y'),
        };
        if !again {
            break;
        }

        if rounds.is_none() && ask("Change mode or difficulty? (y/n): ")?.starts_with('y') {
            change_settings(&mut config, ask)?;
            computer = computer_for(config.difficulty, &mut rng)?;
        }
    }

    println!("Thanks for playing!");
    Ok(())
}

/// Every computer player gets its own rng, derived from `rng`.
fn computer_for(difficulty: Difficulty, rng: &mut SmallRng) -> Result<DifficultyBot<SmallRng>, rand::Error> {
    Ok(DifficultyBot::new(difficulty, SmallRng::from_rng(rng)?))
}

/// Ask for a new mode and, when playing against the computer, a new difficulty.
fn change_settings(
    config: &mut GameConfig,
    mut ask: impl FnMut(&str) -> Result<String, std::io::Error>,
) -> Result<(), std::io::Error> {
    config.mode = ask_until_valid(&mut ask, "Select mode (1=single, 2=multi): ")?;
    if config.mode == Mode::Single {
        config.difficulty = ask_until_valid(&mut ask, "Select difficulty (1=easy, 2=medium, 3=hard): ")?;
    }
    Ok(())
}

fn ask_until_valid<T>(
    ask: &mut impl FnMut(&str) -> Result<String, std::io::Error>,
    prompt: &str,
) -> Result<T, std::io::Error>
where
    T: FromStr,
    T::Err: Display,
{
    loop {
        match ask(prompt)?.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(e) => println!("{}", e),
        }
    }
}

fn describe(config: &GameConfig, player: Player) -> String {
    match config.mode {
        Mode::Single if config.is_computer(player) => format!("Computer ({})", player.to_char()),
        Mode::Single => format!("You ({})", player.to_char()),
        Mode::Multi => format!("Player {}", player.to_char()),
    }
}

fn ask(prompt: &str) -> Result<String, std::io::Error> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim().to_ascii_lowercase())
}

/// Reads moves as labels `1..=9` from stdin.
#[derive(Debug)]
struct StdinSource;

impl MoveSource for StdinSource {
    fn request_move(&mut self, board: &Board, player: Player, _: &[Coord]) -> Coord {
        println!();
        println!("{}", board);

        loop {
            let line = match ask(&format!("Player {} enter move (1-9): ", player.to_char())) {
                Ok(line) => line,
                Err(_) => {
                    println!();
                    std::process::exit(0);
                }
            };

            match line.parse::<Coord>() {
                Ok(coord) => return coord,
                Err(e) => println!("{}", e),
            }
        }
    }

    fn rejected(&mut self, _: Coord, error: &PlaceError) {
        println!("{}, try again.", error);
    }
}
