//! Play one round of blackjack against the house on the terminal.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjround::{Console, Hand, InputError, InvalidDecision, Round, RoundError, RoundOptions};
use clap::{Parser, ValueEnum};
use log::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Opts {
    /// Shuffle seed. Defaults to the current time.
    #[arg(short, long)]
    seed: Option<u64>,
    /// What to do when the answer is neither "hit" nor "stay".
    #[arg(long, value_enum, default_value_t = OnInvalid::Abort)]
    on_invalid: OnInvalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OnInvalid {
    /// End the game.
    Abort,
    /// Ask again.
    Reprompt,
}

impl From<OnInvalid> for InvalidDecision {
    fn from(value: OnInvalid) -> Self {
        match value {
            OnInvalid::Abort => Self::Abort,
            OnInvalid::Reprompt => Self::Reprompt,
        }
    }
}

/// Line-based console over a buffered reader.
struct Terminal<R> {
    input: R,
}

impl<R: BufRead> Console for Terminal<R> {
    fn ask_text(&mut self, prompt: &str) -> Result<String, InputError> {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(InputError::Closed),
            Ok(_) => Ok(line.trim_end_matches(['\r', '\n']).to_owned()),
            Err(err) => {
                error!("failed to read input: {err}");
                Err(InputError::Unavailable)
            }
        }
    }

    fn show_hand(&mut self, hand: &Hand, hole_hidden: bool) {
        let hole = if hole_hidden { " []" } else { "" };
        println!("{} {}{hole}", hand.label(), hand.glyphs());
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let opts = Opts::parse();

    let seed = opts.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    info!("starting round with seed {seed}");

    let options = RoundOptions::default().with_on_invalid(opts.on_invalid.into());
    let mut round = Round::new(options, seed);
    let mut console = Terminal {
        input: io::stdin().lock(),
    };

    match round.play(&mut console) {
        Ok(outcome) => {
            println!("{outcome}");
            ExitCode::SUCCESS
        }
        Err(RoundError::InvalidDecision(_)) => {
            println!("Error: End of Game");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
