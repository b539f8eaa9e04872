use clap::{Parser, Subcommand};
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seafight::{
    init_logging, AiPlayer, CliPlayer, Console, MatchConfig, MatchController, MatchState,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(
        long,
        global = true,
        default_value_t = LevelFilter::Warn,
        help = "Diagnostics written to stderr (off, error, warn, info, debug, trace)"
    )]
    log_level: LevelFilter,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer on this terminal (the default).
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible fleets and computer moves (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match cli.command {
        Some(Commands::Play { seed }) => play(seed),
        None => play(None),
    }
}

fn play(seed: Option<u64>) -> anyhow::Result<()> {
    let config = MatchConfig::with_seed(seed);
    config.validate()?;
    if let Some(s) = seed {
        log::info!("using fixed seed {}", s);
    }

    let computer = match seed {
        Some(s) => AiPlayer::seeded(s.wrapping_add(1)),
        None => AiPlayer::new(SmallRng::from_rng(&mut rand::rng())),
    };
    let mut game = MatchController::new(
        Box::new(CliPlayer::stdin()),
        Box::new(computer),
        &config,
    );

    let mut console = Console::stdout();
    console.banner()?;
    match game.run(&mut console) {
        Ok(MatchState::InProgress) => anyhow::bail!("match stopped before a winner was found"),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
            eprintln!("Input closed, leaving the game.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
