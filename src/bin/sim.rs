use seafight::{AiPlayer, Console, MatchConfig, MatchController, MatchState};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    // seed1 drives the fleets and the first player, seed2 the second player
    let config = MatchConfig::with_seed(Some(seed1));
    let mut game = MatchController::new(
        Box::new(AiPlayer::seeded(seed1.wrapping_add(1))),
        Box::new(AiPlayer::seeded(seed2)),
        &config,
    );

    let mut console = Console::sink();
    while game.step(&mut console)? == MatchState::InProgress {}

    let summary = game.summary();
    let winner = match summary.state {
        MatchState::UserWon => Some("player1"),
        MatchState::ComputerWon => Some("player2"),
        MatchState::InProgress => None,
    };

    let result = json!({
        "player1": {"shots": summary.user_shots, "sunk": summary.user_sunk},
        "player2": {"shots": summary.computer_shots, "sunk": summary.computer_sunk},
        "state": summary.state,
        "turns": summary.turns,
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
