use anyhow::Context;
use clap::{Parser, Subcommand};
use pokerview::ui::layout::TableLayout;
use pokerview::view::{bet_bounds, display_slot, presets, seat_cards, standing, CardFace};
use pokerview_protocol::{GameSnapshot, ServerMessage};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

#[derive(Parser)]
#[command(name = "pokerview-combined")]
#[command(about = "Pokerview - client launcher and snapshot inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the table client; extra arguments are passed through
    Client {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Print what the client would draw for a saved snapshot
    Inspect {
        /// JSON file holding a snapshot or a whole `game_state` message
        file: PathBuf,
        #[arg(long, default_value = "1200")]
        width: f32,
        #[arg(long, default_value = "800")]
        height: f32,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Client { args } => run_client(&args),
        Commands::Inspect { file, width, height } => {
            let snapshot = load_snapshot(&file)?;
            print!("{}", describe(&snapshot, iced::Size::new(width, height)));
            Ok(())
        }
    }
}

fn run_client(args: &[String]) -> anyhow::Result<()> {
    let status = Command::new("cargo")
        .args(["run", "-p", "pokerview", "--"])
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .context("failed to start client")?;

    if !status.success() {
        anyhow::bail!("client exited with error: {status}");
    }
    Ok(())
}

fn load_snapshot(path: &Path) -> anyhow::Result<GameSnapshot> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;

    if let Ok(ServerMessage::GameState(snapshot)) = ServerMessage::decode(&text) {
        return Ok(snapshot);
    }
    tracing::debug!("not a game_state message, trying a bare snapshot");
    serde_json::from_str(&text).with_context(|| format!("{} is not a table snapshot", path.display()))
}

fn face(face: &CardFace) -> String {
    match face {
        CardFace::Up(card) => card.to_string(),
        CardFace::Down => "??".to_string(),
    }
}

fn describe(snapshot: &GameSnapshot, size: iced::Size) -> String {
    let mut out = String::new();
    let viewer = snapshot.your_index.unwrap_or(0);

    let _ = writeln!(
        out,
        "{} | hand {} | street {} | pot {}",
        snapshot.name.as_deref().unwrap_or("table"),
        snapshot.hand_num,
        snapshot.street.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string()),
        snapshot.pot_total()
    );

    for seat in snapshot.seats() {
        let cards = seat_cards(seat, snapshot)
            .map(|faces| faces.iter().map(face).collect::<Vec<_>>().join(" "))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "seat {} -> slot {}: {} ({}) [{}]",
            seat.index,
            display_slot(seat.index, viewer, snapshot.max_players),
            seat.player_name,
            seat.money,
            cards
        );
    }

    let bounds = bet_bounds(snapshot);
    let _ = writeln!(out, "bet range: {}..={}", bounds.min, bounds.max);
    let shortcuts: Vec<String> = presets(snapshot, bounds)
        .iter()
        .map(|p| format!("{}={}", p.label, p.amount))
        .collect();
    let _ = writeln!(out, "presets: {}", shortcuts.join(", "));

    let rank = standing(snapshot);
    let _ = writeln!(out, "standing: #{} of {}", rank.position, rank.total);

    let layout = TableLayout::compute(snapshot, size);
    let _ = writeln!(
        out,
        "layout {}x{}: card width {:.1}, {} seats placed, {} board cards",
        size.width,
        size.height,
        layout.card_width,
        layout.seats.len(),
        layout.board.len()
    );
    out
}
