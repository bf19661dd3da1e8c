use std::io::{self, BufRead, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskboard::config::Config;
use taskboard::domain::{BoardEvent, BoardEventKind, CardId, StageSet};
use taskboard::Board;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,taskboard=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting taskboard v{}...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config from env, using defaults: {}", e);
        Config::default()
    });

    let stages = StageSet::new(config.stages.clone())?;
    let mut board = Board::with_default_text(stages, config.default_card_text.clone());

    subscribe_renderer(&mut board, config.json_events);

    run(&mut board)?;

    tracing::info!("taskboard shut down");
    Ok(())
}

/// Wires the console renderer: every board event is announced on stdout,
/// either human-readable or as one JSON line per event.
fn subscribe_renderer(board: &mut Board, json_events: bool) {
    for &kind in BoardEventKind::all() {
        if json_events {
            board.subscribe(kind, |event| match serde_json::to_string(event) {
                Ok(line) => println!("{line}"),
                Err(e) => tracing::error!("Failed to serialize event: {}", e),
            });
        } else {
            board.subscribe(kind, announce);
        }
    }
}

fn announce(event: &BoardEvent) {
    let card = event.card();
    match event {
        BoardEvent::CardCreated { .. } => {
            println!("created card #{} in '{}'", card.id, card.stage);
        }
        BoardEvent::CardUpdated { .. } => {
            println!("card #{} is now \"{}\"", card.id, card.text);
        }
        BoardEvent::CardMoved { .. } => {
            println!("card #{} moved to '{}'", card.id, card.stage);
        }
    }
}

/// Interactive loop: translates console commands into board operations.
/// Operations that fail (unknown id, move past an end) change nothing and
/// print nothing; the cause shows up at debug log level only.
fn run(board: &mut Board) -> io::Result<()> {
    print_help(board);
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("new") => {
                board.create_card();
            }
            Some("edit") => {
                let Some(id) = parse_id(parts.next()) else {
                    println!("usage: edit <id> <text>");
                    continue;
                };
                let text = parts.collect::<Vec<_>>().join(" ");
                if let Err(e) = board.update_card_text(id, text) {
                    tracing::debug!(%e, "edit command ignored");
                }
            }
            Some("left") => {
                let Some(id) = parse_id(parts.next()) else {
                    println!("usage: left <id>");
                    continue;
                };
                if let Err(e) = board.move_card_left(id) {
                    tracing::debug!(%e, "left command ignored");
                }
            }
            Some("right") => {
                let Some(id) = parse_id(parts.next()) else {
                    println!("usage: right <id>");
                    continue;
                };
                if let Err(e) = board.move_card_right(id) {
                    tracing::debug!(%e, "right command ignored");
                }
            }
            Some("board") => render(board),
            Some("help") => print_help(board),
            Some("quit") | Some("exit") => break,
            Some(other) => println!("unknown command '{other}', try 'help'"),
            None => {}
        }
    }
    Ok(())
}

fn parse_id(arg: Option<&str>) -> Option<CardId> {
    arg.and_then(|s| s.parse().ok())
}

fn render(board: &Board) {
    for stage in board.stages().names() {
        println!("[{stage}]");
        for card in board.cards_in_stage(stage) {
            println!("  #{:<4} {}", card.id, card.text);
        }
    }
}

fn print_help(board: &Board) {
    let stages: Vec<&str> = board.stages().names().collect();
    println!("stages: {}", stages.join(" -> "));
    println!("commands:");
    println!("  new               create a card in '{}'", board.stages().first());
    println!("  edit <id> <text>  replace a card's text");
    println!("  left <id>         move a card one stage left");
    println!("  right <id>        move a card one stage right");
    println!("  board             show all cards by stage");
    println!("  quit              leave");
}
