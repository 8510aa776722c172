use std::io::{self, BufRead};
use std::process::ExitCode;

use tankarena_app::config::{self, LoopConfig};
use tankarena_app::game_loop;
use tankarena_app::input::{self, ConsoleInput};
use tankarena_app::state::{AppState, GameLoopCommand};
use tankarena_core::commands::PlayerCommand;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .with_writer(io::stderr)
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    init_tracing();

    let map_path = config::map_path();
    let grid = match tankarena_grid::load_map(&map_path) {
        Ok(grid) => grid,
        Err(e) => {
            tracing::error!(path = %map_path.display(), error = %e, "failed to load map");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        path = %map_path.display(),
        width = grid.width(),
        height = grid.height(),
        "map loaded"
    );

    let mut state = AppState::new();
    let loop_config = LoopConfig::from_env();
    match game_loop::spawn_game_loop(grid, loop_config, state.latest_snapshot.clone()) {
        Ok(tx) => state.command_tx = Some(tx),
        Err(e) => {
            tracing::error!(error = %e, "failed to start game loop");
            return ExitCode::FAILURE;
        }
    }

    run_console(&state);
    state.send(GameLoopCommand::Shutdown);
    ExitCode::SUCCESS
}

/// Read words from stdin until `quit` or end of input.
fn run_console(state: &AppState) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!(error = %e, "failed to read stdin");
                return;
            }
        };

        for word in line.split_whitespace() {
            let command = match input::parse_word(word) {
                Some(ConsoleInput::Key(code)) => input::key_command(state.session_state(), code),
                Some(ConsoleInput::Reset) => Some(PlayerCommand::Reset),
                Some(ConsoleInput::Status) => {
                    print_status(state);
                    None
                }
                Some(ConsoleInput::Quit) => return,
                None => {
                    tracing::warn!(word, "unknown input");
                    None
                }
            };

            if let Some(command) = command {
                if !state.send(GameLoopCommand::Player(command)) {
                    tracing::error!("game loop is gone");
                    return;
                }
            }
        }
    }
}

fn print_status(state: &AppState) {
    let Some(snapshot) = state.snapshot() else {
        println!("{{}}");
        return;
    };
    match serde_json::to_string(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::error!(error = %e, "failed to serialise snapshot"),
    }
}
