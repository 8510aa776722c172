//! Game loop thread: runs the simulation engine at a fixed cadence and
//! publishes snapshots.
//!
//! The engine is created inside this thread and never leaves it. Commands
//! arrive via `mpsc` channel; the latest snapshot is stored in shared state
//! for polling. Each update receives the measured wall-clock delta.

use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use tankarena_grid::TileGrid;
use tankarena_sim::SimulationEngine;

use crate::config::LoopConfig;
use crate::state::{GameLoopCommand, SharedSnapshot};

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the front end to use.
pub fn spawn_game_loop(
    grid: TileGrid,
    config: LoopConfig,
    latest_snapshot: SharedSnapshot,
) -> io::Result<mpsc::Sender<GameLoopCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("tankarena-game-loop".into())
        .spawn(move || {
            let engine = SimulationEngine::new(grid, config.sim);
            run_game_loop(engine, cmd_rx, &latest_snapshot, config.tick_interval);
        })?;

    Ok(cmd_tx)
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
    tick_interval: Duration,
) {
    let mut next_tick_time = Instant::now();
    let mut last_update = next_tick_time;

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&mut engine, &cmd_rx) {
            tracing::info!(ticks = engine.time().tick, "game loop stopped");
            return;
        }

        // 2. Advance one tick with the measured delta
        let now = Instant::now();
        let dt = now.duration_since(last_update).as_secs_f32();
        last_update = now;
        let snapshot = engine.update(dt);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        let (deadline, sleep) = schedule(next_tick_time, Instant::now(), tick_interval);
        next_tick_time = deadline;
        if !sleep.is_zero() {
            std::thread::sleep(sleep);
        }
    }
}

/// Queue every pending command. Returns false when the loop should stop.
fn drain_commands(engine: &mut SimulationEngine, cmd_rx: &mpsc::Receiver<GameLoopCommand>) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

/// Next deadline and how long to sleep until it. When more than two ticks
/// behind, the deadline snaps to `now` instead of trying to catch up.
fn schedule(deadline: Instant, now: Instant, interval: Duration) -> (Instant, Duration) {
    let next = deadline + interval;
    if next > now {
        (next, next - now)
    } else if now - next > interval * 2 {
        (now, Duration::ZERO)
    } else {
        (next, Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tankarena_core::commands::PlayerCommand;
    use tankarena_core::enums::SessionState;
    use tankarena_core::state::GameStateSnapshot;
    use tankarena_grid::parse_map;
    use tankarena_sim::SimConfig;

    const ROOM: &str = "######\n#P..E#\n#....#\n######\n";

    fn wait_for(
        shared: &SharedSnapshot,
        predicate: impl Fn(&GameStateSnapshot) -> bool,
    ) -> Option<GameStateSnapshot> {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let Some(snapshot) = shared.lock().unwrap().clone() {
                if predicate(&snapshot) {
                    return Some(snapshot);
                }
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        let mut engine = SimulationEngine::new(parse_map(ROOM).unwrap(), SimConfig::default());

        tx.send(GameLoopCommand::Player(PlayerCommand::TogglePause))
            .unwrap();
        assert!(drain_commands(&mut engine, &rx));
        assert_eq!(engine.update(0.0).state, SessionState::Paused);

        tx.send(GameLoopCommand::Player(PlayerCommand::TogglePause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();
        assert!(!drain_commands(&mut engine, &rx));
        assert_eq!(engine.update(0.0).state, SessionState::Playing);

        drop(tx);
        assert!(!drain_commands(&mut engine, &rx), "Disconnect stops the loop");
    }

    #[test]
    fn test_schedule_sleeps_until_deadline() {
        let interval = Duration::from_millis(10);
        let start = Instant::now();
        let (deadline, sleep) = schedule(start, start + Duration::from_millis(4), interval);
        assert_eq!(deadline, start + interval);
        assert_eq!(sleep, Duration::from_millis(6));
    }

    #[test]
    fn test_schedule_resets_when_far_behind() {
        let interval = Duration::from_millis(10);
        let start = Instant::now();

        let slightly_late = start + Duration::from_millis(15);
        let (deadline, sleep) = schedule(start, slightly_late, interval);
        assert_eq!(deadline, start + interval, "Small lag is caught up");
        assert!(sleep.is_zero());

        let far_behind = start + Duration::from_millis(100);
        let (deadline, sleep) = schedule(start, far_behind, interval);
        assert_eq!(deadline, far_behind);
        assert!(sleep.is_zero());
    }

    #[test]
    fn test_loop_publishes_snapshots_and_obeys_commands() {
        let shared: SharedSnapshot = Arc::new(Mutex::new(None));
        let config = LoopConfig {
            sim: SimConfig::default(),
            tick_interval: Duration::from_millis(2),
        };
        let tx = spawn_game_loop(parse_map(ROOM).unwrap(), config, shared.clone()).unwrap();

        let first = wait_for(&shared, |s| s.time.tick > 0).expect("loop produced no snapshot");
        assert_eq!(first.state, SessionState::Playing);
        assert!(first.player.is_some());

        tx.send(GameLoopCommand::Player(PlayerCommand::TogglePause))
            .unwrap();
        let paused = wait_for(&shared, |s| s.state == SessionState::Paused);
        assert!(paused.is_some(), "pause never took effect");

        tx.send(GameLoopCommand::Shutdown).unwrap();
    }
}
