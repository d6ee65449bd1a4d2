//! End-to-end simulation runs.
//!
//! Uses `start_paused` deterministic time: the coordinator's pacing sleeps
//! only advance the clock once every woken player has raced, so each round
//! resolves fully before the next begins and every property below is exact.

use std::collections::HashSet;
use std::time::Duration;

use lastseat::{GameError, GameEvent, GameReport, PlayerId, SimConfig, Simulation};
use tokio::sync::mpsc;

// =========================================================================
// Helpers
// =========================================================================

fn fast_config(players: usize) -> SimConfig {
    let mut config = SimConfig::with_players(players);
    config.pacing.music_min = Duration::from_millis(10);
    config.pacing.music_max = Duration::from_millis(30);
    config.pacing.settle = Duration::from_millis(10);
    config
}

async fn run_to_completion(config: SimConfig) -> (GameReport, Vec<GameEvent>) {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let sim = Simulation::new(config, tx).expect("config should validate");

    let report = tokio::time::timeout(Duration::from_secs(600), sim.run())
        .await
        .expect("simulation must terminate");

    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    (report, events)
}

fn round_starts(events: &[GameEvent]) -> Vec<(u64, usize, usize)> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::RoundStarted {
                round,
                players,
                chairs,
            } => Some((*round, *players, *chairs)),
            _ => None,
        })
        .collect()
}

fn eliminations_in_round(events: &[GameEvent], target: u64) -> Vec<PlayerId> {
    events
        .iter()
        .filter_map(|e| match e {
            GameEvent::Eliminated { round, player } if *round == target => Some(*player),
            _ => None,
        })
        .collect()
}

// =========================================================================
// Setup rejection
// =========================================================================

#[tokio::test]
async fn test_fewer_than_two_players_is_fatal() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let result = Simulation::new(SimConfig::with_players(1), tx);
    assert!(matches!(result, Err(GameError::NotEnoughPlayers(1))));
}

// =========================================================================
// The canonical four-player game
// =========================================================================

#[tokio::test(start_paused = true)]
async fn test_four_players_play_three_rounds() {
    let (report, _events) = run_to_completion(fast_config(4)).await;

    assert_eq!(report.rounds, 3);
    assert_eq!(report.eliminated.len(), 3);

    let winner = report.winner.expect("a winner must be decided");
    assert!(
        !report.eliminated.contains(&winner),
        "the winner was never eliminated"
    );

    let unique: HashSet<_> = report.eliminated.iter().collect();
    assert_eq!(unique.len(), 3, "every elimination id is unique");
}

#[tokio::test(start_paused = true)]
async fn test_rounds_start_with_one_chair_fewer_than_players() {
    let (_report, events) = run_to_completion(fast_config(4)).await;

    assert_eq!(
        round_starts(&events),
        vec![(1, 4, 3), (2, 3, 2), (3, 2, 1)],
        "4 players: 3 chairs, then 2, then the final single chair"
    );
}

#[tokio::test(start_paused = true)]
async fn test_exactly_one_elimination_per_round() {
    let (_report, events) = run_to_completion(fast_config(4)).await;

    for round in 1..=3 {
        assert_eq!(
            eliminations_in_round(&events, round).len(),
            1,
            "round {round} should eliminate exactly one player"
        );
    }
}

#[tokio::test(start_paused = true)]
async fn test_every_chair_is_taken_each_round() {
    let (_report, events) = run_to_completion(fast_config(4)).await;

    for (round, _players, chairs) in round_starts(&events) {
        let seated = events
            .iter()
            .filter(|e| matches!(e, GameEvent::Seated { round: r, .. } if *r == round))
            .count();
        assert_eq!(seated, chairs, "round {round}: every chair gets claimed");
    }
}

#[tokio::test(start_paused = true)]
async fn test_event_ordering() {
    let (_report, events) = run_to_completion(fast_config(4)).await;

    // The winner announcement closes the narration.
    assert!(
        matches!(events.last(), Some(GameEvent::Winner { .. })),
        "last event should be the winner, got {:?}",
        events.last()
    );

    // Within each round: started, then music stops, then its eliminations.
    for round in 1..=3 {
        let started = events
            .iter()
            .position(|e| matches!(e, GameEvent::RoundStarted { round: r, .. } if *r == round))
            .expect("round start present");
        let stopped = events
            .iter()
            .position(|e| matches!(e, GameEvent::MusicStopped { round: r } if *r == round))
            .expect("music stop present");
        let eliminated = events
            .iter()
            .position(|e| matches!(e, GameEvent::Eliminated { round: r, .. } if *r == round))
            .expect("elimination present");

        assert!(started < stopped, "round {round}: start precedes music stop");
        assert!(stopped < eliminated, "round {round}: music stop precedes elimination");
    }
}

// =========================================================================
// Smallest game
// =========================================================================

#[tokio::test(start_paused = true)]
async fn test_two_players_decide_in_one_round() {
    let (report, events) = run_to_completion(fast_config(2)).await;

    assert_eq!(report.rounds, 1);
    assert_eq!(report.eliminated.len(), 1);
    assert_eq!(round_starts(&events), vec![(1, 2, 1)]);
    assert!(report.winner.is_some());
}

// =========================================================================
// Stress: many players, no music pacing
// =========================================================================

#[tokio::test(start_paused = true)]
async fn test_fifty_players_with_zero_music_pacing_terminates() {
    let mut config = SimConfig::with_players(50);
    config.pacing.music_min = Duration::ZERO;
    config.pacing.music_max = Duration::ZERO;
    config.pacing.settle = Duration::from_millis(1);

    let (report, _events) = run_to_completion(config).await;

    let winner = report.winner.expect("a winner must be decided");
    assert_eq!(report.eliminated.len(), 49);
    assert!(!report.eliminated.contains(&winner));

    let unique: HashSet<_> = report.eliminated.iter().collect();
    assert_eq!(unique.len(), 49);

    // One elimination per round when everyone races; a bounded number of
    // extra rounds is tolerated in case of scheduling skew.
    assert!(
        (49..=150).contains(&report.rounds),
        "expected ~49 rounds, got {}",
        report.rounds
    );
}
