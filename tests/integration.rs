// Integration tests (native) for the `memory-match` crate.
// These avoid wasm-specific functionality and drive the board and the fireworks
// show through their public API so they run under `cargo test` on the host.

use memory_match::GameConfig;
use memory_match::board::timeline::ManualTimers;
use memory_match::board::{Board, CardFace, Outcome};
use memory_match::fireworks::{Bounds, Painter, Point, Show};
use memory_match::rng::GameRng;

const TOKENS: [&str; 16] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "A", "B", "C", "D", "E", "F", "G", "H",
];

fn full_board() -> Board {
    Board::new(TOKENS, &GameConfig::default().board, GameRng::new(2024))
}

// Eight pairs matched in sequence: counter goes 0 -> 8 and exactly one
// completion arrives 1000ms after the last match.
#[test]
fn eight_pairs_complete_once() {
    let mut board = full_board();
    let mut timers = ManualTimers::new();
    assert_eq!(board.total_pairs(), 8);
    assert_eq!(board.matched_pairs(), 0);

    for i in 0..8 {
        assert_eq!(board.select(i, &mut timers), Outcome::FirstPick(i));
        let outcome = board.select(i + 8, &mut timers);
        assert_eq!(outcome, Outcome::Matched { pairs: i + 1, complete: i == 7 });
        // Pairs spaced out in time; nothing completes early.
        assert!(timers.run_due(&mut board, 250).is_empty());
    }
    assert_eq!(board.matched_pairs(), 8);
    assert!(board.cards().iter().all(|c| c.face() == CardFace::Matched));

    assert!(timers.run_due(&mut board, 749).is_empty());
    assert_eq!(timers.run_due(&mut board, 1), vec![Outcome::Completed]);
    assert!(timers.run_due(&mut board, 10_000).is_empty());
}

#[test]
fn mismatches_along_the_way_leave_counter_alone() {
    let mut board = full_board();
    let mut timers = ManualTimers::new();

    board.select(0, &mut timers);
    assert_eq!(board.select(1, &mut timers), Outcome::Mismatched);
    assert_eq!(board.select(8, &mut timers), Outcome::Ignored);
    assert_eq!(timers.run_due(&mut board, 1500), vec![Outcome::Concealed]);
    assert_eq!(board.matched_pairs(), 0);
    assert_eq!(board.card(0).unwrap().face(), CardFace::Hidden);

    board.select(0, &mut timers);
    assert_eq!(board.select(8, &mut timers), Outcome::Matched { pairs: 1, complete: false });
}

#[test]
fn restart_after_completion_starts_a_fresh_round() {
    let mut board = full_board();
    let mut timers = ManualTimers::new();
    for i in 0..8 {
        board.select(i, &mut timers);
        board.select(i + 8, &mut timers);
    }
    assert_eq!(timers.run_due(&mut board, 1000), vec![Outcome::Completed]);

    board.restart(&mut timers);
    assert_eq!(board.matched_pairs(), 0);
    assert!(!board.is_locked());
    assert!(board.cards().iter().all(|c| c.face() == CardFace::Hidden));
    assert_eq!(timers.run_due(&mut board, 500), vec![Outcome::Reshuffled]);
    assert!(board.cards().iter().all(|c| c.order() < 12));

    // A second full game completes again.
    for i in 0..8 {
        board.select(i, &mut timers);
        board.select(i + 8, &mut timers);
    }
    assert_eq!(timers.run_due(&mut board, 1000), vec![Outcome::Completed]);
}

struct Counter {
    dots: usize,
    min_alpha: f64,
}

impl Painter for Counter {
    fn fade(&mut self, _overlay: &str, _bounds: Bounds) {}

    fn trail<'a, I>(&mut self, _points: I, _color: &str)
    where
        I: IntoIterator<Item = &'a Point>,
    {
    }

    fn dot(&mut self, _at: Point, _radius: f64, _color: &str, alpha: f64) {
        self.dots += 1;
        self.min_alpha = self.min_alpha.min(alpha);
    }
}

#[test]
fn show_runs_for_a_while_without_drawing_dead_sparks() {
    let cfg = GameConfig::default();
    let mut show = Show::new(cfg.fireworks.clone());
    let mut rng = GameRng::new(77);
    let mut painter = Counter { dots: 0, min_alpha: 1.0 };
    let bounds = Bounds { width: 1280.0, height: 720.0 };
    for frame in 0..3_600_u32 {
        show.frame(f64::from(frame) * 16.7, bounds, &mut rng, &mut painter);
        assert!(show.fireworks().len() <= cfg.fireworks.max_fireworks);
        assert!(show.particles().iter().all(|p| p.alpha() > 0.0));
    }
    assert!(painter.dots > 0);
    assert!(painter.min_alpha > 0.0);
}
