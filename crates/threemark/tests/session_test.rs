//! Tests for the turn controller.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use threemark::{
    Cell, Command, Difficulty, Effect, GameRound, GameSession, MAX_MARKS, Mode, Notice, Outcome,
    Phase, Player, SessionConfig, Theme,
};

fn session(mode: Mode) -> GameSession {
    GameSession::new(SessionConfig::default().with_mode(mode).with_seed(17))
}

fn play(session: &mut GameSession, cells: &[usize]) -> Vec<Effect> {
    cells
        .iter()
        .flat_map(|&index| session.on_player_action(index))
        .collect()
}

fn notices(effects: &[Effect]) -> Vec<Notice> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Notify { notice, .. } => Some(*notice),
            _ => None,
        })
        .collect()
}

#[test]
fn test_win_scores_and_restarts_with_winner() {
    let mut session = session(Mode::TwoPlayer);
    let first_round = session.round_id();

    let effects = play(&mut session, &[0, 4, 1, 5, 2]);

    assert_eq!(notices(&effects), vec![Notice::Win(Player::X)]);
    assert_eq!(session.match_state().score().x, 1);
    assert_eq!(session.match_state().score().o, 0);
    assert_eq!(session.match_state().starting_player(), Player::X);
    assert_eq!(session.round_id(), first_round.next());
    assert_eq!(session.round().board().empty_cells().len(), 9);
    assert_eq!(session.round().to_move(), Player::X);
    assert_eq!(session.phase(), Phase::AwaitingHumanMove);
}

#[test]
fn test_notice_follows_timer_cancel() {
    let mut session = session(Mode::TwoPlayer);
    let effects = play(&mut session, &[0, 4, 1, 5, 2]);
    let last_two = &effects[effects.len() - 2..];
    assert_eq!(last_two[0], Effect::CancelTimer);
    assert_eq!(
        last_two[1],
        Effect::Notify {
            notice: Notice::Win(Player::X),
            delay: Duration::from_millis(100),
        }
    );
}

#[test]
fn test_completing_a_line_with_a_fourth_mark() {
    // X at {0,1,3}, O at {4,5,8}; X's fourth mark at 2 evicts first. Only
    // when 3 is the evicted mark does row 0-1-2 survive.
    let mut saw_win = false;
    let mut saw_no_win = false;
    for seed in 0..40 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut round = GameRound::new(Player::X);
        for index in [0, 4, 1, 5, 3, 8] {
            round.place(index, &mut rng).unwrap();
        }
        let placement = round.place(2, &mut rng).unwrap();
        if placement.evicted == Some(3) {
            assert_eq!(round.outcome(), Outcome::Won(Player::X));
            saw_win = true;
        } else {
            assert_eq!(round.outcome(), Outcome::InProgress);
            saw_no_win = true;
        }
    }
    assert!(saw_win && saw_no_win);
}

#[test]
fn test_o_win_hands_computer_the_opening_move() {
    let mut session = session(Mode::TwoPlayer);
    play(&mut session, &[0, 3, 1, 4, 8, 5]);
    assert_eq!(session.match_state().score().o, 1);
    assert_eq!(session.match_state().starting_player(), Player::O);

    let effects = session.on_mode_changed(Mode::VsComputer);
    let round = session.round_id();
    assert_eq!(
        effects,
        vec![
            Effect::CancelTimer,
            Effect::ScheduleComputerMove {
                round,
                delay: Duration::from_millis(500),
            },
        ]
    );
    assert_eq!(session.phase(), Phase::AwaitingComputerMove);

    // Human clicks are ignored while the computer is thinking.
    assert!(session.on_player_action(0).is_empty());
    assert!(session.round().board().is_empty_at(0));

    session.on_computer_turn(round);
    assert_eq!(session.round().board().count_of(Player::O), 1);
    assert_eq!(session.phase(), Phase::AwaitingHumanMove);
    assert_eq!(session.round().to_move(), Player::X);
}

#[test]
fn test_computer_replies_once_per_turn() {
    let mut session = GameSession::new(
        SessionConfig::default()
            .with_difficulty(Difficulty::Random)
            .with_seed(5),
    );
    let effects = session.on_player_action(4);
    let round = session.round_id();
    assert_eq!(
        effects,
        vec![Effect::ScheduleComputerMove {
            round,
            delay: Duration::from_millis(500),
        }]
    );

    session.on_computer_turn(round);
    assert_eq!(session.round().board().count_of(Player::O), 1);

    // A duplicate callback for the same turn does nothing.
    assert!(session.on_computer_turn(round).is_empty());
    assert_eq!(session.round().board().count_of(Player::O), 1);
}

#[test]
fn test_mode_change_supersedes_pending_computer_move() {
    let mut session = session(Mode::VsComputer);
    session.on_player_action(4);
    let stale = session.round_id();

    session.on_mode_changed(Mode::TwoPlayer);
    assert!(session.on_computer_turn(stale).is_empty());
    assert_eq!(session.round().board().empty_cells().len(), 9);
}

#[test]
fn test_reset_clears_round_and_cancels_timer() {
    let mut session = GameSession::new(
        SessionConfig::default()
            .with_mode(Mode::TwoPlayer)
            .with_timer_minutes(2)
            .with_seed(9),
    );
    play(&mut session, &[4, 0, 8]);

    let effects = session.on_reset_requested();
    assert_eq!(effects, vec![Effect::CancelTimer]);
    assert!(session.round().board().cells().iter().all(|c| *c == Cell::Empty));
    assert!(session.round().histories().of(Player::X).is_empty());
    assert!(session.round().histories().of(Player::O).is_empty());
    assert_eq!(session.round().to_move(), session.match_state().starting_player());
}

#[test]
fn test_theme_change_resets_round_and_keeps_score() {
    let mut session = session(Mode::TwoPlayer);
    play(&mut session, &[0, 4, 1, 5, 2, 8]);
    assert_eq!(session.match_state().score().x, 1);

    session.on_theme_changed(Theme::Dark);
    assert_eq!(session.view().theme, Theme::Dark);
    assert_eq!(session.round().board().empty_cells().len(), 9);
    assert_eq!(session.match_state().score().x, 1);
}

#[test]
fn test_countdown_expires_once_at_sixtieth_tick() {
    let mut session = GameSession::new(
        SessionConfig::default()
            .with_mode(Mode::TwoPlayer)
            .with_timer_minutes(1)
            .with_seed(1),
    );
    assert_eq!(session.time_label(), "");

    let effects = session.on_player_action(0);
    let round = session.round_id();
    assert_eq!(effects, vec![Effect::StartTimer { round }]);
    assert_eq!(session.time_label(), "1:00");

    // Later placements in the same round do not restart it.
    assert!(!session
        .on_player_action(4)
        .contains(&Effect::StartTimer { round }));

    for _ in 0..59 {
        assert!(session.on_timer_tick(round).is_empty());
    }
    assert_eq!(session.time_label(), "0:01");

    let effects = session.on_timer_tick(round);
    assert_eq!(notices(&effects), vec![Notice::TimeUp]);
    assert_eq!(session.time_label(), "0:00");
    assert_eq!(session.match_state().score().x, 0);
    assert_eq!(session.match_state().score().o, 0);
    assert_eq!(session.round().board().empty_cells().len(), 9);

    assert!(session.on_timer_tick(round).is_empty());

    let effects = session.on_player_action(2);
    assert_eq!(
        effects,
        vec![Effect::StartTimer {
            round: session.round_id()
        }]
    );
}

#[test]
fn test_no_timer_without_configuration() {
    let mut session = session(Mode::TwoPlayer);
    let effects = session.on_player_action(0);
    assert!(effects.is_empty());
    assert!(session.on_timer_tick(session.round_id()).is_empty());
    assert_eq!(session.view().time_label, "");
}

#[test]
fn test_timer_configuration_applies_to_next_start() {
    let mut session = session(Mode::TwoPlayer);
    assert!(session.handle(Command::TimerConfigured(3)).is_empty());
    let effects = session.on_player_action(0);
    assert_eq!(
        effects,
        vec![Effect::StartTimer {
            round: session.round_id()
        }]
    );
    assert_eq!(session.time_label(), "3:00");
}

#[test]
fn test_mark_count_never_exceeds_cap_under_random_play() {
    let mut clicks = StdRng::seed_from_u64(99);
    for mode in [Mode::TwoPlayer, Mode::VsComputer] {
        let mut session = GameSession::new(
            SessionConfig::default()
                .with_mode(mode)
                .with_difficulty(Difficulty::Random)
                .with_seed(21),
        );
        for _ in 0..400 {
            let mut pending = session.on_player_action(clicks.gen_range(0..9));
            while let Some(effect) = pending.pop() {
                if let Effect::ScheduleComputerMove { round, .. } = effect {
                    pending.extend(session.on_computer_turn(round));
                }
            }

            let round = session.round();
            for player in [Player::X, Player::O] {
                let history = round.histories().of(player);
                assert_eq!(history.len(), round.board().count_of(player));
                assert!(history.len() <= MAX_MARKS);
                for &index in history.indices() {
                    assert_eq!(round.board().get(index), Some(Cell::Occupied(player)));
                }
            }
        }
    }
}
