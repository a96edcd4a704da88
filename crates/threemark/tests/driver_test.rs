//! Tests for the tokio session driver on virtual time.

use threemark::{
    Cell, Command, Difficulty, GameSession, Mode, Notice, Phase, Player, SessionConfig,
    SessionDriver, SessionEvent, SessionView,
};
use tokio::sync::mpsc::UnboundedReceiver;

async fn next_render(events: &mut UnboundedReceiver<SessionEvent>) -> SessionView {
    match events.recv().await {
        Some(SessionEvent::Render(view)) => view,
        other => panic!("expected a render, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_human_mark_renders_before_computer_reply() {
    let config = SessionConfig::default()
        .with_difficulty(Difficulty::Random)
        .with_seed(4);
    let (commands, mut events, handle) = SessionDriver::spawn(GameSession::new(config));

    let initial = next_render(&mut events).await;
    assert_eq!(initial.phase, Phase::AwaitingHumanMove);

    commands.send(Command::PlayerAction(4)).unwrap();
    let after_human = next_render(&mut events).await;
    assert_eq!(after_human.cells[4], Cell::Occupied(Player::X));
    assert_eq!(after_human.board().count_of(Player::O), 0);
    assert_eq!(after_human.phase, Phase::AwaitingComputerMove);

    let after_computer = next_render(&mut events).await;
    assert_eq!(after_computer.board().count_of(Player::O), 1);
    assert_eq!(after_computer.phase, Phase::AwaitingHumanMove);

    drop(commands);
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_win_notice_arrives_after_reset_render() {
    let config = SessionConfig::default()
        .with_mode(Mode::TwoPlayer)
        .with_seed(4);
    let (commands, mut events, handle) = SessionDriver::spawn(GameSession::new(config));
    next_render(&mut events).await;

    for index in [0, 4, 1, 5, 2] {
        commands.send(Command::PlayerAction(index)).unwrap();
    }
    let mut last = None;
    for _ in 0..5 {
        last = Some(next_render(&mut events).await);
    }
    let last = last.unwrap();
    assert_eq!(last.score.x, 1);
    assert!(last.cells.iter().all(|c| *c == Cell::Empty));

    assert_eq!(
        events.recv().await,
        Some(SessionEvent::Notice(Notice::Win(Player::X)))
    );

    drop(commands);
    handle.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_countdown_forces_single_draw() {
    let config = SessionConfig::default()
        .with_mode(Mode::TwoPlayer)
        .with_timer_minutes(1)
        .with_seed(4);
    let (commands, mut events, handle) = SessionDriver::spawn(GameSession::new(config));
    next_render(&mut events).await;

    commands.send(Command::PlayerAction(0)).unwrap();
    let started = next_render(&mut events).await;
    assert_eq!(started.time_label, "1:00");

    let mut labels = Vec::new();
    let notice = loop {
        match events.recv().await {
            Some(SessionEvent::Render(view)) => labels.push(view),
            Some(SessionEvent::Notice(notice)) => break notice,
            None => panic!("driver stopped before time ran out"),
        }
    };
    assert_eq!(notice, Notice::TimeUp);
    assert_eq!(labels.len(), 60);
    assert_eq!(labels[58].time_label, "0:01");
    let expired = &labels[59];
    assert_eq!(expired.time_label, "0:00");
    assert!(expired.cells.iter().all(|c| *c == Cell::Empty));
    assert_eq!(expired.score.x + expired.score.o, 0);

    drop(commands);
    while let Some(event) = events.recv().await {
        assert!(!matches!(event, SessionEvent::Notice(_)));
    }
    handle.await.unwrap();
}
