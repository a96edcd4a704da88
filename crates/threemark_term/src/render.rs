//! Text rendering of session views and notices.

use threemark::{Mode, Notice, Phase, SessionView};

/// Draws the board, score and status.
pub fn render_view(view: &SessionView) -> String {
    let status = match view.phase {
        Phase::AwaitingComputerMove => "Computer is thinking...".to_string(),
        Phase::AwaitingHumanMove => format!("{} to move", view.to_move),
        Phase::RoundOver => "Round over".to_string(),
    };
    let opponent = match view.mode {
        Mode::TwoPlayer => "two players".to_string(),
        Mode::VsComputer => format!("vs computer ({})", view.difficulty),
    };
    let mut out = format!(
        "\n{}\n\nX {} - {} O   {}   [{}, {} theme]\n{}",
        view.board().display(),
        view.score.x,
        view.score.o,
        view.time_label,
        opponent,
        view.theme,
        status,
    );
    out.push('\n');
    out
}

/// Formats a notice as a banner line.
pub fn render_notice(notice: Notice) -> String {
    format!("*** {} ***", notice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use threemark::{GameSession, Mode, SessionConfig};

    #[test]
    fn test_render_fresh_two_player_session() {
        let session =
            GameSession::new(SessionConfig::default().with_mode(Mode::TwoPlayer).with_seed(0));
        let text = render_view(&session.view());
        assert!(text.contains("1|2|3"));
        assert!(text.contains("X 0 - 0 O"));
        assert!(text.contains("two players"));
        assert!(text.contains("X to move"));
    }

    #[test]
    fn test_render_notices() {
        assert_eq!(render_notice(Notice::Draw), "*** Draw! ***");
        assert_eq!(
            render_notice(Notice::TimeUp),
            "*** Time is up! It's a draw! ***"
        );
    }
}
