//! TUI rendering with ratatui
//!
//! Board, palette and message panels for the Mastermind interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Code, Color as PegColor, MAX_TURNS, MatchKind, NUM_PEGS, Outcome, Score};
use crate::output::board::{SEPARATOR, mark_glyph};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Terminal color for a peg
const fn peg_color(color: PegColor) -> Color {
    match color {
        PegColor::Red => Color::Red,
        PegColor::Blue => Color::LightBlue,
        PegColor::Green => Color::Green,
        PegColor::Yellow => Color::Yellow,
        PegColor::Magenta => Color::Magenta,
        PegColor::Cyan => Color::Cyan,
    }
}

fn peg_span(color: PegColor) -> Span<'static> {
    Span::styled(
        format!("● {}", color.digit()),
        Style::default()
            .fg(peg_color(color))
            .add_modifier(Modifier::BOLD),
    )
}

fn mark_span(mark: MatchKind) -> Span<'static> {
    let style = match mark {
        MatchKind::Exact => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        MatchKind::ColorOnly => Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD),
        MatchKind::None => Style::default().fg(Color::DarkGray),
    };
    Span::styled(mark_glyph(mark).to_string(), style)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND - Break the Code")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn placeholder_line() -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut spans = Vec::with_capacity(2 * NUM_PEGS + 2);
    spans.push(Span::raw("    "));
    for _ in 0..NUM_PEGS {
        spans.push(Span::styled("○   ", dim));
    }
    spans.push(Span::styled(SEPARATOR, dim));
    spans.push(Span::styled(["_"; NUM_PEGS].join(" "), dim));
    Line::from(spans)
}

fn guess_line(turn: usize, guess: &Code, score: &Score) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{turn:>2}: "),
        Style::default().fg(Color::DarkGray),
    )];
    for &peg in guess.pegs() {
        spans.push(peg_span(peg));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw(SEPARATOR));
    for (i, &mark) in score.marks().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(mark_span(mark));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let mut lines: Vec<Line> = Vec::with_capacity(MAX_TURNS + 2);

    for _ in game.guesses().len()..MAX_TURNS {
        lines.push(placeholder_line());
    }

    for (i, (guess, score)) in game.guesses().iter().zip(game.scores()).enumerate().rev() {
        lines.push(guess_line(i + 1, guess, score));
    }

    if let Some(status) = app.status() {
        let color = if game.outcome() == Outcome::Won {
            Color::Green
        } else {
            Color::Red
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            status,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Palette and legend
            Constraint::Length(3), // Turns gauge
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_palette(f, chunks[0]);
    render_turns(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_palette(f: &mut Frame, area: Rect) {
    let colors: Vec<Span> = PegColor::ALL
        .iter()
        .flat_map(|&c| [peg_span(c), Span::raw("  ")])
        .collect();

    let content = vec![
        Line::from(colors),
        Line::from(""),
        Line::from(vec![
            mark_span(MatchKind::Exact),
            Span::raw(" right color, right place"),
        ]),
        Line::from(vec![
            mark_span(MatchKind::ColorOnly),
            Span::raw(" right color, wrong place"),
        ]),
    ];

    let palette = Paragraph::new(content).block(
        Block::default()
            .title(" Colors ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::White)),
    );
    f.render_widget(palette, area);
}

fn render_turns(f: &mut Frame, app: &App, area: Rect) {
    let used = app.game.turns_taken();
    let percent = (used * 100 / MAX_TURNS).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Turns ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{MAX_TURNS} used"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            Color::Green,
        ),
        InputMode::Guessing => (" Your Guess (1-6, Enter to submit) ", Color::Yellow),
    };

    let mut spans: Vec<Span> = app
        .input
        .iter()
        .flat_map(|&c| [peg_span(c), Span::raw(" ")])
        .collect();
    for _ in app.input.len()..NUM_PEGS {
        spans.push(Span::styled("○   ", Style::default().fg(Color::DarkGray)));
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(25),
            Constraint::Percentage(40),
        ])
        .split(area);

    let stats = app.stats();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        stats.total_games,
        stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let turns_text = format!("Turns left: {}", app.game.turns_remaining());
    f.render_widget(
        Paragraph::new(turns_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if app.input_mode == InputMode::GameOver {
        "q: Quit | n: New Game"
    } else {
        "q: Quit | n: New Game | ⌫: Undo peg | Enter: Submit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::SessionConfig;
    use crate::core::ScoringRule;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_board_and_panels() {
        let app = App::new(SessionConfig::new(Some(3), ScoringRule::Standard));
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("MASTERMIND"));
        assert!(text.contains("Board"));
        assert!(text.contains("Colors"));
        assert!(text.contains("0/10 used"));
    }

    #[test]
    fn draws_status_after_win() {
        let mut app = App::new(SessionConfig::new(Some(3), ScoringRule::Standard));
        let answer = *app.game.answer();
        for &peg in answer.pegs() {
            app.push_peg(peg.digit());
        }
        app.submit_guess();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        assert!(buffer_text(&terminal).contains("You Won!"));
    }

    #[test]
    fn guess_line_shows_turn_and_marks() {
        let guess: Code = "1234".parse().unwrap();
        let line = guess_line(3, &guess, &Score::from_counts(1, 1));
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();

        assert!(text.starts_with(" 3: "));
        assert!(text.ends_with("# * . ."));
    }
}
