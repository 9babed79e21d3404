//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::Feedback;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

const CANDIDATE_LIST_LIMIT: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND ASSISTANT")
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn key_peg_spans(feedback: Feedback, code_length: usize) -> Vec<Span<'static>> {
    let exact = usize::from(feedback.exact());
    let partial = usize::from(feedback.partial());
    let empty = code_length.saturating_sub(exact + partial);

    vec![
        Span::styled("●".repeat(exact), Style::default().fg(Color::Red)),
        Span::styled("○".repeat(partial), Style::default().fg(Color::White)),
        Span::styled("·".repeat(empty), Style::default().fg(Color::DarkGray)),
    ]
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Current Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let content = match &app.current_guess {
        Some(guess) => vec![
            Line::from(vec![
                Span::raw(format!("Guess {}: ", app.history.len() + 1)),
                Span::styled(
                    guess.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!("Rules:   {}", app.rules)),
            Line::from("Type the key pegs you see: exact, then partial"),
        ],
        None if app.input_mode == InputMode::Solved => vec![Line::from("Code cracked!")],
        None => vec![Line::from("No suggestion available")],
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let count = app.candidate_count();

    let content = if count == 0 {
        vec![Line::from("No code fits the feedback")]
    } else if count <= CANDIDATE_LIST_LIMIT {
        let mut lines = vec![Line::from("Remaining:")];
        lines.extend(app.solver.candidates().iter().map(|candidate| {
            let style = if app.current_guess.as_ref() == Some(candidate) {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Green)
            };
            Line::from(vec![Span::raw("  "), Span::styled(candidate.to_string(), style)])
        }));
        lines
    } else {
        vec![
            Line::from(format!("{count} candidates remaining")),
            Line::from(format!(
                "{:.1}% of the {} codes",
                count as f64 / app.total_codes.max(1) as f64 * 100.0,
                app.total_codes
            )),
        ]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let code_length = app.rules.code_length();
    let items: Vec<ListItem> = app
        .history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, entry)| {
            let mut spans = vec![Span::raw(format!("{:2}: {} ", i + 1, entry.guess))];
            spans.extend(key_peg_spans(entry.feedback, code_length));
            spans.push(Span::raw(format!(
                "  {} → {}",
                entry.candidates_before, entry.candidates_after
            )));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let history = List::new(items).block(Block::default().title(" History ").borders(Borders::ALL));
    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.total_codes.max(1);
    let remaining = app.candidate_count();
    let eliminated = total.saturating_sub(remaining);
    let percent = u16::try_from(eliminated * 100 / total).unwrap_or(100);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Codes Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{eliminated}/{total} | {remaining} remain"));

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

    let list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Solved => (
            " 🎉 SOLVED! 🎉 | 'n' new game, 'u' undo, 'q' quit ".to_string(),
            "",
            Color::Green,
        ),
        InputMode::Feedback => (
            " Enter Feedback (exact partial, e.g. '1 2') | TAB for manual guess ".to_string(),
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::ManualGuess => (
            format!(
                " Enter Code to Try ({} digits) | ESC to cancel ",
                app.rules.code_length()
            ),
            app.manual_guess.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
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
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let strategy = Paragraph::new(format!("Strategy: {}", app.strategy.name()))
        .alignment(Alignment::Center);
    f.render_widget(strategy, chunks[0]);

    let stats = Paragraph::new(format!(
        "Solved: {} | Avg: {:.2}",
        app.stats.games_solved,
        app.stats.average_guesses()
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates = Paragraph::new(format!("Candidates: {}", app.candidate_count()))
        .alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help = Paragraph::new("q: Quit | u: Undo | n: New | TAB: Manual")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;
    use crate::solver::StrategyType;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_suggestion_and_counts() {
        let app = App::new(Rules::default(), StrategyType::default());
        let screen = render(&app);

        assert!(screen.contains("1122"));
        assert!(screen.contains("Candidates: 1296"));
    }

    #[test]
    fn lists_small_candidate_sets() {
        let mut app = App::new(Rules::new(2, 2, true).unwrap(), StrategyType::default());
        app.handle_feedback("1 0");
        let screen = render(&app);

        assert!(app.candidate_count() <= CANDIDATE_LIST_LIMIT);
        assert!(screen.contains("Remaining:"));
    }
}
