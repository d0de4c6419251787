//! TUI rendering with ratatui
//!
//! Layout and widgets for the interactive word finder.

use super::app::{App, MessageStyle};
use crate::output::formatters::create_progress_bar;
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
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Matches
            Constraint::Percentage(40), // Letters, coverage, history, messages
        ])
        .split(chunks[1]);

    render_matches(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 LETTERBANK - What can these letters spell?")
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

fn render_matches(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(" Words ({}) ", app.matches.len());

    let items: Vec<ListItem> = if let Some(problem) = app.problem {
        vec![ListItem::new(format!("Waiting for input: {problem}"))
            .style(Style::default().fg(Color::DarkGray))]
    } else if app.matches.is_empty() {
        vec![ListItem::new("No words can be spelled from these letters")
            .style(Style::default().fg(Color::Yellow))]
    } else {
        let longest = app.letters.total();
        app.matches
            .iter()
            .skip(app.scroll)
            .map(|word| {
                // Words using every letter stand out.
                let style = if word.len() == longest {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                let shown = if word.is_empty() { "''" } else { word.as_str() };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<12}", shown.to_uppercase()), style),
                    Span::styled(
                        format!(" {} letters", word.len()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35), // Letter counts
            Constraint::Length(3),      // Coverage gauge
            Constraint::Percentage(30), // History
            Constraint::Min(3),         // Messages
        ])
        .split(area);

    render_letters(f, app, chunks[0]);
    render_coverage(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_letters(f: &mut Frame, app: &App, area: Rect) {
    let max = app.letters.iter().map(|(_, count)| count).max().unwrap_or(0);

    let lines: Vec<Line> = app
        .letters
        .iter()
        .map(|(letter, count)| {
            let bar = create_progress_bar(f64::from(count), f64::from(max), 12);
            Line::from(vec![
                Span::styled(
                    format!(" {} ", letter.as_char().to_ascii_uppercase()),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(bar, Style::default().fg(Color::Cyan)),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_coverage(f: &mut Frame, app: &App, area: Rect) {
    let coverage = app.coverage();
    let percent = ((coverage * 100.0).min(100.0)) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Word List Coverage ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{}/{} words", app.matches.len(), app.dict.len()));

    f.render_widget(gauge, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(5)
        .enumerate()
        .map(|(i, entry)| {
            ListItem::new(format!(
                "{}: {} → {} words",
                app.history.len() - i,
                entry.normalized.to_uppercase(),
                entry.match_count
            ))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
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
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Letters | Enter: save  Ctrl-U: undo  Ctrl-L: clear ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let filter = Paragraph::new(format!("Filter: {}", app.matching.filter))
        .alignment(Alignment::Center);
    f.render_widget(filter, chunks[0]);

    let dict = Paragraph::new(format!("Words: {}", app.dict.len())).alignment(Alignment::Center);
    f.render_widget(dict, chunks[1]);

    let help = Paragraph::new("Esc: Quit | TAB: Filter | ↑/↓: Scroll")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
