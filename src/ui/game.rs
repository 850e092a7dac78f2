use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::flag_glyph;
use crate::app::App;
use crate::models::Phase;
use crate::quiz::{CHOICES_PER_ROUND, Randomizer};

const SLOT_LABELS: [char; CHOICES_PER_ROUND] = ['1', '2', '3', '4'];

pub fn render<R: Randomizer>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let quiz = app.quiz();
    render_prompt(frame, chunks[0], quiz.current_question_country());
    render_counter(frame, chunks[1], "Remaining", quiz.remaining());
    render_flags(frame, chunks[2], app);
    render_counter(frame, chunks[3], "Score", quiz.score());
    render_controls(frame, chunks[4], app.phase());
}

fn render_prompt(frame: &mut Frame, area: Rect, country: &str) {
    let content = vec![
        Line::from("Tap the flag of".fg(Color::Gray).bold()),
        Line::from(Span::styled(
            country,
            Style::default().fg(Color::White).bold(),
        )),
    ];
    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_counter(frame: &mut Frame, area: Rect, label: &str, value: usize) {
    let widget = Paragraph::new(format!("{}: {}", label, value))
        .alignment(Alignment::Center)
        .fg(Color::Cyan)
        .bold();
    frame.render_widget(widget, area);
}

fn render_flags<R: Randomizer>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let rows = Layout::vertical([Constraint::Fill(1), Constraint::Fill(1)]).split(area);
    let choices = app.quiz().current_choices();

    for (index, country) in choices.iter().enumerate() {
        let row = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
            .split(rows[index / 2]);
        let is_selected = app.phase() == Phase::Playing && index == app.selected_choice();
        render_flag_button(frame, row[index % 2], index, flag_glyph(app, country), is_selected);
    }
}

fn render_flag_button(frame: &mut Frame, area: Rect, index: usize, glyph: &str, selected: bool) {
    let border_style = if selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", SLOT_LABELS[index]));

    let inner_height = area.height.saturating_sub(2);
    let mut lines: Vec<Line> = (0..inner_height.saturating_sub(1) / 2)
        .map(|_| Line::from(""))
        .collect();
    lines.push(Line::from(Span::styled(glyph, Style::default().bold())));

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(block);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, phase: Phase) {
    let text = match phase {
        Phase::Playing => "arrows/hjkl move  ·  enter pick  ·  1-4 pick  ·  q quit",
        Phase::ShowingWrongAnswer => "enter continue  ·  q quit",
        Phase::GameOver => "enter play again  ·  q quit",
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
