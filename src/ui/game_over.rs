use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::quiz::Randomizer;

pub fn render<R: Randomizer>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Your score was: {}", app.quiz().score()),
            Style::default().fg(score_color(app.quiz().score())).bold(),
        )),
        Line::from(""),
        Line::from("Close this to play again".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);
}

fn score_color(score: usize) -> Color {
    match score {
        0 => Color::Red,
        1..=9 => Color::Yellow,
        _ => Color::Green,
    }
}
