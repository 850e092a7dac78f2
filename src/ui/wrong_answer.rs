use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::flag_glyph;
use crate::app::App;
use crate::quiz::Randomizer;

pub fn render<R: Randomizer>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let Ok(country) = app.quiz().last_correct_country() else {
        return;
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("The correct answer for {} was:", country),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            flag_glyph(app, country),
            Style::default().bold(),
        )),
        Line::from(""),
        Line::from("enter to continue".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::Red)
                .title(" Wrong "),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);
}
