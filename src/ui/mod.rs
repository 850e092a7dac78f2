mod game;
mod game_over;
mod wrong_answer;

use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::Block,
};

use crate::app::App;
use crate::models::Phase;
use crate::quiz::Randomizer;

/// Shown when the catalogue has no flag for a country.
const MISSING_FLAG: &str = "?";

pub fn render<R: Randomizer>(frame: &mut Frame, app: &App<R>) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    game::render(frame, area, app);

    match app.phase() {
        Phase::Playing => {}
        Phase::ShowingWrongAnswer => wrong_answer::render(frame, popup_area(area), app),
        Phase::GameOver => game_over::render(frame, popup_area(area), app),
    }
}

fn flag_glyph<'a, R: Randomizer>(app: &'a App<R>, country: &str) -> &'a str {
    app.flag(country)
        .map(|flag| flag.glyph.as_str())
        .unwrap_or(MISSING_FLAG)
}

/// A centred box covering the lower part of the screen, like a sheet.
fn popup_area(area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(11)])
        .flex(Flex::End)
        .margin(1)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(row);
    popup
}
