use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Difficulty;
use crate::food::FoodKind;

/// Draws the welcome screen with the food legend and difficulty prompt.
pub fn render_welcome(frame: &mut Frame<'_>, area: Rect, chosen: Option<Difficulty>) {
    let popup = centered_popup(area, 70, 70);
    frame.render_widget(Clear, popup);

    let [title_row, body_row, footer_row] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(8),
        Constraint::Length(2),
    ])
    .areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from("SNAKE"))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );

    let mut body: Vec<Line<'_>> = FoodKind::ALL
        .iter()
        .map(|kind| Line::from(format!("'{}': {} score", kind.glyph(), kind.reward())))
        .collect();
    body.push(Line::from(""));
    match chosen {
        None => body.push(Line::from(format!(
            "choose difficulty ({} - {}):",
            Difficulty::MIN,
            Difficulty::MAX
        ))),
        Some(difficulty) => {
            body.push(Line::from(format!("difficulty: {difficulty}")));
            body.push(Line::from("press any key to continue the game"));
        }
    }

    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" welcome ")),
        body_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from("Use arrows/WASD to move, [Q] quits"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        footer_row,
    );
}

/// Draws a multi-line message as a centered popup.
pub fn render_banner(frame: &mut Frame<'_>, area: Rect, text: &str) {
    let popup = centered_popup(area, 70, 60);
    frame.render_widget(Clear, popup);

    let lines: Vec<Line<'_>> = text.lines().map(Line::from).collect();
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered()),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
