use std::collections::VecDeque;
use std::io;

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::config::{
    GLYPH_FOOD_HIGH, GLYPH_FOOD_LOW, GLYPH_FOOD_MEDIUM, GLYPH_SNAKE_DOWN, GLYPH_SNAKE_LEFT,
    GLYPH_SNAKE_RIGHT, GLYPH_SNAKE_UP, GridSize, LOG_PANEL_HEIGHT,
};
use crate::input::Direction;
use crate::snake::{Position, Snake};
use crate::ui::menu::render_banner;

const GAME_TITLE: &str = " Snake Game ";
const LOG_TITLE: &str = " Log ";

/// Where a message passed to [`Canvas::show_message`] is displayed.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Placement {
    /// Bottom border of the board: score and difficulty.
    Status,
    /// Appended to the log panel under the board.
    Log,
    /// Centered popup over the board.
    Banner,
}

/// Drawing surface the game loop paints on.
pub trait Canvas {
    /// Paints `glyph` at a board cell.
    fn draw_cell(&mut self, position: Position, glyph: char);

    /// Blanks a board cell.
    fn clear_cell(&mut self, position: Position);

    /// Blanks every board cell and drops any banner.
    fn clear(&mut self);

    fn show_message(&mut self, text: &str, placement: Placement);

    /// Presents everything drawn since the last flush.
    fn flush(&mut self) -> io::Result<()>;
}

/// Paints the snake and erases the trail it leaves behind.
///
/// Holds the tail position drawn by the previous paint so it can be blanked
/// once the tail has been recycled into the head.
#[derive(Debug, Default)]
pub struct SnakePainter {
    last_tail: Option<Position>,
}

impl SnakePainter {
    pub fn paint<C: Canvas + ?Sized>(&mut self, snake: &Snake, canvas: &mut C) {
        if let Some(tail) = self.last_tail.take() {
            canvas.clear_cell(tail);
        }

        for segment in snake.segments() {
            canvas.draw_cell(segment.position, segment_glyph(segment.direction));
        }

        self.last_tail = Some(snake.tail().position);
    }
}

#[must_use]
pub fn segment_glyph(direction: Direction) -> char {
    match direction {
        Direction::Up => GLYPH_SNAKE_UP,
        Direction::Down => GLYPH_SNAKE_DOWN,
        Direction::Left => GLYPH_SNAKE_LEFT,
        Direction::Right => GLYPH_SNAKE_RIGHT,
    }
}

fn glyph_style(glyph: char) -> Style {
    match glyph {
        GLYPH_FOOD_LOW => Style::new().fg(Color::Yellow),
        GLYPH_FOOD_MEDIUM => Style::new().fg(Color::LightRed),
        GLYPH_FOOD_HIGH => Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        _ => Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
    }
}

/// In-memory board, log and banner contents.
///
/// Board cells are kept in a ratatui [`Buffer`] addressed in board
/// coordinates; [`render`] copies them into a frame.
#[derive(Debug, Clone)]
pub struct BoardView {
    bounds: GridSize,
    cells: Buffer,
    status: String,
    log: VecDeque<String>,
    banner: Option<String>,
}

impl BoardView {
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self {
            bounds,
            cells: Buffer::empty(Rect::new(0, 0, bounds.width, bounds.height)),
            status: String::new(),
            log: VecDeque::new(),
            banner: None,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns the glyph drawn at `position`, or `None` for a blank cell.
    #[must_use]
    pub fn glyph_at(&self, position: Position) -> Option<char> {
        let cell = self.cells.cell(cell_coords(position)?)?;
        cell.symbol().chars().next().filter(|glyph| *glyph != ' ')
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the log panel lines, oldest first.
    pub fn log_lines(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }

    #[must_use]
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }
}

impl Canvas for BoardView {
    fn draw_cell(&mut self, position: Position, glyph: char) {
        let Some(coords) = cell_coords(position) else {
            return;
        };
        if let Some(cell) = self.cells.cell_mut(coords) {
            cell.set_char(glyph).set_style(glyph_style(glyph));
        }
    }

    fn clear_cell(&mut self, position: Position) {
        let Some(coords) = cell_coords(position) else {
            return;
        };
        if let Some(cell) = self.cells.cell_mut(coords) {
            cell.reset();
        }
    }

    fn clear(&mut self) {
        self.cells.reset();
        self.banner = None;
    }

    fn show_message(&mut self, text: &str, placement: Placement) {
        match placement {
            Placement::Status => text.clone_into(&mut self.status),
            Placement::Log => {
                while self.log.len() >= log_capacity() {
                    let _ = self.log.pop_front();
                }
                self.log.push_back(text.to_owned());
            }
            Placement::Banner => self.banner = Some(text.to_owned()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn log_capacity() -> usize {
    usize::from(LOG_PANEL_HEIGHT.saturating_sub(2)).max(1)
}

fn cell_coords(position: Position) -> Option<(u16, u16)> {
    Some((
        u16::try_from(position.x).ok()?,
        u16::try_from(position.y).ok()?,
    ))
}

/// Renders the board, the log panel and any banner into a frame.
pub fn render(frame: &mut Frame<'_>, view: &BoardView) {
    let bounds = view.bounds();
    let [column] = Layout::horizontal([Constraint::Length(bounds.width)])
        .flex(Flex::Center)
        .areas(frame.area());
    let [board_area, log_area] = Layout::vertical([
        Constraint::Length(bounds.height),
        Constraint::Length(LOG_PANEL_HEIGHT),
    ])
    .flex(Flex::Center)
    .areas(column);

    frame.render_widget(
        Block::bordered()
            .title(Line::from(GAME_TITLE).centered())
            .title_bottom(Line::from(view.status())),
        board_area,
    );
    copy_board_cells(frame.buffer_mut(), board_area, view);

    let log: Vec<Line<'_>> = view.log_lines().map(Line::from).collect();
    frame.render_widget(
        Paragraph::new(log).block(Block::bordered().title(Line::from(LOG_TITLE).centered())),
        log_area,
    );

    if let Some(banner) = view.banner() {
        render_banner(frame, board_area, banner);
    }
}

fn copy_board_cells(target: &mut Buffer, area: Rect, view: &BoardView) {
    let bounds = view.bounds();
    let interior_width = bounds.width.saturating_sub(1).min(area.width.saturating_sub(1));
    let interior_height = bounds.height.saturating_sub(1).min(area.height.saturating_sub(1));

    for y in 1..interior_height {
        for x in 1..interior_width {
            let Some(source) = view.cells.cell((x, y)) else {
                continue;
            };
            if let Some(cell) = target.cell_mut((area.x + x, area.y + y)) {
                *cell = source.clone();
            }
        }
    }
}
