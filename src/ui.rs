//! User interface rendering functions for all application screens.

use color_eyre::eyre::Result;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Text},
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{
    confetti::COLORS,
    maze::{Cell, Grid},
    types::{Position, Screen},
    App,
};

/// Colour of the maze walls.
const WALL_COLOR: Color = Color::LightMagenta;

/// Colour of the goal cell.
const GOAL_COLOR: Color = Color::Red;

/// Colour of the player marker.
const PLAYER_COLOR: Color = Color::White;

/// Smallest width of the hint line under the maze.
const TOOLTIP_WIDTH: u16 = 40;

/// Size of the proposal popup.
const PROMPT_SIZE: (u16, u16) = (50, 10);

/// Size of the celebration card.
const CARD_SIZE: (u16, u16) = (52, 7);

/// Width of a button, brackets included.
const BUTTON_WIDTH: u16 = 9;

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from data conversion failures, such as a maze too large to be
/// laid out on a terminal.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::Maze => in_game(app, frame)?,
        Screen::Proposal => {
            in_game(app, frame)?;
            proposal(app, frame)?;
        }
        Screen::Celebration => celebration(app, frame),
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Returns a `width` by `height` rectangle centred in `area`, shrunk to fit if needed.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);

    area
}

/// Transforms grid positions to canvas coordinates.
///
/// This function converts grid positions to canvas coordinates centred on the origin using the
/// standard transformation formulas: coordinate[i] = (n - 1) / 2 - i for rows (ascending order)
/// and coordinate[i] = i - (n - 1) / 2 for columns (descending order).
///
/// # Errors
///
/// This function may return errors if the grid does not fit in terminal coordinates.
pub(crate) fn to_canvas_coords(positions: &[Position], grid: &Grid) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(grid.rows())?);
    let cols_n = f64::from(u16::try_from(grid.cols())?);

    positions
        .iter()
        .map(|position| {
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(position.row)?);
            let screen_x = f64::from(u16::try_from(position.col)?) - (cols_n - 1.) / 2.;

            Ok((screen_x, screen_y))
        })
        .collect()
}

/// Scales `span` by a percentage in the 0 to 100 range.
fn scaled(span: u16, percent: u16) -> Result<u16> {
    Ok(u16::try_from(
        u32::from(span) * u32::from(percent.min(100)) / 100,
    )?)
}

/// Renders the in-game screen with the maze, the goal and the player.
///
/// This function draws the walls, the goal and the player marker on a [`Canvas`] centred in the
/// terminal, with a hint line at the bottom while the maze is still being walked.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
pub(crate) fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let grid = app.session.grid();
    let maze_rows = u16::try_from(grid.rows())?;
    let maze_columns = u16::try_from(grid.cols())?;

    // Maze and padding area, with the tooltip block below it
    let [maze_content_area, tooltip_full_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(3)]).areas(frame.area());

    let [_, tooltip_area, _] = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(maze_columns.max(TOOLTIP_WIDTH)),
        Constraint::Min(1),
    ])
    .areas(tooltip_full_area);

    let [_, maze_area, _] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(maze_rows),
        Constraint::Min(1),
    ])
    .areas(maze_content_area);

    let [_, space, _] = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(maze_columns),
        Constraint::Min(1),
    ])
    .areas(maze_area);

    // Pre-compute canvas coordinates to handle errors before the paint closure
    let walls: Vec<Position> = grid.positions_of(Cell::Wall).collect();
    let wall_coords = to_canvas_coords(&walls, grid)?;
    let goal_coords = to_canvas_coords(&[grid.goal()], grid)?;
    let player_coords = to_canvas_coords(&[app.session.position()], grid)?;

    let maze = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(Marker::Block)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &wall_coords,
                color: WALL_COLOR,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &goal_coords,
                color: GOAL_COLOR,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &player_coords,
                color: PLAYER_COLOR,
            });
        });

    frame.render_widget(maze, space);

    if app.screen == Screen::Maze {
        let tooltip_block = Block::bordered()
            .title("(wasd / arrows) move / (q) quit")
            .title_alignment(Alignment::Center)
            .style(Style::default().fg(WALL_COLOR))
            .border_type(BorderType::Plain)
            .borders(Borders::TOP);

        frame.render_widget(tooltip_block, tooltip_area);
    }

    Ok(())
}

/// Renders the proposal popup over the solved maze.
///
/// "Yes" is always the highlighted button. "No" sits beside it until it runs away, after which it
/// is drawn wherever its anchor places it inside the popup.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
pub(crate) fn proposal(app: &App, frame: &mut Frame) -> Result<()> {
    let area = centered(frame.area(), PROMPT_SIZE.0, PROMPT_SIZE.1);
    frame.render_widget(Clear, area);

    let block = Block::bordered()
        .title("Will you be my Valentine?")
        .title_bottom("(enter) answer / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(WALL_COLOR))
        .border_type(BorderType::Rounded);
    let inner_space = block.inner(area);
    frame.render_widget(block, area);

    let [message_area, buttons_area] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(1)]).areas(inner_space);

    let message = Text::from(vec![
        Line::raw(""),
        Line::raw("You found your way to the end."),
        Line::raw("I made this little maze just for you."),
    ])
    .centered();
    frame.render_widget(message, message_area);

    let [yes_area, no_area] = Layout::horizontal([Constraint::Length(BUTTON_WIDTH); 2])
        .flex(Flex::Center)
        .spacing(2)
        .areas(buttons_area);

    let yes = Line::styled(
        "[ Yes ]",
        Style::default().fg(Color::White).bg(GOAL_COLOR),
    )
    .centered();
    frame.render_widget(yes, Rect { height: 1, ..yes_area });

    let no_area = match app.proposal.no_anchor() {
        None => Rect { height: 1, ..no_area },
        Some(anchor) => {
            let width = BUTTON_WIDTH.min(buttons_area.width);
            Rect {
                x: buttons_area.x
                    + scaled(buttons_area.width.saturating_sub(width), anchor.x_percent)?,
                y: buttons_area.y
                    + scaled(buttons_area.height.saturating_sub(1), anchor.y_percent)?,
                width,
                height: 1,
            }
        }
    };
    let no = Line::styled("[ No ]", Style::default().fg(WALL_COLOR)).centered();
    frame.render_widget(no, no_area);

    Ok(())
}

/// Renders the celebration screen.
///
/// The confetti canvas covers the whole frame, with the message card drawn on top of it.
pub(crate) fn celebration(app: &App, frame: &mut Frame) {
    clear(frame);

    let groups = app.confetti.points_by_color();
    let confetti = Canvas::default()
        .x_bounds([0., 1.])
        .y_bounds([0., 1.])
        .marker(Marker::Braille)
        .paint(|ctx| {
            for (coords, color) in groups.iter().zip(COLORS) {
                ctx.draw(&Points { coords, color });
            }
        });
    frame.render_widget(confetti, frame.area());

    let area = centered(frame.area(), CARD_SIZE.0, CARD_SIZE.1);
    frame.render_widget(Clear, area);

    let block = Block::bordered()
        .title("<3")
        .title_bottom("(r) play again / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(WALL_COLOR))
        .border_type(BorderType::Rounded);
    let inner_space = block.inner(area);
    frame.render_widget(block, area);

    let message = Text::from(vec![
        Line::raw(""),
        Line::raw("I can't wait to spend Valentine's with you."),
        Line::raw("You mean the world to me."),
    ])
    .centered();
    frame.render_widget(message, inner_space);
}
