use std::collections::HashMap;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::clock::Sleeper;
use crate::game::Invasion;
use crate::sprites;

const FRAME_COLOR: Color = Color::Rgb(96, 210, 132);
const SHIP_COLOR: Color = Color::Rgb(96, 255, 128);
const ALIEN_COLOR: Color = Color::Rgb(196, 144, 255);
const STAR_COLOR: Color = Color::Rgb(68, 74, 110);

/// Draw one frame. Takes the game mutably so the play control can record
/// where it landed; click hits are tested against that rect.
pub fn render<S: Sleeper>(frame: &mut Frame, game: &mut Invasion<S>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(FRAME_COLOR))
        .title(" 👾 FLEETFALL ")
        .title_style(
            Style::default()
                .fg(Color::Rgb(150, 255, 170))
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(inner);

    render_status(frame, game, chunks[0]);

    let field = chunks[1];
    if field.width > 0 && field.height > 0 {
        let lines = render_field(game, field.width as usize, field.height as usize);
        frame.render_widget(Paragraph::new(lines), field);
    }

    render_help(frame, game, chunks[2]);

    if game.stats.game_active {
        game.play_button = None;
    } else {
        game.play_button = Some(render_play_button(frame, field));
    }
}

fn render_status<S: Sleeper>(frame: &mut Frame, game: &Invasion<S>, area: Rect) {
    let sb = &game.scoreboard;
    let divider = Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60)));
    let status = Line::from(vec![
        Span::styled(
            format!(" {}", sb.ships_text),
            Style::default().fg(SHIP_COLOR).add_modifier(Modifier::BOLD),
        ),
        divider.clone(),
        Span::styled(
            format!("Score: {} ", sb.score_text),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        divider.clone(),
        Span::styled(
            format!("High: {} ", sb.high_score_text),
            Style::default().fg(Color::Cyan),
        ),
        divider,
        Span::styled(
            format!("Level: {}", sb.level_text),
            Style::default().fg(Color::Green),
        ),
    ]);
    frame.render_widget(Paragraph::new(status), area);
}

/// Rasterize the battlefield into braille cells. Logical pixels scale to
/// whatever size the field has this frame, so a resized terminal squeezes
/// the picture instead of changing the game.
fn render_field<S: Sleeper>(game: &Invasion<S>, width: usize, height: usize) -> Vec<Line<'static>> {
    let bw = (width * 2) as i32;
    let bh = (height * 4) as i32;
    let sx = bw as f32 / game.settings.screen_width.max(1) as f32;
    let sy = bh as f32 / game.settings.screen_height.max(1) as f32;

    let bg = game.settings.bg_color;
    let mut grid: Vec<Vec<(char, Style)>> =
        vec![vec![(' ', Style::default().bg(bg)); width]; height];

    let mut star_dots: HashMap<(usize, usize), u8> = HashMap::new();
    for &(x, y) in &game.stars {
        sprites::set_dot(
            &mut star_dots,
            (x as f32 * sx) as i32,
            (y as f32 * sy) as i32,
            bw,
            bh,
        );
    }
    sprites::write_layer(&mut grid, &star_dots, width, height, STAR_COLOR, bg, false);

    let mask = if (game.tick / 20) % 2 == 0 {
        sprites::ALIEN
    } else {
        sprites::ALIEN_ALT
    };
    let mut alien_dots = HashMap::new();
    for alien in &game.fleet {
        sprites::blit_mask(&mut alien_dots, mask, alien.rect, sx, sy, bw, bh);
    }
    sprites::write_layer(&mut grid, &alien_dots, width, height, ALIEN_COLOR, bg, false);

    let mut bullet_dots = HashMap::new();
    for bullet in &game.bullets {
        sprites::fill_rect(&mut bullet_dots, bullet.rect, sx, sy, bw, bh);
    }
    sprites::write_layer(
        &mut grid,
        &bullet_dots,
        width,
        height,
        game.settings.bullet_color,
        bg,
        true,
    );

    let mut ship_dots = HashMap::new();
    sprites::blit_mask(&mut ship_dots, sprites::SHIP, game.ship.rect, sx, sy, bw, bh);
    sprites::write_layer(&mut grid, &ship_dots, width, height, SHIP_COLOR, bg, true);

    grid.into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|(ch, style)| Span::styled(ch.to_string(), style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

/// Centered play control over the field. Returns the cell rect it covered
/// so clicks can be matched against it.
fn render_play_button(frame: &mut Frame, field: Rect) -> Rect {
    let w = 24.min(field.width);
    let h = 5.min(field.height);
    let x = field.x + field.width.saturating_sub(w) / 2;
    let y = field.y + field.height.saturating_sub(h) / 2;
    let button = Rect::new(x, y, w, h);

    frame.render_widget(Clear, button);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Rgb(150, 255, 170)))
        .style(Style::default().bg(Color::Rgb(10, 28, 16)));
    let inner = block.inner(button);
    frame.render_widget(block, button);

    let body = vec![
        Line::from(Span::styled(
            "▶  P L A Y",
            Style::default()
                .fg(Color::Rgb(180, 255, 195))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "click to launch",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(body).alignment(Alignment::Center),
        inner,
    );

    button
}

fn render_help<S: Sleeper>(frame: &mut Frame, game: &Invasion<S>, area: Rect) {
    let divider = Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60)));
    let help = if game.stats.game_active {
        Line::from(vec![
            Span::styled(" ← → Move ", Style::default().fg(Color::DarkGray)),
            divider.clone(),
            Span::styled(
                "Space Fire ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            divider,
            Span::styled("Q Quit", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::styled(" Click ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "▶ PLAY",
                Style::default()
                    .fg(Color::Rgb(150, 255, 170))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to launch ", Style::default().fg(Color::DarkGray)),
            divider,
            Span::styled("Q Quit", Style::default().fg(Color::DarkGray)),
        ])
    };
    frame.render_widget(Paragraph::new(help), area);
}
