//! Presentation adapter
//!
//! Translates game state into draw calls: HUD text, the target indicator,
//! the play-field border, entity sprites and the pause overlays. Pure
//! output - nothing here mutates game state. Sprites are procedural
//! rectangles, so no image or font assets are loaded.

use macroquad::prelude::*;

use crate::consts::*;
use crate::sim::{GamePhase, GameState, MonsterKind};

const FONT_SIZE: f32 = 24.0;
const HUD_MARGIN: f32 = 5.0;
const HUD_LINE: f32 = 30.0;

const PLAYER_COLOR: Color = Color::new(0.78, 0.78, 0.85, 1.0);

/// Display color for a monster kind
pub fn kind_color(kind: MonsterKind) -> Color {
    match kind {
        MonsterKind::Blue => Color::from_rgba(20, 176, 235, 255),
        MonsterKind::Green => Color::from_rgba(87, 201, 47, 255),
        MonsterKind::Purple => Color::from_rgba(226, 73, 243, 255),
        MonsterKind::Yellow => Color::from_rgba(243, 157, 20, 255),
    }
}

/// Draw the current frame
pub fn draw(state: &GameState, show_fps: bool) {
    clear_background(BLACK);

    match state.phase {
        GamePhase::Intro => draw_pause("Monster Wrangler", "Press 'Enter' to begin"),
        GamePhase::GameOver => draw_pause(
            &format!("Final Score: {}", state.score),
            "Press 'Enter' to play again",
        ),
        GamePhase::Playing => draw_playfield(state),
    }

    if show_fps {
        draw_text(
            &format!("FPS: {}", get_fps()),
            HUD_MARGIN,
            ARENA_HEIGHT - 10.0,
            20.0,
            GRAY,
        );
    }
}

/// Blocking-pause overlay: two centered lines on black
pub fn draw_pause(main_text: &str, sub_text: &str) {
    draw_centered(main_text, ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0, WHITE);
    draw_centered(sub_text, ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0 + 64.0, WHITE);
}

fn draw_playfield(state: &GameState) {
    let accent = kind_color(state.target_kind);

    // HUD text at fixed anchors
    draw_top_left(&format!("Score: {}", state.score), HUD_MARGIN, HUD_MARGIN, WHITE);
    draw_top_left(
        &format!("Lives: {}", state.player.lives),
        HUD_MARGIN,
        HUD_MARGIN + HUD_LINE,
        WHITE,
    );
    draw_top_left(
        &format!("Current Round: {}", state.round_number),
        HUD_MARGIN,
        HUD_MARGIN + 2.0 * HUD_LINE,
        WHITE,
    );
    draw_top_right(
        &format!("Round Time: {}", state.round_time),
        ARENA_WIDTH - 10.0,
        HUD_MARGIN,
        WHITE,
    );
    draw_top_right(
        &format!("Warps: {}", state.player.warps),
        ARENA_WIDTH - 10.0,
        HUD_MARGIN + HUD_LINE,
        WHITE,
    );
    draw_centered_top("Current Catch", ARENA_WIDTH / 2.0, HUD_MARGIN, WHITE);

    // Target indicator: a framed swatch of the color to catch
    let box_x = ARENA_WIDTH / 2.0 - 32.0;
    draw_rectangle(box_x + 8.0, 38.0, 48.0, 48.0, kind_color(state.target_kind));
    draw_rectangle_lines(box_x, 30.0, 64.0, 64.0, 2.0, accent);

    // Play-field border
    draw_rectangle_lines(
        0.0,
        TOP_MARGIN,
        ARENA_WIDTH,
        ARENA_HEIGHT - TOP_MARGIN - BOTTOM_MARGIN,
        4.0,
        accent,
    );

    for monster in &state.monsters {
        draw_rectangle(
            monster.body.pos.x,
            monster.body.pos.y,
            monster.body.size.x,
            monster.body.size.y,
            kind_color(monster.kind),
        );
    }

    let player = &state.player.body;
    draw_rectangle(player.pos.x, player.pos.y, player.size.x, player.size.y, PLAYER_COLOR);
}

fn draw_top_left(text: &str, x: f32, top: f32, color: Color) {
    let dims = measure_text(text, None, FONT_SIZE as u16, 1.0);
    draw_text(text, x, top + dims.offset_y, FONT_SIZE, color);
}

fn draw_top_right(text: &str, right: f32, top: f32, color: Color) {
    let dims = measure_text(text, None, FONT_SIZE as u16, 1.0);
    draw_text(text, right - dims.width, top + dims.offset_y, FONT_SIZE, color);
}

fn draw_centered_top(text: &str, center_x: f32, top: f32, color: Color) {
    let dims = measure_text(text, None, FONT_SIZE as u16, 1.0);
    draw_text(text, center_x - dims.width / 2.0, top + dims.offset_y, FONT_SIZE, color);
}

fn draw_centered(text: &str, center_x: f32, center_y: f32, color: Color) {
    let dims = measure_text(text, None, FONT_SIZE as u16, 1.0);
    draw_text(
        text,
        center_x - dims.width / 2.0,
        center_y + dims.offset_y / 2.0,
        FONT_SIZE,
        color,
    );
}
