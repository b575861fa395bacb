//! Rendering boundary
//!
//! The render pass reads the game state and emits draw primitives through a
//! [`Viewport`]. It never mutates the state and never reads pixels back, so it
//! can run between any two ticks.

pub mod color;
pub mod draw_list;
pub mod shapes;
pub mod transform;
pub mod viewport;

pub use color::{Color, colors, zone_color};
pub use draw_list::{DrawCommand, DrawList};
pub use transform::ViewTransform;
pub use viewport::{TextStyle, Viewport};

use glam::Vec2;

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::geometry::{Aabb, Point, Shape};
use crate::sim::state::{
    CellState, GameState, Slot, bonus_box, cannon_bullet_box, invader_bullet_box,
};

/// Status bar layout, in game-area units
const TOP_LINE: f32 = GAME_AREA_HEIGHT / 20.0;
const SCORE_TITLE_POSITION: Vec2 = Vec2::new(GAME_AREA_WIDTH / 50.0, TOP_LINE);
const SCORE_VALUE_POSITION: Vec2 = Vec2::new(GAME_AREA_WIDTH / 50.0 + 30.0, TOP_LINE);
const LIVES_TITLE_POSITION: Vec2 = Vec2::new(GAME_AREA_WIDTH * 2.0 / 3.0, TOP_LINE);
const LIVES_ICONS_POSITION: Vec2 = Vec2::new(GAME_AREA_WIDTH * 2.0 / 3.0 + 30.0, 5.0);
const LIVES_ICON_SPACING: f32 = CANNON_WIDTH + 2.0;
const GAME_OVER_POSITION: Vec2 = Vec2::new(GAME_AREA_WIDTH / 2.0 - 50.0, GAME_AREA_HEIGHT / 2.0);

pub const SCORE_TEXT: &str = "SCORE";
pub const LIVES_TEXT: &str = "LIVES";
pub const GAME_OVER_TEXT: &str = "GAME OVER";

/// Draw one frame of `state`
pub fn render<V: Viewport + ?Sized>(state: &GameState, viewport: &mut V, settings: &Settings) {
    let mut painter = Painter {
        viewport,
        transform: ViewTransform::from_settings(settings),
        settings,
    };

    painter.viewport.reset();

    status_bar(&mut painter, state);
    defense(&mut painter, state);
    swarm(&mut painter, state);

    let cannon = state.cannon.position;
    painter.fill(cannon, &shapes::CANNON);
    painter.hitbox(state.cannon.hitbox());

    if let Some(pos) = state.cannon_bullet {
        painter.fill_box(cannon_bullet_box(pos));
    }
    if let Some(pos) = state.invader_bullet {
        painter.fill_box(invader_bullet_box(pos));
    }
    if let Some(pos) = state.bonus {
        painter.fill(pos, &shapes::BONUS);
        painter.hitbox(bonus_box(pos));
    }

    if state.is_terminal() {
        painter.text(GAME_OVER_POSITION, GAME_OVER_TEXT, TextStyle::Banner);
    }
}

fn status_bar<V: Viewport + ?Sized>(painter: &mut Painter<'_, V>, state: &GameState) {
    painter.text(SCORE_TITLE_POSITION, SCORE_TEXT, TextStyle::Title);
    painter.text(SCORE_VALUE_POSITION, &state.score.to_string(), TextStyle::Value);
    painter.text(LIVES_TITLE_POSITION, LIVES_TEXT, TextStyle::Title);

    for i in 0..state.cannon.hitpoints {
        let at = LIVES_ICONS_POSITION + Vec2::new(f32::from(i) * LIVES_ICON_SPACING, 0.0);
        painter.fill(at, &shapes::CANNON);
    }
}

/// Intact cells only; destroyed and unused cells leave holes
fn defense<V: Viewport + ?Sized>(painter: &mut Painter<'_, V>, state: &GameState) {
    for bunker in &state.defense {
        for (r, row) in bunker.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if *cell == CellState::Intact {
                    painter.cell(bunker.position + Vec2::new(c as f32, r as f32));
                }
            }
        }
        painter.hitbox(bunker.hitbox());
    }
}

fn swarm<V: Viewport + ?Sized>(painter: &mut Painter<'_, V>, state: &GameState) {
    for slot in state.swarm.grid.iter().flatten() {
        match slot {
            Slot::Empty => {}
            Slot::Active(invader) => {
                painter.fill(invader.position, shapes::invader(invader.tier, invader.frame));
                painter.hitbox(invader.hitbox());
            }
            Slot::Decaying { position, .. } => {
                painter.fill(*position, &shapes::EXPLOSION);
            }
        }
    }
}

/// Applies the viewport transform and colouring rules to every primitive
struct Painter<'a, V: Viewport + ?Sized> {
    viewport: &'a mut V,
    transform: ViewTransform,
    settings: &'a Settings,
}

impl<V: Viewport + ?Sized> Painter<'_, V> {
    fn color(&self, y: f32) -> Color {
        if self.settings.zone_colors {
            zone_color(y)
        } else {
            colors::WHITE
        }
    }

    fn fill(&mut self, origin: Point, shape: &Shape) {
        let color = self.color(origin.y);
        let points = self.transform.shape(shape);
        self.viewport
            .render_filled_shape(self.transform.point(origin), &points, color);
    }

    fn fill_box(&mut self, aabb: Aabb) {
        self.fill(aabb.min, &aabb.outline());
        self.hitbox(aabb);
    }

    fn cell(&mut self, position: Point) {
        let color = self.color(position.y);
        self.viewport.render_point(self.transform.point(position), color);
    }

    fn hitbox(&mut self, aabb: Aabb) {
        if !self.settings.show_hitboxes {
            return;
        }
        let points = self.transform.shape(&aabb.outline());
        self.viewport.render_outline(self.transform.point(aabb.min), &points);
    }

    fn text(&mut self, position: Point, text: &str, style: TextStyle) {
        self.viewport.render_text(self.transform.point(position), text, style);
    }
}
