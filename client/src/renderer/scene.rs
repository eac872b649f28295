//! Builds the per-tick draw lists from a game snapshot

use game_core::{Config, Rect, Snapshot};
use glam::IVec2;
use wgpu::Color;

use super::resources::InstanceData;
use crate::glyphs;

pub const BACKGROUND: Color = Color::BLACK;
pub const FOREGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

pub const CENTER_LINE_WIDTH: i32 = 1;
pub const SCORE_CELL: i32 = 10;
pub const SCORE_TOP: i32 = 10;

/// Everything drawn in one frame, in screen pixels
#[derive(Debug, Clone)]
pub struct Frame {
    pub clear: Color,
    pub rects: Vec<InstanceData>,
    pub ellipses: Vec<InstanceData>,
}

pub fn build_frame(snapshot: &Snapshot, config: &Config) -> Frame {
    let mut rects = vec![
        InstanceData::from_rect(snapshot.left_paddle, FOREGROUND),
        InstanceData::from_rect(snapshot.right_paddle, FOREGROUND),
    ];

    rects.extend(
        center_line(config)
            .into_iter()
            .map(|dash| InstanceData::from_rect(dash, FOREGROUND)),
    );

    let quarter = config.screen_width / 4;
    for (score, center_x) in [
        (snapshot.score.left, quarter),
        (snapshot.score.right, quarter * 3),
    ] {
        rects.extend(
            score_rects(score, center_x)
                .into_iter()
                .map(|cell| InstanceData::from_rect(cell, FOREGROUND)),
        );
    }

    Frame {
        clear: BACKGROUND,
        rects,
        ellipses: vec![InstanceData::from_rect(snapshot.ball, FOREGROUND)],
    }
}

/// Dashes running down the middle of the screen, from the top edge
pub fn center_line(config: &Config) -> Vec<Rect> {
    let x = config.screen_width / 2;
    let stride = (config.dash_length + config.dash_gap).max(1) as usize;
    (0..config.screen_height)
        .step_by(stride)
        .map(|y| Rect::new(x, y, CENTER_LINE_WIDTH, config.dash_length))
        .collect()
}

/// Score digits horizontally centred on `center_x`
pub fn score_rects(score: u32, center_x: i32) -> Vec<Rect> {
    let text = score.to_string();
    let width = glyphs::text_width(&text, SCORE_CELL);
    let origin = IVec2::new(center_x - width / 2, SCORE_TOP);
    glyphs::text_rects(&text, origin, SCORE_CELL)
}
