//! Frame snapshots for renderers
//!
//! A `FrameSnapshot` is a plain copy of everything a renderer draws. It is
//! taken under the engine lock, so renderers never see a half-applied tick.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Mover, Session, WaterSurface};

pub const GAME_PAUSED_TEXT: &str = "Game paused";
pub const GAME_OVER_TEXT: &str = "Game over!";
pub const KEY_TO_CONTINUE_TEXT: &str = "Press the SPACE key to start";

/// Help shown on request
pub const HELP_TEXT: &str = "\
Net Fishing

Your goal is to catch the fishes.
Game ends when you miss 10 fishes.

Control keys:
 F1 - this help
 Space - pause/resume
 left/right - move the boat to left/right
 up/down - move your net to up/down";

/// Boat pose as drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoatView {
    pub x: i32,
    /// Water level under the boat
    pub y: i32,
    /// Hull tilt (radians): surface slope scaled by the following degree
    pub tilt: f64,
    /// Screen y of the hull center, slightly sunk into the water
    pub hull_y: i32,
    pub net_x: i32,
    pub net_y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FishView {
    pub x: i32,
    pub y: i32,
    pub heading_right: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BubbleView {
    pub x: i32,
    pub y: i32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub iteration: u64,
    pub surface: WaterSurface,
    pub boat: BoatView,
    pub fishes: Vec<FishView>,
    pub bubbles: Vec<BubbleView>,
    pub fishes_caught: u32,
    pub fishes_missed: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl FrameSnapshot {
    pub fn capture(session: &Session) -> Self {
        let model = session.model();
        let boat = &model.boat;
        let boat_x = boat.x();
        let boat_y = boat.boat_y(&model.surface);
        let (net_x, net_y) = boat.net_center(&model.surface);

        Self {
            iteration: model.iteration_counter,
            surface: model.surface,
            boat: BoatView {
                x: boat_x,
                y: boat_y,
                tilt: model.surface.surface_angle_at(boat_x) * SURFACE_FOLLOWING_DEGREE,
                hull_y: boat_y - (BOAT_HEIGHT as f64 * (0.5 - SINKING_DEGREE)) as i32,
                net_x,
                net_y,
            },
            fishes: model
                .fishes
                .iter()
                .map(|f| {
                    let (x, y) = f.visible_pos();
                    FishView {
                        x,
                        y,
                        heading_right: f.heading_right(),
                    }
                })
                .collect(),
            bubbles: model
                .bubbles
                .iter()
                .map(|b| {
                    let (x, y) = b.visible_pos();
                    BubbleView { x, y }
                })
                .collect(),
            fishes_caught: model.fishes_caught,
            fishes_missed: model.fishes_missed,
            paused: session.is_paused(),
            game_over: session.is_game_over(),
        }
    }

    /// Water level at every scene column
    pub fn water_profile(&self) -> Vec<i32> {
        (0..SCENE_WIDTH)
            .map(|x| self.surface.water_level_at(x))
            .collect()
    }

    /// Score line shown at the top of the scene
    pub fn score_text(&self) -> String {
        format!(
            "Fishes caught: {}  Fishes missed: {}",
            self.fishes_caught, self.fishes_missed
        )
    }

    /// Centered message lines while paused
    pub fn status_lines(&self) -> Option<[&'static str; 2]> {
        if !self.paused {
            return None;
        }
        let headline = if self.game_over {
            GAME_OVER_TEXT
        } else {
            GAME_PAUSED_TEXT
        };
        Some([headline, KEY_TO_CONTINUE_TEXT])
    }
}
