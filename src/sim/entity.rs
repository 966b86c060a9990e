//! Moving entities: fish and bubbles
//!
//! Every entity shares the same body (real position + constant velocity).
//! Variants override how a step is taken and where the entity is shown.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::to_pixel;

/// Position and constant velocity. Only `step` moves the position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingEntity {
    pub pos: DVec2,
    vel: DVec2,
}

impl MovingEntity {
    pub fn new(pos: DVec2, vel: DVec2) -> Self {
        Self { pos, vel }
    }

    #[inline]
    pub fn vel(&self) -> DVec2 {
        self.vel
    }

    /// Translate by one tick of velocity
    #[inline]
    pub fn step(&mut self) {
        self.pos += self.vel;
    }

    /// Position truncated to pixels
    #[inline]
    pub fn pixel(&self) -> (i32, i32) {
        to_pixel(self.pos)
    }
}

/// Shared capability of everything that moves each tick
pub trait Mover {
    fn body(&self) -> &MovingEntity;

    /// Advance by one tick
    fn step(&mut self);

    /// Pixel position the entity is displayed (and collided) at
    fn visible_pos(&self) -> (i32, i32) {
        self.body().pixel()
    }
}

/// A fish swimming straight across the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fish {
    pub id: u32,
    pub body: MovingEntity,
}

impl Fish {
    pub fn new(id: u32, pos: DVec2, vel: DVec2) -> Self {
        Self {
            id,
            body: MovingEntity::new(pos, vel),
        }
    }

    /// True when swimming left to right
    #[inline]
    pub fn heading_right(&self) -> bool {
        self.body.vel().x > 0.0
    }

    /// Front point of the fish in its direction of travel
    pub fn leading_edge(&self) -> (i32, i32) {
        let (x, y) = self.visible_pos();
        let offset = FISH_HEIGHT / 2;
        if self.heading_right() {
            (x + offset, y)
        } else {
            (x - offset, y)
        }
    }
}

impl Mover for Fish {
    fn body(&self) -> &MovingEntity {
        &self.body
    }

    fn step(&mut self) {
        self.body.step();
    }
}

/// A rising air bubble that wobbles sideways
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bubble {
    pub id: u32,
    pub body: MovingEntity,
    /// Phase of the horizontal wobble
    pub oscillation_phase: f64,
}

impl Bubble {
    /// New bubble at the bottom of the scene
    pub fn new(id: u32, x: i32) -> Self {
        Self {
            id,
            body: MovingEntity::new(
                DVec2::new(x as f64, SCENE_HEIGHT as f64),
                DVec2::new(0.0, BUBBLE_ASCENDING_VELOCITY),
            ),
            oscillation_phase: 0.0,
        }
    }
}

impl Mover for Bubble {
    fn body(&self) -> &MovingEntity {
        &self.body
    }

    fn step(&mut self) {
        self.body.step();
        self.oscillation_phase += BUBBLE_OSCILLATION_STEP;
    }

    /// The wobble is applied to the shown x only, never to the stored position
    fn visible_pos(&self) -> (i32, i32) {
        let x = self.body.pos.x + BUBBLE_OSCILLATION_AMPLITUDE * self.oscillation_phase.sin();
        (x as i32, self.body.pos.y as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_step() {
        let mut e = MovingEntity::new(DVec2::new(1.5, 2.5), DVec2::new(1.0, -0.5));
        e.step();
        assert_eq!(e.pos, DVec2::new(2.5, 2.0));
        assert_eq!(e.vel(), DVec2::new(1.0, -0.5));
        assert_eq!(e.pixel(), (2, 2));
    }

    #[test]
    fn test_pixel_truncates_toward_zero() {
        let e = MovingEntity::new(DVec2::new(-12.7, 3.9), DVec2::ZERO);
        assert_eq!(e.pixel(), (-12, 3));
    }

    #[test]
    fn test_fish_heading_and_leading_edge() {
        let right = Fish::new(1, DVec2::new(100.0, 200.0), DVec2::new(2.2, 0.1));
        assert!(right.heading_right());
        assert_eq!(right.leading_edge(), (105, 200));

        let left = Fish::new(2, DVec2::new(100.0, 200.0), DVec2::new(-2.2, 0.1));
        assert!(!left.heading_right());
        assert_eq!(left.leading_edge(), (95, 200));
    }

    #[test]
    fn test_bubble_wobble_is_not_stored() {
        let mut bubble = Bubble::new(1, 250);
        assert_eq!(bubble.visible_pos(), (250, SCENE_HEIGHT));

        bubble.step();
        assert_eq!(bubble.body.pos.x, 250.0);
        assert!((bubble.body.pos.y - (SCENE_HEIGHT as f64 - 1.6)).abs() < 1e-12);
        assert!((bubble.oscillation_phase - 0.15).abs() < 1e-12);

        let expected_x = (250.0 + 5.0 * 0.15f64.sin()) as i32;
        assert_eq!(bubble.visible_pos().0, expected_x);
    }
}
