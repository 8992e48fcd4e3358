//! The dot entity and its per-frame motion step
//!
//! Integration is axis-sequential: X is moved and resolved completely before
//! Y starts, so a diagonal move is two independent 1-D sweeps. That ordering,
//! the flat per-frame damping and the rollback-without-contact-advance wall
//! bounce all define the game feel and must not be "fixed" into a swept test.

use macroquad::math::Vec2;

use super::collision::{touches_wall, Circle};
use crate::consts::*;
use crate::level::TileMap;
use crate::tuning::Tuning;

/// The moving entity: a position, a velocity and a circular collider
#[derive(Debug, Clone)]
pub struct Dot {
    pos: Vec2,
    vel: Vec2,
    collider: Circle,
}

impl Dot {
    /// Create a dot at rest with its collider centered on `pos`
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            collider: Circle::new(pos, DOT_SIZE / 2.0),
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    pub fn collider(&self) -> &Circle {
        &self.collider
    }

    /// Replace the velocity (the drag launcher's impulse lands here)
    pub fn set_vel(&mut self, vel: Vec2) {
        self.vel = vel;
    }

    /// Re-center the collider onto the position
    ///
    /// Invariant: called after every position mutation so the collider never
    /// drifts from the dot.
    fn sync_collider(&mut self) {
        self.collider.center = self.pos;
    }

    /// Advance one frame by `dt` seconds against `map`
    ///
    /// Per axis: integrate, damp, then resolve. Screen edges clamp the
    /// position to the boundary and reflect the axis velocity; wall tiles
    /// roll the axis back to its pre-step value and reflect. The edge check
    /// wins over the wall check. Damping is a flat per-frame factor, not
    /// scaled by `dt`. After both axes, both velocities snap to zero once
    /// each is strictly inside the rest threshold.
    pub fn step(&mut self, map: &TileMap, dt: f32, tuning: &Tuning) {
        let radius = self.collider.radius;

        // X axis
        let pre_x = self.pos.x;
        self.pos.x += self.vel.x * dt;
        self.vel.x *= tuning.damping;
        self.sync_collider();

        if self.pos.x < radius {
            self.pos.x = radius;
            self.vel.x = -self.vel.x;
        } else if self.pos.x > SCREEN_WIDTH - radius {
            self.pos.x = SCREEN_WIDTH - radius;
            self.vel.x = -self.vel.x;
        } else if touches_wall(&self.collider, map) {
            self.pos.x = pre_x;
            self.vel.x = -self.vel.x;
        }
        self.sync_collider();

        // Y axis
        let pre_y = self.pos.y;
        self.pos.y += self.vel.y * dt;
        self.vel.y *= tuning.damping;
        self.sync_collider();

        if self.pos.y < radius {
            self.pos.y = radius;
            self.vel.y = -self.vel.y;
        } else if self.pos.y > SCREEN_HEIGHT - radius {
            self.pos.y = SCREEN_HEIGHT - radius;
            self.vel.y = -self.vel.y;
        } else if touches_wall(&self.collider, map) {
            self.pos.y = pre_y;
            self.vel.y = -self.vel.y;
        }
        self.sync_collider();

        // Rest snap: both axes zero together, or not at all
        if self.vel.x.abs() < tuning.rest_threshold && self.vel.y.abs() < tuning.rest_threshold {
            self.vel = Vec2::ZERO;
        }
    }
}
