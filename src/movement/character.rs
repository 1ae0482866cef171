use serde::Serialize;

use crate::chord::types::{ChordEvent, MovementCommand};
use crate::config::CharacterConfig;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HeadShape {
    Circle,
    Square,
    Triangle,
    Hexagon,
}

const HEAD_SHAPES: [HeadShape; 4] = [
    HeadShape::Circle,
    HeadShape::Square,
    HeadShape::Triangle,
    HeadShape::Hexagon,
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Position and velocity of the player figure. Screen coordinates: y grows
/// downward, so a jump sets a negative vertical velocity.
#[derive(Serialize, Clone, Debug)]
pub struct Character {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub on_ground: bool,
    pub is_jumping: bool,
    pub glow_intensity: f64,
    pub head: HeadShape,
    #[serde(skip)]
    head_index: usize,
    #[serde(skip)]
    config: CharacterConfig,
}

impl Character {
    pub fn new(config: CharacterConfig, viewport: Viewport) -> Self {
        let (x, y) = start_position(viewport);
        Character {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            on_ground: true,
            is_jumping: false,
            glow_intensity: 0.0,
            head: HeadShape::Circle,
            head_index: 0,
            config,
        }
    }

    /// One gravity tick.
    pub fn update(&mut self) {
        self.vy += self.config.gravity;
        self.y += self.vy;
        self.x += self.vx;
        self.vx *= self.config.air_resistance;
    }

    pub fn step(&mut self) {
        self.x += self.config.step_size;
    }

    /// Ignored while airborne.
    pub fn jump(&mut self, power: i32, distance: i32) {
        if !self.on_ground {
            return;
        }
        self.vy = -(power as f64);
        self.vx = distance as f64;
        self.on_ground = false;
        self.is_jumping = true;
    }

    pub fn land(&mut self, y: f64) {
        self.y = y;
        self.vy = 0.0;
        self.vx = 0.0;
        self.on_ground = true;
        if self.is_jumping {
            self.is_jumping = false;
            self.glow_intensity = 0.0;
        }
    }

    pub fn reset(&mut self, viewport: Viewport) {
        let (x, y) = start_position(viewport);
        self.x = x;
        self.y = y;
        self.vx = 0.0;
        self.vy = 0.0;
        self.is_jumping = false;
        self.glow_intensity = 0.0;
    }

    pub fn is_fallen(&self, viewport_height: f64) -> bool {
        self.y > viewport_height + self.config.fall_margin
    }

    pub fn cycle_head_shape(&mut self) {
        self.head = HEAD_SHAPES[self.head_index % HEAD_SHAPES.len()];
        self.head_index += 1;
    }

    /// React to a chord: take its glow, swap the head, then step or jump.
    pub fn apply(&mut self, event: &ChordEvent) {
        self.glow_intensity = event.physics.glow_intensity;
        self.cycle_head_shape();
        match event.command {
            MovementCommand::Step => self.step(),
            MovementCommand::Jump { power, distance } => self.jump(power, distance),
        }
    }
}

fn start_position(viewport: Viewport) -> (f64, f64) {
    (viewport.width / 4.0, viewport.height - 120.0)
}
