use rand::Rng;

use super::sprites::{BillKind, SpriteSheet};
use crate::{
    graphics::{Canvas, Rect},
    math::{
        rng::{random_between, random_float},
        Vec2, TAU,
    },
};

pub const BILL_WIDTH: f32 = 40.0;
pub const BILL_HEIGHT: f32 = 20.0;
/// Extra random height above the canvas a reset bill may start at.
pub const ENTRY_SPREAD: f32 = 100.0;
/// Spatial frequency of the sway along the fall.
pub const SWAY_FREQUENCY: f32 = 0.03;

/// A banknote that tumbles down the screen and wraps back to the top.
#[derive(Debug, Clone)]
pub struct MoneyBill {
    pub pos: Vec2<f32>,
    /// Degrees.
    pub rotation: f32,
    pub rotation_speed: f32,
    pub fall_speed: f32,
    pub sway: f32,
    pub sway_phase: f32,
    kind: BillKind,
}

impl MoneyBill {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2<f32>) -> Self {
        let mut bill = Self {
            pos: Vec2::zero(),
            rotation: 0.0,
            rotation_speed: 0.0,
            fall_speed: 0.0,
            sway: 0.0,
            sway_phase: 0.0,
            kind: BillKind::random(rng),
        };

        bill.reset(rng, bounds);
        bill
    }

    /// Moves the bill above the top edge with a fresh tumble.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Vec2<f32>) {
        self.pos = Vec2::new(
            random_float(rng, bounds.x),
            -BILL_HEIGHT - random_float(rng, ENTRY_SPREAD),
        );
        self.rotation = random_float(rng, 360.0);
        self.rotation_speed = random_between(rng, -2.5, 2.5);
        self.fall_speed = random_between(rng, 1.0, 3.0);
        self.sway = random_float(rng, 3.0);
        self.sway_phase = random_float(rng, TAU);
    }

    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Vec2<f32>) {
        self.pos.y += self.fall_speed;
        self.rotation = (self.rotation + self.rotation_speed).rem_euclid(360.0);
        self.pos.x += (self.pos.y * SWAY_FREQUENCY + self.sway_phase).sin() * self.sway;

        if self.pos.y > bounds.y + BILL_HEIGHT {
            self.reset(rng, bounds);
        }
    }

    pub fn draw(&self, canvas: &mut Canvas, sprites: &SpriteSheet) {
        canvas.save();
        canvas.translate(self.pos);
        canvas.rotate(self.rotation.to_radians());

        if let Some(image) = sprites.get(self.kind) {
            canvas.draw_image(
                image,
                Rect {
                    x: -BILL_WIDTH / 2.0,
                    y: -BILL_HEIGHT / 2.0,
                    w: BILL_WIDTH,
                    h: BILL_HEIGHT,
                },
            );
        }

        canvas.restore();
    }

    #[cfg(test)]
    pub fn kind(&self) -> BillKind {
        self.kind
    }
}
