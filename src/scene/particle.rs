use rand::Rng;

use super::palette::FireworkColor;
use crate::{
    graphics::Canvas,
    math::{
        rng::{random_between, random_float},
        Vec2, TAU,
    },
};

pub const GRAVITY: f32 = 0.05;

/// One fragment of a burst. Falls under gravity and fades out.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2<f32>,
    pub velocity: Vec2<f32>,
    pub color: FireworkColor,
    pub alpha: f32,
    pub decay: f32,
    pub radius: f32,
}

impl Particle {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, pos: Vec2<f32>, color: FireworkColor) -> Self {
        let speed = random_between(rng, 2.0, 5.0);
        let angle = random_float(rng, TAU);

        Self {
            pos,
            velocity: Vec2::from_polar(angle, speed),
            color,
            alpha: 1.0,
            decay: random_between(rng, 0.005, 0.025),
            radius: random_between(rng, 1.0, 4.0),
        }
    }

    pub fn update(&mut self) {
        self.velocity.y += GRAVITY;
        self.pos += self.velocity;
        self.alpha -= self.decay;
    }

    pub fn is_dead(&self) -> bool {
        self.alpha <= 0.0
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        canvas.save();
        canvas.set_alpha(self.alpha);
        canvas.fill_circle(self.pos, self.radius, self.color.argb());
        canvas.restore();
    }
}
