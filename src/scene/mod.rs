pub mod firework;
pub mod money;
pub mod palette;
pub mod particle;
pub mod sprites;


use crate::{
    graphics::Canvas,
    math::{
        rng::{chance, random_float, SceneRng},
        Vec2,
    },
};

use firework::{Firework, FireworkState};
use money::MoneyBill;
use sprites::SpriteSheet;

pub const INITIAL_FIREWORKS: usize = 5;
pub const MAX_FIREWORKS: usize = 10;
pub const INITIAL_BILLS: usize = 50;
/// Per-tick probability of launching one more rocket.
pub const LAUNCH_CHANCE: f32 = 0.02;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneStats {
    pub ticks: u64,
    pub fireworks: usize,
    pub exploding: usize,
    pub particles: usize,
    pub bursts: u64,
    pub bills: usize,
}

/// Both animations and the layers they are drawn on.
///
/// Rockets and particles go on the fireworks layer, banknotes on the
/// money layer above it. Each tick redraws both layers from scratch.
pub struct Scene {
    fireworks: Vec<Firework>,
    bills: Vec<MoneyBill>,

    rng: SceneRng,
    sprites: SpriteSheet,

    fireworks_layer: Canvas,
    money_layer: Canvas,

    ticks: u64,
}

impl Scene {
    pub fn new(width: usize, height: usize, mut rng: SceneRng, sprites: SpriteSheet) -> Self {
        let bounds = Vec2::new(width as f32, height as f32);

        let fireworks = (0..INITIAL_FIREWORKS)
            .map(|_| Firework::new(&mut rng, bounds))
            .collect();

        // Scatter the first bills over the whole height so they don't
        // arrive as one synchronized wave.
        let bills = (0..INITIAL_BILLS)
            .map(|_| {
                let mut bill = MoneyBill::new(&mut rng, bounds);
                bill.pos.y = random_float(&mut rng, bounds.y);
                bill
            })
            .collect();

        Self {
            fireworks,
            bills,

            rng,
            sprites,

            fireworks_layer: Canvas::new(width, height),
            money_layer: Canvas::new(width, height),

            ticks: 0,
        }
    }

    pub fn bounds(&self) -> Vec2<f32> {
        self.fireworks_layer.size()
    }

    pub fn width(&self) -> usize {
        self.fireworks_layer.width()
    }

    pub fn height(&self) -> usize {
        self.fireworks_layer.height()
    }

    /// Resizes both layers. Objects in flight keep their positions and
    /// pick up the new bounds on their next reset.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.fireworks_layer.resize(width, height);
        self.money_layer.resize(width, height);
    }

    pub fn tick(&mut self) {
        let bounds = self.bounds();

        self.fireworks_layer.clear();
        self.money_layer.clear();

        for firework in &mut self.fireworks {
            firework.update(&mut self.rng, bounds);
            firework.draw(&mut self.fireworks_layer);
        }

        for bill in &mut self.bills {
            bill.update(&mut self.rng, bounds);
            bill.draw(&mut self.money_layer, &self.sprites);
        }

        if chance(&mut self.rng, LAUNCH_CHANCE) && self.fireworks.len() < MAX_FIREWORKS {
            self.fireworks.push(Firework::new(&mut self.rng, bounds));
            log::debug!("Launched firework #{}", self.fireworks.len());
        }

        self.ticks += 1;
    }

    /// Layers from bottom to top.
    pub fn layers(&self) -> [&Canvas; 2] {
        [&self.fireworks_layer, &self.money_layer]
    }

    #[cfg(test)]
    pub fn fireworks(&self) -> &[Firework] {
        &self.fireworks
    }

    #[cfg(test)]
    pub fn bills(&self) -> &[MoneyBill] {
        &self.bills
    }

    pub fn stats(&self) -> SceneStats {
        let exploding = self
            .fireworks
            .iter()
            .filter(|f| f.state() == FireworkState::Exploding)
            .count();

        SceneStats {
            ticks: self.ticks,
            fireworks: self.fireworks.len(),
            exploding,
            particles: self.fireworks.iter().map(|f| f.particles().len()).sum(),
            bursts: self.fireworks.iter().map(|f| f.bursts()).sum(),
            bills: self.bills.len(),
        }
    }

    #[cfg(test)]
    pub(crate) fn fireworks_mut(&mut self) -> &mut [Firework] {
        &mut self.fireworks
    }
}
