use rand::Rng;

use super::{palette::FireworkColor, particle::Particle};
use crate::{
    graphics::Canvas,
    math::{rng::random_float, Vec2},
};

pub const ROCKET_SPEED: f32 = 2.0;
pub const ROCKET_RADIUS: f32 = 2.0;
/// A rocket bursts once both axis distances to its target drop below this.
pub const ARRIVAL_DISTANCE: f32 = 5.0;
pub const BURST_SIZE: usize = 100;
/// Targets are picked in this top fraction of the canvas.
pub const TARGET_CEILING: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireworkState {
    Ascending,
    Exploding,
}

/// A rocket that climbs towards a target and bursts into particles.
///
/// Fireworks are never dropped by the scene. Once the last particle of a
/// burst fades the rocket resets itself onto a new trajectory, keeping
/// the particle storage it already allocated.
#[derive(Debug, Clone)]
pub struct Firework {
    pos: Vec2<f32>,
    target: Vec2<f32>,
    velocity: Vec2<f32>,
    color: FireworkColor,
    state: FireworkState,
    particles: Vec<Particle>,
    bursts: u64,
}

impl Firework {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2<f32>) -> Self {
        let mut firework = Self {
            pos: Vec2::zero(),
            target: Vec2::zero(),
            velocity: Vec2::zero(),
            color: FireworkColor::Red,
            state: FireworkState::Ascending,
            particles: Vec::with_capacity(BURST_SIZE),
            bursts: 0,
        };

        firework.reset(rng, bounds);
        firework
    }

    /// Launches from a random point on the bottom edge towards a random
    /// point in the upper part of `bounds`.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Vec2<f32>) {
        self.pos = Vec2::new(random_float(rng, bounds.x), bounds.y);
        self.target = Vec2::new(
            random_float(rng, bounds.x),
            random_float(rng, bounds.y * TARGET_CEILING),
        );
        self.aim();
        self.color = FireworkColor::random(rng);
        self.state = FireworkState::Ascending;
        self.particles.clear();
    }

    fn aim(&mut self) {
        let angle = (self.target - self.pos).angle();
        self.velocity = Vec2::from_polar(angle, ROCKET_SPEED);
    }

    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: Vec2<f32>) {
        match self.state {
            FireworkState::Ascending => {
                self.pos += self.velocity;

                if self.has_arrived() {
                    self.explode(rng);
                }
            }

            FireworkState::Exploding => {
                self.particles.retain_mut(|particle| {
                    particle.update();
                    !particle.is_dead()
                });

                if self.particles.is_empty() {
                    self.reset(rng, bounds);
                }
            }
        }
    }

    fn has_arrived(&self) -> bool {
        let delta = (self.pos - self.target).abs();
        delta.x < ARRIVAL_DISTANCE && delta.y < ARRIVAL_DISTANCE
    }

    fn explode<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.state = FireworkState::Exploding;
        self.bursts += 1;

        let (pos, color) = (self.pos, self.color);
        self.particles
            .extend((0..BURST_SIZE).map(|_| Particle::new(rng, pos, color)));
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        match self.state {
            FireworkState::Ascending => {
                canvas.fill_circle(self.pos, ROCKET_RADIUS, self.color.argb());
            }

            FireworkState::Exploding => {
                for particle in &self.particles {
                    particle.draw(canvas);
                }
            }
        }
    }

    pub fn state(&self) -> FireworkState {
        self.state
    }

    #[cfg(test)]
    pub fn pos(&self) -> Vec2<f32> {
        self.pos
    }

    #[cfg(test)]
    pub fn target(&self) -> Vec2<f32> {
        self.target
    }

    #[cfg(test)]
    pub fn color(&self) -> FireworkColor {
        self.color
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of bursts this rocket has produced so far.
    pub fn bursts(&self) -> u64 {
        self.bursts
    }

    #[cfg(test)]
    pub(crate) fn launch_from(&mut self, pos: Vec2<f32>, target: Vec2<f32>) {
        self.pos = pos;
        self.target = target;
        self.aim();
        self.state = FireworkState::Ascending;
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::rng::new_rng;

    const BOUNDS: Vec2<f32> = Vec2::new(800.0, 600.0);

    fn distance(fw: &Firework) -> f32 {
        (fw.target() - fw.pos()).mag()
    }

    #[test]
    fn reset_starts_at_bottom_aiming_high() {
        let mut rng = new_rng(Some(10));

        for _ in 0..200 {
            let fw = Firework::new(&mut rng, BOUNDS);

            assert_eq!(fw.state(), FireworkState::Ascending);
            assert!(fw.particles().is_empty());
            assert_eq!(fw.pos().y, BOUNDS.y);
            assert!((0.0..BOUNDS.x).contains(&fw.pos().x));
            assert!((0.0..BOUNDS.x).contains(&fw.target().x));
            assert!((0.0..BOUNDS.y * TARGET_CEILING).contains(&fw.target().y));
            assert!((fw.velocity.mag() - ROCKET_SPEED).abs() < 1e-4);
        }
    }

    #[test]
    fn approaches_target_then_bursts_once() {
        let mut rng = new_rng(Some(11));
        let mut fw = Firework::new(&mut rng, BOUNDS);

        let mut last = distance(&fw);
        let mut ticks = 0;

        while fw.state() == FireworkState::Ascending {
            fw.update(&mut rng, BOUNDS);
            ticks += 1;

            if fw.state() == FireworkState::Ascending {
                let now = distance(&fw);
                assert!(now < last, "distance grew at tick {ticks}");
                assert!(fw.particles().is_empty());
                last = now;
            }

            assert!(ticks < 600, "never arrived");
        }

        let delta = (fw.pos() - fw.target()).abs();
        assert!(delta.x < ARRIVAL_DISTANCE && delta.y < ARRIVAL_DISTANCE);
        assert_eq!(fw.bursts(), 1);
        assert_eq!(fw.particles().len(), BURST_SIZE);

        // The burst happens where the rocket stopped, in the rocket's color.
        for p in fw.particles() {
            assert_eq!(p.pos, fw.pos());
            assert_eq!(p.color, fw.color());
            assert_eq!(p.alpha, 1.0);
            assert!((2.0 - 1e-4..5.0 + 1e-4).contains(&p.velocity.mag()));
        }

        // Further updates only age the particles.
        fw.update(&mut rng, BOUNDS);
        assert_eq!(fw.bursts(), 1);
        assert_eq!(fw.state(), FireworkState::Exploding);
    }

    #[test]
    fn dead_particles_are_all_dropped() {
        let mut rng = new_rng(Some(12));
        let mut fw = Firework::new(&mut rng, BOUNDS);
        fw.launch_from(Vec2::new(100.0, 100.0), Vec2::new(101.0, 101.0));
        fw.update(&mut rng, BOUNDS);
        assert_eq!(fw.state(), FireworkState::Exploding);

        // Kill every other particle; none may survive the next pass.
        for (i, p) in fw.particles.iter_mut().enumerate() {
            if i % 2 == 0 {
                p.alpha = p.decay / 2.0;
            }
        }

        fw.update(&mut rng, BOUNDS);

        assert_eq!(fw.particles().len(), BURST_SIZE / 2);
        assert!(fw.particles().iter().all(|p| p.alpha > 0.0));
    }

    #[test]
    fn drained_burst_recycles_the_rocket() {
        let mut rng = new_rng(Some(13));
        let mut fw = Firework::new(&mut rng, BOUNDS);
        fw.launch_from(Vec2::new(400.0, 300.0), Vec2::new(400.0, 299.0));
        fw.update(&mut rng, BOUNDS);

        let old_target = fw.target();
        let capacity = fw.particles.capacity();

        let mut ticks = 0;
        while fw.state() == FireworkState::Exploding {
            fw.update(&mut rng, BOUNDS);
            ticks += 1;
            assert!(ticks <= 201, "particles never drained");
        }

        assert_eq!(fw.state(), FireworkState::Ascending);
        assert!(fw.particles().is_empty());
        assert_eq!(fw.particles.capacity(), capacity);
        assert_eq!(fw.pos().y, BOUNDS.y);
        assert_ne!(fw.target(), old_target);
        assert!(fw.target().y < BOUNDS.y * TARGET_CEILING);
        assert_eq!(fw.bursts(), 1);
    }

    #[test]
    fn draws_a_dot_while_ascending() {
        let mut rng = new_rng(Some(14));
        let mut fw = Firework::new(&mut rng, BOUNDS);
        fw.launch_from(Vec2::new(10.0, 10.0), Vec2::new(10.0, -100.0));

        let mut canvas = Canvas::new(20, 20);
        fw.draw(&mut canvas);

        assert_eq!(canvas.pixel(10, 10), fw.color().argb());
        assert_eq!(canvas.pixel(0, 0), 0);
    }
}
