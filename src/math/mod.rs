pub mod rng;
mod vec2;

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

pub const TAU: f32 = std::f32::consts::TAU;
