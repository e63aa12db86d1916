use rand::Rng;

use crate::{graphics::Argb, math::rng::random_index};

/// Fixed set of firework colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireworkColor {
    Red,
    Lime,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    Orange,
    OrangeRed,
    BlueViolet,
    Chartreuse,
    DeepPink,
    Gold,
}

impl FireworkColor {
    pub const ALL: [FireworkColor; 12] = [
        FireworkColor::Red,
        FireworkColor::Lime,
        FireworkColor::Blue,
        FireworkColor::Yellow,
        FireworkColor::Magenta,
        FireworkColor::Cyan,
        FireworkColor::Orange,
        FireworkColor::OrangeRed,
        FireworkColor::BlueViolet,
        FireworkColor::Chartreuse,
        FireworkColor::DeepPink,
        FireworkColor::Gold,
    ];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[random_index(rng, Self::ALL.len())]
    }

    pub fn argb(self) -> Argb {
        match self {
            FireworkColor::Red => 0xFF_FF_00_00,
            FireworkColor::Lime => 0xFF_00_FF_00,
            FireworkColor::Blue => 0xFF_00_00_FF,
            FireworkColor::Yellow => 0xFF_FF_FF_00,
            FireworkColor::Magenta => 0xFF_FF_00_FF,
            FireworkColor::Cyan => 0xFF_00_FF_FF,
            FireworkColor::Orange => 0xFF_FF_A5_00,
            FireworkColor::OrangeRed => 0xFF_FF_45_00,
            FireworkColor::BlueViolet => 0xFF_8A_2B_E2,
            FireworkColor::Chartreuse => 0xFF_7F_FF_00,
            FireworkColor::DeepPink => 0xFF_FF_14_93,
            FireworkColor::Gold => 0xFF_FF_D7_00,
        }
    }
}
