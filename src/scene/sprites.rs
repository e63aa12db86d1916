use rand::Rng;

use crate::{graphics::Image, math::rng::random_index};

/// Banknote denominations, one sprite each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillKind {
    Hundred,
    Fifty,
    Twenty,
}

impl BillKind {
    pub const ALL: [BillKind; 3] = [BillKind::Hundred, BillKind::Fifty, BillKind::Twenty];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[random_index(rng, Self::ALL.len())]
    }

    pub fn name(self) -> &'static str {
        match self {
            BillKind::Hundred => "$100",
            BillKind::Fifty => "$50",
            BillKind::Twenty => "$20",
        }
    }

    fn qoi(self) -> &'static [u8] {
        match self {
            BillKind::Hundred => include_bytes!("../../assets/bill_100.qoi"),
            BillKind::Fifty => include_bytes!("../../assets/bill_50.qoi"),
            BillKind::Twenty => include_bytes!("../../assets/bill_20.qoi"),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Decoded banknote images. A slot stays empty if its image fails to
/// decode; bills of that kind are then simply not drawn.
#[derive(Debug, Clone, Default)]
pub struct SpriteSheet {
    images: [Option<Image>; 3],
}

impl SpriteSheet {
    pub fn load() -> Self {
        let images = BillKind::ALL.map(|kind| {
            Image::from_qoi(kind.qoi())
                .inspect_err(|e| log::warn!("Failed to decode the {} sprite: {e}", kind.name()))
                .ok()
        });

        Self { images }
    }

    #[cfg(test)]
    /// A sheet with nothing in it, for runs that never draw sprites.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: BillKind) -> Option<&Image> {
        self.images[kind.index()].as_ref()
    }
}
