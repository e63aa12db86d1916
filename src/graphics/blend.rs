pub type Argb = u32;

use super::Pixel;

pub fn u8_mul(a: u8, b: u8) -> u8 {
    ((a as u16 * b as u16 + 127) / 255) as u8
}

/// Converts an opacity in `[0, 1]` to an alpha byte.
pub fn alpha_u8(alpha: f32) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub fn argb_fade(this: Argb, other: u8) -> Argb {
    let [aa, r, g, b] = this.decompose();
    Argb::compose([u8_mul(aa, other), r, g, b])
}

/// Straight-alpha source-over: `c2` drawn on top of `c1`.
pub fn composite_u32(c1: Argb, c2: Argb) -> Argb {
    let [a1, r1, g1, b1] = c1.decompose();
    let [a2, r2, g2, b2] = c2.decompose();

    let a2 = a2 as u32;
    let a3 = a1 as u32 * (255 - a2) / 255;
    let a = a2 + a3;

    if a == 0 {
        return Argb::trans();
    }

    let composite_channel =
        |c1: u8, c2: u8| -> u8 { ((c2 as u32 * a2 + c1 as u32 * a3 + a / 2) / a) as u8 };

    Argb::compose([
        a as u8,
        composite_channel(r1, r2),
        composite_channel(g1, g2),
        composite_channel(b1, b2),
    ])
}

impl Pixel for Argb {
    fn trans() -> Argb {
        0x0
    }

    fn mix(self, other: Argb) -> Argb {
        composite_u32(self, other)
    }

    fn alpha(self) -> u8 {
        self.decompose()[0]
    }

    fn fade(self, alpha: u8) -> Argb {
        argb_fade(self, alpha)
    }

    fn decompose(self) -> [u8; 4] {
        self.to_be_bytes()
    }

    fn compose(array: [u8; 4]) -> Argb {
        Argb::from_be_bytes(array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_source_replaces() {
        assert_eq!(composite_u32(0xFF_12_34_56, 0xFF_AB_CD_EF), 0xFF_AB_CD_EF);
    }

    #[test]
    fn transparent_destination_takes_source() {
        assert_eq!(composite_u32(Argb::trans(), 0x80_FF_00_00), 0x80_FF_00_00);
        assert_eq!(composite_u32(0xFF_00_00_FF, Argb::trans()), 0xFF_00_00_FF);
    }

    #[test]
    fn half_alpha_over_opaque_stays_opaque() {
        let [a, r, _, b] = composite_u32(0xFF_00_00_00, 0x80_FF_00_FF).decompose();
        assert_eq!(a, 0xFF);
        assert!((126..=130).contains(&r));
        assert_eq!(r, b);
    }

    #[test]
    fn fade_scales_alpha_only() {
        assert_eq!(0xFF_11_22_33u32.fade(0), 0x00_11_22_33);
        assert_eq!(0xFF_11_22_33u32.fade(255), 0xFF_11_22_33);
        assert_eq!(alpha_u8(2.0), 255);
        assert_eq!(alpha_u8(-1.0), 0);
    }
}
