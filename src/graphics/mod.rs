pub mod blend;
pub mod draw;
pub mod image;
pub mod transform;

pub use blend::Argb;
pub use image::Image;
pub use transform::Affine;

use crate::math::Vec2;

pub const COLOR_BACKGROUND: Argb = 0xFF_00_00_00;

pub(crate) trait Pixel: Copy + Clone + Sized + std::fmt::Debug {
    fn trans() -> Self;

    fn mix(self, other: Self) -> Self;

    fn alpha(self) -> u8;

    fn fade(self, alpha: u8) -> Self;
    fn decompose(self) -> [u8; 4];
    fn compose(array: [u8; 4]) -> Self;
}

/// Axis aligned rectangle in local (pre-transform) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Transform and opacity applied to every draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawState {
    pub transform: Affine,
    pub alpha: f32,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            alpha: 1.0,
        }
    }
}

/// Software drawing surface.
///
/// Mirrors the small subset of an immediate-mode 2D context the scene
/// needs: clearing, filled circles, transformed image blits, and a
/// save/restore stack for the current transform and opacity.
pub struct Canvas {
    pixels: Vec<Argb>,
    width: usize,
    height: usize,

    state: DrawState,
    saved: Vec<DrawState>,
}

impl Canvas {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            pixels: vec![Argb::trans(); w * h],
            width: w,
            height: h,

            state: DrawState::default(),
            saved: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> Vec2<f32> {
        Vec2::new(self.width as f32, self.height as f32)
    }

    #[cfg(test)]
    pub fn sizel(&self) -> usize {
        self.pixels.len()
    }

    pub fn clear(&mut self) {
        self.pixels.fill(Argb::trans());
    }

    pub fn resize(&mut self, w: usize, h: usize) {
        self.pixels.resize(w * h, Argb::trans());
        self.width = w;
        self.height = h;
        self.clear();
    }

    #[cfg(test)]
    pub fn pixel(&self, x: usize, y: usize) -> Argb {
        self.pixels[y * self.width + x]
    }

    #[cfg(test)]
    pub fn as_slice(&self) -> &[Argb] {
        &self.pixels
    }

    #[cfg(test)]
    pub fn state(&self) -> DrawState {
        self.state
    }

    pub fn save(&mut self) {
        self.saved.push(self.state);
    }

    /// Pops the last saved state. Unbalanced calls are ignored.
    pub fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    pub fn translate(&mut self, v: Vec2<f32>) {
        self.state.transform = self.state.transform.translate(v);
    }

    pub fn rotate(&mut self, angle: f32) {
        self.state.transform = self.state.transform.rotate(angle);
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.state.alpha = alpha.clamp(0.0, 1.0);
    }

    fn plot(&mut self, x: usize, y: usize, c: Argb) {
        if let Some(p) = self.pixels.get_mut(y * self.width + x) {
            *p = p.mix(c);
        }
    }
}

/// Blends `layers` bottom to top over an opaque `background` into `dest`.
///
/// Every source pixel fills a `scale`x`scale` block. `dst_width` may be
/// wider than the scaled layers (window sizes that aren't a multiple of
/// the scale); the margin is left as background.
pub fn composite_layers(
    layers: &[&Canvas],
    scale: usize,
    dest: &mut [Argb],
    dst_width: usize,
    background: Argb,
) {
    dest.fill(background);

    let Some(base) = layers.first() else {
        return;
    };

    if scale == 0 || dst_width == 0 {
        return;
    }

    let width = base.width.min(dst_width / scale);

    for (y, dst_block) in dest
        .chunks_exact_mut(dst_width * scale)
        .take(base.height)
        .enumerate()
    {
        let (first, rest) = dst_block.split_at_mut(dst_width);

        for (x, dst_chunk) in first.chunks_exact_mut(scale).take(width).enumerate() {
            let i = y * base.width + x;

            let pixel = layers.iter().fold(background, |acc, layer| {
                acc.mix(layer.pixels.get(i).copied().unwrap_or(Argb::trans()))
            });

            dst_chunk.fill(pixel);
        }

        for row in rest.chunks_exact_mut(dst_width) {
            row.copy_from_slice(first);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_restore_scopes_transform_and_alpha() {
        let mut canvas = Canvas::new(4, 4);

        canvas.save();
        canvas.translate(Vec2::new(2.0, 3.0));
        canvas.rotate(1.0);
        canvas.set_alpha(0.25);
        assert_ne!(canvas.state(), DrawState::default());
        canvas.restore();

        assert_eq!(canvas.state(), DrawState::default());

        // Extra restores must not panic or change anything.
        canvas.restore();
        assert_eq!(canvas.state(), DrawState::default());
    }

    #[test]
    fn resize_clears() {
        let mut canvas = Canvas::new(2, 2);
        canvas.fill_circle(Vec2::new(1.0, 1.0), 2.0, 0xFF_FF_FF_FF);
        canvas.resize(3, 5);

        assert_eq!((canvas.width(), canvas.height()), (3, 5));
        assert_eq!(canvas.sizel(), 15);
        assert!(canvas.as_slice().iter().all(|&p| p == Argb::trans()));
    }

    #[test]
    fn layers_composite_in_order_and_scale() {
        let mut bottom = Canvas::new(2, 1);
        let mut top = Canvas::new(2, 1);
        bottom.plot(0, 0, 0xFF_FF_00_00);
        bottom.plot(1, 0, 0xFF_FF_00_00);
        top.plot(1, 0, 0xFF_00_FF_00);

        let mut dest = vec![0; 5 * 2];
        composite_layers(&[&bottom, &top], 2, &mut dest, 5, COLOR_BACKGROUND);

        let row = [0xFF_FF_00_00, 0xFF_FF_00_00, 0xFF_00_FF_00, 0xFF_00_FF_00, COLOR_BACKGROUND];
        assert_eq!(&dest[..5], &row);
        assert_eq!(&dest[5..], &row);
    }

    #[test]
    fn empty_layers_leave_background() {
        let mut dest = vec![0; 4];
        composite_layers(&[], 1, &mut dest, 2, COLOR_BACKGROUND);
        assert!(dest.iter().all(|&p| p == COLOR_BACKGROUND));
    }
}
