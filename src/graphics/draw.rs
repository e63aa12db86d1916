use super::{
    blend::{alpha_u8, Argb},
    Canvas, Image, Pixel, Rect,
};
use crate::math::Vec2;

/// Integer pixel span covering `[lo, hi]`, clipped to `[0, bound)`.
fn span(lo: f32, hi: f32, bound: usize) -> std::ops::Range<usize> {
    let start = lo.floor().max(0.0) as usize;
    let end = (hi.ceil().max(0.0) as usize).saturating_add(1).min(bound);
    start..end.max(start)
}

impl Canvas {
    /// Filled circle at `center` (local coordinates), blended at the
    /// current opacity. Pixels whose centers fall inside the radius are
    /// covered; a circle smaller than a pixel still marks the pixel
    /// under its center.
    pub fn fill_circle(&mut self, center: Vec2<f32>, radius: f32, color: Argb) {
        let color = color.fade(alpha_u8(self.state.alpha));

        if color.alpha() == 0 {
            return;
        }

        let c = self.state.transform.apply(center);
        let r2 = radius * radius;
        let mut hit = false;

        for y in span(c.y - radius, c.y + radius, self.height) {
            let dy = y as f32 + 0.5 - c.y;

            for x in span(c.x - radius, c.x + radius, self.width) {
                let dx = x as f32 + 0.5 - c.x;

                if dx * dx + dy * dy <= r2 {
                    self.plot(x, y, color);
                    hit = true;
                }
            }
        }

        if !hit && c.x >= 0.0 && c.y >= 0.0 {
            let (x, y) = (c.x as usize, c.y as usize);
            if x < self.width && y < self.height {
                self.plot(x, y, color);
            }
        }
    }

    /// Draws `image` stretched into `dest` under the current transform,
    /// sampling the nearest source pixel.
    pub fn draw_image(&mut self, image: &Image, dest: Rect) {
        if image.is_empty() || dest.w <= 0.0 || dest.h <= 0.0 {
            return;
        }

        let alpha = alpha_u8(self.state.alpha);

        if alpha == 0 {
            return;
        }

        let transform = self.state.transform;

        let Some(inverse) = transform.inverse() else {
            return;
        };

        let corners = [
            Vec2::new(dest.x, dest.y),
            Vec2::new(dest.x + dest.w, dest.y),
            Vec2::new(dest.x, dest.y + dest.h),
            Vec2::new(dest.x + dest.w, dest.y + dest.h),
        ]
        .map(|p| transform.apply(p));

        let (min, max) = corners.iter().fold(
            (corners[0], corners[0]),
            |(min, max), p| {
                (
                    Vec2::new(min.x.min(p.x), min.y.min(p.y)),
                    Vec2::new(max.x.max(p.x), max.y.max(p.y)),
                )
            },
        );

        let (iw, ih) = (image.width() as f32, image.height() as f32);

        for y in span(min.y, max.y, self.height) {
            for x in span(min.x, max.x, self.width) {
                let local = inverse.apply(Vec2::new(x as f32 + 0.5, y as f32 + 0.5));

                let u = (local.x - dest.x) / dest.w;
                let v = (local.y - dest.y) / dest.h;

                if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
                    continue;
                }

                let sx = ((u * iw) as usize).min(image.width() - 1);
                let sy = ((v * ih) as usize).min(image.height() - 1);

                let color = image.pixel(sx, sy).fade(alpha);

                if color.alpha() != 0 {
                    self.plot(x, y, color);
                }
            }
        }
    }
}
