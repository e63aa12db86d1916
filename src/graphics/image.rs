use qoi::{Channels, Decoder, Header};

use super::{blend::Argb, Pixel};

/// Immutable ARGB raster used as a blit source.
#[derive(Debug, Clone)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<Argb>,
}

impl Image {
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Argb>) -> Self {
        debug_assert_eq!(width * height, pixels.len());
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn from_qoi(bytes: &[u8]) -> Result<Self, qoi::Error> {
        let mut decoder = Decoder::new(bytes)?.with_channels(Channels::Rgba);

        let &Header { width, height, .. } = decoder.header();

        let pixels = decoder
            .decode_to_vec()?
            .chunks_exact(4)
            .map(|p| Argb::compose([p[3], p[0], p[1], p[2]]))
            .collect();

        Ok(Self::from_pixels(width as usize, height as usize, pixels))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixel(&self, x: usize, y: usize) -> Argb {
        self.pixels[y * self.width + x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_rgba_into_argb() {
        let rgba = [255u8, 0, 0, 255, 0, 0, 255, 128];
        let bytes = qoi::encode_to_vec(rgba, 2, 1).unwrap();

        let image = Image::from_qoi(&bytes).unwrap();

        assert_eq!((image.width(), image.height()), (2, 1));
        assert_eq!(image.pixel(0, 0), 0xFF_FF_00_00);
        assert_eq!(image.pixel(1, 0), 0x80_00_00_FF);
    }

    #[test]
    fn rejects_garbage() {
        assert!(Image::from_qoi(b"not a qoi file").is_err());
    }
}
