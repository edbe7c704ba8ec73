//! Whole-image transforms: rotation, mirroring, grayscale, inversion.

use crate::bitmap::Bitmap;
use crate::pixel::Pixel;

impl Bitmap {
    /// Rotate the image 90 degrees clockwise. Width and height swap.
    ///
    /// The replacement buffer is fully populated before it is swapped in,
    /// so the dimensions never describe a half-written array.
    pub fn rotate_clockwise(&mut self) {
        let w = self.width as usize;
        let h = self.height as usize;

        // Source (x, y) lands at column h-1-y of row x; the rotated image
        // is h pixels wide.
        let mut rotated = vec![Pixel::BLACK; w * h];
        for y in 0..h {
            for x in 0..w {
                rotated[x * h + (h - 1 - y)] = self.data[y * w + x];
            }
        }

        self.data = rotated;
        std::mem::swap(&mut self.width, &mut self.height);
    }

    /// Mirror every row in place. Dimensions are unchanged; applying twice
    /// restores the original.
    pub fn flip_horizontal(&mut self) {
        let w = self.width as usize;
        if w == 0 {
            return;
        }
        for row in self.data.chunks_exact_mut(w) {
            row.reverse();
        }
    }

    /// Replace every pixel with its truncating channel average, in place.
    /// Lossy and irreversible; already-gray images are left as they are.
    pub fn grayscale(&mut self) {
        for px in &mut self.data {
            let avg = px.luma();
            *px = Pixel {
                blue: avg,
                green: avg,
                red: avg,
            };
        }
    }

    /// Invert every channel in place. Involutive.
    pub fn invert(&mut self) {
        for px in &mut self.data {
            px.blue = 255 - px.blue;
            px.green = 255 - px.green;
            px.red = 255 - px.red;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: u32, height: u32) -> Bitmap {
        let pixels = (0..width * height)
            .map(|i| Pixel::rgb(i as u8, (i * 2) as u8, (i * 3) as u8))
            .collect();
        Bitmap::from_pixels(width, height, pixels).unwrap()
    }

    #[test]
    fn rotate_swaps_dimensions_and_remaps_pixels() {
        // 2 wide, 3 tall; rows bottom-up as in the file format
        let mut bmp = numbered(2, 3);
        let original = bmp.clone();
        bmp.rotate_clockwise();

        assert_eq!(bmp.width(), 3);
        assert_eq!(bmp.height(), 2);
        // source (x, y) -> destination (old_height-1-y, x)
        for y in 0..3 {
            for x in 0..2 {
                assert_eq!(bmp.get(2 - y, x), original.get(x, y));
            }
        }
    }

    #[test]
    fn four_rotations_restore_the_original() {
        let mut bmp = numbered(4, 3);
        let original = bmp.clone();
        for _ in 0..4 {
            bmp.rotate_clockwise();
        }
        assert_eq!(bmp, original);
    }

    #[test]
    fn flip_mirrors_each_row_independently() {
        let mut bmp = numbered(3, 2);
        let original = bmp.clone();
        bmp.flip_horizontal();

        assert_eq!(bmp.width(), 3);
        assert_eq!(bmp.height(), 2);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(bmp.get(2 - x, y), original.get(x, y));
            }
        }
    }

    #[test]
    fn flip_is_involutive() {
        let mut bmp = numbered(5, 4);
        let original = bmp.clone();
        bmp.flip_horizontal();
        bmp.flip_horizontal();
        assert_eq!(bmp, original);
    }

    #[test]
    fn grayscale_averages_with_truncation() {
        let mut bmp = Bitmap::from_pixels(
            2,
            1,
            vec![Pixel::rgb(255, 0, 0), Pixel::rgb(255, 255, 255)],
        )
        .unwrap();
        bmp.grayscale();
        assert_eq!(bmp.get(0, 0), Pixel::rgb(85, 85, 85));
        assert_eq!(bmp.get(1, 0), Pixel::rgb(255, 255, 255));
    }

    #[test]
    fn grayscale_is_idempotent() {
        let mut once = numbered(4, 4);
        once.grayscale();
        let mut twice = once.clone();
        twice.grayscale();
        assert_eq!(once, twice);
    }

    #[test]
    fn invert_is_involutive() {
        let mut bmp = numbered(3, 3);
        let original = bmp.clone();
        bmp.invert();
        assert_ne!(bmp, original);
        bmp.invert();
        assert_eq!(bmp, original);
    }

    #[test]
    fn invert_maps_channels_to_complement() {
        let mut bmp = Bitmap::from_pixels(1, 1, vec![Pixel::rgb(255, 128, 0)]).unwrap();
        bmp.invert();
        assert_eq!(bmp.get(0, 0), Pixel::rgb(0, 127, 255));
    }

    #[test]
    fn transforms_accept_the_empty_buffer() {
        let mut bmp = Bitmap::new(0, 0);
        bmp.rotate_clockwise();
        bmp.flip_horizontal();
        bmp.grayscale();
        bmp.invert();
        assert!(bmp.is_empty());
    }
}
