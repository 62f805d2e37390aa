//! Tile color estimation by strided pixel sampling.
//!
//! A tile's representative color is the per-channel average of every
//! `stride`-th pixel of its RGBA buffer, taken in raw buffer order. Sampling
//! deliberately follows the linear byte order rather than stepping rows and
//! columns: with a large stride the samples concentrate in the earliest rows
//! of the tile. That row bias is part of the rendered look and is kept.

/// An estimated tile color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Average the RGB channels of `pixels`, sampling every `stride`-th pixel.
///
/// `pixels` is straight RGBA, length a multiple of 4; `stride >= 1`. A byte
/// at index `i` is sampled when `i % (stride * 4) < 4`, i.e. all four bytes
/// of every `stride`-th pixel. The alpha accumulator is filled but never read.
///
/// The divisor is `pixels.len() / stride / 4` carried in floating point and
/// floored only at the end. Early integer division would shift results
/// whenever `stride` does not evenly divide the pixel count, so the division
/// order is load-bearing. Strides that do not divide the buffer evenly yield
/// a slightly biased average; that is accepted, not an error.
///
/// Pure function: no state, identical inputs give identical output.
pub fn estimate_color(pixels: &[u8], stride: u32) -> Rgb {
    debug_assert!(stride >= 1);
    debug_assert!(!pixels.is_empty() && pixels.len() % 4 == 0);

    let mut rgba = [0u64; 4];
    let window = stride as usize * 4;

    for (i, &byte) in pixels.iter().enumerate() {
        if i % window < 4 {
            rgba[i % 4] += byte as u64;
        }
    }

    // Divide first, floor last.
    let divisor = pixels.len() as f64 / stride as f64 / 4.0;

    let channel = |acc: u64| (acc as f64 / divisor).floor() as u8;

    Rgb {
        r: channel(rgba[0]),
        g: channel(rgba[1]),
        b: channel(rgba[2]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Flat RGBA buffer of `n` copies of one pixel.
    fn uniform(n: usize, pixel: [u8; 4]) -> Vec<u8> {
        pixel.iter().copied().cycle().take(n * 4).collect()
    }

    #[test]
    fn test_uniform_buffer_returns_exact_color() {
        let pixels = uniform(100, [200, 120, 40, 255]);
        for stride in [1, 2, 4, 5, 10, 20, 25, 50, 100] {
            let color = estimate_color(&pixels, stride);
            assert_eq!(color, Rgb { r: 200, g: 120, b: 40 }, "stride {stride}");
        }
    }

    #[test]
    fn test_stride_one_is_arithmetic_mean() {
        // Two pixels: (10,0,0) and (20,0,0) -> mean 15.
        let mut pixels = uniform(1, [10, 0, 0, 255]);
        pixels.extend(uniform(1, [20, 0, 0, 255]));
        let color = estimate_color(&pixels, 1);
        assert_eq!(color, Rgb { r: 15, g: 0, b: 0 });
    }

    #[test]
    fn test_stride_one_mean_floors() {
        // (10,..) and (21,..) -> 15.5 floors to 15.
        let mut pixels = uniform(1, [10, 3, 0, 255]);
        pixels.extend(uniform(1, [21, 4, 0, 255]));
        let color = estimate_color(&pixels, 1);
        assert_eq!(color, Rgb { r: 15, g: 3, b: 0 });
    }

    #[test]
    fn test_non_dividing_stride_keeps_float_divisor() {
        // 10 pixels at stride 3 sample 4 pixels against a divisor of 10/3.
        // Integer-dividing early (divisor 3) would give 800/3 = 266 on the
        // red channel; the float divisor yields exactly 1.2x per channel.
        let pixels = uniform(10, [200, 100, 50, 255]);
        let color = estimate_color(&pixels, 3);
        assert_eq!(color, Rgb { r: 240, g: 120, b: 60 });
    }

    #[test]
    fn test_alpha_never_contributes() {
        let opaque = estimate_color(&uniform(16, [50, 60, 70, 255]), 2);
        let clear = estimate_color(&uniform(16, [50, 60, 70, 0]), 2);
        assert_eq!(opaque, clear);
    }

    #[test]
    fn test_stride_larger_than_row_samples_early_rows() {
        // 8x2 tile: top row red, bottom row blue. Stride 8 samples pixels
        // 0 and 8 in linear order, one from each row here, but stride 16
        // samples only pixel 0 -- the buffer-order bias.
        let mut pixels = uniform(8, [255, 0, 0, 255]);
        pixels.extend(uniform(8, [0, 0, 255, 255]));

        let color = estimate_color(&pixels, 16);
        assert_eq!(color, Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_result_channels_in_range() {
        let pixels = uniform(60, [255, 255, 255, 255]);
        for stride in [1, 2, 3, 4, 5, 6, 10, 12, 15, 20, 30, 60] {
            let color = estimate_color(&pixels, stride);
            assert_eq!(color, Rgb { r: 255, g: 255, b: 255 }, "stride {stride}");
        }
    }

    #[test]
    fn test_idempotent() {
        let pixels: Vec<u8> = (0..=255).cycle().take(64 * 4).collect();
        let first = estimate_color(&pixels, 3);
        let second = estimate_color(&pixels, 3);
        assert_eq!(first, second);
    }
}
