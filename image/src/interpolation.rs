/* Resampling strategies for fractional pixel coordinates.
 *
 * Coordinates are in pixel index units: `(0.0, 0.0)` is the centre of the
 * top left pixel. Anything outside the image is extended from the nearest
 * edge pixel, so every coordinate yields a value */

use super::channel::Channel;
use super::imagebuffer::ImageBuffer;

/* How to reconstruct a value between pixel centres */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    Nearest,
    Bilinear,
    /* Catmull-Rom cubic over the 4x4 neighbourhood. Passes exactly through
     * the pixel values, so flat regions stay flat */
    #[default]
    Bicubic,
}

impl Interpolation {
    pub const ALL: [Interpolation; 3] = [Self::Nearest, Self::Bilinear, Self::Bicubic];

    pub fn name(self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Bilinear => "bilinear",
            Self::Bicubic => "bicubic",
        }
    }

    /* Sample `image` at fractional column `x` and row `y` */
    #[inline]
    pub fn sample<const N: usize, T: Channel>(self, image: &ImageBuffer<N, T>, x: f64, y: f64) -> [T; N] {
        match self {
            Self::Nearest => image.get_clamped(x.round() as isize, y.round() as isize),
            Self::Bilinear => bilinear(image, x, y).map(T::from_f64),
            Self::Bicubic => bicubic(image, x, y).map(T::from_f64),
        }
    }
}

impl std::str::FromStr for Interpolation {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter()
            .find(|i| i.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown interpolation '{s}', expected nearest, bilinear or bicubic"))
    }
}

impl std::fmt::Display for Interpolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[inline]
fn bilinear<const N: usize, T: Channel>(image: &ImageBuffer<N, T>, x: f64, y: f64) -> [f64; N] {
    let (x0, y0) = (x.floor(), y.floor());
    let (fx, fy) = (x - x0, y - y0);
    let (xi, yi) = (x0 as isize, y0 as isize);

    let p00 = image.get_clamped(xi, yi);
    let p10 = image.get_clamped(xi + 1, yi);
    let p01 = image.get_clamped(xi, yi + 1);
    let p11 = image.get_clamped(xi + 1, yi + 1);

    core::array::from_fn(|c| {
        let top = p00[c].to_f64() * (1.0 - fx) + p10[c].to_f64() * fx;
        let bottom = p01[c].to_f64() * (1.0 - fx) + p11[c].to_f64() * fx;
        top * (1.0 - fy) + bottom * fy
    })
}

/* Catmull-Rom weights for taps at -1, 0, 1, 2 relative to floor(x) */
#[inline]
fn catmull_rom_weights(t: f64) -> [f64; 4] {
    let (t2, t3) = (t * t, t * t * t);
    [
        (-t3 + 2.0 * t2 - t) * 0.5,
        (3.0 * t3 - 5.0 * t2 + 2.0) * 0.5,
        (-3.0 * t3 + 4.0 * t2 + t) * 0.5,
        (t3 - t2) * 0.5,
    ]
}

#[inline]
fn bicubic<const N: usize, T: Channel>(image: &ImageBuffer<N, T>, x: f64, y: f64) -> [f64; N] {
    let (x0, y0) = (x.floor(), y.floor());
    let (wx, wy) = (catmull_rom_weights(x - x0), catmull_rom_weights(y - y0));
    let (xi, yi) = (x0 as isize, y0 as isize);

    let mut result = [0.0; N];
    for (j, wy) in wy.into_iter().enumerate() {
        let row = yi + j as isize - 1;
        let mut row_sum = [0.0; N];
        for (i, wx) in wx.into_iter().enumerate() {
            let pixel = image.get_clamped(xi + i as isize - 1, row);
            for c in 0..N { row_sum[c] += pixel[c].to_f64() * wx; }
        }
        for c in 0..N { result[c] += row_sum[c] * wy; }
    }
    result
}
