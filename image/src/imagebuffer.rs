use super::channel::Channel;
use super::interpolation::Interpolation;

/* Interleaved row-major pixels, NCHANNELS values per pixel, no padding */
#[derive(Clone, Default, Debug, PartialEq)]
pub struct ImageBuffer<const NCHANNELS: usize, T> {
    pub width: usize,
    pub height: usize,
    pub data: Vec<T>,
}

impl<const NCHANNELS: usize, T> ImageBuffer<NCHANNELS, T>
{
    #[inline]
    pub fn new(width: usize, height: usize) -> Self where T: Default + Copy {
        Self { width, height, data: vec![T::default(); width*height*NCHANNELS] }
    }

    /* Does not check the length, see `is_consistent` */
    #[inline]
    pub fn new_with_data(width: usize, height: usize, data: Vec<T>) -> Self {
        Self { width, height, data }
    }

    /* Builds an image from a per pixel function of (x, y) */
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
      where F: FnMut(usize, usize) -> [T; NCHANNELS] {
        let mut data = Vec::with_capacity(width*height*NCHANNELS);
        for y in 0..height {
            for x in 0..width {
                data.extend(f(x, y));
            }
        }
        Self { width, height, data }
    }

    /* Length of `data` for a width x height image, None when it would not fit in memory */
    #[inline]
    pub fn buffer_len(width: usize, height: usize) -> Option<usize> {
        width.checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(NCHANNELS))
            .filter(|len| len.checked_mul(core::mem::size_of::<T>()).is_some_and(|bytes| bytes <= isize::MAX as usize))
    }

    /* True when data holds exactly width*height pixels */
    #[inline]
    pub fn is_consistent(&self) -> bool {
        Self::buffer_len(self.width, self.height).is_some_and(|len| len == self.data.len())
    }

    #[inline] pub fn is_empty(&self) -> bool { self.width == 0 || self.height == 0 }
    #[inline] pub fn dimensions(&self) -> (usize, usize) { (self.width, self.height) }
}

impl<const NCHANNELS: usize, T: Copy> ImageBuffer<NCHANNELS, T>
{
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [T; NCHANNELS] {
        let offset = (y * self.width + x) * NCHANNELS;
        core::array::from_fn(|c| self.data[offset + c])
    }

    /* Out of range coordinates read the nearest edge pixel. Image must not be empty. */
    #[inline]
    pub fn get_clamped(&self, x: isize, y: isize) -> [T; NCHANNELS] {
        let x = x.clamp(0, self.width as isize - 1) as usize;
        let y = y.clamp(0, self.height as isize - 1) as usize;
        self.pixel(x, y)
    }
}

impl<const NCHANNELS: usize, T: Channel> ImageBuffer<NCHANNELS, T>
{
    /* x and y in pixel index units, 0.0,0.0 = centre of the top left pixel */
    #[inline]
    pub fn sample(&self, x: f64, y: f64, interpolation: Interpolation) -> [T; NCHANNELS] {
        interpolation.sample(self, x, y)
    }
}
