/* Equirectangular panorama to cube map faces.
 *
 * Every face is rendered by a 90 degree pinhole camera turned by the face's yaw
 * and pitch. Each camera ray is converted to longitude and latitude, which
 * give a fractional position in the panorama that is resampled with the
 * configured Interpolation. */

use core::f64::consts::FRAC_PI_2;
use image::{Channel, ImageBuffer, Interpolation};
use maths::linear_algebra::{Matrix3x3, Point2D, Vector3D};
use rayon::prelude::*;
use tracing::{debug, trace};

use super::camera::{Camera, EquirectangularCamera, PinholeCamera};
use super::error::{CubemapError, CubemapResult};
use super::face::{CubeFace, CubeFaceSet};

pub const FACE_FOV: f64 = FRAC_PI_2;

/* Output settings for erp_to_cmp_with. Sizes left as None are derived from
 * the panorama: half its height and a quarter of its width. */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaceExtraction {
    pub height: Option<usize>,
    pub width: Option<usize>,
    pub interpolation: Interpolation,
}

impl FaceExtraction {
    pub fn new() -> Self { Self::default() }

    pub fn with_height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /* (width, height) of every output face for a panorama of the given size */
    pub fn face_dimensions(&self, pano_width: usize, pano_height: usize) -> (usize, usize) {
        (self.width.unwrap_or(pano_width / 4), self.height.unwrap_or(pano_height / 2))
    }
}

/* n evenly spaced values from start to end inclusive, a single value is start */
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<_> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = end;
            values
        }
    }
}

/* Missing sizes default to half the panorama height and a quarter of its width */
pub fn erp_to_cmp<const N: usize, T: Channel>(
    pano: &ImageBuffer<N, T>,
    height: Option<usize>,
    width: Option<usize>,
) -> CubemapResult<CubeFaceSet<N, T>> {
    erp_to_cmp_with(pano, &FaceExtraction { height, width, ..FaceExtraction::default() })
}

pub fn erp_to_cmp_with<const N: usize, T: Channel>(
    pano: &ImageBuffer<N, T>,
    options: &FaceExtraction,
) -> CubemapResult<CubeFaceSet<N, T>> {
    if N == 0 {
        return Err(CubemapError::ShapeMismatch("panorama has no channels".to_string()));
    }
    if !pano.is_consistent() {
        return Err(CubemapError::ShapeMismatch(format!(
            "panorama holds {} values, expected {}x{}x{}",
            pano.data.len(), pano.width, pano.height, N
        )));
    }
    if pano.is_empty() {
        return Err(CubemapError::ShapeMismatch(format!(
            "panorama is {}x{}", pano.width, pano.height
        )));
    }
    let (width, height) = options.face_dimensions(pano.width, pano.height);
    if width == 0 || height == 0 {
        return Err(CubemapError::ShapeMismatch(format!(
            "cube faces would be {width}x{height} for a {}x{} panorama", pano.width, pano.height
        )));
    }
    if ImageBuffer::<N, T>::buffer_len(width, height).is_none() {
        return Err(CubemapError::ShapeMismatch(format!(
            "{width}x{height} cube faces are too large to allocate"
        )));
    }

    debug!(
        pano_width = pano.width, pano_height = pano.height,
        width, height, channels = N, interpolation = %options.interpolation,
        "Converting equirectangular to cube map"
    );

    let faces: Vec<_> = CubeFace::ALL.par_iter()
        .map(|&face| render_face(pano, face, width, height, options.interpolation))
        .collect();

    CubeFaceSet::from_vec(faces)
}

/* Renders one width x height face out of a non-empty panorama */
pub fn render_face<const N: usize, T: Channel>(
    pano: &ImageBuffer<N, T>,
    face: CubeFace,
    width: usize,
    height: usize,
    interpolation: Interpolation,
) -> ImageBuffer<N, T> {
    trace!(%face, width, height, "Rendering face");

    let (yaw, pitch) = face.yaw_pitch();
    let rotation = Matrix3x3::rotation_yaw_pitch(yaw, pitch);
    let camera = PinholeCamera::<f64>::default();
    let extent = camera.half_extent(FACE_FOV);

    /* Film x grows left to right, film y shrinks top to bottom */
    let film_x = linspace(-extent, extent, width);
    let film_y = linspace(-extent, extent, height);

    let mut result = ImageBuffer::<N, T>::new(width, height);
    result.data.par_chunks_mut(width * N)
        .enumerate()
        .for_each(|(row, pixels)| {
            let y = -film_y[row];
            for (pixel, &x) in pixels.chunks_exact_mut(N).zip(film_x.iter()) {
                let ray = rotation * camera.project_from_film(Point2D(x, y));
                let source = pano_position(ray, pano.width, pano.height);
                pixel.copy_from_slice(&pano.sample(source.x(), source.y(), interpolation));
            }
        });

    result
}

/* Fractional (column, row) in a panorama of the given size looked at by ray */
#[inline]
pub fn pano_position(ray: Vector3D<f64>, pano_width: usize, pano_height: usize) -> Point2D<f64> {
    let film = EquirectangularCamera.project_to_film(ray);
    EquirectangularCamera::film_to_pixel(film, pano_width, pano_height)
}
