/* Cube map faces to an equirectangular panorama.
 *
 * Each output pixel is turned into a direction on the unit sphere, the
 * dominant cube face is picked, the direction is perspective divided onto
 * that face and the closest face pixel is copied. No blending, flat faces
 * produce exactly flat regions. */

use core::f64::consts::{FRAC_PI_2, PI};
use image::{Channel, ImageBuffer};
use maths::linear_algebra::{Point2D, Vector3D};
use rayon::prelude::*;
use tracing::debug;

use super::error::{CubemapError, CubemapResult};
use super::face::{CubeFace, CubeFaceSet};

/* Largest gap between the dominant component and another component
 * for which the other component's face can still claim a direction */
pub const FACE_TOLERANCE: f64 = 1e-5;

/* Faces are tested in this order and the last one that claims a direction wins,
 * so on near ties y faces beat z faces, which beat x faces */
const SELECTION_ORDER: [CubeFace; 6] = CubeFace::ALL;

/* Unit direction for output pixel (col, row) of a width x height panorama.
 * Longitude runs from -pi at column 0 and latitude from -pi/2 at row 0,
 * y points down the image. */
#[inline]
pub fn pixel_direction(col: usize, row: usize, width: usize, height: usize) -> Vector3D<f64> {
    let x = 2.0 * col as f64 / width as f64 - 1.0;
    let y = 2.0 * row as f64 / height as f64 - 1.0;
    let (theta, phi) = (x * PI, y * FRAC_PI_2);
    Vector3D(phi.cos() * theta.cos(), phi.sin(), phi.cos() * theta.sin())
}

#[inline]
pub fn select_face(direction: Vector3D<f64>) -> CubeFace {
    let dominant = direction[direction.argmax_abs()];
    SELECTION_ORDER.into_iter()
        .rev()
        .find(|face| face.claims(direction, dominant, FACE_TOLERANCE))
        /* Only a NaN direction matches nothing */
        .unwrap_or(CubeFace::Front)
}

/* Face local (u, v) in [0, 1], perspective divided by the normal component */
#[inline]
pub fn face_local(face: CubeFace, direction: Vector3D<f64>) -> Point2D<f64> {
    let raw = face.to_face_frame(direction);
    let depth = raw.z().abs();
    Point2D((raw.x() / depth + 1.0) / 2.0, (raw.y() / depth + 1.0) / 2.0)
}

/* Pixel (column, row) on a size x size face, always inside the face */
#[inline]
pub fn face_texel(face: CubeFace, direction: Vector3D<f64>, size: usize) -> (usize, usize) {
    let uv = face_local(face, direction);
    let last = size.saturating_sub(1) as f64;
    /* NaN clamps to NaN and casts to 0 */
    let to_index = |t: f64| (t * size as f64).round_ties_even().clamp(0.0, last) as usize;
    (to_index(uv.x()), to_index(uv.y()))
}

/* Six square H x H faces to an H x 2H equirectangular panorama */
pub fn cmp_to_erp<const N: usize, T: Channel>(faces: &CubeFaceSet<N, T>) -> CubemapResult<ImageBuffer<N, T>> {
    if N == 0 {
        return Err(CubemapError::ShapeMismatch("cube faces have no channels".to_string()));
    }
    let (face_width, face_height) = faces.face_dimensions();
    if face_width != face_height {
        return Err(CubemapError::ShapeMismatch(format!(
            "cube faces must be square, got {face_width}x{face_height}"
        )));
    }
    if face_width == 0 {
        return Err(CubemapError::ShapeMismatch("cube faces are empty".to_string()));
    }

    let size = face_width;
    let (width, height) = match size.checked_mul(2) {
        Some(width) if ImageBuffer::<N, T>::buffer_len(width, size).is_some() => (width, size),
        _ => return Err(CubemapError::ShapeMismatch(format!("{size}x{size} faces give a panorama too large to allocate"))),
    };
    debug!(face_size = size, width, height, channels = N, "Converting cube map to equirectangular");

    let mut result = ImageBuffer::<N, T>::new(width, height);
    result.data.par_chunks_mut(width * N)
        .enumerate()
        .for_each(|(row, pixels)| {
            for (col, pixel) in pixels.chunks_exact_mut(N).enumerate() {
                let direction = pixel_direction(col, row, width, height);
                let face = select_face(direction);
                let (x, y) = face_texel(face, direction, size);
                pixel.copy_from_slice(&faces[face].pixel(x, y));
            }
        });

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const COLOURS: [[u8; 3]; 6] = [
        [200, 10, 10], [10, 200, 10], [10, 10, 200],
        [200, 200, 10], [10, 200, 200], [200, 10, 200],
    ];

    fn solid_faces(size: usize) -> CubeFaceSet<3, u8> {
        let faces = COLOURS.map(|colour| ImageBuffer::from_fn(size, size, |_, _| colour));
        CubeFaceSet::new(faces).unwrap()
    }

    #[test]
    fn output_is_twice_as_wide_as_tall() {
        let erp = cmp_to_erp(&solid_faces(16)).unwrap();
        assert_eq!(erp.dimensions(), (32, 16));
        assert_eq!(erp.data.len(), 32 * 16 * 3);
    }

    #[test]
    fn landmark_pixels_pick_expected_faces() {
        let (width, height) = (64, 32);
        let cases = [
            (width / 2, height / 2, CubeFace::Front),
            (3 * width / 4, height / 2, CubeFace::Right),
            (0, height / 2, CubeFace::Back),
            (width / 4, height / 2, CubeFace::Left),
            (width / 2, 0, CubeFace::Top),
            (width / 2, height - 1, CubeFace::Bottom),
        ];
        for (col, row, expected) in cases {
            assert_eq!(select_face(pixel_direction(col, row, width, height)), expected, "pixel {col},{row}");
        }
    }

    #[test]
    fn ties_resolve_towards_later_faces() {
        let d = 0.5f64.sqrt();
        assert_eq!(select_face(Vector3D(d, 0.0, d)), CubeFace::Right);
        assert_eq!(select_face(Vector3D(-d, 0.0, -d)), CubeFace::Left);
        assert_eq!(select_face(Vector3D(-d, -d, 0.0)), CubeFace::Top);
        assert_eq!(select_face(Vector3D(d, d, 0.0)), CubeFace::Bottom);
        assert_eq!(select_face(Vector3D(0.0, d, -d)), CubeFace::Bottom);
        /* Ties only count when the signed values agree */
        assert_eq!(select_face(Vector3D(d, -d, 0.0)), CubeFace::Front);
        /* Inside the tolerance still counts as a tie */
        assert_eq!(select_face(Vector3D(d + 5e-6, 0.0, d)), CubeFace::Right);
        assert_eq!(select_face(Vector3D(d + 5e-5, 0.0, d)), CubeFace::Front);
    }

    #[test]
    fn face_centres_map_to_middle_of_face() {
        for (direction, face) in [
            (Vector3D(1.0, 0.0, 0.0), CubeFace::Front),
            (Vector3D(0.0, 0.0, 1.0), CubeFace::Right),
            (Vector3D(-1.0, 0.0, 0.0), CubeFace::Back),
            (Vector3D(0.0, 0.0, -1.0), CubeFace::Left),
            (Vector3D(0.0, -1.0, 0.0), CubeFace::Top),
            (Vector3D(0.0, 1.0, 0.0), CubeFace::Bottom),
        ] {
            let uv = face_local(face, direction);
            assert_abs_diff_eq!(uv.x(), 0.5);
            assert_abs_diff_eq!(uv.y(), 0.5);
            assert_eq!(face_texel(face, direction, 9), (4, 4));
        }
    }

    #[test]
    fn texels_stay_in_bounds() {
        let d = 1.0 / 3.0f64.sqrt();
        let mut directions = vec![
            Vector3D(d, d, d), Vector3D(-d, -d, -d), Vector3D(d, -d, d),
            Vector3D(1.0, 0.0, 0.0), Vector3D(0.0, -1.0, 0.0), Vector3D(0.0, 0.0, -1.0),
        ];
        let (width, height) = (40, 20);
        for row in 0..height {
            for col in 0..width {
                directions.push(pixel_direction(col, row, width, height));
            }
        }
        for size in [1, 2, 7, 20] {
            for &direction in &directions {
                let face = select_face(direction);
                let (x, y) = face_texel(face, direction, size);
                assert!(x < size && y < size, "{x},{y} outside {size} for {direction:?}");
            }
        }
    }

    #[test]
    fn centre_pixel_samples_front_centre() {
        let size = 8;
        let faces: Vec<_> = (0..6u8).map(|i| {
            ImageBuffer::<3, u8>::from_fn(size, size, |x, y| {
                if (x, y) == (size / 2, size / 2) { [100 + i; 3] } else { [i; 3] }
            })
        }).collect();
        let erp = cmp_to_erp(&CubeFaceSet::from_vec(faces).unwrap()).unwrap();
        assert_eq!(erp.pixel(size, size / 2), [100; 3]);
        assert_eq!(erp.pixel(3 * size / 2, size / 2), [101; 3]);
        assert_eq!(erp.pixel(size / 2, size / 2), [103; 3]);
    }

    #[test]
    fn flat_faces_give_exact_colours() {
        let erp = cmp_to_erp(&solid_faces(12)).unwrap();
        for row in 0..erp.height {
            for col in 0..erp.width {
                let face = select_face(pixel_direction(col, row, erp.width, erp.height));
                assert_eq!(erp.pixel(col, row), COLOURS[face.index()]);
            }
        }
    }

    #[test]
    fn single_pixel_faces() {
        let erp = cmp_to_erp(&solid_faces(1)).unwrap();
        assert_eq!(erp.dimensions(), (2, 1));
    }

    #[test]
    fn rejects_non_square_faces() {
        let faces: Vec<_> = (0..6).map(|_| ImageBuffer::<3, u8>::new(4, 3)).collect();
        let faces = CubeFaceSet::from_vec(faces).unwrap();
        assert!(matches!(cmp_to_erp(&faces), Err(CubemapError::ShapeMismatch(_))));
    }

    #[test]
    fn rejects_empty_faces() {
        let faces: Vec<_> = (0..6).map(|_| ImageBuffer::<3, u8>::new(0, 0)).collect();
        let faces = CubeFaceSet::from_vec(faces).unwrap();
        assert!(matches!(cmp_to_erp(&faces), Err(CubemapError::ShapeMismatch(_))));
    }

    #[test]
    fn rejects_channelless_faces() {
        let faces: Vec<_> = (0..6).map(|_| ImageBuffer::<0, u8>::new(4, 4)).collect();
        let faces = CubeFaceSet::from_vec(faces).unwrap();
        assert!(matches!(cmp_to_erp(&faces), Err(CubemapError::ShapeMismatch(_))));
    }
}
