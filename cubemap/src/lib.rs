/* Conversion between cube map (six face) and equirectangular 360° panoramas.
 *
 * - forward::cmp_to_erp turns six H x H faces into one H x 2H panorama,
 *   copying the nearest face pixel.
 * - inverse::erp_to_cmp turns a panorama into six faces rendered by
 *   90° pinhole cameras, resampled with a configurable Interpolation.
 *
 * Faces are always ordered front, right, back, left, top, bottom
 * (see CubeFace). Channels are passed through untouched, so BGR input
 * stays BGR */

/* Shared bits */
mod error;
pub mod face;
pub mod camera;

/* The two conversions */
pub mod forward;
pub mod inverse;

/* OpenCV glue for the command line tool */
#[cfg(feature = "cli")]
pub mod utils;

pub use error::{CubemapError, CubemapResult};
pub use face::{CubeFace, CubeFaceSet};
pub use forward::cmp_to_erp;
pub use inverse::{erp_to_cmp, erp_to_cmp_with, FaceExtraction};
pub use image::{ImageBuffer, Interpolation};
