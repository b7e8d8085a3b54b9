use core::f64::consts::{FRAC_PI_2, PI};
use core::ops::Index;
use image::ImageBuffer;
use maths::linear_algebra::{Vector3D, Point3D};
use super::error::{CubemapError, CubemapResult};

/* The six cube faces, in the fixed order used for every face array:
 * 0=Front, 1=Right, 2=Back, 3=Left, 4=Top, 5=Bottom */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CubeFace {
    Front = 0,
    Right = 1,
    Back = 2,
    Left = 3,
    Top = 4,
    Bottom = 5,
}

/* One component of a signed permutation */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SignedAxis { axis: usize, negate: bool }

const fn pos(axis: usize) -> SignedAxis { SignedAxis { axis, negate: false } }
const fn neg(axis: usize) -> SignedAxis { SignedAxis { axis, negate: true } }

const X: usize = 0;
const Y: usize = 1;
const Z: usize = 2;

/* Sign a component must have for its face to claim a direction */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Sign { NonNegative, Negative }

impl Sign {
    #[inline]
    fn holds(self, value: f64) -> bool {
        match self {
            Sign::NonNegative => value >= 0.0,
            Sign::Negative => value < 0.0,
        }
    }
}

/* Per face tables, indexed by `CubeFace as usize`.
 * The y faces are flipped relative to x and z: negative y is Top */
const SELECTION: [(usize, Sign); 6] = [
    /* Front  */ (X, Sign::NonNegative),
    /* Right  */ (Z, Sign::NonNegative),
    /* Back   */ (X, Sign::Negative),
    /* Left   */ (Z, Sign::Negative),
    /* Top    */ (Y, Sign::Negative),
    /* Bottom */ (Y, Sign::NonNegative),
];

/* Direction -> face local (x, y, depth) */
const FACE_AXES: [[SignedAxis; 3]; 6] = [
    /* Front  */ [pos(Z), pos(Y), pos(X)],
    /* Right  */ [neg(X), pos(Y), pos(Z)],
    /* Back   */ [neg(Z), pos(Y), pos(X)],
    /* Left   */ [pos(X), pos(Y), pos(Z)],
    /* Top    */ [pos(Z), pos(X), pos(Y)],
    /* Bottom */ [pos(Z), neg(X), pos(Y)],
];

/* Camera (yaw, pitch) in radians for rendering each face out of a panorama */
const YAW_PITCH: [(f64, f64); 6] = [
    /* Front  */ (0.0, 0.0),
    /* Right  */ (FRAC_PI_2, 0.0),
    /* Back   */ (PI, 0.0),
    /* Left   */ (-FRAC_PI_2, 0.0),
    /* Top    */ (0.0, -FRAC_PI_2),
    /* Bottom */ (0.0, FRAC_PI_2),
];

impl CubeFace {
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Front, CubeFace::Right, CubeFace::Back,
        CubeFace::Left, CubeFace::Top, CubeFace::Bottom,
    ];

    #[inline] pub const fn index(self) -> usize { self as usize }

    pub const fn name(self) -> &'static str {
        match self {
            CubeFace::Front => "front",
            CubeFace::Right => "right",
            CubeFace::Back => "back",
            CubeFace::Left => "left",
            CubeFace::Top => "top",
            CubeFace::Bottom => "bottom",
        }
    }

    /* Camera yaw and pitch (radians) looking at the centre of this face */
    #[inline] pub const fn yaw_pitch(self) -> (f64, f64) { YAW_PITCH[self as usize] }

    /* Whether this face can claim `direction`, given its signed dominant
     * component. `tolerance` absorbs round off in the comparison */
    #[inline]
    pub fn claims(self, direction: Vector3D<f64>, dominant: f64, tolerance: f64) -> bool {
        let (axis, sign) = SELECTION[self as usize];
        let value = direction[axis];
        (dominant - value).abs() < tolerance && sign.holds(value)
    }

    /* Reorders and negates `direction` into this face's local frame:
     * x and y across the face, z along the face normal */
    #[inline]
    pub fn to_face_frame(self, direction: Vector3D<f64>) -> Point3D<f64> {
        let axes = FACE_AXES[self as usize];
        Vector3D::from_fn(|i| {
            let value = direction[axes[i].axis];
            if axes[i].negate { -value } else { value }
        })
    }
}

impl std::fmt::Display for CubeFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}


/* Six equally sized images, indexed by CubeFace */
#[derive(Clone, Debug, PartialEq)]
pub struct CubeFaceSet<const N: usize, T> {
    faces: [ImageBuffer<N, T>; 6],
}

impl<const N: usize, T> CubeFaceSet<N, T> {
    /* Checks that every face has the same size and a buffer of matching length */
    pub fn new(faces: [ImageBuffer<N, T>; 6]) -> CubemapResult<Self> {
        let (width, height) = faces[0].dimensions();
        for (face, image) in CubeFace::ALL.into_iter().zip(faces.iter()) {
            if !image.is_consistent() {
                return Err(CubemapError::ShapeMismatch(format!(
                    "{face} face holds {} values, expected {}x{}x{}",
                    image.data.len(), image.width, image.height, N
                )));
            }
            if image.dimensions() != (width, height) {
                return Err(CubemapError::ShapeMismatch(format!(
                    "{face} face is {}x{}, front face is {width}x{height}",
                    image.width, image.height
                )));
            }
        }
        Ok(Self { faces })
    }

    /* Same as CubeFaceSet::new, but also checks there are exactly six faces */
    pub fn from_vec(faces: Vec<ImageBuffer<N, T>>) -> CubemapResult<Self> {
        let count = faces.len();
        let faces: [ImageBuffer<N, T>; 6] = faces.try_into().map_err(|_| {
            CubemapError::ShapeMismatch(format!("expected 6 cube faces, got {count}"))
        })?;
        Self::new(faces)
    }

    #[inline] pub fn face(&self, face: CubeFace) -> &ImageBuffer<N, T> { &self.faces[face as usize] }

    /* (width, height) shared by all faces */
    #[inline] pub fn face_dimensions(&self) -> (usize, usize) { self.faces[0].dimensions() }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (CubeFace, &ImageBuffer<N, T>)> {
        CubeFace::ALL.into_iter().zip(self.faces.iter())
    }
}

impl<const N: usize, T> Index<CubeFace> for CubeFaceSet<N, T> {
    type Output = ImageBuffer<N, T>;
    #[inline] fn index(&self, face: CubeFace) -> &ImageBuffer<N, T> { self.face(face) }
}
