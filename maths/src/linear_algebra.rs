use super::traits::Float;
use std::ops::{Mul, Div};
use std::iter::Sum;
use core::array;

/*********************************************************************/
/*********************** Matrix implementation ***********************/
/*********************************************************************/

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix<T, const R: usize, const C: usize> (pub [[T; C]; R]);
pub type MatrixNxN<T, const N: usize> = Matrix<T, N, N>;
pub type Matrix3x3<T> = MatrixNxN<T,3>;

impl <T, const R: usize, const C: usize> Matrix<T, R, C> {
    #[inline]
    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        Self(array::from_fn(|row| array::from_fn(|col| f(row, col))))
    }
}

/* 3x3 rotations, right handed, angles in radians */
impl<T: Float> Matrix3x3<T> {
    /* Rotation about the horizontal (x) axis, used for pitch */
    #[inline]
    pub fn rotation_x(angle: T) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        let (o, l) = (T::zero(), T::one());
        Self([[l, o,  o],
              [o, c, -s],
              [o, s,  c]])
    }

    /* Rotation about the vertical (y) axis, used for yaw */
    #[inline]
    pub fn rotation_y(angle: T) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        let (o, l) = (T::zero(), T::one());
        Self([[ c, o, s],
              [ o, l, o],
              [-s, o, c]])
    }

    /* Camera orientation: pitch first, then yaw (Ry * Rx) */
    #[inline]
    pub fn rotation_yaw_pitch(yaw: T, pitch: T) -> Self {
        Self::rotation_y(yaw) * Self::rotation_x(pitch)
    }
}

/***************** Standard operator implementations *****************/
/* Matrix multiplication */
impl<T, const R: usize, const C: usize, const N: usize> Mul<Matrix<T,N,C>> for Matrix<T,R,N>
  where T: Copy + Mul<Output=T> + Sum {
    type Output = Matrix<T,R,C>;
    #[inline]
    fn mul(self, m: Matrix<T,N,C>) -> Self::Output {
        Matrix::from_fn(|r,c| (0..N).map(|i| self[r][i] * m[i][c]).sum())
    }
}

/* Column vector multiplication */
impl<T: Copy + Mul<Output=T> + Sum, const C: usize, const N: usize> Mul<Vector<T,C>> for Matrix<T,N,C> {
    type Output = Vector<T,N>;
    #[inline] fn mul(self, v: Vector<T,C>) -> Vector<T,N> {
        Vector::from_fn(|i| (Vector(self[i]) * v).into_iter().sum())
    }
}

/***************************** Indexing *****************************/
impl<T, const R: usize, const C: usize> std::ops::Index<usize> for Matrix<T,R,C> {
    type Output = [T;C];
    #[inline] fn index(&self, i: usize) -> &[T;C] { &self.0[i] }
}


/*********************************************************************/
/*********************** Vector implementation ***********************/
/*********************************************************************/

#[derive(Copy,Clone,Debug,PartialEq)]
pub struct Vector<T, const N: usize> (pub [T; N]);

pub type Vector2D<T> = Vector<T, 2>;
pub type Vector3D<T> = Vector<T, 3>;
pub type Point2D<T> = Vector2D<T>;
pub type Point3D<T> = Vector3D<T>;

#[allow(non_snake_case)] #[inline] pub fn Vector2D<T>(x:T, y:T) -> Vector2D<T> {Vector([x,y])}
#[allow(non_snake_case)] #[inline] pub fn Vector3D<T>(x:T, y:T, z:T) -> Vector3D<T> {Vector([x,y,z])}
#[allow(non_snake_case)] #[inline] pub fn Point2D<T>(x:T, y:T) -> Vector2D<T> {Vector2D(x,y)}
#[allow(non_snake_case)] #[inline] pub fn Point3D<T>(x:T, y:T, z:T) -> Vector3D<T> {Vector3D(x,y,z)}

impl <T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<T, const N: usize> Vector<T,N> {
    #[inline] pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self { Self(array::from_fn(f)) }

    #[inline] pub fn map<F: FnMut(T) -> U, U>(self, f: F) -> Vector<U,N> { Vector(self.0.map(f)) }

    #[inline(always)] pub fn x(self) -> T where T: Copy {self[0]}
    #[inline(always)] pub fn y(self) -> T where T: Copy {self[1]}
    #[inline(always)] pub fn z(self) -> T where T: Copy {self[2]}
    #[inline(always)] pub fn xy(self) -> Vector2D<T> where T: Copy { Vector2D(self[0],self[1]) }

    /* Index of the component with the largest absolute value, first one wins on exact ties */
    #[inline]
    pub fn argmax_abs(self) -> usize where T: Float {
        (1..N).fold(0, |best, i| if self[i].abs() > self[best].abs() { i } else { best })
    }
}

/***************************** Indexing *****************************/
impl<T, const N: usize> std::ops::Index<usize> for Vector<T,N> {
    type Output = T;
    #[inline] fn index(&self, i: usize) -> &T { &self.0[i] }
}

/***************** Standard operator implementations *****************/
/* Element-wise product */
impl<T: Copy + Mul<Output=T>, const N: usize> Mul<Self> for Vector<T,N> {
    type Output = Self;
    #[inline] fn mul(self, rhs: Self) -> Self { Self::from_fn(|i| self[i] * rhs[i]) }
}

/* Vector-scalar operations */
impl<T: Copy + Mul<Output=T>, const N: usize> Mul<T> for Vector<T,N> {
    type Output = Self;
    #[inline] fn mul(self, x: T) -> Self { self.map(|y| y * x) }
}
impl<T: Copy + Div<Output=T>, const N: usize> Div<T> for Vector<T,N> {
    type Output = Self;
    #[inline] fn div(self, x: T) -> Self { self.map(|y| y / x) }
}
