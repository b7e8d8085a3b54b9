use maths::{
    linear_algebra::{Point2D, Point3D},
    traits::{Float, One},
};

/* The camera trait for implementing projections between film and world directions */
pub trait Camera<T> {
    fn project_to_film(&self, point: Point3D<T>) -> Point2D<T>;
    fn project_from_film(&self, point: Point2D<T>) -> Point3D<T>;
}

/* Pinhole camera looking down +z, film y points up */
#[derive(Clone, Copy, Debug)]
pub struct PinholeCamera<T> { pub focal_length: T }

impl<T:Float> PinholeCamera<T> {
    /* Film half extent covering `fov` radians at this focal length */
    #[inline] pub fn half_extent(&self, fov: T) -> T { (fov / T::frac(2,1)).tan() * self.focal_length }
}

impl<T:Float> Camera<T> for PinholeCamera<T> {
    #[inline] fn project_to_film(&self, p: Point3D<T>) -> Point2D<T> { p.xy() / p.z() * self.focal_length }
    #[inline] fn project_from_film(&self, p: Point2D<T>) -> Point3D<T> { Point3D(p.x(), p.y(), self.focal_length) }
}

impl <T: One> Default for PinholeCamera<T> {
    #[inline] fn default() -> Self { Self { focal_length: T::one() } }
}

/* Equirectangular camera for 360 panoramas. Film coordinates are -0.5 to +0.5
 * on both axes: x is longitude from +z towards +x, y runs from the north pole
 * (+y, film -0.5) down to the south pole (film +0.5). */
#[derive(Clone, Copy, Debug, Default)]
pub struct EquirectangularCamera;

impl EquirectangularCamera {
    /* Film coordinates to fractional pixel indices, pixel centres at integers */
    #[inline]
    pub fn film_to_pixel<T: Float>(film: Point2D<T>, width: usize, height: usize) -> Point2D<T> {
        let half = T::frac(1,2);
        Point2D(
            (film.x() + half) * T::from_usize(width) - half,
            (film.y() + half) * T::from_usize(height) - half,
        )
    }
}

impl<T:Float> Camera<T> for EquirectangularCamera {
    #[inline]
    fn project_to_film(&self, p: Point3D<T>) -> Point2D<T> {
        let longitude = p.x().atan2(p.z());
        let latitude = p.y().atan2((p.x()*p.x() + p.z()*p.z()).sqrt());
        Point2D(longitude / T::TAU, -latitude / T::PI)
    }
    #[inline]
    fn project_from_film(&self, film: Point2D<T>) -> Point3D<T> {
        let (longitude, latitude) = (film.x() * T::TAU, -film.y() * T::PI);
        let (sinx, cosx) = (longitude.sin(), longitude.cos());
        let (siny, cosy) = (latitude.sin(), latitude.cos());
        Point3D(cosy * sinx, siny, cosy * cosx)
    }
}
