/* A single colour channel element that can be carried through resampling.
 *
 * Interpolated values are computed in `f64` and converted back with
 * rounding and saturation for the integer types */
pub trait Channel: Copy + Default + Send + Sync + core::fmt::Debug {
    fn to_f64(self) -> f64;
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_integer_channel {
    ($t: ty) => {
        impl Channel for $t {
            #[inline(always)] fn to_f64(self) -> f64 { self as f64 }
            #[inline(always)]
            fn from_f64(value: f64) -> Self {
                /* `as` saturates and maps NaN to zero */
                value.round() as $t
            }
        }
    };
}

impl_integer_channel!(u8);
impl_integer_channel!(u16);

impl Channel for f32 {
    #[inline(always)] fn to_f64(self) -> f64 { self as f64 }
    #[inline(always)] fn from_f64(value: f64) -> Self { value as f32 }
}
