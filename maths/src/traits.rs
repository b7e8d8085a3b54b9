use core::ops::*;

/* Minimal numeric traits, in the spirit of the num-traits crate */

pub trait Zero {
    fn zero() -> Self;
}

pub trait One {
    fn one() -> Self;
}

pub trait NumOps<Rhs = Self>:
    Add<Rhs, Output=<Self as NumOps<Rhs>>::Output>
  + Sub<Rhs, Output=<Self as NumOps<Rhs>>::Output>
  + Mul<Rhs, Output=<Self as NumOps<Rhs>>::Output>
  + Div<Rhs, Output=<Self as NumOps<Rhs>>::Output>
{
    type Output;
}

impl<T, RHS, OUT> NumOps<RHS> for T where
    T: Add<RHS, Output=OUT>
     + Sub<RHS, Output=OUT>
     + Mul<RHS, Output=OUT>
     + Div<RHS, Output=OUT>
{
    type Output = OUT;
}

pub trait NumAssignOps<Rhs = Self>:
    AddAssign<Rhs> + SubAssign<Rhs> + MulAssign<Rhs> + DivAssign<Rhs>
{}

impl<T, Rhs> NumAssignOps<Rhs> for T where
    T: AddAssign<Rhs> + SubAssign<Rhs> + MulAssign<Rhs> + DivAssign<Rhs>
{}

pub trait FloatCast {
    fn frac(top: i64, bottom: u64) -> Self;
    fn from_usize(x: usize) -> Self;
}

pub trait Float:
    NumOps<Output=Self> +
    NumAssignOps<Self> +
    Neg<Output=Self> +
    PartialOrd +
    PartialEq +
    FloatCast +
    core::fmt::Debug +
    std::iter::Sum<Self> +
    Default +
    Copy +
    Send +
    Sync +
    One +
    Zero
{
    const PI: Self;
    const TAU: Self;

    fn abs(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn sqrt(self) -> Self;
}


/************************ Implementations for f32 and f64 **********************/

macro_rules! impl_float_cast {
    ($t: ty) => {
        impl FloatCast for $t {
            #[inline(always)] fn frac(top: i64, bottom: u64) -> Self { top as $t / bottom as $t }
            #[inline(always)] fn from_usize(x: usize) -> Self { x as $t }
        }
    };
}

impl_float_cast!(f64);
impl_float_cast!(f32);

macro_rules! impl_one_zero {
    ($t: ty, $zero_literal: expr, $one_literal: expr) => {
        impl Zero for $t {
            #[inline(always)] fn zero() -> Self { $zero_literal }
        }
        impl One for $t {
            #[inline(always)] fn one() -> Self { $one_literal }
        }
    };
}

impl_one_zero!(f32, 0.0, 1.0);
impl_one_zero!(f64, 0.0, 1.0);

macro_rules! existing_impl {
    ($( fn $fname:ident ( self $( , $arg:ident : $t:ty )* ) -> $ret:ty; )*)
        => {$(
            #[inline(always)]
            fn $fname(self $(, $arg:$t)*) -> $ret {
                Self::$fname(self $(, $arg)*)
            }
    )*};
}

macro_rules! impl_float {
    ($t: ident) => {
        impl Float for $t {
            const PI: Self = core::$t::consts::PI;
            const TAU: Self = core::$t::consts::TAU;

            existing_impl! {
                fn abs(self) -> Self;
                fn sin(self) -> Self;
                fn cos(self) -> Self;
                fn tan(self) -> Self;
                fn atan2(self, other: Self) -> Self;
                fn sqrt(self) -> Self;
            }
        }
    };
}

impl_float!(f32);
impl_float!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn half_of<T: Float>(n: usize) -> T { T::from_usize(n) * T::frac(1,2) }

    #[test]
    fn casts_keep_fractions() {
        assert_eq!(half_of::<f64>(3), 1.5);
        assert_eq!(half_of::<f32>(7), 3.5);
        assert_eq!(f64::frac(-3,4), -0.75);
    }

    #[test]
    fn trig_matches_std() {
        fn generic_atan2<T: Float>(y: T, x: T) -> T { y.atan2(x) }
        assert_eq!(generic_atan2(1.0f64, -1.0), 1.0f64.atan2(-1.0));
        assert_eq!(<f64 as Float>::TAU, 2.0 * <f64 as Float>::PI);
    }
}
