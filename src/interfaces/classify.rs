// ============================================================================
// Type Classification
// Compile-time predicates recognized by generic code
// ============================================================================

/// Compile-time classification of numeric types.
///
/// `IS_FIXED_POINT` is true only for the two fixed-point families
/// ([`Fixed`](crate::numeric::Fixed) and [`Norm`](crate::numeric::Norm)).
/// `IS_INTEGRAL` marks integer-backed representations, which includes both
/// families.
pub trait Classify {
    const IS_FIXED_POINT: bool = false;
    const IS_INTEGRAL: bool;
}

macro_rules! impl_classify {
    ($integral:expr => $($t:ty),* $(,)?) => {$(
        impl Classify for $t {
            const IS_INTEGRAL: bool = $integral;
        }
    )*};
}

impl_classify!(true => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_classify!(false => f32, f64);

/// Whether `T` belongs to one of the fixed-point families.
#[inline]
pub const fn is_fixed_point<T: Classify>() -> bool {
    T::IS_FIXED_POINT
}

/// Whether `T` is an integer-backed representation.
#[inline]
pub const fn is_integral<T: Classify>() -> bool {
    T::IS_INTEGRAL
}
