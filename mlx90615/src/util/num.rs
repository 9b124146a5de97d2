// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross

use core::cmp;

/// A trait for numbers that can be converted into a number used in the [`calculations`] module.
///
/// This is a blend of [`num_traits::NumCast`] in that the conversions to *not* need to be precise,
/// and [`From`] in that the conversions are infallible. Another reason for this trait (and its
/// choice in naming) is to be easier to use than `T::from(value)`, which needs to be disambiguated
/// each time because of the previously mentioned traits.
///
/// [`calculations`]: crate::calculations
pub trait Coerce<T> {
    /// Convert
    fn coerce(value: T) -> Self;
}

impl<T> Coerce<T> for T {
    fn coerce(value: T) -> Self {
        value
    }
}

/// Implement [`Coerce`] for the given type by casting primitives with `as`.
macro_rules! impl_coerce {
    (as $dest:ty, $source:ty) => {
        impl Coerce<$source> for $dest {
            fn coerce(value: $source) -> Self {
                value as $dest
            }
        }
    };
    (as $dest:ty, $($source:ty),+) => {
        $(impl_coerce!(as $dest, $source);)+
    };
}
impl_coerce!(as f32, u8, u16, f64);
impl_coerce!(as f64, u8, u16, f32);

/// The floating point types temperatures and emissivities can be calculated with.
///
/// Implemented for `f32` and `f64`.
pub trait Num:
    Copy
    + cmp::PartialEq
    + cmp::PartialOrd
    + num_traits::NumOps
    + Coerce<f64>
    + Coerce<u16>
    + Coerce<u8>
{
    /// Positive zero.
    const ZERO: Self;

    /// The number 1.
    const ONE: Self;

    /// The freezing point of water in kelvins (273.15).
    const KELVINS_TO_CELSIUS: Self;

    /// The temperature difference represented by one count of a temperature register (0.02 K).
    const KELVINS_PER_COUNT: Self;

    /// The fixed-point scale of the emissivity register (2^14).
    const EMISSIVITY_SCALE: Self;

    /// A wrapper around [`Coerce`] to allow using a turbofish to disambiguate types.
    fn coerce_from<T>(value: T) -> Self
    where
        Self: Coerce<T>,
    {
        <Self as Coerce<T>>::coerce(value)
    }

    /// Round to the nearest integer (half away from zero), saturating to the range of `u16`.
    fn round_to_u16(self) -> u16;
}

/// Implements [`Num`] for the given builtin float type.
macro_rules! impl_num {
    ($typ:ty) => {
        impl Num for $typ {
            const ZERO: Self = 0.0;

            const ONE: Self = 1.0;

            const KELVINS_TO_CELSIUS: Self = 273.15;

            const KELVINS_PER_COUNT: Self = 0.02;

            const EMISSIVITY_SCALE: Self = (1u32 << 14) as Self;

            fn round_to_u16(self) -> u16 {
                <Self as num_traits::Float>::round(self) as u16
            }
        }
    };
}
impl_num!(f32);
impl_num!(f64);
