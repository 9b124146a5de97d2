// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! Conversions between raw register words and physical values.
//!
//! Temperatures are linear in the register value: each count is 0.02 K, and a register value of
//! 0 is absolute zero. So for a register word `w` (with the status flag in bit 15 removed), the
//! temperature in Celsius is `w * 0.02 - 273.15`.
//!
//! Emissivity is stored as an unsigned fixed-point fraction with 14 fractional bits, so the
//! emissivity is `w / 16384`.
use crate::error::LibraryError;
use crate::register::TEMPERATURE_HIGH_BYTE_MASK;
use crate::util::Num;

/// Remove the status flag from a full temperature register word.
fn temperature_magnitude(word: u16) -> u16 {
    word & u16::from_be_bytes([TEMPERATURE_HIGH_BYTE_MASK, 0xFF])
}

/// Convert a temperature register word into degrees Celsius.
///
/// Bit 15 is a status flag and is masked off before conversion, so the flagged and unflagged
/// versions of a word convert to the same temperature.
pub fn raw_to_celsius<F: Num>(word: u16) -> F {
    let counts = F::coerce_from(temperature_magnitude(word));
    counts * F::KELVINS_PER_COUNT - F::KELVINS_TO_CELSIUS
}

/// Convert an emissivity register word into an emissivity.
pub fn raw_to_emissivity<F: Num>(word: u16) -> F {
    F::coerce_from(word) / F::EMISSIVITY_SCALE
}

/// Convert an emissivity into the fixed-point representation used by the sensor.
///
/// Emissivity must be greater than 0 and no more than 1. The value is rounded to the nearest
/// 1/16384, so emissivities below 1/32768 are stored as 0.
pub fn emissivity_to_raw<F: Num>(emissivity: F) -> Result<u16, LibraryError> {
    // Written as a negation so that NaN is rejected.
    if !(emissivity > F::ZERO && emissivity <= F::ONE) {
        return Err(LibraryError::InvalidArgument(
            "Emissivity must be greater than 0 and no more than 1",
        ));
    }
    Ok((emissivity * F::EMISSIVITY_SCALE).round_to_u16())
}

#[cfg(test)]
mod test {
    use float_cmp::{approx_eq, assert_approx_eq};

    use crate::error::ErrorKind;

    use super::{emissivity_to_raw, raw_to_celsius, raw_to_emissivity};

    #[test]
    fn celsius_is_linear() {
        for word in 0..0x8000u16 {
            assert_eq!(
                raw_to_celsius::<f32>(word),
                f32::from(word) * 0.02 - 273.15,
                "f32 conversion of {:#06X}",
                word
            );
            assert_eq!(
                raw_to_celsius::<f64>(word),
                f64::from(word) * 0.02 - 273.15,
                "f64 conversion of {:#06X}",
                word
            );
        }
    }

    #[test]
    fn celsius_ignores_flag() {
        for word in (0..0x8000u16).step_by(7) {
            assert_eq!(
                raw_to_celsius::<f64>(word | 0x8000),
                raw_to_celsius::<f64>(word)
            );
        }
    }

    #[test]
    fn celsius_landmarks() {
        assert_approx_eq!(f64, raw_to_celsius(0), -273.15);
        // 0°C is 13657.5 counts, so check either side of it.
        assert_approx_eq!(f64, raw_to_celsius(13657), -0.01, epsilon = 1e-9);
        assert_approx_eq!(f64, raw_to_celsius(13658), 0.01, epsilon = 1e-9);
        assert_approx_eq!(f32, raw_to_celsius(0x0BE8), -212.19, epsilon = 0.0001);
    }

    #[test]
    fn emissivity_bounds() {
        assert_eq!(emissivity_to_raw(1.0f32), Ok(16384));
        for bad in [0.0, -0.5, 1.5, 1.0 + f64::EPSILON, f64::NAN, f64::INFINITY] {
            let err = emissivity_to_raw(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{} was accepted", bad);
        }
        // Positive values are accepted even when they round down to nothing.
        assert_eq!(emissivity_to_raw(1e-6f32), Ok(0));
        assert_eq!(emissivity_to_raw(1.0e-5f64), Ok(0));
        assert_eq!(emissivity_to_raw(f64::MIN_POSITIVE), Ok(0));
        assert_eq!(emissivity_to_raw(1.0f64 / 16384.0), Ok(1));
    }

    #[test]
    fn emissivity_rounds_to_nearest() {
        // 0.95 * 16384 = 15564.8
        assert_eq!(emissivity_to_raw(0.95f64), Ok(15565));
        // 0.5 is exactly representable
        assert_eq!(emissivity_to_raw(0.5f32), Ok(8192));
    }

    #[test]
    fn emissivity_round_trip() {
        const TOLERANCE: f64 = 1.0 / 16384.0;
        for tiny in [1e-9, 1e-5, 1.0 / 32768.0, 3e-5] {
            let decoded: f64 = raw_to_emissivity(emissivity_to_raw(tiny).unwrap());
            assert_approx_eq!(f64, decoded, tiny, epsilon = TOLERANCE);
        }
        let mut emissivity = 0.001f64;
        while emissivity <= 1.0 {
            let raw = emissivity_to_raw(emissivity).unwrap();
            let decoded: f64 = raw_to_emissivity(raw);
            assert!(
                approx_eq!(f64, decoded, emissivity, epsilon = TOLERANCE),
                "{} decoded as {}",
                emissivity,
                decoded
            );
            emissivity += 0.0037;
        }
        let decoded: f32 = raw_to_emissivity(emissivity_to_raw(0.87f32).unwrap());
        assert_approx_eq!(f32, decoded, 0.87, epsilon = 1.0 / 16384.0);
    }
}
