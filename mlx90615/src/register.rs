// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross
//! The register map of the MLX90615, and types for the values stored in those registers.
//!
//! All registers are 16 bits wide and are transferred least significant byte first.
use core::convert::{TryFrom, TryInto};

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::calculations::{emissivity_to_raw, raw_to_celsius, raw_to_emissivity};
use crate::error::LibraryError;
use crate::util::{is_bit_set, Num, WORD_SIZE};

/// Mask applied to the high byte of a temperature register to drop the status flag.
///
/// Bit 15 of the temperature registers is set by the sensor to flag a problem with the
/// measurement; it is not part of the temperature magnitude.
pub const TEMPERATURE_HIGH_BYTE_MASK: u8 = 0x7F;

/// The position of the status flag within a temperature register word.
const TEMPERATURE_FLAG_BIT: usize = 15;

/// Opcode bits selecting which memory a command accesses.
const MEMORY_SELECT_MASK: u8 = 0xF0;

/// The commands for the registers this library accesses.
///
/// The high nibble of each command selects the memory (`0x1_` for EEPROM, `0x2_` for RAM) and the
/// low nibble is the address within that memory.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum RegisterAddress {
    /// Emissivity, stored in EEPROM.
    Emissivity = 0x13,

    /// The sensor's die temperature.
    Ambient = 0x26,

    /// The temperature of the object in the sensor's field of view.
    Object = 0x27,
}

/// The two memories accessible on the sensor.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Memory {
    Eeprom,
    Ram,
}

impl RegisterAddress {
    /// Which memory this register lives in.
    pub fn memory(&self) -> Memory {
        match u8::from(*self) & MEMORY_SELECT_MASK {
            0x10 => Memory::Eeprom,
            _ => Memory::Ram,
        }
    }

    /// The command byte sent to the sensor to select this register.
    pub fn command(&self) -> u8 {
        (*self).into()
    }
}

/// Split a register-sized slice into its two bytes, failing if it isn't exactly one word.
fn word_bytes(buf: &[u8]) -> Result<[u8; WORD_SIZE], LibraryError> {
    buf.try_into().map_err(|_| LibraryError::MalformedResponse {
        expected: WORD_SIZE,
        actual: buf.len(),
    })
}

/// The contents of either the ambient or object temperature register.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureRegister {
    /// The temperature in counts of 0.02 K, with the status flag removed.
    raw: u16,

    /// The status flag from bit 15.
    error_flag: bool,
}

impl TemperatureRegister {
    /// Decode a temperature register from the two bytes sent by the sensor, low byte first.
    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        let [low, high] = bytes;
        let raw = (u16::from(high & TEMPERATURE_HIGH_BYTE_MASK) << 8) | u16::from(low);
        let error_flag = is_bit_set(u16::from_le_bytes(bytes), TEMPERATURE_FLAG_BIT);
        Self { raw, error_flag }
    }

    /// The temperature as a count of 0.02 K, without the status flag.
    pub fn raw(&self) -> u16 {
        self.raw
    }

    /// Whether the sensor set the status flag (bit 15) for this measurement.
    ///
    /// The flag has no effect on the [`celsius`][TemperatureRegister::celsius] value.
    pub fn error_flag(&self) -> bool {
        self.error_flag
    }

    /// The temperature in degrees Celsius.
    pub fn celsius<F: Num>(&self) -> F {
        raw_to_celsius(self.raw)
    }
}

impl<'a> TryFrom<&'a [u8]> for TemperatureRegister {
    type Error = LibraryError;

    fn try_from(buf: &'a [u8]) -> Result<Self, Self::Error> {
        word_bytes(buf).map(Self::from_le_bytes)
    }
}

/// The contents of the emissivity register.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmissivityRegister(u16);

impl EmissivityRegister {
    /// Encode an emissivity value, rejecting anything outside of (0, 1].
    pub fn from_emissivity<F: Num>(emissivity: F) -> Result<Self, LibraryError> {
        emissivity_to_raw(emissivity).map(Self)
    }

    /// The raw fixed-point value, in units of 1/16384.
    pub fn raw(&self) -> u16 {
        self.0
    }

    /// The emissivity this register represents.
    pub fn emissivity<F: Num>(&self) -> F {
        raw_to_emissivity(self.0)
    }
}

impl<'a> TryFrom<&'a [u8]> for EmissivityRegister {
    type Error = LibraryError;

    fn try_from(buf: &'a [u8]) -> Result<Self, Self::Error> {
        word_bytes(buf).map(|bytes| Self(u16::from_le_bytes(bytes)))
    }
}

impl From<EmissivityRegister> for [u8; 2] {
    fn from(register: EmissivityRegister) -> Self {
        register.0.to_le_bytes()
    }
}
