//! A pure-Rust library for accessing the Melexis MLX90615 infrared thermometer over I²C.
//!
//! The MLX90615 is a single-zone thermopile sensor. It measures both its own die temperature
//! (the "ambient" temperature) and the temperature of whatever is in its field of view (the
//! "object" temperature), and exposes both as 16-bit words in its RAM. The only piece of
//! calibration a user is expected to touch is the emissivity value stored in EEPROM.
//!
//! This library uses the [`embedded-hal`][embedded-hal] I²C traits, meaning you should be able to
//! use this library on other platforms, as long as there's an `embedded-hal` I²C implementation
//! available. This library is also `no_std` compatible.
//!
//! [embedded-hal]: https://docs.rs/embedded-hal/*/embedded_hal/blocking/i2c/index.html
//!
//! # High-Level API
//! ```no_run
//! use mlx90615::Mlx90615;
//! use linux_embedded_hal::I2cdev;
//!
//! let i2c_bus = I2cdev::new("/dev/i2c-1").expect("/dev/i2c-1 needs to be an I2C controller");
//! // Default address for the MLX90615 is 0x5B
//! let mut sensor: Mlx90615<_, f32> = Mlx90615::new(i2c_bus, mlx90615::DEFAULT_ADDRESS);
//! let ambient = sensor.read_ambient_temperature()?;
//! let object = sensor.read_object_temperature()?;
//! println!("Ambient: {:.2}°C, Object: {:.2}°C", ambient, object);
//! # Ok::<(), mlx90615::Error<I2cdev>>(())
//! ```
//! The sensor is on I²C bus #1 (`/dev/i2c-1`) at the default address. Every call performs a
//! single bus transaction, nothing is cached between calls.
//!
//! # Low-Level API
//! The [`register`] module has the register map and the raw register types, and the
//! [`calculations`] module has the conversions between raw words and temperatures or
//! emissivities. Neither needs a bus, so they can be used with data acquired some other way.
//!
//! # Register Map
//! | Register            | Command | Semantics                                      |
//! |---------------------|---------|------------------------------------------------|
//! | Ambient temperature | `0x26`  | 15 bits, 0.02 K per count, bit 15 is a flag    |
//! | Object temperature  | `0x27`  | 15 bits, 0.02 K per count, bit 15 is a flag    |
//! | Emissivity          | `0x13`  | Unsigned fraction of 16384, in the range (0,1] |

#![no_std]
#![allow(clippy::float_cmp)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("Either the 'std' or 'libm' feature must be enabled.");

pub mod calculations;
#[doc(hidden)]
pub mod driver;
#[doc(hidden)]
pub mod error;
pub mod register;
#[cfg(test)]
mod test;
mod util;

#[doc(inline)]
pub use driver::Mlx90615;
#[doc(inline)]
pub use error::{Error, ErrorKind, LibraryError};
pub use register::*;
pub use util::Num;

/// The factory default I²C address of an MLX90615.
pub const DEFAULT_ADDRESS: u8 = 0x5B;
