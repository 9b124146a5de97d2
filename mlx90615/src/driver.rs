// SPDX-License-Identifier: Apache-2.0
// Copyright © 2021 Will Ross

use core::convert::TryFrom;
use core::marker::PhantomData;

use embedded_hal::blocking::i2c;
use paste::paste;

use crate::error::Error;
use crate::register::*;
use crate::util::{trace, Num, WORD_SIZE};

/// DRY macro for the methods in `Mlx90615` that read one of the temperature registers.
///
/// Generates both `read_$name_temperature`, returning degrees Celsius, and `read_raw_$name`,
/// returning the decoded register so the status flag can be checked.
macro_rules! read_temperature {
    { $name:ident, $register:ident, $doc:literal } => {
    paste! {
        #[doc = $doc]
        pub fn [< read_ $name _temperature >](&mut self) -> Result<F, Error<I2C>> {
            let register = self.[< read_raw_ $name >]()?;
            let celsius = register.celsius();
            Ok(celsius)
        }

        #[doc = concat!(
            "Read the ", stringify!($name), " temperature register without converting it.\n\n",
            "The returned register still has the status flag available through ",
            "[`TemperatureRegister::error_flag`]."
        )]
        pub fn [< read_raw_ $name >](&mut self) -> Result<TemperatureRegister, Error<I2C>> {
            let bytes = read_register(&mut self.bus, self.address, RegisterAddress::$register)?;
            let register = TemperatureRegister::try_from(&bytes[..])?;
            trace!(
                "{} temperature register: {}",
                RegisterAddress::$register,
                register
            );
            Ok(register)
        }
    }};
}

/// Driver for an MLX90615 infrared thermometer.
///
/// The driver owns the I²C bus it is given until [`release`][Mlx90615::release] is called. Every
/// method performs exactly one bus transaction (or none, if the arguments are rejected); nothing
/// is cached and nothing is retried. If the bus is shared, serializing access to it is up to
/// whatever is providing the `I2C` implementation.
///
/// `F` is the floating point type temperatures and emissivities are calculated with, either
/// `f32` (the default) or `f64`.
#[derive(Clone, Debug)]
pub struct Mlx90615<I2C, F = f32> {
    /// The I²C bus this sensor is accessible on.
    bus: I2C,

    /// The I²C address this sensor is accessible at.
    address: u8,

    _float: PhantomData<F>,
}

impl<I2C, F> Mlx90615<I2C, F>
where
    I2C: i2c::WriteRead + i2c::Write,
    F: Num,
{
    /// Create a `Mlx90615` for accessing the sensor at the given I²C address.
    ///
    /// The default address is [`0x5B`][crate::DEFAULT_ADDRESS]. Nothing is sent to the sensor
    /// until a method is called.
    pub fn new(bus: I2C, address: u8) -> Self {
        Self {
            bus,
            address,
            _float: PhantomData,
        }
    }

    /// The I²C address the sensor is being accessed at.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Consume the driver, giving back the I²C bus.
    pub fn release(self) -> I2C {
        self.bus
    }

    read_temperature! {
        ambient,
        Ambient,
        "Read the sensor's die temperature, in degrees Celsius."
    }

    read_temperature! {
        object,
        Object,
        "Read the temperature of the object in the sensor's field of view, in degrees Celsius."
    }

    /// Read the emissivity the sensor is using for object temperature calculations.
    pub fn read_emissivity(&mut self) -> Result<F, Error<I2C>> {
        Ok(self.read_raw_emissivity()?.emissivity())
    }

    /// Read the emissivity register without converting it.
    pub fn read_raw_emissivity(&mut self) -> Result<EmissivityRegister, Error<I2C>> {
        let bytes = read_register(&mut self.bus, self.address, RegisterAddress::Emissivity)?;
        let register = EmissivityRegister::try_from(&bytes[..])?;
        trace!("Emissivity register: {}", register);
        Ok(register)
    }

    /// Set the emissivity used by the sensor.
    ///
    /// Emissivity must be greater than 0 and no more than 1. Values outside of that range are
    /// rejected with [`LibraryError::InvalidArgument`][crate::LibraryError::InvalidArgument]
    /// without anything being sent to the sensor.
    pub fn write_emissivity(&mut self, emissivity: F) -> Result<(), Error<I2C>> {
        let register = EmissivityRegister::from_emissivity(emissivity)?;
        write_register(
            &mut self.bus,
            self.address,
            RegisterAddress::Emissivity,
            register.into(),
        )
    }

    /// "Reset" the sensor by setting the emissivity back to 1.
    pub fn reset(&mut self) -> Result<(), Error<I2C>> {
        self.write_emissivity(F::ONE)
    }
}

fn read_register<I2C>(
    bus: &mut I2C,
    i2c_address: u8,
    register: RegisterAddress,
) -> Result<[u8; WORD_SIZE], Error<I2C>>
where
    I2C: i2c::WriteRead + i2c::Write,
{
    let mut register_bytes = [0u8; WORD_SIZE];
    bus.write_read(i2c_address, &[register.command()], &mut register_bytes)
        .map_err(Error::I2cWriteReadError)?;
    trace!(
        "Read {} from {:#x}: {:#x}",
        register,
        i2c_address,
        register_bytes
    );
    Ok(register_bytes)
}

fn write_register<I2C>(
    bus: &mut I2C,
    i2c_address: u8,
    register: RegisterAddress,
    register_bytes: [u8; WORD_SIZE],
) -> Result<(), Error<I2C>>
where
    I2C: i2c::WriteRead + i2c::Write,
{
    trace!(
        "Writing {:#x} to {} on {:#x}",
        register_bytes,
        register,
        i2c_address
    );
    let combined: [u8; WORD_SIZE + 1] =
        [register.command(), register_bytes[0], register_bytes[1]];
    bus.write(i2c_address, &combined)
        .map_err(Error::I2cWriteError)?;
    Ok(())
}
