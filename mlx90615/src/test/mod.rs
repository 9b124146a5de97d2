
pub(crate) use i2c_mock::{I2cOperation, MockError, MockSensorBus};
