//! I2C bus handle held by the driver: either owned outright or borrowed from the caller.
//!
//! An owned bus is dropped together with the driver (or returned by [`Bus::into_owned`]);
//! a borrowed bus is never released by the driver.

/// Transport held by [`crate::Max77801`].
pub enum Bus<'a, I2C> {
    Owned(I2C),
    Borrowed(&'a mut I2C),
}

impl<'a, I2C> Bus<'a, I2C> {
    /// True when the driver is responsible for releasing the bus.
    pub fn is_owned(&self) -> bool {
        matches!(self, Bus::Owned(_))
    }

    /// Access the underlying transport.
    pub fn get_mut(&mut self) -> &mut I2C {
        match self {
            Bus::Owned(i2c) => i2c,
            Bus::Borrowed(i2c) => &mut **i2c,
        }
    }

    /// Give back an owned bus. A borrowed bus stays with its owner and yields `None`.
    pub fn into_owned(self) -> Option<I2C> {
        match self {
            Bus::Owned(i2c) => Some(i2c),
            Bus::Borrowed(_) => None,
        }
    }
}
