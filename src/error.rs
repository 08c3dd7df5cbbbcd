//! Error definitions for MAX77801 driver.

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum Error<I2cError> {
    /// Register write transaction failed.
    BusWrite(I2cError),
    /// Register read (address write + repeated-start read) failed.
    BusRead(I2cError),
    /// Provided parameter was outside datasheet limits.
    OutOfRange,
    /// Raw selector byte does not name a defined option.
    InvalidSelector,
}

impl<I2cError: core::fmt::Debug> core::fmt::Display for Error<I2cError> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::BusWrite(e) => write!(f, "I2C write error: {:?}", e),
            Error::BusRead(e) => write!(f, "I2C read error: {:?}", e),
            Error::OutOfRange => write!(f, "parameter out of range"),
            Error::InvalidSelector => write!(f, "invalid selector value"),
        }
    }
}

/// Returned by the `TryFrom<u8>` conversions of the selector enums.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidSelector;

impl<I2cError> From<InvalidSelector> for Error<I2cError> {
    fn from(_: InvalidSelector) -> Self {
        Error::InvalidSelector
    }
}
