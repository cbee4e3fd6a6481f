//! Error definitions for SW35xx driver.

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<I2cError> {
    /// Underlying I2C transaction failed (NACK, timeout, arbitration loss).
    I2c(I2cError),
    /// Requested configuration carries bits the chip does not define.
    UnsupportedValue,
    /// PD command code is reserved or undocumented.
    UnsupportedCommand(u8),
    /// ADC channel-select read-back did not match the channel just written.
    AdcChannelMismatch { expected: u8, actual: u8 },
}

impl<I2cError: core::fmt::Debug> core::fmt::Display for Error<I2cError> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C error: {:?}", e),
            Error::UnsupportedValue => write!(f, "value not encodable or reserved bits set"),
            Error::UnsupportedCommand(code) => write!(f, "unsupported PD command code {}", code),
            Error::AdcChannelMismatch { expected, actual } => {
                write!(f, "ADC channel select mismatch: wrote {}, read back {}", expected, actual)
            }
        }
    }
}
