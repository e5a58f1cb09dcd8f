use core::fmt;

/// Failure reported by the GPIO driver.
///
/// Every check runs before the first register write of the step that fails,
/// so an error never leaves that step half-applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// Port, pin, mode, line, group or trigger flags out of range
    InvalidParameter,
    /// A required configuration is missing (e.g. a group with no pins)
    NullPointer,
    /// The interrupt slot already has a callback
    Busy,
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpioError::InvalidParameter => write!(f, "invalid parameter"),
            GpioError::NullPointer => write!(f, "missing configuration"),
            GpioError::Busy => write!(f, "interrupt slot busy"),
        }
    }
}

impl embedded_hal::digital::Error for GpioError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}
