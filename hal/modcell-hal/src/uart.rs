//! Serial link abstractions
//!
//! The neighbor link carries single-byte messages. Reads never block:
//! the control loop polls for a pending byte once per tick.

/// Serial receiver
pub trait SerialRx {
    /// Error type for receive operations
    type Error;

    /// Take one pending byte, if any
    ///
    /// Returns `Ok(None)` when nothing has arrived. Must not block.
    fn try_read_byte(&mut self) -> Result<Option<u8>, Self::Error>;
}

/// Serial transmitter
pub trait SerialTx {
    /// Error type for transmit operations
    type Error;

    /// Queue one byte for transmission
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
