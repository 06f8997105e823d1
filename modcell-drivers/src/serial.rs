//! embedded-io serial adapter
//!
//! Turns a byte stream into the non-blocking single-byte link the
//! control loop polls. A read only happens when the port reports data
//! ready, so the control loop never blocks on the link.

use embedded_io::{Read, ReadReady, Write};
use modcell_hal::{SerialRx, SerialTx};

/// Serial port backed by an embedded-io stream
pub struct IoSerial<T> {
    io: T,
}

impl<T> IoSerial<T> {
    pub fn new(io: T) -> Self {
        Self { io }
    }

    pub fn into_inner(self) -> T {
        self.io
    }
}

impl<T: Read + ReadReady> SerialRx for IoSerial<T> {
    type Error = T::Error;

    fn try_read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        if !self.io.read_ready()? {
            return Ok(None);
        }

        let mut buf = [0u8; 1];
        let n = self.io.read(&mut buf)?;
        Ok((n == 1).then_some(buf[0]))
    }
}

impl<T: Write> SerialTx for IoSerial<T> {
    type Error = T::Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.io.write_all(&[byte])
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.io.flush()
    }
}
