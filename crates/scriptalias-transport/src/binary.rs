//! `BinaryWriter`-compatible primitives.
//!
//! Integers are little endian, booleans are a single byte, and strings are
//! UTF-8 bytes prefixed with their byte count as a 7-bit encoded integer.

use std::io::{self, Read, Write};

use crate::{Result, TransportError};

// A 7-bit encoded u32 never needs more than five bytes.
const MAX_7BIT_BYTES: usize = 5;

const MAX_STRING_PREALLOC: usize = 4096;

pub trait BinaryWrite: Write {
    fn write_i16(&mut self, value: i16) -> Result<()> {
        self.write_all(&value.to_le_bytes())?;
        Ok(())
    }

    fn write_i32(&mut self, value: i32) -> Result<()> {
        self.write_all(&value.to_le_bytes())?;
        Ok(())
    }

    fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_all(&[u8::from(value)])?;
        Ok(())
    }

    fn write_7bit_u32(&mut self, mut value: u32) -> Result<()> {
        while value >= 0x80 {
            self.write_all(&[(value as u8) | 0x80])?;
            value >>= 7;
        }
        self.write_all(&[value as u8])?;
        Ok(())
    }

    fn write_string(&mut self, value: &str) -> Result<()> {
        let len = u32::try_from(value.len())
            .map_err(|_| TransportError::InvalidLength(format!("string of {} bytes", value.len())))?;
        self.write_7bit_u32(len)?;
        self.write_all(value.as_bytes())?;
        Ok(())
    }
}

impl<W: Write + ?Sized> BinaryWrite for W {}

pub trait BinaryRead: Read {
    fn read_i16(&mut self) -> Result<i16> {
        let mut buf = [0u8; 2];
        self.read_exact(&mut buf)?;
        Ok(i16::from_le_bytes(buf))
    }

    fn read_i32(&mut self) -> Result<i32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(i32::from_le_bytes(buf))
    }

    /// Any non-zero byte reads as `true`.
    fn read_bool(&mut self) -> Result<bool> {
        let mut buf = [0u8; 1];
        self.read_exact(&mut buf)?;
        Ok(buf[0] != 0)
    }

    fn read_7bit_u32(&mut self) -> Result<u32> {
        let mut value: u32 = 0;
        for i in 0..MAX_7BIT_BYTES {
            let mut buf = [0u8; 1];
            self.read_exact(&mut buf)?;
            let byte = buf[0];
            let shift = 7 * i as u32;
            if i == MAX_7BIT_BYTES - 1 && byte > 0x0f {
                return Err(TransportError::InvalidLength(
                    "7-bit encoded integer overflows 32 bits".to_string(),
                ));
            }
            value |= u32::from(byte & 0x7f) << shift;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(TransportError::InvalidLength(
            "7-bit encoded integer is too long".to_string(),
        ))
    }

    fn read_string(&mut self) -> Result<String> {
        let len = self.read_7bit_u32()?;
        let len = i32::try_from(len)
            .map_err(|_| TransportError::InvalidLength(format!("string length {len}")))?;
        let len = len as usize;

        // The prefix is untrusted; grow with the bytes actually received.
        let mut bytes = Vec::with_capacity(len.min(MAX_STRING_PREALLOC));
        (&mut *self).take(len as u64).read_to_end(&mut bytes)?;
        if bytes.len() != len {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("string truncated after {} of {len} bytes", bytes.len()),
            )
            .into());
        }
        Ok(String::from_utf8(bytes)?)
    }
}

impl<R: Read + ?Sized> BinaryRead for R {}
