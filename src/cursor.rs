use alloc::string::String;
use byteorder::{ByteOrder, LittleEndian};

use crate::errors::Error;

/// Sequential little-endian reader over a borrowed byte slice.
///
/// Fixed-width reads either consume exactly the bytes they need or fail with
/// [`Error::TruncatedInput`] and leave the offset untouched.
#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    slice: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(slice: &'a [u8]) -> Self {
        Self { slice, offset: 0 }
    }

    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    pub(crate) fn remaining(&self) -> usize {
        self.slice.len() - self.offset
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8], Error> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(Error::TruncatedInput {
                offset: self.offset,
                needed,
                remaining,
            });
        }

        let bytes = &self.slice[self.offset..self.offset + needed];
        self.offset += needed;

        Ok(bytes)
    }

    pub(crate) fn skip(&mut self, count: usize) -> Result<(), Error> {
        self.take(count).map(|_| ())
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8, Error> {
        Ok(self.take(1)?[0])
    }

    pub(crate) fn read_u16(&mut self) -> Result<u16, Error> {
        Ok(LittleEndian::read_u16(self.take(2)?))
    }

    pub(crate) fn read_u32(&mut self) -> Result<u32, Error> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    /// Read a string prefixed by its byte length as a 32-bit integer.
    ///
    /// Invalid UTF-8 sequences are replaced, never rejected.
    pub(crate) fn read_string(&mut self) -> Result<String, Error> {
        let length = self.read_u32()? as usize;
        let bytes = self.take(length)?;

        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian() {
        let data = [0x01, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12];
        let mut cursor = Cursor::new(&data);

        assert_eq!(cursor.read_u8().unwrap(), 0x01);
        assert_eq!(cursor.read_u16().unwrap(), 0x1234);
        assert_eq!(cursor.read_u32().unwrap(), 0x1234_5678);
        assert_eq!(cursor.offset(), 7);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn reads_strings() {
        let mut data = Vec::new();
        data.extend_from_slice(&4_u32.to_le_bytes());
        data.extend_from_slice(b"Lead");
        data.extend_from_slice(&0_u32.to_le_bytes());
        let mut cursor = Cursor::new(&data);

        assert_eq!(cursor.read_string().unwrap(), "Lead");
        assert_eq!(cursor.read_string().unwrap(), "");
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn replaces_invalid_utf8() {
        let mut data = Vec::new();
        data.extend_from_slice(&2_u32.to_le_bytes());
        data.extend_from_slice(&[b'a', 0xff]);

        let s = Cursor::new(&data).read_string().unwrap();
        assert_eq!(s, "a\u{fffd}");
    }

    #[test]
    fn short_read_is_truncated_input() {
        let data = [0x01];
        let mut cursor = Cursor::new(&data);

        match cursor.read_u16() {
            Err(Error::TruncatedInput {
                offset: 0,
                needed: 2,
                remaining: 1,
            }) => (),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(cursor.offset(), 0);
        assert!(cursor.skip(2).is_err());
        assert_eq!(cursor.read_u8().unwrap(), 0x01);
    }

    #[test]
    fn string_longer_than_input() {
        let mut data = Vec::new();
        data.extend_from_slice(&10_u32.to_le_bytes());
        data.extend_from_slice(b"abc");
        let mut cursor = Cursor::new(&data);

        match cursor.read_string() {
            Err(Error::TruncatedInput {
                offset: 4,
                needed: 10,
                remaining: 3,
            }) => (),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
