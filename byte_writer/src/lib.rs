//! Little-endian byte buffer with back-patching.
//!
//! Fields whose values are only known after the rest of the layout is written
//! (offsets, checksums) are appended as placeholders and replaced later.

pub struct ByteWriter {
    pub data: Vec<u8>,
}

impl Default for ByteWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteWriter {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Current write position, which is also the number of bytes written.
    pub fn get_offset(&self) -> usize {
        self.data.len()
    }

    pub fn append_u8(&mut self, i: u8) {
        self.data.push(i);
    }

    pub fn append_u16(&mut self, i: u16) {
        self.data.extend(i.to_le_bytes());
    }

    pub fn append_u32(&mut self, i: u32) {
        self.data.extend(i.to_le_bytes());
    }

    pub fn append_u8_slice(&mut self, i: &[u8]) {
        self.data.extend_from_slice(i);
    }

    pub fn append_zeroes(&mut self, length: usize) {
        self.data.resize(self.data.len() + length, 0);
    }

    /// UTF-16LE code units followed by a zero code unit.
    pub fn append_utf16_nul(&mut self, s: &str) {
        s.encode_utf16().for_each(|unit| self.append_u16(unit));
        self.append_u16(0);
    }

    /// One byte per char followed by a zero byte.
    ///
    /// Chars must be below U+0100. Anything above is truncated to its low byte,
    /// so callers filter first.
    pub fn append_latin1_nul(&mut self, s: &str) {
        s.chars().for_each(|c| self.append_u8(c as u32 as u8));
        self.append_u8(0);
    }

    pub fn replace(&mut self, start: usize, slice: &[u8]) {
        self.data[start..(start + slice.len())].copy_from_slice(slice);
    }

    pub fn replace_with_u32(&mut self, start: usize, val: u32) {
        self.replace(start, &val.to_le_bytes());
    }
}
