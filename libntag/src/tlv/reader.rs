// libntag/src/tlv/reader.rs

//! Cursor-based TLV reader.

use super::{TlvError, TlvRecord, TlvTag};

/// Cursor over a fully read memory image.
///
/// Single state (scanning) until a TERMINATOR is consumed or an error is
/// returned; after that `next_record` keeps returning `Ok(None)`.
#[derive(Debug, Clone)]
pub struct TlvReader<'a> {
    data: &'a [u8],
    pos: usize,
    done: bool,
}

impl<'a> TlvReader<'a> {
    /// Start at offset 0 of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            done: false,
        }
    }

    /// Current byte offset into the image.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Read the next block. `Ok(None)` once the container has ended.
    pub fn next_record(&mut self) -> Result<Option<TlvRecord<'a>>, TlvError> {
        if self.done {
            return Ok(None);
        }
        if self.data.is_empty() {
            // Zero-capacity tag: nothing was read, so there is no container.
            self.done = true;
            return Ok(None);
        }

        let start = self.pos;
        let tag = match self.take_byte() {
            Some(b) => TlvTag::from_byte(b),
            None => return self.fail(TlvError::Truncated { offset: start }),
        };

        match tag {
            TlvTag::Null => Ok(Some(TlvRecord::Null)),
            TlvTag::Terminator => {
                self.done = true;
                Ok(Some(TlvRecord::Terminator))
            }
            _ => {
                let value = self.take_value(start)?;
                if tag == TlvTag::NdefMessage {
                    Ok(Some(TlvRecord::Message(value)))
                } else {
                    log::trace!(
                        "skipping TLV {:#04x} at offset {} ({} bytes)",
                        tag.as_byte(),
                        start,
                        value.len()
                    );
                    Ok(Some(TlvRecord::Other { tag, value }))
                }
            }
        }
    }

    fn take_byte(&mut self) -> Option<u8> {
        let b = self.data.get(self.pos).copied()?;
        self.pos += 1;
        Some(b)
    }

    fn take_value(&mut self, tag_offset: usize) -> Result<&'a [u8], TlvError> {
        let len_offset = self.pos;
        let length = match self.take_byte() {
            Some(l) => l as usize,
            None => return self.fail(TlvError::Truncated { offset: len_offset }),
        };

        let available = self.data.len() - self.pos;
        if length > available {
            return self.fail(TlvError::LengthOverrun {
                offset: tag_offset,
                length,
                available,
            });
        }

        let value = &self.data[self.pos..self.pos + length];
        self.pos += length;
        Ok(value)
    }

    fn fail<T>(&mut self, err: TlvError) -> Result<T, TlvError> {
        self.done = true;
        Err(err)
    }
}

impl<'a> Iterator for TlvReader<'a> {
    type Item = Result<TlvRecord<'a>, TlvError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
