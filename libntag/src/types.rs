// libntag/src/types.rs

//! Data model: tag version, capability container, quads and memory image.

use crate::constants::{
    CAPABILITY_SIZE_OFFSET, CAPABILITY_SIZE_UNIT, PAGE_SIZE, PAGES_PER_QUAD, QUAD_SIZE,
};
use crate::{Error, Unsupported};
use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Product line reported in bytes 0..6 of the GET_VERSION response.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ProductFamily {
    /// NTAG 213/215/216
    #[display(fmt = "NTAG21x")]
    Ntag21x,
    /// NTAG 213F/216F (field-detect variants, same memory map)
    #[display(fmt = "NTAG21xF")]
    Ntag21xF,
}

/// Known family headers: fixed header, vendor (NXP), product type (NTAG),
/// product subtype, major and minor product version.
pub const FAMILY_HEADERS: &[([u8; 6], ProductFamily)] = &[
    ([0x00, 0x04, 0x04, 0x02, 0x01, 0x00], ProductFamily::Ntag21x),
    ([0x00, 0x04, 0x04, 0x04, 0x01, 0x00], ProductFamily::Ntag21xF),
];

impl ProductFamily {
    /// Look up a family by its six byte header.
    pub fn from_header(header: &[u8; 6]) -> Option<Self> {
        FAMILY_HEADERS
            .iter()
            .find(|(known, _)| known == header)
            .map(|(_, family)| *family)
    }

    /// Six byte header of this family.
    pub fn header(&self) -> [u8; 6] {
        FAMILY_HEADERS
            .iter()
            .find(|(_, family)| family == self)
            .map(|(header, _)| *header)
            .unwrap_or_default()
    }
}

/// Memory-size variant reported in byte 6 of the GET_VERSION response.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StorageSize {
    /// 144 bytes user memory
    #[display(fmt = "NTAG213")]
    Ntag213,
    /// 504 bytes user memory
    #[display(fmt = "NTAG215")]
    Ntag215,
    /// 888 bytes user memory
    #[display(fmt = "NTAG216")]
    Ntag216,
}

/// Known storage subtypes and their user memory size in bytes.
pub const STORAGE_SUBTYPES: &[(u8, StorageSize, usize)] = &[
    (0x0F, StorageSize::Ntag213, 144),
    (0x11, StorageSize::Ntag215, 504),
    (0x13, StorageSize::Ntag216, 888),
];

impl StorageSize {
    /// Look up a storage size by its subtype byte.
    pub fn from_subtype(subtype: u8) -> Option<Self> {
        STORAGE_SUBTYPES
            .iter()
            .find(|(code, _, _)| *code == subtype)
            .map(|(_, size, _)| *size)
    }

    /// GET_VERSION byte 6 for this size.
    pub fn subtype(&self) -> u8 {
        self.entry().0
    }

    /// User memory (NDEF area) in bytes.
    pub fn user_memory_bytes(&self) -> usize {
        self.entry().2
    }

    fn entry(&self) -> (u8, StorageSize, usize) {
        STORAGE_SUBTYPES
            .iter()
            .copied()
            .find(|(_, size, _)| size == self)
            .unwrap_or((0, *self, 0))
    }
}

/// Family and storage combinations NXP actually ships. The F variants only
/// come in the 213F and 216F sizes.
pub const KNOWN_VARIANTS: &[(ProductFamily, StorageSize)] = &[
    (ProductFamily::Ntag21x, StorageSize::Ntag213),
    (ProductFamily::Ntag21x, StorageSize::Ntag215),
    (ProductFamily::Ntag21x, StorageSize::Ntag216),
    (ProductFamily::Ntag21xF, StorageSize::Ntag213),
    (ProductFamily::Ntag21xF, StorageSize::Ntag216),
];

impl ProductFamily {
    /// Whether this family is made in the given storage size.
    pub fn has_variant(&self, storage: StorageSize) -> bool {
        KNOWN_VARIANTS
            .iter()
            .any(|(family, size)| family == self && *size == storage)
    }
}

/// Validated GET_VERSION response (8 バイト)
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[display(fmt = "{} ({})", storage, family)]
pub struct TagVersion {
    /// Product family
    pub family: ProductFamily,
    /// Memory size variant
    pub storage: StorageSize,
    /// Always 0x03 once validated.
    pub protocol: u8,
}

impl TagVersion {
    /// Build a version from its parts.
    pub fn new(family: ProductFamily, storage: StorageSize, protocol: u8) -> Self {
        Self {
            family,
            storage,
            protocol,
        }
    }

    /// Rebuild the raw 8-byte version block.
    pub fn to_bytes(&self) -> [u8; 8] {
        let mut out = [0u8; 8];
        out[..6].copy_from_slice(&self.family.header());
        out[6] = self.storage.subtype();
        out[7] = self.protocol;
        out
    }
}

impl TryFrom<&[u8]> for TagVersion {
    type Error = Unsupported;

    /// Strict match: the protocol byte must be 0x03 and the (family header,
    /// subtype) pair must be a known variant. The protocol byte is checked
    /// first so a protocol mismatch is reported even when the header is also
    /// unknown. A known header with a subtype outside its family is an
    /// unknown subtype.
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() < 8 {
            return Err(Unsupported::ShortResponse {
                expected: 8,
                actual: bytes.len(),
            });
        }

        let protocol = bytes[7];
        if protocol != crate::constants::PROTOCOL_ISO14443_3 {
            return Err(Unsupported::ProtocolMismatch {
                expected: crate::constants::PROTOCOL_ISO14443_3,
                actual: protocol,
            });
        }

        let mut header = [0u8; 6];
        header.copy_from_slice(&bytes[..6]);
        let family =
            ProductFamily::from_header(&header).ok_or(Unsupported::UnknownFamily(header))?;
        let storage = StorageSize::from_subtype(bytes[6])
            .filter(|s| family.has_variant(*s))
            .ok_or(Unsupported::UnknownSubtype(bytes[6]))?;

        Ok(Self::new(family, storage, protocol))
    }
}

/// One READ response: four pages (16 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quad([u8; QUAD_SIZE]);

impl Quad {
    /// Wrap 16 raw bytes.
    pub fn from_bytes(bytes: [u8; QUAD_SIZE]) -> Self {
        Self(bytes)
    }

    /// Raw bytes, page by page.
    pub fn as_bytes(&self) -> &[u8; QUAD_SIZE] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Quad {
    type Error = Error;

    /// Takes the first 16 bytes; shorter responses are rejected.
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let s = crate::protocol::parser::slice_at(bytes, 0, QUAD_SIZE)?;
        let mut arr = [0u8; QUAD_SIZE];
        arr.copy_from_slice(s);
        Ok(Self::from_bytes(arr))
    }
}

/// Capability container as read from page 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CapabilityDescriptor {
    size_byte: u8,
}

impl CapabilityDescriptor {
    /// Descriptor for a raw size byte.
    pub const fn new(size_byte: u8) -> Self {
        Self { size_byte }
    }

    /// Extract the size byte from a capability READ response.
    pub fn from_quad(quad: &Quad) -> Self {
        Self::new(quad.as_bytes()[CAPABILITY_SIZE_OFFSET])
    }

    /// Raw byte 2 of the capability container.
    pub fn size_byte(&self) -> u8 {
        self.size_byte
    }

    /// Data area size: 8 bytes per unit.
    pub fn total_bytes(&self) -> usize {
        self.size_byte as usize * CAPABILITY_SIZE_UNIT
    }

    /// Data area size in pages.
    pub fn total_pages(&self) -> usize {
        self.total_bytes() / PAGE_SIZE
    }

    /// Number of READ commands needed; a trailing half quad is not read.
    pub fn total_quads(&self) -> usize {
        self.total_pages() / PAGES_PER_QUAD
    }

    /// Page addresses to read, in order: 4, 8, ..., 4 * total_quads.
    ///
    /// Fails when the last address does not fit in the one-byte READ
    /// argument.
    pub fn quad_addresses(&self) -> crate::Result<Vec<u8>> {
        let quads = self.total_quads();
        (1..=quads)
            .map(|i| {
                u8::try_from(i * PAGES_PER_QUAD).map_err(|_| Error::CapacityOutOfRange {
                    size_byte: self.size_byte,
                    quads,
                })
            })
            .collect()
    }
}

/// Concatenated NDEF message TLV values, in the order they appear.
pub type PayloadStream = Vec<u8>;

/// Tag memory from page 4 onwards, assembled quad by quad.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryImage(Vec<u8>);

impl MemoryImage {
    /// Concatenate quads in read order.
    pub fn from_quads(quads: &[Quad]) -> Self {
        let mut buf = Vec::with_capacity(quads.len() * QUAD_SIZE);
        for q in quads {
            buf.extend_from_slice(q.as_bytes());
        }
        Self(buf)
    }

    /// Raw image bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Image size in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no quad was read.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
