//! Versioned wire encoding for proof objects
//!
//! Every body starts with a format version and a type tag. Under the canonical
//! framing the body is preceded by its length as a big-endian `u16`; the legacy
//! raw framing omits the header and leaves length tracking to the caller.
//! Either way, a decode must consume the input exactly.

use crate::{BridgeError, BridgeResult};
use serde::{Deserialize, Serialize};

/// Current wire format version
pub const FORMAT_VERSION: u8 = 1;

/// Size of the canonical length header
pub const LENGTH_HEADER_LEN: usize = 2;

/// How an encoded body is framed on the wire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Framing {
    /// Two-byte big-endian body length, then the body
    #[default]
    LengthPrefixed,
    /// The body alone
    Raw,
}

/// A proof object that can cross the bridge
pub trait WireFormat: Sized {
    /// Type tag following the version byte
    const TAG: u8;

    /// Append everything after the version and tag bytes
    fn write_body(&self, out: &mut Vec<u8>);

    /// Parse everything after the version and tag bytes
    fn read_body(reader: &mut Reader<'_>) -> BridgeResult<Self>;
}

/// An encoded proof, framed and ready to cross the bridge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBlob {
    bytes: Vec<u8>,
    framing: Framing,
}

impl EncodedBlob {
    /// Frame a body
    pub fn frame(body: Vec<u8>, framing: Framing) -> BridgeResult<Self> {
        let bytes = match framing {
            Framing::Raw => body,
            Framing::LengthPrefixed => {
                let len = u16::try_from(body.len()).map_err(|_| {
                    BridgeError::invalid_input(format!(
                        "encoded body of {} bytes exceeds the length header",
                        body.len()
                    ))
                })?;
                let mut bytes = Vec::with_capacity(LENGTH_HEADER_LEN + body.len());
                bytes.extend_from_slice(&len.to_be_bytes());
                bytes.extend_from_slice(&body);
                bytes
            }
        };
        Ok(Self { bytes, framing })
    }

    /// Length of the framed bytes, header included
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn framing(&self) -> Framing {
        self.framing
    }

    /// The framed bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The body without any header
    pub fn body(&self) -> &[u8] {
        match self.framing {
            Framing::Raw => &self.bytes,
            Framing::LengthPrefixed => &self.bytes[LENGTH_HEADER_LEN..],
        }
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for EncodedBlob {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Strip the framing from `bytes`, returning the body
pub fn unframe(bytes: &[u8], framing: Framing) -> BridgeResult<&[u8]> {
    match framing {
        Framing::Raw => Ok(bytes),
        Framing::LengthPrefixed => {
            if bytes.len() < LENGTH_HEADER_LEN {
                return Err(BridgeError::decode("missing length header"));
            }
            let (header, body) = bytes.split_at(LENGTH_HEADER_LEN);
            let declared = usize::from(u16::from_be_bytes([header[0], header[1]]));
            if declared != body.len() {
                return Err(BridgeError::decode(format!(
                    "length header declares {} bytes, {} present",
                    declared,
                    body.len()
                )));
            }
            Ok(body)
        }
    }
}

/// Encode a proof object under `framing`
pub fn encode<T: WireFormat>(value: &T, framing: Framing) -> BridgeResult<EncodedBlob> {
    let mut body = vec![FORMAT_VERSION, T::TAG];
    value.write_body(&mut body);
    EncodedBlob::frame(body, framing)
}

/// Decode a proof object framed under `framing`
pub fn decode<T: WireFormat>(bytes: &[u8], framing: Framing) -> BridgeResult<T> {
    let mut reader = Reader::new(unframe(bytes, framing)?);
    let version = reader.read_u8()?;
    if version != FORMAT_VERSION {
        return Err(BridgeError::decode(format!(
            "unsupported format version {}",
            version
        )));
    }
    let tag = reader.read_u8()?;
    if tag != T::TAG {
        return Err(BridgeError::decode(format!(
            "unexpected tag {:#04x}, expected {:#04x}",
            tag,
            T::TAG
        )));
    }
    let value = T::read_body(&mut reader)?;
    reader.finish()?;
    Ok(value)
}

/// Bounds-checked cursor over a body
#[derive(Debug)]
pub struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    pub fn read_bytes(&mut self, len: usize) -> BridgeResult<&'a [u8]> {
        if len > self.remaining() {
            return Err(BridgeError::decode(format!(
                "truncated: wanted {} bytes at offset {}, {} left",
                len,
                self.offset,
                self.remaining()
            )));
        }
        let out = &self.bytes[self.offset..self.offset + len];
        self.offset += len;
        Ok(out)
    }

    pub fn read_array<const N: usize>(&mut self) -> BridgeResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> BridgeResult<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_u16_be(&mut self) -> BridgeResult<u16> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    /// Fail unless every byte was consumed
    pub fn finish(self) -> BridgeResult<()> {
        match self.remaining() {
            0 => Ok(()),
            trailing => Err(BridgeError::decode(format!(
                "{} trailing bytes after body",
                trailing
            ))),
        }
    }
}
