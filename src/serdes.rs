use crate::constants::*;
use crate::param::PubParam;
use crate::pixel_err::*;
use crate::{PixelG1, PixelG2};
use pairing::{CurveAffine, CurveProjective, EncodedPoint};
use std::io::{ErrorKind, Read, Write};

type Compressed = bool;

/// Serialization support for pixel structures.
/// The encoding of group elements follows that of zcash spec;
/// the most significant bit of the first byte is the compression flag.
pub trait PixelSerDes: Sized {
    /// Serialize a struct to a writer.
    /// Public parameters are written uncompressed when they are published.
    fn serialize<W: Write>(&self, writer: &mut W, compressed: Compressed) -> Result<(), PixelError>;

    /// Deserialize a struct; also returns a flag
    /// if the struct was compressed or not.
    /// The reader is a stream: bytes after the struct are left unread.
    fn deserialize<R: Read>(reader: &mut R) -> Result<(Self, Compressed), PixelError>;

    /// Decode a struct from a blob that holds nothing else.
    /// Returns an error if the blob is malformed or has trailing bytes.
    fn from_bytes(blob: &[u8]) -> Result<(Self, Compressed), PixelError> {
        let mut reader = blob;
        let res = Self::deserialize(&mut reader)?;
        if !reader.is_empty() {
            return Err(PixelError::encoding(format!(
                "{}: {} trailing bytes",
                ERR_DESERIAL,
                reader.len()
            )));
        }
        Ok(res)
    }
}

impl PixelSerDes for PixelG1 {
    /// Convert a PixelG1 point to a blob of 96 or 192 bytes.
    fn serialize<W: Write>(&self, writer: &mut W, compressed: Compressed) -> Result<(), PixelError> {
        let width = if compressed {
            PIXEL_G1_LEN_COMPRESSED
        } else {
            PIXEL_G1_LEN_UNCOMPRESSED
        };
        serialize_point(self, writer, compressed, width)
    }

    /// Deserialize a PixelG1 element from a blob.
    /// Returns an error if deserialization fails.
    fn deserialize<R: Read>(reader: &mut R) -> Result<(Self, Compressed), PixelError> {
        deserialize_point(reader)
    }
}

impl PixelSerDes for PixelG2 {
    /// Convert a PixelG2 point to a blob of 48 or 96 bytes.
    fn serialize<W: Write>(&self, writer: &mut W, compressed: Compressed) -> Result<(), PixelError> {
        let width = if compressed {
            PIXEL_G2_LEN_COMPRESSED
        } else {
            PIXEL_G2_LEN_UNCOMPRESSED
        };
        serialize_point(self, writer, compressed, width)
    }

    /// Deserialize a PixelG2 element from a blob.
    /// Returns an error if deserialization fails.
    fn deserialize<R: Read>(reader: &mut R) -> Result<(Self, Compressed), PixelError> {
        deserialize_point(reader)
    }
}

impl PixelSerDes for PubParam {
    /// Convert a public parameter into a blob:
    ///
    /// `|ciphersuite id| depth | g2 | h | hlist |` => bytes
    ///
    /// Returns an error if ciphersuite id is invalid or serialization fails.
    fn serialize<W: Write>(&self, writer: &mut W, compressed: Compressed) -> Result<(), PixelError> {
        // check the cipher suite id
        if !VALID_CIPHERSUITE.contains(&self.ciphersuite()) {
            return Err(PixelError::encoding(ERR_CIPHERSUITE));
        }
        if self.depth() > MAX_D || self.hlist().len() != self.depth() + 1 {
            return Err(PixelError::encoding(ERR_DEPTH));
        }
        // first byte is the ciphersuite id
        // second byte is the time depth
        let mut buf: Vec<u8> = Vec::with_capacity(serialized_len(self.depth(), compressed));
        buf.push(self.ciphersuite());
        buf.push(self.depth() as u8);

        self.g2().serialize(&mut buf, compressed)?;
        self.h().serialize(&mut buf, compressed)?;
        for e in self.hlist().iter() {
            e.serialize(&mut buf, compressed)?;
        }

        if buf.len() != serialized_len(self.depth(), compressed) {
            return Err(PixelError::encoding(ERR_SERIAL));
        }
        // a single write, so the writer never sees a partial parameter set
        writer.write_all(&buf)?;
        Ok(())
    }

    /// Convert a blob into a public parameter:
    ///
    /// bytes => `|ciphersuite id| depth | g2 | h | hlist |`
    ///
    /// Returns an error if deserialization fails, or if the group
    /// elements are not all encoded in the same mode.
    fn deserialize<R: Read>(reader: &mut R) -> Result<(Self, Compressed), PixelError> {
        // constants stores id and the depth
        let mut constants: [u8; 2] = [0u8; 2];
        read_exact(reader, &mut constants)?;

        // check the ciphersuite id in the blob
        if !VALID_CIPHERSUITE.contains(&constants[0]) {
            return Err(PixelError::encoding(ERR_CIPHERSUITE));
        }
        let depth = constants[1] as usize;

        let (g2, compressed) = PixelG2::deserialize(reader)?;

        let (h, compressed_h) = PixelG1::deserialize(reader)?;
        if compressed != compressed_h {
            return Err(PixelError::encoding(ERR_COMPRESS));
        }

        let mut hlist: Vec<PixelG1> = Vec::with_capacity(depth + 1);
        for _ in 0..=depth {
            let (hi, compressed_hi) = PixelG1::deserialize(reader)?;
            if compressed != compressed_hi {
                return Err(PixelError::encoding(ERR_COMPRESS));
            }
            hlist.push(hi);
        }

        Ok((
            PubParam::construct(constants[0], depth, g2, h, hlist),
            compressed,
        ))
    }
}

/// The storage requirement of a public parameter with depth `depth`:
/// `2 + |g2| + (depth + 2) * |h|`.
pub fn serialized_len(depth: usize, compressed: Compressed) -> usize {
    if compressed {
        2 + PIXEL_G2_LEN_COMPRESSED + (depth + 2) * PIXEL_G1_LEN_COMPRESSED
    } else {
        2 + PIXEL_G2_LEN_UNCOMPRESSED + (depth + 2) * PIXEL_G1_LEN_UNCOMPRESSED
    }
}

// convert element into an (un)compressed byte string
fn serialize_point<G: CurveProjective, W: Write>(
    g: &G,
    writer: &mut W,
    compressed: Compressed,
    width: usize,
) -> Result<(), PixelError> {
    let t = g.into_affine();
    if compressed {
        write_encoded(&t.into_compressed(), writer, width)
    } else {
        write_encoded(&t.into_uncompressed(), writer, width)
    }
}

fn write_encoded<E: EncodedPoint, W: Write>(
    e: &E,
    writer: &mut W,
    width: usize,
) -> Result<(), PixelError> {
    if e.as_ref().len() != width {
        return Err(PixelError::encoding(format!(
            "{}: expected {} bytes, got {}",
            ERR_SERIAL,
            width,
            e.as_ref().len()
        )));
    }
    writer.write_all(e.as_ref())?;
    Ok(())
}

// read the compressed size first, then check the first bit of buf[0]
// to decide if the rest of an uncompressed point needs to be read
fn deserialize_point<G: CurveProjective, R: Read>(
    reader: &mut R,
) -> Result<(G, Compressed), PixelError> {
    let mut c_buf: <G::Affine as CurveAffine>::Compressed = EncodedPoint::empty();
    read_exact(reader, c_buf.as_mut())?;

    if (c_buf.as_ref()[0] & 0x80) == 0x80 {
        // first bit is 1 => compressed mode
        let g = c_buf
            .into_affine()
            .map_err(|e| PixelError::encoding(format!("{}: {}", ERR_DESERIAL, e)))?;
        Ok((g.into_projective(), true))
    } else {
        // first bit is 0 => uncompressed mode
        let mut u_buf: <G::Affine as CurveAffine>::Uncompressed = EncodedPoint::empty();
        let head = c_buf.as_ref().len();
        u_buf.as_mut()[..head].copy_from_slice(c_buf.as_ref());
        read_exact(reader, &mut u_buf.as_mut()[head..])?;
        let g = u_buf
            .into_affine()
            .map_err(|e| PixelError::encoding(format!("{}: {}", ERR_DESERIAL, e)))?;
        Ok((g.into_projective(), false))
    }
}

// a blob that ends early is an encoding error, not an IO error
fn read_exact<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<(), PixelError> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => PixelError::encoding(format!("{}: blob too short", ERR_DESERIAL)),
        _ => PixelError::Io(e),
    })
}
