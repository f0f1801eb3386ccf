use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{Error as IoError, Write};

/// Consensus (wire) serialization. Returns the number of bytes written.
pub trait Encodable {
    fn consensus_encode<W: Write + WriteBytesExt>(&self, w: &mut W) -> Result<usize, IoError>;
}

/// Serializes into a fresh buffer.
pub fn serialize<T: Encodable + ?Sized>(value: &T) -> Vec<u8> {
    let mut buf = Vec::new();
    value
        .consensus_encode(&mut buf)
        .expect("in-memory writers don't error");
    buf
}

pub fn write_var_int<W: Write + WriteBytesExt>(w: &mut W, n: u64) -> Result<usize, IoError> {
    if n < 0xfd {
        w.write_u8(n as u8)?;
        Ok(1)
    } else if n <= 0xffff {
        w.write_u8(0xfd)?;
        w.write_u16::<LittleEndian>(n as u16)?;
        Ok(3)
    } else if n <= 0xffff_ffff {
        w.write_u8(0xfe)?;
        w.write_u32::<LittleEndian>(n as u32)?;
        Ok(5)
    } else {
        w.write_u8(0xff)?;
        w.write_u64::<LittleEndian>(n)?;
        Ok(9)
    }
}

pub fn write_var_bytes<W: Write + WriteBytesExt>(w: &mut W, b: &[u8]) -> Result<usize, IoError> {
    let mut len = write_var_int(w, b.len() as u64)?;
    w.write_all(b)?;
    len += b.len();
    Ok(len)
}
