use super::encode::{serialize, write_var_bytes, write_var_int, Encodable};
use super::hash::{double_sha256, Hash256};
use super::script::Script;
use byteorder::{LittleEndian, WriteBytesExt};
use serde::Serialize;
use std::io::{Error as IoError, Write};

/// Amount in the smallest unit.
pub type Amount = i64;

pub const COIN: Amount = 100_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutPoint {
    pub hash: Hash256,
    pub n: u32,
}

impl OutPoint {
    /// The prevout of a coinbase input: nothing is being spent.
    pub const fn null() -> Self {
        OutPoint { hash: Hash256::ZERO, n: u32::MAX }
    }

    pub fn is_null(&self) -> bool {
        self.hash.is_zero() && self.n == u32::MAX
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxIn {
    pub prevout: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxOut {
    pub value: Amount,
    pub script_pubkey: Script,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub version: i32,
    pub vin: Vec<TxIn>,
    pub vout: Vec<TxOut>,
    pub lock_time: u32,
}

impl Transaction {
    pub fn is_coinbase(&self) -> bool {
        self.vin.len() == 1 && self.vin[0].prevout.is_null()
    }

    pub fn txid(&self) -> Hash256 {
        double_sha256(&serialize(self))
    }
}

impl Encodable for OutPoint {
    fn consensus_encode<W: Write + WriteBytesExt>(&self, w: &mut W) -> Result<usize, IoError> {
        w.write_all(self.hash.as_bytes())?;
        w.write_u32::<LittleEndian>(self.n)?;
        Ok(36)
    }
}

impl Encodable for TxIn {
    fn consensus_encode<W: Write + WriteBytesExt>(&self, w: &mut W) -> Result<usize, IoError> {
        let mut written = self.prevout.consensus_encode(w)?;
        written += write_var_bytes(w, self.script_sig.as_bytes())?;
        w.write_u32::<LittleEndian>(self.sequence)?;
        written += 4;
        Ok(written)
    }
}

impl Encodable for TxOut {
    fn consensus_encode<W: Write + WriteBytesExt>(&self, w: &mut W) -> Result<usize, IoError> {
        w.write_i64::<LittleEndian>(self.value)?;
        let written = 8 + write_var_bytes(w, self.script_pubkey.as_bytes())?;
        Ok(written)
    }
}

impl Encodable for Transaction {
    fn consensus_encode<W: Write + WriteBytesExt>(&self, w: &mut W) -> Result<usize, IoError> {
        let mut written = 0;
        w.write_i32::<LittleEndian>(self.version)?;
        written += 4;
        written += write_var_int(w, self.vin.len() as u64)?;
        for txin in &self.vin {
            written += txin.consensus_encode(w)?;
        }
        written += write_var_int(w, self.vout.len() as u64)?;
        for txout in &self.vout {
            written += txout.consensus_encode(w)?;
        }
        w.write_u32::<LittleEndian>(self.lock_time)?;
        written += 4;
        Ok(written)
    }
}
