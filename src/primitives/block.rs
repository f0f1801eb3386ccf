use super::encode::{serialize, write_var_int, Encodable};
use super::hash::{double_sha256, Hash256};
use super::transaction::Transaction;
use byteorder::{LittleEndian, WriteBytesExt};
use serde::Serialize;
use std::io::{Error as IoError, Write};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block_hash: Hash256,
    pub merkle_root: Hash256,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    pub const SIZE: usize = 80;

    /// Block identifier: double-SHA256 of the 80-byte header.
    pub fn block_hash(&self) -> Hash256 {
        double_sha256(&serialize(self))
    }
}

impl Encodable for BlockHeader {
    fn consensus_encode<W: Write + WriteBytesExt>(&self, w: &mut W) -> Result<usize, IoError> {
        w.write_i32::<LittleEndian>(self.version)?;
        w.write_all(self.prev_block_hash.as_bytes())?;
        w.write_all(self.merkle_root.as_bytes())?;
        w.write_u32::<LittleEndian>(self.time)?;
        w.write_u32::<LittleEndian>(self.bits)?;
        w.write_u32::<LittleEndian>(self.nonce)?;
        Ok(Self::SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

impl Block {
    pub fn block_hash(&self) -> Hash256 {
        self.header.block_hash()
    }

    /// Merkle root over the transaction ids. An odd level duplicates its last
    /// entry; a single transaction is its own root.
    pub fn compute_merkle_root(&self) -> Hash256 {
        let mut level: Vec<Hash256> = self.transactions.iter().map(Transaction::txid).collect();
        if level.is_empty() {
            return Hash256::ZERO;
        }
        while level.len() > 1 {
            if level.len() % 2 != 0 {
                if let Some(last) = level.last().copied() {
                    level.push(last);
                }
            }
            level = level
                .chunks_exact(2)
                .map(|pair| {
                    let mut concat = Vec::with_capacity(64);
                    concat.extend_from_slice(pair[0].as_bytes());
                    concat.extend_from_slice(pair[1].as_bytes());
                    double_sha256(&concat)
                })
                .collect();
        }
        level[0]
    }
}

impl Encodable for Block {
    fn consensus_encode<W: Write + WriteBytesExt>(&self, w: &mut W) -> Result<usize, IoError> {
        let mut written = self.header.consensus_encode(w)?;
        written += write_var_int(w, self.transactions.len() as u64)?;
        for tx in &self.transactions {
            written += tx.consensus_encode(w)?;
        }
        Ok(written)
    }
}
