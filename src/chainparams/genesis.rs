use super::NetworkId;
use crate::error::ChainParamsError;
use crate::primitives::script::{OP_CHECKSIG, OP_DUP, OP_EQUALVERIFY, OP_HASH160};
use crate::primitives::{Amount, Block, BlockHeader, Hash256, OutPoint, Script, Transaction, TxIn, TxOut};

/// Compact target pushed into every genesis coinbase script-sig.
const GENESIS_SCRIPT_SIG_BITS: i64 = 486604799;
const GENESIS_SCRIPT_SIG_EXTRA_NONCE: i64 = 4;

/// Builds a genesis block: a single coinbase paying `reward` to
/// `output_script`, whose script-sig carries `timestamp`. The block has no
/// predecessor, so its previous-block hash is zero.
pub fn create_genesis_block(
    timestamp: &[u8],
    output_script: &Script,
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: Amount,
) -> Block {
    let script_sig = Script::new()
        .push_int(GENESIS_SCRIPT_SIG_BITS)
        .push_scriptnum(GENESIS_SCRIPT_SIG_EXTRA_NONCE)
        .push_slice(timestamp);

    let coinbase = Transaction {
        version: 1,
        vin: vec![TxIn { prevout: OutPoint::null(), script_sig, sequence: u32::MAX }],
        vout: vec![TxOut { value: reward, script_pubkey: output_script.clone() }],
        lock_time: 0,
    };

    let mut genesis = Block {
        header: BlockHeader {
            version,
            prev_block_hash: Hash256::ZERO,
            merkle_root: Hash256::ZERO,
            time,
            bits,
            nonce,
        },
        transactions: vec![coinbase],
    };
    genesis.header.merkle_root = genesis.compute_merkle_root();
    genesis
}

const LEVCOIN_TIMESTAMP: &str = "Левът е безсмъртен, политиците са преходни...";
const LEVCOIN_OUTPUT_PKH: [u8; 20] = [
    0x4d, 0x86, 0xd4, 0xfb, 0xbd, 0x4f, 0x37, 0x62, 0x7c, 0xde, 0x5b, 0xc3, 0x36, 0x9c, 0xd9, 0x3e, 0x32, 0xe9,
    0xf3, 0x25,
];

const LEGACY_TIMESTAMP: &str = "NY Times 05/Oct/2011 Steve Jobs, Apple\u{2019}s Visionary, Dies at 56";
const LEGACY_OUTPUT_PUBKEY: [u8; 65] = [
    0x04, 0x01, 0x84, 0x71, 0x0f, 0xa6, 0x89, 0xad, 0x50, 0x23, 0x69, 0x0c, 0x80, 0xf3, 0xa4, 0x9c, 0x8f, 0x13,
    0xf8, 0xd4, 0x5b, 0x8c, 0x85, 0x7f, 0xbc, 0xbc, 0x8b, 0xc4, 0xa8, 0xe4, 0xd3, 0xeb, 0x4b, 0x10, 0xf4, 0xd4,
    0x60, 0x4f, 0xa0, 0x8d, 0xce, 0x60, 0x1a, 0xaf, 0x0f, 0x47, 0x02, 0x16, 0xfe, 0x1b, 0x51, 0x85, 0x0b, 0x4a,
    0xcf, 0x21, 0xb1, 0x79, 0xc4, 0x50, 0x70, 0xac, 0x7b, 0x03, 0xa9,
];

/// Main network genesis: pays to a P2PKH output.
pub fn create_levcoin_genesis_block(time: u32, nonce: u32, bits: u32, version: i32, reward: Amount) -> Block {
    let output_script = Script::new()
        .push_opcode(OP_DUP)
        .push_opcode(OP_HASH160)
        .push_slice(&LEVCOIN_OUTPUT_PKH)
        .push_opcode(OP_EQUALVERIFY)
        .push_opcode(OP_CHECKSIG);
    create_genesis_block(LEVCOIN_TIMESTAMP.as_bytes(), &output_script, time, nonce, bits, version, reward)
}

/// Genesis shape the test networks keep from the chain this one was forked
/// from: P2PK output and the inherited timestamp headline.
pub fn create_legacy_genesis_block(time: u32, nonce: u32, bits: u32, version: i32, reward: Amount) -> Block {
    let output_script = Script::new().push_slice(&LEGACY_OUTPUT_PUBKEY).push_opcode(OP_CHECKSIG);
    create_genesis_block(LEGACY_TIMESTAMP.as_bytes(), &output_script, time, nonce, bits, version, reward)
}

/// Checks a freshly built genesis block against the literals a network was
/// defined with.
pub fn verify_genesis(
    network: NetworkId,
    genesis: &Block,
    expected_hash: &Hash256,
    expected_merkle_root: &Hash256,
) -> Result<(), ChainParamsError> {
    let hash = genesis.block_hash();
    if hash != *expected_hash {
        return Err(ChainParamsError::GenesisMismatch {
            network,
            field: "block hash",
            expected: expected_hash.to_string(),
            actual: hash.to_string(),
        });
    }
    if genesis.header.merkle_root != *expected_merkle_root {
        return Err(ChainParamsError::GenesisMismatch {
            network,
            field: "merkle root",
            expected: expected_merkle_root.to_string(),
            actual: genesis.header.merkle_root.to_string(),
        });
    }
    Ok(())
}

/// Refuses to continue with a rule set whose genesis block disagrees with
/// its own hardcoded identifiers.
pub(crate) fn enforce_genesis(
    network: NetworkId,
    genesis: &Block,
    expected_hash: &Hash256,
    expected_merkle_root: &Hash256,
) {
    if let Err(e) = verify_genesis(network, genesis, expected_hash, expected_merkle_root) {
        log::error!("Chain parameters for {} are inconsistent: {}", network, e);
        panic!("{}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::COIN;

    fn bitcoin_genesis() -> Block {
        let pubkey = hex::decode(
            "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f",
        )
        .unwrap();
        let script = Script::new().push_slice(&pubkey).push_opcode(OP_CHECKSIG);
        create_genesis_block(
            b"The Times 03/Jan/2009 Chancellor on brink of second bailout for banks",
            &script,
            1231006505,
            2083236893,
            0x1d00ffff,
            1,
            50 * COIN,
        )
    }

    #[test]
    fn reproduces_bitcoin_genesis() {
        let genesis = bitcoin_genesis();
        assert_eq!(
            genesis.block_hash().to_string(),
            "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f"
        );
        assert_eq!(
            genesis.header.merkle_root.to_string(),
            "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b"
        );
    }

    #[test]
    fn genesis_shape() {
        let genesis = bitcoin_genesis();
        assert_eq!(genesis.transactions.len(), 1);
        assert!(genesis.transactions[0].is_coinbase());
        assert!(genesis.header.prev_block_hash.is_zero());
        assert_eq!(genesis.header.merkle_root, genesis.transactions[0].txid());
        assert_eq!(crate::primitives::encode::serialize(&genesis.header).len(), BlockHeader::SIZE);
        // 04ffff001d 0104 45<message>
        let script_sig = genesis.transactions[0].vin[0].script_sig.as_bytes();
        assert_eq!(&script_sig[..8], &[0x04, 0xff, 0xff, 0x00, 0x1d, 0x01, 0x04, 0x45]);
    }

    #[test]
    fn construction_is_deterministic() {
        assert_eq!(bitcoin_genesis(), bitcoin_genesis());
    }

    #[test]
    fn verify_reports_the_mismatching_field() {
        let genesis = bitcoin_genesis();
        let hash = genesis.block_hash();
        let root = genesis.header.merkle_root;
        assert!(verify_genesis(NetworkId::Main, &genesis, &hash, &root).is_ok());

        match verify_genesis(NetworkId::Main, &genesis, &Hash256::ZERO, &root) {
            Err(ChainParamsError::GenesisMismatch { field, .. }) => assert_eq!(field, "block hash"),
            other => panic!("unexpected result: {:?}", other),
        }
        match verify_genesis(NetworkId::Main, &genesis, &hash, &Hash256::ZERO) {
            Err(ChainParamsError::GenesisMismatch { field, .. }) => assert_eq!(field, "merkle root"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    #[should_panic(expected = "genesis block hash mismatch")]
    fn enforce_aborts_on_mismatch() {
        let genesis = bitcoin_genesis();
        enforce_genesis(NetworkId::Regtest, &genesis, &Hash256::ZERO, &genesis.header.merkle_root);
    }

    #[test]
    fn merkle_root_of_two_transactions() {
        let mut block = bitcoin_genesis();
        let tx = block.transactions[0].clone();
        block.transactions.push(tx.clone());
        let mut concat = Vec::new();
        concat.extend_from_slice(tx.txid().as_bytes());
        concat.extend_from_slice(tx.txid().as_bytes());
        assert_eq!(block.compute_merkle_root(), crate::primitives::double_sha256(&concat));
    }
}
