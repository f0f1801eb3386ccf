pub mod block;
pub mod encode;
pub mod hash;
pub mod script;
pub mod transaction;

pub use block::{Block, BlockHeader};
pub use hash::{double_sha256, Hash256};
pub use script::Script;
pub use transaction::{Amount, OutPoint, Transaction, TxIn, TxOut, COIN};
