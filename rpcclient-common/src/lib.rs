pub mod conf;
pub mod logger;
pub mod types;

pub mod error {
    pub use anyhow::*;
}

pub use bitcoin::secp256k1;
pub use hex;
