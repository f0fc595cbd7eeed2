//!
//! BIP44 account path policy (`m / purpose' / coin_type' / account' / change / address_index`)
//! on top of [`keyforge_bip32`], with per-coin configuration and WIF encoding.
//!

mod bip44;
mod coin;
mod error;
mod levels;
mod result;
pub mod wif;

pub use bip44::{Bip44, PURPOSE_BIP44, PURPOSE_BIP49, PURPOSE_BIP84, PURPOSE_BIP86};
pub use coin::{paths, CoinConf};
pub use error::Error;
pub use levels::{Bip44Change, Bip44Level};
pub use result::Result;
