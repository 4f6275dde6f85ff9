//! MultiversX gateway access. [`client`] holds the HTTP client and the
//! [`client::NetworkProvider`] seam, [`types`] the payloads it returns,
//! and [`spells`] amount formatting.
pub mod client;
pub mod error;
pub mod spells;
pub mod types;
