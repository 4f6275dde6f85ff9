use {
    bech32::{FromBase32, Variant},
    std::{fmt, str::FromStr},
    thiserror::Error,
};

/// Human readable part of every MultiversX account address.
pub const HRP: &str = "erd";
pub const PUBKEY_LEN: usize = 32;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("bech32 decode failed: {0}")]
    Bech32(String),

    #[error("unexpected address prefix `{0}`, expected `erd`")]
    WrongHrp(String),

    #[error("address must use the bech32 variant, not bech32m")]
    WrongVariant,

    #[error("address payload must be 32 bytes, got {0}")]
    InvalidLength(usize),
}

/// A validated `erd1...` account address. Holds both the canonical
/// bech32 text and the decoded public key so neither is recomputed.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Address {
    bech32: String,
    pubkey: [u8; PUBKEY_LEN],
}

impl Address {
    pub fn from_bech32(s: &str) -> Result<Self, AddressError> {
        let (hrp, data, variant) =
            bech32::decode(s.trim()).map_err(|e| AddressError::Bech32(e.to_string()))?;

        if hrp != HRP {
            return Err(AddressError::WrongHrp(hrp));
        }
        if variant != Variant::Bech32 {
            return Err(AddressError::WrongVariant);
        }

        let bytes =
            Vec::<u8>::from_base32(&data).map_err(|e| AddressError::Bech32(e.to_string()))?;
        let pubkey: [u8; PUBKEY_LEN] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| AddressError::InvalidLength(bytes.len()))?;

        // decode() accepts mixed case only when uniform; store lowercase canonical form
        Ok(Self {
            bech32: s.trim().to_ascii_lowercase(),
            pubkey,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.bech32
    }

    pub fn pubkey_hex(&self) -> String {
        hex::encode(self.pubkey)
    }

    /// `erd1q…cus5` style short form for log lines.
    pub fn short(&self) -> String {
        let s = self.as_str();
        format!("{}…{}", &s[..5], &s[s.len() - 4..])
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bech32(s)
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_bech32(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bech32)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.bech32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{YUM1_ADDRESS, YUM2_ADDRESS};
    use bech32::ToBase32;

    #[test]
    fn documented_addresses_decode() {
        for raw in [YUM1_ADDRESS, YUM2_ADDRESS] {
            let addr = Address::from_bech32(raw).unwrap();
            assert_eq!(addr.as_str(), raw);
            assert_eq!(addr.pubkey_hex().len(), 64);
        }
    }

    #[test]
    fn pubkey_hex_matches_payload() {
        let pk = [0xabu8; PUBKEY_LEN];
        let raw = bech32::encode(HRP, pk.to_base32(), Variant::Bech32).unwrap();
        let addr: Address = raw.parse().unwrap();
        assert_eq!(addr.as_str(), raw);
        assert_eq!(addr.pubkey_hex(), "ab".repeat(PUBKEY_LEN));
    }

    #[test]
    fn uppercase_input_is_canonicalised() {
        let addr = Address::from_bech32(&YUM2_ADDRESS.to_ascii_uppercase()).unwrap();
        assert_eq!(addr.as_str(), YUM2_ADDRESS);
    }

    #[test]
    fn typo_breaks_checksum() {
        let mut raw = YUM1_ADDRESS.to_string();
        raw.pop();
        raw.push('6');
        assert!(matches!(
            Address::from_bech32(&raw),
            Err(AddressError::Bech32(_))
        ));
    }

    #[test]
    fn foreign_prefix_rejected() {
        let pk = [7u8; PUBKEY_LEN];
        let other = bech32::encode("nbex", pk.to_base32(), Variant::Bech32).unwrap();
        assert_eq!(
            Address::from_bech32(&other),
            Err(AddressError::WrongHrp("nbex".into()))
        );
    }

    #[test]
    fn bech32m_rejected() {
        let pk = [7u8; PUBKEY_LEN];
        let m = bech32::encode(HRP, pk.to_base32(), Variant::Bech32m).unwrap();
        assert_eq!(Address::from_bech32(&m), Err(AddressError::WrongVariant));
    }

    #[test]
    fn short_payload_rejected() {
        let raw = bech32::encode(HRP, [1u8; 20].to_base32(), Variant::Bech32).unwrap();
        assert_eq!(
            Address::from_bech32(&raw),
            Err(AddressError::InvalidLength(20))
        );
    }

    #[test]
    fn short_form() {
        let addr: Address = YUM1_ADDRESS.parse().unwrap();
        assert_eq!(addr.short(), "erd14…cus5");
    }
}
