use std::fmt;
use std::str::FromStr;

use ethers::prelude::k256::SecretKey;

#[derive(Debug, Clone)]
pub struct PrivateKey {
    pub key: SecretKey,
}

impl FromStr for PrivateKey {
    type Err = eyre::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_start_matches("0x");

        let bytes = hex::decode(s)?;

        let key = SecretKey::from_slice(&bytes)?;

        Ok(Self { key })
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.key.to_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_KEY: &str =
        "4f3edf983ac636a65a842ce7c78d9aa706d3b113bce9c46f30d7d21715b23b1d";

    #[test]
    fn parses_with_and_without_prefix() {
        let bare: PrivateKey = TEST_KEY.parse().unwrap();
        let prefixed: PrivateKey = format!("0x{TEST_KEY}").parse().unwrap();

        assert_eq!(bare.key.to_bytes(), prefixed.key.to_bytes());
    }

    #[test]
    fn display_round_trips() {
        let key: PrivateKey = TEST_KEY.parse().unwrap();

        assert_eq!(key.to_string(), TEST_KEY);
    }

    #[test]
    fn rejects_invalid_hex() {
        assert!("0xzzzz".parse::<PrivateKey>().is_err());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!("0xdeadbeef".parse::<PrivateKey>().is_err());
    }
}
