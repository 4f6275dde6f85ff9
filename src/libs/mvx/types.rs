use {
    num_bigint::BigUint,
    serde::{Deserialize, Deserializer},
    std::str::FromStr,
};

/// Network parameters as reported by `GET /network/config`. Only a
/// handful of the gateway's `erd_*` keys are kept; unknown ones are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NetworkConfig {
    #[serde(rename = "erd_chain_id")]
    pub chain_id: String,
    #[serde(rename = "erd_denomination", default = "default_denomination")]
    pub denomination: u32,
    #[serde(rename = "erd_min_gas_price", default)]
    pub min_gas_price: u64,
    #[serde(rename = "erd_min_gas_limit", default)]
    pub min_gas_limit: u64,
    #[serde(rename = "erd_gas_per_data_byte", default)]
    pub gas_per_data_byte: u64,
    #[serde(rename = "erd_min_transaction_version", default)]
    pub min_transaction_version: u32,
    #[serde(rename = "erd_round_duration", default)]
    pub round_duration: u64,
    #[serde(rename = "erd_num_shards_without_meta", default)]
    pub num_shards_without_meta: u32,
}

fn default_denomination() -> u32 {
    crate::constants::EGLD_DECIMALS
}

/// Point-in-time account state from `GET /address/{bech32}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountOnNetwork {
    pub address: String,
    #[serde(default)]
    pub nonce: u64,
    #[serde(deserialize_with = "de_biguint")]
    pub balance: BigUint,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub code_hash: Option<String>,
    #[serde(default)]
    pub root_hash: Option<String>,
    #[serde(default, deserialize_with = "de_biguint")]
    pub developer_reward: BigUint,
}

#[derive(Deserialize)]
pub(crate) struct ConfigData {
    pub config: NetworkConfig,
}

#[derive(Deserialize)]
pub(crate) struct AccountData {
    pub account: AccountOnNetwork,
}

/// Balances come over the wire as decimal strings; older proxies have
/// been seen sending bare numbers for zero.
fn de_biguint<'de, D>(deserializer: D) -> Result<BigUint, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(BigUint::from(n)),
        Raw::Text(s) if s.is_empty() => Ok(BigUint::default()),
        Raw::Text(s) => BigUint::from_str(&s)
            .map_err(|e| serde::de::Error::custom(format!("bad integer `{s}`: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn account_from_gateway_shape() {
        let v = json!({
            "account": {
                "address": "erd14q22erffu7r56mf26yx4erww9k0yresxmudte0etacl950ef7fys9qcus5",
                "nonce": 12,
                "balance": "340282366920938463463374607431768211456",
                "username": "",
                "code": "",
                "codeHash": null,
                "rootHash": "Jz3a",
                "codeMetadata": null,
                "developerReward": "0",
                "ownerAddress": ""
            }
        });
        let data: AccountData = serde_json::from_value(v).unwrap();
        let acc = data.account;
        assert_eq!(acc.nonce, 12);
        // u128::MAX + 1
        assert_eq!(
            acc.balance,
            BigUint::from(u128::MAX) + BigUint::from(1u8)
        );
        assert_eq!(acc.code_hash, None);
        assert_eq!(acc.root_hash.as_deref(), Some("Jz3a"));
    }

    #[test]
    fn numeric_and_empty_balances() {
        let acc: AccountOnNetwork =
            serde_json::from_value(json!({"address": "x", "balance": 0})).unwrap();
        assert_eq!(acc.balance, BigUint::default());

        let acc: AccountOnNetwork =
            serde_json::from_value(json!({"address": "x", "balance": ""})).unwrap();
        assert_eq!(acc.balance, BigUint::default());
    }

    #[test]
    fn negative_balance_rejected() {
        let res: Result<AccountOnNetwork, _> =
            serde_json::from_value(json!({"address": "x", "balance": "-5"}));
        assert!(res.is_err());
    }

    #[test]
    fn config_from_gateway_shape() {
        let v = json!({
            "config": {
                "erd_chain_id": "D",
                "erd_denomination": 18,
                "erd_gas_per_data_byte": 1500,
                "erd_gas_price_modifier": "0.01",
                "erd_min_gas_limit": 50000,
                "erd_min_gas_price": 1000000000,
                "erd_min_transaction_version": 1,
                "erd_num_shards_without_meta": 3,
                "erd_round_duration": 6000,
                "erd_start_time": 1648551156
            }
        });
        let cfg = serde_json::from_value::<ConfigData>(v).unwrap().config;
        assert_eq!(cfg.chain_id, "D");
        assert_eq!(cfg.denomination, 18);
        assert_eq!(cfg.min_gas_limit, 50_000);
        assert_eq!(cfg.num_shards_without_meta, 3);
    }

    #[test]
    fn missing_denomination_defaults_to_egld() {
        let cfg: NetworkConfig = serde_json::from_value(json!({"erd_chain_id": "1"})).unwrap();
        assert_eq!(cfg.denomination, 18);
    }
}
