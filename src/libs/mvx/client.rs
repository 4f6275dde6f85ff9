//! Typed HTTP access to a MultiversX proxy (gateway). Every call is a
//! single `GET`; nothing here retries.
use {
    super::{
        error::GatewayError,
        types::{AccountData, AccountOnNetwork, ConfigData, NetworkConfig},
    },
    crate::libs::address::Address,
    anyhow::{Context, Result},
    reqwest::Client as HttpClient,
    serde::de::DeserializeOwned,
    serde_json::Value,
    std::time::Duration,
    url::Url,
};

/// The read operations the balance report needs from a network.
#[allow(async_fn_in_trait)]
pub trait NetworkProvider {
    async fn get_network_config(&self) -> Result<NetworkConfig, GatewayError>;
    async fn get_account(&self, address: &Address) -> Result<AccountOnNetwork, GatewayError>;
}

#[derive(Clone, Debug)]
pub struct GatewayClient {
    base_url: Url,
    http: HttpClient,
}

impl GatewayClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("yumbal/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// Issue a GET and unwrap the `{data, error, code}` envelope,
    /// returning the HTTP status and `data` as raw JSON.
    async fn fetch(&self, path: &str) -> Result<(u16, Value), GatewayError> {
        let url = self.endpoint(path);
        let res = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| GatewayError::Transport {
                url: url.clone(),
                source,
            })?;
        let status = res.status().as_u16();
        let bytes = res.bytes().await.map_err(|source| GatewayError::Transport {
            url: url.clone(),
            source,
        })?;

        let mut v: Value = match serde_json::from_slice(&bytes) {
            Ok(json) => json,
            Err(e) => {
                let sample = GatewayError::sample(&bytes);
                return Err(GatewayError::Decode {
                    status,
                    url,
                    reason: e.to_string(),
                    hint: GatewayError::hint_for(&sample),
                    sample,
                });
            }
        };

        let code = v.get("code").and_then(Value::as_str).unwrap_or_default();
        if code != "successful" {
            let message = v
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            return Err(GatewayError::Api {
                status,
                code: if code.is_empty() { "unknown".into() } else { code.into() },
                message,
            });
        }

        match v.get_mut("data").map(Value::take) {
            Some(Value::Null) | None => Err(GatewayError::MissingField("data")),
            Some(data) => Ok((status, data)),
        }
    }

    async fn get_typed<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let (status, data) = self.fetch(path).await?;
        serde_json::from_value(data).map_err(|e| GatewayError::Decode {
            status,
            url: self.endpoint(path),
            reason: e.to_string(),
            hint: "Unexpected payload shape.",
            sample: String::new(),
        })
    }
}

impl NetworkProvider for GatewayClient {
    async fn get_network_config(&self) -> Result<NetworkConfig, GatewayError> {
        let data: ConfigData = self.get_typed("network/config").await?;
        Ok(data.config)
    }

    async fn get_account(&self, address: &Address) -> Result<AccountOnNetwork, GatewayError> {
        let data: AccountData = self.get_typed(&format!("address/{address}")).await?;
        Ok(data.account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let timeout = Duration::from_secs(1);
        let a = GatewayClient::new(Url::parse("https://gw.example/").unwrap(), timeout).unwrap();
        let b = GatewayClient::new(Url::parse("https://gw.example/proxy").unwrap(), timeout)
            .unwrap();
        assert_eq!(a.endpoint("network/config"), "https://gw.example/network/config");
        assert_eq!(b.endpoint("network/config"), "https://gw.example/proxy/network/config");
    }
}
