use {
    crate::constants::{
        DEFAULT_ACCOUNTS, DEFAULT_FETCH_CONCURRENCY, DEFAULT_REQUEST_TIMEOUT_SECS, DEVNET_GATEWAY,
    },
    crate::libs::address::{Address, AddressError},
    crate::warn,
    dotenv::dotenv,
    std::{fmt::Debug, str::FromStr, time::Duration},
    thiserror::Error,
    url::Url,
};

pub fn load_env() {
    dotenv().ok();
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GATEWAY_URL `{value}` is not a valid URL: {source}")]
    GatewayUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("account entry `{0}` must look like `label=erd1...`")]
    AccountEntry(String),

    #[error("account `{label}` has an invalid address: {source}")]
    AccountAddress {
        label: String,
        #[source]
        source: AddressError,
    },

    #[error("no accounts configured")]
    NoAccounts,
}

/// An address together with the name it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledAddress {
    pub label: String,
    pub address: Address,
}

impl LabeledAddress {
    pub fn new(label: impl Into<String>, address: &str) -> Result<Self, ConfigError> {
        let label = label.into();
        let address = Address::from_bech32(address).map_err(|source| {
            ConfigError::AccountAddress {
                label: label.clone(),
                source,
            }
        })?;
        Ok(Self { label, address })
    }
}

impl FromStr for LabeledAddress {
    type Err = ConfigError;

    /// `yum1=erd1...`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (label, addr) = s
            .split_once('=')
            .ok_or_else(|| ConfigError::AccountEntry(s.to_string()))?;
        let label = label.trim();
        if label.is_empty() {
            return Err(ConfigError::AccountEntry(s.to_string()));
        }
        Self::new(label, addr)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub gateway_url: Url,
    /// Reported in this order regardless of fetch completion order.
    pub accounts: Vec<LabeledAddress>,
    pub request_timeout: Duration,
    pub concurrency: usize,
    /// Print balances as whole EGLD instead of smallest units.
    pub denominated: bool,
}

impl Config {
    /// Built-in defaults for everything but the gateway and accounts.
    /// Reads nothing from the environment.
    pub fn new(gateway_url: Url, accounts: Vec<LabeledAddress>) -> Self {
        Self {
            gateway_url,
            accounts,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            concurrency: DEFAULT_FETCH_CONCURRENCY,
            denominated: false,
        }
    }

    /// The two documented devnet accounts against the public devnet gateway.
    pub fn devnet_default() -> Result<Self, ConfigError> {
        let url = Self::parse_gateway(DEVNET_GATEWAY)?;
        Ok(Self::new(url, Self::default_accounts()?))
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        load_env();
        let gateway = std::env::var("GATEWAY_URL").unwrap_or_else(|_| DEVNET_GATEWAY.to_string());
        let accounts = match std::env::var("ACCOUNTS") {
            Ok(raw) => Self::parse_accounts(&raw)?,
            Err(_) => Self::default_accounts()?,
        };
        let mut config = Self::new(Self::parse_gateway(&gateway)?, accounts);

        config.request_timeout = Duration::from_secs(Self::get_var_t(
            "REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        ));
        config.concurrency =
            Self::get_var_t("FETCH_CONCURRENCY", DEFAULT_FETCH_CONCURRENCY).max(1);
        config.denominated = Self::get_var_t("DENOMINATED", false);
        Ok(config)
    }

    pub fn parse_gateway(raw: &str) -> Result<Url, ConfigError> {
        Url::parse(raw.trim()).map_err(|source| ConfigError::GatewayUrl {
            value: raw.to_string(),
            source,
        })
    }

    /// Comma separated `label=address` pairs; blank entries are skipped.
    pub fn parse_accounts(raw: &str) -> Result<Vec<LabeledAddress>, ConfigError> {
        let accounts = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse::<LabeledAddress>)
            .collect::<Result<Vec<LabeledAddress>, _>>()?;
        if accounts.is_empty() {
            return Err(ConfigError::NoAccounts);
        }
        Ok(accounts)
    }

    pub fn default_accounts() -> Result<Vec<LabeledAddress>, ConfigError> {
        DEFAULT_ACCOUNTS
            .iter()
            .map(|(label, addr)| LabeledAddress::new(*label, addr))
            .collect()
    }

    /// Parse env var to T; fall back to typed default. A set but
    /// unparseable value is reported, not silently dropped.
    pub fn get_var_t<T>(key: &str, default: T) -> T
    where
        T: FromStr,
        <T as FromStr>::Err: Debug,
    {
        let Ok(raw) = std::env::var(key) else {
            return default;
        };
        match raw.trim().parse::<T>() {
            Ok(v) => v,
            Err(e) => {
                warn!("{key}=`{raw}` is invalid ({e:?}), using default");
                default
            }
        }
    }
}
