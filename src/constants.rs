pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_FETCH_CONCURRENCY: usize = 2;

pub const DEVNET_GATEWAY: &str = "https://devnet-gateway.elrond.com";

pub const YUM1_LABEL: &str = "yum1";
pub const YUM1_ADDRESS: &str = "erd14q22erffu7r56mf26yx4erww9k0yresxmudte0etacl950ef7fys9qcus5";

pub const YUM2_LABEL: &str = "yum2";
pub const YUM2_ADDRESS: &str = "erd1wx7h5rnyxre7avl5pkgj3c2fha9aknrwms8mspelfcapwvjac3vqncm7nm";

/// Accounts reported when `ACCOUNTS` is unset, in print order.
pub const DEFAULT_ACCOUNTS: [(&str, &str); 2] =
    [(YUM1_LABEL, YUM1_ADDRESS), (YUM2_LABEL, YUM2_ADDRESS)];

/// Smallest units per EGLD, as a power of ten. Used when the gateway
/// reports no denomination.
pub const EGLD_DECIMALS: u32 = 18;
