use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("gateway decode error ({status}) from {url}: {reason}. {hint}\nSample: {sample}")]
    Decode {
        status: u16,
        url: String,
        reason: String,
        hint: &'static str,
        sample: String,
    },

    #[error("gateway returned `{code}` ({status}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("gateway response has no `{0}` field")]
    MissingField(&'static str),
}

impl GatewayError {
    /// Body excerpt for diagnostics, cut on a char boundary.
    pub(crate) fn sample(bytes: &[u8]) -> String {
        const MAX: usize = 512;
        String::from_utf8_lossy(bytes).chars().take(MAX).collect()
    }

    pub(crate) fn hint_for(sample: &str) -> &'static str {
        if sample.trim_start().starts_with('<') {
            "Response looks like HTML; GATEWAY_URL may point at a web page instead of a proxy."
        } else if sample.trim().is_empty() {
            "Empty body from gateway. Endpoint may be down."
        } else {
            "Non-JSON response from gateway."
        }
    }
}
