use {
    crate::app::report::BalanceLine,
    crate::libs::config::Config,
    crate::libs::mvx::client::{GatewayClient, NetworkProvider},
    crate::libs::writing::cc,
    crate::{log, warn},
    anyhow::{Context, Result},
    futures_util::stream::{self, StreamExt},
    std::io::Write,
};

/// Binary entry point: configuration from the environment, report to stdout.
pub async fn init() -> Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    if std::env::var_os("GATEWAY_URL").is_none() {
        warn!("GATEWAY_URL not set, using public devnet gateway");
    }

    let client = GatewayClient::new(config.gateway_url.clone(), config.request_timeout)?;
    log!(
        cc::CYAN,
        "gateway {} | {} account(s) | concurrency {}",
        client.base_url(),
        config.accounts.len(),
        config.concurrency
    );
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&client, &config, &mut out).await
}

/// Fetch the network config, then every configured account, writing one
/// balance line per account to `out` in configuration order.
///
/// Account lookups overlap up to `config.concurrency`, but a line is
/// only written once its account and every account before it have been
/// fetched. The first failed lookup ends the run: lines for earlier
/// accounts are already written, later ones never are.
pub async fn run<P, W>(provider: &P, config: &Config, out: &mut W) -> Result<()>
where
    P: NetworkProvider,
    W: Write,
{
    let network = provider
        .get_network_config()
        .await
        .context("failed to fetch network config")?;
    log!(
        cc::LIGHT_BLUE,
        "network chain={} denomination={} shards={}",
        network.chain_id,
        network.denomination,
        network.num_shards_without_meta
    );
    let decimals = config.denominated.then_some(network.denomination);

    let fetches = stream::iter(config.accounts.iter())
        .map(|entry| async move { (entry, provider.get_account(&entry.address).await) })
        .buffered(config.concurrency.max(1));
    let mut fetches = std::pin::pin!(fetches);

    while let Some((entry, fetched)) = fetches.next().await {
        let account = fetched.with_context(|| {
            format!("failed to fetch account {} ({})", entry.label, entry.address)
        })?;
        log!(
            cc::LIGHT_GREEN,
            "{} {} pk={} nonce={}",
            entry.label,
            entry.address.short(),
            &entry.address.pubkey_hex()[..8],
            account.nonce
        );

        let line = BalanceLine {
            label: &entry.label,
            balance: &account.balance,
            decimals,
        };
        writeln!(out, "{line}").context("failed to write report")?;
        out.flush().context("failed to write report")?;
    }

    Ok(())
}
