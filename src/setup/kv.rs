//! Hosted KV store setup.

use crate::config::{KvCredentials, SetupConfig};
use crate::kv::KvClient;
use crate::seeds::{KvSeedTarget, SeedReport, default_datasets, seed_defaults};

/// Characters of the REST URL echoed when credentials are found.
const URL_PREVIEW_LEN: usize = 50;

/// Steps for provisioning a KV database by hand, printed when credentials are missing.
pub const MANUAL_SETUP_STEPS: [&str; 4] = [
    "Vercel Dashboard > Project > Storage",
    "Create Database > KV",
    "Environment variables (KV_REST_API_URL, KV_REST_API_TOKEN) are added automatically",
    "Redeploy the project",
];

/// How a KV setup run ended. None of these is an error for the caller.
#[derive(Debug)]
pub enum KvSetupOutcome {
    /// Credentials were incomplete; nothing was sent to the store.
    Skipped,
    /// The store did not return the value written by the liveness probe.
    PingFailed,
    Seeded(SeedReport),
    /// A runtime error occurred and was logged.
    Failed(anyhow::Error),
}

/// Seeds the KV store when credentials are available.
pub async fn run(config: &SetupConfig) -> KvSetupOutcome {
    let Some(credentials) = config.kv.credentials() else {
        tracing::warn!("KV credentials are missing (KV_REST_API_URL, KV_REST_API_TOKEN)");
        tracing::info!("Skipping KV setup");
        return KvSetupOutcome::Skipped;
    };

    tracing::info!(url = %url_preview(&credentials), "KV credentials found");

    match seed(&credentials).await {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!(error = %format!("{:#}", err), "KV default data setup failed");
            tracing::warn!(
                "This is expected in development environments without a KV database; \
                 in production, check the KV credentials and redeploy"
            );
            KvSetupOutcome::Failed(err)
        }
    }
}

async fn seed(credentials: &KvCredentials) -> anyhow::Result<KvSetupOutcome> {
    let client = KvClient::new(credentials)?;

    if !client.ping().await? {
        tracing::error!("KV ping test failed: read-back value did not match");
        return Ok(KvSetupOutcome::PingFailed);
    }
    tracing::info!("KV connection verified");

    let target = KvSeedTarget::new(&client);
    let report = seed_defaults(&target, &default_datasets()).await?;
    tracing::info!(inserted = report.inserted(), "KV setup completed");
    Ok(KvSetupOutcome::Seeded(report))
}

fn url_preview(credentials: &KvCredentials) -> String {
    let url = &credentials.rest_api_url;
    match url.char_indices().nth(URL_PREVIEW_LEN) {
        Some((cut, _)) => format!("{}...", &url[..cut]),
        None => url.clone(),
    }
}
