//! KV seed target
//!
//! Each dataset lives under a single key, so existence is one `GET` and
//! seeding is one `SET` of the complete payload.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::{CompanyProfile, DatasetKind, SeedDataset, SeedTarget};
use crate::kv::KvClient;

/// Seeds reference keys through a [`KvClient`].
pub struct KvSeedTarget<'a> {
    client: &'a KvClient,
}

impl<'a> KvSeedTarget<'a> {
    pub fn new(client: &'a KvClient) -> Self {
        Self { client }
    }
}

/// Stored shape of the organization profile: the profile plus timestamps in
/// the ISO-8601 form the application writes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredCompanySettings<'a> {
    #[serde(flatten)]
    profile: &'a CompanyProfile,
    created_at: String,
    updated_at: String,
}

impl<'a> StoredCompanySettings<'a> {
    fn new(profile: &'a CompanyProfile, now: DateTime<Utc>) -> Self {
        let stamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        Self {
            profile,
            created_at: stamp.clone(),
            updated_at: stamp,
        }
    }
}

#[async_trait]
impl<'a> SeedTarget for KvSeedTarget<'a> {
    async fn exists(&self, kind: DatasetKind) -> Result<bool> {
        let value = self.client.get(kind.kv_key()).await?;
        Ok(value.is_some_and(|v| !is_empty_value(&v)))
    }

    async fn seed(&self, dataset: &SeedDataset) -> Result<()> {
        let key = dataset.kind().kv_key();
        match dataset {
            SeedDataset::Currencies(currencies) => self.client.set(key, currencies).await?,
            SeedDataset::CompanySettings(profile) => {
                let stored = StoredCompanySettings::new(profile, Utc::now());
                self.client.set(key, &stored).await?
            }
        }
        Ok(())
    }
}

/// Values the application treats as "not set".
fn is_empty_value(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::String(s) => s.is_empty(),
        serde_json::Value::Bool(b) => !b,
        serde_json::Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}
