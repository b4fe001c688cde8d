//! Idempotent seeding of reference data
//!
//! The procedure is written once against [`SeedTarget`] and instantiated per
//! store kind: [`SqlSeedTarget`] for the relational database and
//! [`KvSeedTarget`] for the hosted key-value store. Each dataset is checked for
//! existence and, when absent, written in a single bulk operation, so repeated
//! runs converge to exactly one copy of every dataset.

use std::fmt;

use anyhow::{Context, Result};
use async_trait::async_trait;

pub mod defaults;
pub mod kv;
pub mod sql;

pub use defaults::{CompanyProfile, Currency, default_datasets};
pub use kv::KvSeedTarget;
pub use sql::SqlSeedTarget;

/// Names a seed dataset independently of the store it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Currencies,
    CompanySettings,
}

impl DatasetKind {
    /// Table holding the dataset in the relational store.
    pub fn table_name(self) -> &'static str {
        match self {
            DatasetKind::Currencies => "currencies",
            DatasetKind::CompanySettings => "company_settings",
        }
    }

    /// Key holding the dataset in the KV store.
    pub fn kv_key(self) -> &'static str {
        match self {
            DatasetKind::Currencies => "currencies",
            DatasetKind::CompanySettings => "companySettings",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// A dataset together with its default payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedDataset {
    Currencies(Vec<Currency>),
    CompanySettings(CompanyProfile),
}

impl SeedDataset {
    pub fn kind(&self) -> DatasetKind {
        match self {
            SeedDataset::Currencies(_) => DatasetKind::Currencies,
            SeedDataset::CompanySettings(_) => DatasetKind::CompanySettings,
        }
    }
}

/// A store that can hold seed datasets.
#[async_trait]
pub trait SeedTarget: Send + Sync {
    /// Whether any data for `kind` is already present.
    async fn exists(&self, kind: DatasetKind) -> Result<bool>;

    /// Writes the whole dataset in one all-or-nothing operation.
    async fn seed(&self, dataset: &SeedDataset) -> Result<()>;
}

/// What happened to one dataset during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Inserted,
    Skipped,
}

/// Per-dataset outcomes of a seeding run, in seeding order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub entries: Vec<(DatasetKind, SeedOutcome)>,
}

impl SeedReport {
    pub fn outcome(&self, kind: DatasetKind) -> Option<SeedOutcome> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, outcome)| *outcome)
    }

    pub fn inserted(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, outcome)| *outcome == SeedOutcome::Inserted)
            .count()
    }
}

/// Seeds every dataset that is not yet present in `target`.
///
/// Stops at the first failing dataset and returns its error.
pub async fn seed_defaults<T>(target: &T, datasets: &[SeedDataset]) -> Result<SeedReport>
where
    T: SeedTarget + ?Sized,
{
    let mut report = SeedReport::default();

    for dataset in datasets {
        let kind = dataset.kind();

        let present = target
            .exists(kind)
            .await
            .with_context(|| format!("checking whether {} are seeded", kind))?;

        if present {
            log::info!("Dataset '{}' already present, skipping", kind);
            report.entries.push((kind, SeedOutcome::Skipped));
            continue;
        }

        target
            .seed(dataset)
            .await
            .with_context(|| format!("seeding {}", kind))?;
        log::info!("Seeded default {}", kind);
        report.entries.push((kind, SeedOutcome::Inserted));
    }

    Ok(report)
}
