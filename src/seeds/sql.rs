//! Relational seed target
//!
//! Existence is a `SELECT COUNT(*)` on the dataset's table; seeding is one
//! multi-row `INSERT`, which the database applies atomically.

use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, Set};

use super::{CompanyProfile, Currency, DatasetKind, SeedDataset, SeedTarget};
use crate::models::{company_settings, currency};

/// Seeds reference tables through a borrowed SeaORM connection.
pub struct SqlSeedTarget<'a, C> {
    db: &'a C,
}

impl<'a, C> SqlSeedTarget<'a, C>
where
    C: ConnectionTrait,
{
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<'a, C> SeedTarget for SqlSeedTarget<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn exists(&self, kind: DatasetKind) -> Result<bool> {
        let rows = match kind {
            DatasetKind::Currencies => currency::Entity::find().count(self.db).await?,
            DatasetKind::CompanySettings => {
                company_settings::Entity::find().count(self.db).await?
            }
        };
        log::debug!("{} holds {} row(s)", kind.table_name(), rows);
        Ok(rows > 0)
    }

    async fn seed(&self, dataset: &SeedDataset) -> Result<()> {
        let inserted = match dataset {
            SeedDataset::Currencies(currencies) => {
                currency::Entity::insert_many(currencies.iter().map(currency_row))
                    .exec_without_returning(self.db)
                    .await?
            }
            SeedDataset::CompanySettings(profile) => {
                company_settings::Entity::insert(company_settings_row(profile))
                    .exec_without_returning(self.db)
                    .await?
            }
        };
        log::debug!(
            "Inserted {} row(s) into {}",
            inserted,
            dataset.kind().table_name()
        );
        Ok(())
    }
}

fn currency_row(currency: &Currency) -> currency::ActiveModel {
    currency::ActiveModel {
        id: Set(currency.id.clone()),
        code: Set(currency.code.clone()),
        name: Set(currency.name.clone()),
        symbol: Set(currency.symbol.clone()),
        is_active: Set(currency.is_active),
    }
}

/// `created_at` and `updated_at` stay unset so the column defaults stamp them.
fn company_settings_row(profile: &CompanyProfile) -> company_settings::ActiveModel {
    company_settings::ActiveModel {
        id: Set(profile.id.clone()),
        company_name: Set(profile.company_name.clone()),
        address: Set(profile.address.clone()),
        phone: Set(profile.phone.clone()),
        email: Set(profile.email.clone()),
        website: Set(profile.website.clone()),
        tax_number: Set(profile.tax_number.clone()),
        ..Default::default()
    }
}
