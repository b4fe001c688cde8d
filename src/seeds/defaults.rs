//! Default seed payloads.
//!
//! These records are consumed by the application after deployment, so their
//! values (ids included) must stay exactly as they are.

use serde::{Deserialize, Serialize};

use super::SeedDataset;

/// Identifier of the singleton organization profile.
pub const COMPANY_PROFILE_ID: &str = "1";

/// A currency record as seeded into either store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub id: String,
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub is_active: bool,
}

/// The organization profile without store-managed timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub id: String,
    pub company_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: Option<String>,
    pub tax_number: Option<String>,
}

impl Currency {
    fn active(id: &str, code: &str, name: &str, symbol: &str) -> Self {
        Self {
            id: id.to_string(),
            code: code.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            is_active: true,
        }
    }
}

/// The bootstrap currency set: local currency first, then USD, EUR, GBP.
pub fn default_currencies() -> Vec<Currency> {
    vec![
        Currency::active("1", "TRY", "Türk Lirası", "₺"),
        Currency::active("2", "USD", "US Dollar", "$"),
        Currency::active("3", "EUR", "Euro", "€"),
        Currency::active("4", "GBP", "British Pound", "£"),
    ]
}

pub fn default_company_profile() -> CompanyProfile {
    CompanyProfile {
        id: COMPANY_PROFILE_ID.to_string(),
        company_name: "CALAF.CO".to_string(),
        address: "İstanbul, Türkiye".to_string(),
        phone: "+90 212 555 0000".to_string(),
        email: "info@calaf.co".to_string(),
        website: Some("www.calaf.co".to_string()),
        tax_number: Some(String::new()),
    }
}

/// Datasets seeded by both setup paths, in seeding order.
pub fn default_datasets() -> Vec<SeedDataset> {
    vec![
        SeedDataset::Currencies(default_currencies()),
        SeedDataset::CompanySettings(default_company_profile()),
    ]
}
