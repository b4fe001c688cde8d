//! # Data Models
//!
//! SeaORM entities for the tables this tool seeds. `users` and `categories`
//! are created by the schema setup but have no entity here since nothing in
//! this crate reads or writes them.

pub mod company_settings;
pub mod currency;

pub use company_settings::Entity as CompanySettings;
pub use currency::Entity as Currency;
