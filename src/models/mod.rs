//! Core data models for RAM
//!
//! The two record types the application tracks, the money type used for
//! debt amounts, and the trait that lets both share one store.

pub mod credential;
pub mod debt;
pub mod ids;
pub mod money;
pub mod record;

pub use credential::CredentialRecord;
pub use debt::DebtRecord;
pub use ids::{CredentialId, DebtId};
pub use money::{Money, MoneyParseError};
pub use record::Record;
