pub mod addresses;
pub mod assessments;
pub mod auth;
pub mod ledger;
pub mod managers;
pub mod owners;
pub mod properties;
