pub mod address;
pub mod admin;
pub mod assessment;
pub mod ledger;
pub mod manager;
pub mod owner;
pub mod property;

pub use address::Address;
pub use admin::Admin;
pub use assessment::Assessment;
pub use ledger::{Expense, Income, Tax};
pub use manager::Manager;
pub use owner::Owner;
pub use property::Property;
