pub mod addresses;
pub mod admins;
pub mod assessments;
pub mod ledger;
pub mod managers;
pub mod owners;
pub mod properties;

pub use addresses::{AddressPayload, AddressRepository};
pub use admins::AdminRepository;
pub use assessments::{AssessmentPayload, AssessmentRepository};
pub use ledger::{ExpenseRepository, IncomeRepository, LedgerPayload, TaxRepository};
pub use managers::{ManagerPayload, ManagerRepository};
pub use owners::{OwnerPayload, OwnerRepository};
pub use properties::{PropertyPayload, PropertyRepository};
