// dci-domain library entry point
pub mod account;
pub mod directory;
pub mod error;
pub mod person;
pub use account::Account;
pub use directory::AccountDirectory;
pub use error::DomainError;
pub use person::Person;
