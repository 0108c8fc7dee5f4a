pub mod bank_account;
pub mod batch;
pub mod employee;
pub mod payment;

pub use bank_account::BankAccount;
pub use batch::{Batch, BatchName};
pub use employee::{Employee, NewEmployee};
pub use payment::{Currency, PaymentDetails, PayrollType};
