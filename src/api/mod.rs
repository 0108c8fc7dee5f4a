pub mod batch;
pub mod dashboard;
pub mod employee;
pub mod payment;
