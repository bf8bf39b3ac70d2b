pub mod employee_vesting;
pub mod vesting_company;

pub use employee_vesting::*;
pub use vesting_company::*;
