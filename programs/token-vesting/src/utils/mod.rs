pub mod clock;
pub mod pda;
pub mod token_transfer;
pub mod validations;
pub mod vesting_math;

pub use clock::{RuntimeClock, TimeSource};
pub use token_transfer::TokenTransfer;
