pub mod expense;
pub mod store;

pub use expense::{Expense, DEFAULT_CATEGORY};
pub use store::LedgerStore;
