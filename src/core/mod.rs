pub mod filter;
pub mod reports;
pub mod state;

pub use filter::TransactionFilter;
pub use state::AppState;
