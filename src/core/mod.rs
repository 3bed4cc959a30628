pub mod boundary;
pub mod deletion;
pub mod detail;
pub mod filter;
pub mod log;
pub mod notifier;
pub mod session;
pub mod store;

pub use session::Session;
