pub mod pair;
pub mod route;
pub mod token;
pub mod trade;

// Re-export for easier access
pub use pair::Pair;
pub use route::Route;
pub use token::{Currency, Token};
pub use trade::Trade;
