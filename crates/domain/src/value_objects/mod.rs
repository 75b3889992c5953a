pub mod amount;
pub mod percentage;
pub mod price;

pub use amount::CurrencyAmount;
pub use percentage::Percent;
pub use price::Price;
