pub mod market_data;
pub mod series;

pub use market_data::{Bar, RawBar};
pub use series::Series;
