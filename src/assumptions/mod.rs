//! Growth-rate, cost and product assumptions

mod costs;
mod product;
mod rates;

pub use costs::{CostLine, CostSchedule};
pub use product::{ProductVariant, Profile};
pub use rates::{GrowthRates, Track};
