pub mod admission;
pub mod assessment;
pub mod class;
pub mod tiers;
