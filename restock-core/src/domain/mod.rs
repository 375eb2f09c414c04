//! Domain types for the replenishment pipeline.

pub mod feature;
pub mod observation;
pub mod policy;

pub use feature::FeatureRecord;
pub use observation::SalesObservation;
pub use policy::InventoryPolicy;

/// Product identifier type alias
pub type ProductId = String;
