mod ids;
mod results;
mod scenario;
mod vehicle;

pub use ids::PairId;
pub use results::{Payback, ScenarioResult};
pub use scenario::{Bounds, DEFAULT_PAIR_ID, FieldRange, ScenarioState};
pub use vehicle::VehiclePairRecord;
