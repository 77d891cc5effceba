mod controller;
mod dialog;
mod engine;
mod models;
mod store;
mod ticker;

pub use controller::{CountdownController, SaveError, TICK_PERIOD};
pub use dialog::TargetDateDialog;
pub use engine::remaining_until;
pub use models::{
    parse_persisted_target, serialize_target, RemainingTime, TARGET_DATE_KEY,
};
pub use store::{
    FileTargetDateStore, MemoryTargetDateStore, SqliteTargetDateStore, TargetDateStore,
};
