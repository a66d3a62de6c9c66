use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A physical parking slot. `number` is the natural key; rows are seeded by
/// migrations and only the availability flag is ever mutated through the API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpace {
    pub number: i32,
    pub available: bool,
}
