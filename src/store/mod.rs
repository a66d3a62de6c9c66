//! Postgres-backed store for parking spaces and tickets.
//!
//! The store owns the connection pool and is handed to the router as shared
//! state, so the billing operations can be exercised without the HTTP layer.
//! Every operation is a single SQL statement; the open -> closed ticket
//! transition gets its atomicity from the conditional update alone.

mod spaces;
mod tickets;

use sqlx::PgPool;

#[derive(Clone)]
pub struct ParkingStore {
    pool: PgPool,
}

impl ParkingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
