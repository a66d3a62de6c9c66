use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::Ticket;
use crate::utils::error::AppError;

use super::ParkingStore;

impl ParkingStore {
    /// Issues a ticket. `entry_time` comes from the database clock; callers
    /// never supply a timestamp.
    pub async fn open_ticket(
        &self,
        space_id: i32,
        plate: &str,
        hourly_rate: Decimal,
    ) -> Result<Ticket, AppError> {
        sqlx::query_as::<_, Ticket>(
            "INSERT INTO tickets (space_id, plate, entry_time, hourly_rate)
             VALUES ($1, $2, NOW(), $3)
             RETURNING *",
        )
        .bind(space_id)
        .bind(plate)
        .bind(hourly_rate)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database("Failed to create ticket", e))
    }

    pub async fn list_open_tickets(&self) -> Result<Vec<Ticket>, AppError> {
        sqlx::query_as::<_, Ticket>("SELECT * FROM tickets WHERE exit_time IS NULL")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database("Failed to fetch open tickets", e))
    }

    /// Closes an open ticket, billing whole elapsed minutes at the rate
    /// supplied now (not the rate recorded at entry). The `exit_time IS NULL`
    /// predicate is the concurrency control: of two racing close requests,
    /// the loser matches zero rows and gets not-found, never a second bill.
    /// `NOW()` is transaction-stable, so the stored exit time and the billed
    /// minutes come from one clock reading.
    pub async fn close_ticket(
        &self,
        ticket_id: Uuid,
        hourly_rate: Decimal,
    ) -> Result<Ticket, AppError> {
        sqlx::query_as::<_, Ticket>(
            "UPDATE tickets
             SET exit_time = NOW(),
                 amount_due = FLOOR(EXTRACT(EPOCH FROM (NOW() - entry_time)) / 60) * $2
             WHERE id = $1 AND exit_time IS NULL
             RETURNING *",
        )
        .bind(ticket_id)
        .bind(hourly_rate)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database("Failed to close ticket", e))?
        .ok_or_else(|| AppError::NotFound("Ticket not found or already closed.".to_string()))
    }

    /// Revenue booked on the given date, or on the database's current date
    /// when none is supplied. Zero when nothing closed that day.
    pub async fn daily_revenue(&self, as_of: Option<NaiveDate>) -> Result<Decimal, AppError> {
        sqlx::query_scalar::<_, Decimal>(
            "SELECT COALESCE(SUM(amount_due), 0)
             FROM tickets
             WHERE exit_time::date = COALESCE($1, CURRENT_DATE)",
        )
        .bind(as_of)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database("Failed to compute daily revenue", e))
    }
}
