use crate::models::ParkingSpace;
use crate::utils::error::AppError;

use super::ParkingStore;

impl ParkingStore {
    pub async fn list_spaces(&self) -> Result<Vec<ParkingSpace>, AppError> {
        sqlx::query_as::<_, ParkingSpace>(
            "SELECT number, available FROM parking_spaces ORDER BY number",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database("Failed to fetch parking spaces", e))
    }

    /// Flips the availability flag of a single space. No relationship to open
    /// tickets is enforced.
    pub async fn set_space_availability(
        &self,
        number: i32,
        available: bool,
    ) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE parking_spaces SET available = $1 WHERE number = $2")
            .bind(available)
            .bind(number)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database("Failed to update availability", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Parking space {number} not found."
            )));
        }

        Ok(())
    }
}
