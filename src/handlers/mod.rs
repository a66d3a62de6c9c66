use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{ParkingSpace, Ticket};
use crate::store::ParkingStore;
use crate::utils::error::AppError;
use crate::utils::response::success_message;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "aparca-api",
    };

    Json(payload).into_response()
}

pub async fn list_spaces(
    State(store): State<ParkingStore>,
) -> Result<Json<Vec<ParkingSpace>>, AppError> {
    Ok(Json(store.list_spaces().await?))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAvailabilityPayload {
    pub space_number: i32,
    pub available: bool,
}

pub async fn update_availability(
    State(store): State<ParkingStore>,
    Json(payload): Json<UpdateAvailabilityPayload>,
) -> Result<Response, AppError> {
    store
        .set_space_availability(payload.space_number, payload.available)
        .await?;

    Ok(success_message("Availability updated successfully.").into_response())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenTicketPayload {
    pub space_id: i32,
    pub plate: String,
    pub hourly_rate: Decimal,
}

#[derive(Serialize)]
pub struct TicketCreated {
    pub success: bool,
    pub message: String,
    pub ticket: Ticket,
}

pub async fn open_ticket(
    State(store): State<ParkingStore>,
    Json(payload): Json<OpenTicketPayload>,
) -> Result<Json<TicketCreated>, AppError> {
    let ticket = store
        .open_ticket(payload.space_id, &payload.plate, payload.hourly_rate)
        .await?;

    Ok(Json(TicketCreated {
        success: true,
        message: "Ticket created successfully.".to_string(),
        ticket,
    }))
}

pub async fn list_open_tickets(
    State(store): State<ParkingStore>,
) -> Result<Json<Vec<Ticket>>, AppError> {
    Ok(Json(store.list_open_tickets().await?))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseTicketPayload {
    pub ticket_id: Uuid,
    pub hourly_rate: Decimal,
}

#[derive(Serialize)]
pub struct TicketClosed {
    pub success: bool,
    pub ticket: Ticket,
}

pub async fn close_ticket(
    State(store): State<ParkingStore>,
    Json(payload): Json<CloseTicketPayload>,
) -> Result<Json<TicketClosed>, AppError> {
    let ticket = store
        .close_ticket(payload.ticket_id, payload.hourly_rate)
        .await?;

    Ok(Json(TicketClosed {
        success: true,
        ticket,
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalRevenue {
    pub success: bool,
    pub total_revenue: Decimal,
}

pub async fn total_revenue(
    State(store): State<ParkingStore>,
) -> Result<Json<TotalRevenue>, AppError> {
    let total = store.daily_revenue(None).await?;

    Ok(Json(TotalRevenue {
        success: true,
        total_revenue: total,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payloads_use_camel_case_keys() {
        let payload: UpdateAvailabilityPayload =
            serde_json::from_str(r#"{"spaceNumber": 3, "available": false}"#).unwrap();
        assert_eq!(payload.space_number, 3);
        assert!(!payload.available);

        let payload: OpenTicketPayload =
            serde_json::from_str(r#"{"spaceId": 1, "plate": "1234-ABC", "hourlyRate": "2.50"}"#)
                .unwrap();
        assert_eq!(payload.plate, "1234-ABC");
        assert_eq!(payload.hourly_rate, Decimal::new(250, 2));
    }

    #[test]
    fn test_revenue_response_uses_camel_case_key() {
        let body = TotalRevenue {
            success: true,
            total_revenue: Decimal::new(18000, 2),
        };
        let value = serde_json::to_value(body).unwrap();
        assert!(value.get("totalRevenue").is_some());
    }
}
