use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

use crate::config::{create_cors_layer, security_headers};
use crate::handlers::{
    close_ticket, health_check, list_open_tickets, list_spaces, open_ticket, total_revenue,
    update_availability,
};
use crate::store::ParkingStore;

pub fn create_routes(store: ParkingStore) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/parkings", get(list_spaces))
        .route("/api/parkings/disponibilidad", post(update_availability))
        .route("/api/tickets/ingresar", post(open_ticket))
        .route("/api/tickets/activos", get(list_open_tickets))
        .route("/api/tickets/cerrar", post(close_ticket))
        .route("/api/ingresos/totales", get(total_revenue))
        .layer(middleware::from_fn(security_headers))
        .layer(create_cors_layer())
        .with_state(store)
}
