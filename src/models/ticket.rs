use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A vehicle's parking session. Open until `exit_time` is set; `exit_time`
/// and `amount_due` are null together and are assigned together by the store
/// in a single conditional update.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Uuid,
    pub space_id: i32,
    pub plate: String,
    pub entry_time: DateTime<Utc>,
    pub hourly_rate: Decimal,
    pub exit_time: Option<DateTime<Utc>>,
    pub amount_due: Option<Decimal>,
}

impl Ticket {
    pub fn is_open(&self) -> bool {
        self.exit_time.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_ticket() -> Ticket {
        Ticket {
            id: Uuid::nil(),
            space_id: 7,
            plate: "1234-ABC".to_string(),
            entry_time: Utc::now(),
            hourly_rate: Decimal::new(250, 2),
            exit_time: None,
            amount_due: None,
        }
    }

    #[test]
    fn test_open_ticket_has_no_exit_or_amount() {
        let ticket = open_ticket();
        assert!(ticket.is_open());
        assert!(ticket.amount_due.is_none());
    }

    #[test]
    fn test_ticket_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(open_ticket()).unwrap();
        assert!(value.get("spaceId").is_some());
        assert!(value.get("entryTime").is_some());
        assert!(value.get("hourlyRate").is_some());
        assert!(value["exitTime"].is_null());
        assert!(value["amountDue"].is_null());
    }
}
