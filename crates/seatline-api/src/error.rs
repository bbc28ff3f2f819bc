// API error mapping
//
// Domain errors become `{"detail": "..."}` JSON bodies. EventNotFound and
// EventNotBookable map to the same 404 body on purpose: clients cannot tell
// removed events from never-existing ones.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use seatline_contracts::ErrorResponse;
use seatline_core::BookingError;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, detail)
    }

    pub fn forbidden(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse::new(self.detail))).into_response()
    }
}

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::EventNotFound(_) | BookingError::EventNotBookable(_) => {
                ApiError::not_found("Event not found or inactive")
            }
            BookingError::SeatSelectionRequired => ApiError::bad_request("Please select seats"),
            BookingError::SeatUnavailable => {
                ApiError::bad_request("One or more seats are not available")
            }
            BookingError::SoldOut => ApiError::bad_request("No tickets available"),
            BookingError::BookingNotFound(_) => ApiError::not_found("Booking not found"),
            BookingError::Forbidden => ApiError::forbidden("Not your booking"),
            BookingError::Internal(e) => {
                tracing::error!("Booking operation failed: {:#}", e);
                ApiError::internal()
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!("Request failed: {:#}", err);
        ApiError::internal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_not_found_and_not_bookable_share_body() {
        let id = Uuid::now_v7();
        let a = ApiError::from(BookingError::EventNotFound(id));
        let b = ApiError::from(BookingError::EventNotBookable(id));

        assert_eq!(a.status, StatusCode::NOT_FOUND);
        assert_eq!(b.status, StatusCode::NOT_FOUND);
        assert_eq!(a.detail, b.detail);
    }

    #[test]
    fn test_seat_errors_are_bad_requests() {
        assert_eq!(
            ApiError::from(BookingError::SeatSelectionRequired).status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(BookingError::SeatUnavailable).status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(BookingError::SoldOut).status,
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_forbidden_mapping() {
        let err = ApiError::from(BookingError::Forbidden);
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.detail, "Not your booking");
    }
}
