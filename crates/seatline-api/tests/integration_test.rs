// Integration tests for the Seatline API
// Run with: cargo test --test integration_test -- --ignored
//
// Requires a running server (SEATLINE_API_URL, default http://localhost:9000)
// and an admin account created with the create-admin binary, credentials in
// SEATLINE_ADMIN_USERNAME / SEATLINE_ADMIN_PASSWORD.

use seatline_contracts::{AuthResponse, Booking, CreateBookingResponse, Event, ListResponse};
use serde_json::json;

fn base_url() -> String {
    std::env::var("SEATLINE_API_URL").unwrap_or_else(|_| "http://localhost:9000".to_string())
}

async fn login(client: &reqwest::Client, username: &str, password: &str) -> AuthResponse {
    let response = client
        .post(format!("{}/v1/auth/login", base_url()))
        .json(&json!({ "username": username, "password": password }))
        .send()
        .await
        .expect("Failed to log in");
    assert_eq!(response.status(), 200);
    response.json().await.expect("Invalid login response")
}

#[tokio::test]
#[ignore]
async fn test_full_booking_workflow() {
    let client = reqwest::Client::new();

    // Step 1: Log in as admin and create a seat-plan event
    let admin_username =
        std::env::var("SEATLINE_ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
    let admin_password =
        std::env::var("SEATLINE_ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string());
    let admin = login(&client, &admin_username, &admin_password).await;

    let response = client
        .post(format!("{}/v1/admin/events", base_url()))
        .bearer_auth(&admin.access)
        .json(&json!({
            "title": "Integration Concert",
            "date": "2030-01-01T20:00:00Z",
            "price": 99.0,
            "seat_plan": {
                "sections": [
                    { "id": "A", "name": "Stand A", "capacity": 2, "price": 50.0 },
                    { "id": "B", "capacity": 1, "price": 30.0 }
                ]
            }
        }))
        .send()
        .await
        .expect("Failed to create event");
    assert_eq!(response.status(), 201);
    let event: Event = response.json().await.expect("Invalid event response");

    let available = event.available_seats.as_ref().expect("expected seat list");
    let ids: Vec<&str> = available.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["A-1", "A-2", "B-1"]);
    assert_eq!(event.seat_count, 3);

    // Step 2: Register a user
    let suffix = uuid::Uuid::now_v7().simple().to_string();
    let response = client
        .post(format!("{}/v1/auth/register", base_url()))
        .json(&json!({
            "username": format!("it-user-{}", suffix),
            "email": format!("it-user-{}@example.com", suffix),
            "password": "integration-pass-1"
        }))
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(response.status(), 201);
    let user: AuthResponse = response.json().await.expect("Invalid register response");

    // Step 3: Book two seats; total prices by section
    let response = client
        .post(format!("{}/v1/bookings", base_url()))
        .bearer_auth(&user.access)
        .json(&json!({
            "event_id": event.id,
            "quantity": 2,
            "selected_seats": ["A-2", "B-1"]
        }))
        .send()
        .await
        .expect("Failed to create booking");
    assert_eq!(response.status(), 201);
    let created: CreateBookingResponse = response.json().await.expect("Invalid booking response");

    let response = client
        .get(format!("{}/v1/bookings", base_url()))
        .bearer_auth(&user.access)
        .send()
        .await
        .expect("Failed to list bookings");
    let bookings: ListResponse<Booking> = response.json().await.expect("Invalid bookings list");
    let booking = bookings
        .data
        .iter()
        .find(|b| b.id == created.id)
        .expect("booking missing from listing");
    assert_eq!(booking.total_amount, "80.00");
    assert_eq!(booking.quantity, 2);

    // Step 4: Booking an already-held seat fails
    let response = client
        .post(format!("{}/v1/bookings", base_url()))
        .bearer_auth(&user.access)
        .json(&json!({
            "event_id": event.id,
            "quantity": 1,
            "selected_seats": ["A-2"]
        }))
        .send()
        .await
        .expect("Failed to send booking request");
    assert_eq!(response.status(), 400);

    // Step 5: Availability excludes the held seats
    let response = client
        .get(format!("{}/v1/events/{}", base_url(), event.id))
        .send()
        .await
        .expect("Failed to fetch event");
    let fetched: Event = response.json().await.expect("Invalid event response");
    let ids: Vec<String> = fetched
        .available_seats
        .expect("expected seat list")
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec!["A-1"]);

    // Step 6: Cancel releases the seats
    let response = client
        .post(format!("{}/v1/bookings/{}/cancel", base_url(), created.id))
        .bearer_auth(&user.access)
        .send()
        .await
        .expect("Failed to cancel booking");
    assert_eq!(response.status(), 200);

    let response = client
        .get(format!("{}/v1/events/{}", base_url(), event.id))
        .send()
        .await
        .expect("Failed to fetch event");
    let fetched: Event = response.json().await.expect("Invalid event response");
    assert_eq!(
        fetched.available_seats.expect("expected seat list").len(),
        3
    );

    // Step 7: Payment completion is idempotent
    for _ in 0..2 {
        let response = client
            .post(format!(
                "{}/v1/bookings/{}/complete-payment",
                base_url(),
                created.id
            ))
            .bearer_auth(&user.access)
            .send()
            .await
            .expect("Failed to complete payment");
        assert_eq!(response.status(), 200);
    }

    // Step 8: Another user cannot touch this booking
    let response = client
        .post(format!("{}/v1/auth/register", base_url()))
        .json(&json!({
            "username": format!("it-other-{}", suffix),
            "email": format!("it-other-{}@example.com", suffix),
            "password": "integration-pass-2"
        }))
        .send()
        .await
        .expect("Failed to register second user");
    let other: AuthResponse = response.json().await.expect("Invalid register response");

    let response = client
        .post(format!("{}/v1/bookings/{}/cancel", base_url(), created.id))
        .bearer_auth(&other.access)
        .send()
        .await
        .expect("Failed to send cancel request");
    assert_eq!(response.status(), 403);
}

#[tokio::test]
#[ignore]
async fn test_concurrent_booking_single_winner() {
    let client = reqwest::Client::new();

    let admin_username =
        std::env::var("SEATLINE_ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
    let admin_password =
        std::env::var("SEATLINE_ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string());
    let admin = login(&client, &admin_username, &admin_password).await;

    // One seat, two contenders
    let response = client
        .post(format!("{}/v1/admin/events", base_url()))
        .bearer_auth(&admin.access)
        .json(&json!({
            "title": "Integration Race",
            "date": "2030-01-01T20:00:00Z",
            "price": 25.0,
            "seat_plan": {
                "sections": [{ "id": "R", "capacity": 1, "price": 25.0 }]
            }
        }))
        .send()
        .await
        .expect("Failed to create event");
    assert_eq!(response.status(), 201);
    let event: Event = response.json().await.expect("Invalid event response");

    let suffix = uuid::Uuid::now_v7().simple().to_string();
    let mut tokens = Vec::new();
    for name in ["it-race-a", "it-race-b"] {
        let response = client
            .post(format!("{}/v1/auth/register", base_url()))
            .json(&json!({
                "username": format!("{}-{}", name, suffix),
                "email": format!("{}-{}@example.com", name, suffix),
                "password": "integration-pass-4"
            }))
            .send()
            .await
            .expect("Failed to register");
        assert_eq!(response.status(), 201);
        let user: AuthResponse = response.json().await.expect("Invalid register response");
        tokens.push(user.access);
    }

    // Both requests target the same seat at the same time; the event row
    // lock serializes them, so exactly one wins
    let book = |token: String| {
        let client = client.clone();
        let event_id = event.id;
        async move {
            client
                .post(format!("{}/v1/bookings", base_url()))
                .bearer_auth(&token)
                .json(&json!({
                    "event_id": event_id,
                    "quantity": 1,
                    "selected_seats": ["R-1"]
                }))
                .send()
                .await
                .expect("Failed to send booking request")
                .status()
                .as_u16()
        }
    };
    let (first, second) = tokio::join!(book(tokens[0].clone()), book(tokens[1].clone()));

    let mut statuses = [first, second];
    statuses.sort();
    assert_eq!(statuses, [201, 400]);

    // The winner holds the seat; nothing is left
    let response = client
        .get(format!("{}/v1/events/{}", base_url(), event.id))
        .send()
        .await
        .expect("Failed to fetch event");
    let fetched: Event = response.json().await.expect("Invalid event response");
    assert!(fetched
        .available_seats
        .expect("expected seat list")
        .is_empty());
}

#[tokio::test]
#[ignore]
async fn test_ticket_counter_event_clamps_quantity() {
    let client = reqwest::Client::new();

    let admin_username =
        std::env::var("SEATLINE_ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
    let admin_password =
        std::env::var("SEATLINE_ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string());
    let admin = login(&client, &admin_username, &admin_password).await;

    let response = client
        .post(format!("{}/v1/admin/events", base_url()))
        .bearer_auth(&admin.access)
        .json(&json!({
            "title": "Integration Bus Route",
            "category": "bus",
            "date": "2030-01-01T08:00:00Z",
            "source": "Springfield",
            "destination": "Shelbyville",
            "price": 10.0,
            "available_tickets": 3
        }))
        .send()
        .await
        .expect("Failed to create event");
    assert_eq!(response.status(), 201);
    let event: Event = response.json().await.expect("Invalid event response");
    assert!(event.available_seats.is_none());
    assert_eq!(event.seat_count, 3);

    let suffix = uuid::Uuid::now_v7().simple().to_string();
    let response = client
        .post(format!("{}/v1/auth/register", base_url()))
        .json(&json!({
            "username": format!("it-bus-{}", suffix),
            "email": format!("it-bus-{}@example.com", suffix),
            "password": "integration-pass-3"
        }))
        .send()
        .await
        .expect("Failed to register");
    let user: AuthResponse = response.json().await.expect("Invalid register response");

    // Quantity over the remaining count is clamped, not rejected
    let response = client
        .post(format!("{}/v1/bookings", base_url()))
        .bearer_auth(&user.access)
        .json(&json!({ "event_id": event.id, "quantity": 10 }))
        .send()
        .await
        .expect("Failed to create booking");
    assert_eq!(response.status(), 201);
    let created: CreateBookingResponse = response.json().await.expect("Invalid booking response");

    let response = client
        .get(format!("{}/v1/bookings", base_url()))
        .bearer_auth(&user.access)
        .send()
        .await
        .expect("Failed to list bookings");
    let bookings: ListResponse<Booking> = response.json().await.expect("Invalid bookings list");
    let booking = bookings
        .data
        .iter()
        .find(|b| b.id == created.id)
        .expect("booking missing from listing");
    assert_eq!(booking.quantity, 3);
    assert_eq!(booking.total_amount, "30.00");

    // A counter event with nothing left rejects outright
    let response = client
        .post(format!("{}/v1/admin/events", base_url()))
        .bearer_auth(&admin.access)
        .json(&json!({
            "title": "Integration Sold Out Bus",
            "category": "bus",
            "date": "2030-01-01T09:00:00Z",
            "price": 10.0,
            "available_tickets": 0
        }))
        .send()
        .await
        .expect("Failed to create event");
    assert_eq!(response.status(), 201);
    let sold_out: Event = response.json().await.expect("Invalid event response");

    let response = client
        .post(format!("{}/v1/bookings", base_url()))
        .bearer_auth(&user.access)
        .json(&json!({ "event_id": sold_out.id, "quantity": 1 }))
        .send()
        .await
        .expect("Failed to send booking request");
    assert_eq!(response.status(), 400);
}
