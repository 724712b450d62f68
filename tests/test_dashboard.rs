mod helpers;

use helpers::*;
use rentadrive::domain::entities::BookingStatus;
use rentadrive::domain::errors::ApiError;
use rentadrive::infrastructure::http::middleware::AdminToken;

#[tokio::test]
async fn test_dashboard_stats() {
    let app = test_app();
    app.backend.on_list_vehicles(Ok(vec![
        vehicle("c1", 250.0, true),
        vehicle("c2", 300.0, false),
        vehicle("c3", 450.0, true),
    ]));
    app.backend
        .on_list_users(Ok(vec![admin_user("u1"), admin_user("u2")]));
    app.backend.on_list_bookings(Ok(vec![
        booking_record("b1", None, Some(BookingStatus::Pending), Some(750.0)),
        booking_record("b2", None, Some(BookingStatus::Completed), Some(1200.5)),
        booking_record("b3", None, Some(BookingStatus::Cancelled), Some(900.0)),
        booking_record("b4", None, None, None),
    ]));

    let dashboard = app
        .state
        .dashboard_service
        .load(&AdminToken("admin-token".to_string()))
        .await;

    assert_eq!(dashboard.stats.total_cars, 3);
    assert_eq!(dashboard.stats.available_cars, 2);
    assert_eq!(dashboard.stats.total_users, 2);
    assert_eq!(dashboard.stats.total_bookings, 4);
    assert_eq!(dashboard.stats.pending_bookings, 1);
    assert_eq!(dashboard.stats.revenue, 1950.5);
    assert!(dashboard.cars.error.is_none());
}

#[tokio::test]
async fn test_dashboard_partial_failure() {
    let app = test_app();
    app.backend
        .on_list_vehicles(Ok(vec![vehicle("c1", 250.0, true)]));
    app.backend
        .on_list_users(Err(ApiError::server(403, "Admin access required")));

    let dashboard = app
        .state
        .dashboard_service
        .load(&AdminToken("admin-token".to_string()))
        .await;

    assert_eq!(dashboard.stats.total_cars, 1);
    assert_eq!(dashboard.stats.total_users, 0);
    assert!(dashboard.users.items.is_none());
    assert_eq!(dashboard.users.error.as_deref(), Some("Admin access required"));
    assert_eq!(dashboard.bookings.items.as_ref().map(Vec::len), Some(0));
}
