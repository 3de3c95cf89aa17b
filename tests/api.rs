mod common;

use axum::http::Method;
use serde_json::json;

use bus_booking_client::entities::bus::{CreateBusRequest, Seat, UpdateBusModelRequest};
use bus_booking_client::entities::payment::{CreatePaymentLinkRequest, PaymentLink};
use bus_booking_client::entities::station::{CreateStationRequest, UpdateStationRequest};
use bus_booking_client::ApiError;

use common::{MockBackend, TEST_TOKEN};

fn envelope(data: serde_json::Value) -> serde_json::Value {
    json!({ "success": true, "data": data, "message": "" })
}

#[tokio::test]
async fn test_admin_get_all_returns_envelope_data_in_order() {
    let buses = json!([
        { "id": "b2", "plateNumber": "51B-222.22" },
        { "id": "b1", "plateNumber": "51B-111.11" }
    ]);
    let models = json!([
        { "id": "m1", "name": "Limousine 22", "layout": { "rows": 11, "cols": 2, "decks": 1 } }
    ]);
    let routes = json!([
        { "id": "r1", "origin": "Ha Noi", "destination": "Sa Pa", "distance": 320.0, "duration": 330,
          "pickupStops": [{ "stationId": "s1", "sequence": 1 }], "dropoffStops": [] }
    ]);
    let stations = json!([
        { "id": "s2", "name": "Giap Bat", "address": "Giai Phong", "ward": "Hoang Liet", "city": "Ha Noi" },
        { "id": "s1", "name": "My Dinh", "address": "Pham Hung", "ward": "My Dinh 2", "city": "Ha Noi" }
    ]);
    let users = json!([
        { "id": "u1", "email": "a@bus.vn", "role": "ADMIN", "enabled": true },
        { "id": "u2", "email": "b@bus.vn", "role": "USER", "enabled": false }
    ]);

    let mock = MockBackend::new()
        .respond(Method::GET, "/admin/buses", 200, envelope(buses))
        .respond(Method::GET, "/admin/buses/models", 200, envelope(models))
        .respond(Method::GET, "/admin/routes", 200, envelope(routes))
        .respond(Method::GET, "/admin/stations", 200, envelope(stations))
        .respond(Method::GET, "/user/admin/users", 200, envelope(users))
        .spawn()
        .await;
    let client = mock.client();

    let buses = client.admin_buses().get_all().await.unwrap();
    assert_eq!(
        buses.iter().map(|b| b.id.as_str()).collect::<Vec<_>>(),
        vec!["b2", "b1"]
    );

    let models = client.bus_models().get_all().await.unwrap();
    assert_eq!(models.len(), 1);
    assert_eq!(models[0].layout.rows, 11);

    let routes = client.admin_routes().get_all().await.unwrap();
    assert_eq!(routes[0].pickup_stops[0].station_id, "s1");

    let stations = client.stations().get_all().await.unwrap();
    assert_eq!(
        stations.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
        vec!["Giap Bat", "My Dinh"]
    );

    let users = client.users().get_all().await.unwrap();
    assert_eq!(users.len(), 2);
    assert!(!users[1].enabled);

    for request in mock.requests() {
        assert_eq!(request.method, Method::GET);
        assert_eq!(
            request.authorization.as_deref(),
            Some(format!("Bearer {}", TEST_TOKEN).as_str())
        );
    }
}

#[tokio::test]
async fn test_public_get_all_reads_raw_bodies() {
    let mock = MockBackend::new()
        .respond(
            Method::GET,
            "/booking/operators",
            200,
            json!([{ "id": "o1", "name": "Phuong Trang" }, { "id": "o2", "name": "Hoang Long" }]),
        )
        .respond(Method::GET, "/booking/buses", 200, json!([]))
        .respond(Method::GET, "/booking/routes", 200, json!(null))
        .spawn()
        .await;
    let client = mock.anonymous_client();

    let operators = client.operators().get_all().await.unwrap();
    assert_eq!(operators[1].name, "Hoang Long");
    assert!(client.buses().get_all().await.unwrap().is_empty());
    assert!(client.routes().get_all().await.unwrap().is_empty());

    assert!(mock.requests().iter().all(|r| r.authorization.is_none()));
}

#[tokio::test]
async fn test_every_module_surfaces_non_2xx() {
    // Nothing registered: every route answers 404
    let mock = MockBackend::new().spawn().await;
    let client = mock.client();

    assert!(matches!(client.buses().get_all().await, Err(ApiError::NotFound(_))));
    assert!(matches!(client.operators().get_all().await, Err(ApiError::NotFound(_))));
    assert!(matches!(client.routes().get_all().await, Err(ApiError::NotFound(_))));
    assert!(client.seat_types().get_by_operator("o1").await.is_err());
    assert!(client.admin_buses().get_all().await.is_err());
    assert!(client.bus_models().get_all().await.is_err());
    assert!(client.admin_routes().get_all().await.is_err());
    assert!(client.stations().get_all().await.is_err());
    assert!(client.users().get_all().await.is_err());
    assert!(client.profile().get_me().await.is_err());

    match client.bus_models().get_by_id("missing").await {
        Err(ApiError::NotFound(message)) => assert_eq!(message, "No such route"),
        other => panic!("unexpected result: {:?}", other.map(|m| m.id)),
    }
}

#[tokio::test]
async fn test_server_error_keeps_backend_message() {
    let mock = MockBackend::new()
        .respond(
            Method::GET,
            "/admin/stations",
            500,
            json!({ "success": false, "data": null, "message": "Database unavailable" }),
        )
        .spawn()
        .await;

    match mock.client().stations().get_all().await {
        Err(ApiError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Database unavailable");
        }
        other => panic!("unexpected result: {:?}", other.map(|s| s.len())),
    }
    assert_eq!(mock.requests().len(), 1, "no retry expected");
}

#[tokio::test]
async fn test_unsuccessful_envelope_on_200_is_rejected() {
    let mock = MockBackend::new()
        .respond(
            Method::GET,
            "/user/admin/users",
            200,
            json!({ "success": false, "data": null, "message": "Session expired" }),
        )
        .spawn()
        .await;

    let result = mock.client().users().get_all().await;
    assert!(matches!(result, Err(ApiError::Rejected(msg)) if msg == "Session expired"));
}

#[tokio::test]
async fn test_private_call_without_token_is_not_sent() {
    let mock = MockBackend::new().spawn().await;
    let result = mock.anonymous_client().stations().get_all().await;

    assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_save_seat_map_posts_once_and_returns_body() {
    let reply = json!({ "busId": "bus-1", "saved": 1, "seats": [{ "code": "A1" }] });
    let mock = MockBackend::new()
        .respond(Method::POST, "/booking/buses/bus-1/seats/custom", 200, reply.clone())
        .spawn()
        .await;

    let seats = vec![Seat::new("A1", 1, 1, 1)];
    let result = mock.client().buses().save_seat_map("bus-1", &seats).await.unwrap();
    assert_eq!(result, reply);

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].path, "/booking/buses/bus-1/seats/custom");
    assert_eq!(
        requests[0].json(),
        json!([{ "code": "A1", "row": 1, "col": 1, "deck": 1 }])
    );
}

#[tokio::test]
async fn test_create_payment_link_returns_object_unchanged() {
    let mock = MockBackend::new()
        .respond(
            Method::POST,
            "/booking/payments/create-link",
            200,
            json!({ "checkoutUrl": "https://pay/abc", "success": true, "orderCode": 42, "qrCode": "QR..." }),
        )
        .spawn()
        .await;

    let request = CreatePaymentLinkRequest {
        ticket_id: "t1".to_string(),
        return_url: "https://x/ok".to_string(),
        cancel_url: "https://x/cancel".to_string(),
    };
    let link = mock
        .anonymous_client()
        .payments()
        .create_payment_link(&request)
        .await
        .unwrap();

    assert_eq!(
        link,
        PaymentLink {
            checkout_url: "https://pay/abc".to_string(),
            success: true,
            order_code: 42,
            qr_code: "QR...".to_string(),
        }
    );

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].authorization.is_none());
    assert_eq!(
        requests[0].json(),
        json!({ "ticketId": "t1", "returnUrl": "https://x/ok", "cancelUrl": "https://x/cancel" })
    );
}

#[tokio::test]
async fn test_write_conventions_differ_per_endpoint() {
    let bus = json!({ "id": "b9", "plateNumber": "29B-999.99", "busModelId": "m1" });
    let station = json!({ "id": "s9", "name": "Nuoc Ngam", "address": "Giai Phong", "ward": "Hoang Liet", "city": "Ha Noi" });
    let mock = MockBackend::new()
        .respond(
            Method::POST,
            "/admin/buses",
            201,
            json!({ "success": true, "data": bus, "message": "Bus created" }),
        )
        .respond(
            Method::POST,
            "/admin/stations",
            201,
            json!({ "success": true, "data": station, "message": "Station created" }),
        )
        .respond(
            Method::DELETE,
            "/admin/routes/r1",
            200,
            json!({ "success": true, "data": null, "message": "Route deleted" }),
        )
        .respond(Method::DELETE, "/booking/operators/o1", 204, json!(null))
        .spawn()
        .await;
    let client = mock.client();

    let created = client
        .admin_buses()
        .create(&CreateBusRequest {
            plate_number: "29B-999.99".to_string(),
            bus_model_id: "m1".to_string(),
            operator_id: None,
        })
        .await
        .unwrap();
    assert!(created.success);
    assert_eq!(created.message.as_deref(), Some("Bus created"));
    assert_eq!(created.data.unwrap().id, "b9");

    let station = client
        .stations()
        .create(&CreateStationRequest {
            name: "Nuoc Ngam".to_string(),
            address: "Giai Phong".to_string(),
            ward: "Hoang Liet".to_string(),
            city: "Ha Noi".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(station.id, "s9");

    let deleted = client.admin_routes().delete("r1").await.unwrap();
    assert_eq!(deleted.message.as_deref(), Some("Route deleted"));

    client.operators().delete("o1").await.unwrap();
}

#[tokio::test]
async fn test_user_status_and_seat_type_paths() {
    let mock = MockBackend::new()
        .respond(
            Method::PUT,
            "/user/admin/users/u2/status",
            200,
            envelope(json!({ "id": "u2", "email": "b@bus.vn", "role": "USER", "enabled": true })),
        )
        .respond(
            Method::GET,
            "/booking/seat-types/operator/o1",
            200,
            json!([{ "id": "st1", "operatorId": "o1", "name": "Sleeper" }]),
        )
        .spawn()
        .await;
    let client = mock.client();

    let user = client.users().set_enabled("u2", true).await.unwrap();
    assert!(user.enabled);

    let seat_types = client.seat_types().get_by_operator("o1").await.unwrap();
    assert_eq!(seat_types[0].name, "Sleeper");

    let requests = mock.requests();
    assert_eq!(requests[0].json(), json!({ "enabled": true }));
    assert_eq!(requests[1].path, "/booking/seat-types/operator/o1");
    assert!(requests[1].authorization.is_some());
}

#[tokio::test]
async fn test_login_and_logout_switch_private_access() {
    use bus_booking_client::entities::user::UserRole;
    use bus_booking_client::utils::jwt::Claims;
    use jsonwebtoken::{EncodingKey, Header, encode};

    let now = chrono::Utc::now();
    let claims = Claims {
        sub: "admin-1".to_string(),
        email: Some("admin@bus.vn".to_string()),
        role: UserRole::Admin,
        exp: (now + chrono::Duration::hours(1)).timestamp(),
        iat: now.timestamp(),
    };
    let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(b"secret")).unwrap();

    let mock = MockBackend::new()
        .respond(Method::GET, "/admin/stations", 200, envelope(json!([])))
        .spawn()
        .await;
    let client = mock.anonymous_client();
    assert!(!client.auth_context().is_logged_in());

    let ctx = client.login(token.clone());
    assert!(ctx.is_admin());
    assert_eq!(client.auth_context(), ctx);
    assert!(client.stations().get_all().await.unwrap().is_empty());
    assert_eq!(
        mock.requests()[0].authorization,
        Some(format!("Bearer {}", token))
    );

    assert!(!client.logout().is_logged_in());
    assert!(matches!(
        client.stations().get_all().await,
        Err(ApiError::Unauthorized(_))
    ));
    assert_eq!(mock.requests().len(), 1);
}

#[tokio::test]
async fn test_updates_and_get_by_id_hit_item_paths() {
    let model = json!({ "id": "m1", "name": "Sleeper 40", "layout": { "rows": 10, "cols": 4, "decks": 2 } });
    let station = json!({ "id": "s1", "name": "My Dinh", "address": "Pham Hung", "ward": "My Dinh 1", "city": "Ha Noi" });
    let route = json!({ "id": "r1", "origin": "Ha Noi", "destination": "Hai Phong", "distance": 120.0, "duration": 150,
                        "pickupStops": [], "dropoffStops": [{ "stationId": "s7", "sequence": 1 }] });
    let mock = MockBackend::new()
        .respond(
            Method::PUT,
            "/admin/buses/models/m1",
            200,
            json!({ "success": true, "data": model, "message": "Bus model updated" }),
        )
        .respond(
            Method::PUT,
            "/admin/stations/s1",
            200,
            json!({ "success": true, "data": station, "message": "Station updated" }),
        )
        .respond(Method::GET, "/admin/routes/r1", 200, envelope(route))
        .spawn()
        .await;
    let client = mock.client();

    let updated = client
        .bus_models()
        .update(
            "m1",
            &UpdateBusModelRequest {
                name: Some("Sleeper 40".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(updated.success);
    assert_eq!(updated.message.as_deref(), Some("Bus model updated"));
    assert_eq!(updated.data.unwrap().layout.decks, 2);

    let station = client
        .stations()
        .update(
            "s1",
            &UpdateStationRequest {
                ward: Some("My Dinh 1".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(station.id, "s1");
    assert_eq!(station.ward, "My Dinh 1");

    let route = client.admin_routes().get_by_id("r1").await.unwrap();
    assert_eq!(route.destination, "Hai Phong");
    assert_eq!(route.dropoff_stops[0].station_id, "s7");

    let requests = mock.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].method, Method::PUT);
    assert_eq!(requests[0].path, "/admin/buses/models/m1");
    assert_eq!(requests[0].json(), json!({ "name": "Sleeper 40" }));
    assert_eq!(requests[1].method, Method::PUT);
    assert_eq!(requests[1].path, "/admin/stations/s1");
    assert_eq!(requests[1].json(), json!({ "ward": "My Dinh 1" }));
    assert_eq!(requests[2].method, Method::GET);
    assert_eq!(requests[2].path, "/admin/routes/r1");
}

#[tokio::test]
async fn test_ids_are_sent_as_single_encoded_segments() {
    let mock = MockBackend::new()
        .respond(Method::DELETE, "/booking/operators/o1%2F..%2F..%2Fadmin%2Fbuses%2Fb1", 204, json!(null))
        .respond(Method::GET, "/booking/buses/b%231", 200, json!({ "id": "b#1", "plateNumber": "51B-123.45" }))
        .respond(
            Method::PUT,
            "/user/admin/users/u%3Fforce%3Dtrue/status",
            200,
            envelope(json!({ "id": "u?force=true", "email": "c@bus.vn", "role": "USER", "enabled": false })),
        )
        .respond(Method::GET, "/booking/seat-types/operator/o%201", 200, json!([]))
        .spawn()
        .await;
    let client = mock.client();

    client.operators().delete("o1/../../admin/buses/b1").await.unwrap();
    let bus = client.buses().get_by_id("b#1").await.unwrap();
    assert_eq!(bus.id, "b#1");
    let user = client.users().set_enabled("u?force=true", false).await.unwrap();
    assert!(!user.enabled);
    assert!(client.seat_types().get_by_operator("o 1").await.unwrap().is_empty());

    let paths: Vec<String> = mock.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        vec![
            "/booking/operators/o1%2F..%2F..%2Fadmin%2Fbuses%2Fb1",
            "/booking/buses/b%231",
            "/user/admin/users/u%3Fforce%3Dtrue/status",
            "/booking/seat-types/operator/o%201",
        ]
    );
}

#[tokio::test]
async fn test_empty_id_is_rejected_before_sending() {
    let mock = MockBackend::new()
        .respond(Method::DELETE, "/booking/operators", 204, json!(null))
        .respond(Method::GET, "/admin/stations", 200, envelope(json!([])))
        .spawn()
        .await;
    let client = mock.client();

    assert!(matches!(
        client.operators().delete("").await,
        Err(ApiError::Validation(_))
    ));
    assert!(matches!(
        client.admin_routes().get_by_id("").await,
        Err(ApiError::Validation(_))
    ));
    assert!(matches!(
        client
            .stations()
            .update("", &UpdateStationRequest::default())
            .await,
        Err(ApiError::Validation(_))
    ));
    assert!(matches!(
        client.users().set_enabled("", true).await,
        Err(ApiError::Validation(_))
    ));
    assert!(matches!(
        client.buses().save_seat_map("", &[]).await,
        Err(ApiError::Validation(_))
    ));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_admin_delete_tolerates_any_data_payload() {
    let mock = MockBackend::new()
        .respond(
            Method::DELETE,
            "/admin/buses/models/m1",
            200,
            json!({ "success": true, "data": { "id": "m1", "deletedAt": "2026-10-18" }, "message": "Bus model deleted" }),
        )
        .respond(
            Method::DELETE,
            "/admin/buses/b1",
            200,
            json!({ "success": true, "data": true, "message": "Bus deleted" }),
        )
        .respond(
            Method::DELETE,
            "/admin/routes/r1",
            200,
            json!({ "success": true, "message": "Route deleted" }),
        )
        .spawn()
        .await;
    let client = mock.client();

    let model = client.bus_models().delete("m1").await.unwrap();
    assert!(model.success);
    assert_eq!(model.data, Some(()));
    assert_eq!(model.message.as_deref(), Some("Bus model deleted"));

    let bus = client.admin_buses().delete("b1").await.unwrap();
    assert_eq!(bus.data, Some(()));
    assert_eq!(bus.message.as_deref(), Some("Bus deleted"));

    let route = client.admin_routes().delete("r1").await.unwrap();
    assert_eq!(route.data, None);
    assert_eq!(route.message.as_deref(), Some("Route deleted"));
}
