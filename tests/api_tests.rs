//! Integration tests for the ShipStation operation surface.
//!
//! These tests verify that each [`shipstation_api::ShipStation`] method
//! hits the documented endpoint with the documented method, query, and
//! body, and that results come back undistorted. All HTTP interactions run
//! against wiremock servers.

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shipstation_api::{
    ApiKey, ApiSecret, HostUrl, HttpError, QueryParams, ShipStation, ShipStationConfig,
    ShippedNotice, WebhookSubscription,
};

fn client_for(server: &MockServer) -> ShipStation {
    let config = ShipStationConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .api_secret(ApiSecret::new("test-secret").unwrap())
        .api_host(HostUrl::new(&server.uri()).unwrap())
        .build()
        .unwrap();
    ShipStation::new(&config)
}

// Orders ....................................................................

#[tokio::test]
async fn test_get_order_resolves_with_exact_body() {
    let server = MockServer::start().await;
    let order = json!({
        "orderId": 123,
        "orderNumber": "TEST-1001",
        "orderStatus": "awaiting_shipment"
    });

    Mock::given(method("GET"))
        .and(path("/orders/123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(order.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = client.get_order(123).await.unwrap();
    assert_eq!(body, order);
}

#[tokio::test]
async fn test_list_orders_with_filter_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders/"))
        .and(query_param("orderStatus", "awaiting_shipment"))
        .and(query_param("storeId", "12345"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": [], "total": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = QueryParams::new()
        .param("orderStatus", "awaiting_shipment")
        .param("storeId", 12345);
    let body = client.list_orders(Some(query)).await.unwrap();
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_list_orders_without_filters_sends_no_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": []})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.list_orders(None).await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received[0].url.query(), None);
}

#[tokio::test]
async fn test_save_order_posts_payload_to_createorder() {
    let server = MockServer::start().await;
    let order = json!({"orderNumber": "TEST-1001", "orderKey": "key-1", "orderStatus": "awaiting_shipment"});

    Mock::given(method("POST"))
        .and(path("/orders/createorder"))
        .and(body_json(order.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orderId": 9000})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = client.save_order(order).await.unwrap();
    assert_eq!(body["orderId"], 9000);
}

#[tokio::test]
async fn test_create_label_for_order_posts_to_createlabelfororder() {
    let server = MockServer::start().await;
    let label_info = json!({"orderId": 123, "carrierCode": "usps", "serviceCode": "usps_priority_mail"});

    Mock::given(method("POST"))
        .and(path("/orders/createlabelfororder"))
        .and(body_json(label_info.clone()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"labelData": "JVBERi0xLjQ="})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = client.create_label_for_order(label_info).await.unwrap();
    assert_eq!(body["labelData"], "JVBERi0xLjQ=");
}

#[tokio::test]
async fn test_mark_order_as_shipped_omits_unset_fields_on_the_wire() {
    let server = MockServer::start().await;

    // The matcher is exact: a body with extra keys (or nulls) would not match.
    Mock::given(method("POST"))
        .and(path("/orders/markasshipped"))
        .and(body_json(json!({"orderId": 123, "trackingNumber": "9400100000000000000000"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"orderId": 123, "orderNumber": "TEST-1001"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let notice = ShippedNotice::new(123).tracking_number("9400100000000000000000");
    client.mark_order_as_shipped(&notice).await.unwrap();
}

#[tokio::test]
async fn test_mark_order_as_shipped_sends_full_payload_when_provided() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/orders/markasshipped"))
        .and(body_json(json!({
            "orderId": 123,
            "carrierCode": "usps",
            "shipDate": "2024-03-15",
            "trackingNumber": "9400100000000000000000",
            "notifyCustomer": true,
            "notifySalesChannel": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orderId": 123})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let notice = ShippedNotice::new(123)
        .carrier_code("usps")
        .ship_date(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
        .tracking_number("9400100000000000000000")
        .notify_customer(true)
        .notify_sales_channel(false);
    client.mark_order_as_shipped(&notice).await.unwrap();
}

#[tokio::test]
async fn test_list_orders_tagged_with_sends_status_then_tag() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders/listbytag"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": []})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .list_orders_tagged_with("awaiting_shipment", 7)
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(
        received[0].url.query(),
        Some("orderStatus=awaiting_shipment&tagId=7")
    );
}

#[tokio::test]
async fn test_tag_and_untag_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/orders/addtag"))
        .and(body_json(json!({"orderId": 123, "tagId": 7})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/orders/removetag"))
        .and(body_json(json!({"orderId": 123, "tagId": 7})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.tag_order(123, 7).await.unwrap();
    client.untag_order(123, 7).await.unwrap();
}

#[tokio::test]
async fn test_hold_order_until_formats_date() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/orders/holduntil"))
        .and(body_json(json!({"orderId": 123, "holdUntilDate": "2024-12-01"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .hold_order_until(123, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap())
        .await
        .unwrap();
}

// Shipments .................................................................

#[tokio::test]
async fn test_list_shipments_with_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shipments/"))
        .and(query_param("trackingNumber", "9400100000000000000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"shipments": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = QueryParams::new().param("trackingNumber", "9400100000000000000000");
    client.list_shipments(Some(query)).await.unwrap();
}

#[tokio::test]
async fn test_get_rates_passes_payload_through() {
    let server = MockServer::start().await;
    let rate_options = json!({
        "carrierCode": "fedex",
        "fromPostalCode": "78703",
        "toCountry": "US",
        "toPostalCode": "20500",
        "weight": {"value": 3, "units": "ounces"}
    });

    Mock::given(method("POST"))
        .and(path("/shipments/getrates"))
        .and(body_json(rate_options.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"serviceName": "FedEx Ground"}])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = client.get_rates(rate_options).await.unwrap();
    assert_eq!(body[0]["serviceName"], "FedEx Ground");
}

#[tokio::test]
async fn test_create_shipment_label() {
    let server = MockServer::start().await;
    let label = json!({"carrierCode": "usps", "serviceCode": "usps_priority_mail", "testLabel": true});

    Mock::given(method("POST"))
        .and(path("/shipments/createlabel"))
        .and(body_json(label.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"shipmentId": 72513480})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = client.create_shipment_label(label).await.unwrap();
    assert_eq!(body["shipmentId"], 72513480);
}

#[tokio::test]
async fn test_void_label_wraps_shipment_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/shipments/voidlabel"))
        .and(body_json(json!({"shipmentId": 72513480})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"approved": true, "message": "Label voided successfully"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = client.void_label(72513480).await.unwrap();
    assert_eq!(body["approved"], true);
}

// Fulfillments, tags, warehouses, carriers ..................................

#[tokio::test]
async fn test_list_fulfillments() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/fulfillments/"))
        .and(query_param("orderNumber", "TEST-1001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"fulfillments": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = QueryParams::new().param("orderNumber", "TEST-1001");
    client.list_fulfillments(Some(query)).await.unwrap();
}

#[tokio::test]
async fn test_list_tags() {
    let server = MockServer::start().await;
    let tags = json!([{"tagId": 7, "name": "Rush", "color": "#ff0000"}]);

    Mock::given(method("GET"))
        .and(path("/accounts/listtags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tags.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let body = client.list_tags().await.unwrap();
    assert_eq!(body, tags);
}

#[tokio::test]
async fn test_list_and_create_warehouses() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/warehouses/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"warehouseId": 17977}])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/warehouses/createwarehouse"))
        .and(body_json(json!({"warehouseName": "East Annex"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"warehouseId": 17978})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.list_warehouses(None).await.unwrap();
    let created = client
        .create_warehouse(json!({"warehouseName": "East Annex"}))
        .await
        .unwrap();
    assert_eq!(created["warehouseId"], 17978);
}

#[tokio::test]
async fn test_carrier_listings() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/carriers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"code": "usps"}])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/carriers/listpackages"))
        .and(query_param("carrierCode", "usps"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"code": "package"}])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/carriers/listservices"))
        .and(query_param("carrierCode", "usps"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"code": "usps_priority_mail"}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.list_carriers().await.unwrap();
    client.list_packages_by_carrier("usps").await.unwrap();
    client.list_services_by_carrier("usps").await.unwrap();
}

// Webhooks ..................................................................

#[tokio::test]
async fn test_webhook_lifecycle() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/webhooks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"webhooks": []})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/webhooks/subscribe"))
        .and(body_json(json!({
            "target_url": "https://example.com/hooks/neworder",
            "event": "ORDER_NOTIFY",
            "friendly_name": "New orders"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 123456})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/webhooks/123456"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.list_webhooks().await.unwrap();

    let subscription =
        WebhookSubscription::new("https://example.com/hooks/neworder", "ORDER_NOTIFY")
            .friendly_name("New orders");
    let created = client.subscribe_webhook(&subscription).await.unwrap();
    assert_eq!(created["id"], 123456);

    client.unsubscribe_webhook(123_456).await.unwrap();
}

#[tokio::test]
async fn test_subscribe_webhook_201_resolves_with_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webhooks/subscribe"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 999})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let subscription = WebhookSubscription::new("https://example.com/h", "SHIP_NOTIFY");
    let body = client.subscribe_webhook(&subscription).await.unwrap();
    assert_eq!(body, json!({"id": 999}));
}

// Error propagation and concurrency .........................................

#[tokio::test]
async fn test_write_rejection_carries_status_and_provider_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/orders/createorder"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"Message": "The request is invalid."})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.save_order(json!({"bad": true})).await.unwrap_err();

    match &error {
        HttpError::Response(e) => assert_eq!(e.code, 422),
        HttpError::Network(e) => panic!("expected response error, got network error: {e}"),
    }
    let message = error.to_string();
    assert!(message.contains("422"));
    assert!(message.contains("The request is invalid."));
}

#[tokio::test]
async fn test_read_rejection_under_uniform_status_policy() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders/404"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"Message": "Order not found."})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.get_order(404).await.unwrap_err();
    assert!(matches!(error, HttpError::Response(ref e) if e.code == 404));
}

#[tokio::test]
async fn test_transport_failure_rejects_operations() {
    let config = ShipStationConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .api_secret(ApiSecret::new("test-secret").unwrap())
        .api_host(HostUrl::new("http://127.0.0.1:1").unwrap())
        .build()
        .unwrap();
    let client = ShipStation::new(&config);

    assert!(matches!(
        client.get_order(1).await.unwrap_err(),
        HttpError::Network(_)
    ));
    assert!(matches!(
        client.list_tags().await.unwrap_err(),
        HttpError::Network(_)
    ));
    assert!(matches!(
        client.void_label(1).await.unwrap_err(),
        HttpError::Network(_)
    ));
    assert!(matches!(
        client.unsubscribe_webhook(1).await.unwrap_err(),
        HttpError::Network(_)
    ));
}

#[tokio::test]
async fn test_concurrent_calls_do_not_cross_contaminate() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"orderId": 1, "orderNumber": "A"})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/orders/2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"orderId": 2, "orderNumber": "B"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (first, second) = tokio::join!(client.get_order(1), client.get_order(2));

    let first = first.unwrap();
    let second = second.unwrap();
    assert_eq!(first["orderId"], 1);
    assert_eq!(first["orderNumber"], "A");
    assert_eq!(second["orderId"], 2);
    assert_eq!(second["orderNumber"], "B");
}
