//! Integration tests for resource builders over HTTP.
//!
//! Each test wires a [`Builder`] to a [`WebserviceClient`] pointed at a mock
//! server, so the full path from query to model is exercised.

use prestashop_api::resources::models::{Customer, Entity, Product, Translatable};
use prestashop_api::resources::{Builder, Limit, ListQuery, ResourceError};
use prestashop_api::{HttpError, ShopUrl, WebserviceClient, WebserviceConfig, WebserviceKey};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer) -> WebserviceClient {
    client_for(server.uri())
}

fn client_for(uri: String) -> WebserviceClient {
    let config = WebserviceConfig::builder()
        .shop_url(ShopUrl::new(uri).unwrap())
        .api_key(WebserviceKey::new("TESTKEY").unwrap())
        .build()
        .unwrap();
    WebserviceClient::new(&config).unwrap()
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_list_sends_encoded_filters_and_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("output_format", "JSON"))
        .and(query_param("filter[name]", "$like:Mug $(blue$)"))
        .and(query_param("filter[price]", "$gte:10"))
        .and(query_param("limit", "20,10"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"products": [{"id": 3}, {"name": "no id"}, {"id": 8}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let products = Builder::<Product, _>::new(&client);
    let listed = products
        .get(
            &ListQuery::new()
                .filter("name", ("like", "Mug (blue)"))
                .filter("price", (">=", "10"))
                .limit(Limit::Range {
                    offset: 20,
                    count: 10,
                }),
        )
        .await
        .unwrap();

    let ids: Vec<_> = listed.iter().map(|p| p.id).collect();
    assert_eq!(ids, [Some(3), Some(8)]);
    assert!(listed.iter().all(|p| p.name.is_none()));
}

#[tokio::test]
async fn test_list_keeps_literal_percent_in_filter_values() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("filter[reference]", "$eq:A%20B"))
        .and(query_param("filter[name]", "$like:%mug%"))
        .and(query_param("filter[price]", "$lt:1+1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"products": [{"id": 4}]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let products = Builder::<Product, _>::new(&client);
    let listed = products
        .get(
            &ListQuery::new()
                .filter("reference", "A%20B")
                .filter("name", ("like", "%mug%"))
                .filter("price", ("<", "1+1")),
        )
        .await
        .unwrap();

    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_list_with_truncated_body_fails() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0_u8; 4096];
        let _ = socket.read(&mut request).await;
        socket
            .write_all(
                b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 500\r\n\r\n{\"products\":[{\"id\":1}",
            )
            .await
            .unwrap();
        let _ = socket.shutdown().await;
    });

    let client = client_for(format!("http://{addr}"));
    let result = Builder::<Entity, _>::with_names(&client, "products", "product")
        .get(&ListQuery::new())
        .await;

    assert!(matches!(
        result,
        Err(ResourceError::Http(HttpError::Network(_)))
    ));
}

#[tokio::test]
async fn test_list_with_date_filter_sets_date_flag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .and(query_param("date", "1"))
        .and(query_param("filter[date_add]", "$gt:2024-01-01 00:00:00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let customers = Builder::<Customer, _>::new(&client);
    let listed = customers
        .get(&ListQuery::new().filter("date_add", (">", "2024-01-01 00:00:00")))
        .await
        .unwrap();

    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_list_with_details_fetches_each_resource() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"customers": [{"id": 2}, {"id": 5}]})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/customers/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"customer": {"id": 2, "email": "two@example.com", "active": "1"}}),
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/customers/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"customer": {"id": 5, "email": "five@example.com", "active": "0"}}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let customers = Builder::<Customer, _>::new(&client);
    let listed = customers
        .get(&ListQuery::new().details(true))
        .await
        .unwrap();

    let emails: Vec<_> = listed.iter().map(|c| c.email.as_deref()).collect();
    assert_eq!(emails, [Some("two@example.com"), Some("five@example.com")]);
    assert_eq!(listed[1].active, Some(false));
}

#[tokio::test]
async fn test_list_with_url_override() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("display", "[id]"))
        .and(query_param("output_format", "JSON"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"products": [{"id": 1}]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let products = Builder::<Product, _>::new(&client);
    let listed = products
        .get(&ListQuery::new().url(format!("{}/api/products?display=[id]", server.uri())))
        .await
        .unwrap();

    assert_eq!(listed.len(), 1);
}

// ============================================================================
// Single resources
// ============================================================================

#[tokio::test]
async fn test_find_returns_hydrated_model() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products/1"))
        .and(query_param("output_format", "JSON"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "product": {
                "id": 1,
                "price": "23.900000",
                "active": "1",
                "name": [{"id": "1", "value": "Hummingbird printed t-shirt"}]
            }
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let product = Builder::<Product, _>::new(&client).find(1).await.unwrap();

    assert_eq!(product.id, Some(1));
    assert_eq!(product.price.as_deref(), Some("23.900000"));
    assert_eq!(
        product.name.as_ref().and_then(Translatable::first),
        Some("Hummingbird printed t-shirt")
    );
}

#[tokio::test]
async fn test_find_missing_resource_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(
            json!({"errors": [{"code": 87, "message": "Invalid ID"}]}),
        ))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = Builder::<Product, _>::new(&client).find(404).await;

    assert!(matches!(
        result,
        Err(ResourceError::NotFound { resource, id }) if resource == "products" && id == "404"
    ));
}

#[tokio::test]
async fn test_entity_builder_for_untyped_resource() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/carriers/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"carrier": {"id": 2, "name": "My carrier", "active": "1"}}),
        ))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let carriers = Builder::<Entity, _>::with_names(&client, "carriers", "carrier");
    let carrier = carriers.find(2).await.unwrap();

    assert_eq!(carrier.id(), Some(2));
    assert_eq!(carrier.get("name"), Some(&json!("My carrier")));
}

// ============================================================================
// Writes
// ============================================================================

#[tokio::test]
async fn test_create_posts_xml_and_maps_answer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/products"))
        .and(body_string_contains("<prestashop><product>"))
        .and(body_string_contains("<price>9.99</price>"))
        .and(body_string_contains("<active>1</active>"))
        .and(body_string_contains(r#"<name><language id="1">Mug</language></name>"#))
        .respond_with(ResponseTemplate::new(201).set_body_string(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<prestashop xmlns:xlink="http://www.w3.org/1999/xlink">
<product>
    <id><![CDATA[42]]></id>
    <price><![CDATA[9.990000]]></price>
    <active><![CDATA[1]]></active>
    <name><language id="1" xlink:href="http://localhost/api/languages/1"><![CDATA[Mug]]></language></name>
    <date_add><![CDATA[2024-07-01 12:00:00]]></date_add>
</product>
</prestashop>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let products = Builder::<Product, _>::new(&client);
    let created = products
        .create(&Product {
            price: Some("9.99".to_string()),
            active: Some(true),
            name: Some(Translatable::single(1, "Mug")),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(created.id, Some(42));
    assert_eq!(created.price.as_deref(), Some("9.990000"));
    assert_eq!(created.name, Some(Translatable::single(1, "Mug")));
    assert!(created.date_add.is_some());
}

#[tokio::test]
async fn test_update_and_delete_customer() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/customers/7"))
        .and(body_string_contains("<id>7</id>"))
        .and(body_string_contains("<lastname>Smith</lastname>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<prestashop><customer><id>7</id><lastname>Smith</lastname></customer></prestashop>",
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/customers/7"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let customers = Builder::<Customer, _>::new(&client);
    let updated = customers
        .update(
            7,
            &Customer {
                id: Some(7),
                lastname: Some("Smith".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.lastname.as_deref(), Some("Smith"));

    customers.delete(7).await.unwrap();
}

#[tokio::test]
async fn test_delete_missing_resource_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/customers/8"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let result = Builder::<Customer, _>::new(&client).delete(8).await;

    assert!(matches!(result, Err(ResourceError::NotFound { .. })));
}

#[tokio::test]
async fn test_blank_schema() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .and(query_param("schema", "blank"))
        .and(query_param("output_format", "JSON"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customer": {"id": "", "id_default_group": "", "email": "", "active": "", "date_add": ""}
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let blank = Builder::<Customer, _>::new(&client).blank().await.unwrap();

    assert_eq!(blank.id, None);
    assert_eq!(blank.email.as_deref(), Some(""));
    assert_eq!(blank.active, None);
}
