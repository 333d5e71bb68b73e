//! End-to-end tests for AttributionIntegration against a RecordingSink.

use attribution_mapping::vocab::*;
use attribution_mapping::{AttributionIntegration, EmailHashType, IntegrationConfig, RecordingSink};
use attribution_types::{CanonicalEvent, IdentifyEvent, Properties, ScreenEvent, TrackEvent};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn props(value: Value) -> Properties {
    value.as_object().cloned().unwrap()
}

fn destination_config(use_rich_event_name: bool) -> Properties {
    props(json!({"useRichEventName": use_rich_event_name, "apiKey": "test_api_key"}))
}

fn integration() -> AttributionIntegration<RecordingSink> {
    AttributionIntegration::new(RecordingSink::new())
}

fn track(name: &str, properties: Value) -> TrackEvent {
    TrackEvent::new(name).with_properties(props(properties))
}

// ── Lifecycle ────────────────────────────────────────────────────

#[test]
fn key_is_appsflyer() {
    assert_eq!(integration().key(), "AppsFlyer");
}

#[test]
fn new_integration_is_not_attached() {
    let integration = integration();
    assert!(!integration.is_attached());
    assert_eq!(integration.sink().attach_count(), 0);
}

#[test]
fn create_attaches_sink_once() {
    let mut integration = integration();
    integration.create(&destination_config(false));
    integration.create(&destination_config(true));
    assert!(integration.is_attached());
    assert_eq!(integration.sink().attach_count(), 1);
}

#[test]
fn update_does_not_reattach() {
    let mut integration = integration();
    integration.create(&destination_config(false));
    integration.update(&destination_config(true));
    assert_eq!(integration.sink().attach_count(), 1);
    assert!(integration.config().use_rich_screen_naming);
}

#[test]
fn update_replaces_config_wholesale() {
    let mut integration = integration();
    integration.create(&destination_config(true));
    integration.update(&props(json!({"apiKey": "k"})));
    assert_eq!(integration.config(), IntegrationConfig::default());
}

#[test]
fn create_accepts_parsed_config() {
    let mut integration = integration();
    integration.create(IntegrationConfig::from_json(r#"{"useRichEventName":true}"#).unwrap());
    assert!(integration.config().use_rich_screen_naming);
}

#[test]
fn events_before_create_use_default_config() {
    let mut integration = integration();
    integration.screen(&ScreenEvent::new("Home"));
    assert_eq!(integration.sink().logged_events()[0].0, SCREEN_EVENT);
}

#[test]
fn screen_name_follows_config_changes() {
    let mut integration = integration();
    integration.create(&destination_config(false));
    integration.screen(&ScreenEvent::new("Home"));

    integration.update(&destination_config(true));
    integration.screen(&ScreenEvent::new("Settings"));

    let names: Vec<&str> = integration
        .sink()
        .logged_events()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, vec!["screen", "Viewed Settings Screen"]);
}

// ── Identify ─────────────────────────────────────────────────────

#[test]
fn identify_sets_user_id_and_email() {
    let mut integration = integration();
    integration.identify(
        &IdentifyEvent::new("test_user_123").with_traits(props(json!({"email": "test@example.com"}))),
    );
    let sink = integration.sink();
    assert_eq!(sink.user_ids(), vec!["test_user_123"]);
    let emails = sink.email_calls();
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0].0, ["test@example.com".to_string()]);
    assert_eq!(emails[0].1, EmailHashType::Sha256);
}

#[test]
fn identify_with_empty_user_id_only_sets_email() {
    let mut integration = integration();
    integration.identify(&IdentifyEvent::new("").with_traits(props(json!({"email": "a@b.com"}))));
    assert!(integration.sink().user_ids().is_empty());
    assert_eq!(integration.sink().email_calls().len(), 1);
}

#[test]
fn identify_never_logs_events() {
    let mut integration = integration();
    integration.identify(&IdentifyEvent::new("u"));
    assert!(integration.sink().logged_events().is_empty());
}

// ── Track ────────────────────────────────────────────────────────

#[test]
fn track_empty_name_makes_no_sink_call() {
    let mut integration = integration();
    integration.track(&track("", json!({"a": 1})));
    integration.track(&track("  ", json!({})));
    assert!(integration.sink().calls().is_empty());
}

#[test]
fn track_order_completed() {
    let mut integration = integration();
    integration.track(&track(
        "Order Completed",
        json!({
            "order_id": "order_123",
            "total": 259.97,
            "revenue": 259.97,
            "currency": "USD",
            "products": [
                {"product_id": "prod1", "category": "electronics", "quantity": 1, "price": 199.99},
                {"product_id": "prod2", "category": "accessories", "quantity": 2, "price": 29.99},
            ],
        }),
    ));

    let events = integration.sink().logged_events();
    assert_eq!(events.len(), 1);
    let (name, params) = events[0];
    assert_eq!(name, EVENT_PURCHASE);
    assert_eq!(params[PARAM_PRICE], 259.97);
    assert_eq!(params[PARAM_CURRENCY], "USD");
    assert_eq!(params[PARAM_RECEIPT_ID], "order_123");
    assert_eq!(params[PARAM_ORDER_ID], "order_123");
    assert_eq!(params[PARAM_REVENUE], 259.97);
    assert_eq!(params[PARAM_CONTENT_ID], json!(["prod1", "prod2"]));
    assert_eq!(params[PARAM_CONTENT_TYPE], json!(["electronics", "accessories"]));
}

#[test]
fn track_reserved_keywords_event() {
    let mut integration = integration();
    integration.track(&track(
        "Reserved Keywords Event",
        json!({
            "query": "search_term",
            "price": 99.99,
            "product_id": "prod123",
            "category": "electronics",
            "currency": "USD",
            "products": [],
            "quantity": 1,
            "total": 99.99,
            "revenue": 99.99,
            "order_id": "order123",
            "share_message": "Check this out!",
            "creative": "banner",
            "rating": 5,
            "custom_prop": "should_be_included",
        }),
    ));
    let events = integration.sink().logged_events();
    assert_eq!(events[0].0, "reserved_keywords_event");
    assert_eq!(events[0].1, &props(json!({"custom_prop": "should_be_included"})));
}

// ── Screen ───────────────────────────────────────────────────────

#[test]
fn screen_properties_are_included() {
    let mut integration = integration();
    integration.create(&destination_config(true));
    integration.screen(
        &ScreenEvent::new("Home").with_properties(props(json!({"section": "main", "user_type": "premium"}))),
    );
    let events = integration.sink().logged_events();
    assert_eq!(events[0].0, "Viewed Home Screen");
    assert_eq!(events[0].1["section"], "main");
    assert_eq!(events[0].1["user_type"], "premium");
}

// ── Journeys ─────────────────────────────────────────────────────

#[test]
fn complete_user_journey() {
    let mut integration = integration();
    integration.create(&destination_config(true));

    let journey: Vec<CanonicalEvent> = vec![
        IdentifyEvent::new("journey_user")
            .with_traits(props(json!({"email": "journey@example.com"})))
            .into(),
        ScreenEvent::new("Home").into(),
        track("Products Searched", json!({"query": "running shoes"})).into(),
        track(
            "Product Viewed",
            json!({"product_id": "123", "category": "shoes", "price": 99.99}),
        )
        .into(),
        track(
            "Product Added",
            json!({"product_id": "123", "category": "shoes", "quantity": 1}),
        )
        .into(),
        track(
            "Order Completed",
            json!({"order_id": "o1", "total": 99.99, "currency": "USD"}),
        )
        .into(),
    ];
    for event in &journey {
        integration.process(event);
    }

    let sink = integration.into_sink();
    assert_eq!(sink.user_ids().len(), 1);
    assert_eq!(sink.email_calls().len(), 1);
    let names: Vec<&str> = sink.logged_events().into_iter().map(|(n, _)| n).collect();
    assert_eq!(
        names,
        vec![
            "Viewed Home Screen",
            EVENT_SEARCH,
            EVENT_CONTENT_VIEW,
            EVENT_ADD_TO_CART,
            EVENT_PURCHASE,
        ]
    );
}

#[test]
fn process_decoded_upstream_json() {
    let mut integration = integration();
    let event =
        CanonicalEvent::from_json(r#"{"type":"track","event":"Cart Shared","properties":{"share_message":"look"}}"#)
            .unwrap();
    integration.process(&event);
    let events = integration.sink().logged_events();
    assert_eq!(events[0].0, EVENT_SHARE);
    assert_eq!(events[0].1[PARAM_DESCRIPTION], "look");
}

#[test]
fn clear_keeps_attach_count() {
    let mut integration = integration();
    integration.create(&destination_config(false));
    integration.track(&track("Anything", json!({})));
    integration.sink_mut().clear();
    assert!(integration.sink().calls().is_empty());
    assert_eq!(integration.sink().attach_count(), 1);
}
