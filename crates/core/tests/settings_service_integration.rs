//! Settings service persistence and script tag rendering

mod support;

use std::collections::HashMap;
use std::sync::Arc;

use support::repositories::MemorySettingsStore;
use usersync_core::{SettingsSaveResult, SettingsService};

fn inputs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[tokio::test]
async fn valid_save_persists_and_notifies() {
    let store = MemorySettingsStore::default();
    let service = SettingsService::new(Arc::new(store.clone()));

    let result = service
        .save(&inputs(&[
            ("klaviyo_public_key", "AbC123"),
            ("klaviyo_private_key", "pk_0123456789abcdef"),
            ("activate_user_sync", "on"),
            ("inject_klaviyo_script", "off"),
            ("unexpected", "dropped"),
        ]))
        .await
        .unwrap();

    assert_eq!(result, SettingsSaveResult::Updated { notice: "Settings updated!".to_string() });
    let stored = store.snapshot();
    assert_eq!(stored.len(), 4);
    assert!(!stored.contains_key("unexpected"));
    assert!(service.is_sync_active().await.unwrap());
    assert_eq!(
        service.credentials().await.unwrap().private_key(),
        Some("pk_0123456789abcdef")
    );
}

#[tokio::test]
async fn invalid_save_still_persists_input() {
    let store = MemorySettingsStore::default();
    let service = SettingsService::new(Arc::new(store.clone()));

    let result = service.save(&inputs(&[("klaviyo_public_key", "abc")])).await.unwrap();

    match result {
        SettingsSaveResult::Rejected { errors } => {
            assert_eq!(errors.error_count(), 1);
            assert_eq!(
                errors.errors[0].message,
                "Your Klaviyo Public Key should be 6 characters long"
            );
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(store.snapshot().get("klaviyo_public_key").map(String::as_str), Some("abc"));
}

#[tokio::test]
async fn toggles_default_off() {
    let service = SettingsService::new(Arc::new(MemorySettingsStore::default()));

    assert!(!service.is_sync_active().await.unwrap());
    assert_eq!(service.onsite_script_tag().await.unwrap(), None);
    assert_eq!(service.credentials().await.unwrap().private_key(), None);
}

#[tokio::test]
async fn script_tag_requires_toggle_and_key() {
    let on_with_key = SettingsService::new(Arc::new(MemorySettingsStore::with(&[
        ("inject_klaviyo_script", "on"),
        ("klaviyo_public_key", "AbC123"),
    ])));
    assert_eq!(
        on_with_key.onsite_script_tag().await.unwrap().as_deref(),
        Some(
            r#"<script async type="text/javascript" src="https://static.klaviyo.com/onsite/js/klaviyo.js?company_id=AbC123"></script>"#
        )
    );

    let on_without_key = SettingsService::new(Arc::new(MemorySettingsStore::with(&[(
        "inject_klaviyo_script",
        "on",
    )])));
    assert_eq!(on_without_key.onsite_script_tag().await.unwrap(), None);

    let off_with_key = SettingsService::new(Arc::new(MemorySettingsStore::with(&[
        ("inject_klaviyo_script", "off"),
        ("klaviyo_public_key", "AbC123"),
    ])));
    assert_eq!(off_with_key.onsite_script_tag().await.unwrap(), None);
}
