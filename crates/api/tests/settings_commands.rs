//! Settings commands and persistence

mod support;

use std::collections::HashMap;

use serde_json::json;
use support::{test_app, user_export};
use usersync_core::SettingsSaveResult;
use usersync_domain::DispatchOutcome;
use usersync_lib::commands::{on_user_updated, onsite_script, save_settings};

fn inputs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[tokio::test]
async fn saving_valid_settings_enables_script_and_hooks() {
    let app = test_app(user_export(1, 0), json!({})).await;
    assert_eq!(onsite_script(&app.ctx).await.unwrap(), None);

    let result = save_settings(
        &app.ctx,
        &inputs(&[
            ("klaviyo_public_key", "AbC123"),
            ("klaviyo_private_key", "pk_0123456789abcdef"),
            ("inject_klaviyo_script", "on"),
            ("activate_user_sync", "on"),
        ]),
    )
    .await
    .unwrap();
    assert!(result.is_updated());

    let tag = onsite_script(&app.ctx).await.unwrap().unwrap();
    assert!(tag.contains("klaviyo.js?company_id=AbC123"));
    assert_ne!(on_user_updated(&app.ctx, 1).await, DispatchOutcome::Disabled);
}

#[tokio::test]
async fn invalid_settings_are_reported_and_still_saved() {
    let app = test_app(user_export(1, 0), json!({})).await;

    let result = save_settings(
        &app.ctx,
        &inputs(&[("klaviyo_public_key", ""), ("klaviyo_private_key", "short"), ("activate_user_sync", "on")]),
    )
    .await
    .unwrap();

    let SettingsSaveResult::Rejected { errors } = result else {
        panic!("expected rejection");
    };
    let messages: Vec<_> = errors.errors.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        messages,
        vec!["You need to enter your Klaviyo Public key", "Your Klaviyo Private Key should be longer"]
    );

    let settings = app.ctx.settings.load().await.unwrap();
    assert!(settings.activate_user_sync.is_on());
    assert_eq!(settings.klaviyo_private_key.as_deref(), Some("short"));
}
