use axum::http::StatusCode;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};

use crate::models::subscription::{SubscriptionEvent, SubscriptionStatusUpdate};
use crate::responses::JsonResponse;
use crate::state::AppState;

// Small helper: nested json lookup
fn jget<'a>(val: &'a serde_json::Value, path: &[&str]) -> Option<&'a serde_json::Value> {
    let mut cur = val;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

fn extract_str<'a>(val: &'a serde_json::Value, path: &[&str]) -> Option<&'a str> {
    jget(val, path)?.as_str()
}

/// Subscriber custom id, checked at both locations PayPal puts it:
/// the subscription's subscriber object first, then the resource itself.
fn extract_custom_id(payload: &serde_json::Value) -> Option<&str> {
    extract_str(payload, &["resource", "subscriber", "custom_id"])
        .filter(|s| !s.is_empty())
        .or_else(|| {
            extract_str(payload, &["resource", "custom_id"]).filter(|s| !s.is_empty())
        })
}

// POST /api/paypal/webhook
pub async fn webhook(State(app_state): State<AppState>, body: axum::body::Bytes) -> Response {
    // TODO: verify the transmission with PayPal's verify-webhook-signature
    // API before trusting the payload; until then any sender that knows the
    // URL is taken at its word.
    let payload: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(val) => val,
        Err(err) => {
            warn!(?err, body = %String::from_utf8_lossy(&body), "paypal webhook body is not valid json");
            return JsonResponse::bad_request("invalid payload").into_response();
        }
    };

    let event_type = match payload
        .get("event_type")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
    {
        Some(t) => t,
        None => {
            warn!(%payload, "paypal webhook missing event_type");
            return JsonResponse::bad_request("missing event_type").into_response();
        }
    };

    let user_id = match extract_custom_id(&payload) {
        Some(id) => id,
        None => {
            warn!(event_type, "paypal webhook carried no subscriber custom id");
            return JsonResponse::bad_request("missing custom id").into_response();
        }
    };

    let event = match SubscriptionEvent::parse(event_type) {
        Some(evt) => evt,
        None => {
            info!(event_type, user_id, "unhandled paypal event acknowledged");
            return StatusCode::NO_CONTENT.into_response();
        }
    };

    let paypal_id = extract_str(&payload, &["resource", "id"]).map(|s| s.to_string());
    let update = SubscriptionStatusUpdate::for_event(event, paypal_id);

    match app_state
        .subscriptions
        .upsert_status(&app_state.config.app_id, user_id, &update)
        .await
    {
        Ok(()) => {
            info!(
                event_type,
                user_id,
                tier = update.tier.as_str(),
                "recorded subscription status"
            );
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => {
            error!(?err, user_id, "failed to persist subscription status");
            JsonResponse::server_error("failed to record subscription status").into_response()
        }
    }
}
