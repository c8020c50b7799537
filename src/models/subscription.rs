use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Pro,
    Free,
}

impl SubscriptionTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionTier::Pro => "pro",
            SubscriptionTier::Free => "free",
        }
    }
}

/// Subscription lifecycle notifications this service acts on. Event types
/// outside this set are acknowledged without a write. Extend by adding
/// variants; existing rows of the mapping are contract and do not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionEvent {
    Created,
    Activated,
    Cancelled,
    Suspended,
}

impl SubscriptionEvent {
    /// Exact-match parse of the provider's event_type string.
    pub fn parse(event_type: &str) -> Option<Self> {
        match event_type {
            "BILLING.SUBSCRIPTION.CREATED" => Some(SubscriptionEvent::Created),
            "BILLING.SUBSCRIPTION.ACTIVATED" => Some(SubscriptionEvent::Activated),
            "BILLING.SUBSCRIPTION.CANCELLED" => Some(SubscriptionEvent::Cancelled),
            "BILLING.SUBSCRIPTION.SUSPENDED" => Some(SubscriptionEvent::Suspended),
            _ => None,
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            SubscriptionEvent::Created => "BILLING.SUBSCRIPTION.CREATED",
            SubscriptionEvent::Activated => "BILLING.SUBSCRIPTION.ACTIVATED",
            SubscriptionEvent::Cancelled => "BILLING.SUBSCRIPTION.CANCELLED",
            SubscriptionEvent::Suspended => "BILLING.SUBSCRIPTION.SUSPENDED",
        }
    }

    pub fn tier(&self) -> SubscriptionTier {
        match self {
            SubscriptionEvent::Created | SubscriptionEvent::Activated => SubscriptionTier::Pro,
            SubscriptionEvent::Cancelled | SubscriptionEvent::Suspended => SubscriptionTier::Free,
        }
    }

    /// Value written to the status column: live subscriptions record the
    /// literal "active", terminal ones the lower-cased event type.
    pub fn status_value(&self) -> String {
        match self {
            SubscriptionEvent::Created | SubscriptionEvent::Activated => "active".to_string(),
            SubscriptionEvent::Cancelled | SubscriptionEvent::Suspended => {
                self.event_type().to_ascii_lowercase()
            }
        }
    }
}

/// Fields merge-written into a user's status row. `updated_at` is assigned
/// by the database on every write and never carried here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionStatusUpdate {
    pub tier: SubscriptionTier,
    pub status: String,
    pub paypal_id: Option<String>,
}

impl SubscriptionStatusUpdate {
    pub fn for_event(event: SubscriptionEvent, paypal_id: Option<String>) -> Self {
        SubscriptionStatusUpdate {
            tier: event.tier(),
            status: event.status_value(),
            paypal_id,
        }
    }
}
