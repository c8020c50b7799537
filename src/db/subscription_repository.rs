use async_trait::async_trait;

use crate::models::subscription::SubscriptionStatusUpdate;

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Create or merge-update the status row keyed by `(app_id, user_id)`.
    /// Only the fields carried by `update` (plus `updated_at`) are touched.
    async fn upsert_status(
        &self,
        app_id: &str,
        user_id: &str,
        update: &SubscriptionStatusUpdate,
    ) -> Result<(), sqlx::Error>;
}
