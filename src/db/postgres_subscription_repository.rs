use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::subscription_repository::SubscriptionRepository;
use crate::models::subscription::SubscriptionStatusUpdate;

pub struct PostgresSubscriptionRepository {
    pub pool: PgPool,
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn upsert_status(
        &self,
        app_id: &str,
        user_id: &str,
        update: &SubscriptionStatusUpdate,
    ) -> Result<(), sqlx::Error> {
        // Single-row upsert; columns not listed in the SET clause survive
        // the write, and updated_at is always server time.
        sqlx::query(
            "INSERT INTO subscription_statuses (app_id, user_id, tier, status, paypal_id, updated_at)
             VALUES ($1, $2, $3, $4, $5, NOW())
             ON CONFLICT (app_id, user_id) DO UPDATE
             SET tier = EXCLUDED.tier,
                 status = EXCLUDED.status,
                 paypal_id = EXCLUDED.paypal_id,
                 updated_at = NOW()",
        )
        .bind(app_id)
        .bind(user_id)
        .bind(update.tier.as_str())
        .bind(&update.status)
        .bind(update.paypal_id.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
