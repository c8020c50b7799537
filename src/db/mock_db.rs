use async_trait::async_trait;
use std::sync::Mutex;

use crate::db::subscription_repository::SubscriptionRepository;
use crate::models::subscription::SubscriptionStatusUpdate;

#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedUpsert {
    pub app_id: String,
    pub user_id: String,
    pub update: SubscriptionStatusUpdate,
}

#[allow(dead_code)]
#[derive(Default)]
pub struct MockDb {
    pub should_fail: bool,
    pub upserts: Mutex<Vec<RecordedUpsert>>,
}

#[async_trait]
impl SubscriptionRepository for MockDb {
    async fn upsert_status(
        &self,
        app_id: &str,
        user_id: &str,
        update: &SubscriptionStatusUpdate,
    ) -> Result<(), sqlx::Error> {
        if self.should_fail {
            return Err(sqlx::Error::Protocol("Mock DB failure".into()));
        }

        self.upserts.lock().unwrap().push(RecordedUpsert {
            app_id: app_id.to_string(),
            user_id: user_id.to_string(),
            update: update.clone(),
        });
        Ok(())
    }
}
