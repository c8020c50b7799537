use crate::config::Config;
use crate::db::subscription_repository::SubscriptionRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub subscriptions: Arc<dyn SubscriptionRepository>,
    pub config: Arc<Config>,
}
