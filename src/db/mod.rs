pub mod mock_db;
pub mod postgres_subscription_repository;
pub mod subscription_repository;
