pub mod notification_service;
pub mod payment_service;
