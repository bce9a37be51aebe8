pub mod auth;
pub mod banners;
pub mod chat;
pub mod cuisines;
pub mod favorites;
pub mod restaurants;
pub mod reviews;
