pub mod banners;
pub mod cuisines;
pub mod favorites;
pub mod restaurants;
pub mod reviews;
pub mod users;

pub use banners::Entity as Banners;
pub use cuisines::Entity as Cuisines;
pub use favorites::Entity as Favorites;
pub use restaurants::Entity as Restaurants;
pub use reviews::Entity as Reviews;
pub use users::Entity as Users;
