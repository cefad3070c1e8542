mod protected;
pub use protected::Protected;

mod home;
pub use home::Home;

mod product_detail;
pub use product_detail::ProductDetail;

mod profile;
pub use profile::Profile;

mod sell;
pub use sell::SellItem;

mod favorites;
pub use favorites::Favorites;

mod notifications;
pub use notifications::Notifications;

mod chat;
pub use chat::Chat;

mod auth;
pub use auth::Auth;

mod signup;
pub use signup::SignUp;

mod forgot_password;
pub use forgot_password::ForgotPassword;

mod admin;
pub use admin::AdminDashboard;

mod not_found;
pub use not_found::NotFound;
