mod home_page;
mod login_page;
mod register_page;

pub use home_page::home_page;
pub use login_page::{LoginPageProps, LoginPageResponse, login_page, login_screen};
pub use register_page::register_page;
