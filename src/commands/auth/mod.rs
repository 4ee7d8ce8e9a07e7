pub mod login;
pub mod logout;
pub mod register;
pub mod status;

pub use login::login_command;
pub use logout::logout_command;
pub use register::register_command;
pub use status::status_command;
