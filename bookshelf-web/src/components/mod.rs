pub mod input;
pub mod loading;
pub mod login_form;
pub mod notification;

// Re-export components for convenience
pub use input::Input;
pub use login_form::LoginForm;
pub use notification::Notification;
