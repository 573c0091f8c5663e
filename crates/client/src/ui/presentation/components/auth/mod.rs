pub mod admin_login_form;
pub mod auth_gate;
pub mod phone_sign_in;
pub mod sign_up_form;

pub use admin_login_form::AdminLoginForm;
pub use auth_gate::AuthGate;
pub use phone_sign_in::PhoneSignIn;
pub use sign_up_form::SignUpForm;
