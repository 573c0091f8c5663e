pub mod form_field;
pub mod toast;

pub use form_field::FormField;
pub use toast::ToastHost;
