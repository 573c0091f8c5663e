pub mod chat_panel;
pub mod create_trip_form;

pub use chat_panel::ChatPanel;
pub use create_trip_form::CreateTripForm;
