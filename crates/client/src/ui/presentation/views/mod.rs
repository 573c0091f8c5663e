pub mod home;
pub mod trip_detail;

pub use home::HomeView;
pub use trip_detail::TripDetailView;
