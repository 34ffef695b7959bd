pub mod flight;
pub mod view;

pub use flight::{CameraFlight, FLIGHT_DURATION};
pub use view::{Camera3D, Projection, Ray};
