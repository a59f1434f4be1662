mod marker;
mod radius;
pub use marker::CenterMarker;
pub use radius::RadiusCircles;
