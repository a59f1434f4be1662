mod location;
pub use location::{Location, DEFAULT_LOCATION};

mod map_bounds;
pub use map_bounds::MapBounds;

mod category;
pub use category::Category;

mod place;
pub use place::Place;
