mod results;
mod search;
pub use results::WidgetResults;
pub use search::{SearchEvent, WidgetSearch};
