use crate::types::Category;

/// How many cards the results panel shows.
pub const RESULT_COUNT: usize = 4;
const PLACEHOLDER_ADDRESS: &str = "123 Example Street";

/// One entry of the results panel. Until real search lands these are fixed
/// placeholders tagged with whatever categories the user picked.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceCard {
    pub title: String,
    pub address: String,
    pub categories: Vec<Category>,
}

pub fn placeholder_results(categories: &[Category]) -> Vec<PlaceCard> {
    (1..=RESULT_COUNT)
        .map(|n| PlaceCard {
            title: format!("Place {n}"),
            address: PLACEHOLDER_ADDRESS.to_string(),
            categories: categories.to_vec(),
        })
        .collect()
}

pub fn category_badge(count: usize) -> String {
    if count == 1 {
        "1 category".to_string()
    } else {
        format!("{count} categories")
    }
}

pub fn radius_badge(miles: f64) -> String {
    if miles == 1.0 {
        "1 mile radius".to_string()
    } else {
        format!("{} miles radius", format_miles(miles))
    }
}

/// Whole miles print without decimals, anything else with one.
fn format_miles(miles: f64) -> String {
    if miles.fract() == 0.0 {
        format!("{miles:.0}")
    } else {
        format!("{miles:.1}")
    }
}
