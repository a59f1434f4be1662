/// Activity categories a user can narrow the exploration to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Food,
    Outdoors,
    Entertainment,
    Sports,
    Culture,
    Nightlife,
    Shopping,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Outdoors,
        Category::Entertainment,
        Category::Sports,
        Category::Culture,
        Category::Nightlife,
        Category::Shopping,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Outdoors => "outdoors",
            Category::Entertainment => "entertainment",
            Category::Sports => "sports",
            Category::Culture => "culture",
            Category::Nightlife => "nightlife",
            Category::Shopping => "shopping",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food & Drink",
            Category::Outdoors => "Outdoors",
            Category::Entertainment => "Entertainment",
            Category::Sports => "Sports",
            Category::Culture => "Arts & Culture",
            Category::Nightlife => "Nightlife",
            Category::Shopping => "Shopping",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Food => "🍴",
            Category::Outdoors => "🌲",
            Category::Entertainment => "🎭",
            Category::Sports => "⚽",
            Category::Culture => "🏛",
            Category::Nightlife => "🌙",
            Category::Shopping => "🛍",
        }
    }

    pub fn from_id(id: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|category| category.id() == id)
    }
}
