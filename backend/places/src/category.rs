use std::{fmt, str::FromStr};

use thiserror::Error;

/// The fixed set of place categories, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Restaurant,
    Cafe,
    Park,
    DogWalking,
    Forest,
    Museum,
    Shopping,
    Viewpoint,
    Beach,
    Other,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Restaurant,
        Category::Cafe,
        Category::Park,
        Category::DogWalking,
        Category::Forest,
        Category::Museum,
        Category::Shopping,
        Category::Viewpoint,
        Category::Beach,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Restaurant => "Restaurant",
            Category::Cafe => "Cafe",
            Category::Park => "Park",
            Category::DogWalking => "Dog Walking",
            Category::Forest => "Forest",
            Category::Museum => "Museum",
            Category::Shopping => "Shopping",
            Category::Viewpoint => "Viewpoint",
            Category::Beach => "Beach",
            Category::Other => "Other",
        }
    }

    pub fn names() -> Vec<String> {
        Self::ALL.iter().map(|c| c.as_str().to_string()).collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_parse_back() {
        for name in Category::names() {
            assert_eq!(name.parse::<Category>().unwrap().as_str(), name);
        }
    }

    #[test]
    fn test_exact_match_only() {
        assert_eq!(
            "museum".parse::<Category>(),
            Err(UnknownCategory("museum".into()))
        );
        assert!("Dog Walking".parse::<Category>().is_ok());
        assert!("DogWalking".parse::<Category>().is_err());
    }
}
