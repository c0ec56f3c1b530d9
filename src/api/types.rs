use serde::{Deserialize, Serialize};

/// Well-known location of the local avatar placeholder.
pub const PLACEHOLDER_IMAGE_PATH: &str = "assets/avatar-placeholder.png";

/// The only status value rendered with the "alive" badge style.
pub const ALIVE_STATUS: &str = "ALIVE";

/// A character record as returned by the characters endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub gender: String,
    pub status: String,
    pub species: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl Character {
    /// Binary classification: exact, case-sensitive match on `"ALIVE"`.
    pub fn is_alive(&self) -> bool {
        self.status == ALIVE_STATUS
    }

    /// The remote avatar URI, if there is one worth loading.
    /// Empty strings count as missing.
    pub fn image_uri(&self) -> Option<&str> {
        self.image.as_deref().filter(|uri| !uri.trim().is_empty())
    }
}

/// Top-level response object. Only `items` is read; pagination metadata
/// (`total`, `page`, `size`, `pages`) is ignored.
///
/// `items` has no default: an envelope without it fails to deserialize and is
/// reported as a fetch failure.
#[derive(Deserialize, Debug)]
pub struct CharacterEnvelope {
    pub items: Vec<Character>,
}

/// Query parameters sent with the characters request.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CharacterQuery {
    pub order_by: &'static str,
    pub order_by_direction: &'static str,
    pub page: u32,
    pub size: u32,
}

impl CharacterQuery {
    /// Page 1, 50 items, ascending by id. These are fixed.
    pub fn first_page() -> Self {
        Self {
            order_by: "id",
            order_by_direction: "asc",
            page: 1,
            size: 50,
        }
    }
}

/// Where a card's avatar comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Avatar<'a> {
    Remote(&'a str),
    Placeholder(&'a str),
}

impl<'a> Avatar<'a> {
    pub fn source(&self) -> &'a str {
        match self {
            Avatar::Remote(uri) => uri,
            Avatar::Placeholder(path) => path,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Avatar::Placeholder(_))
    }
}
