use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub id: String,
    pub title: String,
    pub image: String,
    pub link: String,
    pub active: bool,
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewBanner {
    pub title: String,
    pub image: String,
    pub link: String,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
}

impl MoveDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveDirection::Up => "up",
            MoveDirection::Down => "down",
        }
    }
}

impl TryFrom<&str> for MoveDirection {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "up" => Ok(MoveDirection::Up),
            "down" => Ok(MoveDirection::Down),
            _ => Err(()),
        }
    }
}

pub fn new_banner_id() -> String {
    format!("BNR-{}", uuid::Uuid::new_v4().simple())
}

/// Sort by display order and renumber to `1..=n`.
pub fn normalize_order(banners: &mut [Banner]) {
    banners.sort_by_key(|banner| banner.order);
    renumber(banners);
}

fn renumber(banners: &mut [Banner]) {
    for (idx, banner) in banners.iter_mut().enumerate() {
        banner.order = idx as u32 + 1;
    }
}

/// Swap the banner with its neighbour in `direction`.
///
/// Returns `false` when `id` is unknown. Moving past either end leaves the list as is.
pub fn apply_move(banners: &mut [Banner], id: &str, direction: MoveDirection) -> bool {
    normalize_order(banners);
    let Some(idx) = banners.iter().position(|banner| banner.id == id) else {
        return false;
    };

    let neighbour = match direction {
        MoveDirection::Up => idx.checked_sub(1),
        MoveDirection::Down => Some(idx + 1).filter(|next| *next < banners.len()),
    };
    if let Some(other) = neighbour {
        banners.swap(idx, other);
        renumber(banners);
    }
    true
}
