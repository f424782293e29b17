use serde::{Deserialize, Serialize};

use super::card::DisplayCard;

/// Position of a page within the filtered card set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginator {
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

impl Paginator {
    pub fn new(total_items: usize, page_size: usize, current_page: usize) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_items.div_ceil(page_size)
        };
        Self {
            total_items,
            total_pages,
            current_page,
        }
    }
}

/// One window of cards. `paginator` is `None` when no filter is active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPage {
    pub cards: Vec<DisplayCard>,
    pub paginator: Option<Paginator>,
}

impl CardPage {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
