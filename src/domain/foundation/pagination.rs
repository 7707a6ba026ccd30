//! Page value object for list queries.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Fixed number of items per page.
pub const PAGE_SIZE: usize = 20;

/// A 1-indexed page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Page(u32);

impl Page {
    /// Creates a page.
    ///
    /// # Errors
    ///
    /// - `TooSmall` if `number` is zero
    pub fn new(number: u32) -> Result<Self, ValidationError> {
        if number == 0 {
            return Err(ValidationError::too_small("page", 1, 0));
        }
        Ok(Self(number))
    }

    /// The first page.
    pub fn first() -> Self {
        Self(1)
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    /// Number of items preceding this page.
    pub fn offset(&self) -> usize {
        (self.0 as usize - 1) * PAGE_SIZE
    }

    pub fn limit(&self) -> usize {
        PAGE_SIZE
    }

    /// Returns this page's window of `items`, preserving their order.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = (start + PAGE_SIZE).min(items.len());
        &items[start..end]
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::first()
    }
}

impl TryFrom<u32> for Page {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Page> for u32 {
    fn from(page: Page) -> Self {
        page.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_page_zero() {
        assert!(matches!(
            Page::new(0),
            Err(ValidationError::TooSmall { .. })
        ));
    }

    #[test]
    fn second_page_of_22_items_holds_last_two_in_order() {
        let items: Vec<u32> = (1..=22).collect();
        let page = Page::new(2).unwrap();
        assert_eq!(page.slice(&items), &[21, 22]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<u32> = (1..=5).collect();
        assert!(Page::new(3).unwrap().slice(&items).is_empty());
    }

    #[test]
    fn offset_and_limit_follow_page_size() {
        let page = Page::new(3).unwrap();
        assert_eq!(page.offset(), 40);
        assert_eq!(page.limit(), PAGE_SIZE);
    }

    #[test]
    fn deserialization_rejects_zero() {
        assert!(serde_json::from_str::<Page>("0").is_err());
        assert_eq!(serde_json::from_str::<Page>("4").unwrap().number(), 4);
    }
}
