//! Page slicing for the activity feed and the document table.

use crate::constants::DEFAULT_ITEMS_PER_PAGE;

/// One step of relative page navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep {
    Previous,
    Stay,
    Next,
}

impl PageStep {
    fn delta(self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Stay => 0,
            Self::Next => 1,
        }
    }
}

/// An ordered list split into pages. Pages are numbered from 1 and
/// `1 <= current_page <= page_count` holds after every call.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginator<T> {
    items: Vec<T>,
    current_page: usize,
    items_per_page: usize,
    page_count: usize,
}

impl<T> Default for Paginator<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> Paginator<T> {
    pub fn new(items: Vec<T>) -> Self {
        let mut paginator = Self { items, current_page: 1, items_per_page: DEFAULT_ITEMS_PER_PAGE, page_count: 1 };
        paginator.set_pagination(1, DEFAULT_ITEMS_PER_PAGE);
        paginator
    }

    /// Sets page and page size, then recomputes the page count.
    pub fn set_pagination(&mut self, page: usize, items_per_page: usize) {
        self.items_per_page = items_per_page.max(1);
        self.current_page = page;
        self.recompute();
    }

    /// Swaps in a new underlying list. A current page past the new end is
    /// pulled back to the last page.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.page_count = self.items.len().div_ceil(self.items_per_page).max(1);
        self.current_page = self.current_page.clamp(1, self.page_count);
    }

    pub fn visible_slice(&self) -> &[T] {
        let start = (self.current_page - 1) * self.items_per_page;
        let end = self.current_page * self.items_per_page;
        let len = self.items.len();
        &self.items[start.min(len)..end.min(len)]
    }

    /// Moves one page back or forward. Steps past either end are ignored.
    pub fn advance(&mut self, step: PageStep) -> bool {
        let target = self.current_page as isize + step.delta();
        if step == PageStep::Stay || target < 1 || target as usize > self.page_count {
            return false;
        }
        self.current_page = target as usize;
        true
    }

    pub fn jump_to(&mut self, page: usize) -> bool {
        if page < 1 || page > self.page_count {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.page_count
    }

    /// 1-based index of the first visible item, 0 when the list is empty.
    pub fn first_visible_index(&self) -> usize {
        if self.items.is_empty() { 0 } else { (self.current_page - 1) * self.items_per_page + 1 }
    }
}
