//! Pagination cursor for the infinite-scrolling grid.

/// Current page plus the total reported by the last response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: u32,
    per_page: u32,
    total: u64,
}

impl PageCursor {
    pub fn new(per_page: u32) -> Self {
        Self { page: 1, per_page: per_page.max(1), total: 0 }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Record a successful response for `page`.
    pub fn advance_to(&mut self, page: u32, total: u64) {
        self.page = page.max(1);
        self.total = total;
    }

    /// Back to page 1 with nothing known about the total.
    pub fn reset(&mut self) {
        self.page = 1;
        self.total = 0;
    }

    /// True while `page * per_page < total`.
    pub fn has_more(&self) -> bool {
        u64::from(self.page) * u64::from(self.per_page) < self.total
    }

    pub fn next_page(&self) -> Option<u32> {
        self.has_more().then(|| self.page + 1)
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_more_until_page_covers_total() {
        let mut c = PageCursor::new(40);
        c.advance_to(1, 100);
        assert!(c.has_more());
        assert_eq!(c.next_page(), Some(2));
        c.advance_to(2, 100);
        assert!(c.has_more());
        c.advance_to(3, 100);
        assert!(!c.has_more());
        assert_eq!(c.next_page(), None);
    }

    #[test]
    fn exact_multiple_has_no_more() {
        let mut c = PageCursor::new(40);
        c.advance_to(2, 80);
        assert!(!c.has_more());
    }

    #[test]
    fn fresh_cursor_has_no_more() {
        assert!(!PageCursor::default().has_more());
    }

    #[test]
    fn reset_returns_to_first_page() {
        let mut c = PageCursor::new(40);
        c.advance_to(5, 1000);
        c.reset();
        assert_eq!(c.page(), 1);
        assert_eq!(c.total(), 0);
    }
}
