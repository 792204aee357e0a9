/// Cumulative "load more" pager over an already filtered sequence.
///
/// Page `n` reveals the first `n * page_size` items; advancing grows the
/// visible prefix instead of moving a window.
#[derive(Debug, Clone)]
pub struct Pager<'a, T> {
    items: &'a [T],
    page_size: usize,
    current_page: usize,
}

impl<'a, T> Pager<'a, T> {
    pub fn new(items: &'a [T], page_size: usize) -> Self {
        Pager {
            items,
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    /// Pager advanced from page 1 up to `page`, stopping at the last page.
    pub fn at_page(items: &'a [T], page_size: usize, page: usize) -> Self {
        let mut pager = Self::new(items, page_size);
        while pager.current_page < page && pager.has_more() {
            pager.advance();
        }
        pager
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// Whether the "load more" trigger should be shown.
    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Reveals one more page. No-op once the last page is visible.
    pub fn advance(&mut self) {
        if self.has_more() {
            self.current_page += 1;
        }
    }

    pub fn visible_slice(&self) -> &'a [T] {
        let end = (self.current_page * self.page_size).min(self.items.len());
        &self.items[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_cumulatively() {
        let items: Vec<u32> = (0..14).collect();
        let mut pager = Pager::new(&items, 6);
        assert_eq!(pager.total_pages(), 3);
        assert_eq!(pager.visible_slice(), &items[..6]);

        pager.advance();
        assert_eq!(pager.visible_slice(), &items[..12]);

        pager.advance();
        assert_eq!(pager.visible_slice().len(), 14);
        assert!(!pager.has_more());
    }

    #[test]
    fn advance_is_idempotent_at_last_page() {
        let items: Vec<u32> = (0..7).collect();
        let mut pager = Pager::new(&items, 6);
        pager.advance();
        pager.advance();
        pager.advance();
        assert_eq!(pager.current_page(), 2);
        assert_eq!(pager.visible_slice().len(), 7);
    }

    #[test]
    fn visible_len_matches_formula() {
        let items: Vec<u32> = (0..20).collect();
        for page in 1..=6 {
            let pager = Pager::at_page(&items, 6, page);
            let expected = (pager.current_page() * 6).min(items.len());
            assert_eq!(pager.visible_slice().len(), expected);
        }
    }

    #[test]
    fn empty_sequence() {
        let items: Vec<u32> = Vec::new();
        let mut pager = Pager::new(&items, 6);
        assert_eq!(pager.total_pages(), 0);
        assert!(!pager.has_more());
        pager.advance();
        assert_eq!(pager.current_page(), 1);
        assert!(pager.visible_slice().is_empty());
    }

    #[test]
    fn at_page_clamps_to_last() {
        let items: Vec<u32> = (0..8).collect();
        let pager = Pager::at_page(&items, 6, 40);
        assert_eq!(pager.current_page(), 2);
    }
}
