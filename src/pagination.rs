use crate::Page;

pub const RECOMMENDED_RECIPES_PER_PAGE: usize = 5;

/// Client-side paging over an in-memory list. Pages are 1-based.
#[derive(Debug, PartialEq, Clone, Copy, Eq)]
pub struct Pagination {
    current_page: usize,
    per_page: usize,
    total: usize,
}

impl Pagination {
    pub fn new(current_page: usize, per_page: usize, total: usize) -> Self {
        let mut pagination = Self {
            current_page: 1,
            per_page: per_page.max(1),
            total,
        };
        pagination.current_page = pagination.clamp(current_page);
        pagination
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.per_page)
    }

    pub fn has_multiple_pages(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages()
    }

    pub fn previous_page(&self) -> usize {
        self.clamp(self.current_page.saturating_sub(1))
    }

    pub fn next_page(&self) -> usize {
        self.clamp(self.current_page + 1)
    }

    pub fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }

    /// Brings `page` back into `1..=total_pages`
    pub fn clamp(&self, page: usize) -> usize {
        page.clamp(1, self.last_page())
    }

    /// Page numbers with their own button: the first one, the last one and
    /// the neighbours of the current page
    pub fn visible_pages(&self) -> Vec<usize> {
        let total_pages = self.total_pages();
        (1..=total_pages)
            .filter(|&page| {
                page == 1
                    || page == total_pages
                    || (page + 1 >= self.current_page && page <= self.current_page + 1)
            })
            .collect()
    }

    pub fn page_of<T: Clone>(&self, items: &[T]) -> Page<T> {
        let start = ((self.current_page - 1) * self.per_page).min(items.len());
        let end = (start + self.per_page).min(items.len());

        Page {
            page: self.current_page,
            per_page: self.per_page,
            total: items.len(),
            content: items[start..end].to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn items() -> Vec<usize> {
        (1..=12).collect()
    }

    #[rstest]
    #[case::first_page(1, vec![1, 2, 3, 4, 5])]
    #[case::middle_page(2, vec![6, 7, 8, 9, 10])]
    #[case::last_partial_page(3, vec![11, 12])]
    fn test_page_content(#[case] page: usize, #[case] expected: Vec<usize>) {
        let pagination = Pagination::new(page, RECOMMENDED_RECIPES_PER_PAGE, 12);

        let page = pagination.page_of(&items());

        assert_eq!(page.content, expected);
        assert_eq!(page.total, 12);
        assert_eq!(pagination.total_pages(), 3);
    }

    #[rstest]
    #[case::below_range(0, 1)]
    #[case::above_range(9, 3)]
    fn test_requested_page_is_clamped(#[case] requested: usize, #[case] expected: usize) {
        assert_eq!(
            Pagination::new(requested, RECOMMENDED_RECIPES_PER_PAGE, 12).current_page(),
            expected
        );
    }

    #[rstest]
    fn test_empty_list() {
        let pagination = Pagination::new(4, RECOMMENDED_RECIPES_PER_PAGE, 0);

        assert_eq!(pagination.current_page(), 1);
        assert_eq!(pagination.total_pages(), 0);
        assert!(!pagination.has_multiple_pages());
        assert_eq!(pagination.page_of::<usize>(&[]).content, Vec::<usize>::new());
        assert_eq!(pagination.visible_pages(), Vec::<usize>::new());
    }

    #[rstest]
    #[case::on_first_page(1, vec![1, 2, 10])]
    #[case::in_the_middle(5, vec![1, 4, 5, 6, 10])]
    #[case::next_to_first(2, vec![1, 2, 3, 10])]
    #[case::on_last_page(10, vec![1, 9, 10])]
    fn test_visible_pages(#[case] current_page: usize, #[case] expected: Vec<usize>) {
        assert_eq!(
            Pagination::new(current_page, RECOMMENDED_RECIPES_PER_PAGE, 50).visible_pages(),
            expected
        );
    }

    #[rstest]
    fn test_navigation_bounds() {
        let first = Pagination::new(1, RECOMMENDED_RECIPES_PER_PAGE, 12);
        assert!(first.is_first_page());
        assert!(!first.is_last_page());
        assert_eq!(first.previous_page(), 1);
        assert_eq!(first.next_page(), 2);

        let last = Pagination::new(3, RECOMMENDED_RECIPES_PER_PAGE, 12);
        assert!(last.is_last_page());
        assert_eq!(last.next_page(), 3);
        assert_eq!(last.last_page(), 3);
    }
}
