use serde::Serialize;

/// State tag carried by each page button. Serializes to `"active"` for the
/// current page and to the empty string for every other page, which is what
/// template consumers compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageState {
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "")]
    Inactive,
}

impl PageState {
    pub fn as_str(self) -> &'static str {
        match self {
            PageState::Active => "active",
            PageState::Inactive => "",
        }
    }

    pub fn is_active(self) -> bool {
        self == PageState::Active
    }
}

/// One entry of a button listing; listings are ascending by `page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageButton {
    pub page: i64,
    pub state: PageState,
}

fn button(page: i64, current_page: i64) -> PageButton {
    let state = if page == current_page {
        PageState::Active
    } else {
        PageState::Inactive
    };
    PageButton { page, state }
}

/// Window of at most `button_count` consecutive pages around `current_page`,
/// clamped to `[1, page_count]`. Empty when there is at most one page.
pub fn button_window(current_page: i64, page_count: i64, button_count: i64) -> Vec<PageButton> {
    if page_count <= 1 || button_count < 1 {
        return Vec::new();
    }

    let mid = button_count / 2;
    // Even button counts lean one extra page to the right of the current one.
    let mut start = if button_count % 2 == 1 {
        current_page - mid
    } else {
        current_page - mid + 1
    };
    // May run past page_count here; the right clamp below restores it.
    let mut end = current_page.saturating_add(mid);

    if start <= 0 {
        start = 1;
        end = button_count.min(page_count);
    }
    if end >= page_count {
        end = page_count;
        // A start already pinned at 1 stays put; pulling it further left is
        // impossible and pushing it right would drop leading pages.
        if start != 1 {
            start = (page_count - button_count + 1).max(1);
        }
    }

    (start..=end)
        .map(|page| button(page, current_page))
        .collect()
}

/// Every page from 1 to `page_count` as a button listing, `Active` exactly at
/// `current_page`. Empty when there are no pages.
pub fn all_pages(current_page: i64, page_count: i64) -> Vec<PageButton> {
    if page_count <= 0 {
        return Vec::new();
    }
    (1..=page_count)
        .map(|page| button(page, current_page))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(buttons: &[PageButton]) -> Vec<i64> {
        buttons.iter().map(|b| b.page).collect()
    }

    fn active_pages(buttons: &[PageButton]) -> Vec<i64> {
        buttons
            .iter()
            .filter(|b| b.state.is_active())
            .map(|b| b.page)
            .collect()
    }

    #[test]
    fn test_centered_window() {
        let w = button_window(20, 100, 11);
        assert_eq!(pages(&w), (15..=25).collect::<Vec<_>>());
        assert_eq!(active_pages(&w), vec![20]);
    }

    #[test]
    fn test_left_edge_clamp() {
        let w = button_window(1, 100, 7);
        assert_eq!(pages(&w), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(active_pages(&w), vec![1]);
    }

    #[test]
    fn test_near_left_edge_clamp() {
        // Page 2 would put the window start at -1; it snaps to 1 instead.
        let w = button_window(2, 100, 7);
        assert_eq!(pages(&w), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(active_pages(&w), vec![2]);
    }

    #[test]
    fn test_right_edge_clamp() {
        let w = button_window(8, 10, 7);
        assert_eq!(pages(&w), vec![4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(active_pages(&w), vec![8]);
    }

    #[test]
    fn test_last_page_window() {
        let w = button_window(100, 100, 7);
        assert_eq!(pages(&w), (94..=100).collect::<Vec<_>>());
        assert_eq!(active_pages(&w), vec![100]);
    }

    #[test]
    fn test_even_button_count_leans_right() {
        let w = button_window(5, 100, 4);
        assert_eq!(pages(&w), vec![4, 5, 6, 7]);
    }

    #[test]
    fn test_even_button_count_at_left_edge() {
        let w = button_window(1, 100, 4);
        assert_eq!(pages(&w), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_collapses_when_fewer_pages_than_buttons() {
        let w = button_window(2, 3, 7);
        assert_eq!(pages(&w), vec![1, 2, 3]);
    }

    #[test]
    fn test_collapses_at_right_edge_with_few_pages() {
        // start > 1 before clamping, so the right clamp fires and must not
        // walk below page 1.
        let w = button_window(5, 5, 7);
        assert_eq!(pages(&w), vec![1, 2, 3, 4, 5]);
        assert_eq!(active_pages(&w), vec![5]);
    }

    #[test]
    fn test_unclamped_start_with_overshooting_end() {
        // start computes to exactly 1 without hitting the left clamp, while
        // end runs past the last page and must still be pulled back.
        let w = button_window(4, 5, 7);
        assert_eq!(pages(&w), vec![1, 2, 3, 4, 5]);
        let w = button_window(4, 5, 8);
        assert_eq!(pages(&w), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_for_single_page() {
        assert!(button_window(1, 1, 7).is_empty());
        assert!(button_window(1, 0, 7).is_empty());
    }

    #[test]
    fn test_all_pages_lists_everything() {
        let all = all_pages(3, 5);
        assert_eq!(pages(&all), vec![1, 2, 3, 4, 5]);
        assert_eq!(active_pages(&all), vec![3]);
    }

    #[test]
    fn test_all_pages_single_page() {
        let all = all_pages(1, 1);
        assert_eq!(pages(&all), vec![1]);
        assert_eq!(active_pages(&all), vec![1]);
    }

    #[test]
    fn test_all_pages_empty() {
        assert!(all_pages(1, 0).is_empty());
    }

    #[test]
    fn test_state_tags() {
        assert_eq!(PageState::Active.as_str(), "active");
        assert_eq!(PageState::Inactive.as_str(), "");
        assert!(PageState::Active.is_active());
        assert!(!PageState::Inactive.is_active());
    }
}
