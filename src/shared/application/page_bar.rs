use serde::{Deserialize, Serialize};

/// Default width of the page bar before ellipses kick in.
pub const DEFAULT_MAX_PAGES_TO_SHOW: u32 = 7;

/// One slot in a pagination bar: a clickable page number or an ellipsis.
///
/// Serializes untagged, so a bar renders as a JSON array of numbers and
/// nulls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageBarEntry {
    Page(u32),
    Ellipsis,
}

/// Compact list of page numbers and ellipses for pagination navigation.
///
/// Always shows the first and last page, two side pages when adjacent, and
/// one page around the current page. Numbers are strictly ascending with at
/// most one ellipsis per gap.
pub fn page_bar(page: u32, total_pages: u32, max_pages_to_show: u32) -> Vec<PageBarEntry> {
    if total_pages <= max_pages_to_show {
        return (1..=total_pages).map(PageBarEntry::Page).collect();
    }

    const NUM_SIDE_PAGES: i64 = 2;
    const NUM_AROUND_CURRENT: i64 = 1;

    let page = i64::from(page.max(1));
    let total = i64::from(total_pages);

    // Always show first page
    let mut entries = vec![PageBarEntry::Page(1)];

    // Either an ellipsis or the run of pages between 2 and the current window
    if page - NUM_AROUND_CURRENT > NUM_SIDE_PAGES + 1 {
        entries.push(PageBarEntry::Ellipsis);
    } else {
        for i in 2..(page - NUM_AROUND_CURRENT).max(2) {
            entries.push(PageBarEntry::Page(i as u32));
        }
    }

    let left = (page - NUM_AROUND_CURRENT).max(2);
    let right = (page + NUM_AROUND_CURRENT).min(total - 1);
    for i in left..=right {
        entries.push(PageBarEntry::Page(i as u32));
    }

    // Same on the right-hand side, before the last page
    if page + NUM_AROUND_CURRENT < total - NUM_SIDE_PAGES {
        entries.push(PageBarEntry::Ellipsis);
    } else {
        for i in (right + 1)..total {
            entries.push(PageBarEntry::Page(i as u32));
        }
    }

    // Always show last page
    if total > 1 {
        entries.push(PageBarEntry::Page(total_pages));
    }

    entries
}
