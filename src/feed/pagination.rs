// Feed pagination — page windows for the infinite-scroll feed.
//
// The first page is kept small so the feed paints quickly; later pages are
// larger. A page shorter than its expected size means the feed is exhausted.

/// Number of reviews requested for the first page.
pub const INITIAL_PAGE_SIZE: usize = 10;

/// Number of reviews requested for every page after the first.
pub const SUBSEQUENT_PAGE_SIZE: usize = 36;

/// Offset/limit pair for one page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: usize,
    pub limit: usize,
}

/// Expected number of rows for a page index.
pub fn page_size(page: usize) -> usize {
    if page == 0 {
        INITIAL_PAGE_SIZE
    } else {
        SUBSEQUENT_PAGE_SIZE
    }
}

/// Compute the offset and limit for a zero-based page index.
pub fn page_window(page: usize) -> PageWindow {
    if page == 0 {
        PageWindow {
            offset: 0,
            limit: INITIAL_PAGE_SIZE,
        }
    } else {
        PageWindow {
            offset: INITIAL_PAGE_SIZE + (page - 1) * SUBSEQUENT_PAGE_SIZE,
            limit: SUBSEQUENT_PAGE_SIZE,
        }
    }
}

/// Decide which page to load next, if any.
///
/// `pages_loaded` includes the page that just arrived with `last_page_len`
/// rows. A full page means there may be more.
pub fn next_page(last_page_len: usize, pages_loaded: usize) -> Option<usize> {
    if pages_loaded == 0 {
        return Some(0);
    }

    if last_page_len == page_size(pages_loaded - 1) {
        Some(pages_loaded)
    } else {
        None
    }
}
