/// Up to five page numbers centered on the current page, shifted backward
/// near the end of the range so the window still yields five candidates
/// when possible.
pub(crate) fn adjacent_window(current_page: i64, max_pages: i64) -> Vec<i64> {
    let mut pages = Vec::new();

    let mut i = current_page - 2;
    let diff = max_pages - current_page;
    if diff < 2 {
        i -= 2 - diff;
    }
    // positions below 1 are never collected, skip straight to the first page
    if i < 1 {
        i = 1;
    }

    while pages.len() < 5 && i <= max_pages {
        pages.push(i);
        i += 1;
    }

    pages
}
