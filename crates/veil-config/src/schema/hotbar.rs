//! Action-bar geometry: slots and the pages that group them.

/// Highest slot number on the action bar.
pub const MAX_SLOTS: u32 = 50;
/// Number of contiguous slots in one page.
pub const SLOTS_PER_PAGE: u32 = 10;
/// Highest page number.
pub const MAX_PAGES: u32 = 5;

/// Whether `slot` is a real action-bar slot (1..=50).
pub fn is_valid_slot(slot: u32) -> bool {
    (1..=MAX_SLOTS).contains(&slot)
}

/// Whether `page` is a real action-bar page (1..=5).
pub fn is_valid_page(page: u32) -> bool {
    (1..=MAX_PAGES).contains(&page)
}

/// The ten slots making up `page`, or an empty list for an invalid page.
pub fn slots_for_page(page: u32) -> Vec<u32> {
    if !is_valid_page(page) {
        return Vec::new();
    }
    let start = (page - 1) * SLOTS_PER_PAGE + 1;
    (start..start + SLOTS_PER_PAGE).collect()
}
