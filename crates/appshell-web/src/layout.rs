/// Layout constants shared by the top bar, side bar and page content
///
/// Compiled in rather than configured so server render and hydration agree.

/// Side bar width in pixels
pub const SIDE_BAR_WIDTH: u32 = 240;

/// Top bar height on desktop viewports, in pixels
pub const TOP_BAR_DESKTOP_HEIGHT: u32 = 64;

/// Top bar height on mobile viewports, in pixels
pub const TOP_BAR_MOBILE_HEIGHT: u32 = 56;

/// Viewports narrower than this are classified as mobile
pub const MOBILE_BREAKPOINT: u32 = 600;

/// Format a pixel length for inline styles
pub fn px(value: u32) -> String {
    if value == 0 {
        "0".to_string()
    } else {
        format!("{}px", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px() {
        assert_eq!(px(0), "0");
        assert_eq!(px(SIDE_BAR_WIDTH), "240px");
    }
}
