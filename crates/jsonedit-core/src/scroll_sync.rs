use crate::surface::{ScrollOffset, TextSurface};

/// Mirror the editor's scroll position onto the highlight overlay.
///
/// The overlay never has scroll state of its own; it always follows the
/// editor, never the reverse.
pub fn sync_scroll(surface: &mut dyn TextSurface) -> ScrollOffset {
    let offset = surface.scroll_offset();
    surface.set_overlay_scroll_offset(offset);
    offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::HeadlessSurface;

    #[test]
    fn copies_both_axes() {
        let mut surface = HeadlessSurface {
            scroll: ScrollOffset { top: 360, left: 42 },
            ..Default::default()
        };
        let offset = sync_scroll(&mut surface);
        assert_eq!(offset, ScrollOffset { top: 360, left: 42 });
        assert_eq!(surface.overlay_scroll, surface.scroll);
    }

    #[test]
    fn overlay_follows_back_to_zero() {
        let mut surface = HeadlessSurface {
            overlay_scroll: ScrollOffset { top: 90, left: 10 },
            ..Default::default()
        };
        sync_scroll(&mut surface);
        assert_eq!(surface.overlay_scroll, ScrollOffset::default());
        assert_eq!(surface.scroll, ScrollOffset::default());
    }
}
