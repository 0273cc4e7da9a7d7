//! Page-window computation for the pagination strip
//!
//! Produces a bounded-width set of controls no matter how many pages the
//! source reports, with the current page always visible and both
//! boundary pages reachable in one step.

/// One control in the pagination strip, ready for the view to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageControl {
    Previous { disabled: bool },
    Page { number: usize, active: bool },
    Ellipsis,
    Next { disabled: bool },
}

/// Compute which controls to show for `current` of `total` pages, with
/// at most `max_visible` numbered buttons in the central window.
pub fn compute_window(current: usize, total: usize, max_visible: usize) -> Vec<PageControl> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let max_visible = max_visible.max(1);

    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = total.min(start + max_visible - 1);
    if end - start + 1 < max_visible {
        // re-anchor so the window keeps its full width near the end
        start = end.saturating_sub(max_visible - 1).max(1);
    }

    let mut controls = vec![PageControl::Previous {
        disabled: current == 1,
    }];

    if start > 1 {
        controls.push(PageControl::Page {
            number: 1,
            active: current == 1,
        });
        if start > 2 {
            controls.push(PageControl::Ellipsis);
        }
    }

    for number in start..=end {
        controls.push(PageControl::Page {
            number,
            active: number == current,
        });
    }

    if end < total {
        if end < total - 1 {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(PageControl::Page {
            number: total,
            active: current == total,
        });
    }

    controls.push(PageControl::Next {
        disabled: current == total,
    });
    controls
}
