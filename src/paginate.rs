/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Pure windowing over a (possibly filtered) list of choices. Only the returned
//! window is ever painted, so long lists stay usable on short terminals.

/// Used when a prompt is configured with a page size of `0`.
pub const DEFAULT_PAGE_SIZE: usize = 7;

/// One visible window of the filtered list. Recomputed on every keystroke and
/// never stored anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// The subsequence of the filtered list that is on screen.
    pub visible: &'a [T],
    /// Index of the focused row within `visible`.
    pub focus_local: usize,
}

/// Pick the window of `filtered` that should be visible when `focused_index` has the
/// focus, keeping the focused row roughly centered once the list is longer than one
/// page.
///
/// All arithmetic is integer division, and the window end is clamped to the list
/// length, so the window never exceeds `page_size` rows and never goes out of bounds.
/// When the whole list fits on one page, `focused_index` is passed through unchanged
/// even if it is past the end of the list (an empty filtered list is rendered as no
/// rows at all, and the caller's focus is simply not visible).
pub fn paginate<T>(filtered: &[T], page_size: usize, focused_index: usize) -> Page<'_, T> {
    let page_size = if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };
    let len = filtered.len();

    // Everything fits on one page.
    if len <= page_size {
        return Page {
            visible: filtered,
            focus_local: focused_index,
        };
    }

    // Focus near the top: pin the window to the start.
    if focused_index < page_size / 2 {
        return Page {
            visible: &filtered[0..page_size],
            focus_local: focused_index,
        };
    }

    // Focus near the bottom: pin the window to the end.
    if len - focused_index - 1 < page_size / 2 {
        let start = len - page_size;
        return Page {
            visible: &filtered[start..len],
            focus_local: focused_index - start,
        };
    }

    // Focus in the middle: center it, with the extra row (for odd page sizes) below.
    let above = page_size / 2;
    let below = page_size - above;
    let start = focused_index - above;
    let end = (focused_index + below).min(len);
    Page {
        visible: &filtered[start..end],
        focus_local: above,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn items(count: usize) -> Vec<usize> {
        (0..count).collect()
    }

    #[test]
    fn short_list_is_returned_whole_with_focus_passed_through() {
        let list = items(3);
        let page = paginate(&list, 4, 3);
        assert_eq!(page.visible, &[0, 1, 2]);
        assert_eq!(page.focus_local, 3);
    }

    #[test]
    fn focus_in_the_middle_is_centered() {
        let list = items(6);
        let page = paginate(&list, 4, 2);
        assert_eq!(page.visible, &[0, 1, 2, 3]);
        assert_eq!(page.focus_local, 2);
    }

    #[test]
    fn even_page_size_splits_evenly_around_the_focus() {
        let list = items(5);
        let page = paginate(&list, 2, 3);
        assert_eq!(page.visible, &[2, 3]);
        assert_eq!(page.focus_local, 1);
    }

    #[test]
    fn focus_near_the_end_pins_the_window_to_the_end() {
        let list = items(5);
        let page = paginate(&list, 3, 4);
        assert_eq!(page.visible, &[2, 3, 4]);
        assert_eq!(page.focus_local, 2);
    }

    #[test]
    fn focus_near_the_start_pins_the_window_to_the_start() {
        let list = items(10);
        let page = paginate(&list, 5, 1);
        assert_eq!(page.visible, &[0, 1, 2, 3, 4]);
        assert_eq!(page.focus_local, 1);
    }

    #[test]
    fn odd_page_size_puts_the_extra_row_below_the_focus() {
        let list = items(20);
        let page = paginate(&list, 7, 10);
        assert_eq!(page.visible, &[7, 8, 9, 10, 11, 12, 13]);
        assert_eq!(page.focus_local, 3);
    }

    #[test]
    fn zero_page_size_falls_back_to_the_default() {
        let list = items(20);
        let page = paginate(&list, 0, 0);
        assert_eq!(page.visible.len(), DEFAULT_PAGE_SIZE);
        assert_eq!(page.focus_local, 0);
    }

    #[test]
    fn empty_list_produces_an_empty_window() {
        let list: Vec<usize> = vec![];
        let page = paginate(&list, 7, 0);
        assert!(page.visible.is_empty());
    }
}
