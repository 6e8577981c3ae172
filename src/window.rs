//! Turning sorted marker lines into contiguous line windows.

use std::ops::RangeInclusive;

/// Split `0..total` into one window per marker.
///
/// Each window starts at its marker and ends on the line before the next
/// marker, or on the last line for the final marker. Lines before the first
/// marker belong to no window. `markers` must be strictly increasing and
/// below `total`.
pub fn windows_from_markers(markers: &[usize], total: usize) -> Vec<RangeInclusive<usize>> {
    let ends = markers
        .iter()
        .skip(1)
        .map(|next| return next.saturating_sub(1))
        .chain(std::iter::once(total.saturating_sub(1)));

    return markers
        .iter()
        .zip(ends)
        .map(|(&start, end)| return start..=end)
        .collect();
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn no_markers_yields_no_windows() {
        assert!(windows_from_markers(&[], 10).is_empty());
        assert!(windows_from_markers(&[], 0).is_empty());
    }

    #[test]
    fn last_window_runs_to_final_line() {
        let windows = windows_from_markers(&[2, 5, 6], 9);
        assert_eq!(windows, vec![2..=4, 5..=5, 6..=8]);
    }

    #[test]
    fn marker_on_last_line_is_single_line_window() {
        let windows = windows_from_markers(&[0, 3], 4);
        assert_eq!(windows, vec![0..=2, 3..=3]);
    }

    #[test]
    fn windows_are_gapless() {
        let markers = [1, 4, 7, 11];
        let windows = windows_from_markers(&markers, 20);
        for pair in windows.windows(2) {
            let (Some(a), Some(b)) = (pair.first(), pair.get(1)) else {
                panic!("window pair underflow");
            };
            assert_eq!(a.end() + 1, *b.start());
        }
        assert_eq!(windows.last().map(|w| *w.end()), Some(19));
    }
}
