/// Most page buttons shown at once, not counting prev/next
const MAX_PAGE_BUTTONS: usize = 9;

/// Prev / page numbers / next. Returns the page the user picked.
pub fn render(ui: &mut egui::Ui, current: usize, count: usize) -> Option<usize> {
    if count <= 1 {
        return None;
    }

    let mut picked = None;

    ui.horizontal_wrapped(|ui| {
        if ui.add_enabled(current > 1, egui::Button::new("‹ Prev")).clicked() {
            picked = Some(current - 1);
        }

        let mut last_shown = 0;
        for page in page_window(current, count, MAX_PAGE_BUTTONS) {
            if page > last_shown + 1 {
                ui.label("…");
            }
            last_shown = page;

            let button = egui::Button::new(page.to_string()).selected(page == current);
            if ui.add(button).clicked() && page != current {
                picked = Some(page);
            }
        }

        if ui.add_enabled(current < count, egui::Button::new("Next ›")).clicked() {
            picked = Some(current + 1);
        }
    });

    picked
}

/// Page numbers to offer: always the first and the last page, plus a window
/// around `current`, at most `max` numbers in total.
fn page_window(current: usize, count: usize, max: usize) -> Vec<usize> {
    if count <= max {
        return (1..=count).collect();
    }

    // Room left once the first and last page are placed
    let inner = max.saturating_sub(2).max(1);
    let mut start = current.saturating_sub(inner / 2).max(2);
    let mut end = start + inner - 1;
    if end > count - 1 {
        end = count - 1;
        start = (end + 1).saturating_sub(inner).max(2);
    }

    let mut pages = Vec::with_capacity(max);
    pages.push(1);
    pages.extend(start..=end);
    pages.push(count);
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 2, vec![1, 2])]
    #[case(3, 9, (1..=9).collect())]
    #[case(1, 10, vec![1, 2, 3, 4, 5, 6, 7, 8, 10])]
    #[case(6, 10, vec![1, 3, 4, 5, 6, 7, 8, 9, 10])]
    #[case(10, 10, vec![1, 3, 4, 5, 6, 7, 8, 9, 10])]
    #[case(10, 20, vec![1, 7, 8, 9, 10, 11, 12, 13, 20])]
    fn test_page_window(#[case] current: usize, #[case] count: usize, #[case] expected: Vec<usize>) {
        assert_eq!(page_window(current, count, MAX_PAGE_BUTTONS), expected);
    }

    #[test]
    fn test_page_window_always_contains_current() {
        for count in 1..40 {
            for current in 1..=count {
                let pages = page_window(current, count, MAX_PAGE_BUTTONS);
                assert!(pages.contains(&current), "page {current} of {count}");
                assert!(pages.len() <= MAX_PAGE_BUTTONS);
                assert!(pages.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }
}
