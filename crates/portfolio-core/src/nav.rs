use crate::tab::ActiveTab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub tab: ActiveTab,
    pub label: &'static str,
    pub active: bool,
}

/// One item per tab, in navigation order, with exactly one marked active.
pub fn nav_items(active: ActiveTab) -> Vec<NavItem> {
    ActiveTab::all()
        .iter()
        .map(|&tab| NavItem {
            tab,
            label: tab.label(),
            active: tab == active,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_active() {
        for &active in ActiveTab::all() {
            let items = nav_items(active);
            assert_eq!(items.len(), 3);

            let marked: Vec<_> = items.iter().filter(|i| i.active).collect();
            assert_eq!(marked.len(), 1);
            assert_eq!(marked[0].tab, active);
        }
    }

    #[test]
    fn test_labels_in_order() {
        let labels: Vec<_> = nav_items(ActiveTab::Home).iter().map(|i| i.label).collect();
        assert_eq!(labels, ["Home", "Skills", "Contact"]);
    }
}
