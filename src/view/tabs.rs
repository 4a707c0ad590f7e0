//! Tab strip view model: one tab per loaded report, in store order.

use crate::store::ReportStore;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabView {
    pub id: String,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabStripView {
    pub tabs: Vec<TabView>,
    /// The clear-all control only appears once there are two or more tabs.
    pub show_clear_all: bool,
}

pub fn build_tab_strip(store: &ReportStore) -> TabStripView {
    let active = store.active_id();

    TabStripView {
        tabs: store
            .reports()
            .iter()
            .map(|r| TabView {
                id: r.id.to_string(),
                name: r.name.clone(),
                active: Some(r.id) == active,
            })
            .collect(),
        show_clear_all: store.len() > 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{GeneralLog, ReportKind};
    use pretty_assertions::assert_eq;

    fn kind() -> ReportKind {
        ReportKind::General(GeneralLog { logs: vec![] })
    }

    #[test]
    fn one_tab_per_report_in_store_order() {
        let mut store = ReportStore::new();
        store.insert("a.json", kind()).unwrap();
        let b = store.insert("b.json", kind()).unwrap();
        store.insert("c.json", kind()).unwrap();
        store.activate(b);

        let strip = build_tab_strip(&store);

        let names: Vec<&str> = strip.tabs.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["a.json", "b.json", "c.json"]);
        let flags: Vec<bool> = strip.tabs.iter().map(|t| t.active).collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn clear_all_needs_at_least_two_tabs() {
        let mut store = ReportStore::new();
        assert!(!build_tab_strip(&store).show_clear_all);

        store.insert("a.json", kind()).unwrap();
        assert!(!build_tab_strip(&store).show_clear_all);

        store.insert("b.json", kind()).unwrap();
        assert!(build_tab_strip(&store).show_clear_all);
    }

    #[test]
    fn ids_are_the_display_tokens() {
        let mut store = ReportStore::new();
        let a = store.insert("a.json", kind()).unwrap();

        let strip = build_tab_strip(&store);
        assert_eq!(strip.tabs[0].id, a.to_string());
    }
}
