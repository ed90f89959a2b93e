// ABOUTME: The LeadView view-model: fetched leads plus filter, search query, and sort state.
// ABOUTME: filtered() feeds insights and export; visible() adds search and sort for the table.

use crate::filter::LeadFilter;
use crate::lead::Lead;
use crate::sort::{SortKey, SortSpec};

/// In-memory view state over a fetched lead list.
///
/// Two derived subsets exist, matching the dashboard's data flow: the filter
/// bar criteria produce `filtered()`, which is what the insights chart and the
/// CSV export consume; the table additionally applies its own search box and
/// column sort, which is `visible()`.
#[derive(Debug, Clone, Default)]
pub struct LeadView {
    leads: Vec<Lead>,
    pub filter: LeadFilter,
    query: String,
    pub sort: SortSpec,
}

impl LeadView {
    pub fn new(leads: Vec<Lead>) -> Self {
        Self {
            leads,
            ..Self::default()
        }
    }

    /// Replace the fetched lead list, keeping filter/search/sort state.
    pub fn set_leads(&mut self, leads: Vec<Lead>) {
        self.leads = leads;
    }

    /// Set the table search query. Matching is a trimmed, case-insensitive
    /// substring test over company name, industry, and region.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Toggle a sort column (same key flips direction, new key starts ascending).
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort.toggle(key);
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    /// Leads passing the filter bar criteria, in fetch order.
    pub fn filtered(&self) -> Vec<&Lead> {
        self.leads.iter().filter(|l| self.filter.matches(l)).collect()
    }

    /// Leads passing filter and search, sorted under the current spec.
    pub fn visible(&self) -> Vec<&Lead> {
        let mut rows: Vec<&Lead> = self
            .filtered()
            .into_iter()
            .filter(|l| matches_query(l, &self.query))
            .collect();
        rows.sort_by(|a, b| self.sort.compare(a, b));
        rows
    }
}

/// Case-insensitive substring search over the three text columns. A blank
/// query matches every lead.
fn matches_query(lead: &Lead, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    [&lead.company_name, &lead.industry, &lead.region]
        .into_iter()
        .any(|field| {
            field
                .as_deref()
                .is_some_and(|v| v.to_lowercase().contains(&q))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortOrder;

    fn sample_leads() -> Vec<Lead> {
        let mut acme = Lead::new("Acme Robotics");
        acme.industry = Some("SaaS".to_string());
        acme.region = Some("US".to_string());
        acme.score = Some(85);

        let mut globex = Lead::new("Globex");
        globex.industry = Some("Fintech".to_string());
        globex.region = Some("EU".to_string());
        globex.score = Some(55);

        let mut initech = Lead::new("Initech");
        initech.industry = Some("SaaS".to_string());
        initech.region = Some("UK".to_string());
        initech.score = Some(30);

        vec![acme, globex, initech]
    }

    #[test]
    fn filtered_applies_only_the_filter_bar() {
        let mut view = LeadView::new(sample_leads());
        view.filter.industry = Some("saas".to_string());
        view.set_query("globex"); // search must not affect filtered()

        let names: Vec<_> = view
            .filtered()
            .iter()
            .map(|l| l.company_name.clone().unwrap())
            .collect();
        assert_eq!(names, vec!["Acme Robotics", "Initech"]);
    }

    #[test]
    fn visible_sorts_by_score_descending_by_default() {
        let view = LeadView::new(sample_leads());

        let scores: Vec<_> = view.visible().iter().map(|l| l.score_or_zero()).collect();
        assert_eq!(scores, vec![85, 55, 30]);
    }

    #[test]
    fn visible_applies_search_over_all_text_columns() {
        let mut view = LeadView::new(sample_leads());

        view.set_query("  FINTECH "); // trimmed, case-insensitive
        let rows = view.visible();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].company_name.as_deref(), Some("Globex"));

        view.set_query("ini");
        let rows = view.visible();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].company_name.as_deref(), Some("Initech"));
    }

    #[test]
    fn toggle_sort_reorders_visible_rows() {
        let mut view = LeadView::new(sample_leads());

        view.toggle_sort(SortKey::CompanyName);
        assert_eq!(view.sort.order, SortOrder::Asc);
        let names: Vec<_> = view
            .visible()
            .iter()
            .map(|l| l.company_name.clone().unwrap())
            .collect();
        assert_eq!(names, vec!["Acme Robotics", "Globex", "Initech"]);

        view.toggle_sort(SortKey::CompanyName);
        let names: Vec<_> = view
            .visible()
            .iter()
            .map(|l| l.company_name.clone().unwrap())
            .collect();
        assert_eq!(names, vec!["Initech", "Globex", "Acme Robotics"]);
    }

    #[test]
    fn empty_view_yields_empty_subsets() {
        let view = LeadView::default();

        assert!(view.filtered().is_empty());
        assert!(view.visible().is_empty());
    }
}
