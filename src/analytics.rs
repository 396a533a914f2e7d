//! Dashboard Aggregation
//!
//! Pure functions over the already-fetched lead list.

use crate::models::{Lead, Stage};

pub fn total_revenue(leads: &[Lead]) -> f64 {
    leads.iter().map(|l| l.value).sum()
}

/// Share of closed leads, as a rounded percentage. Zero for an empty list.
pub fn conversion_rate(leads: &[Lead]) -> u32 {
    if leads.is_empty() {
        return 0;
    }
    let closed = leads.iter().filter(|l| l.status == Stage::Closed).count();
    ((closed as f64 / leads.len() as f64) * 100.0).round() as u32
}

/// Leads actively being worked (contacted or proposal)
pub fn active_deals(leads: &[Lead]) -> usize {
    leads
        .iter()
        .filter(|l| l.status != Stage::Closed && l.status != Stage::New)
        .count()
}

/// One bar per pipeline stage, in fixed stage order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCount {
    pub stage: Stage,
    pub count: usize,
    pub fill: &'static str,
}

pub fn leads_by_status(leads: &[Lead]) -> [StatusCount; 4] {
    let count_of = |stage: Stage| leads.iter().filter(|l| l.status == stage).count();
    [
        StatusCount { stage: Stage::New, count: count_of(Stage::New), fill: "#3F8CFF" },
        StatusCount { stage: Stage::Contacted, count: count_of(Stage::Contacted), fill: "#FFB800" },
        StatusCount { stage: Stage::Proposal, count: count_of(Stage::Proposal), fill: "#6C5DD3" },
        StatusCount { stage: Stage::Closed, count: count_of(Stage::Closed), fill: "#4ade80" },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeadInput, Timestamp};

    fn make_lead(status: Stage, value: f64) -> Lead {
        let input = LeadInput {
            company_name: "Co".to_string(),
            contact_name: "C".to_string(),
            email: "c@co.test".to_string(),
            value,
            status,
            tags: vec![],
        };
        Lead::provisional(&input, "u1", Timestamp { seconds: 1, nanoseconds: 0 })
    }

    #[test]
    fn test_total_revenue() {
        let leads = vec![make_lead(Stage::New, 100.0), make_lead(Stage::Closed, 250.5)];
        assert_eq!(total_revenue(&leads), 350.5);
        assert_eq!(total_revenue(&[]), 0.0);
    }

    #[test]
    fn test_conversion_rate_rounds() {
        let leads = vec![
            make_lead(Stage::Closed, 1.0),
            make_lead(Stage::New, 1.0),
            make_lead(Stage::Proposal, 1.0),
        ];
        // 1 of 3 -> 33.33 -> 33
        assert_eq!(conversion_rate(&leads), 33);
        assert_eq!(conversion_rate(&[]), 0);
    }

    #[test]
    fn test_active_deals_excludes_new_and_closed() {
        let leads = vec![
            make_lead(Stage::New, 1.0),
            make_lead(Stage::Contacted, 1.0),
            make_lead(Stage::Proposal, 1.0),
            make_lead(Stage::Closed, 1.0),
        ];
        assert_eq!(active_deals(&leads), 2);
    }

    #[test]
    fn test_leads_by_status_fixed_order() {
        let leads = vec![
            make_lead(Stage::Contacted, 1.0),
            make_lead(Stage::Contacted, 1.0),
            make_lead(Stage::Closed, 1.0),
        ];
        let counts = leads_by_status(&leads);
        assert_eq!(counts[0].stage, Stage::New);
        assert_eq!(counts[0].count, 0);
        assert_eq!(counts[1].count, 2);
        assert_eq!(counts[3].count, 1);
    }
}
