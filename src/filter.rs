// Predicates over single records plus the linear selection pass.
use crate::model::{MatchList, OfferRecord};

/// Boolean test applied to one offer record to decide inclusion in results.
pub trait OfferPredicate {
    fn matches(&self, record: &OfferRecord) -> bool;
}

impl<F> OfferPredicate for F
where
    F: Fn(&OfferRecord) -> bool,
{
    fn matches(&self, record: &OfferRecord) -> bool {
        self(record)
    }
}

/// Fixture query: home, away and date substrings, all three required.
/// Substring containment, case-sensitive.
#[derive(Debug, Clone)]
pub struct FixtureQuery {
    pub home_contains: String,
    pub away_contains: String,
    pub date_contains: String,
}

impl FixtureQuery {
    pub fn new(home_contains: &str, away_contains: &str, date_contains: &str) -> Self {
        Self {
            home_contains: home_contains.to_string(),
            away_contains: away_contains.to_string(),
            date_contains: date_contains.to_string(),
        }
    }
}

impl OfferPredicate for FixtureQuery {
    fn matches(&self, record: &OfferRecord) -> bool {
        record.get("away_team_name").contains(&self.away_contains)
            && record.get("home_team_name").contains(&self.home_contains)
            && record.get("date_start").contains(&self.date_contains)
    }
}

/// Venue-pair query: one home substring plus any of several away alternatives.
#[derive(Debug, Clone)]
pub struct VenuePairQuery {
    pub home_contains: String,
    pub away_contains_any: Vec<String>,
}

impl VenuePairQuery {
    pub fn new(home_contains: &str, away_contains_any: &[&str]) -> Self {
        Self {
            home_contains: home_contains.to_string(),
            away_contains_any: away_contains_any.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl OfferPredicate for VenuePairQuery {
    fn matches(&self, record: &OfferRecord) -> bool {
        let away = record.get("away_team_name");
        record.get("home_team_name").contains(&self.home_contains)
            && self.away_contains_any.iter().any(|alt| away.contains(alt))
    }
}

/// Evaluates the predicate against each record in order, one linear pass.
/// Relative order of matched records is preserved.
pub fn select_matches<P: OfferPredicate>(records: &[OfferRecord], predicate: &P) -> MatchList {
    let mut matches = MatchList::new();
    for record in records {
        if predicate.matches(record) {
            matches.push(record.clone());
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn record(pairs: &[(&str, &str)]) -> OfferRecord {
        let fields: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        OfferRecord::new(fields)
    }

    #[test]
    fn fixture_query_requires_all_three_substrings() {
        let query = FixtureQuery::new("Dortmund", "Bayern", "2026-02-28");

        let hit = record(&[
            ("home_team_name", "Borussia Dortmund"),
            ("away_team_name", "FC Bayern München"),
            ("date_start", "2026-02-28T15:30:00"),
        ]);
        assert!(query.matches(&hit));

        let wrong_date = record(&[
            ("home_team_name", "Borussia Dortmund"),
            ("away_team_name", "FC Bayern München"),
            ("date_start", "2026-03-07T15:30:00"),
        ]);
        assert!(!query.matches(&wrong_date));

        let teams_swapped = record(&[
            ("home_team_name", "FC Bayern München"),
            ("away_team_name", "Borussia Dortmund"),
            ("date_start", "2026-02-28T15:30:00"),
        ]);
        assert!(!query.matches(&teams_swapped));
    }

    #[test]
    fn fixture_query_is_case_sensitive() {
        let query = FixtureQuery::new("Dortmund", "Bayern", "2026-02-28");
        let lowercased = record(&[
            ("home_team_name", "borussia dortmund"),
            ("away_team_name", "fc bayern münchen"),
            ("date_start", "2026-02-28T15:30:00"),
        ]);
        assert!(!query.matches(&lowercased));
    }

    #[test]
    fn venue_pair_query_accepts_either_away_alternative() {
        let query = VenuePairQuery::new("Liverpool", &["Wolverhampton", "Wolves"]);

        let first_alt = record(&[
            ("home_team_name", "Liverpool FC"),
            ("away_team_name", "Wolverhampton Wanderers"),
        ]);
        assert!(query.matches(&first_alt));

        let second_alt = record(&[
            ("home_team_name", "Liverpool FC"),
            ("away_team_name", "Wolves"),
        ]);
        assert!(query.matches(&second_alt));

        let neither = record(&[
            ("home_team_name", "Arsenal"),
            ("away_team_name", "Chelsea"),
        ]);
        assert!(!query.matches(&neither));
    }

    #[test]
    fn select_matches_single_record_follows_predicate() {
        let r = record(&[("home_team_name", "Liverpool FC")]);
        let records = vec![r.clone()];

        let always = |_: &OfferRecord| true;
        let selected = select_matches(&records, &always);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].get("home_team_name"), "Liverpool FC");

        let never = |_: &OfferRecord| false;
        assert!(select_matches(&records, &never).is_empty());
    }

    #[test]
    fn select_matches_preserves_input_order() {
        let records: Vec<OfferRecord> = ["a", "b", "c", "d", "e"]
            .into_iter()
            .map(|id| record(&[("productURL", id)]))
            .collect();

        let skip_middle = |r: &OfferRecord| r.get("productURL") != "c";
        let selected = select_matches(&records, &skip_middle);
        let urls: Vec<&str> = selected.iter().map(|r| r.get("productURL")).collect();
        assert_eq!(urls, vec!["a", "b", "d", "e"]);
    }

    #[test]
    fn missing_predicate_field_reads_as_empty() {
        let query = VenuePairQuery::new("Liverpool", &["Wolverhampton", "Wolves"]);
        let no_away = record(&[("home_team_name", "Liverpool FC")]);
        assert!(!query.matches(&no_away));
    }
}
