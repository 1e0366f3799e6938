//! Filtering and ordering of the dashboard's content list.

use chrono::NaiveDate;
use itertools::Itertools;
use serde::Serialize;

use crate::model::{ContentItem, ContentItemStatus};

/// Filter criteria for the content list. Every predicate is optional and
/// inactive predicates always match; active predicates combine with AND.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentQuery {
    pub category: Option<String>,
    pub status: Option<ContentItemStatus>,
    pub search: Option<String>,
    pub date: Option<NaiveDate>,
}

impl ContentQuery {
    pub fn matches(&self, item: &ContentItem) -> bool {
        let category_match = self
            .category
            .as_deref()
            .map_or(true, |category| item.category == category);
        let status_match = self.status.map_or(true, |status| item.status == status);
        let search_match = match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                item.title.to_lowercase().contains(&term)
                    || item
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&term))
            }
        };
        // An unscheduled item never matches an active date filter.
        let date_match = self
            .date
            .map_or(true, |date| item.suggested_date == Some(date));
        category_match && status_match && search_match && date_match
    }
}

/// Matching subset, ordered by suggested date descending. Items without a
/// valid suggested date sort after all dated items; ties and undated items
/// keep their input order.
pub fn filter_and_sort(items: Vec<ContentItem>, query: &ContentQuery) -> Vec<ContentItem> {
    let mut matching: Vec<ContentItem> = items
        .into_iter()
        .filter(|item| query.matches(item))
        .collect();
    matching.sort_by(|a, b| match (a.suggested_date, b.suggested_date) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    matching
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

/// Dropdown options for the category filter: the distinct categories present
/// in the collection, in first-seen order, labeled with the first letter
/// capitalized.
pub fn category_options(items: &[ContentItem]) -> Vec<CategoryOption> {
    items
        .iter()
        .map(|item| item.category.as_str())
        .filter(|category| !category.is_empty())
        .unique()
        .map(|category| CategoryOption {
            value: category.to_owned(),
            label: capitalize_first(category),
        })
        .collect()
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::content::example_data::example_content_items;
    use crate::model::ContentItemId;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn item(title: &str, category: &str, date: Option<(i32, u32, u32)>) -> ContentItem {
        let now = Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();
        ContentItem {
            id: ContentItemId::from(title),
            title: title.to_owned(),
            description: None,
            file_url: "https://example.com/file".to_owned(),
            category: category.to_owned(),
            suggested_date: date.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap()),
            status: ContentItemStatus::Draft,
            comments: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn inactive_query_keeps_all_items() {
        let items = example_content_items();
        let filtered = filter_and_sort(items.clone(), &ContentQuery::default());
        assert_eq!(filtered.len(), items.len());
        for original in &items {
            assert!(filtered.contains(original));
        }
    }

    #[test]
    fn combined_category_and_search_filter() {
        let items = vec![
            item("Tip: Optimiza tu SEO Local", "tips", Some((2024, 8, 22))),
            item("Promo Verano", "promociones", Some((2024, 8, 1))),
        ];
        let query = ContentQuery {
            category: Some("tips".to_owned()),
            search: Some("seo".to_owned()),
            ..Default::default()
        };
        let filtered = filter_and_sort(items, &query);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Tip: Optimiza tu SEO Local");
    }

    #[test]
    fn search_matches_description_case_insensitively() {
        let mut a = item("Lanzamiento", "branding", None);
        a.description = Some("Nueva página WEB".to_owned());
        let b = item("Otro post", "branding", None);
        let query = ContentQuery {
            search: Some("web".to_owned()),
            ..Default::default()
        };
        let filtered = filter_and_sort(vec![a.clone(), b], &query);
        assert_eq!(filtered, vec![a]);
    }

    #[test]
    fn date_filter_requires_same_calendar_day() {
        let dated = item("dated", "tips", Some((2024, 8, 22)));
        let other_day = item("other day", "tips", Some((2024, 8, 23)));
        let undated = item("undated", "tips", None);
        let query = ContentQuery {
            date: NaiveDate::from_ymd_opt(2024, 8, 22),
            ..Default::default()
        };
        let filtered = filter_and_sort(vec![dated.clone(), other_day, undated], &query);
        assert_eq!(filtered, vec![dated]);
    }

    #[test]
    fn sorts_dated_items_descending_with_undated_last() {
        let items = vec![
            item("undated first", "otro", None),
            item("oldest", "otro", Some((2024, 8, 1))),
            item("newest", "otro", Some((2024, 8, 22))),
            item("undated second", "otro", None),
            item("middle", "otro", Some((2024, 8, 15))),
        ];
        let sorted = filter_and_sort(items, &ContentQuery::default());
        let titles: Vec<&str> = sorted.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "newest",
                "middle",
                "oldest",
                "undated first",
                "undated second"
            ]
        );
    }

    #[test]
    fn category_options_are_distinct_and_capitalized() {
        let items = vec![
            item("a", "campañas", None),
            item("b", "tips", None),
            item("c", "tips", None),
            item("d", "branding", None),
        ];
        let options = category_options(&items);
        assert_eq!(
            options,
            vec![
                CategoryOption {
                    value: "campañas".to_owned(),
                    label: "Campañas".to_owned()
                },
                CategoryOption {
                    value: "tips".to_owned(),
                    label: "Tips".to_owned()
                },
                CategoryOption {
                    value: "branding".to_owned(),
                    label: "Branding".to_owned()
                },
            ]
        );
    }

    proptest! {
        #[test]
        fn sort_order_holds_for_arbitrary_date_mixes(
            dates in prop::collection::vec(proptest::option::of((2020i32..2030, 1u32..=12, 1u32..=28)), 0..20)
        ) {
            let items: Vec<ContentItem> = dates
                .iter()
                .enumerate()
                .map(|(i, date)| item(&format!("item {}", i), "otro", *date))
                .collect();
            let sorted = filter_and_sort(items, &ContentQuery::default());
            let first_undated = sorted
                .iter()
                .position(|i| i.suggested_date.is_none())
                .unwrap_or(sorted.len());
            // all dated items precede all undated items
            for undated in &sorted[first_undated..] {
                prop_assert!(undated.suggested_date.is_none());
            }
            // dated prefix is non-increasing
            for pair in sorted[..first_undated].windows(2) {
                prop_assert!(pair[0].suggested_date >= pair[1].suggested_date);
            }
        }
    }
}
