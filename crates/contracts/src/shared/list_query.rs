//! Search + pagination over in-memory record arrays.

use serde::{Deserialize, Serialize};

/// Records that can be found by the list search box.
pub trait Searchable {
    /// Values of the fields the search box looks at.
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match, OR-combined across the fields.
    /// An empty filter matches everything.
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.search_fields()
            .iter()
            .any(|value| value.to_lowercase().contains(&needle))
    }
}

/// Query state of a list view: search text and the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub query: String,
    /// 0-based
    pub page: usize,
    pub page_size: usize,
}

impl ListQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            page: 0,
            page_size: page_size.max(1),
        }
    }

    /// Any change of the search text starts over from the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 0;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }
}

/// Result of applying a [`ListQuery`] to a record array.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    /// Number of records that matched the search
    pub total_count: usize,
    pub total_pages: usize,
    /// Page actually shown (clamped to the last page)
    pub page: usize,
}

pub fn filter_records<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    records.iter().filter(|r| r.matches_filter(query)).collect()
}

pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    if total_count == 0 {
        1
    } else {
        total_count.div_ceil(page_size)
    }
}

/// Filter, then slice `page * size .. page * size + size`.
pub fn paginate<T: Searchable + Clone>(records: &[T], query: &ListQuery) -> ListPage<T> {
    let matched = filter_records(records, &query.query);
    let total_count = matched.len();
    let page_size = query.page_size.max(1);
    let total_pages = total_pages(total_count, page_size);
    let page = query.page.min(total_pages - 1);
    let start = page * page_size;
    let end = (start + page_size).min(total_count);
    let items = matched
        .get(start..end)
        .unwrap_or(&[])
        .iter()
        .map(|r| (*r).clone())
        .collect();
    ListPage {
        items,
        total_count,
        total_pages,
        page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
        city: String,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_str(), self.city.as_str()]
        }
    }

    fn rows(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| Row {
                name: if i % 2 == 0 {
                    format!("Alpha {}", i)
                } else {
                    format!("Beta {}", i)
                },
                city: if i % 3 == 0 { "Pune".into() } else { "Delhi".into() },
            })
            .collect()
    }

    #[test]
    fn test_filter_is_case_insensitive_and_or_combined() {
        let data = rows(6);
        // "pune" only appears in city, "alpha" only in name
        assert_eq!(filter_records(&data, "PUNE").len(), 2);
        assert_eq!(filter_records(&data, "alpha").len(), 3);
        assert_eq!(filter_records(&data, "").len(), 6);
        assert_eq!(filter_records(&data, "nowhere").len(), 0);
    }

    #[test]
    fn test_filter_whitespace_is_part_of_the_needle() {
        let data = rows(6);
        assert_eq!(filter_records(&data, "pune ").len(), 0);
        assert_eq!(filter_records(&data, "a 4").len(), 1);
    }

    #[test]
    fn test_pages_before_last_are_full_and_last_has_remainder() {
        let data = rows(20);
        // "alpha" matches k = 10 rows, p = 3
        let k = 10;
        let p = 3;
        let mut q = ListQuery::new(p);
        q.set_query("alpha");
        let last = (k - 1) / p;
        for page in 0..last {
            q.set_page(page);
            assert_eq!(paginate(&data, &q).items.len(), p);
        }
        q.set_page(last);
        let result = paginate(&data, &q);
        assert_eq!(result.items.len(), p.min(k - last * p));
        assert_eq!(result.total_count, k);
        assert_eq!(result.total_pages, 4);
    }

    #[test]
    fn test_set_query_resets_page() {
        let mut q = ListQuery::new(5);
        q.set_page(3);
        q.set_query("x");
        assert_eq!(q.page, 0);
        q.set_page(2);
        q.set_page_size(10);
        assert_eq!(q.page, 0);
    }

    #[test]
    fn test_page_past_end_is_clamped() {
        let data = rows(4);
        let mut q = ListQuery::new(3);
        q.set_page(9);
        let result = paginate(&data, &q);
        assert_eq!(result.page, 1);
        assert_eq!(result.items.len(), 1);
    }

    #[test]
    fn test_empty_result_has_one_page() {
        let data = rows(4);
        let mut q = ListQuery::new(3);
        q.set_query("zzz");
        let result = paginate(&data, &q);
        assert!(result.items.is_empty());
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.page, 0);
    }
}
