use serde::{Deserialize, Serialize};

pub type ManufacturerId = i64;

/// Persisted manufacturer record.
///
/// `id` is `None` until the store assigns one. `deleted` marks a soft-deleted
/// record; nothing is ever removed physically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: Option<ManufacturerId>,
    pub name: String,
    pub description: String,
    pub phone_number: String,
    #[serde(default)]
    pub deleted: bool,
}

/// Caller-facing view of a manufacturer. Carries no deletion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufacturerDto {
    pub id: Option<ManufacturerId>,
    pub name: String,
    pub description: String,
    pub phone_number: String,
}

impl ManufacturerDto {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            phone_number: phone_number.into(),
        }
    }
}

/// Record predicate handed to the store when listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManufacturerFilter {
    All,
    NotDeleted,
}

impl ManufacturerFilter {
    pub fn is_not_deleted() -> Self {
        ManufacturerFilter::NotDeleted
    }

    pub fn matches(&self, manufacturer: &Manufacturer) -> bool {
        match self {
            ManufacturerFilter::All => true,
            ManufacturerFilter::NotDeleted => !manufacturer.deleted,
        }
    }
}

/// Zero-based page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

impl PageRequest {
    pub fn of(page: i64, size: i64) -> Self {
        Self { page, size }
    }

    /// Saturates on overflow.
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub page: i64,
    pub size: i64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: i64) -> Self {
        Self {
            content,
            total_elements,
            page: request.page,
            size: request.size,
        }
    }

    pub fn total_pages(&self) -> i64 {
        if self.size <= 0 {
            return 0;
        }
        (self.total_elements + self.size - 1) / self.size
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            page: self.page,
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manufacturer(deleted: bool) -> Manufacturer {
        Manufacturer {
            id: Some(1),
            name: "Bosch".to_string(),
            description: "Home appliances".to_string(),
            phone_number: "+4971140400".to_string(),
            deleted,
        }
    }

    #[test]
    fn not_deleted_filter_rejects_deleted_records() {
        let filter = ManufacturerFilter::is_not_deleted();
        assert!(filter.matches(&manufacturer(false)));
        assert!(!filter.matches(&manufacturer(true)));
    }

    #[test]
    fn all_filter_accepts_everything() {
        assert!(ManufacturerFilter::All.matches(&manufacturer(true)));
        assert!(ManufacturerFilter::All.matches(&manufacturer(false)));
    }

    #[test]
    fn page_request_offset_is_zero_based() {
        assert_eq!(PageRequest::of(0, 10).offset(), 0);
        assert_eq!(PageRequest::of(3, 25).offset(), 75);
    }

    #[test]
    fn offset_saturates_for_huge_pages() {
        assert_eq!(PageRequest::of(i64::MAX, 100).offset(), i64::MAX);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page: Page<u8> = Page::new(vec![], PageRequest::of(0, 10), 21);
        assert_eq!(page.total_pages(), 3);

        let empty: Page<u8> = Page::new(vec![], PageRequest::of(0, 10), 0);
        assert_eq!(empty.total_pages(), 0);
    }

    #[test]
    fn map_keeps_order_and_totals() {
        let page = Page::new(vec![1, 2, 3], PageRequest::of(1, 3), 7);
        let mapped = page.map(|n| n * 10);

        assert_eq!(mapped.content, vec![10, 20, 30]);
        assert_eq!(mapped.total_elements, 7);
        assert_eq!(mapped.page, 1);
        assert_eq!(mapped.size, 3);
    }

    #[test]
    fn deleted_defaults_to_false_when_absent() {
        let record: Manufacturer = serde_json::from_str(
            r#"{"id": 5, "name": "Miele", "description": "d", "phone_number": "+49524189"}"#,
        )
        .expect("valid json");
        assert!(!record.deleted);
    }
}
