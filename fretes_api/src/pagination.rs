use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const MAX_PER_PAGE: u32 = 100;

#[derive(Deserialize, JsonSchema)]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}
fn default_per_page() -> u32 {
    20
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl Pagination {
    pub fn per_page(&self) -> u32 {
        self.per_page.clamp(1, MAX_PER_PAGE)
    }

    pub fn offset(&self) -> u32 {
        (self.page.max(1) - 1).saturating_mul(self.per_page())
    }

    pub fn paginate<T>(&self, items: impl ExactSizeIterator<Item = T>) -> PaginatedResponse<T> {
        let total = items.len();
        let per_page = self.per_page() as usize;

        PaginatedResponse {
            data: items
                .skip(self.offset() as usize)
                .take(per_page)
                .collect(),
            page: self.page.max(1) as usize,
            per_page,
            total,
            total_pages: total.div_ceil(per_page),
        }
    }
}

#[derive(Serialize, JsonSchema)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate() {
        let pagination = Pagination {
            page: 2,
            per_page: 3,
        };

        let response = pagination.paginate(1..9);

        assert_eq!(response.data, vec![4, 5, 6]);
        assert_eq!(response.total, 8);
        assert_eq!(response.total_pages, 3);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let pagination = Pagination {
            page: 5,
            per_page: 3,
        };

        let response = pagination.paginate(1..9);

        assert!(response.data.is_empty());
        assert_eq!(response.page, 5);
    }

    #[test]
    fn test_per_page_is_clamped() {
        let pagination = Pagination {
            page: 0,
            per_page: 0,
        };

        assert_eq!(pagination.per_page(), 1);
        assert_eq!(pagination.offset(), 0);
        assert_eq!(pagination.paginate(1..4).page, 1);
    }
}
