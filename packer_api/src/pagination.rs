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

impl Pagination {
    pub fn limit(&self) -> u32 {
        self.per_page.clamp(1, MAX_PER_PAGE)
    }

    pub fn offset(&self) -> u32 {
        (self.page.max(1) - 1).saturating_mul(self.limit())
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

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, pagination: &Pagination, total: usize) -> Self {
        let per_page = pagination.limit() as usize;
        PaginatedResponse {
            data,
            page: pagination.page.max(1) as usize,
            per_page,
            total,
            total_pages: total.div_ceil(per_page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_offset() {
        let pagination = Pagination {
            page: 3,
            per_page: 20,
        };
        assert_eq!(pagination.offset(), 40);

        let pagination = Pagination {
            page: 0,
            per_page: 500,
        };
        assert_eq!(pagination.limit(), 100);
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn test_paginated_response_total_pages() {
        let pagination = Pagination {
            page: 1,
            per_page: 20,
        };

        assert_eq!(PaginatedResponse::<u32>::new(vec![], &pagination, 0).total_pages, 0);
        assert_eq!(PaginatedResponse::<u32>::new(vec![], &pagination, 20).total_pages, 1);
        assert_eq!(PaginatedResponse::<u32>::new(vec![], &pagination, 41).total_pages, 3);
    }
}
