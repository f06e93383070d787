//! PostgREST query construction
//!
//! Builds the `?select=...&order=...` part of a table read. Kept free of any
//! HTTP types so the exact wire form can be checked in tests.

use std::fmt::{Display, Formatter};

/// Sort direction for an `order=` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Asc => write!(f, "asc"),
            Direction::Desc => write!(f, "desc"),
        }
    }
}

/// Window over an unbounded result set. `limit: None` fetches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: Option<u32>,
    pub offset: u32,
}

impl PageRequest {
    /// Unbounded request, the behaviour when no page size is configured.
    pub const fn all() -> Self {
        Self {
            limit: None,
            offset: 0,
        }
    }

    /// First page of the given size. A size of zero means unbounded.
    pub fn first(page_size: Option<u32>) -> Self {
        Self {
            limit: page_size.filter(|size| *size > 0),
            offset: 0,
        }
    }

    pub fn is_paged(&self) -> bool {
        self.limit.is_some()
    }

    /// The following page, or `None` when unpaged.
    pub fn next(&self) -> Option<Self> {
        self.limit.map(|limit| Self {
            limit: Some(limit),
            offset: self.offset.saturating_add(limit),
        })
    }

    /// The preceding page, or `None` when already at the start or unpaged.
    pub fn previous(&self) -> Option<Self> {
        match self.limit {
            Some(limit) if self.offset > 0 => Some(Self {
                limit: Some(limit),
                offset: self.offset.saturating_sub(limit),
            }),
            _ => None,
        }
    }

    /// One-based page number, for display.
    pub fn number(&self) -> u32 {
        match self.limit {
            Some(limit) => self.offset / limit + 1,
            None => 1,
        }
    }
}

/// A single read against one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    table: &'static str,
    columns: &'static str,
    filters: Vec<(&'static str, String)>,
    order: Option<(&'static str, Direction)>,
    page: PageRequest,
}

impl Query {
    pub fn table(table: &'static str) -> Self {
        Self {
            table,
            columns: "*",
            filters: Vec::new(),
            order: None,
            page: PageRequest::all(),
        }
    }

    pub fn select(mut self, columns: &'static str) -> Self {
        self.columns = columns;
        self
    }

    /// Adds an equality filter, `column=eq.value`.
    pub fn eq(mut self, column: &'static str, value: &str) -> Self {
        self.filters.push((column, value.to_string()));
        self
    }

    pub fn order(mut self, column: &'static str, direction: Direction) -> Self {
        self.order = Some((column, direction));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.page.limit = Some(limit);
        self
    }

    pub fn page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }

    pub fn table_name(&self) -> &'static str {
        self.table
    }

    /// Renders the query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut parts = vec![format!("select={}", urlencoding::encode(self.columns))];
        for (column, value) in &self.filters {
            parts.push(format!("{}=eq.{}", column, urlencoding::encode(value)));
        }
        if let Some((column, direction)) = self.order {
            parts.push(format!("order={}.{}", column, direction));
        }
        if let Some(limit) = self.page.limit {
            parts.push(format!("limit={}", limit));
        }
        if self.page.offset > 0 {
            parts.push(format!("offset={}", self.page.offset));
        }
        parts.join("&")
    }
}
