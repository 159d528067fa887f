use serde::{Deserialize, Serialize};

use super::AccountRecord;

/// Page numbers extracted from the `Link` response header.
///
/// Any relation may be missing: `prev` on the first page, `next`/`last` on
/// the final one, or all of them when the header was absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<i64>,
}

impl PageLinks {
    /// Records `page` under the relation named `rel`. Returns `false` for
    /// relation names other than first/prev/next/last.
    pub fn set(&mut self, rel: &str, page: i64) -> bool {
        let slot = match rel {
            "first" => &mut self.first,
            "prev" => &mut self.prev,
            "next" => &mut self.next,
            "last" => &mut self.last,
            _ => return false,
        };
        *slot = Some(page);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.prev.is_none() && self.next.is_none() && self.last.is_none()
    }
}

/// A single fetched page: records plus the pagination metadata from headers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageResponse {
    pub data: Vec<AccountRecord>,
    /// Value of `X-Total-Count`. `None` when the header was missing or not an integer.
    pub total: Option<i64>,
    pub links: PageLinks,
}
