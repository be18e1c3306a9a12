//! Multi-field sorting with typed accessors per sortable column.

use std::cmp::Ordering;

use privacydesk_core::request::PrivacyRequest;

/// The sortable columns. Each maps to a typed comparison, not to runtime
/// field-path reflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Kind,
    Status,
    Owner,
    SubmittedAt,
    DueAt,
    RequesterName,
    RequesterEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

/// One sort key; a grid column header click produces one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub direction: Direction,
}

impl SortKey {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: Direction::Ascending,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: Direction::Descending,
        }
    }
}

fn compare_by(field: SortField, a: &PrivacyRequest, b: &PrivacyRequest) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Kind => a.kind.cmp(&b.kind),
        SortField::Status => a.status.cmp(&b.status),
        SortField::Owner => a.owner.cmp(&b.owner),
        SortField::SubmittedAt => a.submitted_at.cmp(&b.submitted_at),
        SortField::DueAt => a.due_at.cmp(&b.due_at),
        SortField::RequesterName => a.requester.name.cmp(&b.requester.name),
        SortField::RequesterEmail => a.requester.email.cmp(&b.requester.email),
    }
}

/// Chained comparison: the first key that differs decides.
pub fn compare(a: &PrivacyRequest, b: &PrivacyRequest, keys: &[SortKey]) -> Ordering {
    for key in keys {
        let ord = match key.direction {
            Direction::Ascending => compare_by(key.field, a, b),
            Direction::Descending => compare_by(key.field, a, b).reverse(),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Stable in-place multi-key sort; rows tied on every key keep their
/// input order.
pub fn sort_requests(requests: &mut [PrivacyRequest], keys: &[SortKey]) {
    requests.sort_by(|a, b| compare(a, b, keys));
}

/// Sorted copy, for callers holding a shared snapshot.
pub fn sorted(requests: &[PrivacyRequest], keys: &[SortKey]) -> Vec<PrivacyRequest> {
    let mut out = requests.to_vec();
    sort_requests(&mut out, keys);
    out
}
