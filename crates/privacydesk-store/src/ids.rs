//! Request id generation.

use privacydesk_core::constants::ID_SUFFIX_FLOOR;
use privacydesk_core::request::{PrivacyRequest, RequestId};

/// Next id: numeric suffix of the highest existing id, floored at
/// [`ID_SUFFIX_FLOOR`], plus one. Monotonic and collision-free as long as
/// every id follows the `REQ-<digits>` convention; ids with larger numbers
/// embedded in non-standard formats still count toward the maximum, so the
/// generator never steps backwards onto them.
pub fn next_request_id(existing: &[PrivacyRequest]) -> RequestId {
    let max = existing
        .iter()
        .map(|r| r.id.numeric_suffix())
        .fold(ID_SUFFIX_FLOOR, u64::max);
    RequestId::from_number(max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use privacydesk_core::request::{RequestKind, RequestStatus, Requester};

    fn request_with_id(id: &str) -> PrivacyRequest {
        let now = Utc::now();
        PrivacyRequest {
            id: RequestId::from(id),
            kind: RequestKind::Access,
            requester: Requester {
                name: "n".to_string(),
                email: "n@example.com".to_string(),
                country: None,
            },
            submitted_at: now,
            due_at: now,
            status: RequestStatus::New,
            owner: None,
            notes: vec![],
            attachments: vec![],
            history: vec![],
        }
    }

    #[test]
    fn empty_collection_starts_above_the_floor() {
        assert_eq!(next_request_id(&[]).as_str(), "REQ-1001");
    }

    #[test]
    fn ignores_order_and_takes_the_max() {
        let existing = vec![
            request_with_id("REQ-1042"),
            request_with_id("REQ-1007"),
            request_with_id("REQ-1033"),
        ];
        assert_eq!(next_request_id(&existing).as_str(), "REQ-1043");
    }

    #[test]
    fn nonstandard_ids_still_bound_the_sequence() {
        let existing = vec![request_with_id("import-2000-x")];
        assert_eq!(next_request_id(&existing).as_str(), "REQ-2001");
    }
}
