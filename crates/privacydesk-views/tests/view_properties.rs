//! Property tests: sort idempotence, pagination round-trip, filter
//! conjunction, export determinism.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use privacydesk_core::request::{
    PrivacyRequest, RequestId, RequestKind, RequestStatus, Requester,
};
use privacydesk_views::{
    export, filter::RequestFilter, paging::Page, sort, SortField, SortKey,
};

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

prop_compose! {
    fn arb_request()(
        suffix in 1_001u64..9_999,
        kind_idx in 0usize..4,
        status_idx in 0usize..5,
        owner_idx in 0usize..4,
        submitted_offset_hours in 0i64..2_000,
        sla_days in 1i64..60,
    ) -> PrivacyRequest {
        let owners = ["Alex", "Priya", "Jordan", "Sam"];
        let submitted_at = base_time() + Duration::hours(submitted_offset_hours);
        PrivacyRequest {
            id: RequestId::from_number(suffix),
            kind: RequestKind::ALL[kind_idx],
            requester: Requester {
                name: format!("Subject {suffix}"),
                email: format!("subject{suffix}@example.com"),
                country: None,
            },
            submitted_at,
            due_at: submitted_at + Duration::days(sla_days),
            status: RequestStatus::ALL[status_idx],
            owner: (owner_idx > 0).then(|| owners[owner_idx].to_string()),
            notes: vec![],
            attachments: vec![],
            history: vec![],
        }
    }
}

fn arb_requests() -> impl Strategy<Value = Vec<PrivacyRequest>> {
    prop::collection::vec(arb_request(), 0..40)
}

proptest! {
    #[test]
    fn prop_sort_is_idempotent(requests in arb_requests()) {
        let keys = [
            SortKey::asc(SortField::Status),
            SortKey::desc(SortField::SubmittedAt),
            SortKey::asc(SortField::Id),
        ];
        let once = sort::sorted(&requests, &keys);
        let twice = sort::sorted(&once, &keys);
        let once_ids: Vec<&str> = once.iter().map(|r| r.id.as_str()).collect();
        let twice_ids: Vec<&str> = twice.iter().map(|r| r.id.as_str()).collect();
        prop_assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn prop_sorted_output_is_ordered(requests in arb_requests()) {
        let keys = [SortKey::asc(SortField::DueAt), SortKey::asc(SortField::Id)];
        let sorted = sort::sorted(&requests, &keys);
        for pair in sorted.windows(2) {
            prop_assert!(sort::compare(&pair[0], &pair[1], &keys) != std::cmp::Ordering::Greater);
        }
    }

    #[test]
    fn prop_pagination_round_trips(
        requests in arb_requests(),
        take in 1usize..10,
    ) {
        let sorted = sort::sorted(&requests, &[SortKey::asc(SortField::Id)]);
        let mut rebuilt: Vec<PrivacyRequest> = Vec::new();
        let mut skip = 0;
        loop {
            let chunk = Page::new(skip, take).slice(&sorted);
            if chunk.is_empty() {
                break;
            }
            rebuilt.extend_from_slice(chunk);
            skip += take;
        }
        prop_assert_eq!(rebuilt.len(), sorted.len());
        for (a, b) in rebuilt.iter().zip(sorted.iter()) {
            prop_assert_eq!(&a.id, &b.id);
        }
    }

    #[test]
    fn prop_filter_is_the_conjunction_of_its_predicates(
        requests in arb_requests(),
        kind_idx in 0usize..5,
        status_idx in 0usize..6,
        pick_owner in any::<bool>(),
        needle in "[a-z0-9]{0,4}",
    ) {
        // Index 4 / 5 = predicate inactive.
        let filter = RequestFilter {
            kind: RequestKind::ALL.get(kind_idx).copied(),
            status: RequestStatus::ALL.get(status_idx).copied(),
            owners: if pick_owner {
                ["Alex".to_string(), "Jordan".to_string()].into_iter().collect()
            } else {
                Default::default()
            },
            submitted_from: None,
            submitted_to: None,
            email_contains: if needle.is_empty() { None } else { Some(needle.clone()) },
        };

        for request in &requests {
            let kind_ok = filter.kind.map_or(true, |k| request.kind == k);
            let status_ok = filter.status.map_or(true, |s| request.status == s);
            let owner_ok = filter.owners.is_empty()
                || request
                    .owner
                    .as_ref()
                    .is_some_and(|o| filter.owners.contains(o));
            let email_ok = filter.email_contains.as_ref().map_or(true, |n| {
                request.requester.email.to_lowercase().contains(&n.to_lowercase())
            });
            prop_assert_eq!(
                filter.matches(request),
                kind_ok && status_ok && owner_ok && email_ok,
                "conjunction mismatch for {}",
                request.id
            );
        }
    }

    #[test]
    fn prop_export_is_deterministic(request in arb_request()) {
        let a = export::export_case(&request).unwrap();
        let b = export::export_case(&request).unwrap();
        prop_assert_eq!(a, b);

        let value = serde_json::to_value(&request).unwrap();
        prop_assert_eq!(
            export::canonical_json(&value),
            export::export_case(&request).unwrap(),
            "value-level and record-level encodings agree"
        );
    }
}
