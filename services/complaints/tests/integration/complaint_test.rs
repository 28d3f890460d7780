use hubdesk_complaints::domain::types::{ComplaintFilter, ComplaintSortBy};
use hubdesk_complaints::error::ComplaintsServiceError;
use hubdesk_complaints::usecase::complaint::{
    AssignComplaintUseCase, ComplaintDraft, CreateComplaintUseCase, GetComplaintUseCase,
    ListComplaintsUseCase, UpdateStatusUseCase,
};
use hubdesk_domain::complaint::{Category, Priority, Status};
use hubdesk_domain::pagination::{PageRequest, Sort};

use crate::helpers::{
    MockAuditRepo, MockComplaintRepo, MockProfileRepo, manager, student, test_complaint,
};

fn draft(title: &str) -> ComplaintDraft {
    ComplaintDraft {
        title: title.to_owned(),
        description: "The projector in the seminar hall shuts down every few minutes.".to_owned(),
        category: Category::Equipment,
        hub: "Trivandrum Hub".to_owned(),
        room: None,
        priority: Priority::High,
        is_anonymous: false,
        sla_due_at: None,
    }
}

// ── Create ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_complaint_with_boundary_length_title() {
    let caller = student();
    let usecase = CreateComplaintUseCase {
        complaints: MockComplaintRepo::default(),
    };

    // 200 characters is the inclusive maximum.
    let max_title = "t".repeat(200);
    usecase.execute(caller, draft(&max_title)).await.unwrap();

    let too_long = "t".repeat(201);
    let result = usecase.execute(caller, draft(&too_long)).await;
    assert!(matches!(result, Err(ComplaintsServiceError::InvalidTitle)));
}

#[tokio::test]
async fn should_count_title_length_in_characters_not_bytes() {
    let caller = student();
    let usecase = CreateComplaintUseCase {
        complaints: MockComplaintRepo::default(),
    };
    // Five multibyte characters, far more than five bytes.
    usecase.execute(caller, draft("환기가안됨")).await.unwrap();
}

// ── List filtering ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_filter_complaints_by_status_and_hub() {
    let mut resolved = test_complaint(Some(student().id));
    resolved.status = Status::Resolved;
    let mut other_hub = test_complaint(Some(student().id));
    other_hub.hub = "Calicut Hub".to_owned();
    let open = test_complaint(Some(student().id));

    let usecase = ListComplaintsUseCase {
        complaints: MockComplaintRepo::new(vec![resolved.clone(), other_hub.clone(), open.clone()]),
        profiles: MockProfileRepo::default(),
    };

    let by_status = usecase
        .execute(
            manager(),
            ComplaintFilter {
                status: Some(Status::Resolved),
                ..Default::default()
            },
            ComplaintSortBy::default(),
            PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(by_status.len(), 1);
    assert_eq!(by_status[0].complaint.id, resolved.id);

    let by_hub = usecase
        .execute(
            manager(),
            ComplaintFilter {
                hub: Some("Calicut Hub".to_owned()),
                ..Default::default()
            },
            ComplaintSortBy::default(),
            PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(by_hub.len(), 1);
    assert_eq!(by_hub[0].complaint.id, other_hub.id);
}

#[tokio::test]
async fn should_search_complaints_over_title_and_description() {
    let mut projector = test_complaint(Some(student().id));
    projector.title = "Projector not working".to_owned();
    let ac = test_complaint(Some(student().id));

    let usecase = ListComplaintsUseCase {
        complaints: MockComplaintRepo::new(vec![projector.clone(), ac]),
        profiles: MockProfileRepo::default(),
    };
    let found = usecase
        .execute(
            manager(),
            ComplaintFilter {
                search: Some("Projector".to_owned()),
                ..Default::default()
            },
            ComplaintSortBy::default(),
            PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].complaint.id, projector.id);
}

#[tokio::test]
async fn should_paginate_complaint_lists() {
    let mut rows = vec![];
    let base = chrono::Utc::now();
    for i in 0..7 {
        let mut c = test_complaint(Some(student().id));
        c.created_at = base + chrono::Duration::seconds(i);
        rows.push(c);
    }
    let usecase = ListComplaintsUseCase {
        complaints: MockComplaintRepo::new(rows),
        profiles: MockProfileRepo::default(),
    };

    let page = |n| PageRequest {
        per_page: 3,
        page: n,
    };
    let first = usecase
        .execute(
            manager(),
            ComplaintFilter::default(),
            ComplaintSortBy::CreatedAt(Sort::Asc),
            page(1),
        )
        .await
        .unwrap();
    let third = usecase
        .execute(
            manager(),
            ComplaintFilter::default(),
            ComplaintSortBy::CreatedAt(Sort::Asc),
            page(3),
        )
        .await
        .unwrap();
    assert_eq!(first.len(), 3);
    assert_eq!(third.len(), 1);
}

#[tokio::test]
async fn should_return_empty_page_for_page_number_u32_max() {
    let usecase = ListComplaintsUseCase {
        complaints: MockComplaintRepo::new(vec![test_complaint(Some(student().id))]),
        profiles: MockProfileRepo::default(),
    };
    let found = usecase
        .execute(
            manager(),
            ComplaintFilter::default(),
            ComplaintSortBy::default(),
            PageRequest {
                per_page: 100,
                page: u32::MAX,
            },
        )
        .await
        .unwrap();
    assert!(found.is_empty());
}

// ── Status and assignment ────────────────────────────────────────────────────

#[tokio::test]
async fn should_record_audit_entries_for_status_and_assignment() {
    let row = test_complaint(Some(student().id));
    let audit = MockAuditRepo::default();
    let complaints = MockComplaintRepo::new(vec![row.clone()]);

    let caller = manager();
    UpdateStatusUseCase {
        complaints: complaints.clone(),
        audit: audit.clone(),
    }
    .execute(caller, row.id, Status::Acknowledged)
    .await
    .unwrap();

    AssignComplaintUseCase {
        complaints,
        audit: audit.clone(),
    }
    .execute(caller, row.id, Some(caller.id))
    .await
    .unwrap();

    let entries = audit.entries.lock().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].action, "complaint.status_updated");
    assert_eq!(entries[0].actor_id, Some(caller.id));
    assert_eq!(entries[1].action, "complaint.assigned");
}

#[tokio::test]
async fn should_hide_unknown_complaint_from_student_get() {
    let usecase = GetComplaintUseCase {
        complaints: MockComplaintRepo::default(),
        profiles: MockProfileRepo::default(),
    };
    let result = usecase.execute(student(), uuid::Uuid::now_v7()).await;
    assert!(matches!(
        result,
        Err(ComplaintsServiceError::ComplaintNotFound)
    ));
}
