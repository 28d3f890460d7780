//! Full complaint lifecycle across roles: submit, triage, converse, resolve.

use hubdesk_complaints::domain::types::{ComplaintFilter, ComplaintSortBy};
use hubdesk_complaints::error::ComplaintsServiceError;
use hubdesk_complaints::usecase::complaint::{
    AssignComplaintUseCase, ComplaintDraft, CreateComplaintUseCase, GetComplaintUseCase,
    ListComplaintsUseCase, UpdateStatusUseCase,
};
use hubdesk_complaints::usecase::message::{ListMessagesUseCase, PostMessageUseCase};
use hubdesk_complaints::usecase::profile::{EnsureProfileInput, EnsureProfileUseCase};
use hubdesk_domain::complaint::{Category, Priority, Status};
use hubdesk_domain::pagination::PageRequest;
use hubdesk_domain::role::Role;

use crate::helpers::{
    MockAuditRepo, MockComplaintRepo, MockMessageRepo, MockProfileRepo, manager, student,
    test_profile,
};

#[tokio::test]
async fn student_and_manager_walk_a_complaint_to_resolution() {
    let asha = student();
    let ravi = manager();
    let profiles = MockProfileRepo::new(vec![test_profile(ravi, "Ravi")]);
    let complaints = MockComplaintRepo::default();
    let messages = MockMessageRepo::default();
    let audit = MockAuditRepo::default();

    // Asha onboards and files a complaint.
    let profile = EnsureProfileUseCase {
        profiles: profiles.clone(),
    }
    .execute(
        asha,
        EnsureProfileInput {
            name: "Asha".to_owned(),
            hub: Some("Kochi Hub".to_owned()),
        },
    )
    .await
    .unwrap();
    assert_eq!(profile.role, Role::Student);

    let complaint = CreateComplaintUseCase {
        complaints: complaints.clone(),
    }
    .execute(
        asha,
        ComplaintDraft {
            title: "No drinking water on floor 2".to_owned(),
            description: "The water dispenser on the second floor has been empty for days."
                .to_owned(),
            category: Category::Facilities,
            hub: "Kochi Hub".to_owned(),
            room: None,
            priority: Priority::High,
            is_anonymous: false,
            sla_due_at: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(complaint.status, Status::New);

    // Ravi sees it on the dashboard and takes it.
    let dashboard = ListComplaintsUseCase {
        complaints: complaints.clone(),
        profiles: profiles.clone(),
    }
    .execute(
        ravi,
        ComplaintFilter::default(),
        ComplaintSortBy::default(),
        PageRequest::default(),
    )
    .await
    .unwrap();
    assert_eq!(dashboard.len(), 1);
    assert_eq!(dashboard[0].submitter_name.as_deref(), Some("Asha"));

    UpdateStatusUseCase {
        complaints: complaints.clone(),
        audit: audit.clone(),
    }
    .execute(ravi, complaint.id, Status::Acknowledged)
    .await
    .unwrap();
    AssignComplaintUseCase {
        complaints: complaints.clone(),
        audit: audit.clone(),
    }
    .execute(ravi, complaint.id, Some(ravi.id))
    .await
    .unwrap();

    // Conversation: one public reply, one internal note.
    let post = PostMessageUseCase {
        complaints: complaints.clone(),
        messages: messages.clone(),
    };
    post.execute(
        ravi,
        complaint.id,
        "Refill scheduled for tomorrow.".to_owned(),
        false,
    )
    .await
    .unwrap();
    post.execute(
        ravi,
        complaint.id,
        "supplier was late on the last two orders".to_owned(),
        true,
    )
    .await
    .unwrap();
    post.execute(asha, complaint.id, "Thanks, will check.".to_owned(), false)
        .await
        .unwrap();

    // Asha reads the thread without the internal note.
    let thread = ListMessagesUseCase {
        complaints: complaints.clone(),
        messages: messages.clone(),
        profiles: profiles.clone(),
    }
    .execute(asha, complaint.id)
    .await
    .unwrap();
    assert_eq!(thread.len(), 2);
    assert!(thread.iter().all(|v| !v.message.is_internal));
    assert_eq!(thread[0].sender_name.as_deref(), Some("Ravi"));

    // Resolution, visible to the submitter.
    UpdateStatusUseCase {
        complaints: complaints.clone(),
        audit: audit.clone(),
    }
    .execute(ravi, complaint.id, Status::Resolved)
    .await
    .unwrap();

    let view = GetComplaintUseCase {
        complaints: complaints.clone(),
        profiles: profiles.clone(),
    }
    .execute(asha, complaint.id)
    .await
    .unwrap();
    assert_eq!(view.complaint.status, Status::Resolved);
    assert_eq!(view.manager_name.as_deref(), Some("Ravi"));

    // Another student never sees any of it.
    let other = student();
    assert!(matches!(
        GetComplaintUseCase {
            complaints: complaints.clone(),
            profiles: profiles.clone(),
        }
        .execute(other, complaint.id)
        .await,
        Err(ComplaintsServiceError::ComplaintNotFound)
    ));
    let empty = ListComplaintsUseCase {
        complaints,
        profiles,
    }
    .execute(
        other,
        ComplaintFilter::default(),
        ComplaintSortBy::default(),
        PageRequest::default(),
    )
    .await
    .unwrap();
    assert!(empty.is_empty());

    // Every triage action left an audit entry.
    let actions: Vec<String> = audit
        .entries
        .lock()
        .unwrap()
        .iter()
        .map(|e| e.action.clone())
        .collect();
    assert_eq!(
        actions,
        [
            "complaint.status_updated",
            "complaint.assigned",
            "complaint.status_updated"
        ]
    );
}
