use hubdesk_complaints::error::ComplaintsServiceError;
use hubdesk_complaints::usecase::message::{ListMessagesUseCase, PostMessageUseCase};

use crate::helpers::{
    MockComplaintRepo, MockMessageRepo, MockProfileRepo, manager, student, test_complaint,
    test_profile,
};

#[tokio::test]
async fn should_keep_thread_in_chronological_order() {
    let owner = student();
    let parent = test_complaint(Some(owner.id));
    let complaints = MockComplaintRepo::new(vec![parent.clone()]);
    let messages = MockMessageRepo::default();

    let post = PostMessageUseCase {
        complaints: complaints.clone(),
        messages: messages.clone(),
    };
    post.execute(owner, parent.id, "first".to_owned(), false)
        .await
        .unwrap();
    post.execute(manager(), parent.id, "second".to_owned(), false)
        .await
        .unwrap();
    post.execute(owner, parent.id, "third".to_owned(), false)
        .await
        .unwrap();

    let list = ListMessagesUseCase {
        complaints,
        messages,
        profiles: MockProfileRepo::default(),
    };
    let thread = list.execute(owner, parent.id).await.unwrap();
    let bodies: Vec<&str> = thread.iter().map(|v| v.message.body.as_str()).collect();
    assert_eq!(bodies, ["first", "second", "third"]);
}

#[tokio::test]
async fn should_show_internal_notes_only_to_elevated_callers() {
    let owner = student();
    let triager = manager();
    let parent = test_complaint(Some(owner.id));
    let complaints = MockComplaintRepo::new(vec![parent.clone()]);
    let messages = MockMessageRepo::default();

    let post = PostMessageUseCase {
        complaints: complaints.clone(),
        messages: messages.clone(),
    };
    post.execute(owner, parent.id, "the AC is still broken".to_owned(), false)
        .await
        .unwrap();
    post.execute(triager, parent.id, "vendor quoted 2 weeks".to_owned(), true)
        .await
        .unwrap();

    let list = ListMessagesUseCase {
        complaints,
        messages,
        profiles: MockProfileRepo::default(),
    };
    assert_eq!(list.execute(owner, parent.id).await.unwrap().len(), 1);
    assert_eq!(list.execute(triager, parent.id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn should_resolve_sender_names_in_thread_views() {
    let owner = student();
    let parent = test_complaint(Some(owner.id));
    let complaints = MockComplaintRepo::new(vec![parent.clone()]);
    let messages = MockMessageRepo::default();
    let profiles = MockProfileRepo::new(vec![test_profile(owner, "Asha")]);

    PostMessageUseCase {
        complaints: complaints.clone(),
        messages: messages.clone(),
    }
    .execute(owner, parent.id, "any update?".to_owned(), false)
    .await
    .unwrap();

    let thread = ListMessagesUseCase {
        complaints,
        messages,
        profiles,
    }
    .execute(owner, parent.id)
    .await
    .unwrap();
    assert_eq!(thread[0].sender_name.as_deref(), Some("Asha"));
}

#[tokio::test]
async fn should_reject_empty_message_bodies() {
    let owner = student();
    let parent = test_complaint(Some(owner.id));
    let post = PostMessageUseCase {
        complaints: MockComplaintRepo::new(vec![parent.clone()]),
        messages: MockMessageRepo::default(),
    };
    for body in ["", "   ", "\n\t"] {
        let result = post.execute(owner, parent.id, body.to_owned(), false).await;
        assert!(matches!(
            result,
            Err(ComplaintsServiceError::EmptyMessageBody)
        ));
    }
}
