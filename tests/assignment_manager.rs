mod common;

use rust_assignment_workflow::errors::WorkflowError;
use rust_assignment_workflow::models::assignments::entities::{AssignmentState, Grade};
use rust_assignment_workflow::models::principals::entities::Principal;
use rust_assignment_workflow::services::assignments::AssignmentManager;
use rust_assignment_workflow::storage::Storage;
use test_log::test;

fn student(student_id: i64) -> Principal {
    Principal::Student {
        user_id: student_id,
        student_id,
    }
}

fn teacher(teacher_id: i64) -> Principal {
    Principal::Teacher {
        user_id: 100 + teacher_id,
        teacher_id,
    }
}

fn principal() -> Principal {
    Principal::Principal {
        user_id: 200,
        principal_id: 1,
    }
}

async fn create_draft(storage: &dyn Storage, student_id: i64, content: &str) -> i64 {
    let txn = storage.begin().await.unwrap();
    let created = AssignmentManager::new(storage, &txn)
        .upsert(None, Some(content.to_string()), &student(student_id))
        .await
        .unwrap();
    txn.commit().await.unwrap();
    created.id
}

async fn submit(storage: &dyn Storage, id: i64, teacher_id: i64, student_id: i64) {
    let txn = storage.begin().await.unwrap();
    AssignmentManager::new(storage, &txn)
        .submit(id, teacher_id, &student(student_id))
        .await
        .unwrap();
    txn.commit().await.unwrap();
}

#[test(tokio::test)]
async fn full_lifecycle_from_draft_to_graded() {
    let storage = common::setup_storage().await;
    let storage = storage.as_ref();

    let txn = storage.begin().await.unwrap();
    let manager = AssignmentManager::new(storage, &txn);

    let created = manager
        .upsert(None, Some("essay v1".into()), &student(1))
        .await
        .unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.state, AssignmentState::Draft);
    assert_eq!(created.student_id, 1);
    assert_eq!(created.teacher_id, None);

    let edited = manager
        .upsert(Some(1), Some("essay v2".into()), &student(1))
        .await
        .unwrap();
    assert_eq!(edited.content.as_deref(), Some("essay v2"));
    assert_eq!(edited.state, AssignmentState::Draft);

    let submitted = manager.submit(1, 5, &student(1)).await.unwrap();
    assert_eq!(submitted.state, AssignmentState::Submitted);
    assert_eq!(submitted.teacher_id, Some(5));

    let graded = manager.mark_grade(1, Some("A"), &teacher(5)).await.unwrap();
    assert_eq!(graded.state, AssignmentState::Graded);
    assert_eq!(graded.grade, Some(Grade::A));

    let err = manager
        .upsert(Some(1), Some("essay v3".into()), &student(1))
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidState(_)));

    txn.commit().await.unwrap();
}

#[test(tokio::test)]
async fn submit_by_other_student_is_forbidden() {
    let storage = common::setup_storage().await;
    let storage = storage.as_ref();
    let id = create_draft(storage, 1, "essay").await;

    let txn = storage.begin().await.unwrap();
    let err = AssignmentManager::new(storage, &txn)
        .submit(id, 5, &student(2))
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::Forbidden(_)));
    txn.rollback().await.unwrap();
}

#[test(tokio::test)]
async fn submitting_twice_is_invalid_state() {
    let storage = common::setup_storage().await;
    let storage = storage.as_ref();
    let id = create_draft(storage, 1, "essay").await;
    submit(storage, id, 3, 1).await;

    let txn = storage.begin().await.unwrap();
    let err = AssignmentManager::new(storage, &txn)
        .submit(id, 3, &student(1))
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidState(_)));
}

#[test(tokio::test)]
async fn unknown_grade_is_invalid_state_for_every_role() {
    let storage = common::setup_storage().await;
    let storage = storage.as_ref();
    let id = create_draft(storage, 1, "essay").await;
    submit(storage, id, 5, 1).await;

    let txn = storage.begin().await.unwrap();
    let manager = AssignmentManager::new(storage, &txn);
    for grader in [teacher(5), principal()] {
        let err = manager.mark_grade(id, Some("Z"), &grader).await.unwrap_err();
        assert!(matches!(err, WorkflowError::InvalidState(_)));
    }
    let err = manager.mark_grade(id, None, &teacher(5)).await.unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidState(_)));
}

#[test(tokio::test)]
async fn teacher_cannot_grade_assignment_of_another_teacher() {
    let storage = common::setup_storage().await;
    let storage = storage.as_ref();
    let id = create_draft(storage, 1, "essay").await;
    submit(storage, id, 5, 1).await;

    let txn = storage.begin().await.unwrap();
    let err = AssignmentManager::new(storage, &txn)
        .mark_grade(id, Some("B"), &teacher(4))
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::Forbidden(_)));
}

#[test(tokio::test)]
async fn principal_cannot_grade_draft_but_rightful_teacher_can() {
    let storage = common::setup_storage().await;
    let storage = storage.as_ref();
    let id = create_draft(storage, 1, "essay").await;

    // 直接写入一个已指定教师的草稿
    let txn = storage.begin().await.unwrap();
    let mut draft = storage.get_assignment_by_id(&txn, id).await.unwrap().unwrap();
    draft.teacher_id = Some(5);
    storage.update_assignment(&txn, &draft).await.unwrap();
    txn.commit().await.unwrap();

    let txn = storage.begin().await.unwrap();
    let manager = AssignmentManager::new(storage, &txn);

    let err = manager
        .mark_grade(id, Some("A"), &principal())
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidState(_)));

    let graded = manager.mark_grade(id, Some("C"), &teacher(5)).await.unwrap();
    assert_eq!(graded.state, AssignmentState::Graded);
    assert_eq!(graded.grade, Some(Grade::C));
    txn.commit().await.unwrap();
}

#[test(tokio::test)]
async fn principal_can_regrade_graded_assignment() {
    let storage = common::setup_storage().await;
    let storage = storage.as_ref();
    let id = create_draft(storage, 2, "lab report").await;
    submit(storage, id, 1, 2).await;

    let txn = storage.begin().await.unwrap();
    let manager = AssignmentManager::new(storage, &txn);
    manager.mark_grade(id, Some("B"), &principal()).await.unwrap();
    let regraded = manager.mark_grade(id, Some("D"), &principal()).await.unwrap();
    assert_eq!(regraded.state, AssignmentState::Graded);
    assert_eq!(regraded.grade, Some(Grade::D));
    txn.commit().await.unwrap();
}

#[test(tokio::test)]
async fn missing_assignment_is_not_found() {
    let storage = common::setup_storage().await;
    let storage = storage.as_ref();

    let txn = storage.begin().await.unwrap();
    let manager = AssignmentManager::new(storage, &txn);

    let err = manager.submit(42, 1, &student(1)).await.unwrap_err();
    assert!(matches!(err, WorkflowError::NotFound(_)));
    let err = manager
        .mark_grade(42, Some("A"), &principal())
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::NotFound(_)));
    let err = manager
        .upsert(Some(42), Some("text".into()), &student(1))
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::NotFound(_)));
}

#[test(tokio::test)]
async fn empty_content_is_rejected_before_any_write() {
    let storage = common::setup_storage().await;
    let storage = storage.as_ref();

    let txn = storage.begin().await.unwrap();
    let manager = AssignmentManager::new(storage, &txn);
    for content in [None, Some(String::new())] {
        let err = manager.upsert(None, content, &student(1)).await.unwrap_err();
        assert!(matches!(err, WorkflowError::InvalidState(_)));
    }
    assert!(manager.list_by_student(1).await.unwrap().is_empty());
}

#[test(tokio::test)]
async fn rolled_back_failure_leaves_row_unchanged() {
    let storage = common::setup_storage().await;
    let storage = storage.as_ref();
    let id = create_draft(storage, 1, "essay").await;
    submit(storage, id, 5, 1).await;

    let txn = storage.begin().await.unwrap();
    let before = storage.get_assignment_by_id(&txn, id).await.unwrap().unwrap();
    txn.commit().await.unwrap();

    // 先写入成绩，再因后续失败整体回滚
    let txn = storage.begin().await.unwrap();
    let manager = AssignmentManager::new(storage, &txn);
    manager.mark_grade(id, Some("A"), &teacher(5)).await.unwrap();
    let err = manager.mark_grade(id, Some("A"), &teacher(3)).await;
    assert!(err.is_err());
    txn.rollback().await.unwrap();

    let txn = storage.begin().await.unwrap();
    let after = storage.get_assignment_by_id(&txn, id).await.unwrap().unwrap();
    assert_eq!(after, before);
    assert_eq!(after.state, AssignmentState::Submitted);
    assert_eq!(after.grade, None);
}

#[test(tokio::test)]
async fn graded_submitted_lists_submitted_before_graded() {
    let storage = common::setup_storage().await;
    let storage = storage.as_ref();

    let first = create_draft(storage, 1, "a").await;
    let second = create_draft(storage, 1, "b").await;
    let third = create_draft(storage, 2, "c").await;
    let _draft = create_draft(storage, 2, "d").await;
    submit(storage, first, 5, 1).await;
    submit(storage, second, 5, 1).await;
    submit(storage, third, 4, 2).await;

    let txn = storage.begin().await.unwrap();
    let manager = AssignmentManager::new(storage, &txn);
    manager.mark_grade(first, Some("A"), &teacher(5)).await.unwrap();

    let listed = manager.list_graded_submitted().await.unwrap();
    let ids: Vec<i64> = listed.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![second, third, first]);
    assert!(listed.iter().all(|a| a.state != AssignmentState::Draft));

    assert_eq!(manager.list_by_teacher(5).await.unwrap().len(), 2);
    assert_eq!(manager.list_by_student(2).await.unwrap().len(), 2);
}

#[test(tokio::test)]
async fn teacher_regrades_own_assignment_but_not_anothers() {
    let storage = common::setup_storage().await;
    let storage = storage.as_ref();
    let id = create_draft(storage, 1, "essay").await;
    submit(storage, id, 5, 1).await;

    let txn = storage.begin().await.unwrap();
    let manager = AssignmentManager::new(storage, &txn);
    manager.mark_grade(id, Some("A"), &teacher(5)).await.unwrap();

    let regraded = manager.mark_grade(id, Some("B"), &teacher(5)).await.unwrap();
    assert_eq!(regraded.state, AssignmentState::Graded);
    assert_eq!(regraded.grade, Some(Grade::B));

    let err = manager
        .mark_grade(id, Some("D"), &teacher(4))
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::Forbidden(_)));
    txn.commit().await.unwrap();

    let txn = storage.begin().await.unwrap();
    let stored = storage.get_assignment_by_id(&txn, id).await.unwrap().unwrap();
    assert_eq!(stored.grade, Some(Grade::B));
}

#[test(tokio::test)]
async fn editing_another_students_draft_is_forbidden() {
    let storage = common::setup_storage().await;
    let storage = storage.as_ref();
    let id = create_draft(storage, 1, "essay").await;

    let txn = storage.begin().await.unwrap();
    let manager = AssignmentManager::new(storage, &txn);
    let err = manager
        .upsert(Some(id), Some("overwritten".into()), &student(2))
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::Forbidden(_)));

    let stored = storage.get_assignment_by_id(&txn, id).await.unwrap().unwrap();
    assert_eq!(stored.content.as_deref(), Some("essay"));
}

#[test(tokio::test)]
async fn submitting_to_unknown_teacher_is_not_found() {
    let storage = common::seeded_storage().await;
    let storage = storage.as_ref();
    let id = create_draft(storage, 1, "essay v1").await;

    let txn = storage.begin().await.unwrap();
    let manager = AssignmentManager::new(storage, &txn);
    let err = manager.submit(id, 5, &student(1)).await.unwrap_err();
    assert!(matches!(err, WorkflowError::NotFound(_)));
    assert!(err.is_domain_failure());
    txn.rollback().await.unwrap();

    // 启动名册中存在的教师可以正常接收
    let txn = storage.begin().await.unwrap();
    let submitted = AssignmentManager::new(storage, &txn)
        .submit(id, 2, &student(1))
        .await
        .unwrap();
    assert_eq!(submitted.teacher_id, Some(2));
    assert_eq!(submitted.state, AssignmentState::Submitted);
}

#[test(tokio::test)]
async fn creating_for_unknown_student_is_not_found() {
    let storage = common::seeded_storage().await;
    let storage = storage.as_ref();

    let txn = storage.begin().await.unwrap();
    let manager = AssignmentManager::new(storage, &txn);
    let err = manager
        .upsert(None, Some("essay".into()), &student(99))
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::NotFound(_)));
    assert!(err.is_domain_failure());
    assert!(manager.list_by_student(99).await.unwrap().is_empty());
}
