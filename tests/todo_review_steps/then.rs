//! Then steps for todo review BDD scenarios.

use super::world::TodoReviewWorld;
use rstest_bdd_macros::then;
use steward::todo::{
    domain::{TodoDomainError, TodoStatus},
    services::WorkflowError,
};

#[then(r#"the todo status is "{status}""#)]
fn todo_status_is(world: &TodoReviewWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TodoStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let todo = world.todo()?;
    if todo.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            todo.status().as_str()
        ));
    }
    Ok(())
}

#[then(r#"the todo is completed by "{done_by}" and reviewed by "{reviewed_by}""#)]
fn todo_completion_attribution(
    world: &TodoReviewWorld,
    done_by: String,
    reviewed_by: String,
) -> Result<(), eyre::Report> {
    let todo = world.todo()?;
    let expected_done_by = world.user(&done_by)?;
    let expected_reviewed_by = world.user(&reviewed_by)?;

    if todo.done_by() != Some(expected_done_by) {
        return Err(eyre::eyre!("expected completion by {done_by}"));
    }
    if todo.reviewed_by() != Some(expected_reviewed_by) {
        return Err(eyre::eyre!("expected review by {reviewed_by}"));
    }
    Ok(())
}

#[then("the approval fails because the actor is not the reviewer")]
fn approval_fails_not_reviewer(world: &TodoReviewWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing approval result"))?;

    if !matches!(
        result,
        Err(WorkflowError::Domain(TodoDomainError::NotReviewer))
    ) {
        return Err(eyre::eyre!("expected NotReviewer error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the review comment is "{comment}""#)]
fn review_comment_is(world: &TodoReviewWorld, comment: String) -> Result<(), eyre::Report> {
    let todo = world.todo()?;
    if todo.review_comment() != Some(comment.as_str()) {
        return Err(eyre::eyre!(
            "expected review comment {comment:?}, found {:?}",
            todo.review_comment()
        ));
    }
    Ok(())
}
