//! Full lifecycle runs through the workflow service.

use super::helpers::{Env, env};
use eyre::ensure;
use rstest::rstest;
use steward::todo::domain::{NotificationStatus, TodoEdit, TodoStatus};
use steward::todo::services::ListStatusFilter;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_delegated_item_travels_the_full_review_cycle(env: Env) -> eyre::Result<()> {
    let item = env.create_delegated().await;

    let item = env.service.start(env.ben, item.id()).await?;
    ensure!(item.status() == TodoStatus::InProgress, "work must start");

    let item = env.service.submit(env.ben, item.id()).await?;
    ensure!(
        item.status() == TodoStatus::PendingReview,
        "delegated work must await review"
    );

    let item = env
        .service
        .approve(env.ava, item.id(), Some("ok".to_owned()))
        .await?;
    ensure!(item.status() == TodoStatus::Done, "approved work is done");
    ensure!(item.done_by() == Some(env.ben), "completion is the assignee's");
    ensure!(item.reviewed_by() == Some(env.ava), "review is the creator's");

    let recipients: Vec<_> = env
        .sink
        .entries()?
        .into_iter()
        .map(|entry| entry.recipient)
        .collect();
    ensure!(
        recipients == vec![env.mara, env.ava],
        "manager on creation, then reviewer on submission"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rework_reaches_done_after_a_rejection_round(env: Env) -> eyre::Result<()> {
    let item = env.create_delegated().await;

    env.service.submit(env.ben, item.id()).await?;
    let rejected = env
        .service
        .reject(env.ava, item.id(), Some("missing figures".to_owned()))
        .await?;
    ensure!(
        rejected.status() == TodoStatus::Open,
        "rejected work reopens"
    );
    ensure!(
        rejected.review_comment() == Some("missing figures"),
        "the rejection comment is kept for the assignee"
    );

    env.service.start(env.ben, item.id()).await?;
    env.service.submit(env.ben, item.id()).await?;
    let done = env.service.approve(env.ava, item.id(), None).await?;
    ensure!(done.status() == TodoStatus::Done, "second pass completes");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_notification_is_recorded_as_sent(env: Env) -> eyre::Result<()> {
    let item = env.create_delegated().await;
    env.service.submit(env.ben, item.id()).await?;

    for entry in env.sink.entries()? {
        ensure!(entry.todo_id == item.id(), "entry references the item");
        ensure!(
            entry.status == NotificationStatus::Sent,
            "in-app delivery is immediate"
        );
        ensure!(entry.error_message.is_none(), "no delivery error expected");
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn the_manager_observes_their_reports_work_end_to_end(env: Env) -> eyre::Result<()> {
    let item = env.create_delegated().await;
    env.service.submit(env.ben, item.id()).await?;
    env.service.approve(env.ava, item.id(), None).await?;

    let team = env
        .service
        .list_team(env.mara, Some(TodoStatus::Done), 1, 10)
        .await?;
    ensure!(team.page.total == 1, "the done item is listed");
    ensure!(
        team.subordinates.len() == 1 && team.subordinates[0].id() == env.ben,
        "the roster holds the single report"
    );

    let reopened = env
        .service
        .change_status(env.mara, item.id(), TodoStatus::InProgress, None)
        .await?;
    ensure!(
        reopened.status() == TodoStatus::InProgress,
        "the manager reopened the done item"
    );
    ensure!(reopened.done_at().is_none(), "completion fields are cleared");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edits_survive_alongside_lifecycle_changes(env: Env) -> eyre::Result<()> {
    let item = env.create_delegated().await;
    env.service.start(env.ben, item.id()).await?;

    let edit = TodoEdit {
        tags: Some(vec!["q3".to_owned(), "finance".to_owned()]),
        ..TodoEdit::default()
    };
    env.service.update_details(env.ava, item.id(), edit).await?;

    let page = env
        .service
        .list_mine(env.ben, Some(ListStatusFilter::Open), None, 1, 10)
        .await?;
    ensure!(page.total == 1, "the item is still actionable");
    ensure!(
        page.items[0].tags() == ["finance", "q3"],
        "tags are stored sorted"
    );
    ensure!(
        page.items[0].status() == TodoStatus::InProgress,
        "the edit never touched the lifecycle"
    );
    Ok(())
}
