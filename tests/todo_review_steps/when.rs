//! When steps for todo review BDD scenarios.

use super::world::{TodoReviewWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#""{name}" starts the todo"#)]
fn starts_the_todo(world: &mut TodoReviewWorld, name: String) -> Result<(), eyre::Report> {
    let actor = world.user(&name)?;
    let id = world.todo()?.id();
    let updated = run_async(world.service.start(actor, id)).wrap_err("start todo")?;
    world.todo = Some(updated);
    Ok(())
}

#[when(r#""{name}" submits the todo"#)]
fn submits_the_todo(world: &mut TodoReviewWorld, name: String) -> Result<(), eyre::Report> {
    let actor = world.user(&name)?;
    let id = world.todo()?.id();
    let updated = run_async(world.service.submit(actor, id)).wrap_err("submit todo")?;
    world.todo = Some(updated);
    Ok(())
}

#[when(r#""{name}" approves the todo with comment "{comment}""#)]
fn approves_with_comment(
    world: &mut TodoReviewWorld,
    name: String,
    comment: String,
) -> Result<(), eyre::Report> {
    let actor = world.user(&name)?;
    let id = world.todo()?.id();
    let updated =
        run_async(world.service.approve(actor, id, Some(comment))).wrap_err("approve todo")?;
    world.todo = Some(updated);
    Ok(())
}

#[when(r#""{name}" attempts to approve the todo"#)]
fn attempts_to_approve(world: &mut TodoReviewWorld, name: String) -> Result<(), eyre::Report> {
    let actor = world.user(&name)?;
    let id = world.todo()?.id();
    let result = run_async(world.service.approve(actor, id, None));
    if let Ok(ref updated) = result {
        world.todo = Some(updated.clone());
    }
    world.last_result = Some(result);
    Ok(())
}

#[when(r#""{name}" rejects the todo without a comment"#)]
fn rejects_without_comment(
    world: &mut TodoReviewWorld,
    name: String,
) -> Result<(), eyre::Report> {
    let actor = world.user(&name)?;
    let id = world.todo()?.id();
    let updated = run_async(world.service.reject(actor, id, None)).wrap_err("reject todo")?;
    world.todo = Some(updated);
    Ok(())
}
