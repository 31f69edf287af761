//! Given steps for todo review BDD scenarios.

use super::world::{TodoReviewWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use steward::todo::{
    domain::{ActionType, SourceType},
    services::CreateTodoRequest,
};

#[given(r#"a user "{name}""#)]
fn a_user(world: &mut TodoReviewWorld, name: String) -> Result<(), eyre::Report> {
    world.register_user(&name, None)?;
    Ok(())
}

#[given(r#"a manager "{manager}" with subordinate "{name}""#)]
fn a_manager_with_subordinate(
    world: &mut TodoReviewWorld,
    manager: String,
    name: String,
) -> Result<(), eyre::Report> {
    let manager_id = world.register_user(&manager, None)?;
    world.register_user(&name, Some(manager_id))?;
    Ok(())
}

#[given(r#""{creator}" has created a todo "{title}" assigned to "{assignee}""#)]
fn a_created_todo(
    world: &mut TodoReviewWorld,
    creator: String,
    title: String,
    assignee: String,
) -> Result<(), eyre::Report> {
    let creator_id = world.user(&creator)?;
    let assignee_id = world.user(&assignee)?;
    let request = CreateTodoRequest::new(
        world.organization,
        assignee_id,
        title,
        SourceType::Custom,
        ActionType::Do,
    );
    let created = run_async(world.service.create(creator_id, request))
        .wrap_err("create todo in scenario setup")?;
    world.todo = Some(created);
    Ok(())
}
