//! Reporting chains and org chart construction over the directory adapter.

use super::helpers::{Env, env};
use eyre::ensure;
use rstest::rstest;
use std::sync::Arc;
use steward::org::domain::{UserId, UserRecord};
use steward::org::services::OrgHierarchyService;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reporting_depth_tracks_the_seeded_chain(env: Env) -> eyre::Result<()> {
    let hierarchy = OrgHierarchyService::new(Arc::new(env.directory.clone()));

    ensure!(hierarchy.reporting_depth(env.mara).await? == 0, "Mara is a root");
    ensure!(hierarchy.reporting_depth(env.ben).await? == 1, "Ben reports to Mara");
    ensure!(hierarchy.reporting_depth(env.ava).await? == 0, "Ava is a root");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn the_org_chart_covers_the_whole_directory(env: Env) -> eyre::Result<()> {
    let grace = UserId::new();
    env.directory
        .upsert(UserRecord::new(grace, "Grace").with_manager(env.ben))?;

    let hierarchy = OrgHierarchyService::new(Arc::new(env.directory.clone()));
    let forest = hierarchy.org_chart().await?;

    let roots: Vec<UserId> = forest.iter().map(|node| node.user.id()).collect();
    ensure!(
        roots == vec![env.mara, env.ava],
        "roots appear in directory order"
    );

    let mara_tree = &forest[0];
    ensure!(mara_tree.children.len() == 1, "Mara has one report");
    let ben_node = &mara_tree.children[0];
    ensure!(ben_node.user.id() == env.ben, "Ben sits under Mara");
    ensure!(ben_node.level == 1, "Ben is one level down");
    ensure!(
        ben_node.children.len() == 1 && ben_node.children[0].user.id() == grace,
        "Grace sits under Ben"
    );
    ensure!(ben_node.children[0].level == 2, "Grace is two levels down");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn direct_manager_resolution_matches_the_chart(env: Env) -> eyre::Result<()> {
    let hierarchy = OrgHierarchyService::new(Arc::new(env.directory.clone()));

    ensure!(
        hierarchy.is_direct_manager(env.mara, env.ben).await?,
        "Mara manages Ben"
    );
    ensure!(
        !hierarchy.is_direct_manager(env.ava, env.ben).await?,
        "Ava does not manage Ben"
    );
    Ok(())
}
