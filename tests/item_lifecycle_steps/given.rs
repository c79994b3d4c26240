//! Given steps for item lifecycle BDD scenarios.

use super::world::ItemLifecycleWorld;
use axum::http::{Method, StatusCode};
use rstest_bdd_macros::given;
use serde_json::json;

#[given("an empty board")]
fn empty_board(world: &mut ItemLifecycleWorld) {
    world.last_response = None;
}

#[given(r#"a "{resource}" named "{name}" exists"#)]
fn item_exists(
    world: &mut ItemLifecycleWorld,
    resource: String,
    name: String,
) -> Result<(), eyre::Report> {
    let response = world.request(
        Method::POST,
        &format!("/{resource}"),
        Some(json!({ "name": name })),
    )?;
    eyre::ensure!(
        response.status == StatusCode::OK,
        "seeding {resource} failed with {}",
        response.status
    );
    Ok(())
}

#[given(r#"a finished "{resource}" named "{name}""#)]
fn finished_item_exists(
    world: &mut ItemLifecycleWorld,
    resource: String,
    name: String,
) -> Result<(), eyre::Report> {
    let response = world.request(
        Method::POST,
        &format!("/{resource}"),
        Some(json!({ "name": name, "done": true })),
    )?;
    eyre::ensure!(
        response.status == StatusCode::OK,
        "seeding {resource} failed with {}",
        response.status
    );
    Ok(())
}
