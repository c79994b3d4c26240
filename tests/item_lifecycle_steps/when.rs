//! When steps for item lifecycle BDD scenarios.

use super::world::ItemLifecycleWorld;
use axum::http::Method;
use rstest_bdd_macros::when;
use serde_json::json;

#[when(r#"a "{resource}" named "{name}" is created"#)]
fn create_item(
    world: &mut ItemLifecycleWorld,
    resource: String,
    name: String,
) -> Result<(), eyre::Report> {
    world.request(
        Method::POST,
        &format!("/{resource}"),
        Some(json!({ "name": name })),
    )?;
    Ok(())
}

#[when(r#""{resource}" {id:u64} is renamed to "{name}""#)]
fn rename_item(
    world: &mut ItemLifecycleWorld,
    resource: String,
    id: u64,
    name: String,
) -> Result<(), eyre::Report> {
    world.request(
        Method::PUT,
        &format!("/{resource}/{id}"),
        Some(json!({ "name": name })),
    )?;
    Ok(())
}

#[when(r#""{resource}" {id:u64} is fetched"#)]
fn fetch_item(
    world: &mut ItemLifecycleWorld,
    resource: String,
    id: u64,
) -> Result<(), eyre::Report> {
    world.request(Method::GET, &format!("/{resource}/{id}"), None)?;
    Ok(())
}

#[when(r#""{resource}" {id:u64} is deleted"#)]
fn delete_item(
    world: &mut ItemLifecycleWorld,
    resource: String,
    id: u64,
) -> Result<(), eyre::Report> {
    world.request(Method::DELETE, &format!("/{resource}/{id}"), None)?;
    Ok(())
}
