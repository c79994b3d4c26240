//! Then steps for item lifecycle BDD scenarios.

use super::world::{ItemLifecycleWorld, run_async};
use crate::test_helpers::send;
use axum::http::Method;
use rstest_bdd_macros::then;
use serde_json::Value;

#[then("the response status is {status:u64}")]
fn response_status_is(world: &ItemLifecycleWorld, status: u64) -> Result<(), eyre::Report> {
    let actual = u64::from(world.last()?.status.as_u16());
    eyre::ensure!(actual == status, "expected status {status}, found {actual}");
    Ok(())
}

#[then(r#""{resource}" {id:u64} is named "{name}""#)]
fn item_is_named(
    world: &ItemLifecycleWorld,
    resource: String,
    id: u64,
    name: String,
) -> Result<(), eyre::Report> {
    let response = run_async(send(
        &world.app,
        Method::GET,
        &format!("/{resource}/{id}"),
        None,
    ))?;
    let body = response.json()?;
    eyre::ensure!(
        body["name"] == Value::from(name.as_str()),
        "expected name {name}, found {}",
        body["name"]
    );
    Ok(())
}

#[then("the returned item is done")]
fn returned_item_is_done(world: &ItemLifecycleWorld) -> Result<(), eyre::Report> {
    let body = world.last()?.json()?;
    eyre::ensure!(body["done"] == Value::Bool(true), "item is not done: {body}");
    Ok(())
}

#[then(r#"the "{field}" validation message is "{message}""#)]
fn validation_message_is(
    world: &ItemLifecycleWorld,
    field: String,
    message: String,
) -> Result<(), eyre::Report> {
    let body = world.last()?.json()?;
    eyre::ensure!(
        body[field.as_str()] == Value::from(message.as_str()),
        "unexpected validation body: {body}"
    );
    Ok(())
}

#[then(r#"the error message is "{message}""#)]
fn error_message_is(world: &ItemLifecycleWorld, message: String) -> Result<(), eyre::Report> {
    let body = world.last()?.json()?;
    eyre::ensure!(
        body["error"] == Value::from(message.as_str()),
        "unexpected error body: {body}"
    );
    Ok(())
}

#[then(r#"listing "{resource}" yields "{names}""#)]
fn listing_yields(
    world: &ItemLifecycleWorld,
    resource: String,
    names: String,
) -> Result<(), eyre::Report> {
    let response = run_async(send(&world.app, Method::GET, &format!("/{resource}"), None))?;
    let body = response.json()?;
    let listed: Vec<&str> = body
        .as_array()
        .ok_or_else(|| eyre::eyre!("listing is not an array: {body}"))?
        .iter()
        .filter_map(|item| item["name"].as_str())
        .collect();
    let expected: Vec<&str> = names.split(',').collect();
    eyre::ensure!(
        listed == expected,
        "expected listing {expected:?}, found {listed:?}"
    );
    Ok(())
}

#[then(r#"listing "{resource}" is empty"#)]
fn listing_is_empty(world: &ItemLifecycleWorld, resource: String) -> Result<(), eyre::Report> {
    let response = run_async(send(&world.app, Method::GET, &format!("/{resource}"), None))?;
    let body = response.json()?;
    eyre::ensure!(body == Value::Array(Vec::new()), "expected no items, found {body}");
    Ok(())
}
