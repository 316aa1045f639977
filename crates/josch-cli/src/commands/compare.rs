use anyhow::Context;
use josch_containment::ContainmentChecker;
use josch_core::{ContainmentRelation, ContainmentToolKind};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CompareArgs;
use crate::context::AppContext;
use crate::input::read_text;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ContainsResponse {
    tool: ContainmentToolKind,
    relation: ContainmentRelation,
}

/// Handle `josch contains`. The tool exchange runs on a blocking worker.
pub async fn handle_contains(
    args: &CompareArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let current = read_text(&args.current)?;
    let legacy = read_text(&args.legacy)?;
    let checker = ContainmentChecker::new(ctx.config.containment.clone());
    let tool = checker.config().tool;

    let relation = tokio::task::spawn_blocking(move || checker.contains(&current, &legacy))
        .await
        .context("containment worker failed")??;

    output(&ContainsResponse { tool, relation }, flags.format)
}

/// Handle `josch diff`.
pub fn handle_diff(
    args: &CompareArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let current = read_text(&args.current)?;
    let legacy = read_text(&args.legacy)?;
    let checker = ContainmentChecker::new(ctx.config.containment.clone());
    let difference = checker.equals(&current, &legacy)?;
    output(&difference, flags.format)
}
