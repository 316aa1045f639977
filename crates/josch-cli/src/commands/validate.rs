use anyhow::Context;
use josch_core::is_error;
use josch_validation::{DOCUMENT_VALID, MemoryQuota, Validator, Verdict};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ValidateAllArgs, ValidateArgs};
use crate::context::AppContext;
use crate::input::read_text;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ValidateResponse {
    valid: bool,
    message: String,
}

impl From<Verdict> for ValidateResponse {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Valid => Self {
                valid: true,
                message: DOCUMENT_VALID.to_string(),
            },
            Verdict::Rejected(reason) => Self {
                valid: false,
                message: reason.to_string(),
            },
        }
    }
}

/// Handle `josch validate`. A rejected document is a normal answer; only a
/// check that could not run fails the command.
pub fn handle_one(
    args: &ValidateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let document = read_text(&args.document)?;
    let schema = read_text(&args.schema)?;

    let quota = MemoryQuota::from(&ctx.config.validation);
    let verdict = Validator::new(ctx.store.as_ref(), quota)
        .check_one(&document, &schema)
        .map_err(|error| anyhow::anyhow!("{}", error.boundary_message()))?;

    output(&ValidateResponse::from(verdict), flags.format)
}

/// Handle `josch validate-all`. Runs on a blocking worker.
pub async fn handle_all(
    args: &ValidateAllArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let schema = read_text(&args.schema)?;
    let collection = ctx.collection()?.to_string();
    let store = ctx.store.clone();
    let quota = MemoryQuota::from(&ctx.config.validation);

    let outcome = tokio::task::spawn_blocking(move || {
        Validator::new(store.as_ref(), quota).validate_all(&collection, &schema)
    })
    .await
    .context("validation worker failed")?;

    if is_error(&outcome.notification) {
        anyhow::bail!("{}", outcome.notification);
    }
    output(&outcome, flags.format)
}
