use josch_store::DocumentStore;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CountResponse<'a> {
    collection: &'a str,
    count: u64,
}

/// Handle `josch count`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let collection = ctx.collection()?;
    let count = ctx.store.count(collection)?;
    output(&CountResponse { collection, count }, flags.format)
}
