use josch_store::Sampler;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SampleArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `josch sample`.
///
/// Documents deleted between the identifier scan and their lookup are skipped.
pub fn handle(args: &SampleArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let collection = ctx.collection()?;
    let sampler = Sampler::new(ctx.store.as_ref(), collection, !args.ordered)?;

    let mut documents: Vec<Value> = Vec::with_capacity(args.limit.min(sampler.len()));
    for item in sampler {
        if documents.len() >= args.limit {
            break;
        }
        if let Some(document) = item? {
            documents.push(document);
        }
    }

    output(&documents, flags.format)
}
