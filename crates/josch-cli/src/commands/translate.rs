use crate::cli::GlobalFlags;
use crate::cli::root_commands::TranslateArgs;
use crate::input::read_text;
use crate::output::output;

/// Handle `josch translate`.
pub fn handle(args: &TranslateArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = read_text(&args.schema)?;
    let validator = josch_schema::translate(&schema)?;
    output(&validator, flags.format)
}
