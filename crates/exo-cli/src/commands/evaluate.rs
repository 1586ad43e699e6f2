use crate::cli::GlobalFlags;
use crate::cli::root_commands::RecordArgs;
use crate::context::AppContext;
use crate::ingest;
use crate::output::output;

/// Handle `exoprofile evaluate`.
pub fn handle(args: &RecordArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = ingest::load_record(args, &ctx.schemas)?;
    let report = exo_core::report(&record);
    output(&report, flags.format)
}
