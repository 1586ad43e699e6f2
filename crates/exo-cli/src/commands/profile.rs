use std::path::PathBuf;

use anyhow::Context;
use exo_core::{CandidateAssessment, LifeformRequest, derive_profile};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ProfileArgs;
use crate::context::AppContext;
use crate::ingest;
use crate::output::output;

/// Handle `exoprofile profile`.
pub fn handle(args: &ProfileArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = ingest::load_record(&args.input, &ctx.schemas)?;

    let request = lifeform_request(args, ctx);
    let assessment = args
        .candidate_probability
        .map(|p| CandidateAssessment::from_probability(p, ctx.config.classifier.threshold))
        .transpose()
        .context("invalid --candidate-probability")?;

    let profile = derive_profile(&record, &request, assessment)?;

    if let Some(path) = export_path(args, ctx) {
        profile.write_to(&path)?;
    }

    output(&profile, flags.format)
}

/// CLI flags win over the configured lifeform defaults.
fn lifeform_request(args: &ProfileArgs, ctx: &AppContext) -> LifeformRequest {
    let defaults = &ctx.config.lifeform;
    LifeformRequest::new(
        args.habitat.as_deref().unwrap_or(&defaults.habitat),
        args.base_size.unwrap_or(defaults.base_size),
    )
}

fn export_path(args: &ProfileArgs, ctx: &AppContext) -> Option<PathBuf> {
    args.output
        .clone()
        .or_else(|| args.export.then(|| PathBuf::from(&ctx.config.output.path)))
}
