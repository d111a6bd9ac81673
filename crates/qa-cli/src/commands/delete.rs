use qa_core::responses::MutationResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = ctx.db.delete_record(id).await?;
    output(&MutationResponse { id, outcome }, flags.format)
}
