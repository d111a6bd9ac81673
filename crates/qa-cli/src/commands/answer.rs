use qa_core::responses::MutationResponse;
use qa_core::validate::require_text;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: i64,
    answer: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let response = answer_question(id, answer, ctx).await?;
    output(&response, flags.format)
}

async fn answer_question(
    id: i64,
    answer: &str,
    ctx: &AppContext,
) -> anyhow::Result<MutationResponse> {
    let answer = require_text("answer", answer)?;
    let outcome = ctx.db.set_answer(id, answer).await?;
    Ok(MutationResponse { id, outcome })
}
