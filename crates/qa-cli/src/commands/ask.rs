use qa_core::entities::QaRecord;
use qa_core::validate::require_text;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(question: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = ask(question, ctx).await?;
    output(&record, flags.format)
}

/// Reject blank input before it reaches the store.
async fn ask(question: &str, ctx: &AppContext) -> anyhow::Result<QaRecord> {
    let question = require_text("question", question)?;
    Ok(ctx.db.create_question(question).await?)
}
