use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let record = ctx
        .db
        .get_record(id)
        .await?
        .with_context(|| format!("question #{id} not found"))?;
    output(&record, flags.format)
}
