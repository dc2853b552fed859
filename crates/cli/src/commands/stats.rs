use crate::di::UseCases;
use crate::output;

pub async fn run(
    use_cases: &UseCases,
    most_queried: bool,
    over_time: bool,
    unique: bool,
    recent: Option<u32>,
) -> anyhow::Result<()> {
    if most_queried {
        let rows = use_cases.most_queried.execute().await?;
        output::print_most_queried(&rows);
    }

    if over_time {
        let rows = use_cases.over_time.execute().await?;
        output::print_over_time(&rows);
    }

    if unique {
        let rows = use_cases.unique_domains.execute().await?;
        output::print_unique(&rows);
    }

    if let Some(limit) = recent {
        let rows = use_cases.recent.execute(limit).await?;
        output::print_recent(&rows);
    }

    Ok(())
}
