//! `news` and `compare` command handlers.

use std::fmt::Write;

use newsbrief_core::{load_watchlist_or_default, AppConfig};
use newsbrief_news::{compare_sentiment, CompanyReport, NewsPipeline};

/// Print the report for one company.
///
/// # Errors
///
/// Returns an error if the pipeline cannot be built or JSON output fails.
pub(crate) async fn run_news(config: &AppConfig, company: &str, json: bool) -> anyhow::Result<()> {
    let company = company.trim();
    if company.is_empty() {
        anyhow::bail!("company name must be non-empty");
    }

    let pipeline = NewsPipeline::from_config(config)?;
    let report = pipeline.run(company).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let watchlist = load_watchlist_or_default(&config.watchlist_path)?;
    print!("{}", render_report(&report, watchlist.icon_for(company))?);
    Ok(())
}

/// Print the sentiment comparison JSON.
///
/// # Errors
///
/// Returns an error if the watchlist or pipeline cannot be loaded.
pub(crate) async fn run_compare(config: &AppConfig, companies: &[String]) -> anyhow::Result<()> {
    let mut names: Vec<String> = companies
        .iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();
    if names.is_empty() {
        names = load_watchlist_or_default(&config.watchlist_path)?.names();
    }

    let pipeline = NewsPipeline::from_config(config)?;
    let reports = pipeline.run_batch(&names).await;
    let comparison = compare_sentiment(reports.values());
    println!("{}", serde_json::to_string_pretty(&comparison)?);
    Ok(())
}

/// Plain-text rendering: articles, then the category distribution and topics.
///
/// # Errors
///
/// Returns [`std::fmt::Error`] if formatting fails.
pub(crate) fn render_report(
    report: &CompanyReport,
    icon: Option<&str>,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, report, icon)?;
    Ok(out)
}

fn write_report(
    out: &mut impl Write,
    report: &CompanyReport,
    icon: Option<&str>,
) -> std::fmt::Result {
    match icon {
        Some(icon) => writeln!(out, "{icon} {}", report.company)?,
        None => writeln!(out, "{}", report.company)?,
    }

    if report.articles.is_empty() {
        return writeln!(out, "no news articles found");
    }

    for (i, article) in report.articles.iter().enumerate() {
        writeln!(out, "{:>2}. {}", i + 1, article.title)?;
        writeln!(out, "    {}", article.summary)?;
        writeln!(out, "    Sentiment: {}", article.sentiment)?;
    }

    if report.fetch_failed {
        return Ok(());
    }

    writeln!(out, "\n{:<16}COUNT", "SENTIMENT")?;
    for (category, count) in report.distribution() {
        writeln!(out, "{:<16}{count}", category.as_str())?;
    }

    if !report.topics.is_empty() {
        writeln!(out, "\nTopics: {}", report.topics.join(", "))?;
    }
    Ok(())
}
