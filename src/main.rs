use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use oneulunse::config::config;
use oneulunse::db::{init_db, load_last_input, record_visit, save_last_input};
use oneulunse::domain::catalog::ContentCatalog;
use oneulunse::domain::dates::today_in;
use oneulunse::domain::fortune::FortuneEngine;
use oneulunse::domain::input::{format_birth_input, validate_birth, validate_name};
use oneulunse::domain::share::{decode_share_code, share_url};
use oneulunse::output::{print_fortune, print_share};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// 오늘의 운세: the same name and birthdate get the same fortune all day.
#[derive(Parser, Debug)]
#[command(name = "oneulunse", version)]
struct Cli {
    /// Name to read the fortune for (defaults to the last one used)
    #[arg(long)]
    name: Option<String>,

    /// Birthdate as YYYY-MM-DD (defaults to the last one used)
    #[arg(long)]
    birth: Option<String>,

    /// Read the fortune for another day instead of today (YYYY-MM-DD)
    #[arg(long, value_parser = parse_day)]
    date: Option<NaiveDate>,

    /// Open a shared link code instead of your own input
    #[arg(long, conflicts_with_all = ["name", "birth"])]
    code: Option<String>,

    /// Content catalog JSON to use instead of CATALOG_PATH or the built-in one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Print the fortune as JSON
    #[arg(long)]
    json: bool,

    /// Also print the share texts (clipboard, X, KakaoTalk) with the link
    #[arg(long)]
    share: bool,
}

fn parse_day(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| format!("{raw}: {e}"))
}

#[derive(Debug, PartialEq, Eq)]
struct Submission {
    name: String,
    birth: String,
    shared: bool,
}

/// Command-line values win; gaps are filled from the last saved input, the way
/// the form is pre-filled.
fn resolve_input(
    name: Option<String>,
    birth: Option<String>,
    code: Option<&str>,
    saved: Option<(String, String)>,
) -> Result<Submission> {
    if let Some(code) = code {
        let shared = decode_share_code(code).context("공유 링크를 읽을 수 없습니다")?;
        return Ok(Submission {
            name: shared.name,
            birth: shared.birth,
            shared: true,
        });
    }

    let (saved_name, saved_birth) = saved.unzip();
    Ok(Submission {
        name: name.or(saved_name).unwrap_or_default(),
        birth: birth.or(saved_birth).unwrap_or_default(),
        shared: false,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let conf = config();
    let today = cli.date.unwrap_or_else(|| today_in(conf.tz_offset_hours));

    let catalog = match cli.catalog.as_ref().or(conf.catalog_path.as_ref()) {
        Some(path) => ContentCatalog::load(path)?,
        None => ContentCatalog::default(),
    };
    let engine = FortuneEngine::new(catalog);

    let pool = init_db(&conf.db_path).await?;
    let saved = load_last_input(&pool).await?;
    let submission = resolve_input(cli.name, cli.birth, cli.code.as_deref(), saved)?;

    let name = validate_name(&submission.name)?;
    let birth = format_birth_input(&submission.birth);
    validate_birth(&birth, today)?;

    if !submission.shared {
        save_last_input(&pool, &name, &birth).await?;
    }
    let streak = record_visit(&pool, today).await?;
    tracing::info!(shared = submission.shared, streak, %today, "Reading fortune");

    let result = engine.generate(&name, &birth, today)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_fortune(&result, Some(streak));
    }

    if cli.share {
        println!();
        print_share(&result, &share_url(&conf.share_base_url, &name, &birth));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved() -> Option<(String, String)> {
        Some(("Kim".to_string(), "1990-05-12".to_string()))
    }

    #[test]
    fn test_saved_input_fills_gaps() {
        let s = resolve_input(None, Some("2000-01-01".to_string()), None, saved()).unwrap();
        assert_eq!(s.name, "Kim");
        assert_eq!(s.birth, "2000-01-01");
        assert!(!s.shared);
    }

    #[test]
    fn test_nothing_saved_gives_empty_fields() {
        let s = resolve_input(None, None, None, None).unwrap();
        assert!(s.name.is_empty() && s.birth.is_empty());
        assert!(validate_name(&s.name).is_err());
    }

    #[test]
    fn test_share_code_wins_and_is_marked_shared() {
        let s = resolve_input(None, None, Some("7ZmN6ri464-ZfDE5OTUtMDMtMTU"), saved()).unwrap();
        assert_eq!(
            s,
            Submission {
                name: "홍길동".to_string(),
                birth: "1995-03-15".to_string(),
                shared: true,
            }
        );
        assert!(resolve_input(None, None, Some("!!"), saved()).is_err());
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from([
            "oneulunse", "--name", "Kim", "--birth", "1990-05-12", "--date", "2025-01-01", "--json",
        ])
        .unwrap();
        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2025, 1, 1));
        assert!(cli.json && !cli.share);

        assert!(Cli::try_parse_from(["oneulunse", "--code", "abc", "--name", "Kim"]).is_err());
        assert!(Cli::try_parse_from(["oneulunse", "--date", "2025-13-01"]).is_err());
    }
}
