mod api;
mod check;
mod config;
mod posts;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use quill_analyze::{text, SeoAnalyzer};
use quill_audit::{export, summary};
use quill_core::{Severity, SiteConfig};
use tracing::warn;

#[derive(Parser)]
#[command(name = "quill")]
#[command(about = "Analyze and score blog content for on-page SEO")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze posts and print per-post findings
    Analyze {
        #[arg(help = "Post JSON files or directories of them")]
        paths: Vec<PathBuf>,
        #[arg(short = 'f', long, default_value = "quill.toml", help = "Path to config file")]
        config: String,
        #[arg(long, default_value_t = 0, help = "Only include posts scoring at least this")]
        min_score: u32,
        #[arg(long, default_value_t = 100, help = "Only include posts scoring at most this")]
        max_score: u32,
    },
    /// Site-wide audit: metrics, distribution, recommendations
    Audit {
        paths: Vec<PathBuf>,
        #[arg(short = 'f', long, default_value = "quill.toml")]
        config: String,
    },
    /// Export per-post SEO data as CSV
    Export {
        paths: Vec<PathBuf>,
        #[arg(short, long, default_value = "seo_export.csv")]
        output: String,
        #[arg(short = 'f', long, default_value = "quill.toml")]
        config: String,
    },
    /// Print head tags and JSON-LD for a single post
    Meta {
        path: PathBuf,
        #[arg(short = 'f', long, default_value = "quill.toml")]
        config: String,
    },
    /// Serve the analysis API for editor integrations
    Serve {
        #[arg(short = 'f', long, default_value = "quill.toml")]
        config: String,
    },
    /// Technical checks against a live site
    Check {
        #[arg(help = "Base URL of the site to check")]
        base_url: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quill=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            paths,
            config,
            min_score,
            max_score,
        } => run_analyze(paths, &config, min_score, max_score),
        Commands::Audit { paths, config } => run_audit(paths, &config),
        Commands::Export {
            paths,
            output,
            config,
        } => run_export(paths, &output, &config),
        Commands::Meta { path, config } => run_meta(path, &config),
        Commands::Serve { config: config_path } => {
            match config::QuillConfig::from_file(&config_path) {
                Ok(cfg) => run_serve(cfg).await,
                Err(e) => Err(format!("failed to load config {}: {}", config_path, e).into()),
            }
        }
        Commands::Check { base_url } => run_check(&base_url).await,
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Site constants from the config file, or defaults when it is absent.
fn load_site(config_path: &str) -> SiteConfig {
    match config::QuillConfig::from_file(config_path) {
        Ok(cfg) => cfg.site(),
        Err(e) => {
            warn!("config {} not loaded ({}), using defaults", config_path, e);
            SiteConfig::default()
        }
    }
}

fn run_analyze(
    paths: Vec<PathBuf>,
    config_path: &str,
    min_score: u32,
    max_score: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let site = load_site(config_path);
    let docs = posts::load_documents(&paths)?;

    println!("Analyzing {} posts...", docs.len());

    let mut analyzed = 0usize;
    let mut total_score = 0u64;
    let mut issue_count = 0usize;

    for doc in &docs {
        let analyzer = SeoAnalyzer::new(&site, doc);
        let result = analyzer.analyze();
        if result.score < min_score || result.score > max_score {
            continue;
        }
        analyzed += 1;
        total_score += u64::from(result.score);

        println!("\n--- {} ---", doc.title);
        println!("SEO Score: {}/100", result.score);
        println!("Word Count: {}", result.basic.word_count);
        println!(
            "Reading Time: {}",
            text::reading_time_display(analyzer.reading_time_minutes())
        );

        if !result.keyword.focus_keyword.is_empty() {
            println!("Focus Keyword: {}", result.keyword.focus_keyword);
            println!("Keyword Density: {}%", result.keyword.density_percent);
        }

        println!(
            "Readability: {} (Flesch: {})",
            result.readability.level.label(),
            result.readability.flesch_ease
        );

        if !result.report.issues.is_empty() {
            println!("\nIssues:");
            for issue in &result.report.issues {
                println!("  - {}", issue);
                issue_count += 1;
            }
        }
        if !result.report.recommendations.is_empty() {
            println!("\nRecommendations:");
            for rec in &result.report.recommendations {
                println!("  - {}", rec);
            }
        }
        if !result.report.good_practices.is_empty() {
            println!("\nGood Practices:");
            for practice in &result.report.good_practices {
                println!("  - {}", practice);
            }
        }
    }

    let average = if analyzed > 0 {
        total_score as f64 / analyzed as f64
    } else {
        0.0
    };
    println!("\n=== SUMMARY ===");
    println!("Posts analyzed: {}", analyzed);
    println!("Average SEO score: {:.1}/100", average);
    println!("Total issues found: {}", issue_count);

    Ok(())
}

fn run_audit(paths: Vec<PathBuf>, config_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let site = load_site(config_path);
    let docs = posts::load_documents(&paths)?;
    let scored = quill_audit::score_posts(&site, &docs);
    let summary = summary::site_summary(&scored);

    println!("=== SEO AUDIT REPORT ===\n");
    println!("BASIC METRICS:");
    println!("Total posts: {}", summary.total_posts);
    println!("Average SEO score: {:.1}/100", summary.average_score);
    println!("Score distribution:");
    let pct = |n: usize| n as f64 / summary.total_posts.max(1) as f64 * 100.0;
    println!(
        "  Excellent (90-100): {} ({:.1}%)",
        summary.excellent,
        pct(summary.excellent)
    );
    println!("  Good (80-89): {} ({:.1}%)", summary.good, pct(summary.good));
    println!(
        "  Needs work (60-79): {} ({:.1}%)",
        summary.needs_improvement,
        pct(summary.needs_improvement)
    );
    println!("  Poor (<60): {} ({:.1}%)", summary.poor, pct(summary.poor));

    println!("\nCOMMON ISSUES:");
    let missing_meta = summary.total_posts - summary.with_meta_description;
    let missing_keywords = summary.total_posts - summary.with_focus_keyword;
    let missing_images = summary.total_posts - summary.with_featured_image;
    if missing_meta > 0 {
        println!("Missing meta descriptions: {}", missing_meta);
    }
    if missing_keywords > 0 {
        println!("Missing focus keywords: {}", missing_keywords);
    }
    if missing_images > 0 {
        println!("Missing featured images: {}", missing_images);
    }
    if summary.titles_too_short > 0 {
        println!("Titles too short (<30 chars): {}", summary.titles_too_short);
    }
    if summary.titles_too_long > 0 {
        println!("Titles too long (>60 chars): {}", summary.titles_too_long);
    }
    if summary.duplicate_titles > 0 {
        println!("Duplicate titles: {}", summary.duplicate_titles);
    }
    if summary.duplicate_meta_descriptions > 0 {
        println!(
            "Duplicate meta descriptions: {}",
            summary.duplicate_meta_descriptions
        );
    }

    let mut errors = 0usize;
    let mut warnings = 0usize;
    for doc in &docs {
        for issue in quill_analyze::validate::validate_requirements(doc) {
            match issue.severity {
                Severity::Error => errors += 1,
                Severity::Warning => warnings += 1,
            }
        }
    }
    println!("\nVALIDATION:");
    println!("Errors: {}", errors);
    println!("Warnings: {}", warnings);

    let keywords = summary::keyword_stats(&scored);
    if keywords.total_keywords > 0 {
        println!("\nKEYWORDS:");
        println!("Distinct focus keywords: {}", keywords.total_keywords);
        for (keyword, count) in keywords.top.iter().take(5) {
            println!("  {} ({})", keyword, count);
        }
        if !keywords.cannibalized.is_empty() {
            println!("Keyword cannibalization:");
            for (keyword, count) in &keywords.cannibalized {
                println!("  {} targeted by {} posts", keyword, count);
            }
        }
    }

    let recommendations = summary::site_recommendations(&summary);
    if !recommendations.is_empty() {
        println!("\nRECOMMENDATIONS:");
        for rec in &recommendations {
            println!("[{:?}] {}", rec.priority, rec.title);
            println!("  {}", rec.description);
            println!("  {}", rec.action);
        }
    }

    let mut critical: Vec<_> = scored.iter().filter(|p| p.score < 50).collect();
    critical.sort_by_key(|p| p.score);
    if !critical.is_empty() {
        println!("\nPOSTS NEEDING IMMEDIATE ATTENTION:");
        for post in critical.iter().take(10) {
            println!("  - {} (Score: {})", post.title, post.score);
        }
    }

    Ok(())
}

fn run_export(
    paths: Vec<PathBuf>,
    output: &str,
    config_path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let site = load_site(config_path);
    let docs = posts::load_documents(&paths)?;
    let scored = quill_audit::score_posts(&site, &docs);
    let csv = export::export_csv(&scored);
    std::fs::write(output, csv)?;
    println!("SEO data exported to {}", output);
    Ok(())
}

fn run_meta(path: PathBuf, config_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let site = load_site(config_path);
    let docs = posts::load_documents(&[path])?;
    for doc in &docs {
        let breadcrumbs = vec![
            ("Home".to_string(), "/".to_string()),
            ("Blog".to_string(), "/blog/".to_string()),
            (doc.title.clone(), format!("/blog/{}/", doc.slug)),
        ];
        let head = serde_json::json!({
            "meta": quill_meta::tags::basic_meta(doc, &site),
            "og": quill_meta::tags::og_meta(doc, &site),
            "twitter": quill_meta::tags::twitter_meta(doc, &site),
            "json_ld": {
                "article": quill_meta::schema::article_schema(doc, &site),
                "organization": quill_meta::schema::organization_schema(&site),
                "breadcrumbs": quill_meta::schema::breadcrumb_schema(&breadcrumbs, &site),
            },
        });
        println!("{}", serde_json::to_string_pretty(&head)?);
    }
    Ok(())
}

async fn run_serve(cfg: config::QuillConfig) -> Result<(), Box<dyn std::error::Error>> {
    let site = cfg.site();
    let (bind, port) = match &cfg.api {
        Some(api) => (api.bind.clone(), api.port),
        None => ("127.0.0.1".to_string(), 3001),
    };
    api::run_api(&bind, port, site).await
}

async fn run_check(base_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("checking {} ...", base_url);
    let checks = check::technical_checks(base_url).await?;
    for c in &checks {
        println!("  [{}] {} - {}", c.status.label(), c.name, c.description);
    }
    let failed = checks
        .iter()
        .filter(|c| c.status == check::CheckStatus::Fail)
        .count();
    if failed > 0 {
        println!("\n{} of {} checks failed", failed, checks.len());
    }
    Ok(())
}
