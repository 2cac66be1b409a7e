//! NEWMECLASS CLI - check and inspect a backend deployment
//!
//! ```bash
//! newmeclass smoke                          # Check every public endpoint
//! newmeclass slides                         # Show hero slides (or fallback)
//! newmeclass questions introvert_extrovert  # List test questions
//! newmeclass articles --search bakat        # List published articles
//! newmeclass payment <registrationId>       # Show payment status
//! ```
//!
//! The backend URL comes from `--backend-url`, then `NEWMECLASS_BACKEND_URL`
//! (a `.env` file is honoured), then `http://localhost:8001`.

use clap::{Parser, Subcommand};
use log::{error, info};
use newmeclass::api::endpoints;
use newmeclass::flows::articles::{self, ArticleFilter};
use newmeclass::models::{test_title, TEST_TYPES};
use newmeclass::{
    Backend, Carousel, ClientError, Config, HttpBackend, PaymentPage, SlideSource, TestWizard,
    WizardState,
};

#[derive(Parser)]
#[command(name = "newmeclass")]
#[command(about = "Inspect a NEWMECLASS backend deployment", long_about = None)]
struct Cli {
    /// Backend base URL (overrides NEWMECLASS_BACKEND_URL)
    #[arg(long, global = true)]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Call every public read endpoint and report failures
    Smoke,

    /// Show the hero carousel slides
    Slides,

    /// List the questions of a personality test
    Questions {
        /// Test type (introvert_extrovert, element_personality)
        test_type: String,

        /// Include premium questions
        #[arg(long)]
        premium: bool,
    },

    /// List published articles
    Articles {
        /// Case-insensitive match on title or excerpt
        #[arg(short, long)]
        search: Option<String>,

        /// Exact category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show the payment page state for a registration
    Payment {
        /// Registration id
        registration_id: String,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match build_backend(cli.backend_url.as_deref()) {
        Ok(backend) => match cli.command {
            Commands::Smoke => cmd_smoke(&backend).await,
            Commands::Slides => cmd_slides(&backend).await,
            Commands::Questions { test_type, premium } => {
                cmd_questions(&backend, &test_type, premium).await
            }
            Commands::Articles { search, category } => {
                cmd_articles(&backend, search, category).await
            }
            Commands::Payment { registration_id } => cmd_payment(&backend, &registration_id).await,
        },
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        error!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn build_backend(url: Option<&str>) -> Result<HttpBackend, Box<dyn std::error::Error>> {
    let config = match url {
        Some(url) => Config::new(url)?.with_timeout(Config::from_env()?.request_timeout),
        None => Config::from_env()?,
    };
    info!("🌐 Backend: {}", config.backend_url);
    Ok(HttpBackend::new(config)?)
}

async fn cmd_smoke(backend: &HttpBackend) -> Result<(), Box<dyn std::error::Error>> {
    let mut failures = Vec::new();

    let mut check = |name: &str, outcome: Result<String, String>| match outcome {
        Ok(summary) => info!("   ✓ {:<40} {}", name, summary),
        Err(e) => {
            error!("   ✗ {:<40} {}", name, e);
            failures.push(name.to_string());
        }
    };

    check(
        endpoints::HEALTH,
        backend.health().await.map(|v| v.to_string()).map_err(|e| e.to_string()),
    );
    check(
        endpoints::SETTINGS,
        backend
            .settings()
            .await
            .map(|s| s.site_name)
            .map_err(|e| e.to_string()),
    );
    check(
        endpoints::HERO_SLIDES,
        backend
            .hero_slides()
            .await
            .map(|s| format!("{} slides", s.len()))
            .map_err(|e| e.to_string()),
    );
    check(
        endpoints::ARTICLES,
        backend
            .articles()
            .await
            .map(|a| format!("{} articles", a.len()))
            .map_err(|e| e.to_string()),
    );
    for test_type in TEST_TYPES {
        check(
            &endpoints::questions(test_type, false),
            backend
                .questions(test_type, false)
                .await
                .map(|q| format!("{} questions", q.questions.len()))
                .map_err(|e| e.to_string()),
        );
    }

    if failures.is_empty() {
        info!("✅ All checks passed");
        Ok(())
    } else {
        Err(format!("{} check(s) failed: {}", failures.len(), failures.join(", ")).into())
    }
}

async fn cmd_slides(backend: &HttpBackend) -> Result<(), Box<dyn std::error::Error>> {
    let carousel = Carousel::load(backend).await;
    if carousel.source() == SlideSource::Fallback {
        info!("⚠️  Using built-in fallback slides");
    }
    for (i, slide) in carousel.slides().iter().enumerate() {
        println!("{}. [{}] {} - {}", i + 1, slide.badge, slide.title, slide.subtitle);
        println!("   {} → {}", slide.cta_text, slide.cta_link);
    }
    Ok(())
}

async fn cmd_questions(
    backend: &HttpBackend,
    test_type: &str,
    premium: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wizard = TestWizard::loading(test_type, premium);
    wizard.finish_load(backend.questions(test_type, premium).await);

    match wizard.state() {
        WizardState::Failed(e) => return Err(ClientError::Api(e.clone()).into()),
        WizardState::Empty => {
            info!("No questions for {}", test_type);
            return Ok(());
        }
        _ => {}
    }

    println!("{} ({} questions)", test_title(test_type), wizard.questions().len());
    for (i, q) in wizard.questions().iter().enumerate() {
        let lock = if q.is_premium { " 🔒" } else { "" };
        println!("{:>3}. {}{}", i + 1, q.question, lock);
        for (n, option) in q.options.iter().enumerate() {
            println!("       {}) {}", n, option);
        }
    }
    Ok(())
}

async fn cmd_articles(
    backend: &HttpBackend,
    search: Option<String>,
    category: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let published = articles::load_published(backend).await?;
    let mut filter = ArticleFilter::default();
    if let Some(search) = search {
        filter.search = search;
    }
    if let Some(category) = category {
        filter.category = category;
    }

    info!("Categories: {}", articles::categories(&published).join(", "));
    let shown = filter.apply(&published);
    for article in &shown {
        println!(
            "{} | {} | {} | {}",
            article.id,
            article.published_label(),
            article.category,
            article.title
        );
    }
    info!("✅ {} of {} published articles", shown.len(), published.len());
    Ok(())
}

async fn cmd_payment(
    backend: &HttpBackend,
    registration_id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let page = PaymentPage::fetch(backend, registration_id).await?;
    println!("Amount: Rp {}", page.amount());
    match &page.payment {
        Some(payment) => {
            println!("Status: {}", payment.status.label());
            println!("Method: {}", payment.payment_method);
            if let Some(url) = &payment.payment_proof_url {
                println!("Proof:  {}", backend.config().asset_url(url));
            }
            if let Some(reason) = &payment.rejection_reason {
                println!("Reason: {}", reason);
            }
        }
        None => println!("Status: no proof uploaded"),
    }
    if page.view().shows_upload_form() {
        info!("Upload form would be shown");
    }
    Ok(())
}
