use crate::infra::{InMemoryCardRepository, InMemoryProductRepository};
use chrono::{Local, NaiveDate};
use clap::Args;
use forever_style::error::AppError;
use forever_style::workflows::catalog::seed::sample_products;
use forever_style::workflows::catalog::{CatalogImporter, CatalogService, Product};
use forever_style::workflows::payment::{
    inspect_card, CardInspectionRequest, CardSubmission, CardWalletService, UserId,
};
use forever_style::workflows::quiz::{classify_style, QuizSession, StyleCategory, StyleQuiz};
use forever_style::workflows::stylist::{
    convert_image_to_3d, KeywordStylist, MockModelConverter, WELCOME_MESSAGE,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Option ids picked for each question in the scripted quiz run.
const DEMO_QUIZ_PICKS: [&str; 6] = ["b", "b", "c", "a", "c", "a"];
const DEMO_STYLIST_MESSAGES: [&str; 3] = [
    "What should I wear to a summer wedding?",
    "How do I find my style?",
    "Where is my delivery?",
];

#[derive(Args, Debug)]
pub(crate) struct QuizArgs {
    /// Style tag chosen for each question, in order (e.g. classic, avant-garde)
    #[arg(long = "answer", required = true)]
    pub(crate) answers: Vec<StyleCategory>,
}

#[derive(Args, Debug)]
pub(crate) struct CardArgs {
    /// Card number as typed; spaces and dashes are ignored
    #[arg(long)]
    pub(crate) number: String,
    /// Expiry date in MM/YY form
    #[arg(long)]
    pub(crate) expiry: Option<String>,
    /// Evaluation date for the expiry check (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the evaluation date used by the checkout step (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Optional catalog CSV export to seed the product listing
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
}

pub(crate) fn run_quiz(args: QuizArgs) -> Result<(), AppError> {
    let quiz = StyleQuiz::standard();
    let mut session = QuizSession::new(&quiz);

    for tag in &args.answers {
        if let Some(question) = session.current_question() {
            println!("Q{}: {} -> {}", question.id, question.prompt, tag);
        }
        session.answer(*tag);
    }

    let snapshot = session.snapshot();
    println!(
        "Progress: {}/{} answered ({}%)",
        snapshot.answers.len(),
        quiz.question_count(),
        snapshot.progress_percent
    );

    match session.profile() {
        Some(profile) => {
            println!("\nYour style: {}", profile.title);
            println!("{}", profile.description);
            println!("Recommended products:");
            for product in &profile.recommendations {
                println!(
                    "  - {} (Rs. {}, was Rs. {})",
                    product.name,
                    product.discounted_price(),
                    product.price
                );
            }
        }
        None => {
            if let Some(leaning) = classify_style(session.state().answers()) {
                println!(
                    "Quiz incomplete; answers so far lean {} ({} questions left)",
                    leaning,
                    quiz.question_count() - snapshot.answers.len()
                );
            }
        }
    }

    if args.answers.len() > quiz.question_count() {
        println!(
            "Ignored {} answer(s) given after the quiz completed",
            args.answers.len() - quiz.question_count()
        );
    }

    Ok(())
}

pub(crate) fn run_card_check(args: CardArgs) -> Result<(), AppError> {
    let inspection = inspect_card(CardInspectionRequest {
        card_number: args.number,
        expiry_date: args.expiry,
        today: args.today,
    });

    println!("Card number: {}", inspection.card.formatted);
    println!("Detected brand: {}", inspection.brand_label);
    if let Some(expiry) = inspection.expiry {
        let verdict = if expiry.is_valid {
            "valid"
        } else {
            "invalid or expired"
        };
        println!("Expiry {}: {}", expiry.formatted, verdict);
    }

    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { today, catalog_csv } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    println!("Forever Style storefront demo ({today})");
    let products = load_catalog(catalog_csv)?;
    let repository = Arc::new(InMemoryProductRepository::seeded(products.clone()));
    let catalog = CatalogService::new(repository);

    println!("\nNew arrivals");
    match catalog.list() {
        Ok(listing) => render_products(&listing),
        Err(err) => println!("  Listing unavailable: {}", err),
    }
    match catalog.search("dress") {
        Ok(hits) => println!("Search 'dress': {} match(es)", hits.len()),
        Err(err) => println!("Search unavailable: {}", err),
    }

    println!("\nStyle quiz (scripted answers)");
    let quiz = StyleQuiz::standard();
    let mut session = QuizSession::new(&quiz);
    for pick in DEMO_QUIZ_PICKS {
        if let Some(option) = session
            .current_question()
            .and_then(|question| question.option(pick))
        {
            println!("  - {} [{}]", option.label, option.style_tag);
        }
        session.choose(pick);
    }
    match session.profile() {
        Some(profile) => println!(
            "  Result: {} with {} recommendation(s)",
            profile.title,
            profile.recommendations.len()
        ),
        None => println!("  Quiz did not complete"),
    }

    println!("\nCheckout card entry");
    let inspection = inspect_card(CardInspectionRequest {
        card_number: "5500000000000004".to_string(),
        expiry_date: Some("1230".to_string()),
        today: Some(today),
    });
    println!(
        "  {} -> {}",
        inspection.card.formatted, inspection.brand_label
    );

    let wallet = CardWalletService::new(Arc::new(InMemoryCardRepository::default()));
    let user = UserId("demo-user".to_string());
    let submission = CardSubmission {
        card_number: inspection.card.formatted.clone(),
        card_holder_name: "Asha Verma".to_string(),
        expiry_date: "12/30".to_string(),
    };
    match wallet.add_card(&user, submission, today) {
        Ok(view) => println!(
            "  Saved {} card {} for {}",
            view.brand_label, view.masked_number, view.card_holder_name
        ),
        Err(err) => println!("  Card rejected: {}", err),
    }

    println!("\nAI stylist");
    let stylist = KeywordStylist::from_catalog(&products);
    println!("  stylist: {}", WELCOME_MESSAGE);
    for message in DEMO_STYLIST_MESSAGES {
        println!("  you: {}", message);
        match stylist.reply(message) {
            Ok(reply) => {
                println!("  stylist: {}", reply.text);
                for product in &reply.products {
                    println!("    * {}", product.name);
                }
            }
            Err(err) => println!("  stylist unavailable: {}", err),
        }
    }

    if let Some(first) = products.first() {
        let converter = MockModelConverter::new(Duration::ZERO);
        match convert_image_to_3d(&converter, &first.image).await {
            Some(model_url) => println!("\n3D preview for {}: {}", first.name, model_url),
            None => println!("\n3D preview for {} unavailable", first.name),
        }
    }

    Ok(())
}

fn load_catalog(catalog_csv: Option<PathBuf>) -> Result<Vec<Product>, AppError> {
    match catalog_csv {
        Some(path) => CatalogImporter::from_path(path).map_err(AppError::from),
        None => Ok(sample_products()),
    }
}

fn render_products(products: &[Product]) {
    for product in products {
        let price = if product.discount_percentage > 0 {
            format!(
                "Rs. {} ({}% off Rs. {})",
                product.discounted_price(),
                product.discount_percentage,
                product.price
            )
        } else {
            format!("Rs. {}", product.price)
        };
        println!(
            "  - [{}] {} | {} / {} | {} | {}",
            product.id,
            product.name,
            product.category,
            product.subcategory,
            price,
            product.status.label()
        );
    }
}
