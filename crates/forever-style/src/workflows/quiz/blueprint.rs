use std::collections::BTreeMap;

use super::domain::{QuizOption, QuizQuestion, StyleCategory, StyleProfile};
use crate::workflows::catalog::seed::sample_products;
use crate::workflows::catalog::{Product, ProductSummary};

/// Immutable question set and result profiles for one quiz.
#[derive(Debug, Clone)]
pub struct StyleQuiz {
    questions: Vec<QuizQuestion>,
    profiles: BTreeMap<StyleCategory, StyleProfile>,
}

impl StyleQuiz {
    /// The six-question storefront quiz.
    pub fn standard() -> Self {
        let catalog = sample_products();
        let profiles = standard_profiles(&catalog)
            .into_iter()
            .map(|profile| (profile.category, profile))
            .collect();

        Self {
            questions: standard_questions(),
            profiles,
        }
    }

    /// Build a quiz from custom questions, keeping the standard profiles.
    pub fn with_questions(questions: Vec<QuizQuestion>) -> Self {
        let mut quiz = Self::standard();
        quiz.questions = questions;
        quiz
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn question(&self, index: usize) -> Option<&QuizQuestion> {
        self.questions.get(index)
    }

    pub fn profile(&self, category: StyleCategory) -> &StyleProfile {
        // standard_profiles covers every category
        &self.profiles[&category]
    }

    pub fn profiles(&self) -> impl Iterator<Item = &StyleProfile> {
        self.profiles.values()
    }
}

fn option(id: &'static str, label: &'static str, style_tag: StyleCategory) -> QuizOption {
    QuizOption {
        id,
        label,
        style_tag,
    }
}

fn standard_questions() -> Vec<QuizQuestion> {
    use StyleCategory::*;

    vec![
        QuizQuestion {
            id: 1,
            prompt: "Which colors do you prefer wearing most often?",
            options: vec![
                option("a", "Neutrals (Black, White, Grey, Beige)", Minimalist),
                option("b", "Bright and vibrant colors", Bold),
                option("c", "Earth tones (Brown, Olive, Rust)", Classic),
                option("d", "Pastels and soft shades", Romantic),
            ],
        },
        QuizQuestion {
            id: 2,
            prompt: "What type of fit do you prefer for your everyday clothes?",
            options: vec![
                option("a", "Loose and comfortable", Casual),
                option("b", "Well-tailored and structured", Classic),
                option("c", "Form-fitting to show off my shape", Bold),
                option("d", "Oversized or experimental silhouettes", AvantGarde),
            ],
        },
        QuizQuestion {
            id: 3,
            prompt: "Which footwear do you reach for most often?",
            options: vec![
                option("a", "Sneakers or comfortable flats", Casual),
                option("b", "Elegant heels or formal shoes", Classic),
                option("c", "Statement shoes or trendy designs", Bold),
                option("d", "Boots or ankle boots", Edgy),
            ],
        },
        QuizQuestion {
            id: 4,
            prompt: "How would you describe your ideal shopping experience?",
            options: vec![
                option("a", "Finding timeless pieces that last for years", Classic),
                option("b", "Discovering the latest trends and unique items", Bold),
                option(
                    "c",
                    "Getting basics that can be mixed and matched easily",
                    Minimalist,
                ),
                option(
                    "d",
                    "Finding comfortable items that also look put-together",
                    Casual,
                ),
            ],
        },
        QuizQuestion {
            id: 5,
            prompt: "Which of these occasions do you dress up for most often?",
            options: vec![
                option("a", "Office or professional settings", Classic),
                option("b", "Casual outings with friends", Casual),
                option("c", "Special events or nights out", Bold),
                option("d", "Creative or artistic environments", AvantGarde),
            ],
        },
        QuizQuestion {
            id: 6,
            prompt: "Which of these style icons do you admire most?",
            options: vec![
                option(
                    "a",
                    "Audrey Hepburn or George Clooney (timeless elegance)",
                    Classic,
                ),
                option("b", "Rihanna or Harry Styles (experimental and bold)", Bold),
                option(
                    "c",
                    "Jennifer Aniston or Ryan Gosling (casual sophistication)",
                    Casual,
                ),
                option(
                    "d",
                    "Zendaya or Timothée Chalamet (trendy and fashion-forward)",
                    AvantGarde,
                ),
            ],
        },
    ]
}

fn picks(catalog: &[Product], ids: [&str; 3]) -> Vec<ProductSummary> {
    ids.iter()
        .filter_map(|id| catalog.iter().find(|product| product.id.as_str() == *id))
        .map(Product::summary)
        .collect()
}

fn standard_profiles(catalog: &[Product]) -> Vec<StyleProfile> {
    use StyleCategory::*;

    vec![
        StyleProfile {
            category: Classic,
            title: "Classic Elegance",
            description: "Your style is timeless and sophisticated. You value quality over quantity and prefer well-tailored pieces that never go out of style.",
            recommendations: picks(catalog, ["prod1", "prod5", "prod2"]),
        },
        StyleProfile {
            category: Casual,
            title: "Casual Cool",
            description: "You prioritize comfort while still looking put-together. Your wardrobe consists of versatile, relaxed pieces that can be dressed up or down.",
            recommendations: picks(catalog, ["prod6", "prod2", "prod4"]),
        },
        StyleProfile {
            category: Bold,
            title: "Bold & Expressive",
            description: "You're not afraid to stand out and express yourself through fashion. You love vibrant colors, unique patterns, and statement pieces.",
            recommendations: picks(catalog, ["prod3", "prod5", "prod4"]),
        },
        StyleProfile {
            category: Minimalist,
            title: "Minimalist Chic",
            description: "You believe less is more. Your wardrobe consists of clean lines, neutral colors, and high-quality basics that can be effortlessly combined.",
            recommendations: picks(catalog, ["prod1", "prod2", "prod6"]),
        },
        StyleProfile {
            category: AvantGarde,
            title: "Avant-Garde Explorer",
            description: "You're a fashion pioneer who loves to experiment with cutting-edge trends, unique silhouettes, and unexpected combinations.",
            recommendations: picks(catalog, ["prod5", "prod3", "prod4"]),
        },
        StyleProfile {
            category: Edgy,
            title: "Edgy & Modern",
            description: "Your style is bold and contemporary with a hint of rebellion. You're drawn to modern silhouettes, dark colors, and interesting details.",
            recommendations: picks(catalog, ["prod5", "prod2", "prod4"]),
        },
        StyleProfile {
            category: Romantic,
            title: "Romantic & Feminine",
            description: "You're drawn to soft, flowing fabrics, delicate details, and feminine silhouettes. Your style is graceful and subtly elegant.",
            recommendations: picks(catalog, ["prod3", "prod1", "prod6"]),
        },
    ]
}
