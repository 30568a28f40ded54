use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

// ---------------------------------------------------------------------------
// Request dimensions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Counting,
    Numbers,
    Shapes,
    Arithmetic,
    Multiply,
    Money,
    Calculations,
}

impl Topic {
    pub const ALL: [Topic; 7] = [
        Topic::Counting,
        Topic::Numbers,
        Topic::Shapes,
        Topic::Arithmetic,
        Topic::Multiply,
        Topic::Money,
        Topic::Calculations,
    ];

    /// Identifier used on the wire and in the localization table.
    pub fn id(self) -> &'static str {
        match self {
            Topic::Counting     => "counting",
            Topic::Numbers      => "numbers",
            Topic::Shapes       => "shapes",
            Topic::Arithmetic   => "arithmetic",
            Topic::Multiply     => "multiply",
            Topic::Money        => "money",
            Topic::Calculations => "calculations",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Topic::Counting     => "🔢",
            Topic::Numbers      => "🔟",
            Topic::Shapes       => "📦",
            Topic::Arithmetic   => "➕",
            Topic::Multiply     => "✖️",
            Topic::Money        => "💰",
            Topic::Calculations => "🧮",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Topic::Counting     => "Counting",
            Topic::Numbers      => "Number Sense",
            Topic::Shapes       => "3D Shapes",
            Topic::Arithmetic   => "Add & Subtract",
            Topic::Multiply     => "Multiply & Divide",
            Topic::Money        => "Money",
            Topic::Calculations => "Calculations",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Topic {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .into_iter()
            .find(|t| t.id() == s.trim())
            .ok_or_else(|| ParseError::UnknownTopic(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Lenient parse for untrusted input: anything unrecognised becomes `Easy`.
    pub fn parse_or_default(s: &str) -> Difficulty {
        s.parse().unwrap_or_else(|_| {
            warn!("unknown difficulty '{s}', falling back to easy");
            Difficulty::Easy
        })
    }

    /// Hard questions drop the multiple-choice scaffolding on most shapes.
    pub fn is_hard(self) -> bool {
        self == Difficulty::Hard
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy   => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard   => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy"   => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard"   => Ok(Difficulty::Hard),
            _        => Err(ParseError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Curriculum subdivision of the calculations topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Chapter {
    /// Column addition and subtraction, with and without exchange.
    ColumnMethods,
    /// Fact families, inverse operations, doubling and halving.
    Relationships,
}

impl Chapter {
    pub const ALL: [Chapter; 2] = [Chapter::ColumnMethods, Chapter::Relationships];

    pub fn number(self) -> u8 {
        match self {
            Chapter::ColumnMethods => 1,
            Chapter::Relationships => 2,
        }
    }
}

impl TryFrom<u8> for Chapter {
    type Error = ParseError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Chapter::ColumnMethods),
            2 => Ok(Chapter::Relationships),
            _ => Err(ParseError::InvalidChapter(n)),
        }
    }
}

impl From<Chapter> for u8 {
    fn from(c: Chapter) -> u8 {
        c.number()
    }
}

impl fmt::Display for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chapter {}", self.number())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Vi,
}

impl Language {
    /// Fallback language for localization misses.
    pub const DEFAULT: Language = Language::En;

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Vi => "vi",
        }
    }

    /// `None` for codes without a registered table (e.g. `"fr"`).
    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "vi" => Some(Language::Vi),
            _    => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| ParseError::UnknownLanguage(s.to_string()))
    }
}

/// Everything needed to generate one question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub topic: Topic,
    pub difficulty: Difficulty,
    /// Only read by [`Topic::Calculations`]; a random chapter is used when absent.
    #[serde(default)]
    pub chapter: Option<Chapter>,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl QuestionRequest {
    /// Defaults: easy, no chapter, English, entropy-seeded.
    pub fn new(topic: Topic) -> Self {
        QuestionRequest {
            topic,
            difficulty: Difficulty::Easy,
            chapter: None,
            language: Language::DEFAULT,
            rng_seed: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Question output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    MultipleChoice,
    FreeInput,
}

/// A canonical answer or a multiple-choice option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum Answer {
    Number(u32),
    /// Whole dollars, shown as `$n`.
    Dollars(u32),
    Text(String),
}

impl Answer {
    /// Compare a submitted answer against this one.
    ///
    /// Numeric answers compare parsed integers (surrounding whitespace is
    /// ignored, `Dollars` also accepts a leading `$`); text compares exactly.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Answer::Number(n) => candidate.trim().parse::<u32>().ok() == Some(*n),
            Answer::Dollars(n) => {
                let c = candidate.trim();
                let c = c.strip_prefix('$').unwrap_or(c);
                c.trim().parse::<u32>().ok() == Some(*n)
            }
            Answer::Text(s) => candidate == s,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Number(n)  => write!(f, "{}", n),
            Answer::Dollars(n) => write!(f, "${}", n),
            Answer::Text(s)    => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnOperator {
    Plus,
    Minus,
}

impl fmt::Display for ColumnOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnOperator::Plus  => write!(f, "+"),
            ColumnOperator::Minus => write!(f, "−"),
        }
    }
}

/// Vertically laid out two-operand calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub top: u32,
    pub bottom: u32,
    pub operator: ColumnOperator,
}

impl fmt::Display for ColumnLayout {
    /// Renders as
    ///
    /// ```text
    ///   47
    /// + 25
    /// ----
    ///    ?
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.top.to_string().len().max(self.bottom.to_string().len());
        let width = digits + 2;
        writeln!(f, "{:>width$}", self.top)?;
        writeln!(f, "{} {:>digits$}", self.operator, self.bottom)?;
        writeln!(f, "{}", "-".repeat(width))?;
        write!(f, "{:>width$}", "?")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub topic: Topic,
    pub difficulty: Difficulty,
    /// Stable name of the question shape, e.g. `"count_back"`.
    pub kind: String,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<ColumnLayout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<Answer>>,
    pub correct_answer: Answer,
    pub hint: String,
    pub visual_glyph: String,
}

impl Question {
    pub fn interaction_mode(&self) -> InteractionMode {
        match self.choices {
            Some(_) => InteractionMode::MultipleChoice,
            None    => InteractionMode::FreeInput,
        }
    }

    pub fn is_correct(&self, candidate: &str) -> bool {
        self.correct_answer.matches(candidate)
    }

    /// Prompt followed by the column block, if any.
    pub fn display_text(&self) -> String {
        match &self.column {
            Some(column) => format!("{}\n{}", self.prompt, column),
            None         => self.prompt.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_answers_compare_parsed_integers() {
        let a = Answer::Number(42);
        assert!(a.matches("42"));
        assert!(a.matches(" 42\n"));
        assert!(!a.matches("41"));
        assert!(!a.matches("forty-two"));
        assert!(!a.matches("$42"));
    }

    #[test]
    fn dollar_answers_accept_optional_sign() {
        let a = Answer::Dollars(7);
        assert!(a.matches("$7"));
        assert!(a.matches("7"));
        assert!(!a.matches("$8"));
        assert_eq!(a.to_string(), "$7");
    }

    #[test]
    fn text_answers_compare_exactly() {
        let a = Answer::Text("Cube".into());
        assert!(a.matches("Cube"));
        assert!(!a.matches("cube"));
        assert!(!a.matches("Cube "));
    }

    #[test]
    fn difficulty_parsing_is_strict_or_lenient() {
        assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert!("extreme".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::parse_or_default("extreme"), Difficulty::Easy);
        assert_eq!(Difficulty::parse_or_default("hard"), Difficulty::Hard);
    }

    #[test]
    fn chapter_accepts_only_one_and_two() {
        assert_eq!(Chapter::try_from(1), Ok(Chapter::ColumnMethods));
        assert_eq!(Chapter::try_from(2), Ok(Chapter::Relationships));
        assert_eq!(Chapter::try_from(3), Err(ParseError::InvalidChapter(3)));
    }

    #[test]
    fn topics_round_trip_through_their_ids() {
        for topic in Topic::ALL {
            assert_eq!(topic.id().parse::<Topic>(), Ok(topic));
        }
        assert!("geometry".parse::<Topic>().is_err());
    }

    #[test]
    fn column_layout_right_aligns_operands() {
        let layout = ColumnLayout { top: 47, bottom: 5, operator: ColumnOperator::Plus };
        assert_eq!(layout.to_string(), "  47\n+  5\n----\n   ?");
    }
}
