//! Puzzle data model served by the kanjidle API
//!
//! Every wire string maps to an enum variant through the `as_str` /
//! `FromStr` table on that enum; serde goes through the same table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::application::errors::UnknownVariant;

/// Placeholder shown where the hidden answer goes
pub const ANSWER_SLOT: &str = "◯";

/// Which side of a hint pair the answer sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Location {
    Left,
    Right,
}

impl Location {
    #[cfg(test)]
    pub const ALL: [Location; 2] = [Location::Left, Location::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Left => "L",
            Location::Right => "R",
        }
    }
}

impl FromStr for Location {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" => Ok(Location::Left),
            "R" => Ok(Location::Right),
            other => Err(UnknownVariant::new("location", other)),
        }
    }
}

impl TryFrom<String> for Location {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.as_str().to_string()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Puzzle source: today's fixed puzzle or a random one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seed {
    Today,
    Random,
}

impl Seed {
    #[cfg(test)]
    pub const ALL: [Seed; 2] = [Seed::Today, Seed::Random];

    pub fn as_str(&self) -> &'static str {
        match self {
            Seed::Today => "today",
            Seed::Random => "random",
        }
    }
}

impl FromStr for Seed {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" => Ok(Seed::Today),
            "random" => Ok(Seed::Random),
            other => Err(UnknownVariant::new("seed", other)),
        }
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Puzzle variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Classic,
    Hidden,
}

impl Mode {
    #[cfg(test)]
    pub const ALL: [Mode; 2] = [Mode::Classic, Mode::Hidden];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Classic => "classic",
            Mode::Hidden => "hidden",
        }
    }
}

impl FromStr for Mode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(Mode::Classic),
            "hidden" => Ok(Mode::Hidden),
            other => Err(UnknownVariant::new("mode", other)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Challenge tier, ordered from easiest to hardest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Difficulty {
    Simple,
    Easy,
    Normal,
    Hard,
    Lunatic,
    Lunatic2,
}

impl Difficulty {
    #[cfg(test)]
    pub const ALL: [Difficulty; 6] = [
        Difficulty::Simple,
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Lunatic,
        Difficulty::Lunatic2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Simple => "simple",
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::Lunatic => "lunatic",
            Difficulty::Lunatic2 => "lunatic2",
        }
    }
}

impl FromStr for Difficulty {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Difficulty::Simple),
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            "lunatic" => Ok(Difficulty::Lunatic),
            "lunatic2" => Ok(Difficulty::Lunatic2),
            other => Err(UnknownVariant::new("difficulty", other)),
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.as_str().to_string()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single clue: a character that forms a word with the answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub answer: Location,
    #[serde(rename = "hint")]
    pub text: String,
}

impl Hint {
    #[cfg(test)]
    pub fn new(answer: Location, text: impl Into<String>) -> Self {
        Self {
            answer,
            text: text.into(),
        }
    }

    /// Render the word with `answer` in the answer slot, or `◯` when hidden
    pub fn render(&self, answer: Option<&str>) -> String {
        let slot = answer.unwrap_or(ANSWER_SLOT);
        match self.answer {
            Location::Left => format!("{}{}", slot, self.text),
            Location::Right => format!("{}{}", self.text, slot),
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

/// Metadata about the answer character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiMeta {
    pub level: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub stroke_count: u32,
    pub radical: String,
    #[serde(rename = "on")]
    pub on_readings: Vec<String>,
    /// Each entry is a reading split into parts (stem, then okurigana when present)
    #[serde(rename = "kun")]
    pub kun_readings: Vec<Vec<String>>,
}

impl KanjiMeta {
    /// Kun readings with their parts joined by `.`
    pub fn kun_display(&self) -> Vec<String> {
        self.kun_readings.iter().map(|parts| parts.join(".")).collect()
    }
}

/// A complete puzzle as returned by one API call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub hints: Vec<Hint>,
    pub extra_hints: Vec<Hint>,
    pub answer: String,
    pub answer_meta: KanjiMeta,
    pub difficulty: Difficulty,
}

impl Puzzle {
    /// Render hints separated by an ideographic space
    pub fn pretty(hints: &[Hint], answer: Option<&str>) -> String {
        hints
            .iter()
            .map(|h| h.render(answer))
            .collect::<Vec<_>>()
            .join("\u{3000}")
    }

    pub fn pretty_hints(&self, reveal: bool) -> String {
        Self::pretty(&self.hints, reveal.then_some(self.answer.as_str()))
    }

    pub fn pretty_extra_hints(&self, reveal: bool) -> String {
        Self::pretty(&self.extra_hints, reveal.then_some(self.answer.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_meta() -> KanjiMeta {
        KanjiMeta {
            level: "10".to_string(),
            class_name: "kyoiku".to_string(),
            stroke_count: 5,
            radical: "生".to_string(),
            on_readings: vec!["セイ".to_string(), "ショウ".to_string()],
            kun_readings: vec![
                vec!["い".to_string(), "きる".to_string()],
                vec!["なま".to_string()],
            ],
        }
    }

    #[test]
    fn test_enum_tables_cover_every_variant() {
        for loc in Location::ALL {
            assert_eq!(loc.as_str().parse::<Location>().unwrap(), loc);
        }
        for seed in Seed::ALL {
            assert_eq!(seed.as_str().parse::<Seed>().unwrap(), seed);
        }
        for mode in Mode::ALL {
            assert_eq!(mode.as_str().parse::<Mode>().unwrap(), mode);
        }
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.as_str().parse::<Difficulty>().unwrap(), difficulty);
        }
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let err = "X".parse::<Location>().unwrap_err();
        assert_eq!(err, UnknownVariant::new("location", "X"));
        assert_eq!(err.to_string(), "unknown location `X`");

        assert!("Normal".parse::<Difficulty>().is_err());
        assert!("lunatic3".parse::<Difficulty>().is_err());
        assert!("yesterday".parse::<Seed>().is_err());
    }

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Simple < Difficulty::Easy);
        assert!(Difficulty::Easy < Difficulty::Normal);
        assert!(Difficulty::Normal < Difficulty::Hard);
        assert!(Difficulty::Hard < Difficulty::Lunatic);
        assert!(Difficulty::Lunatic < Difficulty::Lunatic2);

        let mut shuffled = vec![Difficulty::Lunatic2, Difficulty::Simple, Difficulty::Hard];
        shuffled.sort();
        assert_eq!(shuffled, vec![Difficulty::Simple, Difficulty::Hard, Difficulty::Lunatic2]);
    }

    #[test]
    fn test_hint_render() {
        let left = Hint::new(Location::Left, "活");
        let right = Hint::new(Location::Right, "学");

        assert_eq!(left.to_string(), "◯活");
        assert_eq!(right.to_string(), "学◯");
        assert_eq!(left.render(Some("生")), "生活");
        assert_eq!(right.render(Some("生")), "学生");
    }

    #[test]
    fn test_puzzle_pretty() {
        let puzzle = Puzzle {
            hints: vec![Hint::new(Location::Left, "活"), Hint::new(Location::Right, "学")],
            extra_hints: vec![Hint::new(Location::Left, "命")],
            answer: "生".to_string(),
            answer_meta: sample_meta(),
            difficulty: Difficulty::Easy,
        };

        assert_eq!(puzzle.pretty_hints(false), "◯活\u{3000}学◯");
        assert_eq!(puzzle.pretty_hints(true), "生活\u{3000}学生");
        assert_eq!(puzzle.pretty_extra_hints(true), "生命");
        assert_eq!(Puzzle::pretty(&[], None), "");
    }

    #[test]
    fn test_kun_display_keeps_entry_shape() {
        assert_eq!(sample_meta().kun_display(), vec!["い.きる", "なま"]);
    }

    #[test]
    fn test_meta_serializes_with_wire_names() {
        let value = serde_json::to_value(sample_meta()).unwrap();
        assert_eq!(value["class"], "kyoiku");
        assert_eq!(value["stroke_count"], 5);
        assert_eq!(value["on"][1], "ショウ");
        assert_eq!(value["kun"][0][1], "きる");
        assert!(value.get("class_name").is_none());
    }
}
