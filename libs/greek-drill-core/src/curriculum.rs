//! Curriculum files: one markdown file per category.
//!
//! # Format
//! ```markdown
//! ID: 1
//! Title: Present Active (λύω - I release)
//! Intro: The foundation verb - master this pattern!
//! Headword: λύω
//! - 1st Sg. | λύω | I release
//! - 2nd Sg. | λύεις | you release
//!
//! ID: 2
//! Title: Section 1A
//! - ἀκούουσιν | they hear
//! ```
//!
//! Entries are `prompt | answer` with an optional third `| hint` column.
//! Intro text may continue over several lines. Lines starting with `#` are
//! ignored.

use crate::error::{ParseError, Result};
use crate::types::{Category, Lesson, LessonEntry};
use std::collections::HashSet;

const BUNDLED_DECLENSIONS: &str = include_str!("../data/declensions.md");
const BUNDLED_VERBS: &str = include_str!("../data/verbs.md");
const BUNDLED_VOCABULARY: &str = include_str!("../data/vocabulary.md");

/// All lessons, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Curriculum {
    declensions: Vec<Lesson>,
    verbs: Vec<Lesson>,
    vocabulary: Vec<Lesson>,
}

impl Curriculum {
    pub fn new(declensions: Vec<Lesson>, verbs: Vec<Lesson>, vocabulary: Vec<Lesson>) -> Self {
        Self {
            declensions,
            verbs,
            vocabulary,
        }
    }

    /// Parse the three category files.
    pub fn from_sources(declensions: &str, verbs: &str, vocabulary: &str) -> Result<Self> {
        Ok(Self::new(parse(declensions)?, parse(verbs)?, parse(vocabulary)?))
    }

    /// The curriculum shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_sources(BUNDLED_DECLENSIONS, BUNDLED_VERBS, BUNDLED_VOCABULARY)
    }

    /// File name a category is read from inside a curriculum directory.
    pub fn file_name(category: Category) -> &'static str {
        match category {
            Category::Declension => "declensions.md",
            Category::Verb => "verbs.md",
            Category::Vocabulary => "vocabulary.md",
        }
    }

    pub fn lessons(&self, category: Category) -> &[Lesson] {
        match category {
            Category::Declension => &self.declensions,
            Category::Verb => &self.verbs,
            Category::Vocabulary => &self.vocabulary,
        }
    }

    pub fn find(&self, category: Category, id: u32) -> Option<&Lesson> {
        self.lessons(category).iter().find(|l| l.id == id)
    }
}

/// Parse one curriculum file into lessons.
pub fn parse(content: &str) -> Result<Vec<Lesson>> {
    if content.trim().is_empty() {
        return Ok(vec![]);
    }

    let mut parser = Parser::new();
    for (idx, line) in content.lines().enumerate() {
        parser.process_line(line, idx + 1)?;
    }
    parser.finalize()
}

struct LessonBuilder {
    id: u32,
    title: Option<String>,
    intro: Vec<String>,
    headword: Option<String>,
    entries: Vec<LessonEntry>,
    start_line: usize,
}

impl LessonBuilder {
    fn new(id: u32, start_line: usize) -> Self {
        Self {
            id,
            title: None,
            intro: Vec::new(),
            headword: None,
            entries: Vec::new(),
            start_line,
        }
    }

    fn build(self) -> Result<Lesson> {
        let title = self.title.ok_or(ParseError::MissingTitle {
            line: self.start_line,
        })?;
        if self.entries.is_empty() {
            return Err(ParseError::EmptyLesson { id: self.id });
        }

        let intro = self.intro.join("\n").trim().to_string();
        Ok(Lesson {
            id: self.id,
            title,
            intro: (!intro.is_empty()).then_some(intro),
            headword: self.headword,
            entries: self.entries,
        })
    }
}

struct Parser {
    current: Option<LessonBuilder>,
    in_intro: bool,
    lessons: Vec<Lesson>,
    seen_ids: HashSet<u32>,
}

impl Parser {
    fn new() -> Self {
        Self {
            current: None,
            in_intro: false,
            lessons: Vec::new(),
            seen_ids: HashSet::new(),
        }
    }

    fn process_line(&mut self, line: &str, line_num: usize) -> Result<()> {
        match Self::parse_line(line) {
            LineType::Id(id_str) => self.handle_id(id_str, line_num)?,
            LineType::Title(text) => {
                self.lesson_mut(line_num)?.title = Some(text.to_string());
                self.in_intro = false;
            }
            LineType::Intro(text) => {
                self.lesson_mut(line_num)?.intro.push(text.to_string());
                self.in_intro = true;
            }
            LineType::Headword(text) => {
                self.lesson_mut(line_num)?.headword = Some(text.to_string());
                self.in_intro = false;
            }
            LineType::Entry(text) => {
                let entry = Self::parse_entry(text, line_num)?;
                self.lesson_mut(line_num)?.entries.push(entry);
                self.in_intro = false;
            }
            LineType::Text(text) if self.in_intro => {
                self.lesson_mut(line_num)?.intro.push(text.trim().to_string());
            }
            LineType::Text(text) => {
                return Err(ParseError::MalformedEntry {
                    line: line_num,
                    value: text.trim().to_string(),
                });
            }
            LineType::Empty => self.in_intro = false,
            LineType::Comment => {}
        }
        Ok(())
    }

    fn parse_line(line: &str) -> LineType<'_> {
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix("ID:") {
            LineType::Id(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("Title:") {
            LineType::Title(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("Intro:") {
            LineType::Intro(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("Headword:") {
            LineType::Headword(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("- ") {
            LineType::Entry(rest.trim())
        } else if trimmed.starts_with('#') {
            LineType::Comment
        } else if trimmed.is_empty() {
            LineType::Empty
        } else {
            LineType::Text(line)
        }
    }

    fn parse_entry(text: &str, line_num: usize) -> Result<LessonEntry> {
        let fields: Vec<&str> = text.split('|').map(str::trim).collect();

        match fields.as_slice() {
            [prompt, answer] if !prompt.is_empty() && !answer.is_empty() => {
                Ok(LessonEntry::new(*prompt, *answer))
            }
            [prompt, answer, hint] if !prompt.is_empty() && !answer.is_empty() => {
                let entry = LessonEntry::new(*prompt, *answer);
                Ok(if hint.is_empty() { entry } else { entry.with_hint(*hint) })
            }
            _ => Err(ParseError::MalformedEntry {
                line: line_num,
                value: text.to_string(),
            }),
        }
    }

    fn handle_id(&mut self, id_str: &str, line_num: usize) -> Result<()> {
        let id = id_str.parse::<u32>().map_err(|_| ParseError::InvalidId {
            line: line_num,
            value: id_str.to_string(),
        })?;

        self.finish_current()?;
        if !self.seen_ids.insert(id) {
            return Err(ParseError::DuplicateId { id, line: line_num });
        }

        self.current = Some(LessonBuilder::new(id, line_num));
        self.in_intro = false;
        Ok(())
    }

    fn lesson_mut(&mut self, line_num: usize) -> Result<&mut LessonBuilder> {
        self.current
            .as_mut()
            .ok_or(ParseError::EntryOutsideLesson { line: line_num })
    }

    fn finish_current(&mut self) -> Result<()> {
        if let Some(builder) = self.current.take() {
            self.lessons.push(builder.build()?);
        }
        Ok(())
    }

    fn finalize(mut self) -> Result<Vec<Lesson>> {
        self.finish_current()?;
        Ok(self.lessons)
    }
}

enum LineType<'a> {
    Id(&'a str),
    Title(&'a str),
    Intro(&'a str),
    Headword(&'a str),
    Entry(&'a str),
    Text(&'a str),
    Comment,
    Empty,
}
