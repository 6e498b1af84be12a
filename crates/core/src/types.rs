//! Domain types for representing extracted slide deck content.

/// Represents an entire slide deck with its extracted content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presentation {
    /// Original filename (without path).
    pub filename: String,

    /// Slides in document order.
    pub slides: Vec<ExtractedSlide>,
}

impl Presentation {
    /// Create a new, empty presentation for the given filename.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            slides: Vec::new(),
        }
    }

    /// Add a slide to the presentation.
    pub fn add_slide(&mut self, slide: ExtractedSlide) {
        self.slides.push(slide);
    }

    /// Number of slides found in the deck.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

/// A single extracted slide.
///
/// Optional fields distinguish "element not present" (`None`) from
/// "element present but without text" (`Some("")`); the formatter emits
/// a line for the latter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedSlide {
    /// 1-based slide number.
    pub number: usize,

    /// Raw `data-title` attribute, if the slide carries one.
    pub title: Option<String>,

    /// Text of the first `h1` in the slide.
    pub heading: Option<String>,

    /// Text of the first `h2` in the slide.
    pub subheading: Option<String>,

    /// Text of every paragraph, including empty ones.
    pub paragraphs: Vec<String>,

    /// Text of every list item, including empty ones.
    pub list_items: Vec<String>,

    /// Card-like components, in document order.
    pub cards: Vec<Card>,
}

impl ExtractedSlide {
    /// Create a new slide with the given number.
    pub fn new(number: usize) -> Self {
        Self {
            number,
            ..Self::default()
        }
    }

    /// The title shown in the slide heading, falling back to "Slide N".
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("Slide {}", self.number),
        }
    }

    /// Get non-empty paragraph texts.
    pub fn non_empty_paragraphs(&self) -> impl Iterator<Item = &str> {
        non_empty(&self.paragraphs)
    }

    /// Get non-empty list item texts.
    pub fn non_empty_list_items(&self) -> impl Iterator<Item = &str> {
        non_empty(&self.list_items)
    }
}

fn non_empty(texts: &[String]) -> impl Iterator<Item = &str> {
    texts.iter().map(String::as_str).filter(|s| !s.is_empty())
}

/// A highlighted sub-component of a slide (tip, scenario, example).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    /// Text of the first title-like element inside the card.
    pub title: Option<String>,

    /// Text of the first description-like element inside the card.
    pub description: Option<String>,
}

impl Card {
    /// Create a card from its optional title and description.
    pub fn new(title: Option<String>, description: Option<String>) -> Self {
        Self { title, description }
    }
}
