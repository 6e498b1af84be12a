//! Markdown output.
//!
//! Renders a [`Presentation`] as a sequence of Markdown blocks: a header
//! naming the file, then one section per slide closed by a horizontal rule.
//! Blocks are joined with single newlines and most blocks carry their own
//! trailing newline, so sections end up separated by blank lines.

use crate::types::{Card, ExtractedSlide, Presentation};

/// Divider appended after each file's Markdown when decks are concatenated.
pub const FILE_DIVIDER: &str = "\n\n========================================\n\n";

/// Heading introducing the card list of a slide.
const CARDS_HEADING: &str = "\n### Cards/Scenarios:\n";

/// Closing separator of every slide section.
const SLIDE_SEPARATOR: &str = "\n---\n";

/// Formatter for Markdown output.
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new formatter.
    pub fn new() -> Self {
        Self
    }

    /// Format a presentation into Markdown.
    ///
    /// No escaping is applied: slide text is emitted verbatim.
    ///
    /// # Example output
    /// ```text
    /// # Presentation: slides.html
    ///
    /// ## Slide 1: Welcome
    ///
    /// # AI at work
    ///
    /// A practical introduction
    ///
    ///
    /// ---
    /// ```
    pub fn format(&self, presentation: &Presentation) -> String {
        log::debug!(
            "Formatting {} slides from {}",
            presentation.slide_count(),
            presentation.filename
        );

        let mut blocks = vec![format!("# Presentation: {}\n", presentation.filename)];
        for slide in &presentation.slides {
            self.push_slide(&mut blocks, slide);
        }

        blocks.join("\n")
    }

    fn push_slide(&self, blocks: &mut Vec<String>, slide: &ExtractedSlide) {
        blocks.push(format!(
            "## Slide {}: {}\n",
            slide.number,
            slide.display_title()
        ));

        if let Some(heading) = &slide.heading {
            blocks.push(format!("# {}\n", heading));
        }
        if let Some(subheading) = &slide.subheading {
            blocks.push(format!("## {}\n", subheading));
        }

        blocks.extend(slide.non_empty_paragraphs().map(|p| format!("{}\n", p)));

        // A list block is opened as soon as any <li> exists, even if all are empty.
        if !slide.list_items.is_empty() {
            blocks.push("\n".to_string());
            blocks.extend(slide.non_empty_list_items().map(|item| format!("- {}", item)));
            blocks.push("\n".to_string());
        }

        if !slide.cards.is_empty() {
            blocks.push(CARDS_HEADING.to_string());
            for card in &slide.cards {
                push_card(blocks, card);
            }
        }

        blocks.push(SLIDE_SEPARATOR.to_string());
    }
}

fn push_card(blocks: &mut Vec<String>, card: &Card) {
    if let Some(title) = &card.title {
        blocks.push(format!("- **{}**", title));
    }
    if let Some(description) = &card.description {
        blocks.push(format!("  - {}", description));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(number: usize) -> ExtractedSlide {
        ExtractedSlide::new(number)
    }

    #[test]
    fn test_format_no_slides() {
        let formatter = MarkdownFormatter::new();
        let presentation = Presentation::new("slides.html");
        assert_eq!(formatter.format(&presentation), "# Presentation: slides.html\n");
    }

    #[test]
    fn test_format_single_slide() {
        let mut s = slide(1);
        s.title = Some("Welcome".to_string());
        s.heading = Some("AI at work".to_string());
        s.paragraphs = vec!["A practical introduction".to_string()];

        let mut presentation = Presentation::new("slides.html");
        presentation.add_slide(s);

        let expected = "# Presentation: slides.html\n\n\
                        ## Slide 1: Welcome\n\n\
                        # AI at work\n\n\
                        A practical introduction\n\n\
                        \n---\n";
        assert_eq!(MarkdownFormatter::new().format(&presentation), expected);
    }

    #[test]
    fn test_format_default_titles_numbered() {
        let mut presentation = Presentation::new("deck.html");
        for n in 1..=3 {
            presentation.add_slide(slide(n));
        }

        let output = MarkdownFormatter::new().format(&presentation);
        let headings: Vec<&str> = output.lines().filter(|l| l.starts_with("## Slide")).collect();
        assert_eq!(
            headings,
            vec![
                "## Slide 1: Slide 1",
                "## Slide 2: Slide 2",
                "## Slide 3: Slide 3"
            ]
        );
    }

    #[test]
    fn test_format_subheading() {
        let mut s = slide(1);
        s.subheading = Some("Why it matters".to_string());

        let mut presentation = Presentation::new("deck.html");
        presentation.add_slide(s);

        let output = MarkdownFormatter::new().format(&presentation);
        assert!(output.contains("\n## Why it matters\n"));
        assert!(!output.contains("\n# "));
    }

    #[test]
    fn test_format_skips_empty_paragraphs() {
        let mut s = slide(1);
        s.paragraphs = vec!["First".into(), String::new(), "Second".into()];

        let mut presentation = Presentation::new("deck.html");
        presentation.add_slide(s);

        let output = MarkdownFormatter::new().format(&presentation);
        assert!(output.contains("\nFirst\n\nSecond\n\n"));
        assert!(!output.contains("\n\n\n\n"));
    }

    #[test]
    fn test_format_list_block() {
        let mut s = slide(1);
        s.list_items = vec!["Alpha".into(), String::new(), "Beta".into()];

        let mut presentation = Presentation::new("deck.html");
        presentation.add_slide(s);

        let output = MarkdownFormatter::new().format(&presentation);
        assert!(output.contains("\n\n\n- Alpha\n- Beta\n\n\n"));
    }

    #[test]
    fn test_format_no_list_block_without_items() {
        let mut presentation = Presentation::new("deck.html");
        presentation.add_slide(slide(1));

        let output = MarkdownFormatter::new().format(&presentation);
        assert_eq!(
            output,
            "# Presentation: deck.html\n\n## Slide 1: Slide 1\n\n\n---\n"
        );
        assert!(!output.contains("- "));
    }

    #[test]
    fn test_format_card_title_only() {
        let mut s = slide(1);
        s.cards = vec![Card::new(Some("Tip".to_string()), None)];

        let mut presentation = Presentation::new("deck.html");
        presentation.add_slide(s);

        let output = MarkdownFormatter::new().format(&presentation);
        assert!(output.contains("\n### Cards/Scenarios:\n\n- **Tip**\n\n---\n"));
        assert!(!output.contains("  - "));
    }

    #[test]
    fn test_format_card_with_description() {
        let mut s = slide(1);
        s.cards = vec![
            Card::new(Some("Before".to_string()), Some("Manual reports".to_string())),
            Card::new(None, Some("Orphan description".to_string())),
        ];

        let mut presentation = Presentation::new("deck.html");
        presentation.add_slide(s);

        let output = MarkdownFormatter::new().format(&presentation);
        assert!(output.contains("- **Before**\n  - Manual reports\n  - Orphan description\n"));
    }

    #[test]
    fn test_format_is_deterministic() {
        let mut s = slide(1);
        s.paragraphs = vec!["Same".into()];
        let mut presentation = Presentation::new("deck.html");
        presentation.add_slide(s);

        let formatter = MarkdownFormatter::new();
        assert_eq!(formatter.format(&presentation), formatter.format(&presentation));
    }
}
