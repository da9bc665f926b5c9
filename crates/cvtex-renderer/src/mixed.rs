//! Paragraph and bullet-list rendering.

use cvtex_resume::{Block, MixedContent};

use crate::escape::escape_latex;

/// Tight list without vertical padding between items.
const ITEMIZE_BEGIN: &str = r"\begin{itemize}[noitemsep, topsep=0pt, partopsep=0pt, parsep=0pt]";
const ITEMIZE_END: &str = r"\end{itemize}";

/// Render mixed content in source order.
///
/// Paragraphs become escaped text followed by a paragraph break; lists
/// become tight `itemize` environments with each item escaped. Blank
/// paragraphs, blank items and lists with no items produce nothing.
#[must_use]
pub fn render_mixed_content(content: &MixedContent) -> String {
    let mut out = String::new();
    for block in content.blocks() {
        match block {
            Block::Paragraph(text) => {
                if !text.trim().is_empty() {
                    out.push_str(&escape_latex(text));
                    out.push_str("\n\n");
                }
            }
            Block::List(items) => {
                let items = items
                    .iter()
                    .filter(|item| !item.trim().is_empty())
                    .map(|item| escape_latex(item));
                if write_itemize(&mut out, items) {
                    out.push('\n');
                }
            }
        }
    }
    out
}

/// Append an `itemize` environment of already-rendered items.
///
/// Returns `false` and writes nothing when there are no items, since an
/// empty `itemize` does not compile.
pub(crate) fn write_itemize(out: &mut String, items: impl IntoIterator<Item = String>) -> bool {
    let mut items = items.into_iter().peekable();
    if items.peek().is_none() {
        return false;
    }
    out.push_str(ITEMIZE_BEGIN);
    out.push('\n');
    for item in items {
        out.push_str("    \\item ");
        out.push_str(&item);
        out.push('\n');
    }
    out.push_str(ITEMIZE_END);
    out.push('\n');
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_paragraph_then_list() {
        let content = MixedContent::new(vec![
            Block::Paragraph("Intro paragraph.".to_owned()),
            Block::List(vec!["Item one".to_owned(), "Item two".to_owned()]),
        ]);

        assert_eq!(
            render_mixed_content(&content),
            "Intro paragraph.\n\n\
             \\begin{itemize}[noitemsep, topsep=0pt, partopsep=0pt, parsep=0pt]\n\
             \x20   \\item Item one\n\
             \x20   \\item Item two\n\
             \\end{itemize}\n\n"
        );
    }

    #[test]
    fn test_order_is_preserved() {
        let content = MixedContent::new(vec![
            Block::List(vec!["first".to_owned()]),
            Block::Paragraph("second".to_owned()),
        ]);

        let rendered = render_mixed_content(&content);

        let list = rendered.find("first").unwrap();
        let paragraph = rendered.find("second").unwrap();
        assert!(list < paragraph);
    }

    #[test]
    fn test_items_are_escaped() {
        let content = MixedContent::new(vec![Block::List(vec!["100% & more".to_owned()])]);
        assert!(render_mixed_content(&content).contains(r"\item 100\% \& more"));
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(render_mixed_content(&MixedContent::default()), "");
    }

    #[test]
    fn test_empty_list_and_blank_paragraph_skipped() {
        let content = MixedContent::new(vec![
            Block::List(vec![]),
            Block::Paragraph("   ".to_owned()),
            Block::List(vec![String::new()]),
        ]);
        assert_eq!(render_mixed_content(&content), "");
    }
}
