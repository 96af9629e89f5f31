//! First-paragraph summary extraction.
//!
//! Walks a Markdown body line by line and returns the first real paragraph
//! as a single line of text. Headings are stepped over without ending the
//! paragraph; the first blank line after collected text ends it.

/// Extract the first non-heading paragraph of `body`, joined with spaces.
///
/// Returns an empty string when the body holds nothing but headings and
/// blank lines; callers substitute their own fallback.
pub fn extract_summary(body: &str) -> String {
    let mut paragraph: Vec<&str> = Vec::new();

    for line in body.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !paragraph.is_empty() {
                break;
            }
            continue;
        }

        if trimmed.starts_with('#') {
            continue;
        }

        paragraph.push(trimmed);
    }

    paragraph.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_skips_headings() {
        let body = "# Title\n\nFirst real paragraph line one.\nLine two.\n\nSecond paragraph.";
        assert_eq!(
            extract_summary(body),
            "First real paragraph line one. Line two."
        );
    }

    #[test]
    fn test_only_headings_and_blanks() {
        assert_eq!(extract_summary("# Title\n\n## Overview\n\n\n"), "");
        assert_eq!(extract_summary(""), "");
    }

    #[test]
    fn test_heading_inside_paragraph_does_not_end_it() {
        let body = "Line one.\n## Interlude\nLine two.\n\nNext.";
        assert_eq!(extract_summary(body), "Line one. Line two.");
    }

    #[test]
    fn test_lines_are_trimmed() {
        let body = "\n\n   indented start  \n\tsecond line\t\n";
        assert_eq!(extract_summary(body), "indented start second line");
    }

    #[test]
    fn test_paragraph_at_end_of_input() {
        assert_eq!(extract_summary("## Overview\nOnly paragraph"), "Only paragraph");
    }

    #[test]
    fn test_whitespace_only_line_ends_paragraph() {
        assert_eq!(extract_summary("One\n   \nTwo"), "One");
    }
}
