//! Page layout: 40 lines of 80 characters

pub const CHARS_PER_LINE: usize = 80;
pub const LINES_PER_PAGE: usize = 40;

/// Break page content into lines for display
pub fn format_page(content: &str) -> String {
    let chars: Vec<char> = content.chars().collect();
    chars
        .chunks(CHARS_PER_LINE)
        .take(LINES_PER_PAGE)
        .map(|line| line.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
