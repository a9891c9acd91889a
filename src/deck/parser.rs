const SEPARATOR: &str = "---";

/// Split Markdown into slide bodies on `---` lines.
///
/// Bodies are trimmed of surrounding blank lines; empty bodies are dropped.
pub fn split_slides(source: &str) -> Vec<String> {
    let mut slides = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in source.lines() {
        if line.trim() == SEPARATOR {
            push_slide(&mut slides, &current);
            current.clear();
        } else {
            current.push(line);
        }
    }
    push_slide(&mut slides, &current);
    slides
}

fn push_slide(slides: &mut Vec<String>, lines: &[&str]) {
    let is_blank = |line: &&str| line.trim().is_empty();
    let Some(first) = lines.iter().position(|line| !is_blank(line)) else {
        return;
    };
    let last = lines.iter().rposition(|line| !is_blank(line)).unwrap_or(first);
    slides.push(lines[first..=last].join("\n"));
}

/// Text of the first `#` or `##` ATX heading, trimmed.
///
/// Deeper headings are not titles. A heading with no text is skipped.
pub fn first_heading(body: &str) -> Option<String> {
    body.lines().find_map(|line| {
        let line = line.trim_start();
        let text = line
            .strip_prefix("## ")
            .or_else(|| line.strip_prefix("# "))?;
        let text = text.trim().trim_end_matches('#').trim();
        (!text.is_empty()).then(|| text.to_string())
    })
}
