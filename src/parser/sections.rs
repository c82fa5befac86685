use super::constants::SEPARATOR;

/// A contiguous block of tooltip lines bounded by separator lines.
pub type Section = Vec<String>;

/// Split raw clipboard text into sections. The game terminates the
/// clipboard with a newline, producing one trailing blank line that is
/// discarded; empty sections are dropped as well.
pub fn tokenize(clipboard: &str) -> Vec<Section> {
    let mut lines: Vec<&str> = clipboard.split('\n').map(|line| line.trim_end()).collect();
    if lines.last().map_or(false, |line| line.is_empty()) {
        lines.pop();
    }

    let mut sections: Vec<Section> = vec![Vec::new()];
    for line in lines {
        if line == SEPARATOR {
            sections.push(Vec::new());
        } else if !line.is_empty() {
            if let Some(current) = sections.last_mut() {
                current.push(line.to_string());
            }
        }
    }
    sections.retain(|section| !section.is_empty());
    sections
}
