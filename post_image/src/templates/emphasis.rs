use std::ops::Range;

/// Escapes `& < > "` and turns newlines into `<br>`.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\n' => escaped.push_str("<br>"),
            _ => escaped.push(c),
        }
    }
    escaped
}

enum Segment<'a> {
    Plain(&'a str),
    Emphasized(&'a str),
}

/// Wraps the first case-insensitive match of each phrase in a colored `<em>`.
///
/// Longer phrases are placed first and a phrase never matches inside text an
/// earlier phrase already claimed. The matched text keeps its original casing.
pub fn apply_emphasis(text: &str, phrases: &[String], color: &str) -> String {
    let mut ordered: Vec<&str> = phrases
        .iter()
        .map(String::as_str)
        .filter(|phrase| !phrase.is_empty())
        .collect();
    ordered.sort_by_key(|phrase| std::cmp::Reverse(phrase.chars().count()));

    let mut segments = vec![Segment::Plain(text)];
    for phrase in ordered {
        let found = segments.iter().enumerate().find_map(|(index, segment)| match segment {
            Segment::Plain(plain) => find_case_insensitive(plain, phrase).map(|range| (index, range)),
            Segment::Emphasized(_) => None,
        });
        let Some((index, range)) = found else {
            continue;
        };

        let Segment::Plain(plain) = segments[index] else {
            continue;
        };
        let split = [
            Segment::Plain(&plain[..range.start]),
            Segment::Emphasized(&plain[range.clone()]),
            Segment::Plain(&plain[range.end..]),
        ];
        segments.splice(index..=index, split);
    }

    segments
        .iter()
        .map(|segment| match segment {
            Segment::Plain(plain) => escape_html(plain),
            Segment::Emphasized(matched) => format!(
                "<em style=\"color:{color};font-style:normal\">{}</em>",
                escape_html(matched)
            ),
        })
        .collect()
}

fn find_case_insensitive(haystack: &str, needle: &str) -> Option<Range<usize>> {
    let needle: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return None;
    }

    'start: for (start, _) in haystack.char_indices() {
        let mut expected = needle.iter();
        for (offset, c) in haystack[start..].char_indices() {
            for lower in c.to_lowercase() {
                match expected.next() {
                    Some(want) if *want == lower => {}
                    _ => continue 'start,
                }
            }
            if expected.len() == 0 {
                return Some(start..start + offset + c.len_utf8());
            }
        }
        // Haystack ran out mid-match; later starts are shorter still.
        return None;
    }
    None
}
