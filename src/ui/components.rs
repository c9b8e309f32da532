//! Reusable UI pieces: star rows, breed cards, slide dots and text wrapping.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::breeds::{BreedRecord, MAX_STARS};
use crate::theme::Theme;

pub const PAW: &str = "󰩃";
const STAR: &str = "★";
const STAR_EMPTY: &str = "☆";

/// Indent of the description under a breed name
const DESCRIPTION_INDENT: &str = "    ";

/// Greedy word wrap to `width` columns. Words longer than a line (URLs)
/// are split across lines so nothing is cut off.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        if current_len > 0 && current_len + 1 + word.len() <= width {
            current.push(' ');
            current.extend(word.iter());
            current_len += 1 + word.len();
            continue;
        }

        if current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        while word.len() > width {
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        current_len = word.len();
        current = word.into_iter().collect();
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Five stars, the first `breed.rating` of them filled
pub fn star_spans(breed: &BreedRecord, theme: &Theme) -> Vec<Span<'static>> {
    (1..=MAX_STARS)
        .map(|star| {
            if breed.is_star_filled(star) {
                Span::styled(STAR, Style::default().fg(theme.star))
            } else {
                Span::styled(STAR_EMPTY, Style::default().fg(theme.star_empty))
            }
        })
        .collect()
}

/// Header, wrapped description, blank spacer. `width` is the panel's inner width.
pub fn breed_card(breed: &BreedRecord, selected: bool, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let name_style = if selected {
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };

    let mut header = vec![
        Span::styled(if selected { "▶ " } else { "  " }, Style::default().fg(theme.accent)),
        Span::styled(PAW, Style::default().fg(theme.accent)),
        Span::styled(format!(" {:<12}", breed.name), name_style),
    ];
    header.extend(star_spans(breed, theme));

    let mut lines = vec![Line::from(header)];
    for row in wrap_text(&breed.description, width.saturating_sub(DESCRIPTION_INDENT.len())) {
        lines.push(Line::from(Span::styled(
            format!("{}{}", DESCRIPTION_INDENT, row),
            Style::default().fg(theme.text_dim),
        )));
    }

    if selected {
        for line in lines.iter_mut() {
            line.style = Style::default().bg(theme.bg_selected);
        }
    }
    lines.push(Line::from(""));
    lines
}

/// `○ ● ○` style position indicator
pub fn slide_dots(index: usize, len: usize, theme: &Theme) -> Line<'static> {
    let spans: Vec<Span> = (0..len)
        .flat_map(|i| {
            let dot = if i == index {
                Span::styled("●", Style::default().fg(theme.accent))
            } else {
                Span::styled("○", Style::default().fg(theme.inactive))
            };
            [dot, Span::raw(" ")]
        })
        .collect();
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breeds::BreedList;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_star_spans_fill_up_to_rating() {
        let theme = Theme::default();
        let mut breeds = BreedList::seeded();
        let breed = breeds.rate(3, 2).unwrap().clone();

        let spans = star_spans(&breed, &theme);
        let symbols: String = spans.iter().map(|s| s.content.as_ref()).collect();

        assert_eq!(symbols, "★★☆☆☆");
        assert_eq!(spans[1].style.fg, Some(theme.star));
        assert_eq!(spans[2].style.fg, Some(theme.star_empty));
    }

    #[test]
    fn test_unrated_breed_has_no_filled_stars() {
        let theme = Theme::default();
        let breeds = BreedList::seeded();
        let symbols: String = star_spans(breeds.get(0).unwrap(), &theme)
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(symbols, "☆☆☆☆☆");
    }

    #[test]
    fn test_breed_card_layout() {
        let theme = Theme::default();
        let breeds = BreedList::seeded();
        let card = breed_card(breeds.get(4).unwrap(), true, 80, &theme);

        assert_eq!(card.len(), 3);
        assert!(text_of(&card[0]).starts_with("▶ "));
        assert!(text_of(&card[0]).contains("Sphynx"));
        assert!(text_of(&card[1]).contains("lack of fur"));
        assert_eq!(card[0].style.bg, Some(theme.bg_selected));
        assert_eq!(card[2].style.bg, None);
    }

    #[test]
    fn test_long_description_wraps_without_losing_words() {
        let theme = Theme::default();
        let breeds = BreedList::seeded();
        let maine_coon = breeds.get(1).unwrap();
        let card = breed_card(maine_coon, false, 40, &theme);

        let description: Vec<String> = card[1..card.len() - 1].iter().map(text_of).collect();
        assert!(description.len() > 1);
        assert!(description.iter().all(|row| row.starts_with("    ") && row.chars().count() <= 40));

        let joined = description.iter().map(|row| row.trim()).collect::<Vec<_>>().join(" ");
        assert_eq!(joined, maine_coon.description);
        assert_eq!(text_of(card.last().unwrap()), "");
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("the quick brown fox", 9), ["the quick", "brown fox"]);
        assert_eq!(wrap_text("", 10), [""]);
        assert_eq!(wrap_text("abcdefghij", 4), ["abcd", "efgh", "ij"]);
        assert_eq!(wrap_text("a abcdefgh", 4), ["a", "abcd", "efgh"]);
    }

    #[test]
    fn test_wrapped_url_rejoins_exactly() {
        let url = crate::content::CAT_IMAGES[1];
        let rows = wrap_text(url, 78);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.concat(), url);
    }

    #[test]
    fn test_slide_dots_mark_current() {
        let theme = Theme::default();
        assert_eq!(text_of(&slide_dots(1, 3, &theme)), "○ ● ○ ");
    }
}
