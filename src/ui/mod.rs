mod components;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::{App, Popup, Tab};
use crate::content;
use components::{breed_card, slide_dots, wrap_text, PAW};

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    // Inner width of the full-width bordered boxes
    let inner_width = area.width.saturating_sub(2) as usize;

    // Photo and fact boxes grow to fit their wrapped text; dots are dropped
    // on short terminals to leave room for the tabs
    let show_dots = area.height >= 30;
    let url_rows = carousel_url_rows(app, inner_width).len() as u16;
    let carousel_height = 2 + 1 + url_rows + u16::from(show_dots);
    let fact_height = 2 + fact_rows(app, inner_width).len() as u16 + 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(1),                // Title
            Constraint::Length(carousel_height),  // Photo carousel
            Constraint::Length(fact_height),      // Did You Know?
            Constraint::Length(3),                // Tab bar
            Constraint::Min(4),                   // Selected panel
            Constraint::Length(1),                // Footer
        ])
        .split(area);

    draw_title(f, app, chunks[0]);
    draw_carousel(f, app, chunks[1], show_dots);
    draw_fact_card(f, app, chunks[2]);
    draw_tab_bar(f, app, chunks[3]);

    match app.tab {
        Tab::About => draw_about_panel(f, app, chunks[4]),
        Tab::Breeds => draw_breeds_panel(f, app, chunks[4]),
        Tab::Care => draw_care_panel(f, app, chunks[4]),
    }

    draw_footer(f, app, chunks[5]);

    if app.popup == Popup::Help {
        draw_help_popup(f, app);
    }
}

/// Current photo URL split to fit the carousel, never truncated
fn carousel_url_rows(app: &App, width: usize) -> Vec<String> {
    let url = content::CAT_IMAGES.get(app.carousel.index()).copied().unwrap_or_default();
    wrap_text(url, width)
}

/// Fact text wrapped to the card width
fn fact_rows(app: &App, width: usize) -> Vec<String> {
    if app.fact.is_empty() && app.fetches_in_flight > 0 {
        vec!["Fetching a fact...".to_string()]
    } else {
        wrap_text(&app.fact, width)
    }
}

fn draw_title(f: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        content::TITLE,
        Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);

    f.render_widget(title, area);
}

fn draw_carousel(f: &mut Frame, app: &App, area: Rect, show_dots: bool) {
    let theme = &app.theme;
    let index = app.carousel.index();

    let arrow_style = |enabled: bool| {
        if enabled {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.inactive)
        }
    };

    let block = Block::default()
        .title(Span::styled(" Photos ", Style::default().fg(theme.inactive)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.inactive));

    let mut lines = vec![Line::from(vec![
        Span::styled("◀ ", arrow_style(app.carousel.can_prev())),
        Span::styled(content::image_alt(index), Style::default().fg(theme.text).add_modifier(Modifier::BOLD)),
        Span::styled(" ▶", arrow_style(app.carousel.can_next())),
    ])];
    let url_style = Style::default().fg(theme.text_dim).add_modifier(Modifier::UNDERLINED);
    for row in carousel_url_rows(app, area.width.saturating_sub(2) as usize) {
        lines.push(Line::from(Span::styled(row, url_style)));
    }
    if show_dots {
        lines.push(slide_dots(index, app.carousel.len(), theme));
    }

    let carousel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);

    f.render_widget(carousel, area);
}

fn draw_fact_card(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", content::FACT_TITLE),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_soft));

    let fact_style = if app.fact.is_empty() {
        Style::default().fg(theme.text_dim)
    } else {
        Style::default().fg(theme.text).add_modifier(Modifier::ITALIC)
    };
    let fact_lines: Vec<Line> = fact_rows(app, area.width.saturating_sub(2) as usize)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, fact_style)))
        .collect();

    let mut button = vec![
        Span::styled("[ ", Style::default().fg(theme.text_dim)),
        Span::styled("f", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
        Span::styled(format!(" {} ", content::FACT_BUTTON), Style::default().fg(theme.text)),
        Span::styled("]", Style::default().fg(theme.text_dim)),
    ];
    if app.fetches_in_flight > 0 && !app.fact.is_empty() {
        button.push(Span::styled("  fetching...", Style::default().fg(theme.text_dim)));
    }

    // Button pinned to the bottom line, fact above it
    let inner = block.inner(area);
    f.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    f.render_widget(Paragraph::new(fact_lines), parts[0]);
    f.render_widget(Paragraph::new(Line::from(button)), parts[1]);
}

fn draw_tab_bar(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| Line::from(format!(" {} ", tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .style(Style::default().fg(theme.text_dim))
        .highlight_style(
            Style::default()
                .fg(theme.text)
                .bg(theme.bg_selected)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("│", Style::default().fg(theme.inactive)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        );

    f.render_widget(tabs, area);
}

fn panel_block<'a>(title: &'a str, app: &App) -> Block<'a> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(app.theme.accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.accent))
}

fn draw_about_panel(f: &mut Frame, app: &App, area: Rect) {
    let about = Paragraph::new(Line::from(Span::styled(
        content::ABOUT,
        Style::default().fg(app.theme.text),
    )))
    .wrap(Wrap { trim: true })
    .block(panel_block(Tab::About.title(), app));

    f.render_widget(about, area);
}

fn draw_breeds_panel(f: &mut Frame, app: &App, area: Rect) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let cards: Vec<Vec<Line>> = app
        .breeds
        .iter()
        .enumerate()
        .map(|(i, breed)| breed_card(breed, i == app.selected_breed, inner_width, &app.theme))
        .collect();

    // Keep the selected card in view (its trailing spacer may scroll off)
    let inner_height = area.height.saturating_sub(2) as usize;
    let selected_bottom: usize = cards
        .iter()
        .take(app.selected_breed + 1)
        .map(|card| card.len())
        .sum::<usize>()
        .saturating_sub(1);
    let scroll = selected_bottom.saturating_sub(inner_height) as u16;

    let lines: Vec<Line> = cards.into_iter().flatten().collect();

    let breeds = Paragraph::new(lines)
        .scroll((scroll, 0))
        .block(panel_block(content::BREEDS_TITLE, app));

    f.render_widget(breeds, area);
}

fn draw_care_panel(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = content::CARE_TIPS
        .iter()
        .map(|tip| {
            Line::from(vec![
                Span::styled(PAW, Style::default().fg(app.theme.accent)),
                Span::styled(format!(" {}", tip), Style::default().fg(app.theme.text)),
            ])
        })
        .collect();

    let care = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel_block(content::CARE_TITLE, app));

    f.render_widget(care, area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    if let Some(ref status) = app.status_message {
        let line = Line::from(Span::styled(status.as_str(), Style::default().fg(theme.star)));
        f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
        return;
    }

    let hints: Vec<(&str, &str)> = match app.tab {
        Tab::Breeds => vec![
            ("↑↓", "Select"),
            ("1-5", "Rate"),
            ("Tab", "Next tab"),
            ("←→", "Photos"),
            ("f", "Fact"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
        _ => vec![
            ("Tab", "Next tab"),
            ("←→", "Photos"),
            ("f", "Fact"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
    };

    // Responsive: show fewer hints on narrow terminals
    let max_hints = if area.width < 60 { 4 } else { hints.len() };

    let mut hint_spans: Vec<Span> = Vec::new();
    for (i, (key, action)) in hints.iter().take(max_hints).enumerate() {
        if i > 0 {
            hint_spans.push(Span::styled(" │ ", Style::default().fg(theme.inactive)));
        }
        hint_spans.push(Span::styled(*key, Style::default().fg(theme.accent)));
        hint_spans.push(Span::styled(format!(" {}", action), Style::default().fg(theme.text_dim)));
    }

    let footer = Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Center);
    f.render_widget(footer, area);
}

fn draw_help_popup(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = f.area();
    let popup_area = centered_rect(
        if area.width < 80 { 90 } else { 60 },
        if area.height < 30 { 90 } else { 60 },
        area,
    );

    f.render_widget(Clear, popup_area);

    let heading = |text: &'static str| {
        Line::from(Span::styled(text, Style::default().fg(theme.title).add_modifier(Modifier::BOLD)))
    };
    let key = |k: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", k), Style::default().fg(theme.accent)),
            Span::styled(what, Style::default().fg(theme.text)),
        ])
    };

    let help_text = vec![
        heading("═══ Navigation ═══"),
        key("Tab", "Next tab (About → Breeds → Care)"),
        key("Shift-Tab", "Previous tab"),
        key("←/→", "Previous/next photo"),
        Line::from(""),
        heading("═══ Breeds ═══"),
        key("↑/↓ j/k", "Select a breed"),
        key("1-5", "Give the selected breed that many stars"),
        Line::from(""),
        heading("═══ Facts ═══"),
        key("f/Enter", "Get another fact"),
        Line::from(""),
        key("q/Ctrl-C", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "  Ratings are kept until you quit.",
            Style::default().fg(theme.text_dim),
        )),
        Line::from(vec![
            Span::styled("  Press ", Style::default().fg(theme.text_dim)),
            Span::styled("?", Style::default().fg(theme.accent)),
            Span::styled("/", Style::default().fg(theme.text_dim)),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::styled(" to close", Style::default().fg(theme.text_dim)),
        ]),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(Span::styled(format!(" {} purrview Help ", PAW), Style::default().fg(theme.accent)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app() -> App {
        let config = AppConfig {
            fact_endpoint: "http://127.0.0.1:9/fact".to_string(),
            ..Default::default()
        };
        App::new(&config).unwrap()
    }

    fn render(app: &App) -> String {
        render_sized(app, 100, 50)
    }

    fn render_sized(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                screen.push_str(buffer[(x, y)].symbol());
            }
            screen.push('\n');
        }
        screen
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    #[test]
    fn test_page_chrome_is_always_drawn() {
        let mut app = test_app();
        app.fact = "A group of cats is called a clowder.".to_string();
        let screen = render(&app);

        assert!(screen.contains("All About Cats"));
        assert!(screen.contains("Did You Know?"));
        assert!(screen.contains("A group of cats is called a clowder."));
        assert!(screen.contains("Get Another Fact"));
        assert!(screen.contains("Cat 1"));
        assert!(screen.contains("About Cats"));
        assert!(screen.contains("Cat Breeds"));
        assert!(screen.contains("Cat Care"));
    }

    #[test]
    fn test_exactly_one_panel_is_visible() {
        let mut app = test_app();

        let about = render(&app);
        assert!(about.contains("Cats are fascinating creatures"));
        assert!(!about.contains("Popular Cat Breeds"));
        assert!(!about.contains("Cat Care Tips"));

        press(&mut app, KeyCode::Tab);
        let breeds = render(&app);
        assert!(breeds.contains("Popular Cat Breeds"));
        assert!(breeds.contains("Maine Coon"));
        assert!(!breeds.contains("Cats are fascinating creatures"));
        assert!(!breeds.contains("Cat Care Tips"));

        press(&mut app, KeyCode::Tab);
        let care = render(&app);
        assert!(care.contains("Cat Care Tips"));
        assert!(care.contains("Maintain a clean litter box"));
        assert!(!care.contains("Popular Cat Breeds"));
        assert!(!care.contains("Cats are fascinating creatures"));
    }

    #[test]
    fn test_breed_rating_is_rendered() {
        let mut app = test_app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('4'));

        let screen = render(&app);
        assert!(screen.contains("★★★★☆"));
        assert!(screen.contains("☆☆☆☆☆"));
    }

    #[test]
    fn test_carousel_moves_to_next_photo() {
        let mut app = test_app();
        press(&mut app, KeyCode::Right);
        let screen = render(&app);
        assert!(screen.contains("Cat 2"));
        assert!(!screen.contains("Cat 1"));
    }

    #[test]
    fn test_help_popup_renders() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));
        let screen = render(&app);
        assert!(screen.contains("purrview Help"));
        assert!(screen.contains("Get another fact"));
    }

    /// Screen rows with the box borders stripped, joined with `sep`
    fn unboxed(screen: &str, sep: &str) -> String {
        screen
            .lines()
            .map(|row| row.trim_matches(|c: char| c == '│' || c.is_whitespace()))
            .collect::<Vec<_>>()
            .join(sep)
    }

    #[test]
    fn test_standard_terminal_shows_full_content() {
        let mut app = test_app();
        app.tab = Tab::Breeds;
        app.selected_breed = 1;
        app.fact = "A cat's whiskers are roughly as wide as its body, which helps it judge \
                    whether it can fit through an opening, and they can even sense tiny \
                    changes in the air around it."
            .to_string();
        assert!(app.fact.chars().count() > 156);

        let screen = render_sized(&app, 80, 24);

        let text = unboxed(&screen, " ");
        assert!(text.contains("intelligence and playful personality."), "{}", screen);
        assert!(text.contains(&app.fact), "{}", screen);
        assert!(unboxed(&screen, "").contains(content::CAT_IMAGES[0]), "{}", screen);
    }

    #[test]
    fn test_longest_url_is_not_clipped() {
        let mut app = test_app();
        app.carousel.next();
        let screen = render_sized(&app, 80, 24);
        assert!(unboxed(&screen, "").contains(content::CAT_IMAGES[1]), "{}", screen);
    }

    #[test]
    fn test_footer_has_no_trailing_separator() {
        let app = test_app();
        let screen = render_sized(&app, 100, 30);
        let footer = screen.lines().last().unwrap().trim_end();
        assert!(footer.ends_with("q Quit"), "footer was {:?}", footer);
        assert!(footer.contains("f Fact │ ? Help"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = test_app();
        app.tab = Tab::Breeds;
        app.selected_breed = 4;
        let mut terminal = Terminal::new(TestBackend::new(20, 10)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
    }
}
