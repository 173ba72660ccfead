//! Success banner shown after a valid submission

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Banner body under the title
pub const BANNER_BODY: &str = "Thanks for completing the form. We'll be in touch soon!";

/// Height of the banner including borders (title + body)
pub const BANNER_HEIGHT: u16 = 4;

/// Configuration for rendering a banner
pub struct BannerConfig<'a> {
    pub title: &'a str,
    pub message: &'a str,
    pub color: Color,
    /// Maximum width of the banner
    pub max_width: u16,
}

impl<'a> Default for BannerConfig<'a> {
    fn default() -> Self {
        Self {
            title: "",
            message: BANNER_BODY,
            color: Color::Green,
            max_width: 60,
        }
    }
}

/// Render a banner horizontally centered in `area`, wrapping the body to fit
pub fn render_banner(frame: &mut Frame, area: Rect, config: BannerConfig) {
    let padding = 4u16;
    let content_width = config
        .message
        .chars()
        .count()
        .max(config.title.chars().count() + 2) as u16;
    let width = (content_width + padding).min(config.max_width).min(area.width);

    let banner_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y,
        width,
        height: area.height,
    };

    frame.render_widget(Clear, banner_area);

    let content = vec![
        Line::from(vec![
            Span::styled("✔ ", Style::default().fg(config.color)),
            Span::styled(
                config.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(config.message),
    ];

    let banner = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.color))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(banner, banner_area);
}
