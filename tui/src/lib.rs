//! TUI rendering for Gatekeep using ratatui.

mod input;
mod theme;

pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use gatekeep_engine::{App, FieldKind, FieldStatus, Focus, SubmissionState, TextInput};
use gatekeep_types::truncate_to_fit;

const CARD_MAX_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 17;
const NOTIFICATION_MAX_WIDTH: u16 = 64;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let card = centered_rect(
        frame.area(),
        CARD_MAX_WIDTH.min(frame.area().width.saturating_sub(2)),
        CARD_HEIGHT.min(frame.area().height),
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary_dim))
        .style(Style::default().bg(palette.bg_panel))
        .title(Span::styled(" Gatekeep ", styles::title(&palette)))
        .title_alignment(Alignment::Center)
        .padding(Padding::new(2, 2, 1, 1));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Email label
            Constraint::Length(3), // Email input
            Constraint::Length(1),
            Constraint::Length(1), // Password label
            Constraint::Length(3), // Password input
            Constraint::Length(1),
            Constraint::Length(1), // Trigger
            Constraint::Length(1),
            Constraint::Min(1), // Key hints
        ])
        .split(inner);

    draw_label(frame, app, FieldKind::Email, rows[0], &palette, &glyphs);
    draw_field(frame, app, FieldKind::Email, rows[1], &palette, &glyphs);
    draw_label(frame, app, FieldKind::Password, rows[3], &palette, &glyphs);
    draw_field(frame, app, FieldKind::Password, rows[4], &palette, &glyphs);
    draw_trigger(frame, app, rows[6], &palette, &glyphs);
    draw_key_hints(frame, app, rows[8], &palette);

    if app.notification().is_some() {
        draw_notification(frame, app, &palette);
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.x + (area.width.saturating_sub(width) / 2),
        y: area.y + (area.height.saturating_sub(height) / 2),
        width,
        height,
    }
}

fn status_style(status: FieldStatus, palette: &Palette) -> Style {
    match status {
        FieldStatus::Neutral => styles::label(palette),
        FieldStatus::Valid => styles::label_valid(palette),
        FieldStatus::Invalid => styles::label_error(palette),
    }
}

fn draw_label(
    frame: &mut Frame,
    app: &App,
    kind: FieldKind,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let label = app.label(kind);
    let status = label.status();
    let style = status_style(status, palette);

    let marker = match status {
        FieldStatus::Neutral => None,
        FieldStatus::Valid => Some(glyphs.valid),
        FieldStatus::Invalid => Some(glyphs.invalid),
    };
    let budget = usize::from(area.width).saturating_sub(marker.map_or(0, |m| m.width() + 1));
    let caption = truncate_to_fit(label.caption(), budget, "…");

    let mut spans = vec![Span::styled(caption, style)];
    if let Some(marker) = marker {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(marker, style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Text as shown in the field: passwords render as one mask glyph per grapheme.
fn display_text(input: &TextInput, kind: FieldKind, glyphs: &Glyphs) -> String {
    match kind {
        FieldKind::Email => input.text().to_string(),
        FieldKind::Password => glyphs.mask.repeat(input.grapheme_count()),
    }
}

/// Scroll `text` horizontally so the cursor column stays inside `width`.
///
/// Returns the visible tail and the cursor column relative to it.
fn scroll_to_cursor(text: &str, cursor: usize, width: usize) -> (String, usize) {
    let cursor_col: usize = text.graphemes(true).take(cursor).map(UnicodeWidthStr::width).sum();
    if cursor_col < width {
        return (text.to_string(), cursor_col);
    }

    let scroll_target = cursor_col - width + 1;
    let mut skipped = 0;
    let mut byte_offset = text.len();
    for (idx, grapheme) in text.grapheme_indices(true) {
        if skipped >= scroll_target {
            byte_offset = idx;
            break;
        }
        skipped += grapheme.width();
    }
    (text[byte_offset..].to_string(), cursor_col - skipped)
}

fn draw_field(
    frame: &mut Frame,
    app: &App,
    kind: FieldKind,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let field = app.field(kind);
    let focused = app.focus().field() == Some(kind);

    let border_style = if field.status().is_error() {
        Style::default().fg(palette.error)
    } else if focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.text_muted)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(Style::default().bg(if focused {
            palette.bg_highlight
        } else {
            palette.bg_panel
        }));

    let prefix = format!(" {} ", glyphs.prompt);
    let prefix_width = prefix.width();
    let content_width = usize::from(area.width)
        .saturating_sub(2)
        .saturating_sub(prefix_width)
        .max(1);

    let shown = display_text(field.input(), kind, glyphs);
    let (visible, cursor_col) = scroll_to_cursor(&shown, field.input().cursor(), content_width);

    let text_style = if field.status().is_error() {
        Style::default().fg(palette.error)
    } else {
        Style::default().fg(palette.text_primary)
    };
    let prefix_style = if focused {
        Style::default().fg(palette.primary)
    } else {
        Style::default().fg(palette.text_muted)
    };
    let line = Line::from(vec![
        Span::styled(prefix, prefix_style),
        Span::styled(visible, text_style),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused && app.notification().is_none() {
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(prefix_width as u16)
            .saturating_add(cursor_col as u16);
        frame.set_cursor_position((x, area.y.saturating_add(1)));
    }
}

fn draw_trigger(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let focused = app.focus() == Focus::Submit;
    let busy = app.submission_state() == SubmissionState::Authenticating;

    let caption = if busy {
        format!(
            " {} {} ",
            spinner_frame(app.tick_count(), app.ui_options()),
            app.trigger_caption()
        )
    } else {
        format!(" {} ", app.trigger_caption())
    };
    let mut style = if busy {
        styles::button_busy(palette)
    } else {
        styles::button_idle(palette)
    };
    if focused {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    let pointer = if focused { glyphs.selected } else { " " };
    let line = Line::from(vec![
        Span::styled(format!("{pointer} "), Style::default().fg(palette.accent)),
        Span::styled(caption, style),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_key_hints(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let hints = if app.focus() == Focus::Submit {
        vec![
            Span::styled("Enter", styles::key_highlight(palette)),
            Span::styled(" log in  ", styles::key_hint(palette)),
            Span::styled("Tab", styles::key_highlight(palette)),
            Span::styled(" next  ", styles::key_hint(palette)),
            Span::styled("Esc", styles::key_highlight(palette)),
            Span::styled(" quit", styles::key_hint(palette)),
        ]
    } else {
        vec![
            Span::styled("Tab/Enter", styles::key_highlight(palette)),
            Span::styled(" next  ", styles::key_hint(palette)),
            Span::styled("Shift+Tab", styles::key_highlight(palette)),
            Span::styled(" back  ", styles::key_hint(palette)),
            Span::styled("Esc", styles::key_highlight(palette)),
            Span::styled(" quit", styles::key_hint(palette)),
        ]
    };
    frame.render_widget(
        Paragraph::new(Line::from(hints)).alignment(Alignment::Center),
        area,
    );
}

fn draw_notification(frame: &mut Frame, app: &App, palette: &Palette) {
    let Some(notification) = app.notification() else {
        return;
    };

    let mut lines: Vec<Line> = notification
        .format()
        .lines()
        .map(|line| {
            Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(palette.text_primary),
            ))
        })
        .collect();

    lines.push(Line::from(""));
    let mut hint = vec![
        Span::styled("Enter/Esc", styles::key_highlight(palette)),
        Span::styled(" dismiss", styles::key_hint(palette)),
    ];
    let queued = app.queued_notifications().saturating_sub(1);
    if queued > 0 {
        hint.push(Span::styled(
            format!("  (+{queued} more)"),
            styles::key_hint(palette),
        ));
    }
    lines.push(Line::from(hint));

    let area = frame.area();
    let max_width = NOTIFICATION_MAX_WIDTH.min(area.width.saturating_sub(4));
    let content_width = lines
        .iter()
        .map(Line::width)
        .max()
        .unwrap_or(10)
        .min(usize::from(max_width)) as u16;
    let width = content_width.saturating_add(4).min(area.width);
    let inner_width = usize::from(width.saturating_sub(4)).max(1);
    let wrapped_rows: usize = lines
        .iter()
        .map(|line| line.width().max(1).div_ceil(inner_width))
        .sum();
    let height = (wrapped_rows as u16).saturating_add(4).min(area.height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.success))
        .style(Style::default().bg(palette.bg_panel))
        .title(Span::styled(
            format!(" {} ", notification.title()),
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),
        ))
        .padding(Padding::uniform(1));

    let rect = centered_rect(area, width, height);
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        rect,
    );
}
