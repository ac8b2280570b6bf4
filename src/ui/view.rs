//! Panel rendering
//!
//! Layout:
//! - Left: credential sidebar (five input boxes)
//! - Right top: requirement editor
//! - Right bottom: generated test cases (collapsible blocks)
//! - Bottom: status bar with notices and key hints

use ratatui::style::Stylize;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::cases::emphasize;
use crate::ui::state::{App, Field, NoticeKind};

/// Render the main UI
///
/// Layout: credentials (left) + requirement editor and results (right),
/// status bar across the bottom.
pub fn render<B: Backend>(terminal: &mut Terminal<B>, app: &App) -> std::io::Result<()> {
    terminal.draw(|f| {
        // Vertical split: main area (top) + status bar (3 lines, bottom)
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        // Main area split: sidebar (left) + editor and results (right)
        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(chunks[0]);

        render_sidebar(f, app, main_chunks[0]);

        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[1]);

        render_requirement_editor(f, app, right_chunks[0]);
        render_results_panel(f, app, right_chunks[1]);

        render_status_bar(f, app, chunks[1]);
    })?;
    Ok(())
}

/// Render the credential input boxes
fn render_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    render_input_box(
        f,
        "Jira Domain",
        &app.domain,
        app.focus == Field::Domain,
        false,
        chunks[0],
    );
    render_input_box(
        f,
        "Issue Key",
        &app.issue_key,
        app.focus == Field::IssueKey,
        false,
        chunks[1],
    );
    render_input_box(
        f,
        "Username",
        &app.username,
        app.focus == Field::Username,
        false,
        chunks[2],
    );
    render_input_box(
        f,
        "API Token",
        &app.api_token,
        app.focus == Field::ApiToken,
        true,
        chunks[3],
    );
    render_input_box(
        f,
        "Generator Key",
        &app.generator_key,
        app.focus == Field::GeneratorKey,
        true,
        chunks[4],
    );
}

/// Render one bordered input box, masking secrets
fn render_input_box(
    f: &mut Frame,
    label: &str,
    value: &str,
    focused: bool,
    masked: bool,
    area: Rect,
) {
    let title = if focused {
        format!(" [{}] ", label)
    } else {
        format!(" {} ", label)
    };

    let border_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let shown = if masked {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    };

    let paragraph = Paragraph::new(shown).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style),
    );
    f.render_widget(paragraph, area);
}

/// Render the requirement editor, flagging unsaved edits in the title
fn render_requirement_editor(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Field::Requirement;

    let label = if app.session.is_dirty() {
        "Requirement (edited)"
    } else {
        "Requirement"
    };
    let title = if focused {
        format!(" [{}] ", label)
    } else {
        format!(" {} ", label)
    };

    let border_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(app.session.current_text().to_string())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style),
        );
    f.render_widget(paragraph, area);
}

/// Render the collapsible test-case blocks
fn render_results_panel(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Field::Results;

    let title = if focused {
        " [Generated Test Cases] "
    } else {
        " Generated Test Cases "
    };

    let border_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let lines = if app.cases.is_empty() {
        vec![Line::from(Span::styled(
            "(no test cases generated yet)",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        let mut lines = Vec::new();
        for (i, case) in app.cases.iter().enumerate() {
            let marker = if case.collapsed { "▸" } else { "▾" };
            let header_style = if focused && i == app.selected_case {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::Cyan)
            };
            lines.push(Line::from(Span::styled(
                format!("{} {}", marker, case.block.label()),
                header_style,
            )));

            if !case.collapsed {
                for text_line in emphasize(&case.block.text).lines() {
                    lines.push(emphasis_line(text_line));
                }
                lines.push(Line::from(""));
            }
        }
        lines
    };

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style),
    );
    f.render_widget(paragraph, area);
}

/// Render one emphasized line; runs of `**` toggle bold
fn emphasis_line(text: &str) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    let mut bold = false;
    let mut piece = String::new();

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '*' && chars.peek() == Some(&'*') {
            while chars.peek() == Some(&'*') {
                chars.next();
            }
            if !piece.is_empty() {
                spans.push(styled_piece(&piece, bold));
                piece.clear();
            }
            bold = !bold;
        } else {
            piece.push(c);
        }
    }
    if !piece.is_empty() {
        spans.push(styled_piece(&piece, bold));
    }

    Line::from(spans)
}

fn styled_piece(piece: &str, bold: bool) -> Span<'static> {
    if bold {
        Span::styled(piece.to_string(), Style::default().bold())
    } else {
        Span::raw(piece.to_string())
    }
}

/// Render the status bar: notice if present, key hints otherwise
fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let line = match &app.notice {
        Some(notice) => {
            let color = match notice.kind {
                NoticeKind::Info => Color::Green,
                NoticeKind::Warning => Color::Yellow,
                NoticeKind::Error => Color::Red,
            };
            Line::from(Span::styled(
                notice.text.clone(),
                Style::default().fg(color),
            ))
        }
        None => Line::from(Span::styled(
            "Tab: next field | Ctrl+F: fetch | Ctrl+G: generate | Ctrl+R: discard edits | Ctrl+Q: quit",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let paragraph =
        Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" Status "));
    f.render_widget(paragraph, area);
}
