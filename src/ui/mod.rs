//! Sidebar renderer: exactly one of the error, empty-state, or installation
//! list views, plus a key-hint footer.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::logic;
use crate::state::{AppState, Installation};
use crate::theme::theme;

/// Guidance shown when the user has no installations.
const EMPTY_STATE_MESSAGE: &str =
    "There are no installations, use the /cloud create command to add an installation.";

/// Heading above the server error message.
const SERVER_ERROR_HEADING: &str = "Received a server error";

/// Truncate a string to a display width, appending an ellipsis when cut.
fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut w = 0;
    for ch in s.chars() {
        let cw = ch.width().unwrap_or(0);
        if w + cw > max.saturating_sub(1) {
            break;
        }
        w += cw;
        out.push(ch);
    }
    out.push('…');
    out
}

/// One labeled field row inside an installation entry.
fn field_line(label: &str, value: &str) -> Line<'static> {
    let th = theme();
    Line::from(vec![
        Span::styled(format!("  {label:<11}"), Style::default().fg(th.muted)),
        Span::styled(value.to_string(), Style::default().fg(th.text)),
    ])
}

/// Build the header line: bold name plus the two-valued status badge.
fn header_line(install: &Installation, width: usize) -> Line<'static> {
    let th = theme();
    let badge_fg = if logic::badge_is_primary(&install.state) {
        th.primary
    } else {
        th.danger
    };
    let name_max = width.saturating_sub(install.state.width() + 8).max(8);
    Line::from(vec![
        Span::styled(
            truncate_to_width(&install.name, name_max),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", install.state),
            Style::default().fg(badge_fg).add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Build the per-entry action line: the lock toggle in its current state.
///
/// The disabled variant is visible but inert, mirroring a greyed-out button.
fn action_line(install: &Installation, app: &AppState) -> Line<'static> {
    let th = theme();
    if install.deletion_locked {
        Line::from(Span::styled(
            "  [ Unlock Deletion ]",
            Style::default().fg(th.danger),
        ))
    } else if logic::lock_enabled(&app.installs, app.max_locked_installations) {
        Line::from(Span::styled(
            "  [ Lock Deletion ]",
            Style::default().fg(th.primary),
        ))
    } else {
        Line::from(Span::styled(
            "  [ Lock Deletion (limit reached) ]",
            Style::default().fg(th.disabled),
        ))
    }
}

/// Build the list item for one installation entry.
fn install_item(install: &Installation, app: &AppState, width: usize) -> ListItem<'static> {
    let (version_label, version_value) = logic::version_display(install);
    ListItem::new(vec![
        header_line(install, width),
        field_line("DNS:", logic::dns_display(install)),
        field_line("Image:", &install.image),
        field_line(&format!("{version_label}:"), version_value),
        field_line("Database:", &install.database),
        field_line("Filestore:", &install.filestore),
        field_line("Size:", &install.size),
        action_line(install, app),
        Line::raw(""),
    ])
}

/// Render the full-message view used for errors and the empty state.
fn render_message(f: &mut Frame, area: Rect, lines: Vec<Line<'_>>) {
    let th = theme();
    let block = Block::default()
        .title(" Cloud Installations ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.muted));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    f.render_widget(para, area);
}

/// Render the key-hint footer.
fn render_footer(f: &mut Frame, area: Rect) {
    let th = theme();
    let hints = "↑/↓ select  Enter lock/unlock  r refresh  o view  i install logs  p provisioner logs  q quit";
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(th.muted),
        ))),
        area,
    );
}

/// Render one frame of the sidebar.
///
/// Chooses exactly one of the three mutually exclusive views: server error,
/// empty-state guidance, or one entry per installation in input order.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    match logic::panel_view(&app.installs, &app.server_error) {
        logic::PanelView::Error => {
            let lines = vec![
                Line::from(Span::styled(
                    SERVER_ERROR_HEADING,
                    Style::default().fg(th.danger).add_modifier(Modifier::BOLD),
                )),
                Line::raw(""),
                Line::from(Span::styled(
                    app.server_error.clone(),
                    Style::default().fg(th.text),
                )),
            ];
            render_message(f, chunks[0], lines);
        }
        logic::PanelView::Empty => {
            let lines = vec![Line::from(Span::styled(
                EMPTY_STATE_MESSAGE,
                Style::default().fg(th.text),
            ))];
            render_message(f, chunks[0], lines);
        }
        logic::PanelView::List => {
            let width = chunks[0].width.saturating_sub(4) as usize;
            let items: Vec<ListItem> = app
                .installs
                .iter()
                .map(|i| install_item(i, app, width))
                .collect();
            let block = Block::default()
                .title(format!(" Cloud Installations ({}) ", app.installs.len()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.muted));
            let list = List::new(items)
                .block(block)
                .highlight_symbol("> ")
                .highlight_style(Style::default().add_modifier(Modifier::BOLD));
            f.render_stateful_widget(list, chunks[0], &mut app.list_state);
        }
    }

    render_footer(f, chunks[1]);
}
