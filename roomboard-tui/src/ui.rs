//! Rendering for the room board TUI.

use ratatui::{prelude::*, widgets::*};
use roomboard_core::{RoomStatus, format_date, format_room_status};

use crate::app::{App, EXTRA_KINDS, FocusPanel, InputMode};

pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_metadata(f, app, chunks[0]);
    render_overview(f, app, chunks[1]);
    render_panels(f, app, chunks[2]);
    render_message(f, app, chunks[3]);
    render_input(f, app, chunks[4]);
    render_help(f, app, chunks[5]);
}

fn render_metadata(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled("Shift: ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.session.shift.clone()),
        Span::raw("   "),
        Span::styled("Date: ", Style::default().fg(Color::DarkGray)),
        Span::raw(format_date(&app.session.date)),
        Span::raw("   "),
        Span::styled("Attendant: ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.session.attendant.clone()),
    ];
    if app.copied() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            "Copied!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }
    let metadata = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Daily Housekeeping Discrepancy"),
    );
    f.render_widget(metadata, area);
}

fn render_overview(f: &mut Frame, app: &App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let mut tabs: Vec<Span> = Vec::new();
    for floor in app.session.floors() {
        let label = format!(" {floor} ");
        if floor == app.session.floor {
            tabs.push(Span::styled(
                label,
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));
        } else {
            tabs.push(Span::raw(label));
        }
    }
    let floors =
        Paragraph::new(Line::from(tabs)).block(Block::default().borders(Borders::ALL).title("Floors"));
    f.render_widget(floors, halves[0]);

    let stats = app.session.stats();
    let line = Line::from(vec![
        Span::raw(format!("Rooms {}", stats.total_rooms)),
        Span::raw("  "),
        Span::styled(
            format!("Occ {}", stats.occupied_rooms),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  "),
        Span::raw(format!("Guests {}", stats.total_guests)),
        Span::raw("  "),
        Span::styled(
            format!("VC {}", stats.vacant_clean_rooms),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  "),
        Span::styled(
            format!("VD {}", stats.vacant_dirty_rooms),
            Style::default().fg(Color::Red),
        ),
        Span::raw("  "),
        Span::raw(format!("DND {}", stats.dnd_rooms)),
        Span::raw("  "),
        Span::raw(format!("Extras {}", app.session.extras().len())),
    ]);
    let today = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Today"));
    f.render_widget(today, halves[1]);
}

fn render_panels(f: &mut Frame, app: &App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    let rooms = app.session.visible_rooms();
    let items: Vec<ListItem> = rooms
        .iter()
        .map(|room| {
            let mut spans = vec![
                Span::styled(format!("{:<6}", room.number), Style::default().fg(Color::Cyan)),
                Span::styled(format!("{:<16}", room.status.label()), status_style(room.status)),
                Span::raw(format_room_status(room)),
            ];
            let note = room.notes.trim();
            if !note.is_empty() {
                spans.push(Span::styled(
                    format!("  ({note})"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let rooms_list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Rooms ({})", app.session.floor))
                .border_style(panel_border(app.focus == FocusPanel::Rooms)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    let mut rooms_state = ListState::default();
    if !rooms.is_empty() {
        rooms_state.select(Some(app.selected_room.min(rooms.len() - 1)));
    }
    f.render_stateful_widget(rooms_list, halves[0], &mut rooms_state);

    let extras = app.session.extras();
    let items: Vec<ListItem> = extras
        .iter()
        .map(|extra| ListItem::new(format!("{}: {}", extra.kind, extra.room)))
        .collect();
    let extras_list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Extras (next: {})", EXTRA_KINDS[app.draft_kind]))
                .border_style(panel_border(app.focus == FocusPanel::Extras)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    let mut extras_state = ListState::default();
    if !extras.is_empty() {
        extras_state.select(Some(app.selected_extra.min(extras.len() - 1)));
    }
    f.render_stateful_widget(extras_list, halves[1], &mut extras_state);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let text = vec![
        Line::from(app.session.message()),
        Line::from(Span::styled(
            app.session.share_link(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let message =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Message"));
    f.render_widget(message, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, active) = match app.input_mode {
        InputMode::Normal => ("Input", false),
        InputMode::EditDate => ("Date (YYYY-MM-DD)", true),
        InputMode::EditAttendant => ("Attendant", true),
        InputMode::EditNotes => ("Notes", true),
        InputMode::EditExtraRoom => ("Extra room number", true),
    };

    let width = area.width.max(3) - 3;
    let scroll = app.input.visual_scroll(width as usize);
    let style = if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let input = Paragraph::new(app.input.value())
        .style(style)
        .scroll((0, scroll as u16))
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(input, area);

    if active {
        f.set_cursor_position((
            area.x + ((app.input.visual_cursor().max(scroll) - scroll) as u16) + 1,
            area.y + 1,
        ));
    }
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help = if app.input_mode == InputMode::Normal {
        " q quit  tab panel  ←/→ floor  ↑/↓ select  space status  +/- guests  n notes  s shift  d date  a attendant  t kind  e extra  x remove  c copy  r reset"
    } else {
        " enter save  esc cancel"
    };
    let line = Line::from(Span::styled(help, Style::default().fg(Color::DarkGray)));
    f.render_widget(Paragraph::new(line), area);
}

fn status_style(status: RoomStatus) -> Style {
    match status {
        RoomStatus::Occupied => Style::default().fg(Color::Yellow),
        RoomStatus::VacantClean => Style::default().fg(Color::Green),
        RoomStatus::VacantDirty => Style::default().fg(Color::Red),
        RoomStatus::DoNotDisturb => Style::default().fg(Color::Magenta),
        RoomStatus::SleepOut => Style::default().fg(Color::Blue),
        RoomStatus::OutOfOrder => Style::default().fg(Color::DarkGray),
    }
}

fn panel_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}
