//! Application state for the room board TUI.
//!
//! Owns the core session plus everything presentation-local: panel
//! focus, list selections, the text-input buffer and the transient
//! copied flash. Key handling lives here; drawing lives in `ui`.

use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use roomboard_core::{HousekeepingSession, RoomStatus};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::clipboard;

/// Shift picker vocabulary.
pub const SHIFTS: [&str; 4] = ["Morning", "Afternoon", "Evening", "Night"];

/// Extra-request picker vocabulary; the data model itself accepts any label.
pub const EXTRA_KINDS: [&str; 5] = ["Baby Cot", "Extra Bed", "Rollaway", "Wheelchair", "Other"];

/// How long the copied confirmation stays up.
const COPIED_FLASH: Duration = Duration::from_secs(2);

/// What the text-input line is editing, if anything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    EditDate,
    EditAttendant,
    EditNotes,
    EditExtraRoom,
}

/// Which list panel takes selection keys.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    #[default]
    Rooms,
    Extras,
}

pub struct App {
    pub session: HousekeepingSession,
    pub focus: FocusPanel,
    pub input_mode: InputMode,
    /// Text field state while an edit mode is active
    pub input: Input,
    /// Selected row in the rooms panel, an index into `visible_rooms`
    pub selected_room: usize,
    /// Selected row in the extras panel
    pub selected_extra: usize,
    /// Kind for the next extra request, an index into `EXTRA_KINDS`
    pub draft_kind: usize,
    /// While Some, the copied confirmation shows until this deadline
    copied_until: Option<Instant>,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: HousekeepingSession) -> Self {
        Self {
            session,
            focus: FocusPanel::default(),
            input_mode: InputMode::default(),
            input: Input::default(),
            selected_room: 0,
            selected_extra: 0,
            draft_kind: 0,
            copied_until: None,
            should_quit: false,
        }
    }

    /// Expire the copied flash once its deadline passes.
    pub fn tick(&mut self) {
        if let Some(deadline) = self.copied_until {
            if Instant::now() >= deadline {
                self.copied_until = None;
            }
        }
    }

    pub fn copied(&self) -> bool {
        self.copied_until.is_some()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            _ => self.handle_edit_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Left | KeyCode::Char('h') => self.cycle_floor(-1),
            KeyCode::Right | KeyCode::Char('l') => self.cycle_floor(1),
            KeyCode::Char(' ') | KeyCode::Enter => self.cycle_selected_status(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.bump_occupancy(1),
            KeyCode::Char('-') => self.bump_occupancy(-1),
            KeyCode::Char('n') => self.start_notes_edit(),
            KeyCode::Char('d') => self.start_edit(InputMode::EditDate, self.session.date.clone()),
            KeyCode::Char('a') => {
                self.start_edit(InputMode::EditAttendant, self.session.attendant.clone())
            }
            KeyCode::Char('s') => self.cycle_shift(),
            KeyCode::Char('t') => self.draft_kind = (self.draft_kind + 1) % EXTRA_KINDS.len(),
            KeyCode::Char('e') => self.start_edit(InputMode::EditExtraRoom, String::new()),
            KeyCode::Char('x') | KeyCode::Delete => self.remove_selected_extra(),
            KeyCode::Char('c') => self.copy_message(),
            KeyCode::Char('r') => self.reset(),
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.commit_input(),
            KeyCode::Esc => {
                self.input.reset();
                self.input_mode = InputMode::Normal;
            }
            _ => {
                self.input.handle_event(&Event::Key(key));
            }
        }
    }

    fn commit_input(&mut self) {
        let value: String = self.input.value().into();
        match self.input_mode {
            InputMode::EditDate => self.session.date = value,
            InputMode::EditAttendant => self.session.attendant = value,
            InputMode::EditNotes => {
                if let Some(number) = self.selected_room_number() {
                    self.session.set_notes(&number, value);
                }
            }
            InputMode::EditExtraRoom => {
                self.session
                    .add_extra(EXTRA_KINDS[self.draft_kind].to_string(), &value);
            }
            InputMode::Normal => {}
        }
        self.input.reset();
        self.input_mode = InputMode::Normal;
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Rooms => FocusPanel::Extras,
            FocusPanel::Extras => FocusPanel::Rooms,
        };
        self.clamp_selections();
    }

    fn select_prev(&mut self) {
        match self.focus {
            FocusPanel::Rooms => self.selected_room = self.selected_room.saturating_sub(1),
            FocusPanel::Extras => self.selected_extra = self.selected_extra.saturating_sub(1),
        }
    }

    fn select_next(&mut self) {
        match self.focus {
            FocusPanel::Rooms => {
                if self.selected_room + 1 < self.session.visible_rooms().len() {
                    self.selected_room += 1;
                }
            }
            FocusPanel::Extras => {
                if self.selected_extra + 1 < self.session.extras().len() {
                    self.selected_extra += 1;
                }
            }
        }
    }

    fn cycle_floor(&mut self, step: i32) {
        let floors = self.session.floors();
        if floors.is_empty() {
            return;
        }
        let len = floors.len() as i32;
        let pos = floors
            .iter()
            .position(|floor| *floor == self.session.floor)
            .unwrap_or(0) as i32;
        let next = (pos + step).rem_euclid(len) as usize;
        self.session.floor = floors[next];
        self.clamp_selections();
    }

    fn cycle_selected_status(&mut self) {
        if self.focus != FocusPanel::Rooms {
            return;
        }
        let rooms = self.session.visible_rooms();
        let Some(room) = rooms.get(self.selected_room) else {
            return;
        };
        let pos = RoomStatus::ALL
            .iter()
            .position(|status| *status == room.status)
            .unwrap_or(0);
        let next = RoomStatus::ALL[(pos + 1) % RoomStatus::ALL.len()];
        self.session.set_status(&room.number, next);
    }

    fn bump_occupancy(&mut self, delta: i32) {
        let rooms = self.session.visible_rooms();
        let Some(room) = rooms.get(self.selected_room) else {
            return;
        };
        if !room.status.is_occupied() {
            return;
        }
        let current = room.occupancy.unwrap_or(1);
        self.session.set_occupancy(&room.number, current + delta);
    }

    fn cycle_shift(&mut self) {
        let next = SHIFTS
            .iter()
            .position(|shift| *shift == self.session.shift)
            .map(|pos| (pos + 1) % SHIFTS.len())
            .unwrap_or(0);
        self.session.shift = SHIFTS[next].to_string();
    }

    fn start_notes_edit(&mut self) {
        let rooms = self.session.visible_rooms();
        let Some(room) = rooms.get(self.selected_room) else {
            return;
        };
        let notes = room.notes.clone();
        self.start_edit(InputMode::EditNotes, notes);
    }

    fn start_edit(&mut self, mode: InputMode, initial: String) {
        self.input = Input::new(initial);
        self.input_mode = mode;
    }

    fn remove_selected_extra(&mut self) {
        if self.focus != FocusPanel::Extras {
            return;
        }
        self.session.remove_extra(self.selected_extra);
        self.clamp_selections();
    }

    fn copy_message(&mut self) {
        let message = self.session.message();
        match clipboard::copy_to_clipboard(&message) {
            Ok(()) => self.copied_until = Some(Instant::now() + COPIED_FLASH),
            Err(err) => tracing::warn!(error = %err, "clipboard copy failed"),
        }
    }

    fn reset(&mut self) {
        self.session.reset();
        self.selected_room = 0;
        self.selected_extra = 0;
        self.draft_kind = 0;
    }

    fn clamp_selections(&mut self) {
        let rooms = self.session.visible_rooms().len();
        self.selected_room = self.selected_room.min(rooms.saturating_sub(1));
        let extras = self.session.extras().len();
        self.selected_extra = self.selected_extra.min(extras.saturating_sub(1));
    }

    fn selected_room_number(&self) -> Option<String> {
        self.session
            .visible_rooms()
            .get(self.selected_room)
            .map(|room| room.number.clone())
    }
}
