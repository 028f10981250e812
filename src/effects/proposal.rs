use super::Effect;
use super::evasive::{EvasiveControl, MAX_OFFSET};
use super::fireworks::Fireworks;
use crate::canvas::{Canvas, Overlay};
use crate::timer::Interval;
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use fastrand::Rng;
use log::{debug, info};
use std::io::{self, Write};

const QUESTION: &str = "Will you be mine?";
const MESSAGE: &str = "I love you! ♥";
const ACKNOWLEDGMENT: &str = "That's wonderful! Let's live this story together! ♥";
const DISMISS_HINT: &str = "(press any key)";
const YES_LABEL: &str = "[ Yes ]";
const NO_LABEL: &str = "[ No ]";

const BURST_PERIOD: f32 = 1.5;
const EVASIVE_PERIOD: f32 = 0.1;
// Evasive offset units per terminal row
const OFFSET_PER_ROW: i32 = 10;

const TEXT_COLOR: (u8, u8, u8) = (235, 235, 235);
const MESSAGE_COLOR: (u8, u8, u8) = (255, 105, 180);
const YES_COLOR: (u8, u8, u8) = (80, 250, 120);
const NO_COLOR: (u8, u8, u8) = (250, 90, 90);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Asking,
    Acknowledging,
    Celebrating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub row: usize,
    pub col: usize,
    pub width: usize,
}

impl Button {
    fn centered(row: usize, center: usize, label: &str) -> Self {
        let width = label.chars().count();
        Self {
            row,
            col: center.saturating_sub(width / 2),
            width,
        }
    }

    pub fn contains(&self, col: usize, row: usize) -> bool {
        row == self.row && (self.col..self.col + self.width).contains(&col)
    }
}

/// The question screen: two buttons, one of which runs away.
pub struct Proposal {
    cols: usize,
    rows: usize,
    viewport: (usize, usize),
    canvas: Canvas,
    overlay: Overlay,
    fireworks: Fireworks,
    rng: Rng,
    state: State,
    bursts: Option<Interval>,
    evasive: EvasiveControl,
    evasive_timer: Interval,
}

impl Effect for Proposal {
    fn new(cols: usize, rows: usize, rng: Rng) -> Self {
        let canvas = Canvas::new(cols, rows, crate::get_bg_color());
        let (width, height) = canvas.logical_size();
        info!("surface {}x{} cells ({}x{} logical)", cols, rows, width, height);

        Self {
            cols,
            rows,
            viewport: (cols, rows),
            canvas,
            overlay: Overlay::new(cols, rows),
            fireworks: Fireworks::new(width, height),
            rng,
            state: State::Asking,
            bursts: None,
            evasive: EvasiveControl::new(),
            evasive_timer: Interval::new(EVASIVE_PERIOD),
        }
    }

    fn update(&mut self, dt: f32) {
        for _ in 0..self.evasive_timer.advance(dt) {
            self.evasive.step();
        }

        if let Some(bursts) = self.bursts.as_mut() {
            for _ in 0..bursts.advance(dt) {
                self.fireworks.launch(&mut self.rng);
            }
        }

        self.fireworks.tick(&mut self.canvas);
    }

    fn render<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.overlay.clear();
        let mid = self.rows / 2;

        if self.state != State::Asking {
            self.put_centered(mid.saturating_sub(4), MESSAGE, MESSAGE_COLOR);
        }
        self.put_centered(mid.saturating_sub(2), QUESTION, TEXT_COLOR);

        let yes = self.yes_button();
        let no = self.no_button();
        self.overlay.put_str(yes.row, yes.col, YES_LABEL, YES_COLOR);
        self.overlay.put_str(no.row, no.col, NO_LABEL, NO_COLOR);

        if self.state == State::Acknowledging {
            // Below the lowest row the No button can reach
            let row = mid + (MAX_OFFSET / OFFSET_PER_ROW) as usize + 1;
            self.put_centered(row, ACKNOWLEDGMENT, TEXT_COLOR);
            self.put_centered(row + 1, DISMISS_HINT, TEXT_COLOR);
        }

        self.canvas.present(out, &self.overlay, self.viewport)
    }

    fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key(key.code),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => self.on_click(*column as usize, *row as usize),
            _ => {}
        }
    }

    fn resize(&mut self, cols: usize, rows: usize) {
        debug!("viewport resized to {}x{}", cols, rows);
        self.viewport = (cols, rows);
    }
}

impl Proposal {
    pub fn state(&self) -> State {
        self.state
    }

    pub fn fireworks(&self) -> &Fireworks {
        &self.fireworks
    }

    pub fn bursts_armed(&self) -> bool {
        self.bursts.is_some()
    }

    pub fn evasive_offset(&self) -> i32 {
        self.evasive.offset()
    }

    pub fn yes_button(&self) -> Button {
        Button::centered(self.rows / 2, (self.cols / 2).saturating_sub(6), YES_LABEL)
    }

    pub fn no_button(&self) -> Button {
        let row = self.rows / 2 + (self.evasive.offset() / OFFSET_PER_ROW) as usize;
        Button::centered(row, self.cols / 2 + 6, NO_LABEL)
    }

    fn put_centered(&mut self, row: usize, text: &str, color: (u8, u8, u8)) {
        let col = (self.cols / 2).saturating_sub(text.chars().count() / 2);
        self.overlay.put_str(row, col, text, color);
    }

    fn on_key(&mut self, code: KeyCode) {
        match self.state {
            State::Asking => match code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.confirm(),
                KeyCode::Char('n') | KeyCode::Char('N') => debug!("'no' ignored"),
                _ => {}
            },
            State::Acknowledging => self.dismiss(),
            State::Celebrating => {}
        }
    }

    fn on_click(&mut self, col: usize, row: usize) {
        match self.state {
            State::Asking => {
                if self.yes_button().contains(col, row) {
                    self.confirm();
                } else if self.no_button().contains(col, row) {
                    debug!("'no' click ignored");
                }
            }
            State::Acknowledging => self.dismiss(),
            State::Celebrating => {}
        }
    }

    fn confirm(&mut self) {
        info!("answered yes");
        self.state = State::Acknowledging;
    }

    fn dismiss(&mut self) {
        debug!("acknowledgment dismissed, bursts every {}s", BURST_PERIOD);
        self.state = State::Celebrating;
        if self.bursts.is_none() {
            self.bursts = Some(Interval::new(BURST_PERIOD));
        }
    }
}
