use crossterm::event::Event;
use fastrand::Rng;
use std::io::{self, Write};

pub mod evasive;
pub mod fireworks;
pub mod proposal;

pub trait Effect {
    fn new(cols: usize, rows: usize, rng: Rng) -> Self
    where
        Self: Sized;
    fn update(&mut self, dt: f32);
    fn render<W: Write>(&mut self, out: &mut W) -> io::Result<()>;
    fn handle_event(&mut self, _event: &Event) {}
    fn resize(&mut self, _cols: usize, _rows: usize) {}
}
