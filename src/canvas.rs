use std::io::{self, Write};

/// Logical units per half-block pixel.
pub const SCALE: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Anything a particle can be drawn onto. Coordinates are logical pixels.
pub trait Surface {
    fn clear(&mut self);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba);
}

/// Text drawn over the canvas, one character per terminal cell.
pub struct Overlay {
    cols: usize,
    rows: usize,
    cells: Vec<Option<(char, (u8, u8, u8))>>,
}

impl Overlay {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![None; cols * rows],
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub fn put_str(&mut self, row: usize, col: usize, text: &str, color: (u8, u8, u8)) {
        if row >= self.rows {
            return;
        }
        for (i, ch) in text.chars().enumerate() {
            let c = col + i;
            if c >= self.cols {
                break;
            }
            self.cells[row * self.cols + c] = Some((ch, color));
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<(char, (u8, u8, u8))> {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col]
        } else {
            None
        }
    }
}

/// Half-block pixel buffer. Each terminal cell holds two vertically stacked pixels.
pub struct Canvas {
    width: usize,
    height: usize,
    bg_color: (u8, u8, u8),
    pixels: Vec<[f32; 3]>,
    output_buf: Vec<u8>,
}

impl Canvas {
    pub fn new(cols: usize, rows: usize, bg_color: (u8, u8, u8)) -> Self {
        let width = cols;
        let height = rows * 2;
        Self {
            width,
            height,
            bg_color,
            pixels: vec![to_f32(bg_color); width * height],
            output_buf: Vec::with_capacity(width * height * 25),
        }
    }

    pub fn logical_size(&self) -> (f32, f32) {
        (self.width as f32 * SCALE, self.height as f32 * SCALE)
    }

    pub fn pixel(&self, x: usize, y: usize) -> (u8, u8, u8) {
        to_u8(self.pixels[y * self.width + x])
    }

    fn blend(&mut self, x: usize, y: usize, color: Rgba, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        let dst = &mut self.pixels[y * self.width + x];
        let src = [color.r as f32, color.g as f32, color.b as f32];
        for (d, s) in dst.iter_mut().zip(src) {
            *d = s * alpha + *d * (1.0 - alpha);
        }
    }

    /// Writes the frame as half-blocks, clipped to `viewport` (cols, rows).
    pub fn present<W: Write>(
        &mut self,
        out: &mut W,
        overlay: &Overlay,
        viewport: (usize, usize),
    ) -> io::Result<()> {
        self.output_buf.clear();
        self.output_buf.extend_from_slice(b"\x1b[H");

        let cols = self.width.min(viewport.0);
        let rows = (self.height / 2).min(viewport.1);

        let mut prev_bg: Option<(u8, u8, u8)> = None;
        let mut prev_fg: Option<(u8, u8, u8)> = None;

        for row in 0..rows {
            for col in 0..cols {
                let top = self.pixel(col, row * 2);
                let bot = self.pixel(col, row * 2 + 1);

                let (glyph, fg) = match overlay.get(row, col) {
                    Some((ch, text_color)) => (ch, text_color),
                    None => ('▄', bot),
                };

                if prev_bg != Some(top) {
                    write!(self.output_buf, "\x1b[48;2;{};{};{}m", top.0, top.1, top.2)?;
                    prev_bg = Some(top);
                }
                if prev_fg != Some(fg) {
                    write!(self.output_buf, "\x1b[38;2;{};{};{}m", fg.0, fg.1, fg.2)?;
                    prev_fg = Some(fg);
                }

                let mut utf8 = [0u8; 4];
                self.output_buf
                    .extend_from_slice(glyph.encode_utf8(&mut utf8).as_bytes());
            }
            self.output_buf.extend_from_slice(b"\x1b[0m");
            prev_bg = None;
            prev_fg = None;
            if row + 1 < rows {
                self.output_buf.extend_from_slice(b"\r\n");
            }
        }

        out.write_all(&self.output_buf)?;
        out.flush()
    }
}

impl Surface for Canvas {
    fn clear(&mut self) {
        self.pixels.fill(to_f32(self.bg_color));
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        if radius <= 0.0 || color.a <= 0.0 || self.width == 0 || self.height == 0 {
            return;
        }

        let cx = x / SCALE;
        let cy = y / SCALE;
        let r = radius / SCALE;

        let x0 = (cx - r).floor().max(0.0) as i64;
        let y0 = (cy - r).floor().max(0.0) as i64;
        let x1 = ((cx + r).ceil() as i64).min(self.width as i64 - 1);
        let y1 = ((cy + r).ceil() as i64).min(self.height as i64 - 1);

        let mut painted = false;
        for py in y0..=y1 {
            for px in x0..=x1 {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r * r {
                    self.blend(px as usize, py as usize, color, color.a);
                    painted = true;
                }
            }
        }

        // Sub-pixel circle: light the pixel under its center, weighted by area.
        if !painted && cx >= 0.0 && cy >= 0.0 {
            let (px, py) = (cx as usize, cy as usize);
            if px < self.width && py < self.height {
                let coverage = (std::f32::consts::PI * r * r).min(1.0);
                self.blend(px, py, color, color.a * coverage);
            }
        }
    }
}

fn to_f32(c: (u8, u8, u8)) -> [f32; 3] {
    [c.0 as f32, c.1 as f32, c.2 as f32]
}

fn to_u8(c: [f32; 3]) -> (u8, u8, u8) {
    let ch = |v: f32| v.round().clamp(0.0, 255.0) as u8;
    (ch(c[0]), ch(c[1]), ch(c[2]))
}
