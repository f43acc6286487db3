//! TerminalRenderer: presents framebuffers on a real terminal.
//!
//! Frames are encoded into an in-memory byte buffer with crossterm's
//! `QueueableCommand` and written in one go. The first frame, and any frame
//! after a size change or `invalidate`, repaints the whole screen; otherwise
//! only horizontal spans whose cells differ from the previous frame are sent.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// A horizontal run of changed cells on one screen row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub y: u16,
    pub x: u16,
    pub len: u16,
}

/// Compare two equally sized frames row by row and collect differing runs.
///
/// Frames of different sizes produce one span per row of `next`.
pub fn changed_spans(prev: &FrameBuffer, next: &FrameBuffer, spans: &mut Vec<Span>) {
    spans.clear();
    let same_size = prev.width() == next.width() && prev.height() == next.height();

    for y in 0..next.height() {
        if !same_size {
            spans.push(Span {
                y,
                x: 0,
                len: next.width(),
            });
            continue;
        }

        let old = prev.row(y);
        let new = next.row(y);
        let mut open: Option<u16> = None;
        for (x, (a, b)) in old.iter().zip(new).enumerate() {
            let x = x as u16;
            match (a != b, open) {
                (true, None) => open = Some(x),
                (false, Some(start)) => {
                    spans.push(Span {
                        y,
                        x: start,
                        len: x - start,
                    });
                    open = None;
                }
                _ => {}
            }
        }
        if let Some(start) = open {
            spans.push(Span {
                y,
                x: start,
                len: next.width() - start,
            });
        }
    }
}

/// Emits cells while only switching style when it actually changes.
struct Painter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Painter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn paint(&mut self, cell: Cell) -> Result<()> {
        if self.style != Some(cell.style) {
            let style = cell.style;
            self.out.queue(SetAttribute(Attribute::Reset))?;
            self.out.queue(SetForegroundColor(to_term_color(style.fg)))?;
            self.out.queue(SetBackgroundColor(to_term_color(style.bg)))?;
            if style.bold {
                self.out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                self.out.queue(SetAttribute(Attribute::Dim))?;
            }
            self.style = Some(style);
        }
        self.out.queue(Print(cell.ch))?;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn to_term_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Append a whole-screen repaint of `fb` to `out`.
pub fn encode_frame(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut painter = Painter::new(out);
    for y in 0..fb.height() {
        painter.move_to(0, y)?;
        for &cell in fb.row(y) {
            painter.paint(cell)?;
        }
    }
    painter.finish()
}

/// Append the spans of `next` that differ from `prev` to `out`.
pub fn encode_changes(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    spans: &mut Vec<Span>,
    out: &mut Vec<u8>,
) -> Result<()> {
    changed_spans(prev, next, spans);
    let mut painter = Painter::new(out);
    for span in spans.iter() {
        painter.move_to(span.x, span.y)?;
        let row = next.row(span.y);
        let end = (span.x + span.len) as usize;
        for &cell in &row[span.x as usize..end.min(row.len())] {
            painter.paint(cell)?;
        }
    }
    painter.finish()
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    previous: Option<FrameBuffer>,
    spans: Vec<Span>,
    bytes: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Switch the terminal to raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.bytes.clear();
        self.bytes.queue(terminal::EnterAlternateScreen)?;
        self.bytes.queue(cursor::Hide)?;
        self.bytes.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Restore the terminal to its normal state.
    pub fn exit(&mut self) -> Result<()> {
        self.bytes.clear();
        self.bytes.queue(ResetColor)?;
        self.bytes.queue(SetAttribute(Attribute::Reset))?;
        self.bytes.queue(terminal::EnableLineWrap)?;
        self.bytes.queue(cursor::Show)?;
        self.bytes.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            previous: None,
            spans: Vec::new(),
            bytes: Vec::with_capacity(64 * 1024),
        }
    }

    /// Repaint everything on the next `present`, e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Show `fb` on the terminal.
    ///
    /// On return `fb` holds the frame shown before this one, so the caller
    /// can keep drawing into it without allocating a new buffer per frame.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.bytes.clear();
        let mut prev = match self.previous.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_changes(&prev, fb, &mut self.spans, &mut self.bytes)?;
                prev
            }
            _ => {
                encode_frame(fb, &mut self.bytes)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush()?;

        std::mem::swap(&mut prev, fb);
        self.previous = Some(prev);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.write_all(&self.bytes)?;
        self.out.flush()?;
        Ok(())
    }
}
