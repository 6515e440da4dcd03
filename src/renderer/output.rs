//! Terminal output for a FrameBuffer.
//!
//! Emits the buffer through crossterm commands, queued on the writer and
//! flushed once. Colors and attributes are only re-sent when they change.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};

use super::buffer::FrameBuffer;
use crate::types::{Attr, Rgba};

/// Convert a color for the terminal, compositing translucent colors over black.
fn to_crossterm_color(color: Rgba) -> Color {
    if color.is_terminal_default() {
        return Color::Reset;
    }
    let opaque = color.over(Rgba::BLACK);
    Color::Rgb {
        r: opaque.r as u8,
        g: opaque.g as u8,
        b: opaque.b as u8,
    }
}

fn queue_attrs<W: Write>(out: &mut W, attrs: Attr) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset))?;
    let pairs = [
        (Attr::BOLD, Attribute::Bold),
        (Attr::DIM, Attribute::Dim),
        (Attr::ITALIC, Attribute::Italic),
        (Attr::UNDERLINE, Attribute::Underlined),
        (Attr::INVERSE, Attribute::Reverse),
    ];
    for (flag, attribute) in pairs {
        if attrs.contains(flag) {
            queue!(out, SetAttribute(attribute))?;
        }
    }
    Ok(())
}

/// Write `buffer` with its top-left corner at terminal position `origin`.
pub fn write_frame<W: Write>(out: &mut W, buffer: &FrameBuffer, origin: (u16, u16)) -> io::Result<()> {
    let (ox, oy) = origin;
    let mut last_fg: Option<Rgba> = None;
    let mut last_bg: Option<Rgba> = None;
    let mut last_attrs: Option<Attr> = None;

    for y in 0..buffer.height() {
        queue!(out, MoveTo(ox, oy.saturating_add(y)))?;
        for x in 0..buffer.width() {
            let Some(cell) = buffer.get(x, y) else {
                continue;
            };
            if last_attrs != Some(cell.attrs) {
                queue_attrs(out, cell.attrs)?;
                last_attrs = Some(cell.attrs);
                // Attribute reset clears colors on some terminals.
                last_fg = None;
                last_bg = None;
            }
            if last_fg != Some(cell.fg) {
                queue!(out, SetForegroundColor(to_crossterm_color(cell.fg)))?;
                last_fg = Some(cell.fg);
            }
            if last_bg != Some(cell.bg) {
                queue!(out, SetBackgroundColor(to_crossterm_color(cell.bg)))?;
                last_bg = Some(cell.bg);
            }
            queue!(out, Print(cell.char))?;
        }
    }

    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    out.flush()
}
