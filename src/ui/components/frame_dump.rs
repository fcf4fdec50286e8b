use std::fs;

use ratatui::buffer::Buffer;

use crate::error::{Context, Result};
use crate::screen::FrameEncoder;

/// Saves a drawn terminal frame as plain text.
pub struct BufferDump<'a> {
    buffer: &'a Buffer,
}

impl<'a> BufferDump<'a> {
    pub fn new(buffer: &'a Buffer) -> Self {
        Self { buffer }
    }
}

impl FrameEncoder for BufferDump<'_> {
    fn write_frame(&mut self, path: &str) -> Result<()> {
        fs::write(path, buffer_text(self.buffer))
            .with_context(|| format!("Failed to write screen dump {path}"))?;
        Ok(())
    }
}

/// One line per terminal row, trailing blanks removed.
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::with_capacity(area.area() as usize + area.height as usize);
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer.get(x, y).symbol());
        }
        text.push_str(line.trim_end());
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_buffer_rows() {
        let buffer = Buffer::with_lines(vec!["ab  ", " cd ", "    "]);
        assert_eq!(buffer_text(&buffer), "ab\n cd\n\n");
    }

    #[test]
    fn writes_dump_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dump.txt");
        let buffer = Buffer::with_lines(vec!["slot 1"]);

        BufferDump::new(&buffer)
            .write_frame(path.to_str().unwrap())
            .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "slot 1\n");
    }
}
