//! SSD1306 OLED Display Driver
//!
//! Driver for 128x32 SSD1306-based OLED displays via I2C. Keeps a
//! page-organized frame buffer in RAM; `show` streams it out in one
//! horizontal-addressing transfer.

use echolot_core::traits::{DisplayDriver, DisplayError};
use embedded_hal::i2c::I2c;

use crate::font::FONT_5X7;

/// SSD1306 I2C address (typically 0x3C or 0x3D)
const SSD1306_ADDR: u8 = 0x3C;

/// Display dimensions
const WIDTH: usize = 128;
const HEIGHT: usize = 32;
const PAGES: usize = HEIGHT / 8;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_RAM_CONTENT: u8 = 0xA4;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_ADDR_MODE: u8 = 0x20;
    pub const SET_COLUMN_RANGE: u8 = 0x21;
    pub const SET_PAGE_RANGE: u8 = 0x22;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    /// Frame buffer (1 bit per pixel, organized as pages)
    buffer: [[u8; WIDTH]; PAGES],
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2c,
{
    /// Create a new SSD1306 driver
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            buffer: [[0; WIDTH]; PAGES],
        }
    }

    /// Initialize the display
    pub fn init(&mut self) -> Result<(), DisplayError> {
        // Initialization sequence for 128x32 SSD1306
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80, // Default clock
            cmd::SET_MUX_RATIO,
            0x1F, // 32 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE | 0x00,
            cmd::SET_CHARGE_PUMP,
            0x14, // Enable charge pump
            cmd::SET_ADDR_MODE,
            0x00,                  // Horizontal addressing
            cmd::SET_SEG_REMAP,    // Flip horizontally
            cmd::SET_COM_SCAN_DEC, // Flip vertically
            cmd::SET_COM_PINS,
            0x02, // Sequential COM config (32-line panel)
            cmd::SET_CONTRAST,
            0x8F,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::SET_RAM_CONTENT,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c)?;
        }

        Ok(())
    }

    /// Send a command to the display
    fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(SSD1306_ADDR, &[0x00, cmd])
            .map_err(|_| DisplayError::Bus)
    }

    /// Set one pixel in the frame buffer; out-of-bounds pixels are clipped
    fn set_pixel(&mut self, x: i16, y: i16) {
        if (0..WIDTH as i16).contains(&x) && (0..HEIGHT as i16).contains(&y) {
            self.buffer[(y / 8) as usize][x as usize] |= 1 << (y % 8);
        }
    }
}

impl<I2C> DisplayDriver for Ssd1306<I2C>
where
    I2C: I2c,
{
    fn clear_buffer(&mut self) -> Result<(), DisplayError> {
        for page in self.buffer.iter_mut() {
            page.fill(0);
        }
        Ok(())
    }

    fn draw_string(&mut self, x: u8, y: u8, scale: u8, text: &str) -> Result<(), DisplayError> {
        let scale = scale.max(1) as i16;
        let mut cx = x as i16;

        for ch in text.chars() {
            let glyph = get_glyph(ch);
            for (col, bits) in glyph.iter().enumerate() {
                for row in 0..7 {
                    if bits & (1 << row) != 0 {
                        // One glyph pixel covers a scale x scale block
                        for dx in 0..scale {
                            for dy in 0..scale {
                                self.set_pixel(
                                    cx + col as i16 * scale + dx,
                                    y as i16 + row * scale + dy,
                                );
                            }
                        }
                    }
                }
            }
            // 5 glyph columns plus one spacing column
            cx += 6 * scale;
        }

        Ok(())
    }

    fn draw_line(&mut self, x0: u8, y0: u8, x1: u8, y1: u8) -> Result<(), DisplayError> {
        // Bresenham; endpoints may lie off-panel, set_pixel clips
        let (mut x, mut y) = (x0 as i16, y0 as i16);
        let (x1, y1) = (x1 as i16, y1 as i16);

        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }

        Ok(())
    }

    fn show(&mut self) -> Result<(), DisplayError> {
        // Reset the addressing window, then stream the whole buffer
        self.command(cmd::SET_COLUMN_RANGE)?;
        self.command(0)?;
        self.command((WIDTH - 1) as u8)?;
        self.command(cmd::SET_PAGE_RANGE)?;
        self.command(0)?;
        self.command((PAGES - 1) as u8)?;

        let mut data = [0u8; WIDTH * PAGES + 1];
        data[0] = 0x40; // Data mode
        for (page, chunk) in self.buffer.iter().zip(data[1..].chunks_mut(WIDTH)) {
            chunk.copy_from_slice(page);
        }

        self.i2c
            .write(SSD1306_ADDR, &data)
            .map_err(|_| DisplayError::Bus)
    }
}

/// Get the 5x7 glyph for a character
fn get_glyph(ch: char) -> &'static [u8; 5] {
    let idx = ch as usize;
    if (32..128).contains(&idx) {
        &FONT_5X7[idx - 32]
    } else {
        &FONT_5X7[0] // Space for unknown chars
    }
}
