//! Capabilities the application needs from the device it runs on.
//!
//! Everything in here is implemented by the host (see [`crate::host`]) or by test fakes. The
//! application core only talks to these traits.

use std::io;

use serde::{Deserialize, Serialize};

/// Storage device a path lives on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Backend {
    Sd,
    Flash,
}

impl Backend {
    pub fn label(self) -> &'static str {
        match self {
            Backend::Sd => "sd",
            Backend::Flash => "littlefs",
        }
    }
}

/// Filesystem primitives keyed by `(backend, path)`.
///
/// A missing file or directory is reported as [`io::ErrorKind::NotFound`].
pub trait Storage {
    fn read(&self, backend: Backend, path: &str) -> io::Result<Vec<u8>>;

    /// Replaces the file, creating parent directories as needed.
    fn write(&mut self, backend: Backend, path: &str, bytes: &[u8]) -> io::Result<()>;

    /// Removes a file or an empty directory. `Ok(false)` when nothing was there.
    fn remove(&mut self, backend: Backend, path: &str) -> io::Result<bool>;

    /// Entry names directly inside `dir`.
    fn list(&self, backend: Backend, dir: &str) -> io::Result<Vec<String>>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaveTarget<'a> {
    pub backend: Backend,
    pub path: &'a str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SavedFile {
    pub status: u16,
    pub length: u64,
}

/// WiFi and a blocking HTTP GET.
pub trait Network {
    fn connected(&self) -> bool;

    fn get(&mut self, url: &str) -> io::Result<HttpResponse>;

    /// Fetches `url` and writes the body to `target` when the status is 200.
    fn save(&mut self, url: &str, target: SaveTarget<'_>) -> io::Result<SavedFile>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Next,
    Prev,
    Select,
    Escape,
}

/// Edge-triggered key presses.
pub trait Keypad {
    fn poll(&mut self) -> Option<Key>;

    /// Drops presses made while the loop was blocked.
    fn discard_pending(&mut self) {
        while self.poll().is_some() {}
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const GREY: Rgb = Rgb(127, 127, 127);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
    pub const ORANGE: Rgb = Rgb(255, 165, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const CYAN: Rgb = Rgb(0, 255, 255);
    pub const PURPLE: Rgb = Rgb(160, 32, 240);
}

/// Pixel rectangle. Width and height may be zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Baseline {
    Top,
    Middle,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextStyle {
    /// Font multiplier; a size-1 glyph is 6x8 pixels.
    pub size: u8,
    pub color: Rgb,
    pub align: Align,
    pub baseline: Baseline,
}

pub trait Display {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    fn fill_rect(&mut self, bounds: Bounds, color: Rgb);
    fn draw_rect(&mut self, bounds: Bounds, color: Rgb);
    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: TextStyle);

    /// Pushes pending drawing to the panel.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub trait Clock {
    fn now_ms(&self) -> u64;
    fn sleep_ms(&self, ms: u64);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceProfile {
    /// Board identifier matched against `supported-devices` patterns.
    pub board: String,
    pub width: i32,
    pub height: i32,
}

impl DeviceProfile {
    pub fn resolution(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}
