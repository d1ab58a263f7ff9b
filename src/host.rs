//! Desktop stand-ins for the device: directories for the filesystems, `reqwest` for WiFi and
//! the terminal for the screen and keypad.

mod clock;
mod fs_storage;
mod http;
mod keys;
mod terminal;

pub use self::clock::SystemClock;
pub use self::fs_storage::FsStorage;
pub use self::http::HttpNetwork;
pub use self::keys::{TerminalKeypad, map_key};
pub use self::terminal::TerminalDisplay;
