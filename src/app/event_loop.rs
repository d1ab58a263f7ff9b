use anyhow::Context;

use super::*;

/// Hardware the loop drives.
pub struct Peripherals<'a> {
    pub display: &'a mut dyn Display,
    pub keypad: &'a mut dyn Keypad,
    pub clock: &'a dyn Clock,
}

impl App {
    /// Runs startup, then loops until the user leaves the top level.
    pub fn run(&mut self, io: &mut Peripherals<'_>) -> anyhow::Result<()> {
        self.startup(io.display, io.clock);
        self.settle(io);
        io.display.flush().context("flush display")?;

        while !self.quit {
            self.step(io)?;
        }
        info!("app store closed");
        Ok(())
    }

    /// One pass of the main loop.
    pub fn step(&mut self, io: &mut Peripherals<'_>) -> anyhow::Result<()> {
        if !self.downloading {
            if let Some(key) = io.keypad.poll() {
                self.handle_key(key, io.display, io.clock);
                self.settle(io);
            }
            if self.quit {
                return Ok(());
            }
            self.render(io.display);
        }

        let now = io.clock.now_ms();
        self.check_popup_clear(now);
        self.tick_scroll(io.display, now);
        io.display.flush().context("flush display")?;
        io.clock.sleep_ms(self.config.timing.loop_delay_ms);
        Ok(())
    }

    /// Drops keys pressed while something blocked the loop.
    fn settle(&mut self, io: &mut Peripherals<'_>) {
        if std::mem::take(&mut self.blocked) {
            io.keypad.discard_pending();
        }
    }
}
