use std::{thread::sleep, time::{Duration, Instant}};

pub trait Clock {
    /// Blocks until enough time has passed since the previous call to keep
    /// `ticks_per_second`. The first call returns right away.
    fn tick(&mut self, ticks_per_second: u32);

    fn delay(&mut self, millis: u64);
}

pub struct FrameClock {
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        FrameClock { last_tick: None }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FrameClock {
    fn tick(&mut self, ticks_per_second: u32) {
        let frame = Duration::from_secs(1) / ticks_per_second.max(1);

        if let Some(last) = self.last_tick {
            let elapsed = last.elapsed();
            if elapsed < frame {
                sleep(frame - elapsed);
            }
        }

        self.last_tick = Some(Instant::now());
    }

    fn delay(&mut self, millis: u64) {
        sleep(Duration::from_millis(millis));
    }
}
