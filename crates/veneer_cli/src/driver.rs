//! Drives a widget gallery from text commands
//!
//! [`Session`] owns the gallery and applies one [`Command`] at a time.
//! [`run_script`] replays a whole script against a manual clock, so the
//! same script always produces the same output. [`run_interactive`] reads
//! commands from stdin while a frame interval ticks the gallery's timers
//! against the system clock.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};
use veneer_core::{ManualClock, SharedClock, SystemClock};
use veneer_widgets::{Gallery, WidgetContext};

use crate::command::{Command, HELP};
use crate::config::VeneerConfig;

/// What the caller should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue,
    Output(String),
    Quit,
}

/// A gallery plus the clock it runs on
pub struct Session {
    gallery: Gallery,
    clock: SharedClock,
    manual: Option<Arc<ManualClock>>,
}

impl Session {
    fn new(
        clock: SharedClock,
        manual: Option<Arc<ManualClock>>,
        config: &VeneerConfig,
    ) -> Result<Self> {
        let ctx = WidgetContext::new(clock.clone(), config.state());
        let gallery = Gallery::demo(&ctx).context("Failed to build the demo gallery")?;
        Ok(Self {
            gallery,
            clock,
            manual,
        })
    }

    /// A session whose time only moves on `wait`
    pub fn manual(config: &VeneerConfig) -> Result<Self> {
        let clock = ManualClock::shared();
        Self::new(clock.clone(), Some(clock), config)
    }

    /// A session on wall-clock time
    pub fn realtime(config: &VeneerConfig) -> Result<Self> {
        Self::new(SystemClock::shared(), None, config)
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn render(&self) -> String {
        self.gallery.render_text()
    }

    /// Apply one command
    pub fn apply(&mut self, command: Command) -> Result<Step> {
        match command {
            Command::Click { widget, element } => {
                let response = self.gallery.click(&widget, &element)?;
                info!(%widget, %element, %response, at = %self.clock.now(), "click");
                Ok(Step::Continue)
            }
            Command::Remount { widget } => {
                self.gallery.remount(&widget)?;
                info!(%widget, "remounted");
                Ok(Step::Continue)
            }
            Command::Mount { widget } => {
                let response = self.gallery.mount(&widget)?;
                info!(%widget, %response, "mount");
                Ok(Step::Continue)
            }
            Command::Unmount { widget } => {
                let response = self.gallery.unmount(&widget)?;
                info!(%widget, %response, "unmount");
                Ok(Step::Continue)
            }
            Command::Wait(duration) => {
                self.wait(duration);
                Ok(Step::Continue)
            }
            Command::Render => Ok(Step::Output(self.render())),
            Command::Help => Ok(Step::Output(format!("{HELP}\n"))),
            Command::Quit => Ok(Step::Quit),
        }
    }

    /// Apply one command, sleeping through `wait` on wall-clock time
    pub async fn execute(&mut self, command: Command) -> Result<Step> {
        if let Command::Wait(duration) = &command {
            if self.manual.is_none() {
                tokio::time::sleep(*duration).await;
            }
        }
        self.apply(command)
    }

    /// Let `duration` pass, then tick.
    ///
    /// A manual clock is advanced here. On the system clock the time has
    /// already passed in [`execute`](Self::execute), so only the tick
    /// happens.
    fn wait(&mut self, duration: Duration) {
        if let Some(manual) = &self.manual {
            manual.advance(duration);
        }
        if self.gallery.tick() {
            debug!(at = %self.clock.now(), "timers fired");
        }
    }

    /// Tick timers. Returns `true` when the gallery needs a redraw.
    pub fn tick(&mut self) -> bool {
        self.gallery.tick();
        self.gallery.dirty_flag().take()
    }
}

/// Replay `script` on a manual clock and collect everything it renders
pub fn run_script(script: &str, config: &VeneerConfig) -> Result<String> {
    let mut session = Session::manual(config)?;
    let mut out = String::new();

    for (index, line) in script.lines().enumerate() {
        let line_no = index + 1;
        let Some(command) =
            Command::parse_line(line).with_context(|| format!("line {line_no}: `{line}`"))?
        else {
            continue;
        };

        match session
            .apply(command)
            .with_context(|| format!("line {line_no}: `{}`", line.trim()))?
        {
            Step::Continue => {}
            Step::Output(text) => out.push_str(&text),
            Step::Quit => break,
        }
    }

    Ok(out)
}

/// Run the gallery against stdin until `quit` or end of input
pub async fn run_interactive(config: &VeneerConfig, fps: u32) -> Result<()> {
    let mut session = Session::realtime(config)?;
    let frame = Duration::from_secs(1) / fps.max(1);
    info!(fps, widgets = session.gallery().len(), "starting frame loop");

    print!("{}", session.render());
    // Initial render consumed the mount marks
    session.gallery().dirty_flag().take();

    let mut interval = tokio::time::interval(frame);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if session.tick() {
                    print!("{}", session.render());
                }
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    debug!("stdin closed");
                    break;
                };

                let command = match Command::parse_line(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(e) => {
                        eprintln!("{e}");
                        continue;
                    }
                };

                match session.execute(command).await {
                    Ok(Step::Continue) => {}
                    Ok(Step::Output(text)) => print!("{text}"),
                    Ok(Step::Quit) => break,
                    Err(e) => {
                        warn!("{e:#}");
                        eprintln!("error: {e:#}");
                    }
                }

                if session.gallery().dirty_flag().take() {
                    print!("{}", session.render());
                }
            }
        }
    }

    info!("frame loop stopped");
    Ok(())
}
