use anyhow::{Result, anyhow};
use crossbeam_channel::Sender;

use crate::types::Command;

/// Turns the per-frame command stream into discrete dispatches.
///
/// A command is dispatched when it differs from the last one dispatched, except
/// for the volume commands, which fire on every frame they are held. A `None`
/// frame is recorded (so the same gesture can fire again afterwards) but never
/// handed to the executor.
#[derive(Debug, Clone)]
pub struct Debouncer {
    last_dispatched: Command,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl Debouncer {
    pub fn new() -> Self {
        Self {
            last_dispatched: Command::None,
        }
    }

    pub fn submit(&mut self, resolved: Command) -> Option<Command> {
        if resolved == self.last_dispatched && !resolved.is_repeatable() {
            return None;
        }

        self.last_dispatched = resolved;
        resolved.is_actionable().then_some(resolved)
    }

    pub fn last_dispatched(&self) -> Command {
        self.last_dispatched
    }

    pub fn reset(&mut self) {
        self.last_dispatched = Command::None;
    }
}

/// Receiving end of dispatched commands, i.e. the action executor boundary.
pub trait CommandSink: Send + 'static {
    /// Fails once the executor is gone; the caller stops producing.
    fn deliver(&mut self, command: Command) -> Result<()>;
}

impl CommandSink for Sender<Command> {
    fn deliver(&mut self, command: Command) -> Result<()> {
        self.send(command)
            .map_err(|_| anyhow!("command receiver disconnected"))
    }
}

/// Adapts a closure into a [`CommandSink`].
pub struct FnSink<F>(F);

pub fn sink_fn<F>(f: F) -> FnSink<F>
where
    F: FnMut(Command) + Send + 'static,
{
    FnSink(f)
}

impl<F> CommandSink for FnSink<F>
where
    F: FnMut(Command) + Send + 'static,
{
    fn deliver(&mut self, command: Command) -> Result<()> {
        (self.0)(command);
        Ok(())
    }
}

/// Logs every dispatched command before passing it on.
pub struct LoggingSink<S> {
    inner: S,
}

impl<S: CommandSink> LoggingSink<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: CommandSink> CommandSink for LoggingSink<S> {
    fn deliver(&mut self, command: Command) -> Result<()> {
        log::info!(
            "dispatch {} ({}: {})",
            command,
            command.gesture_name(),
            command.description()
        );
        self.inner.deliver(command)
    }
}
