use std::{
    sync::{Arc, atomic::Ordering},
    time::Duration,
};

use super::worker::WorkerHandle;
use crate::{dispatch::CommandSink, types::Command};

/// Read-only view of the player, polled from the watchdog thread.
pub trait PlayerStatus: Send + Sync + 'static {
    fn is_busy(&self) -> bool;
    fn is_paused(&self) -> bool;
}

pub type WatchdogHandle = WorkerHandle;

/// Emits `Command::Next` on every poll that finds the player neither busy nor
/// paused, i.e. the current track ran out. The executor starting the next
/// track makes the player busy again and silences the watchdog.
pub fn start_watchdog<S: CommandSink>(
    player: Arc<dyn PlayerStatus>,
    mut sink: S,
    poll_interval: Duration,
) -> WatchdogHandle {
    WorkerHandle::spawn(move |stop| {
        let ticker = crossbeam_channel::tick(poll_interval);

        while !stop.load(Ordering::Relaxed) {
            if ticker.recv().is_err() {
                break;
            }

            if !player.is_busy() && !player.is_paused() {
                log::debug!("playback idle; advancing");
                if let Err(err) = sink.deliver(Command::Next) {
                    log::warn!("playback watchdog stopping: {err:#}");
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::atomic::AtomicBool, thread};

    #[derive(Default)]
    struct FakePlayer {
        busy: AtomicBool,
        paused: AtomicBool,
    }

    impl PlayerStatus for FakePlayer {
        fn is_busy(&self) -> bool {
            self.busy.load(Ordering::SeqCst)
        }

        fn is_paused(&self) -> bool {
            self.paused.load(Ordering::SeqCst)
        }
    }

    /// Starts the next track as soon as it is told to advance.
    struct AutoPlayer {
        player: Arc<FakePlayer>,
        advanced: crossbeam_channel::Sender<Command>,
    }

    impl CommandSink for AutoPlayer {
        fn deliver(&mut self, command: Command) -> anyhow::Result<()> {
            self.player.busy.store(true, Ordering::SeqCst);
            let _ = self.advanced.send(command);
            Ok(())
        }
    }

    const POLL: Duration = Duration::from_millis(5);
    const SETTLE: Duration = Duration::from_millis(60);

    #[test]
    fn test_busy_player_is_left_alone() {
        let player = Arc::new(FakePlayer::default());
        player.busy.store(true, Ordering::SeqCst);
        let (tx, rx) = crossbeam_channel::unbounded();
        let watchdog = start_watchdog(player.clone(), tx, POLL);

        thread::sleep(SETTLE);
        watchdog.stop();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_idle_player_at_start_is_advanced() {
        let player = Arc::new(FakePlayer::default());
        let (tx, rx) = crossbeam_channel::unbounded();
        let watchdog = start_watchdog(player.clone(), tx, POLL);

        assert_eq!(rx.recv_timeout(Duration::from_secs(2)), Ok(Command::Next));
        watchdog.stop();
    }

    #[test]
    fn test_player_stuck_idle_keeps_being_advanced() {
        let player = Arc::new(FakePlayer::default());
        let (tx, rx) = crossbeam_channel::unbounded();
        let watchdog = start_watchdog(player.clone(), tx, POLL);

        thread::sleep(SETTLE);
        watchdog.stop();
        assert!(rx.try_iter().count() >= 2);
    }

    #[test]
    fn test_track_end_advances_until_playing_again() {
        let player = Arc::new(FakePlayer::default());
        player.busy.store(true, Ordering::SeqCst);
        let (tx, rx) = crossbeam_channel::unbounded();
        let sink = AutoPlayer {
            player: player.clone(),
            advanced: tx,
        };
        let watchdog = start_watchdog(player.clone(), sink, POLL);

        thread::sleep(SETTLE);
        assert!(rx.try_recv().is_err());

        player.busy.store(false, Ordering::SeqCst);
        assert_eq!(rx.recv_timeout(Duration::from_secs(2)), Ok(Command::Next));

        thread::sleep(SETTLE);
        watchdog.stop();
        assert!(rx.try_recv().is_err(), "busy again after one advance");
    }

    #[test]
    fn test_pause_does_not_advance() {
        let player = Arc::new(FakePlayer::default());
        player.paused.store(true, Ordering::SeqCst);
        let (tx, rx) = crossbeam_channel::unbounded();
        let watchdog = start_watchdog(player.clone(), tx, POLL);

        thread::sleep(SETTLE);
        watchdog.stop();
        assert!(rx.try_recv().is_err());
    }
}
