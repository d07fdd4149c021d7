#![cfg(feature = "std")]

//! Game coordinator: runs the input, render and tick activities as threads
//! around one lock-protected [`SessionState`].

use std::io::{self, BufRead, Write};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::anyhow;
use rand::Rng;

use crate::common::ConfigError;
use crate::config::{GameSettings, TICK_MS_DEFAULT};
use crate::game::{GameReport, SessionState};

pub const MSG_OUTPUT_CLOSED: &str = "Output closed.";
pub const MSG_START_FAILED: &str = "Failed to start game.";

/// Session state plus the signal that announces every change to it.
struct Shared {
    state: Mutex<SessionState>,
    changed: Condvar,
}

fn poisoned<T>(_: PoisonError<T>) -> anyhow::Error {
    anyhow!("session lock poisoned")
}

impl Shared {
    fn lock(&self) -> anyhow::Result<MutexGuard<'_, SessionState>> {
        self.state.lock().map_err(poisoned)
    }

    fn is_running(&self) -> anyhow::Result<bool> {
        Ok(self.lock()?.is_running())
    }

    /// Mutate the session under the lock, then wake every waiter.
    fn update<T>(&self, f: impl FnOnce(&mut SessionState) -> T) -> anyhow::Result<T> {
        let mut state = self.lock()?;
        let out = f(&mut state);
        drop(state);
        self.changed.notify_all();
        Ok(out)
    }
}

/// Owns the shared session and drives it to completion.
pub struct Coordinator {
    shared: Arc<Shared>,
    tick_interval: Duration,
}

impl Coordinator {
    pub fn new(session: SessionState) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(session),
                changed: Condvar::new(),
            }),
            tick_interval: Duration::from_millis(TICK_MS_DEFAULT),
        }
    }

    /// Validate `settings`, place a fleet with `rng`, and wrap the session.
    pub fn from_settings<R: Rng>(settings: &GameSettings, rng: &mut R) -> Result<Self, ConfigError> {
        Ok(Self::new(SessionState::from_settings(settings, rng)?))
    }

    /// Cadence of the background tick. Clamped to at least one millisecond.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval.max(Duration::from_millis(1));
        self
    }

    /// Play one session: read commands from `input`, draw frames to `output`.
    ///
    /// Returns after all three threads have been joined. Thread failures are
    /// reported only then, so no thread is left behind on an error path.
    pub fn run<I, O>(self, input: I, output: O) -> anyhow::Result<GameReport>
    where
        I: BufRead + Send + 'static,
        O: Write + Send + 'static,
    {
        let input_worker: Worker = {
            let shared = Arc::clone(&self.shared);
            Box::new(move || input_loop(&shared, input))
        };
        let render_worker: Worker = {
            let shared = Arc::clone(&self.shared);
            Box::new(move || render_loop(&shared, output))
        };
        let tick_worker: Worker = {
            let shared = Arc::clone(&self.shared);
            let interval = self.tick_interval;
            Box::new(move || tick_loop(&shared, interval))
        };
        let workers = vec![
            ("input", input_worker),
            ("render", render_worker),
            ("tick", tick_worker),
        ];
        let threads = spawn_all(&self.shared, workers, spawn_named)?;

        let results: Vec<anyhow::Result<()>> = threads
            .into_iter()
            .map(|(name, handle)| join(name, handle))
            .collect();
        for result in results {
            result?;
        }

        let report = self
            .shared
            .lock()?
            .report()
            .ok_or_else(|| anyhow!("session still active after shutdown"))?;
        log::debug!("session finished: {:?}", report);
        Ok(report)
    }
}

type Worker = Box<dyn FnOnce() -> anyhow::Result<()> + Send>;
type Handle = JoinHandle<anyhow::Result<()>>;

fn spawn_named(name: &'static str, worker: Worker) -> io::Result<Handle> {
    thread::Builder::new().name(name.into()).spawn(worker)
}

/// Start `workers` in order with `spawn`.
///
/// When one fails to start, the session is aborted and every thread already
/// started is joined before the spawn error is returned.
fn spawn_all<S>(
    shared: &Shared,
    workers: Vec<(&'static str, Worker)>,
    mut spawn: S,
) -> anyhow::Result<Vec<(&'static str, Handle)>>
where
    S: FnMut(&'static str, Worker) -> io::Result<Handle>,
{
    let mut started = Vec::with_capacity(workers.len());
    for (name, worker) in workers {
        match spawn(name, worker) {
            Ok(handle) => {
                log::debug!("{} thread started", name);
                started.push((name, handle));
            }
            Err(e) => {
                if let Err(abort_err) = shared.update(|s| s.abort(MSG_START_FAILED)) {
                    log::error!("{}", abort_err);
                }
                for (started_name, handle) in started {
                    if let Err(join_err) = join(started_name, handle) {
                        log::warn!("{}", join_err);
                    }
                }
                return Err(anyhow!("failed to spawn {} thread: {}", name, e));
            }
        }
    }
    Ok(started)
}

fn join(name: &str, handle: Handle) -> anyhow::Result<()> {
    handle
        .join()
        .map_err(|_| anyhow!("{} thread panicked", name))?
}

/// Read lines until the session finishes. EOF and read errors end the session.
fn input_loop<I: BufRead>(shared: &Shared, mut input: I) -> anyhow::Result<()> {
    let mut line = String::new();
    while shared.is_running()? {
        line.clear();
        let read = input.read_line(&mut line);
        shared.update(|state| match &read {
            Ok(n) if *n > 0 => state.handle_line(&line),
            _ => state.close_input(),
        })?;
        read.map_err(|e| anyhow!("failed to read input: {}", e))?;
    }
    log::debug!("input thread stopped");
    Ok(())
}

/// Draw a frame every time the session is marked dirty. Exits after the first
/// frame drawn once the session is no longer running.
fn render_loop<O: Write>(shared: &Shared, mut output: O) -> anyhow::Result<()> {
    loop {
        let (frame, running) = {
            let state = shared.lock()?;
            let mut state = shared
                .changed
                .wait_while(state, |s| !s.is_dirty())
                .map_err(poisoned)?;
            (state.take_frame(), state.is_running())
        };
        let written = output
            .write_all(frame.as_bytes())
            .and_then(|()| output.flush());
        if let Err(e) = written {
            log::error!("failed to draw frame: {}", e);
            shared.update(|s| s.abort(MSG_OUTPUT_CLOSED))?;
            return Err(e.into());
        }
        if !running {
            break;
        }
    }
    log::debug!("render thread stopped");
    Ok(())
}

/// Keep a fixed cadence while the session runs. Mutates nothing.
fn tick_loop(shared: &Shared, interval: Duration) -> anyhow::Result<()> {
    let mut ticks: u64 = 0;
    let mut state = shared.lock()?;
    while state.is_running() {
        let (guard, timeout) = shared
            .changed
            .wait_timeout_while(state, interval, |s| s.is_running())
            .map_err(poisoned)?;
        state = guard;
        if timeout.timed_out() {
            ticks += 1;
            log::trace!("tick {}", ticks);
        }
    }
    log::debug!("tick thread stopped after {} ticks", ticks);
    Ok(())
}
