//! CarouselController: runs a carousel on its own task
//!
//! All state mutation happens inside one spawned task, so UI events, timer
//! ticks and lock releases are applied strictly one after another. Inbound
//! events arrive through a [`CarouselHandle`]; outbound frames go to the
//! [`Surface`] the controller was spawned with.
//!
//! Within one loop iteration the task prefers, in order: shutdown, the end
//! of an in-flight transition, an auto-advance tick, and finally queued
//! commands. A tick that lands while a transition is in flight is dropped by
//! the state and does not move the release deadline.

use std::pin::Pin;
use std::time::Duration;

use tokio::{
    sync::{mpsc, oneshot, watch},
    task::JoinHandle,
    time::{self, Instant, Sleep},
};
use tracing::{debug, info, warn};

use crate::error::{CarouselError, Result};
use crate::layout::RenderStrategy;
use crate::state::CarouselState;
use crate::surface::Surface;
use crate::timer::AutoAdvance;
use crate::types::{CarouselKey, Phase, Transition};

const COMMAND_BUFFER: usize = 32;

/// Point-in-time view of a running carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselSnapshot {
    /// Which carousel.
    pub key: CarouselKey,
    /// Active position.
    pub current: usize,
    /// Number of navigable positions.
    pub positions: usize,
    /// Whether a transition is in flight.
    pub phase: Phase,
    /// Period of the running auto-advance timer, if any.
    pub auto_advance: Option<Duration>,
}

#[derive(Debug)]
enum Command {
    Next(oneshot::Sender<Transition>),
    Previous(oneshot::Sender<Transition>),
    Select(usize, oneshot::Sender<Result<Transition>>),
    StartAutoAdvance(Option<Duration>, oneshot::Sender<Option<Duration>>),
    StopAutoAdvance(oneshot::Sender<()>),
    Snapshot(oneshot::Sender<CarouselSnapshot>),
}

/// Spawns carousel tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarouselController;

impl CarouselController {
    /// Render `state` once, start its auto-advance timer when the config
    /// asks for one, and move it onto a new task.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<T, L, S>(
        key: CarouselKey,
        state: CarouselState<T, L>,
        surface: S,
    ) -> CarouselHandle
    where
        T: Send + 'static,
        L: RenderStrategy,
        S: Surface<T, L::Frame>,
    {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let (stop_tx, stop_rx) = watch::channel(false);

        // First period counts from creation, not from the task's first poll.
        let timer = match state.config().auto_advance() {
            Some(period) => AutoAdvance::running(period),
            None => AutoAdvance::new(),
        };

        let initial = CarouselSnapshot {
            key: key.clone(),
            current: state.current(),
            positions: state.positions(),
            phase: state.phase(),
            auto_advance: timer.period(),
        };
        let (snapshot_tx, snapshot_rx) = watch::channel(initial);

        let mut worker = Worker {
            key: key.clone(),
            state,
            surface,
            timer,
            release: Box::pin(time::sleep_until(Instant::now())),
            releasing: false,
            commands: command_rx,
            stop: stop_rx,
            snapshots: snapshot_tx,
        };
        worker.render();
        let task = tokio::spawn(worker.run());

        CarouselHandle {
            key,
            commands: command_tx,
            snapshots: snapshot_rx,
            stop: stop_tx,
            task: Some(task),
        }
    }
}

/// Inbound side of a running carousel.
///
/// Dropping the handle aborts the task and releases its timer; call
/// [`CarouselHandle::shutdown`] to wait for a clean stop instead.
#[derive(Debug)]
pub struct CarouselHandle {
    key: CarouselKey,
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<CarouselSnapshot>,
    stop: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl CarouselHandle {
    /// Key the carousel was spawned with.
    pub fn key(&self) -> &CarouselKey {
        &self.key
    }

    /// "Advance" button.
    pub async fn next(&self) -> Result<Transition> {
        self.request(Command::Next).await
    }

    /// "Retreat" button.
    pub async fn previous(&self) -> Result<Transition> {
        self.request(Command::Previous).await
    }

    /// Dot or item click.
    pub async fn go_to(&self, index: usize) -> Result<Transition> {
        self.request(|reply| Command::Select(index, reply)).await?
    }

    /// Start or restart auto-advance. `None` uses the configured period and
    /// a zero period stops the timer. Returns the period in effect, or
    /// `None` when auto-advance ended up disabled.
    pub async fn start_auto_advance(
        &self,
        period: Option<Duration>,
    ) -> Result<Option<Duration>> {
        self.request(|reply| Command::StartAutoAdvance(period, reply))
            .await
    }

    /// Stop auto-advance until restarted.
    pub async fn stop_auto_advance(&self) -> Result<()> {
        self.request(Command::StopAutoAdvance).await
    }

    /// Current state as seen by the carousel task, after it has applied
    /// every timer that is already due.
    pub async fn snapshot(&self) -> Result<CarouselSnapshot> {
        self.request(Command::Snapshot).await
    }

    /// Receiver that observes every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<CarouselSnapshot> {
        self.snapshots.clone()
    }

    /// Whether the carousel task is still alive.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop the task and wait for it to finish.
    pub async fn shutdown(mut self) {
        let _ = self.stop.send(true);
        if let Some(task) = self.task.take()
            && let Err(err) = task.await
            && err.is_panic()
        {
            warn!(carousel = %self.key, "carousel task panicked: {err}");
        }
    }

    async fn request<R>(
        &self,
        make: impl FnOnce(oneshot::Sender<R>) -> Command,
    ) -> Result<R> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.commands
            .send(make(reply_tx))
            .await
            .map_err(|_| CarouselError::ControllerClosed)?;
        reply_rx.await.map_err(|_| CarouselError::ControllerClosed)
    }
}

impl Drop for CarouselHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            let _ = self.stop.send(true);
            task.abort();
        }
    }
}

struct Worker<T, L: RenderStrategy, S> {
    key: CarouselKey,
    state: CarouselState<T, L>,
    surface: S,
    timer: AutoAdvance,
    /// Fires when the in-flight transition ends; only polled while
    /// `releasing` is set.
    release: Pin<Box<Sleep>>,
    releasing: bool,
    commands: mpsc::Receiver<Command>,
    stop: watch::Receiver<bool>,
    snapshots: watch::Sender<CarouselSnapshot>,
}

impl<T, L, S> Worker<T, L, S>
where
    T: Send + 'static,
    L: RenderStrategy,
    S: Surface<T, L::Frame>,
{
    async fn run(mut self) {
        info!(
            carousel = %self.key,
            positions = self.state.positions(),
            auto_advance_ms = self.timer.period().map(|p| p.as_millis() as u64),
            "carousel started"
        );

        loop {
            tokio::select! {
                biased;

                changed = self.stop.changed() => {
                    if changed.is_err() || *self.stop.borrow() {
                        break;
                    }
                }
                _ = &mut self.release, if self.releasing => {
                    self.releasing = false;
                    if self.state.release_lock() {
                        debug!(carousel = %self.key, "transition finished");
                    }
                    self.publish();
                }
                _ = self.timer.tick() => {
                    let transition = self.state.advance();
                    self.apply(transition);
                }
                command = self.commands.recv() => {
                    match command {
                        Some(command) => self.handle(command),
                        None => break,
                    }
                }
            }
        }

        self.timer.stop();
        info!(carousel = %self.key, current = self.state.current(), "carousel stopped");
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::Next(reply) => {
                let transition = self.state.next();
                self.apply(transition);
                let _ = reply.send(transition);
            }
            Command::Previous(reply) => {
                let transition = self.state.previous();
                self.apply(transition);
                let _ = reply.send(transition);
            }
            Command::Select(index, reply) => {
                let outcome = self.state.go_to(index);
                match &outcome {
                    Ok(transition) => self.apply(*transition),
                    Err(err) => {
                        warn!(carousel = %self.key, %err, "rejected selection");
                    }
                }
                let _ = reply.send(outcome);
            }
            Command::StartAutoAdvance(period, reply) => {
                let period = match period {
                    Some(period) if period.is_zero() => None,
                    Some(period) => Some(period),
                    None => self.state.config().auto_advance(),
                };
                match period {
                    Some(period) => self.timer.start(period),
                    None => self.timer.stop(),
                }
                self.publish();
                let _ = reply.send(period);
            }
            Command::StopAutoAdvance(reply) => {
                self.timer.stop();
                self.publish();
                let _ = reply.send(());
            }
            Command::Snapshot(reply) => {
                let _ = reply.send(self.snapshot());
            }
        }
    }

    /// Render and schedule the lock release after an accepted move.
    /// Ignored transitions leave the surface and the deadline untouched.
    fn apply(&mut self, transition: Transition) {
        if !transition.is_moved() {
            return;
        }
        if let Some(lock) = self.state.lock_duration() {
            self.release.as_mut().reset(Instant::now() + lock);
            self.releasing = true;
        }
        self.render();
        self.publish();
    }

    fn render(&mut self) {
        let frame = self.state.frame();
        self.surface.render(self.state.items(), &frame);
        self.surface.indicators(&self.state.indicators());
    }

    fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            key: self.key.clone(),
            current: self.state.current(),
            positions: self.state.positions(),
            phase: self.state.phase(),
            auto_advance: self.timer.period(),
        }
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.snapshot());
    }
}
