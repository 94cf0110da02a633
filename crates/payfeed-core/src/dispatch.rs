//! Delivery of load results onto a designated callback context.
//!
//! Underlying capability calls complete on whatever context awaited them; the
//! final value handed to a display-facing caller must arrive on the one
//! UI-equivalent context. [`UiLoop`] is that context: a thread-affine job
//! queue pumped by its owning thread. The matching [`UiContext`] handle hops
//! jobs over — idempotently: a dispatch from the target thread itself runs
//! inline, so a synchronously re-entrant completion cannot deadlock waiting
//! on its own pump.

use std::marker::PhantomData;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::{self, ThreadId};

use crate::service::{ItemsService, LoadResult};

type Job = Box<dyn FnOnce() + Send>;

/// Job pump owned by the UI-equivalent thread.
///
/// Not `Send`: jobs must run on the thread that called [`UiLoop::attach`].
pub struct UiLoop {
    receiver: Receiver<Job>,
    _not_send: PhantomData<*const ()>,
}

/// Cloneable handle for marshaling jobs onto the attached thread.
#[derive(Clone)]
pub struct UiContext {
    sender: Sender<Job>,
    thread: ThreadId,
}

impl UiLoop {
    /// Binds a loop to the current thread and returns it with its handle.
    pub fn attach() -> (Self, UiContext) {
        let (sender, receiver) = channel();
        let context = UiContext {
            sender,
            thread: thread::current().id(),
        };
        (
            Self {
                receiver,
                _not_send: PhantomData,
            },
            context,
        )
    }

    /// Runs every job queued so far, then returns.
    pub fn run_pending(&self) {
        while let Ok(job) = self.receiver.try_recv() {
            job();
        }
    }

    /// Runs jobs until every [`UiContext`] handle has been dropped.
    pub fn run(&self) {
        while let Ok(job) = self.receiver.recv() {
            job();
        }
    }
}

impl UiContext {
    /// True when the caller is already on the attached thread.
    pub fn is_current(&self) -> bool {
        thread::current().id() == self.thread
    }

    /// Runs `job` on the attached thread.
    ///
    /// Already there: the job runs inline, no redundant hop. Otherwise it is
    /// queued for the pump; if the loop is gone the job is dropped, matching
    /// the layer's "caller stopped caring" stance on late results.
    pub fn dispatch(&self, job: impl FnOnce() + Send + 'static) {
        if self.is_current() {
            job();
        } else if self.sender.send(Box::new(job)).is_err() {
            tracing::debug!("ui context gone, dropping dispatched job");
        }
    }
}

/// Awaits a composed service and delivers the outcome to `completion` on the
/// UI context. The service's own side effects have already completed by the
/// time the hop happens.
pub async fn deliver_items(
    service: &dyn ItemsService,
    ui: &UiContext,
    completion: impl FnOnce(LoadResult) + Send + 'static,
) {
    let result = service.load_items().await;
    ui.dispatch(move || completion(result));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::LoadError;
    use crate::testing::ScriptedService;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    #[test]
    fn dispatch_from_the_attached_thread_runs_inline() {
        let (ui_loop, context) = UiLoop::attach();
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);

        context.dispatch(move || flag.store(true, Ordering::SeqCst));

        // Never pumped: inline execution is the only way the flag is set.
        assert!(ran.load(Ordering::SeqCst));
        drop(ui_loop);
    }

    #[test]
    fn dispatch_from_a_foreign_thread_runs_on_the_pump() {
        let (ui_loop, context) = UiLoop::attach();
        let observed = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&observed);

        let worker = thread::spawn(move || {
            context.dispatch(move || {
                *slot.lock().unwrap() = Some(thread::current().id());
            });
        });
        worker.join().unwrap();

        assert!(observed.lock().unwrap().is_none());
        ui_loop.run_pending();
        assert_eq!(*observed.lock().unwrap(), Some(thread::current().id()));
    }

    #[test]
    fn deliver_items_marshals_the_completion_onto_the_ui_thread() {
        let (ui_loop, context) = UiLoop::attach();
        let ui_thread = thread::current().id();
        let outcome = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&outcome);

        let worker = thread::spawn(move || {
            let service = ScriptedService::always(Err(LoadError::new("offline")));
            let runtime = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();
            runtime.block_on(deliver_items(service.as_ref(), &context, move |result| {
                *slot.lock().unwrap() = Some((thread::current().id(), result));
            }));
        });

        let deadline = Instant::now() + Duration::from_secs(5);
        while outcome.lock().unwrap().is_none() {
            assert!(Instant::now() < deadline, "completion never arrived");
            ui_loop.run_pending();
            thread::sleep(Duration::from_millis(1));
        }
        worker.join().unwrap();

        let (delivered_on, result) = outcome.lock().unwrap().take().unwrap();
        assert_eq!(delivered_on, ui_thread);
        assert_eq!(result.unwrap_err(), LoadError::new("offline"));
    }
}
