//! The thread-safe context with transparent per-thread overlays.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::thread::{self, ThreadId};

use microfmt_render::TemplateValue;
use once_cell::sync::OnceCell;

use super::{Context, Formatter};

/// The process-wide owner (writer-tier) thread, decided exactly once.
///
/// Lazily inferred on the first write-routing decision unless a thread
/// claims it explicitly through [`designate_owner_thread`]. `OnceCell` gives
/// the compute-exactly-once guarantee a double-checked lock would.
static OWNER_THREAD: OnceCell<ThreadId> = OnceCell::new();

/// Monotonic ids so overlay entries can never alias across context
/// instances, even after one is dropped.
static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(0);

thread_local! {
    /// This thread's overlays, one map per shared-context instance.
    static OVERLAYS: RefCell<HashMap<u64, HashMap<String, String>>> =
        RefCell::new(HashMap::new());
}

/// Pins the current thread as the process-wide owner thread.
///
/// The owner thread's variable writes land in every shared context's shared
/// tier; all other threads write private overlays. Without an explicit call
/// the role goes to whichever thread first writes to any [`SharedContext`],
/// which can surprise a process whose first write happens on a worker.
///
/// Returns `true` if the call claimed the role, `false` if it was already
/// decided (by an earlier call or by lazy inference).
pub fn designate_owner_thread() -> bool {
    OWNER_THREAD.set(thread::current().id()).is_ok()
}

fn is_owner_thread() -> bool {
    let current = thread::current().id();
    *OWNER_THREAD.get_or_init(|| current) == current
}

/// A thread-safe context with two storage tiers.
///
/// - The **shared tier** (variables + formatters) lives behind a mutex and
///   is what every thread reads on an overlay miss.
/// - The **overlay tier** is a per-thread, per-instance variable map in
///   thread-local storage, touched without any lock.
///
/// Variable writes route by thread identity: the process-wide owner thread
/// (see [`designate_owner_thread`]) writes the shared tier, every other
/// thread writes its own overlay. Reads always check the calling thread's
/// overlay first. The net effect for worker threads is "global defaults,
/// locally overridable": their writes are invisible to every other thread,
/// and nothing is ever merged back.
///
/// Formatters are process-wide per context: registration, lookup, and
/// invocation always go through the shared lock, whatever the thread.
///
/// # Example
///
/// ```rust
/// use microfmt::{Context, SharedContext};
/// use std::sync::Arc;
/// use std::thread;
///
/// microfmt::designate_owner_thread();
/// let ctx = Arc::new(SharedContext::new());
/// ctx.set_var("app", "demo");
/// ctx.set_var("level", "INFO");
///
/// let worker = {
///     let ctx = Arc::clone(&ctx);
///     thread::spawn(move || {
///         // Workers see the shared defaults...
///         assert_eq!(ctx.format("{app} [{level}]", &[]), "demo [INFO]");
///         // ...and can override them privately.
///         ctx.set_var("level", "DEBUG");
///         ctx.format("{app} [{level}]", &[])
///     })
/// };
/// assert_eq!(worker.join().unwrap(), "demo [DEBUG]");
///
/// // The worker's override never reached the shared tier.
/// assert_eq!(ctx.format("{app} [{level}]", &[]), "demo [INFO]");
/// ```
pub struct SharedContext {
    id: u64,
    state: Mutex<SharedState>,
}

#[derive(Default)]
struct SharedState {
    variables: HashMap<String, String>,
    formatters: HashMap<TypeId, Formatter>,
}

impl SharedContext {
    /// Creates an empty shared context.
    pub fn new() -> Self {
        Self {
            id: NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed),
            state: Mutex::new(SharedState::default()),
        }
    }

    /// Stores a variable as text.
    ///
    /// On the owner thread this writes the shared tier under the lock; on
    /// any other thread it writes that thread's private overlay, lock-free.
    pub fn set_var(&self, name: impl Into<String>, value: impl Into<String>) {
        if is_owner_thread() {
            self.state
                .lock()
                .unwrap()
                .variables
                .insert(name.into(), value.into());
        } else {
            OVERLAYS.with(|overlays| {
                overlays
                    .borrow_mut()
                    .entry(self.id)
                    .or_default()
                    .insert(name.into(), value.into());
            });
        }
    }

    /// Stores any template value as a variable, stringifying through a
    /// registered custom formatter first, else its default text.
    pub fn set_value(&self, name: impl Into<String>, value: &dyn TemplateValue) {
        let text = self
            .custom_text(value)
            .unwrap_or_else(|| value.default_text());
        self.set_var(name, text);
    }

    /// Removes a variable from the calling thread's write tier.
    ///
    /// A worker thread clearing a name only clears its own overlay entry; a
    /// shared-tier value with the same name becomes visible again.
    pub fn clear_var(&self, name: &str) {
        if is_owner_thread() {
            self.state.lock().unwrap().variables.remove(name);
        } else {
            OVERLAYS.with(|overlays| {
                if let Some(overlay) = overlays.borrow_mut().get_mut(&self.id) {
                    overlay.remove(name);
                }
            });
        }
    }

    /// Registers a custom formatter for `T` in the shared tier, replacing
    /// any previous one. Formatters are visible to every thread.
    pub fn set_formatter<T: 'static>(
        &self,
        formatter: impl Fn(&T) -> String + Send + Sync + 'static,
    ) {
        self.state.lock().unwrap().formatters.insert(
            TypeId::of::<T>(),
            Box::new(move |value: &dyn Any| {
                value.downcast_ref::<T>().map(&formatter).unwrap_or_default()
            }),
        );
    }

    /// Removes the custom formatter for `T`, if any.
    pub fn clear_formatter<T: 'static>(&self) {
        self.state.lock().unwrap().formatters.remove(&TypeId::of::<T>());
    }

    /// True if a custom formatter is registered for `T`.
    pub fn has_formatter<T: 'static>(&self) -> bool {
        self.state
            .lock()
            .unwrap()
            .formatters
            .contains_key(&TypeId::of::<T>())
    }

    fn overlay_get(&self, name: &str) -> Option<String> {
        OVERLAYS.with(|overlays| {
            overlays
                .borrow()
                .get(&self.id)
                .and_then(|overlay| overlay.get(name).cloned())
        })
    }

    fn overlay_contains(&self, name: &str) -> bool {
        OVERLAYS.with(|overlays| {
            overlays
                .borrow()
                .get(&self.id)
                .is_some_and(|overlay| overlay.contains_key(name))
        })
    }
}

impl Context for SharedContext {
    fn has_var(&self, name: &str) -> bool {
        // Overlay first, lock-free; shared tier only on a miss.
        self.overlay_contains(name)
            || self.state.lock().unwrap().variables.contains_key(name)
    }

    fn find_var(&self, name: &str) -> Option<String> {
        self.overlay_get(name)
            .or_else(|| self.state.lock().unwrap().variables.get(name).cloned())
    }

    fn custom_text(&self, value: &dyn TemplateValue) -> Option<String> {
        let any = value.as_any()?;
        let state = self.state.lock().unwrap();
        state.formatters.get(&any.type_id()).map(|f| f(any))
    }
}

impl Default for SharedContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SharedContext {
    fn drop(&mut self) {
        // Only the dropping thread's overlay is reachable; entries on other
        // threads are reclaimed when those threads exit. Ids are never
        // reused, so a stale entry cannot alias a future context.
        let _ = OVERLAYS.try_with(|overlays| {
            overlays.borrow_mut().remove(&self.id);
        });
    }
}

impl fmt::Debug for SharedContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedContext").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    // Owner-thread routing depends on which test thread touched a shared
    // context first, so unit tests stick to thread-agnostic behavior; the
    // owner/overlay semantics live in the `shared_overlay` integration test,
    // which owns its whole process.
    use super::*;

    #[test]
    fn test_writes_are_visible_to_the_writing_thread() {
        let ctx = SharedContext::new();
        ctx.set_var("temp", "value");
        assert!(ctx.has_var("temp"));
        assert_eq!(ctx.find_var("temp").as_deref(), Some("value"));
        assert_eq!(ctx.format("Temp: {temp}", &[]), "Temp: value");
    }

    #[test]
    fn test_clear_var_round_trip() {
        let ctx = SharedContext::new();
        ctx.set_var("gone", "soon");
        assert!(ctx.has_var("gone"));
        ctx.clear_var("gone");
        assert!(!ctx.has_var("gone"));
    }

    #[test]
    fn test_instances_are_independent() {
        let a = SharedContext::new();
        let b = SharedContext::new();
        a.set_var("only_a", "1");
        b.set_var("only_b", "2");
        assert!(a.has_var("only_a"));
        assert!(!a.has_var("only_b"));
        assert!(b.has_var("only_b"));
        assert!(!b.has_var("only_a"));
    }

    #[test]
    fn test_formatters_cross_threads() {
        let ctx = std::sync::Arc::new(SharedContext::new());
        ctx.set_formatter::<bool>(|b| if *b { "ON".into() } else { "OFF".into() });

        let handle = {
            let ctx = std::sync::Arc::clone(&ctx);
            thread::spawn(move || ctx.format("{0}", &[&true]))
        };
        assert_eq!(handle.join().unwrap(), "ON");
        assert_eq!(ctx.format("{0}", &[&false]), "OFF");
    }

    #[test]
    fn test_set_value_honors_formatter() {
        let ctx = SharedContext::new();
        ctx.set_formatter::<i32>(|n| format!("#{n}"));
        ctx.set_value("id", &7);
        assert_eq!(ctx.find_var("id").as_deref(), Some("#7"));
    }

    #[test]
    fn test_formatter_lifecycle() {
        let ctx = SharedContext::new();
        assert!(!ctx.has_formatter::<char>());
        ctx.set_formatter::<char>(|c| format!("[{c}]"));
        assert!(ctx.has_formatter::<char>());
        ctx.clear_formatter::<char>();
        assert!(!ctx.has_formatter::<char>());
    }
}
