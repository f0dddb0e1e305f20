//! Routes `glDebugMessageCallback` messages to Rust closures.
//!
//! The driver calls back through a plain C function pointer with a single word of user data, so
//! closures can't be handed to it directly. Each binding instance instead claims a numbered slot in
//! a process-wide [`DebugRegistry`] and passes the slot number as the user data; the registered
//! entry point, [`gll_debug_proc`], looks the slot up and calls whatever closure is in it.
use libc::{c_char, c_void};
use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};

use std::borrow::Cow;
use std::ffi::CStr;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::{fmt, mem, slice};

/// Receives `(source, type, id, severity, message)` for every debug message.
pub type DebugCallback = Box<dyn Fn(u32, u32, u32, u32, &str) + Send + Sync>;

/// `GLDEBUGPROC`
pub type RawDebugProc = unsafe extern "system" fn(u32, u32, u32, u32, i32, *const c_char, *const c_void);
type RawDebugMessageCallback = unsafe extern "system" fn(Option<RawDebugProc>, *const c_void);

struct DebugHandle {
    callback: RwLock<Arc<DebugCallback>>,
}

#[derive(Default)]
struct Slots {
    handles: Vec<Option<Arc<DebugHandle>>>,
    /// Released slot numbers, reused last-in first-out
    free: Vec<usize>,
}

/// A table of debug callbacks indexed by small integers.
pub struct DebugRegistry {
    slots: RwLock<Slots>,
}

static GLOBAL: Lazy<DebugRegistry> = Lazy::new(DebugRegistry::new);

impl DebugRegistry {
    pub fn new() -> DebugRegistry {
        DebugRegistry {
            slots: RwLock::new(Slots::default()),
        }
    }

    /// The registry [`gll_debug_proc`] dispatches through.
    pub fn global() -> &'static DebugRegistry {
        &GLOBAL
    }

    /// Store `callback` in a free slot, or a new one if none is free. The slot is released when the
    /// returned guard is dropped.
    pub fn register(&self, callback: DebugCallback) -> DebugSlot<'_> {
        let handle = Arc::new(DebugHandle {
            callback: RwLock::new(Arc::new(callback)),
        });

        let mut guard = self.slots.write();
        let slots = &mut *guard;
        let id = match slots.free.pop() {
            Some(id) => {
                slots.handles[id] = Some(handle);
                id
            }
            None => {
                slots.handles.push(Some(handle));
                slots.handles.len() - 1
            }
        };
        log::trace!("registered debug callback in slot {}", id);

        DebugSlot { registry: self, id }
    }

    fn release(&self, id: usize) {
        let mut guard = self.slots.write();
        let slots = &mut *guard;
        if let Some(handle) = slots.handles.get_mut(id) {
            if handle.take().is_some() {
                slots.free.push(id);
                log::trace!("released debug callback slot {}", id);
            }
        }
    }

    fn lookup(&self, id: usize) -> Option<Arc<DebugHandle>> {
        self.slots.read().handles.get(id).and_then(|h| h.clone())
    }

    /// Call the closure in slot `slot` with one message. Returns false if the slot is empty.
    pub fn dispatch(&self, slot: usize, source: u32, type_: u32, id: u32, severity: u32, message: &str) -> bool {
        // No lock is held while the closure runs, so it may replace itself or dispatch again
        match self.lookup(slot) {
            Some(handle) => {
                let callback = handle.callback.read().clone();
                (**callback)(source, type_, id, severity, message);
                true
            }
            None => {
                log::trace!("dropping debug message for empty slot {}: {}", slot, message);
                false
            }
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        let slots = self.slots.read();
        slots.handles.len() - slots.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DebugRegistry {
    fn default() -> DebugRegistry {
        DebugRegistry::new()
    }
}

impl fmt::Debug for DebugRegistry {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("DebugRegistry").field("len", &self.len()).finish()
    }
}

/// An occupied slot. Dropping it frees the slot for reuse.
pub struct DebugSlot<'r> {
    registry: &'r DebugRegistry,
    id: usize,
}

impl<'r> DebugSlot<'r> {
    pub fn id(&self) -> usize {
        self.id
    }

    /// Swap the slot's closure without changing its number.
    pub fn replace(&self, callback: DebugCallback) {
        if let Some(handle) = self.registry.lookup(self.id) {
            *handle.callback.write() = Arc::new(callback);
        }
    }
}

impl<'r> Drop for DebugSlot<'r> {
    fn drop(&mut self) {
        self.registry.release(self.id);
    }
}

impl<'r> fmt::Debug for DebugSlot<'r> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_tuple("DebugSlot").field(&self.id).finish()
    }
}

/// The debug callback of one binding instance.
#[derive(Debug, Default)]
pub struct DebugState {
    slot: Mutex<Option<DebugSlot<'static>>>,
}

impl DebugState {
    /// Route debug messages to `callback`, calling the `glDebugMessageCallback` variant at `func`.
    ///
    /// The first call claims a slot in the global registry; later calls replace the closure in the
    /// same slot.
    ///
    /// # Safety
    /// `func` has to be null or the address of `name`, and a context owning it has to be current.
    pub unsafe fn install(&self, name: &str, func: *const c_void, callback: DebugCallback) {
        let func = match mem::transmute::<*const c_void, Option<RawDebugMessageCallback>>(func) {
            Some(func) => func,
            None => crate::unloaded_function_panic(name),
        };

        let id = {
            let mut slot = self.slot.lock();
            match *slot {
                Some(ref slot) => {
                    slot.replace(callback);
                    slot.id()
                }
                None => {
                    let new = DebugRegistry::global().register(callback);
                    let id = new.id();
                    *slot = Some(new);
                    id
                }
            }
        };

        func(Some(gll_debug_proc), id as *const c_void);
    }

    /// Free the slot. Messages that still arrive for it are dropped.
    pub fn release(&self) {
        self.slot.lock().take();
    }

    pub fn slot_id(&self) -> Option<usize> {
        self.slot.lock().as_ref().map(DebugSlot::id)
    }
}

unsafe fn decode_message<'m>(length: i32, message: *const c_char) -> Cow<'m, str> {
    if message.is_null() {
        Cow::Borrowed("")
    } else if length < 0 {
        CStr::from_ptr(message).to_string_lossy()
    } else {
        String::from_utf8_lossy(slice::from_raw_parts(message as *const u8, length as usize))
    }
}

/// The `GLDEBUGPROC` handed to the driver. `user_param` is the slot number.
///
/// # Safety
/// `message` has to be null or valid for `length` bytes, or NUL-terminated if `length` is negative.
pub unsafe extern "system" fn gll_debug_proc(
    source: u32,
    type_: u32,
    id: u32,
    severity: u32,
    length: i32,
    message: *const c_char,
    user_param: *const c_void,
) {
    let message = decode_message(length, message);
    let slot = user_param as usize;
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        DebugRegistry::global().dispatch(slot, source, type_, id, severity, &message)
    }));
    if result.is_err() {
        log::error!("debug callback in slot {} panicked", slot);
    }
}
