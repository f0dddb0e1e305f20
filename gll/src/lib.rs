//! Runtime support for OpenGL bindings produced by `gll_generator`.
//!
//! Generated code reaches this crate through the path configured in the generator (`::gll` by
//! default). It needs [`libc`] for C type spellings, [`unloaded_function_panic`] for calls through
//! null addresses, the [`Binding`] trait every binding instance implements, and the [`debug`]
//! module that routes driver debug messages to Rust closures. [`conv`] has helpers for building
//! the raw arguments some commands take.

pub use libc;

pub mod conv;
pub mod debug;

/// Called by generated code when a command whose address was never resolved is invoked.
#[cold]
#[inline(never)]
pub fn unloaded_function_panic(name: &str) -> ! {
    panic!("Attempted to run unloaded OpenGL function {}", name)
}

/// Implemented by every generated binding instance.
pub trait Binding {
    #[doc(hidden)]
    fn debug_state(&self) -> &debug::DebugState;

    /// Stop routing debug messages to the callback installed on this instance, if any. The slot is
    /// also released when the instance is dropped.
    fn release_debug_callback(&self) {
        self.debug_state().release()
    }
}
