//! Helpers for building the raw pointer arguments OpenGL commands take.
use libc::c_void;

use std::ffi::CStr;

/// Strings packed for commands like `glShaderSource`, which take an array of string pointers and
/// an array of lengths. Each string is also NUL-terminated.
#[derive(Debug)]
pub struct Strs {
    /// Storage `ptrs` points into
    _bytes: Vec<u8>,
    ptrs: Vec<*mut u8>,
    lens: Vec<i32>,
}

impl Strs {
    pub fn new<I, S>(strs: I) -> Strs
        where I: IntoIterator<Item = S>,
              S: AsRef<str>
    {
        let strs: Vec<S> = strs.into_iter().collect();
        let total = strs.iter().map(|s| s.as_ref().len() + 1).sum();

        let mut bytes = Vec::with_capacity(total);
        let mut offsets = Vec::with_capacity(strs.len());
        let mut lens = Vec::with_capacity(strs.len());
        for s in &strs {
            let s = s.as_ref();
            offsets.push(bytes.len());
            lens.push(s.len() as i32);
            bytes.extend_from_slice(s.as_bytes());
            bytes.push(0);
        }

        // `bytes` never reallocates after this point, so the pointers stay valid
        let base = bytes.as_mut_ptr();
        let ptrs = offsets.into_iter().map(|o| unsafe { base.add(o) }).collect();

        Strs { _bytes: bytes, ptrs, lens }
    }

    /// The number of strings, as the `count` argument.
    pub fn count(&self) -> i32 {
        self.lens.len() as i32
    }

    /// The array of string pointers. Valid as long as `self` is.
    pub fn ptrs(&self) -> *mut *mut u8 {
        self.ptrs.as_ptr() as *mut *mut u8
    }

    /// The array of lengths, excluding the terminators.
    pub fn lens(&self) -> *mut i32 {
        self.lens.as_ptr() as *mut i32
    }
}

/// A pointer to a NUL-terminated string, for parameters such as `glGetUniformLocation`'s `name`.
pub fn str_ptr(s: &CStr) -> *mut u8 {
    s.as_ptr() as *mut u8
}

/// The address of a slice's first element.
pub fn ptr<T>(data: &[T]) -> *mut c_void {
    data.as_ptr() as *mut c_void
}

pub fn ptr_mut<T>(data: &mut [T]) -> *mut c_void {
    data.as_mut_ptr() as *mut c_void
}

/// A byte offset into a bound buffer, spelled as the pointer `glVertexAttribPointer` and friends
/// expect.
pub fn offset(offset: usize) -> *mut c_void {
    offset as *mut c_void
}
