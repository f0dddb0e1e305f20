#[allow(dead_code, non_snake_case, non_camel_case_types, unsafe_op_in_unsafe_fn, clippy::too_many_arguments)]
pub mod ffi {{
    #[allow(unused_imports)]
    use {0}::libc::{{self, c_void}};

    #[cfg(target_os = "macos")]
    pub type GLhandleARB = *mut c_void;
    #[cfg(not(target_os = "macos"))]
    pub type GLhandleARB = libc::c_uint;

    #[repr(C)]
    pub struct __GLsync {{
        _private: [u8; 0],
    }}
    pub type GLsync = *mut __GLsync;
