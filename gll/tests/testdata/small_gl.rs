// Code generated by `gll_generator --file gll_generator/tests/testdata/small_gl.xml --output gll/tests/testdata/small_gl.rs`; DO NOT EDIT.

#[allow(unused_imports)]
use ::gll::libc::{self, c_void};
#[allow(unused_imports)]
use ::gll::debug::DebugCallback;

#[allow(dead_code, non_snake_case, non_camel_case_types, unsafe_op_in_unsafe_fn, clippy::too_many_arguments)]
pub mod ffi {
    #[allow(unused_imports)]
    use ::gll::libc::{self, c_void};

    #[cfg(target_os = "macos")]
    pub type GLhandleARB = *mut c_void;
    #[cfg(not(target_os = "macos"))]
    pub type GLhandleARB = libc::c_uint;

    #[repr(C)]
    pub struct __GLsync {
        _private: [u8; 0],
    }
    pub type GLsync = *mut __GLsync;

    #[inline]
    pub unsafe fn glFinish(__fp: *const c_void) {
        match std::mem::transmute::<*const c_void, Option<unsafe extern "system" fn()>>(__fp) {
            Some(__f) => __f(),
            None => ::gll::unloaded_function_panic("glFinish"),
        }
    }

    #[inline]
    pub unsafe fn glClear(__fp: *const c_void, mask: u32) {
        match std::mem::transmute::<*const c_void, Option<unsafe extern "system" fn(u32)>>(__fp) {
            Some(__f) => __f(mask),
            None => ::gll::unloaded_function_panic("glClear"),
        }
    }

    #[inline]
    pub unsafe fn glIsEnabled(__fp: *const c_void, cap: u32) -> libc::c_uchar {
        match std::mem::transmute::<*const c_void, Option<unsafe extern "system" fn(u32) -> libc::c_uchar>>(__fp) {
            Some(__f) => __f(cap),
            None => ::gll::unloaded_function_panic("glIsEnabled"),
        }
    }

    #[inline]
    pub unsafe fn glGetString(__fp: *const c_void, name: u32) -> *mut u8 {
        match std::mem::transmute::<*const c_void, Option<unsafe extern "system" fn(u32) -> *mut u8>>(__fp) {
            Some(__f) => __f(name),
            None => ::gll::unloaded_function_panic("glGetString"),
        }
    }

    #[inline]
    pub unsafe fn glGetFloatv(__fp: *const c_void, pname: u32, data: *mut libc::c_float) {
        match std::mem::transmute::<*const c_void, Option<unsafe extern "system" fn(u32, *mut libc::c_float)>>(__fp) {
            Some(__f) => __f(pname, data),
            None => ::gll::unloaded_function_panic("glGetFloatv"),
        }
    }

    #[inline]
    pub unsafe fn glMapBuffer(__fp: *const c_void, target: u32, access: u32) -> *mut c_void {
        match std::mem::transmute::<*const c_void, Option<unsafe extern "system" fn(u32, u32) -> *mut c_void>>(__fp) {
            Some(__f) => __f(target, access),
            None => ::gll::unloaded_function_panic("glMapBuffer"),
        }
    }

    #[inline]
    pub unsafe fn glBufferData(__fp: *const c_void, target: u32, size: libc::ssize_t, data: *mut c_void, usage: u32) {
        match std::mem::transmute::<*const c_void, Option<unsafe extern "system" fn(u32, libc::ssize_t, *mut c_void, u32)>>(__fp) {
            Some(__f) => __f(target, size, data, usage),
            None => ::gll::unloaded_function_panic("glBufferData"),
        }
    }

    #[inline]
    pub unsafe fn glShaderSource(__fp: *const c_void, shader: u32, count: i32, string: *mut *mut u8, length: *mut i32) {
        match std::mem::transmute::<*const c_void, Option<unsafe extern "system" fn(u32, i32, *mut *mut u8, *mut i32)>>(__fp) {
            Some(__f) => __f(shader, count, string, length),
            None => ::gll::unloaded_function_panic("glShaderSource"),
        }
    }

    #[inline]
    pub unsafe fn glGetUniformLocation(__fp: *const c_void, program: u32, name: *mut u8) -> i32 {
        match std::mem::transmute::<*const c_void, Option<unsafe extern "system" fn(u32, *mut u8) -> i32>>(__fp) {
            Some(__f) => __f(program, name),
            None => ::gll::unloaded_function_panic("glGetUniformLocation"),
        }
    }

    #[inline]
    pub unsafe fn glUniformMatrix4fv(__fp: *const c_void, location: i32, count: i32, transpose: libc::c_uchar, value: *mut libc::c_float) {
        match std::mem::transmute::<*const c_void, Option<unsafe extern "system" fn(i32, i32, libc::c_uchar, *mut libc::c_float)>>(__fp) {
            Some(__f) => __f(location, count, transpose, value),
            None => ::gll::unloaded_function_panic("glUniformMatrix4fv"),
        }
    }

    #[inline]
    pub unsafe fn glFenceSync(__fp: *const c_void, condition: u32, flags: u32) -> GLsync {
        match std::mem::transmute::<*const c_void, Option<unsafe extern "system" fn(u32, u32) -> GLsync>>(__fp) {
            Some(__f) => __f(condition, flags),
            None => ::gll::unloaded_function_panic("glFenceSync"),
        }
    }

    #[inline]
    pub unsafe fn glCreateShaderObjectARB(__fp: *const c_void, shaderType: u32) -> GLhandleARB {
        match std::mem::transmute::<*const c_void, Option<unsafe extern "system" fn(u32) -> GLhandleARB>>(__fp) {
            Some(__f) => __f(shaderType),
            None => ::gll::unloaded_function_panic("glCreateShaderObjectARB"),
        }
    }

    #[inline]
    pub unsafe fn glClientAttribDefaultEXT(__fp: *const c_void, mask: u32) {
        match std::mem::transmute::<*const c_void, Option<unsafe extern "system" fn(u32)>>(__fp) {
            Some(__f) => __f(mask),
            None => ::gll::unloaded_function_panic("glClientAttribDefaultEXT"),
        }
    }

    #[inline]
    pub unsafe fn glBindMultiTextureEXT(__fp: *const c_void, texunit: u32, target: u32, texture: u32) {
        match std::mem::transmute::<*const c_void, Option<unsafe extern "system" fn(u32, u32, u32)>>(__fp) {
            Some(__f) => __f(texunit, target, texture),
            None => ::gll::unloaded_function_panic("glBindMultiTextureEXT"),
        }
    }

    #[inline]
    pub unsafe fn glDrawBuffersIndexedEXT(__fp: *const c_void, n: i32, location: *mut u32, indices: *mut i32) {
        match std::mem::transmute::<*const c_void, Option<unsafe extern "system" fn(i32, *mut u32, *mut i32)>>(__fp) {
            Some(__f) => __f(n, location, indices),
            None => ::gll::unloaded_function_panic("glDrawBuffersIndexedEXT"),
        }
    }

}

#[allow(dead_code, non_snake_case, unsafe_op_in_unsafe_fn, clippy::too_many_arguments)]
impl Lib {
    pub unsafe fn finish(&self) {
        ffi::glFinish(self.glFinish)
    }

    pub unsafe fn clear(&self, mask: u32) {
        ffi::glClear(self.glClear, mask as u32)
    }

    pub unsafe fn is_enabled(&self, cap: u32) -> bool {
        ffi::glIsEnabled(self.glIsEnabled, cap as u32) != 0
    }

    pub unsafe fn get_string(&self, name: u32) -> *mut u8 {
        ffi::glGetString(self.glGetString, name as u32) as *mut u8
    }

    pub unsafe fn get_floatv(&self, pname: u32, data: *mut f32) {
        ffi::glGetFloatv(self.glGetFloatv, pname as u32, data as *mut c_void as *mut libc::c_float)
    }

    pub unsafe fn map_buffer(&self, target: u32, access: u32) -> *mut c_void {
        ffi::glMapBuffer(self.glMapBuffer, target as u32, access as u32) as *mut c_void
    }

    pub unsafe fn buffer_data(&self, target: u32, size: isize, data: *mut c_void, usage: u32) {
        ffi::glBufferData(self.glBufferData, target as u32, size as libc::ssize_t, data as *mut c_void as *mut c_void, usage as u32)
    }

    pub unsafe fn shader_source(&self, shader: u32, count: i32, string: *mut *mut u8, length: *mut i32) {
        ffi::glShaderSource(self.glShaderSource, shader as u32, count as i32, string as *mut c_void as *mut *mut u8, length as *mut c_void as *mut i32)
    }

    pub unsafe fn get_uniform_location(&self, program: u32, name: *mut u8) -> i32 {
        ffi::glGetUniformLocation(self.glGetUniformLocation, program as u32, name as *mut c_void as *mut u8) as i32
    }

    pub unsafe fn uniform_matrix4fv(&self, location: i32, count: i32, transpose: bool, value: *mut f32) {
        ffi::glUniformMatrix4fv(self.glUniformMatrix4fv, location as i32, count as i32, transpose as libc::c_uchar, value as *mut c_void as *mut libc::c_float)
    }

    pub unsafe fn fence_sync(&self, condition: u32, flags: u32) -> GLsync {
        ffi::glFenceSync(self.glFenceSync, condition as u32, flags as u32)
    }

    pub unsafe fn create_shader_object_arb(&self, shaderType: u32) -> GLhandleARB {
        ffi::glCreateShaderObjectARB(self.glCreateShaderObjectARB, shaderType as u32)
    }

    pub unsafe fn client_attrib_default_ext(&self, mask: u32) {
        ffi::glClientAttribDefaultEXT(self.glClientAttribDefaultEXT, mask as u32)
    }

    pub unsafe fn bind_multi_texture_ext(&self, texunit: u32, target: u32, texture: u32) {
        ffi::glBindMultiTextureEXT(self.glBindMultiTextureEXT, texunit as u32, target as u32, texture as u32)
    }

    pub unsafe fn draw_buffers_indexed_ext(&self, n: i32, location: *mut u32, indices: *mut i32) {
        ffi::glDrawBuffersIndexedEXT(self.glDrawBuffersIndexedEXT, n as i32, location as *mut c_void as *mut u32, indices as *mut c_void as *mut i32)
    }

    pub unsafe fn debug_message_callback(&self, callback: DebugCallback) {
        self.debug.install("glDebugMessageCallback", self.glDebugMessageCallback, callback)
    }

    pub unsafe fn debug_message_callback_arb(&self, callback: DebugCallback) {
        self.debug.install("glDebugMessageCallbackARB", self.glDebugMessageCallbackARB, callback)
    }

}

#[allow(dead_code, non_snake_case)]
struct Lib {
    debug: ::gll::debug::DebugState,
    glFinish: *const c_void,
    glClear: *const c_void,
    glIsEnabled: *const c_void,
    glGetString: *const c_void,
    glGetFloatv: *const c_void,
    glMapBuffer: *const c_void,
    glBufferData: *const c_void,
    glShaderSource: *const c_void,
    glGetUniformLocation: *const c_void,
    glUniformMatrix4fv: *const c_void,
    glFenceSync: *const c_void,
    glDebugMessageCallback: *const c_void,
    glDebugMessageCallbackARB: *const c_void,
    glCreateShaderObjectARB: *const c_void,
    glClientAttribDefaultEXT: *const c_void,
    glBindMultiTextureEXT: *const c_void,
    glDrawBuffersIndexedEXT: *const c_void,
}

impl Lib {
    fn unloaded() -> Lib {
        Lib {
            debug: Default::default(),
            glFinish: std::ptr::null(),
            glClear: std::ptr::null(),
            glIsEnabled: std::ptr::null(),
            glGetString: std::ptr::null(),
            glGetFloatv: std::ptr::null(),
            glMapBuffer: std::ptr::null(),
            glBufferData: std::ptr::null(),
            glShaderSource: std::ptr::null(),
            glGetUniformLocation: std::ptr::null(),
            glUniformMatrix4fv: std::ptr::null(),
            glFenceSync: std::ptr::null(),
            glDebugMessageCallback: std::ptr::null(),
            glDebugMessageCallbackARB: std::ptr::null(),
            glCreateShaderObjectARB: std::ptr::null(),
            glClientAttribDefaultEXT: std::ptr::null(),
            glBindMultiTextureEXT: std::ptr::null(),
            glDrawBuffersIndexedEXT: std::ptr::null(),
        }
    }
}

impl ::gll::Binding for Lib {
    fn debug_state(&self) -> &::gll::debug::DebugState {
        &self.debug
    }
}

/// OpenGL 1.0
#[allow(non_snake_case, clippy::too_many_arguments)]
pub trait GL100: Extensions {
    unsafe fn clear(&self, mask: u32);
    unsafe fn finish(&self);
    unsafe fn get_floatv(&self, pname: u32, data: *mut f32);
    unsafe fn get_string(&self, name: u32) -> *mut u8;
    unsafe fn is_enabled(&self, cap: u32) -> bool;
}

#[allow(non_snake_case, unsafe_op_in_unsafe_fn, clippy::too_many_arguments)]
impl GL100 for Lib {
    unsafe fn clear(&self, mask: u32) {
        Lib::clear(self, mask)
    }
    unsafe fn finish(&self) {
        Lib::finish(self)
    }
    unsafe fn get_floatv(&self, pname: u32, data: *mut f32) {
        Lib::get_floatv(self, pname, data)
    }
    unsafe fn get_string(&self, name: u32) -> *mut u8 {
        Lib::get_string(self, name)
    }
    unsafe fn is_enabled(&self, cap: u32) -> bool {
        Lib::is_enabled(self, cap)
    }
}

pub fn new_gl100<F: FnMut(&str) -> *const c_void>(mut get_proc_addr: F) -> Box<dyn GL100> {
    Box::new(Lib {
        glClear: get_proc_addr("glClear"),
        glFinish: get_proc_addr("glFinish"),
        glGetFloatv: get_proc_addr("glGetFloatv"),
        glGetString: get_proc_addr("glGetString"),
        glIsEnabled: get_proc_addr("glIsEnabled"),
        glCreateShaderObjectARB: get_proc_addr("glCreateShaderObjectARB"),
        glClientAttribDefaultEXT: get_proc_addr("glClientAttribDefaultEXT"),
        glBindMultiTextureEXT: get_proc_addr("glBindMultiTextureEXT"),
        ..Lib::unloaded()
    })
}

/// OpenGL 1.5
#[allow(non_snake_case, clippy::too_many_arguments)]
pub trait GL150: Extensions {
    unsafe fn buffer_data(&self, target: u32, size: isize, data: *mut c_void, usage: u32);
    unsafe fn clear(&self, mask: u32);
    unsafe fn finish(&self);
    unsafe fn get_floatv(&self, pname: u32, data: *mut f32);
    unsafe fn get_string(&self, name: u32) -> *mut u8;
    unsafe fn is_enabled(&self, cap: u32) -> bool;
    unsafe fn map_buffer(&self, target: u32, access: u32) -> *mut c_void;
}

#[allow(non_snake_case, unsafe_op_in_unsafe_fn, clippy::too_many_arguments)]
impl GL150 for Lib {
    unsafe fn buffer_data(&self, target: u32, size: isize, data: *mut c_void, usage: u32) {
        Lib::buffer_data(self, target, size, data, usage)
    }
    unsafe fn clear(&self, mask: u32) {
        Lib::clear(self, mask)
    }
    unsafe fn finish(&self) {
        Lib::finish(self)
    }
    unsafe fn get_floatv(&self, pname: u32, data: *mut f32) {
        Lib::get_floatv(self, pname, data)
    }
    unsafe fn get_string(&self, name: u32) -> *mut u8 {
        Lib::get_string(self, name)
    }
    unsafe fn is_enabled(&self, cap: u32) -> bool {
        Lib::is_enabled(self, cap)
    }
    unsafe fn map_buffer(&self, target: u32, access: u32) -> *mut c_void {
        Lib::map_buffer(self, target, access)
    }
}

pub fn new_gl150<F: FnMut(&str) -> *const c_void>(mut get_proc_addr: F) -> Box<dyn GL150> {
    Box::new(Lib {
        glBufferData: get_proc_addr("glBufferData"),
        glClear: get_proc_addr("glClear"),
        glFinish: get_proc_addr("glFinish"),
        glGetFloatv: get_proc_addr("glGetFloatv"),
        glGetString: get_proc_addr("glGetString"),
        glIsEnabled: get_proc_addr("glIsEnabled"),
        glMapBuffer: get_proc_addr("glMapBuffer"),
        glCreateShaderObjectARB: get_proc_addr("glCreateShaderObjectARB"),
        glClientAttribDefaultEXT: get_proc_addr("glClientAttribDefaultEXT"),
        glBindMultiTextureEXT: get_proc_addr("glBindMultiTextureEXT"),
        ..Lib::unloaded()
    })
}

/// OpenGL 2.0
#[allow(non_snake_case, clippy::too_many_arguments)]
pub trait GL200: Extensions {
    unsafe fn buffer_data(&self, target: u32, size: isize, data: *mut c_void, usage: u32);
    unsafe fn clear(&self, mask: u32);
    unsafe fn finish(&self);
    unsafe fn get_floatv(&self, pname: u32, data: *mut f32);
    unsafe fn get_string(&self, name: u32) -> *mut u8;
    unsafe fn get_uniform_location(&self, program: u32, name: *mut u8) -> i32;
    unsafe fn is_enabled(&self, cap: u32) -> bool;
    unsafe fn map_buffer(&self, target: u32, access: u32) -> *mut c_void;
    unsafe fn shader_source(&self, shader: u32, count: i32, string: *mut *mut u8, length: *mut i32);
    unsafe fn uniform_matrix4fv(&self, location: i32, count: i32, transpose: bool, value: *mut f32);
}

#[allow(non_snake_case, unsafe_op_in_unsafe_fn, clippy::too_many_arguments)]
impl GL200 for Lib {
    unsafe fn buffer_data(&self, target: u32, size: isize, data: *mut c_void, usage: u32) {
        Lib::buffer_data(self, target, size, data, usage)
    }
    unsafe fn clear(&self, mask: u32) {
        Lib::clear(self, mask)
    }
    unsafe fn finish(&self) {
        Lib::finish(self)
    }
    unsafe fn get_floatv(&self, pname: u32, data: *mut f32) {
        Lib::get_floatv(self, pname, data)
    }
    unsafe fn get_string(&self, name: u32) -> *mut u8 {
        Lib::get_string(self, name)
    }
    unsafe fn get_uniform_location(&self, program: u32, name: *mut u8) -> i32 {
        Lib::get_uniform_location(self, program, name)
    }
    unsafe fn is_enabled(&self, cap: u32) -> bool {
        Lib::is_enabled(self, cap)
    }
    unsafe fn map_buffer(&self, target: u32, access: u32) -> *mut c_void {
        Lib::map_buffer(self, target, access)
    }
    unsafe fn shader_source(&self, shader: u32, count: i32, string: *mut *mut u8, length: *mut i32) {
        Lib::shader_source(self, shader, count, string, length)
    }
    unsafe fn uniform_matrix4fv(&self, location: i32, count: i32, transpose: bool, value: *mut f32) {
        Lib::uniform_matrix4fv(self, location, count, transpose, value)
    }
}

pub fn new_gl200<F: FnMut(&str) -> *const c_void>(mut get_proc_addr: F) -> Box<dyn GL200> {
    Box::new(Lib {
        glBufferData: get_proc_addr("glBufferData"),
        glClear: get_proc_addr("glClear"),
        glFinish: get_proc_addr("glFinish"),
        glGetFloatv: get_proc_addr("glGetFloatv"),
        glGetString: get_proc_addr("glGetString"),
        glGetUniformLocation: get_proc_addr("glGetUniformLocation"),
        glIsEnabled: get_proc_addr("glIsEnabled"),
        glMapBuffer: get_proc_addr("glMapBuffer"),
        glShaderSource: get_proc_addr("glShaderSource"),
        glUniformMatrix4fv: get_proc_addr("glUniformMatrix4fv"),
        glCreateShaderObjectARB: get_proc_addr("glCreateShaderObjectARB"),
        glClientAttribDefaultEXT: get_proc_addr("glClientAttribDefaultEXT"),
        glBindMultiTextureEXT: get_proc_addr("glBindMultiTextureEXT"),
        ..Lib::unloaded()
    })
}

/// OpenGL 3.2
#[allow(non_snake_case, clippy::too_many_arguments)]
pub trait GL320: Extensions {
    unsafe fn buffer_data(&self, target: u32, size: isize, data: *mut c_void, usage: u32);
    unsafe fn clear(&self, mask: u32);
    unsafe fn fence_sync(&self, condition: u32, flags: u32) -> GLsync;
    unsafe fn finish(&self);
    unsafe fn get_floatv(&self, pname: u32, data: *mut f32);
    unsafe fn get_string(&self, name: u32) -> *mut u8;
    unsafe fn get_uniform_location(&self, program: u32, name: *mut u8) -> i32;
    unsafe fn is_enabled(&self, cap: u32) -> bool;
    unsafe fn map_buffer(&self, target: u32, access: u32) -> *mut c_void;
    unsafe fn shader_source(&self, shader: u32, count: i32, string: *mut *mut u8, length: *mut i32);
    unsafe fn uniform_matrix4fv(&self, location: i32, count: i32, transpose: bool, value: *mut f32);
}

#[allow(non_snake_case, unsafe_op_in_unsafe_fn, clippy::too_many_arguments)]
impl GL320 for Lib {
    unsafe fn buffer_data(&self, target: u32, size: isize, data: *mut c_void, usage: u32) {
        Lib::buffer_data(self, target, size, data, usage)
    }
    unsafe fn clear(&self, mask: u32) {
        Lib::clear(self, mask)
    }
    unsafe fn fence_sync(&self, condition: u32, flags: u32) -> GLsync {
        Lib::fence_sync(self, condition, flags)
    }
    unsafe fn finish(&self) {
        Lib::finish(self)
    }
    unsafe fn get_floatv(&self, pname: u32, data: *mut f32) {
        Lib::get_floatv(self, pname, data)
    }
    unsafe fn get_string(&self, name: u32) -> *mut u8 {
        Lib::get_string(self, name)
    }
    unsafe fn get_uniform_location(&self, program: u32, name: *mut u8) -> i32 {
        Lib::get_uniform_location(self, program, name)
    }
    unsafe fn is_enabled(&self, cap: u32) -> bool {
        Lib::is_enabled(self, cap)
    }
    unsafe fn map_buffer(&self, target: u32, access: u32) -> *mut c_void {
        Lib::map_buffer(self, target, access)
    }
    unsafe fn shader_source(&self, shader: u32, count: i32, string: *mut *mut u8, length: *mut i32) {
        Lib::shader_source(self, shader, count, string, length)
    }
    unsafe fn uniform_matrix4fv(&self, location: i32, count: i32, transpose: bool, value: *mut f32) {
        Lib::uniform_matrix4fv(self, location, count, transpose, value)
    }
}

pub fn new_gl320<F: FnMut(&str) -> *const c_void>(mut get_proc_addr: F) -> Box<dyn GL320> {
    Box::new(Lib {
        glBufferData: get_proc_addr("glBufferData"),
        glClear: get_proc_addr("glClear"),
        glFenceSync: get_proc_addr("glFenceSync"),
        glFinish: get_proc_addr("glFinish"),
        glGetFloatv: get_proc_addr("glGetFloatv"),
        glGetString: get_proc_addr("glGetString"),
        glGetUniformLocation: get_proc_addr("glGetUniformLocation"),
        glIsEnabled: get_proc_addr("glIsEnabled"),
        glMapBuffer: get_proc_addr("glMapBuffer"),
        glShaderSource: get_proc_addr("glShaderSource"),
        glUniformMatrix4fv: get_proc_addr("glUniformMatrix4fv"),
        glCreateShaderObjectARB: get_proc_addr("glCreateShaderObjectARB"),
        glClientAttribDefaultEXT: get_proc_addr("glClientAttribDefaultEXT"),
        glBindMultiTextureEXT: get_proc_addr("glBindMultiTextureEXT"),
        ..Lib::unloaded()
    })
}

/// OpenGL 4.3
#[allow(non_snake_case, clippy::too_many_arguments)]
pub trait GL430: Extensions {
    unsafe fn buffer_data(&self, target: u32, size: isize, data: *mut c_void, usage: u32);
    unsafe fn clear(&self, mask: u32);
    unsafe fn debug_message_callback(&self, callback: DebugCallback);
    unsafe fn fence_sync(&self, condition: u32, flags: u32) -> GLsync;
    unsafe fn finish(&self);
    unsafe fn get_floatv(&self, pname: u32, data: *mut f32);
    unsafe fn get_string(&self, name: u32) -> *mut u8;
    unsafe fn get_uniform_location(&self, program: u32, name: *mut u8) -> i32;
    unsafe fn is_enabled(&self, cap: u32) -> bool;
    unsafe fn map_buffer(&self, target: u32, access: u32) -> *mut c_void;
    unsafe fn shader_source(&self, shader: u32, count: i32, string: *mut *mut u8, length: *mut i32);
    unsafe fn uniform_matrix4fv(&self, location: i32, count: i32, transpose: bool, value: *mut f32);
}

#[allow(non_snake_case, unsafe_op_in_unsafe_fn, clippy::too_many_arguments)]
impl GL430 for Lib {
    unsafe fn buffer_data(&self, target: u32, size: isize, data: *mut c_void, usage: u32) {
        Lib::buffer_data(self, target, size, data, usage)
    }
    unsafe fn clear(&self, mask: u32) {
        Lib::clear(self, mask)
    }
    unsafe fn debug_message_callback(&self, callback: DebugCallback) {
        Lib::debug_message_callback(self, callback)
    }
    unsafe fn fence_sync(&self, condition: u32, flags: u32) -> GLsync {
        Lib::fence_sync(self, condition, flags)
    }
    unsafe fn finish(&self) {
        Lib::finish(self)
    }
    unsafe fn get_floatv(&self, pname: u32, data: *mut f32) {
        Lib::get_floatv(self, pname, data)
    }
    unsafe fn get_string(&self, name: u32) -> *mut u8 {
        Lib::get_string(self, name)
    }
    unsafe fn get_uniform_location(&self, program: u32, name: *mut u8) -> i32 {
        Lib::get_uniform_location(self, program, name)
    }
    unsafe fn is_enabled(&self, cap: u32) -> bool {
        Lib::is_enabled(self, cap)
    }
    unsafe fn map_buffer(&self, target: u32, access: u32) -> *mut c_void {
        Lib::map_buffer(self, target, access)
    }
    unsafe fn shader_source(&self, shader: u32, count: i32, string: *mut *mut u8, length: *mut i32) {
        Lib::shader_source(self, shader, count, string, length)
    }
    unsafe fn uniform_matrix4fv(&self, location: i32, count: i32, transpose: bool, value: *mut f32) {
        Lib::uniform_matrix4fv(self, location, count, transpose, value)
    }
}

pub fn new_gl430<F: FnMut(&str) -> *const c_void>(mut get_proc_addr: F) -> Box<dyn GL430> {
    Box::new(Lib {
        glBufferData: get_proc_addr("glBufferData"),
        glClear: get_proc_addr("glClear"),
        glDebugMessageCallback: get_proc_addr("glDebugMessageCallback"),
        glFenceSync: get_proc_addr("glFenceSync"),
        glFinish: get_proc_addr("glFinish"),
        glGetFloatv: get_proc_addr("glGetFloatv"),
        glGetString: get_proc_addr("glGetString"),
        glGetUniformLocation: get_proc_addr("glGetUniformLocation"),
        glIsEnabled: get_proc_addr("glIsEnabled"),
        glMapBuffer: get_proc_addr("glMapBuffer"),
        glShaderSource: get_proc_addr("glShaderSource"),
        glUniformMatrix4fv: get_proc_addr("glUniformMatrix4fv"),
        glCreateShaderObjectARB: get_proc_addr("glCreateShaderObjectARB"),
        glClientAttribDefaultEXT: get_proc_addr("glClientAttribDefaultEXT"),
        glBindMultiTextureEXT: get_proc_addr("glBindMultiTextureEXT"),
        ..Lib::unloaded()
    })
}

#[allow(non_snake_case, clippy::too_many_arguments)]
pub trait Extensions: ::gll::Binding {
    unsafe fn create_shader_object_arb(&self, shaderType: u32) -> GLhandleARB;
    unsafe fn client_attrib_default_ext(&self, mask: u32);
    unsafe fn bind_multi_texture_ext(&self, texunit: u32, target: u32, texture: u32);
}

#[allow(non_snake_case, unsafe_op_in_unsafe_fn, clippy::too_many_arguments)]
impl Extensions for Lib {
    unsafe fn create_shader_object_arb(&self, shaderType: u32) -> GLhandleARB {
        Lib::create_shader_object_arb(self, shaderType)
    }
    unsafe fn client_attrib_default_ext(&self, mask: u32) {
        Lib::client_attrib_default_ext(self, mask)
    }
    unsafe fn bind_multi_texture_ext(&self, texunit: u32, target: u32, texture: u32) {
        Lib::bind_multi_texture_ext(self, texunit, target, texture)
    }
}

pub type GLhandleARB = ffi::GLhandleARB;
pub type GLsync = ffi::GLsync;

pub const CURRENT_BIT: u32 = 0x00000001;
pub const COLOR_BUFFER_BIT: u32 = 0x00004000;
pub const GL_2D: u32 = 0x0600;
pub const BLEND: u32 = 0x0BE2;
pub const EXTENSIONS: u32 = 0x1F03;
pub const FRAGMENT_SHADER: u32 = 0x8B30;
pub const INVALID_INDEX: u32 = 0xFFFFFFFF;
pub const TIMEOUT_IGNORED: u64 = 0xFFFFFFFFFFFFFFFF;
pub const ALL_ATTRIB_BITS: u32 = 0xFFFFFFFF;
pub const UNKNOWN_NEGATIVE_EXT: i32 = -1;
