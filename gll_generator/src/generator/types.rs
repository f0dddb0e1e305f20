//! Maps registry type names to the spellings used on either side of the FFI boundary.
//!
//! The *foreign* spelling is what the trampolines in the generated `ffi` module declare, i.e. the C
//! ABI type. The *host* spelling is what the wrapper methods expose. They differ for booleans
//! (`u8` vs `bool`), for platform-sized and floating-point types (`libc` names vs Rust primitives),
//! and in how they count indirection through opaque pointers.
use crate::error::{Error, Result};
use crate::registry::Type;

use std::collections::HashMap;
use std::fmt;

/// `void *` as spelled on the host side.
pub const OPAQUE_POINTER: &str = "*mut c_void";
const C_VOID: &str = "c_void";

/// What kind of value a spelling's base type is. Decides which conversion the wrapper emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repr {
    /// `void`. With no pointer markers this is "no value".
    Void,
    /// A number that converts with `as`
    Value,
    /// `GLboolean`
    Bool,
    /// The host's opaque pointer
    Pointer,
    /// `GLhandleARB` and `GLsync`; identical on both sides
    Handle,
    /// The debug callback closure
    Callback,
}

/// A base type plus the number of `*mut` markers in front of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spelling {
    pub base: &'static str,
    pub depth: usize,
    pub repr: Repr,
}

impl Spelling {
    fn new(base: &'static str, depth: usize, repr: Repr) -> Spelling {
        Spelling { base, depth, repr }
    }

    /// True for `void` with no indirection, which only ever appears as a return type.
    pub fn is_void(&self) -> bool {
        self.repr == Repr::Void && self.depth == 0
    }

    pub fn is_pointer(&self) -> bool {
        self.depth > 0 || self.repr == Repr::Pointer
    }

    /// ` -> T`, or nothing for `void`.
    pub fn ret(&self) -> String {
        if self.is_void() {
            String::new()
        } else {
            format!(" -> {}", self)
        }
    }
}

impl fmt::Display for Spelling {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for _ in 0..self.depth {
            fmt.write_str("*mut ")?;
        }
        fmt.write_str(self.base)
    }
}

/// Split `GLchar **` into (`GLchar`, 2).
pub fn ptr_parse(ty: &str) -> (&str, usize) {
    let mut name = ty.trim_end();
    let mut depth = 0;
    while let Some(rest) = name.strip_suffix('*') {
        name = rest.trim_end();
        depth += 1;
    }
    (name.trim_start(), depth)
}

fn lookup(types: &HashMap<String, Type>, name: &str) -> Result<Type> {
    match types.get(name) {
        Some(&Type::Invalid) | None => Err(Error::InvalidType(name.to_owned())),
        Some(&typ)                  => Ok(typ)
    }
}

/// The C ABI spelling of a registry type name. `Ok(None)` means the type can't be represented and
/// the command using it has to be left out.
pub fn foreign_type(types: &HashMap<String, Type>, name: &str) -> Result<Option<Spelling>> {
    let (base, depth) = ptr_parse(name);
    if base == "void" {
        return Ok(Some(Spelling::new(C_VOID, depth, Repr::Void)));
    }

    use self::Repr::*;
    let (spelling, repr) = match lookup(types, base)? {
        Type::Invalid     => return Err(Error::InvalidType(base.to_owned())),
        Type::Unsupported => return Ok(None),

        Type::Int8        => ("i8", Value),
        Type::Int16       => ("i16", Value),
        Type::Int32       => ("i32", Value),
        Type::Int64       => ("i64", Value),
        Type::Intptr      => ("libc::intptr_t", Value),
        Type::Intsize     => ("libc::ssize_t", Value),

        Type::Uint8       => ("u8", Value),
        Type::Uint16      => ("u16", Value),
        Type::Uint32      => ("u32", Value),
        Type::Uint64      => ("u64", Value),
        Type::Uintptr     => ("libc::uintptr_t", Value),
        Type::Uintsize    => ("libc::size_t", Value),

        Type::Float32     => ("libc::c_float", Value),
        Type::Float64     => ("libc::c_double", Value),

        Type::Bool        => ("libc::c_uchar", Bool),
        // The typedef already is one level of indirection
        Type::Pointer     => return Ok(Some(Spelling::new(C_VOID, depth + 1, Void))),

        Type::HandleArb   => ("GLhandleARB", Handle),
        Type::Sync        => ("GLsync", Handle),
        Type::DebugProc   => return Err(Error::CallbackSignatureMisuse(base.to_owned())),
    };
    Ok(Some(Spelling::new(spelling, depth, repr)))
}

/// The Rust spelling of a registry type name, as exposed by the wrapper methods.
pub fn host_type(types: &HashMap<String, Type>, name: &str) -> Result<Option<Spelling>> {
    let (base, depth) = ptr_parse(name);
    if base == "void" {
        return Ok(Some(match depth {
            0 => Spelling::new("()", 0, Repr::Void),
            _ => Spelling::new(OPAQUE_POINTER, depth - 1, Repr::Pointer),
        }));
    }

    use self::Repr::*;
    let (spelling, repr) = match lookup(types, base)? {
        Type::Invalid     => return Err(Error::InvalidType(base.to_owned())),
        Type::Unsupported => return Ok(None),

        Type::Int8        => ("i8", Value),
        Type::Int16       => ("i16", Value),
        Type::Int32       => ("i32", Value),
        Type::Int64       => ("i64", Value),
        Type::Intptr      => ("isize", Value),
        Type::Intsize     => ("isize", Value),

        Type::Uint8       => ("u8", Value),
        Type::Uint16      => ("u16", Value),
        Type::Uint32      => ("u32", Value),
        Type::Uint64      => ("u64", Value),
        Type::Uintptr     => ("usize", Value),
        Type::Uintsize    => ("usize", Value),

        Type::Float32     => ("f32", Value),
        Type::Float64     => ("f64", Value),

        Type::Bool        => ("bool", Bool),
        Type::Pointer     => (OPAQUE_POINTER, Pointer),

        Type::HandleArb   => ("GLhandleARB", Handle),
        Type::Sync        => ("GLsync", Handle),
        Type::DebugProc   => ("DebugCallback", Callback),
    };
    Ok(Some(Spelling::new(spelling, depth, repr)))
}

/// An expression converting the host value `expr` to the foreign spelling.
pub fn to_foreign(expr: &str, foreign: &Spelling) -> String {
    if foreign.is_pointer() {
        return format!("{} as *mut c_void as {}", expr, foreign);
    }
    match foreign.repr {
        Repr::Value    |
        Repr::Bool     |
        Repr::Pointer => format!("{} as {}", expr, foreign),
        Repr::Void     |
        Repr::Handle   |
        Repr::Callback => expr.to_owned(),
    }
}

/// An expression converting the foreign result `expr` back to the host spelling.
pub fn to_host(expr: &str, host: &Spelling) -> String {
    if host.is_pointer() {
        return format!("{} as {}", expr, host);
    }
    match host.repr {
        Repr::Value    => format!("{} as {}", expr, host),
        Repr::Bool     => format!("{} != 0", expr),
        Repr::Void     |
        Repr::Pointer  |
        Repr::Handle   |
        Repr::Callback => expr.to_owned(),
    }
}
