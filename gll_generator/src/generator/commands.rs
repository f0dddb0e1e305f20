//! Trampolines for the `ffi` module and the wrapper methods on `Lib` that call them.
use super::types::{self, Spelling};
use super::{sanitize_ident, GenConfig};
use crate::error::Result;
use crate::registry::{Command, Type};

use std::collections::HashMap;
use std::fmt::Write;

/// Commands starting with this are registered through the callback bridge rather than a trampoline.
pub const DEBUG_CALLBACK_PREFIX: &str = "glDebugMessageCallback";

pub fn is_debug_callback(name: &str) -> bool {
    name.starts_with(DEBUG_CALLBACK_PREFIX)
}

/// True if one of the command's parameters is a callback with the `GLDEBUGPROC` layout.
pub fn takes_debug_proc(types: &HashMap<String, Type>, command: &Command) -> bool {
    command.params.iter()
        .any(|p| types.get(types::ptr_parse(&p.ty).0) == Some(&Type::DebugProc))
}

#[derive(Debug, Clone)]
pub struct MappedParam {
    pub name: String,
    pub foreign: Spelling,
    pub host: Spelling,
}

/// A command whose parameters and return type all have both spellings.
#[derive(Debug, Clone)]
pub struct MappedCommand<'r> {
    pub name: &'r str,
    pub params: Vec<MappedParam>,
    pub ret_foreign: Spelling,
    pub ret_host: Spelling,
}

/// The signature of a wrapper method, shared by `Lib` and every trait that lists the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSig {
    pub ident: String,
    /// Parameter list including `&self`
    pub params: String,
    /// Argument names, for forwarding calls
    pub args: String,
    /// ` -> T` or empty
    pub ret: String,
}

impl CommandSig {
    pub fn decl(&self) -> String {
        format!("unsafe fn {}({}){}", self.ident, self.params, self.ret)
    }
}

fn map_both(types: &HashMap<String, Type>, ty: &str) -> Result<Option<(Spelling, Spelling)>> {
    let foreign = match types::foreign_type(types, ty)? {
        Some(f) => f,
        None    => return Ok(None)
    };
    Ok(types::host_type(types, ty)?.map(|host| (foreign, host)))
}

/// Map every type a command touches. `Ok(None)` if any one of them is unrepresentable.
pub fn map_command<'r>(types: &HashMap<String, Type>, command: &'r Command) -> Result<Option<MappedCommand<'r>>> {
    let mut params = Vec::with_capacity(command.params.len());
    for p in &command.params {
        match map_both(types, &p.ty)? {
            Some((ref foreign, _)) if foreign.is_void() => {
                log::debug!("skipping {}: parameter {} is void", command.name, p.name);
                return Ok(None);
            }
            Some((foreign, host)) => params.push(MappedParam {
                name: sanitize_ident(&p.name),
                foreign,
                host,
            }),
            None => {
                log::debug!("skipping {}: parameter {} has unsupported type {:?}", command.name, p.name, p.ty);
                return Ok(None);
            }
        }
    }

    match map_both(types, &command.ret)? {
        Some((ret_foreign, ret_host)) => Ok(Some(MappedCommand {
            name: &command.name,
            params,
            ret_foreign,
            ret_host,
        })),
        None => {
            log::debug!("skipping {}: unsupported return type {:?}", command.name, command.ret);
            Ok(None)
        }
    }
}

impl<'r> MappedCommand<'r> {
    pub fn sig(&self, ident: String) -> CommandSig {
        let mut params = String::from("&self");
        for p in &self.params {
            write!(params, ", {}: {}", p.name, p.host).unwrap();
        }
        CommandSig {
            ident,
            params,
            args: self.params.iter().map(|p| &p.name[..]).collect::<Vec<_>>().join(", "),
            ret: self.ret_host.ret(),
        }
    }
}

pub fn debug_callback_sig(ident: String) -> CommandSig {
    CommandSig {
        ident,
        params: "&self, callback: DebugCallback".to_owned(),
        args: "callback".to_owned(),
        ret: String::new(),
    }
}

/// Write the trampoline casting an untyped address to the command's exact C signature.
pub fn gen_shim(buf: &mut String, command: &MappedCommand, config: &GenConfig) {
    let mut params = String::from("__fp: *const c_void");
    for p in &command.params {
        write!(params, ", {}: {}", p.name, p.foreign).unwrap();
    }
    let fn_type = format!(
        "unsafe extern \"system\" fn({}){}",
        command.params.iter().map(|p| p.foreign.to_string()).collect::<Vec<_>>().join(", "),
        command.ret_foreign.ret()
    );
    let args = command.params.iter().map(|p| &p.name[..]).collect::<Vec<_>>().join(", ");

    writeln!(buf, "    #[inline]").unwrap();
    writeln!(buf, "    pub unsafe fn {}({}){} {{", command.name, params, command.ret_foreign.ret()).unwrap();
    writeln!(buf, "        match std::mem::transmute::<*const c_void, Option<{}>>(__fp) {{", fn_type).unwrap();
    writeln!(buf, "            Some(__f) => __f({}),", args).unwrap();
    writeln!(buf, "            None => {}::unloaded_function_panic(\"{}\"),", config.runtime_crate, command.name).unwrap();
    writeln!(buf, "        }}").unwrap();
    writeln!(buf, "    }}\n").unwrap();
}

/// Write the `Lib` method converting host arguments, calling the trampoline and converting back.
pub fn gen_wrapper(buf: &mut String, command: &MappedCommand, sig: &CommandSig) {
    let mut call = format!("ffi::{0}(self.{0}", command.name);
    for p in &command.params {
        write!(call, ", {}", types::to_foreign(&p.name, &p.foreign)).unwrap();
    }
    call.push(')');

    writeln!(buf, "    pub {} {{", sig.decl()).unwrap();
    writeln!(buf, "        {}", types::to_host(&call, &command.ret_host)).unwrap();
    writeln!(buf, "    }}\n").unwrap();
}

pub fn gen_debug_wrapper(buf: &mut String, name: &str, sig: &CommandSig) {
    writeln!(buf, include_str!("debug_method.rs"), sig.decl(), name).unwrap();
}

/// Write the binding struct: one address per command plus the debug callback state.
pub fn gen_lib(buf: &mut String, names: &[&str], config: &GenConfig) {
    let rt = config.runtime_crate;

    writeln!(buf, "#[allow(dead_code, non_snake_case)]").unwrap();
    writeln!(buf, "struct Lib {{").unwrap();
    writeln!(buf, "    debug: {}::debug::DebugState,", rt).unwrap();
    for name in names {
        writeln!(buf, "    {}: *const c_void,", name).unwrap();
    }
    writeln!(buf, "}}\n").unwrap();

    writeln!(buf, "impl Lib {{").unwrap();
    writeln!(buf, "    fn unloaded() -> Lib {{").unwrap();
    writeln!(buf, "        Lib {{").unwrap();
    writeln!(buf, "            debug: Default::default(),").unwrap();
    for name in names {
        writeln!(buf, "            {}: std::ptr::null(),", name).unwrap();
    }
    writeln!(buf, "        }}").unwrap();
    writeln!(buf, "    }}").unwrap();
    writeln!(buf, "}}\n").unwrap();

    writeln!(buf, "impl {}::Binding for Lib {{", rt).unwrap();
    writeln!(buf, "    fn debug_state(&self) -> &{}::debug::DebugState {{", rt).unwrap();
    writeln!(buf, "        &self.debug").unwrap();
    writeln!(buf, "    }}").unwrap();
    writeln!(buf, "}}\n").unwrap();
}
