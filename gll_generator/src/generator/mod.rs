mod commands;
mod enums;
mod interfaces;
pub mod types;

pub use self::commands::{CommandSig, DEBUG_CALLBACK_PREFIX};

use self::commands::MappedCommand;
use crate::error::Result;
use crate::registry::*;

use std::collections::{HashMap, HashSet};
use std::default;
use std::fmt::Write;

use boolinator::Boolinator;

/// Knobs controlling how registry names turn into Rust identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenConfig<'a> {
    /// `glClearColor` -> `clearColor`
    pub remove_command_prefix: bool,
    /// `clearColor` -> `clear_color`
    pub snake_case_commands: bool,
    /// `GL_COLOR_BUFFER_BIT` -> `COLOR_BUFFER_BIT`, unless the result starts with a digit
    pub remove_enum_prefix: bool,

    /// Path through which the generated code reaches the runtime crate, e.g. `::gll` or
    /// `crate::gll` when it is re-exported.
    pub runtime_crate: &'a str,
}

impl<'a> default::Default for GenConfig<'a> {
    fn default() -> GenConfig<'a> {
        GenConfig {
            remove_command_prefix: true,
            snake_case_commands: true,
            remove_enum_prefix: true,

            runtime_crate: "::gll",
        }
    }
}

/// Read access to a parsed registry. Implemented by [`Registry`]; generation only goes through
/// this trait.
pub trait GenRegistry {
    fn types(&self)      -> &HashMap<String, Type>;
    fn enums(&self)      -> &[Enum];
    fn commands(&self)   -> &[Command];
    fn features(&self)   -> &[Feature];
    fn extensions(&self) -> &[Extension];
}

const RESERVED_IDENTS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use",
    "where", "while", "abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv",
    "try", "typeof", "unsized", "virtual", "yield",
];

/// Append `_` to identifiers Rust reserves.
pub fn sanitize_ident(ident: &str) -> String {
    match RESERVED_IDENTS.contains(&ident) {
        true  => format!("{}_", ident),
        false => ident.to_owned()
    }
}

/// Commands that survived type mapping, with their method identifiers resolved.
struct GenPreproc<'a, 'b> {
    /// Commands with a trampoline, in registry order
    commands: Vec<MappedCommand<'a>>,
    /// Members of the debug callback family, in registry order
    debug_commands: Vec<&'a str>,
    /// Every command that gets an address field on `Lib`, in registry order
    lib_fields: Vec<&'a str>,
    /// Method signature of every command in `lib_fields`
    sigs: HashMap<&'a str, CommandSig>,
    idents: HashSet<String>,
    config: GenConfig<'b>,
}

impl<'a, 'b> GenPreproc<'a, 'b> {
    fn new<R: GenRegistry>(registry: &'a R, config: GenConfig<'b>) -> Result<GenPreproc<'a, 'b>> {
        let mut gen = GenPreproc {
            commands: Vec::with_capacity(registry.commands().len()),
            debug_commands: Vec::new(),
            lib_fields: Vec::with_capacity(registry.commands().len()),
            sigs: HashMap::with_capacity(registry.commands().len()),
            idents: HashSet::with_capacity(registry.commands().len()),
            config,
        };

        for command in registry.commands() {
            let name = &command.name[..];
            if gen.sigs.contains_key(name) {
                log::warn!("command {} is declared twice; keeping the first declaration", name);
                continue;
            }

            if commands::is_debug_callback(name) && commands::takes_debug_proc(registry.types(), command) {
                let ident = gen.process_command_ident(name);
                gen.sigs.insert(name, commands::debug_callback_sig(ident));
                gen.debug_commands.push(name);
                gen.lib_fields.push(name);
                continue;
            }

            if let Some(mapped) = commands::map_command(registry.types(), command)? {
                let ident = gen.process_command_ident(name);
                gen.sigs.insert(name, mapped.sig(ident));
                gen.lib_fields.push(name);
                gen.commands.push(mapped);
            }
        }

        log::info!("{} of {} commands are representable", gen.lib_fields.len(), registry.commands().len());
        Ok(gen)
    }

    fn process_command_ident(&mut self, name: &str) -> String {
        let mut ident = name.to_owned();

        if self.config.remove_command_prefix {
            if let Some(stripped) = name.strip_prefix("gl").and_then(|s| (!s.is_empty()).as_some(s)) {
                let mut chars = stripped.chars();
                ident = chars.next().into_iter().flat_map(|c| c.to_lowercase()).chain(chars).collect();
            }
        }

        if self.config.snake_case_commands {
            ident = snake_case(&ident);
        }

        let mut ident = sanitize_ident(&ident);
        if self.idents.contains(&ident) {
            log::warn!("method name {} is taken; {} keeps its registry name", ident, name);
            ident = name.to_owned();
        }
        self.idents.insert(ident.clone());
        ident
    }
}

/// `clientAttribDefaultEXT` -> `client_attrib_default_ext`. An underscore only goes in where a
/// lowercase letter is followed by an uppercase one, so acronyms and digit suffixes stay whole.
fn snake_case(ident: &str) -> String {
    let mut s = String::with_capacity(ident.len() + 8);
    let mut last_lowercase = false;
    for c in ident.chars() {
        if c.is_uppercase() && last_lowercase {
            s.push('_');
        }
        last_lowercase = c.is_lowercase();
        s.extend(c.to_lowercase());
    }
    s
}

/// The generated unit, one buffer per section.
struct GenSections {
    header:     String,
    ffi:        String,
    host:       String,
    lib:        String,
    versions:   String,
    extensions: String,
    aliases:    String,
    enums:      String,
}

impl GenSections {
    fn new<R: GenRegistry>(processed: &GenPreproc, registry: &R) -> GenSections {
        let config = &processed.config;
        let rt = config.runtime_crate;
        let mut sections = GenSections {
            header:     String::with_capacity(2usize.pow(8)),
            ffi:        String::with_capacity(2usize.pow(20)),
            host:       String::with_capacity(2usize.pow(20)),
            lib:        String::with_capacity(2usize.pow(16)),
            versions:   String::with_capacity(2usize.pow(20)),
            extensions: String::with_capacity(2usize.pow(18)),
            aliases:    String::with_capacity(2usize.pow(8)),
            enums:      String::with_capacity(2usize.pow(19)),
        };

        writeln!(sections.header, "#[allow(unused_imports)]").unwrap();
        writeln!(sections.header, "use {}::libc::{{self, c_void}};", rt).unwrap();
        writeln!(sections.header, "#[allow(unused_imports)]").unwrap();
        writeln!(sections.header, "use {}::debug::DebugCallback;\n", rt).unwrap();

        writeln!(sections.ffi, include_str!("prelude_ffi.rs"), rt).unwrap();
        writeln!(sections.host, "#[allow(dead_code, non_snake_case, unsafe_op_in_unsafe_fn, clippy::too_many_arguments)]").unwrap();
        writeln!(sections.host, "impl Lib {{").unwrap();
        for command in &processed.commands {
            commands::gen_shim(&mut sections.ffi, command, config);
            commands::gen_wrapper(&mut sections.host, command, &processed.sigs[command.name]);
        }
        for &name in &processed.debug_commands {
            commands::gen_debug_wrapper(&mut sections.host, name, &processed.sigs[name]);
        }
        writeln!(sections.ffi, "}}\n").unwrap();
        writeln!(sections.host, "}}\n").unwrap();

        commands::gen_lib(&mut sections.lib, &processed.lib_fields, config);

        let extensions = interfaces::extension_commands(registry, &processed.sigs);
        interfaces::gen_versions(&mut sections.versions, registry, &processed.sigs, &extensions);
        interfaces::gen_extensions(&mut sections.extensions, &processed.sigs, &extensions, config);

        writeln!(sections.aliases, "pub type GLhandleARB = ffi::GLhandleARB;").unwrap();
        writeln!(sections.aliases, "pub type GLsync = ffi::GLsync;\n").unwrap();

        enums::gen_enums(&mut sections.enums, registry.enums(), config);

        sections
    }

    fn concat(self) -> String {
        let mut src = String::with_capacity(
            self.header.len() + self.ffi.len() + self.host.len() + self.lib.len() + self.versions.len() +
            self.extensions.len() + self.aliases.len() + self.enums.len()
        );
        for section in [self.header, self.ffi, self.host, self.lib, self.versions, self.extensions,
                        self.aliases, self.enums] {
            src.push_str(&section);
        }
        src
    }
}

/// Generate the complete bindings unit for `registry`.
pub fn generate<R: GenRegistry>(registry: &R, config: GenConfig) -> Result<String> {
    let processed = GenPreproc::new(registry, config)?;
    Ok(GenSections::new(&processed, registry).concat())
}

impl Registry {
    /// Generate Rust bindings for every feature level and extension in the registry. See
    /// [`GenConfig`] for the available options.
    pub fn gen_bindings(&self, config: GenConfig) -> Result<String> {
        generate(self, config)
    }
}
