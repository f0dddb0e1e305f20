mod crawler;

use crate::error::{Error, Result};
use crate::generator::GenRegistry;
use self::crawler::{RawDecl, RawRequire, RawType};

use boolinator::Boolinator;

use std::collections::HashMap;
use std::io::Read;

/// The API tag bindings are generated for unless another one is passed to [`Registry::parse_api`].
pub const DEFAULT_API: &str = "gl";

/// Normalized contents of `gl.xml`. Built once by [`Registry::parse`] and never modified afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    pub types: HashMap<String, Type>,
    pub enums: Vec<Enum>,
    pub commands: Vec<Command>,
    pub features: Vec<Feature>,
    pub extensions: Vec<Extension>,
}

impl Registry {
    /// Parse a registry document, keeping the entries that apply to desktop OpenGL.
    pub fn parse<R: Read>(gl_xml: R) -> Result<Registry> {
        Registry::parse_api(gl_xml, DEFAULT_API)
    }

    /// Parse a registry document, keeping the entries that apply to `api`.
    pub fn parse_api<R: Read>(gl_xml: R, api: &str) -> Result<Registry> {
        let raw = crawler::crawl(gl_xml)?;

        let mut registry = Registry {
            types: HashMap::with_capacity(raw.types.len()),
            enums: Vec::with_capacity(raw.enums.len()),
            commands: Vec::with_capacity(raw.commands.len()),
            features: Vec::with_capacity(raw.features.len()),
            extensions: Vec::with_capacity(raw.extensions.len()),
        };

        for raw_type in &raw.types {
            if raw_type.api.as_ref().map_or(false, |a| a != api) {
                continue;
            }
            if let Some((name, typ)) = classify_type(raw_type)? {
                registry.types.insert(name, typ);
            }
        }

        for raw_enum in raw.enums {
            if raw_enum.api.as_ref().map_or(false, |a| a != api) {
                continue;
            }
            let name = raw_enum.name.ok_or_else(|| Error::Malformed("enum without a name".into()))?;
            let value = raw_enum.value.ok_or_else(|| Error::Malformed(format!("enum {} has no value", name)))?;
            registry.enums.push(Enum {
                name,
                group: raw_enum.group.unwrap_or_default(),
                value,
            });
        }

        for raw_command in raw.commands {
            let (name, ret) = declaration(raw_command.proto)
                .ok_or_else(|| Error::Malformed("command prototype without a name".into()))?;
            let mut params = Vec::with_capacity(raw_command.params.len());
            for raw_param in raw_command.params {
                let (param_name, ty) = declaration(raw_param)
                    .ok_or_else(|| Error::Malformed(format!("parameter of {} has no name", name)))?;
                params.push(Param { name: param_name, ty });
            }
            registry.commands.push(Command { name, params, ret });
        }

        for raw_feature in raw.features {
            if raw_feature.api.as_ref().map(|a| &a[..]) != Some(api) {
                continue;
            }
            let name = raw_feature.name.unwrap_or_default();
            let version = raw_feature.number.as_ref()
                .and_then(|n| parse_version(n))
                .ok_or_else(|| Error::Malformed(format!("feature {} has an invalid number: {:?}", name, raw_feature.number)))?;

            registry.features.push(Feature {
                name,
                version,
                commands: required_commands(raw_feature.commands, api),
            });
        }

        for raw_extn in raw.extensions {
            let supported = raw_extn.supported.as_ref()
                .map_or(false, |s| s.split('|').any(|tag| tag == api));
            if !supported {
                continue;
            }

            registry.extensions.push(Extension {
                name: raw_extn.name.unwrap_or_default(),
                commands: required_commands(raw_extn.commands, api),
            });
        }

        log::info!("parsed registry: {} types, {} enums, {} commands, {} features, {} extensions",
                   registry.types.len(), registry.enums.len(), registry.commands.len(),
                   registry.features.len(), registry.extensions.len());
        Ok(registry)
    }
}

impl GenRegistry for Registry {
    fn types(&self) -> &HashMap<String, Type> {
        &self.types
    }

    fn enums(&self) -> &[Enum] {
        &self.enums
    }

    fn commands(&self) -> &[Command] {
        &self.commands
    }

    fn features(&self) -> &[Feature] {
        &self.features
    }

    fn extensions(&self) -> &[Extension] {
        &self.extensions
    }
}

/// Resolve a `<type>` entry to its name and classification. Returns `None` for entries that are
/// skipped outright.
fn classify_type(raw: &RawType) -> Result<Option<(String, Type)>> {
    let (name, typ) = match raw.name_attr.as_ref().map(|s| &s[..]) {
        Some("khrplatform") => return Ok(None),
        Some("GLhandleARB") => ("GLhandleARB", Type::HandleArb),
        Some(name)          => (name, Type::Invalid),
        None => {
            let name = raw.name.as_ref()
                .map(|s| s.trim())
                .ok_or_else(|| Error::Malformed(format!("type without a name: {:?}", raw.typedef)))?;
            let typ = match name {
                // Unused by any command
                "GLvoid"                   => return Ok(None),

                "GLeglClientBufferEXT"      |
                "GLeglImageOES"             |
                "_cl_context"               |
                "_cl_event"                 |
                "GLVULKANPROCNV"            |
                // Six arguments and no source, unlike the proc the bridge installs
                "GLDEBUGPROCAMD"           => Type::Unsupported,

                "GLDEBUGPROC"               |
                "GLDEBUGPROCARB"            |
                "GLDEBUGPROCKHR"           => Type::DebugProc,

                "GLboolean"                => Type::Bool,
                "GLhandleARB"              => Type::HandleArb,
                "GLsync"                   => Type::Sync,
                _                          => parse_type_def(&raw.typedef)
            };
            (name, typ)
        }
    };

    if Type::Invalid == typ {
        return Err(Error::UnknownFundamentalType {
            name: name.to_owned(),
            typedef: raw.typedef.clone(),
        });
    }
    Ok(Some((name.to_owned(), typ)))
}

/// Every typedef base spelling the registry is known to use, and what it stands for.
pub const KNOWN_TYPEDEFS: &[(&str, Type)] = &[
    ("khronos_int8_t",     Type::Int8),
    ("signed char",        Type::Int8),
    ("khronos_int16_t",    Type::Int16),
    ("short",              Type::Int16),
    ("khronos_int32_t",    Type::Int32),
    ("int",                Type::Int32),
    ("khronos_int64_t",    Type::Int64),
    ("khronos_intptr_t",   Type::Intptr),
    ("GLintptr",           Type::Intptr),
    ("khronos_ssize_t",    Type::Intsize),
    ("khronos_intsize_t",  Type::Intsize),

    ("khronos_uint8_t",    Type::Uint8),
    ("char",               Type::Uint8),
    ("unsigned char",      Type::Uint8),
    ("khronos_uint16_t",   Type::Uint16),
    ("unsigned short",     Type::Uint16),
    ("khronos_uint32_t",   Type::Uint32),
    ("unsigned int",       Type::Uint32),
    ("khronos_uint64_t",   Type::Uint64),
    ("khronos_uintptr_t",  Type::Uintptr),
    ("khronos_size_t",     Type::Uintsize),
    ("khronos_uintsize_t", Type::Uintsize),

    ("khronos_float_t",    Type::Float32),
    ("float",              Type::Float32),
    ("double",             Type::Float64),

    ("void *",             Type::Pointer),
];

/// Classify the text of a typedef such as `typedef khronos_int8_t ;`. Anything that isn't a
/// typedef of a spelling in [`KNOWN_TYPEDEFS`] is [`Type::Invalid`].
pub fn parse_type_def(tdef: &str) -> Type {
    let tdef = tdef.trim();
    let base = match tdef.strip_prefix("typedef").and_then(|t| t.strip_suffix(';')) {
        Some(base) => base,
        None       => return Type::Invalid
    };

    // Collapse whitespace so `unsigned  int` and `void*` match the table
    let base = base.replace('*', " *").split_whitespace().collect::<Vec<_>>().join(" ");

    KNOWN_TYPEDEFS.iter()
        .find(|&&(spelling, _)| spelling == base)
        .map_or(Type::Invalid, |&(_, typ)| typ)
}

/// Turn a `<proto>` or `<param>` into (name, declared type). `const` qualifiers and `struct` tags
/// are dropped; pointer markers are kept. Each array dimension after the name decays to one more
/// pointer, so `GLuint baseAndCount[2]` is declared `GLuint *`.
fn declaration(decl: RawDecl) -> Option<(String, String)> {
    let name = decl.name?.trim().to_owned();
    let mut ty = decl.text.replace("const", "").replace("struct ", "").trim().to_owned();
    for _ in decl.suffix.matches('[') {
        ty.push_str(" *");
    }
    Some((name, ty))
}

/// `4.5` -> `450`
fn parse_version(number: &str) -> Option<u32> {
    let number: f64 = number.trim().parse().ok()?;
    (number.is_finite() && number >= 0.0).as_some_from(|| (number * 100.0).round() as u32)
}

fn required_commands(reqs: Vec<RawRequire>, api: &str) -> Vec<String> {
    reqs.into_iter()
        .filter(|req| req.api.as_ref().map_or(true, |a| a == api))
        .map(|req| req.name)
        .collect()
}

/// The closed set of types a registry typedef can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// A typedef that matched nothing. Never stored in a [`Registry`].
    Invalid,
    /// Known, but with no safe representation. Commands using it are left out of the bindings.
    Unsupported,

    Int8,
    Int16,
    Int32,
    Int64,
    Intptr,
    Intsize,

    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Uintsize,

    Float32,
    Float64,

    Bool,
    /// An opaque `void *` typedef
    Pointer,

    /// `GLhandleARB`, which is a pointer on macOS and an integer everywhere else
    HandleArb,
    /// `GLsync`, a pointer to an opaque driver struct
    Sync,
    /// `GLDEBUGPROC` and its extension variants
    DebugProc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    pub name: String,
    /// The `group` attribute; empty if the enum has none
    pub group: String,
    /// The value exactly as written in the registry, e.g. `0xFFFFFFFF`
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub params: Vec<Param>,
    /// The return type as declared, e.g. `void` or `GLubyte *`
    pub ret: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    /// The type as declared, with `const` removed: `GLchar *`, `void **`, `GLenum`
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub name: String,
    /// The feature number times 100: `GL_VERSION_4_5` is `450`
    pub version: u32,
    pub commands: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    pub name: String,
    pub commands: Vec<String>,
}
