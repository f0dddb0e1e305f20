//! One trait per feature level, each extending a shared `Extensions` trait, plus the constructors
//! that load a `Lib` for a level.
use super::commands::{self, CommandSig};
use super::{GenConfig, GenRegistry};

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt::Write;

/// The commands on the `Extensions` trait, in the order they are first seen.
///
/// Commands that belong to any feature level are left to the level traits, since a trait and its
/// supertrait can't both declare the method.
pub fn extension_commands<'a, R: GenRegistry>(registry: &'a R, sigs: &HashMap<&str, CommandSig>) -> Vec<&'a str> {
    let core: HashSet<&str> = registry.features().iter()
        .flat_map(|f| f.commands.iter().map(|c| &c[..]))
        .collect();

    let mut seen = HashSet::new();
    let mut extensions = Vec::new();
    for extn in registry.extensions() {
        for name in extn.commands.iter().map(|c| &c[..]) {
            if commands::is_debug_callback(name) || !seen.insert(name) {
                continue;
            }
            if sigs.contains_key(name) && !core.contains(name) {
                extensions.push(name);
            }
        }
    }
    extensions
}

/// Features grouped by version. Several `<feature>` blocks with one number count as one level.
fn feature_levels<R: GenRegistry>(registry: &R) -> BTreeMap<u32, Vec<&str>> {
    let mut levels: BTreeMap<u32, Vec<&str>> = BTreeMap::new();
    for feature in registry.features() {
        levels.entry(feature.version)
            .or_default()
            .extend(feature.commands.iter().map(|c| &c[..]));
    }
    levels
}

pub fn gen_versions<R: GenRegistry>(buf: &mut String, registry: &R, sigs: &HashMap<&str, CommandSig>, extensions: &[&str]) {
    let mut accumulated = BTreeSet::new();
    for (version, level) in feature_levels(registry) {
        accumulated.extend(level.into_iter().filter(|c| sigs.contains_key(c)));
        log::debug!("GL{} has {} commands", version, accumulated.len());
        gen_version(buf, version, &accumulated, sigs, extensions);
    }
}

fn gen_version(buf: &mut String, version: u32, commands: &BTreeSet<&str>, sigs: &HashMap<&str, CommandSig>, extensions: &[&str]) {
    writeln!(buf, "/// OpenGL {}.{}", version / 100, version % 100 / 10).unwrap();
    writeln!(buf, "#[allow(non_snake_case, clippy::too_many_arguments)]").unwrap();
    writeln!(buf, "pub trait GL{}: Extensions {{", version).unwrap();
    for &name in commands {
        writeln!(buf, "    {};", sigs[name].decl()).unwrap();
    }
    writeln!(buf, "}}\n").unwrap();

    writeln!(buf, "#[allow(non_snake_case, unsafe_op_in_unsafe_fn, clippy::too_many_arguments)]").unwrap();
    writeln!(buf, "impl GL{} for Lib {{", version).unwrap();
    gen_forwarding(buf, commands.iter().map(|&name| &sigs[name]));
    writeln!(buf, "}}\n").unwrap();

    writeln!(buf, "pub fn new_gl{0}<F: FnMut(&str) -> *const c_void>(mut get_proc_addr: F) -> Box<dyn GL{0}> {{", version).unwrap();
    writeln!(buf, "    Box::new(Lib {{").unwrap();
    for name in commands.iter().chain(extensions) {
        writeln!(buf, "        {0}: get_proc_addr(\"{0}\"),", name).unwrap();
    }
    writeln!(buf, "        ..Lib::unloaded()").unwrap();
    writeln!(buf, "    }})").unwrap();
    writeln!(buf, "}}\n").unwrap();
}

pub fn gen_extensions(buf: &mut String, sigs: &HashMap<&str, CommandSig>, extensions: &[&str], config: &GenConfig) {
    writeln!(buf, "#[allow(non_snake_case, clippy::too_many_arguments)]").unwrap();
    writeln!(buf, "pub trait Extensions: {}::Binding {{", config.runtime_crate).unwrap();
    for &name in extensions {
        writeln!(buf, "    {};", sigs[name].decl()).unwrap();
    }
    writeln!(buf, "}}\n").unwrap();

    writeln!(buf, "#[allow(non_snake_case, unsafe_op_in_unsafe_fn, clippy::too_many_arguments)]").unwrap();
    writeln!(buf, "impl Extensions for Lib {{").unwrap();
    gen_forwarding(buf, extensions.iter().map(|&name| &sigs[name]));
    writeln!(buf, "}}\n").unwrap();
}

/// Trait methods that call the inherent method of the same name.
fn gen_forwarding<'s, I: Iterator<Item = &'s CommandSig>>(buf: &mut String, sigs: I) {
    for sig in sigs {
        let args = match sig.args.is_empty() {
            true  => "self".to_owned(),
            false => format!("self, {}", sig.args)
        };
        writeln!(buf, "    {} {{", sig.decl()).unwrap();
        writeln!(buf, "        Lib::{}({})", sig.ident, args).unwrap();
        writeln!(buf, "    }}").unwrap();
    }
}
