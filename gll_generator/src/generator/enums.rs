use super::GenConfig;
use crate::registry::Enum;

use std::collections::HashSet;
use std::fmt::Write;

/// `GL_COLOR_BUFFER_BIT` -> `COLOR_BUFFER_BIT`. Names that would start with a digit keep the prefix.
pub fn enum_ident<'a>(name: &'a str, config: &GenConfig) -> &'a str {
    if !config.remove_enum_prefix {
        return name;
    }
    match name.strip_prefix("GL_") {
        Some(stripped) if stripped.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') => stripped,
        _ => name
    }
}

/// The narrowest Rust type that holds the literal, and the literal spelled for Rust.
fn enum_value(literal: &str) -> Option<(&'static str, String)> {
    let literal = literal.trim();
    let (negative, magnitude) = match literal.strip_prefix('-') {
        Some(m) => (true, m.trim_start()),
        None    => (false, literal)
    };

    let (value, spelling) = match magnitude.strip_prefix("0x").or_else(|| magnitude.strip_prefix("0X")) {
        Some(hex) => (u64::from_str_radix(hex, 16).ok()?, format!("0x{}", hex)),
        None      => (magnitude.parse::<u64>().ok()?, magnitude.to_owned()),
    };

    if negative {
        let ty = match value {
            v if v <= 1 << 31 => "i32",
            v if v <= 1 << 63 => "i64",
            _ => return None
        };
        Some((ty, format!("-{}", spelling)))
    } else if value <= u64::from(u32::MAX) {
        Some(("u32", spelling))
    } else {
        Some(("u64", spelling))
    }
}

pub fn gen_enums(buf: &mut String, enums: &[Enum], config: &GenConfig) {
    let mut names = HashSet::with_capacity(enums.len());
    for e in enums {
        let name = enum_ident(&e.name, config);
        let (ty, value) = match enum_value(&e.value) {
            Some(v) => v,
            None => {
                log::warn!("skipping enum {}: can't parse value {:?}", e.name, e.value);
                continue;
            }
        };
        if !names.insert(name) {
            log::debug!("skipping duplicate enum {}", e.name);
            continue;
        }
        writeln!(buf, "pub const {}: {} = {};", name, ty, value).unwrap();
    }
}
