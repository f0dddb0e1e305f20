//! Module that contains a crawler function that walks the gl.xml event stream and collects the
//! registry entries as raw, unclassified text. Classification happens in the parent module.
use xml::attribute::OwnedAttribute;
use xml::reader::{EventReader, ParserConfig, XmlEvent};

use std::io::Read;

use crate::error::Result;

#[derive(Debug, Default)]
pub struct RawRegistry {
    pub types: Vec<RawType>,
    pub enums: Vec<RawEnum>,
    pub commands: Vec<RawCommand>,
    pub features: Vec<RawFeature>,
    pub extensions: Vec<RawExtension>,
}

#[derive(Debug, Default)]
pub struct RawType {
    /// The `name` attribute, used by `<type name="khrplatform">` style entries
    pub name_attr: Option<String>,
    pub api: Option<String>,
    /// Contents of the nested `<name>` element
    pub name: Option<String>,
    /// Character data directly inside `<type>`, i.e. the typedef with the name cut out
    pub typedef: String,
}

#[derive(Debug, Default)]
pub struct RawEnum {
    pub api: Option<String>,
    pub name: Option<String>,
    pub group: Option<String>,
    pub value: Option<String>,
}

/// A C declaration as it appears in `<proto>` and `<param>`: `const <ptype>GLchar</ptype> *<name>x</name>`
#[derive(Debug, Default)]
pub struct RawDecl {
    /// All character data before `<name>`, `<ptype>` contents included
    pub text: String,
    pub name: Option<String>,
    /// Character data after `<name>`, e.g. the `[2]` of an array parameter
    pub suffix: String,
}

#[derive(Debug, Default)]
pub struct RawCommand {
    pub proto: RawDecl,
    pub params: Vec<RawDecl>,
}

/// A `<command name="..."/>` reference inside a `<require>` block.
#[derive(Debug)]
pub struct RawRequire {
    pub name: String,
    /// The `api` attribute of the enclosing `<require>`
    pub api: Option<String>,
}

#[derive(Debug, Default)]
pub struct RawFeature {
    pub api: Option<String>,
    pub name: Option<String>,
    pub number: Option<String>,
    pub commands: Vec<RawRequire>,
}

#[derive(Debug, Default)]
pub struct RawExtension {
    pub name: Option<String>,
    pub supported: Option<String>,
    pub commands: Vec<RawRequire>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GlBlock {
    Types,
    Enums,
    Commands,
    Feature,
    Extensions,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeclSlot {
    Proto,
    Param,
}

pub fn crawl<R: Read>(source: R) -> Result<RawRegistry> {
    let config = ParserConfig::new()
        .whitespace_to_characters(true)
        .cdata_to_characters(true)
        .ignore_comments(true);
    let xml_reader = EventReader::new_with_config(source, config);

    let mut raw = RawRegistry::default();
    let mut cur_block = GlBlock::None;
    let mut cur_decl: Option<DeclSlot> = None;
    let mut require_api: Option<String> = None;
    // A stack of the names of all currently open elements
    let mut gl_elements: Vec<String> = Vec::with_capacity(10);

    for event in xml_reader {
        match event? {
            XmlEvent::StartElement { name, attributes, .. } => {
                let tag = name.local_name;
                let parent = gl_elements.last().map(|s| &s[..]);

                match (&tag[..], parent) {
                    ("types", Some("registry"))      => cur_block = GlBlock::Types,
                    ("type", Some("types"))          => raw.types.push(RawType {
                        name_attr: find_attribute(&attributes, "name"),
                        api: find_attribute(&attributes, "api"),
                        ..Default::default()
                    }),
                    ("name", Some("type"))
                        if GlBlock::Types == cur_block =>
                        if let Some(ty) = raw.types.last_mut() {
                            ty.name.get_or_insert_with(String::new);
                        },

                    ("enums", Some("registry"))      => cur_block = GlBlock::Enums,
                    ("enum", Some("enums"))          => raw.enums.push(RawEnum {
                        api: find_attribute(&attributes, "api"),
                        name: find_attribute(&attributes, "name"),
                        group: find_attribute(&attributes, "group"),
                        value: find_attribute(&attributes, "value"),
                    }),

                    ("commands", Some("registry"))   => cur_block = GlBlock::Commands,
                    ("command", Some("commands"))    => raw.commands.push(RawCommand::default()),
                    ("proto", Some("command"))
                        if GlBlock::Commands == cur_block => cur_decl = Some(DeclSlot::Proto),
                    ("param", Some("command"))
                        if GlBlock::Commands == cur_block => {
                            if let Some(cmd) = raw.commands.last_mut() {
                                cmd.params.push(RawDecl::default());
                            }
                            cur_decl = Some(DeclSlot::Param);
                        }
                    ("name", _)
                        if cur_decl.is_some() =>
                        if let Some(decl) = current_decl(&mut raw, cur_decl) {
                            decl.name.get_or_insert_with(String::new);
                        },

                    ("feature", Some("registry"))    => {
                        cur_block = GlBlock::Feature;
                        raw.features.push(RawFeature {
                            api: find_attribute(&attributes, "api"),
                            name: find_attribute(&attributes, "name"),
                            number: find_attribute(&attributes, "number"),
                            commands: Vec::new(),
                        });
                    }

                    ("extensions", Some("registry")) => cur_block = GlBlock::Extensions,
                    ("extension", Some("extensions")) => raw.extensions.push(RawExtension {
                        name: find_attribute(&attributes, "name"),
                        supported: find_attribute(&attributes, "supported"),
                        commands: Vec::new(),
                    }),

                    ("require", _)                   => require_api = find_attribute(&attributes, "api"),
                    ("command", Some("require"))     =>
                        if let Some(name) = find_attribute(&attributes, "name") {
                            let req = RawRequire { name, api: require_api.clone() };
                            let commands = match cur_block {
                                GlBlock::Feature    => raw.features.last_mut().map(|f| &mut f.commands),
                                GlBlock::Extensions => raw.extensions.last_mut().map(|e| &mut e.commands),
                                _                   => None
                            };
                            if let Some(commands) = commands {
                                commands.push(req);
                            }
                        },
                    _ => ()
                }

                gl_elements.push(tag);
            }

            XmlEvent::EndElement { .. } => {
                match gl_elements.pop().as_ref().map(|s| &s[..]) {
                    Some("proto")      |
                    Some("param")     => cur_decl = None,
                    Some("require")   => require_api = None,
                    Some("types")      |
                    Some("enums")      |
                    Some("commands")   |
                    Some("feature")    |
                    Some("extensions") => cur_block = GlBlock::None,
                    _                 => ()
                }
            }

            XmlEvent::Characters(chars) => {
                let top = gl_elements.last().map(|s| &s[..]);
                let below = gl_elements.len().checked_sub(2).map(|i| &gl_elements[i][..]);

                match cur_block {
                    GlBlock::Types =>
                        if let Some(ty) = raw.types.last_mut() {
                            match (top, below) {
                                (Some("type"), _)              => ty.typedef.push_str(&chars),
                                (Some("name"), Some("type"))   =>
                                    ty.name.get_or_insert_with(String::new).push_str(&chars),
                                _ => ()
                            }
                        },
                    GlBlock::Commands =>
                        if let Some(decl) = current_decl(&mut raw, cur_decl) {
                            if let Some("name") = top {
                                decl.name.get_or_insert_with(String::new).push_str(&chars);
                            } else if decl.name.is_none() {
                                decl.text.push_str(&chars);
                            } else {
                                decl.suffix.push_str(&chars);
                            }
                        },
                    _ => ()
                }
            }

            _ => ()
        }
    }

    Ok(raw)
}

fn current_decl(raw: &mut RawRegistry, slot: Option<DeclSlot>) -> Option<&mut RawDecl> {
    let cmd = raw.commands.last_mut()?;
    match slot? {
        DeclSlot::Proto => Some(&mut cmd.proto),
        DeclSlot::Param => cmd.params.last_mut(),
    }
}

fn find_attribute(source: &[OwnedAttribute], query: &str) -> Option<String> {
    source.iter().find(|attr| attr.name.local_name == query).map(|res| res.value.clone())
}
