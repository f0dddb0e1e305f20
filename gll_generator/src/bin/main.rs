use anyhow::Context;
use clap::Parser;
use gll_generator::{GenConfig, Registry};

use std::fs;
use std::io::Read;
use std::path::PathBuf;

const REGISTRY_URL: &str = "https://www.khronos.org/registry/OpenGL/xml/gl.xml";

#[derive(Parser)]
#[command(name = "gll_generator")]
#[command(about = "Generate Rust OpenGL bindings from the Khronos gl.xml registry")]
struct Cli {
    #[arg(short, long, help = "Local gl.xml to read instead of downloading the registry")]
    file: Option<PathBuf>,

    #[arg(short, long, default_value = "gl.rs", help = "File the bindings are written to")]
    output: PathBuf,

    #[arg(long, default_value = "::gll", help = "Path of the runtime crate in the generated code")]
    runtime: String,

    #[arg(long, help = "Keep the gl prefix and camel case of command names")]
    raw_commands: bool,
}

#[cfg(feature = "download")]
fn fetch_registry() -> anyhow::Result<Vec<u8>> {
    log::info!("downloading {}", REGISTRY_URL);
    let response = reqwest::blocking::get(REGISTRY_URL)?.error_for_status()?;
    Ok(response.bytes()?.to_vec())
}

#[cfg(not(feature = "download"))]
fn fetch_registry() -> anyhow::Result<Vec<u8>> {
    Err(anyhow::anyhow!(
        "no --file given and downloading is disabled; build with the `download` feature or pass a local copy of {}",
        REGISTRY_URL
    ))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let xml = match cli.file {
        Some(ref path) => {
            let mut buf = Vec::new();
            fs::File::open(path)
                .and_then(|mut f| f.read_to_end(&mut buf))
                .with_context(|| format!("can't read {:?}", path))?;
            buf
        }
        None => fetch_registry()?,
    };

    let registry = Registry::parse(&xml[..]).context("can't parse the registry")?;
    let config = GenConfig {
        remove_command_prefix: !cli.raw_commands,
        snake_case_commands: !cli.raw_commands,
        runtime_crate: &cli.runtime,
        ..Default::default()
    };
    let bindings = registry.gen_bindings(config).context("can't generate bindings")?;

    let source = match cli.file {
        Some(ref path) => format!("--file {}", path.display()),
        None => "--features download".to_owned(),
    };
    let mut out = format!(
        "// Code generated by `gll_generator {} --output {}`; DO NOT EDIT.\n\n",
        source,
        cli.output.display()
    );
    out.push_str(&bindings);

    fs::write(&cli.output, out).with_context(|| format!("can't write {:?}", cli.output))?;
    log::info!("wrote {}", cli.output.display());
    Ok(())
}
