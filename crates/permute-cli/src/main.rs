// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Standalone front end for the variant pipeline: compiles a variant set
// into the artifact cache without a graphics runtime attached.
// Run with: permute --tool shaderc --name uberprogram \
//     --vert shaders/uberprogram.vert.sc --frag shaders/uberprogram.frag.sc \
//     --define "" --define "COLOR=1"

use anyhow::{bail, Context, Result};
use permute_build::{BuildRequest, VariantBuilder};
use permute_core::cache::DEFAULT_CACHE_DIR;
use permute_core::shader::{TargetBackend, VariantConfig};
use permute_infra::ProcessCompiler;
use std::path::PathBuf;

#[derive(Debug)]
struct CliArgs {
    tool: PathBuf,
    request: BuildRequest,
    variants: Vec<VariantConfig>,
}

fn print_help() {
    println!("Usage: permute --tool <exe> --name <program> --vert <src> --frag <src> [options]");
    println!();
    println!("Options:");
    println!("  --tool <exe>        External shader compiler executable (required)");
    println!("  --name <program>    Logical program name for artifact files (required)");
    println!("  --vert <src>        Vertex-stage source, *.vert.* (required)");
    println!("  --frag <src>        Fragment-stage source, *.frag.* (required)");
    println!("  --include <dir>     Include-search directory (default: src)");
    println!("  --cache <dir>       Artifact cache directory (default: {DEFAULT_CACHE_DIR})");
    println!("  --backend <name>    d3d11 or opengl (default: opengl)");
    println!("  --define <defs>     Variant defines, repeatable; an empty string is");
    println!("                      the base variant (default: one base variant)");
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut tool: Option<PathBuf> = None;
    let mut name: Option<String> = None;
    let mut vert: Option<PathBuf> = None;
    let mut frag: Option<PathBuf> = None;
    let mut include = PathBuf::from("src");
    let mut cache = PathBuf::from(DEFAULT_CACHE_DIR);
    let mut backend = TargetBackend::OpenGl;
    let mut variants: Vec<VariantConfig> = Vec::new();

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let mut value = || {
            iter.next()
                .with_context(|| format!("Missing value for '{flag}'"))
        };
        match flag.as_str() {
            "--tool" => tool = Some(value()?.into()),
            "--name" => name = Some(value()?.clone()),
            "--vert" => vert = Some(value()?.into()),
            "--frag" => frag = Some(value()?.into()),
            "--include" => include = value()?.into(),
            "--cache" => cache = value()?.into(),
            "--backend" => {
                backend = match value()?.as_str() {
                    "d3d11" => TargetBackend::Direct3D11,
                    "opengl" => TargetBackend::OpenGl,
                    other => bail!("Unknown backend '{other}' (expected d3d11 or opengl)"),
                }
            }
            "--define" => variants.push(VariantConfig::new(value()?.clone())),
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => bail!("Unknown argument '{other}' (try --help)"),
        }
    }

    if variants.is_empty() {
        variants.push(VariantConfig::new(""));
    }

    Ok(CliArgs {
        tool: tool.context("Missing required argument '--tool'")?,
        request: BuildRequest {
            program_name: name.context("Missing required argument '--name'")?,
            vertex_source: vert.context("Missing required argument '--vert'")?,
            fragment_source: frag.context("Missing required argument '--frag'")?,
            include_dir: include,
            cache_dir: cache,
            backend,
        },
        variants,
    })
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        print_help();
        return Ok(());
    }
    let cli = parse_args(&args)?;

    let builder = VariantBuilder::new(ProcessCompiler::new(&cli.tool));
    let results = builder.compile_only(&cli.request, &cli.variants);

    let mut failures = 0usize;
    for (config, result) in cli.variants.iter().zip(&results) {
        match result {
            Ok(()) => log::info!("{config}: cached"),
            Err(err) => {
                failures += 1;
                log::error!("{config}: {err}");
            }
        }
    }

    println!(
        "{} of {} variant(s) cached under '{}'",
        results.len() - failures,
        results.len(),
        cli.request.cache_dir.display()
    );
    if failures > 0 {
        bail!("{failures} variant(s) failed to compile");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_a_full_command_line() {
        let cli = parse_args(&strings(&[
            "--tool", "shaderc", "--name", "uberprogram", "--vert",
            "shaders/uberprogram.vert.sc", "--frag", "shaders/uberprogram.frag.sc", "--backend",
            "d3d11", "--define", "", "--define", "COLOR=1",
        ]))
        .unwrap();

        assert_eq!(cli.tool, PathBuf::from("shaderc"));
        assert_eq!(cli.request.program_name, "uberprogram");
        assert_eq!(cli.request.backend, TargetBackend::Direct3D11);
        assert_eq!(cli.request.cache_dir, PathBuf::from(DEFAULT_CACHE_DIR));
        assert_eq!(cli.variants.len(), 2);
        assert!(cli.variants[0].is_empty());
        assert_eq!(cli.variants[1].as_str(), "COLOR=1");
    }

    #[test]
    fn defaults_to_one_base_variant() {
        let cli = parse_args(&strings(&[
            "--tool", "shaderc", "--name", "p", "--vert", "p.vert.sc", "--frag", "p.frag.sc",
        ]))
        .unwrap();
        assert_eq!(cli.variants.len(), 1);
        assert!(cli.variants[0].is_empty());
    }

    #[test]
    fn missing_required_arguments_are_reported() {
        let err = parse_args(&strings(&["--tool", "shaderc"])).unwrap_err();
        assert!(err.to_string().contains("--name"));
    }

    #[test]
    fn unknown_arguments_are_rejected() {
        let err = parse_args(&strings(&["--frobnicate"])).unwrap_err();
        assert!(err.to_string().contains("--frobnicate"));
    }
}
