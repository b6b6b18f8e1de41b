//! Render collected entries as a Rust module.

use std::fmt::{self, Write};

use crate::{Error, GenOptions, GeneratedEntry};

/// Emit a module defining `pub static <options.name>: &[AssetEntry]`.
///
/// String fields are written with `{:?}`, which always yields a valid Rust
/// string literal.
pub fn render(entries: &[GeneratedEntry], options: &GenOptions) -> Result<String, Error> {
    validate_name(&options.name)?;

    let mut out = String::new();
    write_module(&mut out, entries, &options.name).map_err(|_| Error::Render {
        name: options.name.clone(),
    })?;
    Ok(out)
}

fn write_module(out: &mut impl Write, entries: &[GeneratedEntry], name: &str) -> fmt::Result {
    writeln!(out, "// Code generated by assetfs-gen. DO NOT EDIT.")?;
    writeln!(out)?;
    writeln!(out, "use assetfs_store::AssetEntry;")?;
    writeln!(out)?;
    writeln!(out, "pub static {}: &[AssetEntry] = &[", name)?;
    for entry in entries {
        write_entry(out, entry)?;
    }
    writeln!(out, "];")
}

fn write_entry(out: &mut impl Write, entry: &GeneratedEntry) -> fmt::Result {
    let path = entry.path.to_string();
    if entry.is_dir {
        return writeln!(
            out,
            "    AssetEntry::dir({:?}, {:?}, {}),",
            path, entry.local, entry.modtime
        );
    }
    writeln!(out, "    AssetEntry {{")?;
    writeln!(out, "        path: {:?},", path)?;
    writeln!(out, "        local: {:?},", entry.local)?;
    writeln!(out, "        size: {},", entry.size)?;
    writeln!(out, "        modtime: {},", entry.modtime)?;
    writeln!(out, "        is_dir: false,")?;
    writeln!(out, "        compressed: {:?},", entry.compressed)?;
    writeln!(out, "    }},")
}

fn validate_name(name: &str) -> Result<(), Error> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && name != "_";
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidName {
            name: name.to_string(),
        })
    }
}
