//! This module allows to load Gmsh mesh files, as described in the
//! [Gmsh reference manual](https://gmsh.info/doc/texinfo/gmsh.html#MSH-file-format).
//!
//! Only version 4 of the format is supported, in its ASCII encoding.  Only
//! the `$MeshFormat`, `$Nodes` and `$Elements` sections are read, any other
//! section is skipped.

use crate::DecodeOptions;
use std::fs;
use std::io;
use std::path::Path;

pub use element_type::lookup;
pub use element_type::CellKind;
pub use element_type::ElementType;
pub use error::Error;
pub use error::ErrorKind;
pub use header::test_format;
pub use header::MeshFormat;
pub use mesh::Cell;
pub use mesh::CellBlock;
pub use mesh::Mesh;
pub use warning::Section;
pub use warning::TagRange;
pub use warning::TagRangeMismatch;
pub use warning::Warning;

mod element_type;
mod elements;
mod error;
mod header;
mod lexer;
mod mesh;
mod nodes;
mod warning;


/// Upper bound on the number of entries reserved from the counts found in
/// section headers.
pub(crate) const CAPACITY_HINT_LIMIT: usize = 1 << 20;

/// Reads and validates the `$MeshFormat` section at the start of `input`.
pub fn read_header<R: io::BufRead>(input: R) -> Result<MeshFormat, Error> {
    header::parse(&mut lexer::Lexer::new(input))
}

/// Decodes a mesh with default options.
pub fn decode<R: io::BufRead>(input: R) -> Result<Mesh, Error> {
    decode_with(input, &DecodeOptions::default())
}

pub fn decode_with<R: io::BufRead>(input: R, options: &DecodeOptions) -> Result<Mesh, Error> {
    let span = tracing::info_span!("decode msh");
    let _enter = span.enter();

    let mut lexer = lexer::Lexer::new(input);
    let format = header::parse(&mut lexer)?;
    tracing::debug!(version = format.version, "read $MeshFormat section");
    let nodes = nodes::parse(&mut lexer, options)?;
    let elements = elements::parse(&mut lexer, &nodes, options)?;

    Ok(Mesh::assemble(format, nodes, elements))
}

/// Whether the file at `path` starts with a `$MeshFormat` section this crate
/// can decode.
///
/// Only the header is checked, the rest of the file may still be malformed.
pub fn can_decode<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    let file = match fs::File::open(path) {
        Ok(v) => v,
        Err(err) => {
            tracing::debug!("cannot open {}: {}", path.display(), err);
            return false;
        }
    };
    match read_header(io::BufReader::new(file)) {
        Ok(_) => true,
        Err(err) => {
            tracing::debug!("cannot decode {}: {}", path.display(), err);
            false
        }
    }
}

/// Reports a mismatch between the tag range a section header declares and the
/// tags actually found, as an error in strict mode or as a warning otherwise.
fn check_tag_range<R>(
    lexer: &lexer::Lexer<R>,
    options: &DecodeOptions,
    warnings: &mut Vec<Warning>,
    section: Section,
    declared_count: usize,
    declared: TagRange,
    observed: Option<TagRange>,
) -> Result<(), Error>
where
    R: io::BufRead,
{
    let mismatch = match TagRangeMismatch::check(section, declared_count, declared, observed) {
        Some(v) => v,
        None => return Ok(()),
    };
    if options.strict_tag_ranges {
        return Err(lexer.error(ErrorKind::TagRangeMismatch(mismatch)));
    }
    tracing::warn!("{}", mismatch);
    warnings.push(Warning::TagRangeMismatch(mismatch));
    Ok(())
}
