use super::lexer::Lexer;
use super::Error;
use super::ErrorKind;
use std::io;

const BEGIN: &str = "$MeshFormat";
const END: &str = "$EndMeshFormat";

/// Contents of the `$MeshFormat` section.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MeshFormat {
    pub version: f64,
    pub is_ascii: bool,
    /// `sizeof(size_t)` on the machine that wrote the file.
    pub data_size: usize,
}

fn expect<R: io::BufRead>(lexer: &mut Lexer<R>, marker: &'static str) -> Result<(), Error> {
    let token = lexer.token()?;
    if token != marker {
        let found = token.to_owned();
        return Err(lexer.error(ErrorKind::MalformedHeader {
            expected: marker,
            found,
        }));
    }
    Ok(())
}

/// Reads the `$MeshFormat` section, which must start the input, and checks
/// the file can be decoded.
pub(crate) fn parse<R: io::BufRead>(lexer: &mut Lexer<R>) -> Result<MeshFormat, Error> {
    expect(lexer, BEGIN)?;

    let version = lexer.float()?;
    let file_type = lexer.int::<i64>()?;
    let data_size = lexer.int::<usize>()?;

    // also rejects NaN
    if !(version >= 4.0) {
        return Err(lexer.error(ErrorKind::UnsupportedVersion(version)));
    }
    if file_type != 0 {
        return Err(lexer.error(ErrorKind::UnsupportedEncoding(file_type)));
    }

    expect(lexer, END)?;

    Ok(MeshFormat {
        version,
        is_ascii: true,
        data_size,
    })
}

/// Cheap check on the first bytes of a file.
///
/// Only looks at the first token, use [`read_header`](super::read_header) to
/// know whether the file can actually be decoded.
pub fn test_format(header: &[u8]) -> bool {
    let start = match header.iter().position(|b| !b.is_ascii_whitespace()) {
        Some(v) => v,
        None => return false,
    };
    let header = &header[start..];
    if !header.starts_with(BEGIN.as_bytes()) {
        return false;
    }
    match header.get(BEGIN.len()) {
        Some(b) => b.is_ascii_whitespace(),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(input: &str) -> Result<MeshFormat, Error> {
        parse(&mut Lexer::new(input.as_bytes()))
    }

    #[test]
    fn test_parse() {
        let format = parse_str("$MeshFormat\n4.1 0 8\n$EndMeshFormat\n").unwrap();
        assert_eq!(
            format,
            MeshFormat {
                version: 4.1,
                is_ascii: true,
                data_size: 8,
            },
        );
        assert!(parse_str("$MeshFormat 4 0 4 $EndMeshFormat").is_ok());
    }

    #[test]
    fn test_unsupported_version() {
        let err = parse_str("$MeshFormat\n3.0 0 8\n$EndMeshFormat\n").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::UnsupportedVersion(v) if *v == 3.0));
        assert_eq!(err.lineno(), 2);

        let err = parse_str("$MeshFormat\n2.2 0 8\n$EndMeshFormat\n").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::UnsupportedVersion(_)));

        let err = parse_str("$MeshFormat\nNaN 0 8\n$EndMeshFormat\n").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::UnsupportedVersion(_)));
    }

    #[test]
    fn test_unsupported_encoding() {
        let err = parse_str("$MeshFormat\n4.1 1 8\n$EndMeshFormat\n").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::UnsupportedEncoding(1)));
    }

    #[test]
    fn test_version_checked_before_encoding() {
        let err = parse_str("$MeshFormat\n2.2 1 8\n").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::UnsupportedVersion(_)));
    }

    #[test]
    fn test_malformed() {
        let err = parse_str("$Nodes\n4.1 0 8\n$EndMeshFormat\n").unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::MalformedHeader { expected: "$MeshFormat", found } if found == "$Nodes"
        ));

        let err = parse_str("$MeshFormat\n4.1 0 8\n$Nodes\n").unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::MalformedHeader { expected: "$EndMeshFormat", .. }
        ));
        assert_eq!(err.lineno(), 3);
    }

    #[test]
    fn test_truncated() {
        let err = parse_str("$MeshFormat\n4.1 0").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::TruncatedStream));
        let err = parse_str("").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::TruncatedStream));
    }

    #[test]
    fn test_test_format() {
        assert!(test_format(b"$MeshFormat\n4.1 0 8\n"));
        assert!(test_format(b"\r\n  $MeshFormat"));
        assert!(!test_format(b"$MeshFormatX"));
        assert!(!test_format(b"MeshVersionFormatted 2"));
        assert!(!test_format(b"   "));
    }
}
