//! Renders an encoded DAFSA byte array as either a raw byte buffer or a
//! textual C-style array literal (out-of-core collaborator, see
//! `SPEC_FULL.md` §6).

const HEADER: &str = "/* This file is generated. DO NOT EDIT!\n\nThe byte array encodes a dictionary built by dafsa-compiler.*/\n\n";
const ARRAY_NAME: &str = "kDafsa";
const BYTES_PER_LINE: usize = 12;

/// The raw encoded bytes, unchanged. Kept as a named entry point so both
/// output flavours are reached through this module rather than the CLI
/// reaching directly into the byte vector.
pub fn to_binary(bytes: &[u8]) -> Vec<u8> {
    bytes.to_vec()
}

/// Renders `bytes` as a `static const unsigned char` array literal, twelve
/// lowercase hex bytes per line, comma-joined with a single trailing comma.
pub fn to_source_listing(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(HEADER.len() + bytes.len() * 6);
    out.push_str(HEADER);
    out.push_str(&format!(
        "static const unsigned char {}[{}] = {{\n",
        ARRAY_NAME,
        bytes.len()
    ));
    for chunk in bytes.chunks(BYTES_PER_LINE) {
        out.push_str("  ");
        let line = chunk
            .iter()
            .map(|byte| format!("0x{:02x}", byte))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&line);
        out.push_str(",\n");
    }
    out.push_str("};\n");
    out
}
