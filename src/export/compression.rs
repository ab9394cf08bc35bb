use std::io::Read;

use crate::export::{ExportError, Result};

const MAX_DECOMPRESSED_BYTES: usize = 256 * 1024 * 1024;
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
/// zstd frame magic used by compressed snapshots.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression mode detected for a snapshot file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
	/// Plain JSON text.
	#[default]
	None,
	/// zstd-compressed JSON.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}
}

/// Detect and decode compression, returning `(mode, decoded_bytes)`.
pub fn decode_bytes(raw: Vec<u8>) -> Result<(Compression, Vec<u8>)> {
	if looks_like_json(&raw) {
		return Ok((Compression::None, strip_bom(raw)));
	}

	if raw.starts_with(&ZSTD_MAGIC) {
		let out = decode_zstd(&raw)?;
		return Ok((Compression::Zstd, strip_bom(out)));
	}

	Err(ExportError::UnknownMagic { magic: first4(&raw) })
}

fn decode_zstd(raw: &[u8]) -> Result<Vec<u8>> {
	let mut decoder = zstd::stream::read::Decoder::new(raw)?;
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf)?;
		if read == 0 {
			break;
		}

		if out.len() + read > MAX_DECOMPRESSED_BYTES {
			return Err(ExportError::DecompressedTooLarge { limit: MAX_DECOMPRESSED_BYTES });
		}

		out.extend_from_slice(&buf[..read]);
	}

	if !looks_like_json(&out) {
		return Err(ExportError::NotJsonAfterDecompress);
	}

	Ok(out)
}

/// A snapshot is a JSON object, so the first significant byte must be `{`.
fn looks_like_json(bytes: &[u8]) -> bool {
	let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
	bytes.iter().find(|byte| !byte.is_ascii_whitespace()) == Some(&b'{')
}

fn strip_bom(mut bytes: Vec<u8>) -> Vec<u8> {
	if bytes.starts_with(UTF8_BOM) {
		bytes.drain(..UTF8_BOM.len());
	}
	bytes
}

fn first4(bytes: &[u8]) -> [u8; 4] {
	let mut magic = [0_u8; 4];
	let take = bytes.len().min(4);
	magic[..take].copy_from_slice(&bytes[..take]);
	magic
}
