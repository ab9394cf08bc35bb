use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors produced while loading snapshots and writing nTiled documents.
#[derive(Debug, Error)]
pub enum ExportError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Snapshot, config, or output document (de)serialization failure.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Unknown leading snapshot bytes.
	#[error("unsupported compression or not a scene snapshot (magic={magic:?})")]
	UnknownMagic {
		/// First up-to-4 bytes of the stream.
		magic: [u8; 4],
	},
	/// Decompressed stream did not hold a JSON object.
	#[error("decompressed data is not a json snapshot")]
	NotJsonAfterDecompress,
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Alley spawner width token is neither `Big` nor `Small`.
	#[error("width not recognised: {token:?} in {name}")]
	WidthNotRecognised {
		/// Offending width token.
		token: String,
		/// Full anchor object name.
		name: String,
	},
	/// Spawner size field is not a non-negative integer.
	#[error("invalid spawner size {token:?} in {name}")]
	InvalidSpawnerSize {
		/// Offending size token.
		token: String,
		/// Full anchor object name.
		name: String,
	},
	/// Spawner size times sweep density does not fit in a light count.
	#[error("light count overflows for spawner {name} (size {size:?}, density {density:?})")]
	LightCountOverflow {
		/// Full anchor object name.
		name: String,
		/// Decoded per-axis size.
		size: [u32; 3],
		/// Sweep density as `[x, y, z]`.
		density: [u32; 3],
	},
	/// Axis empty referenced by an anchor index is missing from the scene.
	#[error("axis empty not found: {name}")]
	MissingAxisEmpty {
		/// Expected axis empty name.
		name: String,
	},
	/// Spawner radius class has no entry in the radius table.
	#[error("unknown radius class {class:?} for spawner {name}")]
	UnknownRadiusClass {
		/// Class token taken from the anchor name.
		class: String,
		/// Full anchor object name.
		name: String,
	},
	/// Camera rig helper object is missing from the scene.
	#[error("camera rig handle not found: {name}")]
	MissingRigHandle {
		/// Expected helper object name.
		name: String,
	},
	/// Requested built-in profile does not exist.
	#[error("unknown profile: {name}")]
	UnknownProfile {
		/// User-provided profile name.
		name: String,
	},
}
