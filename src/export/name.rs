/// Object name split on the `<tag>::<rest>` naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedName<'a> {
	/// Text before `::`.
	pub tag: &'a str,
	/// Text after `::`, including any `.NNN` suffix.
	pub rest: &'a str,
}

impl<'a> TaggedName<'a> {
	/// Split `name` on its single `::` separator. Names with zero or several separators do not match.
	pub fn parse(name: &'a str) -> Option<Self> {
		let (tag, rest) = name.split_once("::")?;
		if rest.contains("::") {
			return None;
		}
		Some(Self { tag, rest })
	}

	/// `rest` with the host's duplicate suffix (`.001`) and anything after it removed.
	pub fn base(&self) -> &'a str {
		self.rest.split('.').next().unwrap_or(self.rest)
	}
}

/// Split `text` on `delim` only when it occurs exactly once.
pub(crate) fn split_pair(text: &str, delim: char) -> Option<(&str, &str)> {
	let (left, right) = text.split_once(delim)?;
	if right.contains(delim) {
		return None;
	}
	Some((left, right))
}
