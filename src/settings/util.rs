use std::env;
use std::path::{Path, PathBuf};

/// Expand a leading `~` to `$HOME`. Other paths are returned unchanged.
pub(super) fn expand_home(path: &Path) -> PathBuf {
	let Ok(rest) = path.strip_prefix("~") else {
		return path.to_path_buf();
	};
	match env::var_os("HOME") {
		Some(home) => PathBuf::from(home).join(rest),
		None => path.to_path_buf(),
	}
}

/// Trim a configured string, treating blank values as unset.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_strings_are_unset() {
		assert_eq!(non_blank(Some("  ".into())), None);
		assert_eq!(non_blank(Some(" notes ".into())), Some("notes".into()));
		assert_eq!(non_blank(None), None);
	}

	#[test]
	fn home_prefix_is_expanded() {
		let Some(home) = env::var_os("HOME") else {
			return;
		};
		let expanded = expand_home(Path::new("~/saved/selections.json"));
		assert_eq!(expanded, PathBuf::from(home).join("saved/selections.json"));
		assert_eq!(expand_home(Path::new("/abs/path")), PathBuf::from("/abs/path"));
	}
}
