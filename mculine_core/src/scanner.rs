use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use derive_more::Deref;

use crate::LineConfig;
use crate::MculineResult;
use crate::config::DRIVER_SUBDIRS;
use crate::config::EXCLUDED_HEADER_INFIX;
use crate::config::HEADER_SUBDIR;
use crate::layout::CoreLayout;

/// Files keyed by file name. When the same name is found in more than one
/// scanned directory, the one scanned last wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct FileSet(BTreeMap<String, PathBuf>);

impl FileSet {
	/// Add every plain file in `dir` that passes `keep`.
	fn extend_from_dir(&mut self, dir: &Path, keep: impl Fn(&str) -> bool) -> MculineResult<()> {
		tracing::debug!(dir = %dir.display(), "scanning directory");

		for entry in std::fs::read_dir(dir)? {
			let entry = entry?;
			let path = entry.path();

			if !path.is_file() {
				continue;
			}

			let Some(name) = entry.file_name().to_str().map(ToString::to_string) else {
				tracing::debug!(path = %path.display(), "skipping non UTF-8 file name");
				continue;
			};

			if keep(&name) {
				self.0.insert(name, path);
			}
		}

		Ok(())
	}
}

impl FromIterator<(String, PathBuf)> for FileSet {
	fn from_iter<T: IntoIterator<Item = (String, PathBuf)>>(iter: T) -> Self {
		Self(iter.into_iter().collect())
	}
}

/// Whether a file in the driver's `Inc` directory is a HAL header that the
/// core never dispatches to.
pub fn is_excluded_header(name: &str) -> bool {
	let is_header = Path::new(name)
		.extension()
		.is_some_and(|extension| extension == "h");

	is_header && name.contains(EXCLUDED_HEADER_INFIX)
}

/// Collect the MCU line's driver files from `Inc` then `Src`.
pub fn scan_sources(layout: &CoreLayout) -> MculineResult<FileSet> {
	let mut files = FileSet::default();

	for subdir in DRIVER_SUBDIRS {
		let dir = layout.line_driver.join(subdir);
		let is_header_dir = subdir == HEADER_SUBDIR;
		files.extend_from_dir(&dir, |name| !(is_header_dir && is_excluded_header(name)))?;
	}

	Ok(files)
}

/// Collect the generic dispatch files from the HAL then LL directories.
pub fn scan_targets(layout: &CoreLayout) -> MculineResult<FileSet> {
	let mut files = FileSet::default();

	for dir in layout.target_dirs() {
		files.extend_from_dir(dir, |_| true)?;
	}

	Ok(files)
}

/// Both file sets for a run.
#[derive(Debug, Clone, Default)]
pub struct ScannedFiles {
	pub sources: FileSet,
	pub targets: FileSet,
}

pub fn scan(layout: &CoreLayout, config: &LineConfig) -> MculineResult<ScannedFiles> {
	let sources = scan_sources(layout)?;
	let targets = scan_targets(layout)?;

	tracing::debug!(
		line = %config.variant,
		sources = sources.len(),
		targets = targets.len(),
		"scanned driver and dispatch files"
	);

	Ok(ScannedFiles { sources, targets })
}
