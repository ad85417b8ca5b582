use std::path::Path;

use crate::AnyEmptyResult;
use crate::AnyResult;
use crate::config::DRIVERS_DIR;
use crate::config::HAL_TARGET_DIR;
use crate::config::LL_TARGET_DIR;

/// An empty core checkout with every directory a run for `line` needs.
pub fn core_checkout(line: &str) -> AnyResult<tempfile::TempDir> {
	let tmp = tempfile::tempdir()?;
	let driver = format!("{DRIVERS_DIR}/{line}_HAL_Driver");

	for dir in [
		format!("{driver}/Inc"),
		format!("{driver}/Src"),
		HAL_TARGET_DIR.to_string(),
		LL_TARGET_DIR.to_string(),
	] {
		std::fs::create_dir_all(tmp.path().join(dir))?;
	}

	Ok(tmp)
}

pub fn write_file(root: &Path, relative: &str, content: &str) -> AnyEmptyResult {
	std::fs::write(root.join(relative), content)?;
	Ok(())
}

pub fn read_file(root: &Path, relative: &str) -> AnyResult<String> {
	Ok(std::fs::read_to_string(root.join(relative))?)
}

/// `#ifdef`/`#include`/`#endif` lines for each `(line, file)` pair.
pub fn directive_block(entries: &[(&str, &str)]) -> String {
	entries
		.iter()
		.map(|(line, file)| format!("#ifdef {line}\n#include \"{file}\"\n#endif\n"))
		.collect()
}
