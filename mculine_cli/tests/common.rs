use std::path::Path;

use assert_cmd::Command;
use mculine_core::AnyEmptyResult;
use mculine_core::AnyResult;

pub fn mculine_cmd() -> Command {
	let mut cmd = Command::cargo_bin("mculine").unwrap_or_else(|e| panic!("mculine binary: {e}"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("MCULINE_LOG");
	cmd
}

/// A core checkout containing every directory a run for `line` needs.
pub fn core_checkout(line: &str) -> AnyResult<tempfile::TempDir> {
	let tmp = tempfile::tempdir()?;

	for dir in [
		format!("system/Drivers/{line}_HAL_Driver/Inc"),
		format!("system/Drivers/{line}_HAL_Driver/Src"),
		"cores/arduino/stm32/HAL".to_string(),
		"cores/arduino/stm32/LL".to_string(),
	] {
		std::fs::create_dir_all(tmp.path().join(dir))?;
	}

	Ok(tmp)
}

pub fn write_file(root: &Path, relative: &str, content: &str) -> AnyEmptyResult {
	std::fs::write(root.join(relative), content)?;
	Ok(())
}
