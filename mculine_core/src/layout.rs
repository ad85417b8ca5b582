use std::path::PathBuf;

use crate::LineConfig;
use crate::MculineError;
use crate::MculineResult;
use crate::config::DRIVERS_DIR;
use crate::config::HAL_TARGET_DIR;
use crate::config::LL_TARGET_DIR;

/// The four directories a run reads from or writes into, resolved against the
/// core checkout and verified to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreLayout {
	/// `system/Drivers`
	pub drivers: PathBuf,
	/// `cores/arduino/stm32/HAL`
	pub hal_target: PathBuf,
	/// `cores/arduino/stm32/LL`
	pub ll_target: PathBuf,
	/// `system/Drivers/<line>_HAL_Driver`
	pub line_driver: PathBuf,
}

impl CoreLayout {
	/// Build the expected paths without touching the filesystem.
	pub fn from_config(config: &LineConfig) -> Self {
		let drivers = config.core_path.join(DRIVERS_DIR);
		let line_driver = drivers.join(config.driver_dir_name());

		Self {
			hal_target: config.core_path.join(HAL_TARGET_DIR),
			ll_target: config.core_path.join(LL_TARGET_DIR),
			drivers,
			line_driver,
		}
	}

	/// Build the expected paths and check each one is a directory. The first
	/// missing one is reported with its purpose.
	pub fn resolve(config: &LineConfig) -> MculineResult<Self> {
		let layout = Self::from_config(config);

		for (path, purpose) in layout.checks(config) {
			if !path.is_dir() {
				tracing::debug!(path = %path.display(), "required directory missing");
				return Err(MculineError::MissingDirectory {
					purpose,
					path: path.display().to_string(),
				});
			}
		}

		Ok(layout)
	}

	/// Target directories in scan order.
	pub fn target_dirs(&self) -> [&PathBuf; 2] {
		[&self.hal_target, &self.ll_target]
	}

	fn checks(&self, config: &LineConfig) -> [(&PathBuf, String); 4] {
		[
			(&self.drivers, "HAL driver path".to_string()),
			(&self.hal_target, "Target Arduino HAL driver path".to_string()),
			(&self.ll_target, "Target Arduino LL driver path".to_string()),
			(&self.line_driver, format!("HAL driver for {}", config.variant)),
		]
	}
}
