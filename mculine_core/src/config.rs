use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use derive_more::Deref;
use derive_more::Display;

use crate::MculineError;
use crate::MculineResult;

/// Vendor driver trees, relative to the core checkout.
pub const DRIVERS_DIR: &str = "system/Drivers";
/// Generic HAL dispatch files, relative to the core checkout.
pub const HAL_TARGET_DIR: &str = "cores/arduino/stm32/HAL";
/// Generic LL dispatch files, relative to the core checkout.
pub const LL_TARGET_DIR: &str = "cores/arduino/stm32/LL";
/// Suffix appended to the MCU line to name its driver directory, e.g.
/// `STM32MP1xx_HAL_Driver`.
pub const DRIVER_DIR_SUFFIX: &str = "_HAL_Driver";
/// Subdirectories of a driver tree that are scanned, in order.
pub const DRIVER_SUBDIRS: [&str; 2] = ["Inc", "Src"];
/// The subdirectory holding driver headers.
pub const HEADER_SUBDIR: &str = "Inc";
/// Placeholder substituted for the family prefix in dispatch file names.
pub const GENERIC_PREFIX: &str = "stm32yyxx";
/// HAL headers carrying this infix are consumed by the driver itself and
/// never wired into the core.
pub const EXCLUDED_HEADER_INFIX: &str = "_hal_";

/// The name of an MCU line, e.g. `STM32MP1xx`.
///
/// It is written verbatim as the `#ifdef` symbol and doubles as the sort key
/// for directive blocks, so ordering is plain byte-wise string ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref, Display)]
pub struct VariantId(String);

impl VariantId {
	pub fn new(name: impl Into<String>) -> MculineResult<Self> {
		let name = name.into();

		if name.is_empty() || name.chars().any(char::is_whitespace) {
			return Err(MculineError::InvalidVariant(name));
		}

		Ok(Self(name))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl FromStr for VariantId {
	type Err = MculineError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

/// Everything a run needs to know, built once from the command line and
/// passed by reference into every stage.
#[derive(Debug, Clone)]
pub struct LineConfig {
	/// The MCU line being added.
	pub variant: VariantId,
	/// Root of the local `Arduino_Core_STM32` checkout.
	pub core_path: PathBuf,
}

impl LineConfig {
	pub fn new(variant: impl Into<String>, core_path: impl AsRef<Path>) -> MculineResult<Self> {
		Ok(Self {
			variant: VariantId::new(variant)?,
			core_path: core_path.as_ref().to_path_buf(),
		})
	}

	/// Name of the vendor driver directory for this MCU line.
	pub fn driver_dir_name(&self) -> String {
		format!("{}{DRIVER_DIR_SUFFIX}", self.variant)
	}
}
