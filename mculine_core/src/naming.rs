use std::sync::OnceLock;

use regex::Regex;

use crate::config::GENERIC_PREFIX;

/// `<family>_<layer>[_<module>].<ext>`, e.g. `stm32mp1xx_hal_adc_ex.c`.
///
/// The family prefix is greedy and the `.` before the extension matches any
/// character.
fn driver_name_pattern() -> &'static Regex {
	static RE: OnceLock<Regex> = OnceLock::new();
	RE.get_or_init(|| {
		Regex::new(r"^(\S+)_(hal|ll)(_(\S+))?.(c|h)$").expect("invalid driver name regex")
	})
}

/// Derive the generic dispatch file name for a driver file name.
///
/// - `stm32mp1xx_hal_adc_ex.c` → `stm32yyxx_hal_adc_ex.c`
/// - `stm32mp1xx_hal.c` → `stm32yyxx_hal.c`
/// - anything else is returned unchanged
pub fn dispatch_name(source: &str) -> String {
	let Some(captures) = driver_name_pattern().captures(source) else {
		return source.to_string();
	};

	let layer = &captures[2];
	let extension = &captures[5];

	match captures.get(4) {
		Some(module) => format!("{GENERIC_PREFIX}_{layer}_{}.{extension}", module.as_str()),
		None => format!("{GENERIC_PREFIX}_{layer}.{extension}"),
	}
}
