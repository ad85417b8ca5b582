mod common;

use mculine_core::AnyEmptyResult;
use rstest::rstest;

#[rstest]
#[case::drivers("system/Drivers", "HAL driver path not found")]
#[case::hal_target("cores/arduino/stm32/HAL", "Target Arduino HAL driver path not found")]
#[case::ll_target("cores/arduino/stm32/LL", "Target Arduino LL driver path not found")]
#[case::line_driver(
	"system/Drivers/STM32MP1xx_HAL_Driver",
	"HAL driver for STM32MP1xx not found"
)]
fn missing_directory_stops_the_run(
	#[case] removed: &str,
	#[case] message: &str,
) -> AnyEmptyResult {
	let tmp = common::core_checkout("STM32MP1xx")?;
	std::fs::remove_dir_all(tmp.path().join(removed))?;

	common::mculine_cmd()
		.arg("STM32MP1xx")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains(message))
		.stderr(predicates::str::contains(
			"Please check the correct path to Arduino_Core_STM32.",
		));

	Ok(())
}

#[test]
fn missing_directory_leaves_dispatch_files_untouched() -> AnyEmptyResult {
	let tmp = common::core_checkout("STM32H7xx")?;
	let dispatch = "#ifdef STM32F2xx\n#include \"stm32f2xx_hal_adc.c\"\n#endif\n";
	common::write_file(
		tmp.path(),
		"cores/arduino/stm32/HAL/stm32yyxx_hal_adc.c",
		dispatch,
	)?;

	common::mculine_cmd()
		.arg("STM32MP1xx")
		.arg(tmp.path())
		.assert()
		.failure();

	let content =
		std::fs::read_to_string(tmp.path().join("cores/arduino/stm32/HAL/stm32yyxx_hal_adc.c"))?;
	assert_eq!(content, dispatch);

	Ok(())
}

#[test]
fn rejects_invalid_line_name() -> AnyEmptyResult {
	let tmp = common::core_checkout("STM32MP1xx")?;

	common::mculine_cmd()
		.arg("STM32 MP1xx")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("invalid MCU line name"));

	Ok(())
}

#[test]
fn requires_both_arguments() {
	common::mculine_cmd()
		.arg("STM32MP1xx")
		.assert()
		.failure()
		.stderr(predicates::str::contains("<CORE_PATH>"));
}

#[test]
fn long_help_explains_the_patched_files() {
	common::mculine_cmd()
		.arg("--help")
		.assert()
		.success()
		.stdout(predicates::str::contains("stm32yyxx_hal_xxxx.c"))
		.stdout(predicates::str::contains("<MCU_LINE>"));
}
