use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Add #include directives for a new MCU line to the Arduino Core for STM32.",
	after_long_help = "This is a tool to automate some dirty works when adding a new MCU line\nin \
	                   the Arduino Core for STM32. This adds #include preprocessor \
	                   directives\nfor the new MCU line in the following files:\n- \
	                   Arduino_Core_STM32/cores/arduino/stm32/LL/stm32yyxx_ll_xxxx.c\n- \
	                   Arduino_Core_STM32/cores/arduino/stm32/HAL/stm32yyxx_hal_xxxx.c\n\nThe \
	                   user must include necessary HAL drivers \
	                   in\nArduino_Core_STM32/system/Drivers/STM32yyxx_HAL_Driver. It is the \
	                   user's\nresponsibility to review them carefully after running this \
	                   automation tool.\n\nSet MCULINE_LOG=debug to print a diff of every \
	                   patched file."
)]
pub struct MculineCli {
	/// Name of MCU line (e.g. STM32MP1xx)
	pub mcu_line: String,

	/// Path to local git repository of Arduino_Core_STM32
	pub core_path: PathBuf,
}
