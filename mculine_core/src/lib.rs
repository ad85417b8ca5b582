//! `mculine_core` wires a new STM32 MCU line into the generic HAL and LL
//! dispatch files of the Arduino core for STM32.
//!
//! Each dispatch file, such as `cores/arduino/stm32/HAL/stm32yyxx_hal_adc.c`,
//! holds one block of conditional includes sorted by MCU line:
//!
//! ```c
//! #ifdef STM32F2xx
//! #include "stm32f2xx_hal_adc.c"
//! #endif
//! #ifdef STM32F4xx
//! #include "stm32f4xx_hal_adc.c"
//! #endif
//! ```
//!
//! ## Processing Pipeline
//!
//! ```text
//! LineConfig (MCU line + core checkout)
//!   → CoreLayout (resolves and verifies the four required directories)
//!   → Scanner (driver files from Inc/Src, dispatch files from HAL/LL)
//!   → Naming (stm32mp1xx_hal_adc.c → stm32yyxx_hal_adc.c)
//!   → Lexer + parser (dispatch file → text and directive segments)
//!   → Engine (insert or replace the directive, rewrite the first run)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mculine_core::LineConfig;
//! use mculine_core::run;
//!
//! let config = LineConfig::new("STM32MP1xx", "../Arduino_Core_STM32").unwrap();
//! let updates = run(&config).unwrap();
//!
//! for missing in &updates.missing_targets {
//!     eprintln!("{} is not found in the target path.", missing.target);
//! }
//! ```

pub use config::*;
pub use engine::*;
pub use error::*;
pub use layout::*;
pub use naming::*;
pub use parser::*;
pub use scanner::*;

pub mod config;
mod engine;
#[allow(unused_assignments)]
mod error;
pub mod layout;
pub(crate) mod lexer;
mod naming;
mod parser;
pub mod scanner;

#[cfg(test)]
mod __fixtures;
