use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum MculineError {
	#[error(transparent)]
	#[diagnostic(code(mculine::io_error))]
	Io(#[from] std::io::Error),

	#[error("{purpose} not found: {path}")]
	#[diagnostic(
		code(mculine::missing_directory),
		help("Please check the correct path to Arduino_Core_STM32.")
	)]
	MissingDirectory { purpose: String, path: String },

	#[error("invalid MCU line name: `{0}`")]
	#[diagnostic(
		code(mculine::invalid_variant),
		help("the MCU line is used as an `#ifdef` symbol, e.g. `STM32MP1xx`")
	)]
	InvalidVariant(String),
}

pub type MculineResult<T> = Result<T, MculineError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
