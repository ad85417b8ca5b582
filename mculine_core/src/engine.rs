use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;

use similar::TextDiff;

use crate::LineConfig;
use crate::MculineResult;
use crate::VariantId;
use crate::layout::CoreLayout;
use crate::naming::dispatch_name;
use crate::parser::first_run;
use crate::parser::parse_segments;
use crate::scanner::ScannedFiles;
use crate::scanner::scan;

/// A driver file with no dispatch file of the derived name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTarget {
	/// The driver file name, e.g. `stm32mp1xx_hal_ipcc.c`.
	pub source: String,
	/// The dispatch file name that was looked for, e.g. `stm32yyxx_hal_ipcc.c`.
	pub target: String,
}

/// A dispatch file and the content it will be written with.
#[derive(Debug, Clone)]
pub struct PatchedFile {
	pub path: PathBuf,
	/// Content as read from disk.
	pub original: String,
	/// Content after every directive for this run was applied.
	pub content: String,
	/// Driver files wired into this dispatch file, in processing order.
	pub sources: Vec<String>,
}

impl PatchedFile {
	pub fn is_changed(&self) -> bool {
		self.original != self.content
	}
}

/// Result of computing the directive updates for an MCU line.
#[derive(Debug, Default)]
pub struct UpdateResult {
	/// Dispatch files in the order they were first matched.
	pub patched_files: Vec<PatchedFile>,
	/// Driver files that had no dispatch file, in processing order.
	pub missing_targets: Vec<MissingTarget>,
}

impl UpdateResult {
	/// Number of dispatch files whose content differs from disk.
	pub fn changed_count(&self) -> usize {
		self.patched_files
			.iter()
			.filter(|file| file.is_changed())
			.count()
	}
}

/// The directive added for `filename` under `variant`.
pub fn render_directive(variant: &VariantId, filename: &str) -> String {
	format!("#ifdef {variant}\n#include \"{filename}\"\n#endif")
}

/// Add or replace the directive for `variant` in a dispatch file's content.
///
/// Every directive in the file is visited in order. The new one goes before
/// the first whose identifier sorts at or after `variant`, or last when none
/// does, and an existing directive for `variant` is dropped. The resulting
/// list replaces the first run of directives only. A file without any
/// directive gets the new one appended.
pub fn insert_directive(content: &str, variant: &VariantId, filename: &str) -> String {
	let segments = parse_segments(content);
	let new_directive = render_directive(variant, filename);
	let mut entries: Vec<&str> = Vec::new();
	let mut inserted = false;

	for directive in segments.iter().filter_map(|segment| segment.as_directive()) {
		if !inserted && variant.as_str() <= directive.identifier {
			entries.push(&new_directive);
			inserted = true;
		}

		if directive.identifier == variant.as_str() {
			continue;
		}

		entries.push(directive.raw);
	}

	if !inserted {
		entries.push(&new_directive);
	}

	let block = entries.join("\n");

	let Some(run) = first_run(&segments) else {
		return append_block(content, &block);
	};

	let mut result = String::with_capacity(content.len() - run.len() + block.len());
	result.push_str(&content[..run.start]);
	result.push_str(&block);
	result.push_str(&content[run.end..]);
	result
}

fn append_block(content: &str, block: &str) -> String {
	let mut result = String::with_capacity(content.len() + block.len() + 2);
	result.push_str(content);

	if !content.is_empty() && !content.ends_with('\n') {
		result.push('\n');
	}

	result.push_str(block);
	result.push('\n');
	result
}

/// Match every driver file of the MCU line to its dispatch file and compute
/// the patched content, without writing anything.
///
/// Driver files are processed in name order. A dispatch file matched by more
/// than one driver file is patched cumulatively.
pub fn compute_updates(layout: &CoreLayout, config: &LineConfig) -> MculineResult<UpdateResult> {
	let ScannedFiles { sources, targets } = scan(layout, config)?;
	let mut result = UpdateResult::default();
	let mut index_by_path: HashMap<PathBuf, usize> = HashMap::new();

	for source in sources.keys() {
		let target = dispatch_name(source);

		let Some(target_path) = targets.get(&target) else {
			tracing::warn!(%source, dispatch = %target, "dispatch file not found in the target path");
			result.missing_targets.push(MissingTarget {
				source: source.clone(),
				target,
			});
			continue;
		};

		tracing::debug!(%source, dispatch = %target, "matched dispatch file");

		let index = if let Some(&index) = index_by_path.get(target_path) {
			index
		} else {
			let original = std::fs::read_to_string(target_path)?;
			result.patched_files.push(PatchedFile {
				path: target_path.clone(),
				content: original.clone(),
				original,
				sources: Vec::new(),
			});
			let index = result.patched_files.len() - 1;
			index_by_path.insert(target_path.clone(), index);
			index
		};

		let file = &mut result.patched_files[index];
		file.content = insert_directive(&file.content, &config.variant, source);
		file.sources.push(source.clone());
	}

	Ok(result)
}

/// Write every patched dispatch file back to disk, in order. Files written
/// before a failure stay written.
pub fn write_updates(updates: &UpdateResult) -> MculineResult<()> {
	for file in &updates.patched_files {
		if tracing::enabled!(tracing::Level::DEBUG) && file.is_changed() {
			tracing::debug!(
				path = %file.path.display(),
				"\n{}",
				unified_diff(&file.path, &file.original, &file.content)
			);
		}

		std::fs::write(&file.path, &file.content)?;
		tracing::info!(path = %file.path.display(), changed = file.is_changed(), "wrote dispatch file");
	}

	Ok(())
}

/// Resolve the core layout, compute every update and write it.
pub fn run(config: &LineConfig) -> MculineResult<UpdateResult> {
	let layout = CoreLayout::resolve(config)?;
	let updates = compute_updates(&layout, config)?;
	write_updates(&updates)?;
	Ok(updates)
}

fn unified_diff(path: &Path, original: &str, content: &str) -> String {
	let name = path.display().to_string();
	TextDiff::from_lines(original, content)
		.unified_diff()
		.context_radius(3)
		.header(&name, &name)
		.to_string()
}
