use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use super::*;

fn rocks() -> CommandLineGrammar {
	CommandLineGrammar::new("Rocks").unwrap()
}

#[test]
fn parse_plain_invocation() {
	let opts = rocks().parse("Rocks install neorg").unwrap();
	assert_eq!(opts.name, "Rocks");
	assert_eq!(opts.args, "install neorg");
	assert_eq!(opts.fargs, vec!["install", "neorg"]);
	assert!(!opts.bang);
	assert_eq!(opts.range, None);
	assert_eq!(opts.mods, "");
}

#[test]
fn parse_no_args() {
	let opts = rocks().parse("Rocks").unwrap();
	assert_eq!(opts.args, "");
	assert!(opts.fargs.is_empty());
}

#[test]
fn parse_bang_and_visual_range() {
	let opts = rocks().parse("'<,'>Rocks! sync").unwrap();
	assert!(opts.bang);
	assert_eq!(opts.range, Some(LineRange::Two("'<".into(), "'>".into())));
	assert_eq!(opts.count, None);
	assert_eq!(opts.fargs, vec!["sync"]);
}

#[test]
fn parse_numeric_count() {
	let opts = rocks().parse("12Rocks update").unwrap();
	assert_eq!(opts.range, Some(LineRange::One("12".into())));
	assert_eq!(opts.count, Some(12));
}

#[test]
fn parse_whole_buffer() {
	let opts = rocks().parse("%Rocks prune").unwrap();
	assert_eq!(opts.range, Some(LineRange::Whole));
	assert_eq!(opts.range.unwrap().addresses(), 2);
}

#[test]
fn parse_modifiers_are_normalized() {
	let opts = rocks().parse("silent!   vertical  Rocks log").unwrap();
	assert_eq!(opts.mods, "silent! vertical");
	assert_eq!(opts.fargs, vec!["log"]);
}

#[test]
fn parse_trims_trailing_whitespace() {
	let opts = rocks().parse("  Rocks   install  neorg   ").unwrap();
	assert_eq!(opts.args, "install  neorg");
	assert_eq!(opts.fargs, vec!["install", "neorg"]);
}

#[test]
fn parse_keeps_escaped_trailing_space() {
	let opts = rocks().parse(r"Rocks install foo\ ").unwrap();
	assert_eq!(opts.fargs, vec!["install", "foo "]);
	assert_eq!(opts.args, r"install foo\ ");

	let opts = rocks().parse("Rocks install foo\\ \t ").unwrap();
	assert_eq!(opts.fargs, vec!["install", "foo "]);
}

#[test]
fn parse_counted_modifier() {
	let opts = rocks().parse("3tab Rocks sync").unwrap();
	assert_eq!(opts.mods, "3tab");
	assert_eq!(opts.fargs, vec!["sync"]);
	assert_eq!(opts.range, None);
	assert_eq!(rocks().shape("3tab Rocks sy"), Some(CompletionShape::Subcommand { partial: "sy" }));
}

#[test]
fn parse_rejects_other_command() {
	assert!(matches!(rocks().parse("Lazy sync"), Err(CmdlineError::NameMismatch { .. })));
	assert!(matches!(rocks().parse("RocksExtra sync"), Err(CmdlineError::NameMismatch { .. })));
}

#[test]
fn parse_rejects_empty() {
	assert!(matches!(rocks().parse("   "), Err(CmdlineError::Empty)));
}

#[test]
fn parse_respects_disabled_bang_and_range() {
	let strict = rocks().with_bang(false).with_range(false);
	assert!(matches!(strict.parse("Rocks! sync"), Err(CmdlineError::BangNotAllowed(_))));
	assert!(matches!(strict.parse("1,5Rocks sync"), Err(CmdlineError::RangeNotAllowed(_))));
	assert!(strict.parse("Rocks sync").is_ok());
}

#[test]
fn name_is_escaped() {
	let grammar = CommandLineGrammar::new("A.B").unwrap();
	assert!(grammar.parse("A.B x").is_ok());
	assert!(grammar.parse("AxB x").is_err());
}

#[rstest]
#[case::empty_lead("Rocks ", "")]
#[case::partial("Rocks ins", "ins")]
#[case::bang("Rocks! up", "up")]
#[case::range("'<,'>Rocks sy", "sy")]
#[case::extra_space("Rocks    pr", "pr")]
#[case::modifier("silent Rocks i", "i")]
fn subcommand_shape(#[case] line: &str, #[case] partial: &str) {
	assert_eq!(rocks().shape(line), Some(CompletionShape::Subcommand { partial }));
}

#[rstest]
#[case::empty_partial("Rocks install ", "install", "")]
#[case::partial("Rocks install ne", "install", "ne")]
#[case::multiple("Rocks install foo ne", "install", "foo ne")]
#[case::bang_range("1,3Rocks! update  x", "update", "x")]
fn arguments_shape(#[case] line: &str, #[case] key: &str, #[case] partial: &str) {
	assert_eq!(rocks().shape(line), Some(CompletionShape::Arguments { key, partial }));
}

#[rstest]
#[case::bare_name("Rocks")]
#[case::other_command("Lazy ")]
#[case::longer_name("RocksX ")]
#[case::empty("")]
#[case::whitespace("   ")]
fn no_shape(#[case] line: &str) {
	assert_eq!(rocks().shape(line), None);
}

proptest! {
	#[test]
	fn shape_never_panics(line in "\\PC*") {
		let _ = rocks().shape(&line);
	}

	#[test]
	fn parse_never_panics(line in "\\PC*") {
		let _ = rocks().parse(&line);
	}
}
